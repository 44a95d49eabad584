use crate::app::{AppState, FormField};
use crate::ui::{layout::create_modal_area, theme::palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add-task form
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };
    let colors = palette(app.settings.theme);
    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    let field = |label: &str, value: &str, this: FormField, active: FormField| -> Vec<Line<'static>> {
        let editing = this == active;
        let label_line = if editing {
            Line::raw(format!("{}: (editing)", label))
        } else {
            Line::raw(format!("{}:", label))
        };
        let mut spans = vec![
            Span::raw("> "),
            Span::styled(value.to_string(), colors.modal_title_style()),
        ];
        if editing {
            spans.push(Span::styled("█", colors.modal_title_style())); // Cursor
        }
        vec![label_line, Line::from(spans), Line::raw("")]
    };

    lines.push(Line::raw(""));
    lines.extend(field("Title", &form.title, FormField::Title, form.editing_field));
    lines.extend(field(
        "Subject",
        &form.subject,
        FormField::Subject,
        form.editing_field,
    ));
    lines.extend(field(
        "Description",
        &form.description,
        FormField::Description,
        form.editing_field,
    ));
    lines.extend(field(
        "Deadline (YYYY-MM-DD, optional)",
        &form.deadline,
        FormField::Deadline,
        form.editing_field,
    ));

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), colors.error_style())));
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw(
        "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel",
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add Task ", colors.modal_title_style()))
                .style(colors.modal_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
