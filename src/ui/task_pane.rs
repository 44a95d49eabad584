use crate::app::AppState;
use crate::domain::{deadline_status, format_date, DeadlineStatus, Task};
use crate::ui::theme::{palette, Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Build the deadline span for a task row, colored by how urgent it is
fn deadline_span(task: &Task, colors: &Palette) -> Span<'static> {
    let status = deadline_status(task.deadline);
    let text = format_date(task.deadline);
    match status {
        DeadlineStatus::Overdue => {
            Span::styled(format!("📌 {} (Overdue)", text), colors.overdue_style())
        }
        DeadlineStatus::Today => {
            Span::styled(format!("📅 {} (Today)", text), colors.today_style())
        }
        DeadlineStatus::Upcoming => Span::styled(format!("📅 {}", text), colors.upcoming_style()),
        DeadlineStatus::None => Span::styled(text, colors.hint_style()),
    }
}

fn task_row(task: &Task, selected: bool, colors: &Palette) -> ListItem<'static> {
    let checkbox = if task.done { "[x] " } else { "[ ] " };

    let title_style = if task.done {
        colors.done_style()
    } else if selected {
        colors.selected_style()
    } else {
        colors.default_style()
    };

    let mut spans = vec![
        Span::styled(checkbox.to_string(), colors.default_style()),
        Span::styled(task.title.clone(), title_style),
    ];
    if let Some(subject) = &task.subject {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("[{}]", subject), colors.subject_style()));
    }
    spans.push(Span::raw("  "));
    spans.push(deadline_span(task, colors));

    let mut lines = vec![Line::from(spans)];
    if selected {
        if let Some(description) = &task.description {
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled(description.clone(), colors.hint_style()),
            ]));
        }
    }

    ListItem::new(lines)
}

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let colors = palette(app.settings.theme);

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| task_row(task, i == app.selected_index, &colors))
        .collect();

    let open_count = app.tasks.iter().filter(|t| !t.done).count();
    let title = format!(" 📝 Your Tasks ({} open) ", open_count);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, colors.title_style()))
            .border_style(colors.border_style()),
    );

    f.render_widget(list, area);

    if app.tasks.is_empty() {
        let empty = ratatui::widgets::Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Press 'a' to add one.",
            colors.hint_style(),
        )));
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 2,
            width: area.width.saturating_sub(4),
            height: 1,
        };
        if inner.width > 0 && area.height > 3 {
            f.render_widget(empty, inner);
        }
    }
}
