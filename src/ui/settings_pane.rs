use crate::app::AppState;
use crate::domain::ThemeName;
use crate::ui::theme::palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the Settings tab: theme picker plus the configured durations
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let colors = palette(app.settings.theme);

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled("  Theme", colors.title_style())),
        Line::raw(""),
    ];

    for theme in ThemeName::ALL {
        let marker = if theme == app.settings.theme {
            "  ● "
        } else {
            "  ○ "
        };
        let style = if theme == app.settings.theme {
            colors.title_style()
        } else {
            colors.default_style()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(theme.label(), style),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("  Timer", colors.title_style())));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  Work {} min · Break {} min (set with --work-minutes / --break-minutes)",
            app.settings.work_minutes, app.settings.break_minutes
        ),
        colors.default_style(),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Press 't' to cycle themes. The choice is saved immediately.",
        colors.hint_style(),
    )));

    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" ⚙ Settings ", colors.title_style()))
            .border_style(colors.border_style()),
    );

    f.render_widget(pane, area);
}
