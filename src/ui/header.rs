use crate::app::AppState;
use crate::domain::greeting_line;
use crate::ui::theme::palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render the greeting banner across the top of the screen
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let colors = palette(app.settings.theme);
    let today = chrono::Local::now().format("%A, %d %b %Y").to_string();

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("{}   ·   {}", greeting_line(), today)),
    ];

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(colors.header_style());

    f.render_widget(banner, area);
}
