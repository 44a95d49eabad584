use crate::app::AppState;
use crate::domain::ActiveTab;
use crate::ui::theme::palette;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the active tab
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.active_tab {
        ActiveTab::Tasks => {
            " ↑/↓ select   Space toggle done   a add   x delete   Tab/1-3 tabs   q quit"
        }
        ActiveTab::Pomodoro => {
            " s start   e stop   p pause   r resume   Tab/1-3 tabs   q quit"
        }
        ActiveTab::Settings => " t cycle theme   Tab/1-3 tabs   q quit",
    };

    let colors = palette(app.settings.theme);
    let paragraph = Paragraph::new(Line::raw(hints)).style(colors.hint_style());
    f.render_widget(paragraph, area);
}
