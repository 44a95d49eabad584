use crate::app::AppState;
use crate::domain::ActiveTab;
use crate::ui::theme::palette;
use ratatui::{layout::Rect, text::Line, widgets::Tabs, Frame};

/// Render the Tasks / Pomodoro / Settings tab bar
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let colors = palette(app.settings.theme);

    let titles: Vec<Line> = ActiveTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::raw(format!(" {} {} ", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(colors.hint_style())
        .highlight_style(colors.title_style())
        .divider("|");

    f.render_widget(tabs, area);
}
