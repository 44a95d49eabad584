pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod settings_pane;
pub mod tabs;
pub mod task_pane;
pub mod theme;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::ActiveTab;
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use settings_pane::render_settings_pane;
use tabs::render_tabs;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header(f, app, layout.header_area);
    render_tabs(f, app, layout.tabs_area);

    match app.active_tab {
        ActiveTab::Tasks => render_task_pane(f, app, layout.content_area),
        ActiveTab::Pomodoro => render_timer_pane(f, app, layout.content_area),
        ActiveTab::Settings => render_settings_pane(f, app, layout.content_area),
    }

    render_keybindings(f, app, layout.keybindings_area);

    // The add-task form floats above everything else
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
