use crate::app::AppState;
use crate::domain::{ActiveTab, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Keys that work regardless of tab
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Tab => {
            app.next_tab();
            return Ok(false);
        }
        KeyCode::Char('1') => {
            app.set_tab(ActiveTab::Tasks);
            return Ok(false);
        }
        KeyCode::Char('2') => {
            app.set_tab(ActiveTab::Pomodoro);
            return Ok(false);
        }
        KeyCode::Char('3') => {
            app.set_tab(ActiveTab::Settings);
            return Ok(false);
        }
        _ => {}
    }

    match app.active_tab {
        ActiveTab::Tasks => handle_tasks_tab(app, key),
        ActiveTab::Pomodoro => handle_pomodoro_tab(app, key),
        ActiveTab::Settings => handle_settings_tab(app, key),
    }
}

fn handle_tasks_tab(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_form(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
    Ok(false)
}

fn handle_pomodoro_tab(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('s') => app.start_timer(),
        KeyCode::Char('S') | KeyCode::Char('e') | KeyCode::Char('E') => app.stop_timer(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.pause_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.resume_timer(),
        _ => {}
    }
    Ok(false)
}

fn handle_settings_tab(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while the add-task form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab => {
            if let Some(form) = &mut app.input_form {
                form.editing_field = form.editing_field.next();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.input_form {
                form.active_value_mut().pop();
                form.error = None;
            }
        }
        KeyCode::Char(c) => {
            // Ctrl-modified characters are shortcuts, not text
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                if let Some(form) = &mut app.input_form {
                    form.active_value_mut().push(c);
                    form.error = None;
                }
            }
        }
        _ => {}
    }
    Ok(false)
}
