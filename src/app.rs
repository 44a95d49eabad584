use crate::domain::{ActiveTab, Task, UiMode};
use crate::notifications;
use crate::persistence::{self, Settings};
use crate::timer::{SessionTimer, TimerEvent, TimerHooks};
use anyhow::Result;
use chrono::NaiveDate;
use std::sync::mpsc::{channel, Receiver};

/// Field currently being edited in the add-task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Subject,
    Description,
    Deadline,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Subject,
            Self::Subject => Self::Description,
            Self::Description => Self::Deadline,
            Self::Deadline => Self::Title,
        }
    }
}

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub deadline: String, // YYYY-MM-DD, parsed on submit
    pub editing_field: FormField,
    pub error: Option<String>,
}

impl InputFormState {
    fn new() -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            description: String::new(),
            deadline: String::new(),
            editing_field: FormField::Title,
            error: None,
        }
    }

    /// Mutable access to whichever field the cursor is in
    pub fn active_value_mut(&mut self) -> &mut String {
        match self.editing_field {
            FormField::Title => &mut self.title,
            FormField::Subject => &mut self.subject,
            FormField::Description => &mut self.description,
            FormField::Deadline => &mut self.deadline,
        }
    }
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub active_tab: ActiveTab,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub settings: Settings,
    pub timer: SessionTimer,
    timer_events: Receiver<TimerEvent>,
    /// Latest MM:SS delivered by the timer, what the clock pane shows
    pub timer_display: String,
    pub status_message: Option<String>,
    pub needs_save: bool,
    pub settings_need_save: bool,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, settings: Settings) -> Result<Self> {
        let (tx, rx) = channel();
        let timer = SessionTimer::new(
            settings.work_minutes,
            settings.break_minutes,
            TimerHooks::channel(tx),
        )?;
        let timer_display = timer.display();

        Ok(Self {
            tasks,
            selected_index: 0,
            active_tab: ActiveTab::Tasks,
            ui_mode: UiMode::Normal,
            input_form: None,
            settings,
            timer,
            timer_events: rx,
            timer_display,
            status_message: None,
            needs_save: false,
            settings_need_save: false,
        })
    }

    /// Apply everything the countdown thread has reported since the last
    /// event-loop iteration. Called once per loop, before rendering.
    pub fn drain_timer_events(&mut self) {
        while let Ok(event) = self.timer_events.try_recv() {
            match event {
                TimerEvent::Tick(display) => self.timer_display = display,
                TimerEvent::PhaseComplete(label) => {
                    self.status_message = Some(format!("{} complete!", label));
                    notifications::notify_phase_complete(&label);
                }
            }
        }
    }

    // --- Timer controls ---

    pub fn start_timer(&mut self) {
        self.status_message = None;
        self.timer.start();
    }

    pub fn stop_timer(&mut self) {
        self.status_message = None;
        self.timer.stop();
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    pub fn resume_timer(&mut self) {
        self.timer.resume();
    }

    // --- Tab and theme ---

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    pub fn cycle_theme(&mut self) {
        self.settings.theme = self.settings.theme.next();
        self.settings_need_save = true;
    }

    // --- Task list ---

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.selected_index) {
            task.toggle_done();
            self.needs_save = true;
        }
    }

    pub fn delete_selected(&mut self) {
        if self.selected_index < self.tasks.len() {
            self.tasks.remove(self.selected_index);
            if self.selected_index >= self.tasks.len() && self.selected_index > 0 {
                self.selected_index -= 1;
            }
            self.needs_save = true;
        }
    }

    // --- Add-task form ---

    pub fn open_add_form(&mut self) {
        self.input_form = Some(InputFormState::new());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn cancel_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Validate and commit the form. An unparsable deadline keeps the form
    /// open with an error line instead of dropping the input.
    pub fn submit_form(&mut self) {
        let Some(form) = &mut self.input_form else {
            return;
        };

        let deadline_text = form.deadline.trim();
        let deadline = if deadline_text.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(deadline_text, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    form.error = Some("Invalid deadline, use YYYY-MM-DD".to_string());
                    return;
                }
            }
        };

        let subject = non_empty(&form.subject);
        let description = non_empty(&form.description);
        let task = Task::new(&form.title, subject, description, deadline);

        self.tasks.push(task);
        self.selected_index = self.tasks.len() - 1;
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
        self.needs_save = true;
    }

    // --- Persistence ---

    pub fn save(&mut self) -> Result<()> {
        persistence::save_tasks(persistence::tasks_file()?, &self.tasks)?;
        self.needs_save = false;
        Ok(())
    }

    pub fn save_settings(&mut self) -> Result<()> {
        persistence::save_settings(persistence::settings_file()?, &self.settings)?;
        self.settings_need_save = false;
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeName;
    use pretty_assertions::assert_eq;

    fn app_with(titles: &[&str]) -> AppState {
        let tasks = titles
            .iter()
            .map(|t| Task::new(t, None, None, None))
            .collect();
        AppState::new(tasks, Settings::default()).unwrap()
    }

    #[test]
    fn test_initial_display_matches_settings() {
        let app = app_with(&[]);
        assert_eq!(app.timer_display, "25:00");
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut app = app_with(&["a", "b"]);
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_toggle_and_delete_mark_dirty() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected_index = 2;
        app.toggle_selected();
        assert!(app.tasks[2].done);
        assert!(app.needs_save);

        app.delete_selected();
        assert_eq!(app.tasks.len(), 2);
        // Selection falls back onto the new last row
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let mut app = app_with(&[]);
        app.delete_selected();
        assert!(app.tasks.is_empty());
        assert!(!app.needs_save);
    }

    #[test]
    fn test_submit_form_creates_task() {
        let mut app = app_with(&[]);
        app.open_add_form();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        let form = app.input_form.as_mut().unwrap();
        form.title = "Revise notes".to_string();
        form.subject = "Physics".to_string();
        form.deadline = "2026-09-15".to_string();
        app.submit_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Revise notes");
        assert_eq!(app.tasks[0].subject.as_deref(), Some("Physics"));
        assert_eq!(
            app.tasks[0].deadline,
            NaiveDate::from_ymd_opt(2026, 9, 15)
        );
        assert!(app.needs_save);
    }

    #[test]
    fn test_submit_form_rejects_bad_deadline() {
        let mut app = app_with(&[]);
        app.open_add_form();
        let form = app.input_form.as_mut().unwrap();
        form.title = "Task".to_string();
        form.deadline = "next tuesday".to_string();
        app.submit_form();

        // Form stays open with an error, nothing committed
        let form = app.input_form.as_ref().unwrap();
        assert!(form.error.is_some());
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_form_field_cycle() {
        let mut form = InputFormState::new();
        assert_eq!(form.editing_field, FormField::Title);
        form.editing_field = form.editing_field.next();
        assert_eq!(form.editing_field, FormField::Subject);
        form.active_value_mut().push('P');
        assert_eq!(form.subject, "P");
    }

    #[test]
    fn test_cycle_theme_marks_settings_dirty() {
        let mut app = app_with(&[]);
        assert_eq!(app.settings.theme, ThemeName::LightBlue);
        app.cycle_theme();
        assert_eq!(app.settings.theme, ThemeName::DarkBlue);
        assert!(app.settings_need_save);
    }

    #[test]
    fn test_stop_delivers_reset_display_through_events() {
        let mut app = app_with(&[]);
        // stop() fires the tick hook synchronously even when idle
        app.timer_display = "13:37".to_string();
        app.stop_timer();
        app.drain_timer_events();
        assert_eq!(app.timer_display, "25:00");
    }

    #[test]
    fn test_tab_switching() {
        let mut app = app_with(&[]);
        assert_eq!(app.active_tab, ActiveTab::Tasks);
        app.next_tab();
        assert_eq!(app.active_tab, ActiveTab::Pomodoro);
        app.set_tab(ActiveTab::Settings);
        assert_eq!(app.active_tab, ActiveTab::Settings);
    }
}
