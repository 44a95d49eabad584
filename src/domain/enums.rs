use serde::{Deserialize, Serialize};

/// Color theme for the whole interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeName {
    LightBlue,
    DarkBlue,
    Pink,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [Self::LightBlue, Self::DarkBlue, Self::Pink];

    /// Display name shown in the Settings tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::LightBlue => "Light Blue",
            Self::DarkBlue => "Dark Blue",
            Self::Pink => "Pink",
        }
    }

    /// Cycle to the next theme in order
    pub fn next(&self) -> Self {
        match self {
            Self::LightBlue => Self::DarkBlue,
            Self::DarkBlue => Self::Pink,
            Self::Pink => Self::LightBlue,
        }
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        Self::LightBlue
    }
}

/// Which tab is active in the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Tasks,
    Pomodoro,
    Settings,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [Self::Tasks, Self::Pomodoro, Self::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Pomodoro => "Pomodoro",
            Self::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Tasks => 0,
            Self::Pomodoro => 1,
            Self::Settings => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Tasks => Self::Pomodoro,
            Self::Pomodoro => Self::Settings,
            Self::Settings => Self::Tasks,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}
