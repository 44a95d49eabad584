use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task record as stored in tasks.json.
///
/// Every optional field is defaulted on load, so records written by older
/// versions (or trimmed by hand) always come back as complete tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID for internal references, generated when absent in the file
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default = "default_title")]
    pub title: String,
    /// Course or subject the task belongs to
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Due date, naive because tasks are day-granular
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
}

fn default_title() -> String {
    "Untitled".to_string()
}

impl Task {
    pub fn new(
        title: &str,
        subject: Option<String>,
        description: Option<String>,
        deadline: Option<NaiveDate>,
    ) -> Self {
        let title = title.trim();
        Self {
            id: Uuid::new_v4(),
            title: if title.is_empty() {
                default_title()
            } else {
                title.to_string()
            },
            subject,
            description,
            deadline,
            done: false,
        }
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }
}
