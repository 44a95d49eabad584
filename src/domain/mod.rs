pub mod dates;
pub mod enums;
pub mod task;

pub use dates::{deadline_status, format_date, greeting_line, DeadlineStatus};
pub use enums::{ActiveTab, ThemeName, UiMode};
pub use task::Task;
