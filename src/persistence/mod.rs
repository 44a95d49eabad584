pub mod files;
pub mod settings;
pub mod store;

pub use files::{
    atomic_write, ensure_data_dir, get_data_dir, init_local_dir, read_file, settings_file,
    tasks_file,
};
pub use settings::{load_settings, save_settings, Settings};
pub use store::{load_tasks, save_tasks};
