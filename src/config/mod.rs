//! Configuration loading and types

mod settings;
mod types;

pub use settings::{default_config_path, load_settings};
pub use types::{ApiSettings, Settings, UiSettings};
