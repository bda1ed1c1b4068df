//! Configuration file parsing for Vastu Desk
//!
//! Supports:
//! - `<config_dir>/vastu-desk/config.toml` - Global settings
//! - An explicit file given on the command line

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, validate_backend_url, CONFIG_FILENAME,
};
pub use types::*;
