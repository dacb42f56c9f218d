//! Configuration file parsing for Servana
//!
//! Supports `<config_dir>/servana/config.toml` or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, read_settings};
pub use types::*;
