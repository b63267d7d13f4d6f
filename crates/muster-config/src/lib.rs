//! Configuration system for the Muster coordination client.
//!
//! Provides TOML-based configuration with:
//! - Config file layering (user config dir + project-local `muster.toml`)
//! - Field-wise merging so later layers only override what they set
//! - Bearer token resolution (file → env var → inline)
//! - Validation of server URL, timeout and project ID

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    ConfigSource, LoadedConfig, PROJECT_CONFIG_FILE, load_config, load_config_file,
    load_config_with_options, save_config, xdg_config_dir, xdg_config_path,
};
pub use error::{ConfigError, Result};
pub use types::*;
