//! Config file discovery and layered merging.
//!
//! Resolution order (later overrides earlier):
//! 1. `config.toml` in the user config dir (`MUSTER_CONFIG_DIR` or platform default)
//! 2. `./muster.toml` (project-local)
//! 3. CLI flags and environment variables (handled by the binary)

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ConfigError, MusterConfig, Result};

/// Config filename for project-local config.
pub const PROJECT_CONFIG_FILE: &str = "muster.toml";

/// Config filename within the user config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application name for platform directory resolution.
const APP_NAME: &str = "muster";

/// Environment variable to override the config directory.
const CONFIG_DIR_ENV: &str = "MUSTER_CONFIG_DIR";

/// Tracks where each config layer was loaded from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the config file.
    pub path: PathBuf,
    /// Whether the file was found and loaded.
    pub loaded: bool,
}

/// Result of config discovery and loading.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The merged configuration.
    pub config: MusterConfig,
    /// Sources that were checked, lowest precedence first.
    pub sources: Vec<ConfigSource>,
    /// Warnings generated during loading (malformed layers, plaintext tokens).
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Get paths of sources that were actually loaded.
    pub fn loaded_from(&self) -> Vec<&Path> {
        self.sources
            .iter()
            .filter(|s| s.loaded)
            .map(|s| s.path.as_path())
            .collect()
    }
}

/// Load configuration by discovering and merging all config layers.
pub fn load_config(project_dir: Option<&Path>) -> Result<LoadedConfig> {
    load_config_with_options(project_dir, None)
}

/// Load configuration with explicit control over the user config directory.
///
/// `config_dir` overrides both `MUSTER_CONFIG_DIR` and the platform default.
pub fn load_config_with_options(
    project_dir: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<LoadedConfig> {
    let mut config = MusterConfig::new();
    let mut sources = Vec::new();
    let mut warnings = Vec::new();

    let user_config_path = match config_dir {
        Some(dir) => Some(dir.join(USER_CONFIG_FILE)),
        None => xdg_config_path(),
    };
    if let Some(path) = user_config_path {
        sources.push(load_layer(&mut config, &path, &mut warnings));
    }

    let project_path = project_dir
        .map(|d| d.join(PROJECT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    sources.push(load_layer(&mut config, &project_path, &mut warnings));

    if config.has_plaintext_token() {
        warnings.push(
            "[auth] contains a plaintext token. \
             Consider token_file or token_env instead."
                .to_string(),
        );
    }

    Ok(LoadedConfig {
        config,
        sources,
        warnings,
    })
}

/// Load config from a specific file path (no discovery).
pub fn load_config_file(path: &Path) -> Result<MusterConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    MusterConfig::from_toml(&contents)
}

/// Save configuration to a file, creating parent directories.
pub fn save_config(config: &MusterConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let contents = config.to_toml()?;
    std::fs::write(path, contents).map_err(|e| ConfigError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Get the user config file path.
pub fn xdg_config_path() -> Option<PathBuf> {
    xdg_config_dir().map(|d| d.join(USER_CONFIG_FILE))
}

/// Get the user config directory for muster.
///
/// Checks `MUSTER_CONFIG_DIR` first, then falls back to the platform default.
pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Try to load a config file and merge it into the existing config.
///
/// Missing files are skipped silently; unreadable or malformed ones add a
/// warning and are skipped.
fn load_layer(config: &mut MusterConfig, path: &Path, warnings: &mut Vec<String>) -> ConfigSource {
    if !path.is_file() {
        return ConfigSource {
            path: path.to_path_buf(),
            loaded: false,
        };
    }

    match load_config_file(path) {
        Ok(layer) => {
            debug!(path = %path.display(), "loaded config layer");
            config.merge(layer);
            ConfigSource {
                path: path.to_path_buf(),
                loaded: true,
            }
        }
        Err(e) => {
            warnings.push(format!("Failed to load {}: {}", path.display(), e));
            ConfigSource {
                path: path.to_path_buf(),
                loaded: false,
            }
        }
    }
}
