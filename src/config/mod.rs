use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read dialog config: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse dialog config")]
    Parse(#[from] serde_json::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

const APP_DIR: &str = "annotation-dialog";
const APP_CONFIG_FILE: &str = "config.json";

/// Tuning constants for dialog placement. None of these are structural; they
/// mirror the stylesheet the rendering layer ships with.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Horizontal half-width of the caret; the caret never sits closer than
    /// this to either dialog edge.
    pub caret_half_width: f64,
    /// Height of the point annotation icon the dialog hangs off.
    pub icon_height: f64,
    /// Height of the dot at the tip of the point annotation icon.
    pub icon_dot_height: f64,
    /// Share of the container height a dialog may occupy.
    pub max_height_ratio: f64,
    /// Vertical padding subtracted after applying `max_height_ratio`.
    pub chrome_allowance: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            caret_half_width: 10.0,
            icon_height: 31.0,
            icon_dot_height: 8.0,
            max_height_ratio: 0.5,
            chrome_allowance: 30.0,
        }
    }
}

/// Dialog settings from `config.json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct DialogConfig {
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub debug_logging: bool,
}

pub fn load_dialog_config() -> DialogConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_dialog_config_with(xdg_config_home.as_deref(), home.as_deref())
}

pub fn load_dialog_config_from(path: &Path) -> ConfigResult<DialogConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

fn load_dialog_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> DialogConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return DialogConfig::default(),
    };
    if !path.exists() {
        return DialogConfig::default();
    }
    load_dialog_config_from(&path).unwrap_or_else(|err| {
        tracing::warn!(?err, ?path, "failed to load config.json; using defaults");
        DialogConfig::default()
    })
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
