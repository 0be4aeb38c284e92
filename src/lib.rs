//! Placement, validation and visibility engine for annotation dialogs
//! anchored to points, highlights and drawings on a document page.

mod config;
pub mod dialog;
pub mod error;
pub mod geometry;
pub mod input;
pub mod location;
pub mod logging;
pub mod notification;
pub mod placement;
pub mod state;
pub mod thread;

use std::path::Path;

pub use config::{
    load_dialog_config, load_dialog_config_from, ConfigError, ConfigResult, DialogConfig,
    PlacementConfig,
};
pub use dialog::{AnnotationDialog, DialogFrame, DialogOptions, DialogSettings};
pub use error::{DialogError, DialogResult};

/// Loads the user's dialog config and installs logging accordingly.
pub fn init() -> DialogConfig {
    let config = load_dialog_config();
    logging::init(config.debug_logging);
    tracing::info!(debug_logging = config.debug_logging, "annotation dialog engine ready");
    config
}

/// Like [`init`], but reads an explicit config file and fails when it is
/// unreadable or malformed.
pub fn init_from(path: &Path) -> DialogResult<DialogConfig> {
    let config = load_dialog_config_from(path)?;
    logging::init(config.debug_logging);
    tracing::info!(path = %path.display(), "annotation dialog engine ready");
    Ok(config)
}
