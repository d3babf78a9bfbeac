//! Centralized camera tuning with TOML preset support.
//!
//! All tweakable settings (projection, movement/look tuning, key
//! bindings) are consolidated here. Options serialize to/from TOML so
//! hosts can ship editable preset files.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Movement key bindings.
    pub bindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed). Parent directories
    /// are created as needed.
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }
}
