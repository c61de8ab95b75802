//! Editor settings - visual and hit-testing tunables.
//!
//! Settings cover presentation concerns only (handle metrics, colors). The
//! 0.05 minimum mask size is a geometry invariant shared with the comparison
//! backend, not a setting.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{
    HANDLE_FILL, HANDLE_HIT_RADIUS, HANDLE_SIZE, MANIPULATION_OUTLINE, MASK_FILL, OUTLINE_WIDTH,
};
use crate::types::Color;

/// Errors that can occur loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables for hit testing and rendering. Unknown fields in a settings file
/// are ignored; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Hit radius in pixels for handle zones.
    pub handle_hit_radius: f32,
    /// Side length in pixels of the drawn handle squares.
    pub handle_size: f32,
    /// Line width of the manipulation outline.
    pub outline_width: f32,
    pub mask_fill: Color,
    pub outline_color: Color,
    pub handle_fill: Color,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            handle_hit_radius: HANDLE_HIT_RADIUS,
            handle_size: HANDLE_SIZE,
            outline_width: OUTLINE_WIDTH,
            mask_fill: MASK_FILL,
            outline_color: MANIPULATION_OUTLINE,
            handle_fill: HANDLE_FILL,
        }
    }
}

impl EditorSettings {
    /// Load settings, falling back to defaults on a missing or unreadable
    /// file. Hosts that need the error use [`EditorSettings::try_load`].
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        Self::try_load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "failed to load settings, using defaults");
            Self::default()
        })
    }

    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
