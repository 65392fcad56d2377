use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blurring::domain::blur_quality::BlurQuality;

const SETTINGS_DIR: &str = "glassblur";
const SETTINGS_FILE: &str = "settings.json";

/// Default blur extent for backdrops, in pixels.
pub const DEFAULT_RADIUS: f32 = 15.0;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to access settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User defaults for the blur CLI, persisted as JSON.
///
/// Unknown or missing fields fall back to their defaults so older files
/// keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurSettings {
    pub radius: f32,
    pub quality: BlurQuality,
    /// When set, a glass tint of this intensity (0-1) follows a liquid blur.
    pub backdrop_intensity: Option<f32>,
    /// Use the two-stage depth backdrop instead of the single glass backdrop.
    pub depth: bool,
}

impl Default for BlurSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            quality: BlurQuality::default(),
            backdrop_intensity: None,
            depth: false,
        }
    }
}

impl BlurSettings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable. `None` uses the platform config directory.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Self::default(),
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings: {e}");
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    /// Save to `path`, or to the platform config directory when `None`.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, SettingsError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(Self::default_path)
            .ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }
}
