//! Main window geometry persisted between sessions.

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// Stored as JSON in the user's config directory
/// (e.g., `~/.config/ez-paster/window.json` on Linux).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Outer top-left corner in screen points, if known.
    #[serde(default)]
    pub position: Option<[f32; 2]>,
    #[serde(default = "default_size")]
    pub size: [f32; 2],
}

fn default_size() -> [f32; 2] {
    DEFAULT_WINDOW_SIZE
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            position: None,
            size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl WindowSettings {
    /// Creates the config directory if it doesn't exist.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ez-paster").map(|dirs| {
            let config_dir = dirs.config_dir();
            if !config_dir.exists() {
                let _ = fs::create_dir_all(config_dir);
            }
            config_dir.join("window.json")
        })
    }

    /// Loads from the user config directory, falling back to defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Missing or unreadable files yield defaults; so do nonsensical sizes.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<Self>(&content).ok())
            .filter(Self::is_sane)
            .unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn is_sane(&self) -> bool {
        let [w, h] = self.size;
        w.is_finite() && h.is_finite() && w >= 100.0 && h >= 100.0
    }
}
