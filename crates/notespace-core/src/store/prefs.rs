//! UI preferences: theme and sidebar width.
//!
//! Non-authoritative view state, persisted as one JSON file in the user's
//! config directory. No domain data lives here. Loading tolerates a
//! missing or corrupt file; saving is best-effort.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const SIDEBAR_MIN_WIDTH: u32 = 200;
pub const SIDEBAR_MAX_WIDTH: u32 = 500;
pub const SIDEBAR_DEFAULT_WIDTH: u32 = 280;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub sidebar_width: u32,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            dark_mode: true,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            path: None,
        }
    }
}

impl Preferences {
    /// Load from the platform config directory, falling back to defaults
    /// when no usable file exists.
    pub fn load() -> Self {
        match dirs::config_dir() {
            Some(dir) => Self::load_from(dir.join("notespace").join("preferences.json")),
            None => Preferences::default(),
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut prefs = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<Preferences>(&bytes).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "corrupt preferences file, using defaults");
                Preferences::default()
            }),
            Err(_) => Preferences::default(),
        };
        prefs.sidebar_width = prefs.sidebar_width.clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH);
        prefs.path = Some(path);
        prefs
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.save();
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.save();
    }

    /// Widths outside the allowed band are ignored, like a drag past the
    /// rail's bounds.
    pub fn set_sidebar_width(&mut self, width: u32) {
        if (SIDEBAR_MIN_WIDTH..=SIDEBAR_MAX_WIDTH).contains(&width) {
            self.sidebar_width = width;
            self.save();
        }
    }

    fn save(&self) {
        let Some(path) = &self.path else { return };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %path.display(), error = %e, "cannot create preferences directory");
                return;
            }
        }
        match serde_json::to_vec_pretty(self) {
            Ok(bytes) => {
                if let Err(e) = std::fs::write(path, bytes) {
                    warn!(path = %path.display(), error = %e, "failed to save preferences");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize preferences"),
        }
    }
}
