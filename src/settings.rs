//! # Settings Persistence
//!
//! A flat JSON record of user preferences: theme flag plus the color pair.
//! Loading is forgiving on purpose; a missing, truncated or hand-edited
//! file must never stop the application from starting, so every failure
//! path falls back to defaults. Unknown keys are ignored and absent keys
//! take their default, which keeps old settings files working across
//! releases.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::SelloError;

/// Default settings file name.
pub const SETTINGS_FILE: &str = "sello_settings.json";

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shell chrome theme; has no effect on rendered symbols.
    pub dark_theme: bool,
    /// Foreground (module) color as `#RRGGBB`.
    pub fg_color: String,
    /// Background color as `#RRGGBB`.
    pub bg_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            fg_color: Color::BLACK.to_hex(),
            bg_color: Color::WHITE.to_hex(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// is missing or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SelloError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SelloError::Save(format!("Cannot serialize settings: {}", e)))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Stored foreground color; black when the stored string is invalid.
    pub fn foreground(&self) -> Color {
        Color::from_hex(&self.fg_color).unwrap_or(Color::BLACK)
    }

    /// Stored background color; white when the stored string is invalid.
    pub fn background(&self) -> Color {
        Color::from_hex(&self.bg_color).unwrap_or(Color::WHITE)
    }

    /// Record a color pair in the stored `#RRGGBB` form.
    pub fn set_colors(&mut self, foreground: Color, background: Color) {
        self.fg_color = foreground.to_hex();
        self.bg_color = background.to_hex();
    }

    /// Flip the theme flag.
    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
    }
}
