//! Game settings and preferences
//!
//! Persisted as JSON next to the executable, separately from any game state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute when the window loses focus
    pub mute_on_blur: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            mute_on_blur: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Effective sound-effect volume
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Effective music volume
    pub fn effective_music_volume(&self) -> f32 {
        (self.master_volume * self.music_volume).clamp(0.0, 1.0)
    }

    /// Load settings from a JSON file, falling back to defaults if the file
    /// is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_volumes() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 1.0,
            music_volume: 0.4,
            ..Default::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 0.5);
        assert_eq!(settings.effective_music_volume(), 0.2);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/tap-bird-settings.json"));
        assert_eq!(settings.master_volume, Settings::default().master_volume);
    }

    #[test]
    fn test_roundtrip() {
        let dir = std::env::temp_dir();
        let path = dir.join("tap-bird-settings-test.json");
        let mut settings = Settings::default();
        settings.master_volume = 0.25;
        settings.show_fps = true;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert_eq!(loaded.master_volume, 0.25);
        assert!(loaded.show_fps);
        let _ = fs::remove_file(&path);
    }
}
