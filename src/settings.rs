//! Runtime settings
//!
//! Loaded from a JSON file on the host. Anything missing or malformed falls
//! back to the firmware defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::GameMode;

/// Board and timing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Carrier tone for both speakers (Hz)
    pub tone_freq_hz: f32,
    /// LCD width in pixels (the panel is square)
    pub screen_width: i32,
    /// Mode selected at power-on
    pub initial_mode: GameMode,

    // === Cadences (ms) ===
    /// Playing tick
    pub tick_ms: u64,
    /// Idle button polling
    pub idle_poll_ms: u64,
    /// Wait after the start press before the session begins
    pub start_debounce_ms: u64,
    /// How long the mode label stays up
    pub mode_label_ms: u64,
    /// How long the game over summary stays up
    pub game_over_hold_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tone_freq_hz: TONE_FREQ_HZ,
            screen_width: SCREEN_WIDTH,
            initial_mode: GameMode::Medium,

            tick_ms: TICK_MS,
            idle_poll_ms: IDLE_POLL_MS,
            start_debounce_ms: START_DEBOUNCE_MS,
            mode_label_ms: MODE_LABEL_MS,
            game_over_hold_ms: GAME_OVER_HOLD_MS,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not read settings {}: {err}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Invalid settings {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Replace values the hardware cannot honor with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.tone_freq_hz.is_finite() && self.tone_freq_hz > 0.0) {
            log::warn!("Tone frequency {} invalid, using {}", self.tone_freq_hz, defaults.tone_freq_hz);
            self.tone_freq_hz = defaults.tone_freq_hz;
        }
        if self.screen_width <= 0 {
            log::warn!("Screen width {} invalid, using {}", self.screen_width, defaults.screen_width);
            self.screen_width = defaults.screen_width;
        }
        if self.tick_ms == 0 {
            log::warn!("Tick of 0ms invalid, using {}ms", defaults.tick_ms);
            self.tick_ms = defaults.tick_ms;
        }
        self
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn idle_poll(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms)
    }

    pub fn start_debounce(&self) -> Duration {
        Duration::from_millis(self.start_debounce_ms)
    }

    pub fn mode_label(&self) -> Duration {
        Duration::from_millis(self.mode_label_ms)
    }

    pub fn game_over_hold(&self) -> Duration {
        Duration::from_millis(self.game_over_hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_firmware() {
        let settings = Settings::default();
        assert_eq!(settings.tone_freq_hz, 2000.0);
        assert_eq!(settings.initial_mode, GameMode::Medium);
        assert_eq!(settings.tick(), Duration::from_millis(20));
        assert_eq!(settings.idle_poll(), Duration::from_millis(50));
        assert_eq!(settings.start_debounce(), Duration::from_millis(200));
        assert_eq!(settings.mode_label(), Duration::from_secs(1));
        assert_eq!(settings.game_over_hold(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "initial_mode": "Hard", "tick_ms": 10 }"#).unwrap();
        assert_eq!(settings.initial_mode, GameMode::Hard);
        assert_eq!(settings.tick_ms, 10);
        assert_eq!(settings.screen_width, 128);
    }

    #[test]
    fn test_invalid_values_sanitized() {
        let settings =
            Settings::from_json(r#"{ "tone_freq_hz": -5.0, "screen_width": 0, "tick_ms": 0 }"#)
                .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ tick_ms: ").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/blind-pong/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("blind-pong-settings-{}.json", std::process::id()));
        let settings = Settings {
            initial_mode: GameMode::Easy,
            game_over_hold_ms: 500,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = fs::remove_file(&path);
    }
}
