//! Game settings and preferences
//!
//! Read from LocalStorage on the web. Missing fields fall back to the
//! compile-time defaults in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::{CELL_SIZE, COIN_SLIDE_MS, DICE_ROLL_MS};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Coin slide duration (milliseconds)
    pub coin_slide_ms: f64,
    /// Dice roll duration (milliseconds)
    pub dice_roll_ms: f64,
    /// Draw a line under sliding coins showing where they go
    pub show_path_guide: bool,
    /// Largest cell size the layout may use (pixels)
    pub max_cell_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coin_slide_ms: COIN_SLIDE_MS,
            dice_roll_ms: DICE_ROLL_MS,
            show_path_guide: true,
            max_cell_size: CELL_SIZE,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "ludo_board_settings";

    /// Parse settings from JSON, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.coin_slide_ms, 500.0);
        assert_eq!(settings.dice_roll_ms, 2000.0);
        assert!(settings.show_path_guide);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "dice_roll_ms": 1200.0 }"#).unwrap();
        assert_eq!(settings.dice_roll_ms, 1200.0);
        assert_eq!(settings.coin_slide_ms, COIN_SLIDE_MS);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            show_path_guide: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("not json").is_err());
    }
}
