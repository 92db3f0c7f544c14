//! Display preferences
//!
//! Labels and colors only. Persisted in LocalStorage on the web; scores are
//! never stored.

use serde::{Deserialize, Serialize};

use crate::renderer::Color;
use crate::sim::Side;

/// Court colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub court: Color,
    pub paddle: Color,
    pub ball: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            court: Color::rgb(0x2e, 0x8b, 0x57),
            paddle: Color::WHITE,
            ball: Color::rgb(0x90, 0xee, 0x90),
            text: Color::WHITE,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name shown next to the player's score
    pub player_label: String,
    /// Name shown next to the opponent's score
    pub opponent_label: String,
    /// Text drawn over the court while paused
    pub pause_label: String,
    /// Draw the pause text on the court (the pause button label changes regardless)
    pub show_pause_indicator: bool,
    /// CSS font family for canvas text
    pub font_family: String,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_label: "Player".to_string(),
            opponent_label: "CPU".to_string(),
            pause_label: "Paused".to_string(),
            show_pause_indicator: true,
            font_family: "Arial".to_string(),
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// End-of-game overlay text
    pub fn winner_message(&self, winner: Side) -> String {
        match winner {
            Side::Player => format!("{} wins!", self.player_label),
            Side::Opponent => format!("{} wins!", self.opponent_label),
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "court_tennis_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
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

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                        log::warn!("Failed to write settings to LocalStorage");
                    } else {
                        log::info!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
