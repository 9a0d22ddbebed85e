//! Card settings
//!
//! Defaults live in [`crate::consts`]. A page can override any field with an
//! inline `<script id="card-settings" type="application/json">` block; nothing
//! is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::placement::PlacementParams;

/// DOM ids of the elements the card drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub accept: String,
    pub decline: String,
    pub overlay: String,
    pub video: String,
    pub close: String,
    /// Optional background track; the music toggle is disabled without it
    pub music: String,
    pub music_toggle: String,
    /// CSS selector of the card the decline button keeps away from
    pub card_selector: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            accept: "yesBtn".to_string(),
            decline: "noBtn".to_string(),
            overlay: "overlay".to_string(),
            video: "valVideo".to_string(),
            close: "closeBtn".to_string(),
            music: "bgMusic".to_string(),
            music_toggle: "musicToggle".to_string(),
            card_selector: ".card".to_string(),
        }
    }
}

/// Heart burst timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstSettings {
    /// Period of the spawn timer (ms)
    pub spawn_interval_ms: u32,
    /// Burst length before the spawn timer is cleared (ms)
    pub duration_ms: u32,
    /// Cancel running bursts when the overlay is dismissed
    pub stop_on_dismiss: bool,
}

impl Default for BurstSettings {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            duration_ms: BURST_DURATION_MS,
            stop_on_dismiss: false,
        }
    }
}

/// Heart appearance ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub glyph: String,
    pub class_name: String,
    /// Time before a heart is removed (ms)
    pub lifetime_ms: u32,
    pub fall_seconds_min: f64,
    pub fall_seconds_max: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            glyph: "\u{2764}\u{fe0f}".to_string(),
            class_name: "heart".to_string(),
            lifetime_ms: PARTICLE_LIFETIME_MS,
            fall_seconds_min: FALL_SECONDS_MIN,
            fall_seconds_max: FALL_SECONDS_MAX,
            opacity_min: OPACITY_MIN,
            opacity_max: OPACITY_MAX,
        }
    }
}

/// Background music toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicSettings {
    /// Volume applied each time the music is switched on (0.0 - 1.0)
    pub volume: f64,
    /// Toggle label while paused
    pub play_label: String,
    /// Toggle label while playing
    pub pause_label: String,
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self {
            volume: MUSIC_VOLUME,
            play_label: "\u{1f3b5} Play Music".to_string(),
            pause_label: "\u{23f8} Pause Music".to_string(),
        }
    }
}

/// All card settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    pub elements: ElementIds,
    pub placement: PlacementParams,
    pub burst: BurstSettings,
    pub particles: ParticleSettings,
    pub music: MusicSettings,
}

impl CardSettings {
    /// Id of the inline JSON block read by [`CardSettings::load`]
    #[allow(dead_code)]
    const SCRIPT_ID: &'static str = "card-settings";

    /// Parse settings JSON, keeping defaults for missing fields
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.music.volume = settings.music.volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Load settings from the page's inline JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::SCRIPT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded card settings from #{}", Self::SCRIPT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed card settings: {}", e),
            }
        }

        log::info!("Using default card settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
