//! Yes or No - a greeting card with a runaway "No" button
//!
//! Core modules:
//! - `placement`: Evasive placement of the decline button (pure geometry)
//! - `card`: Overlay state machine and heart particles
//! - `settings`: Page configuration
//! - `media`: Video/music playback wrappers (WASM only)
//! - `platform`: Browser DOM bindings (WASM only)

pub mod card;
pub mod placement;
pub mod random;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod media;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use card::{CardController, CardInput, Effect, OverlayState, Particle};
pub use placement::{LayoutProbe, PlacementParams, Rect, Size, place_control, place_with_probe};
pub use random::UnitSource;
pub use settings::CardSettings;

/// Card configuration constants
pub mod consts {
    /// Minimum gap between the decline button and the viewport edge
    pub const EDGE_PADDING: f64 = 20.0;
    /// Margin added around the card to form the no-go zone
    pub const AVOID_MARGIN: f64 = 40.0;
    /// Random placement attempts before falling back to the corner
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 15;

    /// Heart spawn period while a burst is running (ms)
    pub const SPAWN_INTERVAL_MS: u32 = 250;
    /// Total length of a heart burst (ms)
    pub const BURST_DURATION_MS: u32 = 10_000;
    /// Hearts are removed this long after spawning, finished or not (ms)
    pub const PARTICLE_LIFETIME_MS: u32 = 5_000;

    /// Fall animation duration range (seconds)
    pub const FALL_SECONDS_MIN: f64 = 3.0;
    pub const FALL_SECONDS_MAX: f64 = 5.0;
    /// Heart opacity range
    pub const OPACITY_MIN: f64 = 0.3;
    pub const OPACITY_MAX: f64 = 1.0;

    /// Background music volume when switched on
    pub const MUSIC_VOLUME: f64 = 0.5;
}

/// Clamp `n` into `[min, max]`, preferring `max` when the range is inverted.
///
/// Unlike `f64::clamp` this never panics, which matters for viewports smaller
/// than the button plus padding.
#[inline]
pub fn clamp_to(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_inside_range() {
        assert_eq!(clamp_to(50.0, 20.0, 884.0), 50.0);
        assert_eq!(clamp_to(5.0, 20.0, 884.0), 20.0);
        assert_eq!(clamp_to(900.0, 20.0, 884.0), 884.0);
    }

    #[test]
    fn test_clamp_to_inverted_range() {
        // Degenerate viewport: everything collapses onto `max`
        assert_eq!(clamp_to(0.0, 20.0, 0.0), 0.0);
        assert_eq!(clamp_to(100.0, 20.0, 5.0), 5.0);
    }
}
