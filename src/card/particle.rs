//! Falling heart particles

use crate::random::UnitSource;
use crate::settings::ParticleSettings;

/// One decorative heart. Lives for `lifetime_ms` whether or not its fall
/// animation has finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal start, percent of viewport width
    pub left_vw: f64,
    /// Fall animation length (seconds)
    pub fall_seconds: f64,
    pub opacity: f64,
    pub lifetime_ms: u32,
}

impl Particle {
    /// Roll a heart with random position, speed and opacity
    pub fn spawn<R: UnitSource + ?Sized>(rng: &mut R, settings: &ParticleSettings) -> Self {
        Self {
            left_vw: rng.next_in(0.0, 100.0),
            fall_seconds: rng.next_in(settings.fall_seconds_min, settings.fall_seconds_max),
            opacity: rng.next_in(settings.opacity_min, settings.opacity_max),
            lifetime_ms: settings.lifetime_ms,
        }
    }

    /// Inline style properties for the heart element
    pub fn style_properties(&self) -> [(&'static str, String); 3] {
        [
            ("left", format!("{:.3}vw", self.left_vw)),
            ("animation-duration", format!("{:.3}s", self.fall_seconds)),
            ("opacity", format!("{:.3}", self.opacity)),
        ]
    }
}
