//! Presentational commands produced by the controller

use super::particle::Particle;

/// A single DOM/media change for the platform layer to apply, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Move the decline button's top-left corner (CSS px)
    MoveDecline { x: f64, y: f64 },
    SetOverlayVisible(bool),
    SetDeclineVisible(bool),
    /// Start the celebration video; a rejected play is ignored
    PlayVideo,
    /// Pause the video and seek back to the start
    ResetVideo,
    /// Set volume and looping, then play the background track
    StartMusic { volume: f64, looped: bool },
    /// Pause the background track where it is
    PauseMusic,
    /// Pause the background track and seek back to the start
    StopMusic,
    SetMusicLabel(String),
    /// Arm a spawn timer plus a one-shot timer that clears it
    StartBurst { period_ms: u32, duration_ms: u32 },
    /// Clear every spawn timer still running
    CancelBursts,
    /// Add one heart and schedule its removal
    SpawnParticle(Particle),
}

impl Effect {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Effect::MoveDecline { .. } => "move-decline",
            Effect::SetOverlayVisible(_) => "overlay-visible",
            Effect::SetDeclineVisible(_) => "decline-visible",
            Effect::PlayVideo => "play-video",
            Effect::ResetVideo => "reset-video",
            Effect::StartMusic { .. } => "start-music",
            Effect::PauseMusic => "pause-music",
            Effect::StopMusic => "stop-music",
            Effect::SetMusicLabel(_) => "music-label",
            Effect::StartBurst { .. } => "start-burst",
            Effect::CancelBursts => "cancel-bursts",
            Effect::SpawnParticle(_) => "spawn-particle",
        }
    }
}
