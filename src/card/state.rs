//! Overlay and music state

/// Celebration overlay visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// Background music toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicState {
    Playing,
    #[default]
    Paused,
}

impl MusicState {
    pub fn toggled(self) -> Self {
        match self {
            MusicState::Playing => MusicState::Paused,
            MusicState::Paused => MusicState::Playing,
        }
    }
}

/// Everything the card remembers between events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub overlay: OverlayState,
    /// `None` when the page has no background track
    pub music: Option<MusicState>,
    /// Bursts started since load
    pub bursts_started: u32,
}

impl CardState {
    pub fn new(has_music: bool) -> Self {
        Self {
            overlay: OverlayState::Hidden,
            music: has_music.then_some(MusicState::Paused),
            bursts_started: 0,
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay == OverlayState::Visible
    }

    pub fn music_playing(&self) -> bool {
        self.music == Some(MusicState::Playing)
    }
}
