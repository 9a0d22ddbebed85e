//! Card state machine
//!
//! `Hidden -> Visible` on accept, `Visible -> Hidden` on close, backdrop click
//! or Escape. While the overlay is visible the decline button stays put.

use super::effect::Effect;
use super::particle::Particle;
use super::state::{CardState, MusicState, OverlayState};
use crate::placement::{LayoutProbe, place_with_probe};
use crate::random::UnitSource;
use crate::settings::CardSettings;

/// Browser input, already decoded by the platform layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardInput {
    /// Pointer entered or touch started on the decline button
    DeclineApproached,
    PageLoaded,
    ViewportResized,
    Accept,
    /// Explicit close button
    Close,
    /// Click inside the overlay; `on_backdrop` is false for clicks on content
    OverlayClicked { on_backdrop: bool },
    KeyPressed(String),
    ToggleMusic,
    /// Spawn timer of a running burst fired
    SpawnTick,
}

/// Owns [`CardState`] and maps inputs to effects
#[derive(Debug, Clone)]
pub struct CardController {
    state: CardState,
    settings: CardSettings,
}

impl CardController {
    pub fn new(settings: CardSettings, has_music: bool) -> Self {
        Self {
            state: CardState::new(has_music),
            settings,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn settings(&self) -> &CardSettings {
        &self.settings
    }

    /// Label the music toggle should show for the current state
    pub fn music_label(&self) -> &str {
        if self.state.music_playing() {
            &self.settings.music.pause_label
        } else {
            &self.settings.music.play_label
        }
    }

    /// Apply one input, returning the effects to perform in order
    pub fn handle<P, R>(&mut self, input: CardInput, probe: &P, rng: &mut R) -> Vec<Effect>
    where
        P: LayoutProbe + ?Sized,
        R: UnitSource + ?Sized,
    {
        match input {
            CardInput::DeclineApproached | CardInput::PageLoaded | CardInput::ViewportResized => {
                self.reposition(probe, rng)
            }
            CardInput::Accept => self.accept(),
            CardInput::Close => self.dismiss(),
            CardInput::OverlayClicked { on_backdrop } => {
                if on_backdrop {
                    self.dismiss()
                } else {
                    Vec::new()
                }
            }
            CardInput::KeyPressed(key) => {
                if key == "Escape" {
                    self.dismiss()
                } else {
                    Vec::new()
                }
            }
            CardInput::ToggleMusic => self.toggle_music(),
            CardInput::SpawnTick => {
                vec![Effect::SpawnParticle(Particle::spawn(rng, &self.settings.particles))]
            }
        }
    }

    fn reposition<P, R>(&mut self, probe: &P, rng: &mut R) -> Vec<Effect>
    where
        P: LayoutProbe + ?Sized,
        R: UnitSource + ?Sized,
    {
        // Button is frozen once the question has been answered
        if self.state.overlay_visible() {
            return Vec::new();
        }

        let placement = place_with_probe(probe, &self.settings.placement, rng);
        if placement.fell_back {
            log::debug!(
                "No clear spot after {} attempts, parking decline button",
                placement.attempts
            );
        } else {
            log::debug!(
                "Decline button -> ({}, {}) after {} attempt(s)",
                placement.x,
                placement.y,
                placement.attempts
            );
        }

        vec![Effect::MoveDecline {
            x: placement.x,
            y: placement.y,
        }]
    }

    fn accept(&mut self) -> Vec<Effect> {
        self.state.overlay = OverlayState::Visible;
        self.state.bursts_started += 1;
        log::info!("Accepted (burst #{})", self.state.bursts_started);

        let mut effects = vec![
            Effect::SetOverlayVisible(true),
            Effect::SetDeclineVisible(false),
        ];

        // Background music always yields to the video, whatever it was doing
        if self.state.music.is_some() {
            self.state.music = Some(MusicState::Paused);
            effects.push(Effect::StopMusic);
            effects.push(Effect::SetMusicLabel(self.settings.music.play_label.clone()));
        }

        effects.push(Effect::PlayVideo);
        effects.push(Effect::StartBurst {
            period_ms: self.settings.burst.spawn_interval_ms,
            duration_ms: self.settings.burst.duration_ms,
        });
        effects
    }

    fn dismiss(&mut self) -> Vec<Effect> {
        if !self.state.overlay_visible() {
            return Vec::new();
        }

        self.state.overlay = OverlayState::Hidden;
        log::info!("Overlay dismissed");

        let mut effects = vec![Effect::SetOverlayVisible(false), Effect::ResetVideo];
        if self.settings.burst.stop_on_dismiss {
            effects.push(Effect::CancelBursts);
        }
        effects
    }

    fn toggle_music(&mut self) -> Vec<Effect> {
        let Some(current) = self.state.music else {
            return Vec::new();
        };

        let next = current.toggled();
        self.state.music = Some(next);
        log::info!("Music {:?}", next);

        match next {
            MusicState::Playing => vec![
                Effect::StartMusic {
                    volume: self.settings.music.volume,
                    looped: true,
                },
                Effect::SetMusicLabel(self.settings.music.pause_label.clone()),
            ],
            MusicState::Paused => vec![
                Effect::PauseMusic,
                Effect::SetMusicLabel(self.settings.music.play_label.clone()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{FixedLayout, Size};
    use crate::random::ScriptedUnits;

    fn layout() -> FixedLayout {
        FixedLayout::centered(
            Size::new(1024.0, 768.0),
            Size::new(120.0, 40.0),
            Size::new(400.0, 300.0),
        )
    }

    fn controller(has_music: bool) -> CardController {
        CardController::new(CardSettings::default(), has_music)
    }

    #[test]
    fn test_load_moves_decline() {
        let mut c = controller(false);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        let effects = c.handle(CardInput::PageLoaded, &layout(), &mut rng);
        assert_eq!(effects, vec![Effect::MoveDecline { x: 20.0, y: 20.0 }]);
    }

    #[test]
    fn test_accept_effects_without_music() {
        let mut c = controller(false);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        let effects = c.handle(CardInput::Accept, &layout(), &mut rng);
        assert_eq!(
            effects,
            vec![
                Effect::SetOverlayVisible(true),
                Effect::SetDeclineVisible(false),
                Effect::PlayVideo,
                Effect::StartBurst {
                    period_ms: 250,
                    duration_ms: 10_000
                },
            ]
        );
        assert!(c.state().overlay_visible());
        assert_eq!(c.state().bursts_started, 1);
    }

    #[test]
    fn test_accept_stops_playing_music() {
        let mut c = controller(true);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        c.handle(CardInput::ToggleMusic, &layout(), &mut rng);
        assert!(c.state().music_playing());

        let effects = c.handle(CardInput::Accept, &layout(), &mut rng);
        assert!(effects.contains(&Effect::StopMusic));
        assert!(effects.contains(&Effect::SetMusicLabel(
            c.settings().music.play_label.clone()
        )));
        assert_eq!(c.state().music, Some(MusicState::Paused));
    }

    #[test]
    fn test_placement_frozen_while_visible() {
        let mut c = controller(false);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        c.handle(CardInput::Accept, &layout(), &mut rng);
        for input in [
            CardInput::DeclineApproached,
            CardInput::ViewportResized,
            CardInput::PageLoaded,
        ] {
            assert!(c.handle(input, &layout(), &mut rng).is_empty());
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_dismiss_paths() {
        for input in [
            CardInput::Close,
            CardInput::OverlayClicked { on_backdrop: true },
            CardInput::KeyPressed("Escape".to_string()),
        ] {
            let mut c = controller(false);
            let mut rng = ScriptedUnits::new(vec![0.0]);
            c.handle(CardInput::Accept, &layout(), &mut rng);
            let effects = c.handle(input, &layout(), &mut rng);
            assert_eq!(
                effects,
                vec![Effect::SetOverlayVisible(false), Effect::ResetVideo]
            );
            assert!(!c.state().overlay_visible());
        }
    }

    #[test]
    fn test_content_click_and_other_keys_ignored() {
        let mut c = controller(false);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        c.handle(CardInput::Accept, &layout(), &mut rng);

        let click = CardInput::OverlayClicked { on_backdrop: false };
        assert!(c.handle(click, &layout(), &mut rng).is_empty());
        let key = CardInput::KeyPressed("Enter".to_string());
        assert!(c.handle(key, &layout(), &mut rng).is_empty());
        assert!(c.state().overlay_visible());
    }

    #[test]
    fn test_escape_while_hidden_is_noop() {
        let mut c = controller(false);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        let key = CardInput::KeyPressed("Escape".to_string());
        assert!(c.handle(key, &layout(), &mut rng).is_empty());
    }

    #[test]
    fn test_stop_on_dismiss_cancels_bursts() {
        let mut settings = CardSettings::default();
        settings.burst.stop_on_dismiss = true;
        let mut c = CardController::new(settings, false);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        c.handle(CardInput::Accept, &layout(), &mut rng);
        let effects = c.handle(CardInput::Close, &layout(), &mut rng);
        assert_eq!(effects.last(), Some(&Effect::CancelBursts));
    }

    #[test]
    fn test_music_toggle_cycle() {
        let mut c = controller(true);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        assert_eq!(c.music_label(), c.settings().music.play_label);

        let on = c.handle(CardInput::ToggleMusic, &layout(), &mut rng);
        assert_eq!(
            on[0],
            Effect::StartMusic {
                volume: 0.5,
                looped: true
            }
        );
        assert_eq!(c.music_label(), c.settings().music.pause_label);

        let off = c.handle(CardInput::ToggleMusic, &layout(), &mut rng);
        assert_eq!(off[0], Effect::PauseMusic);
        assert!(!c.state().music_playing());
    }

    #[test]
    fn test_music_toggle_without_track() {
        let mut c = controller(false);
        let mut rng = ScriptedUnits::new(vec![0.0]);
        assert!(c.handle(CardInput::ToggleMusic, &layout(), &mut rng).is_empty());
    }

    #[test]
    fn test_spawn_tick_makes_particle() {
        let mut c = controller(false);
        let mut rng = ScriptedUnits::new(vec![0.5]);
        let effects = c.handle(CardInput::SpawnTick, &layout(), &mut rng);
        assert!(matches!(
            effects.as_slice(),
            [Effect::SpawnParticle(p)] if p.left_vw == 50.0 && p.fall_seconds == 4.0
        ));
    }
}
