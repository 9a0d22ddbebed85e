//! End-to-end card sessions driven through the controller with a fixed layout.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use yes_or_no::card::{CardController, CardInput, Effect, MusicState, OverlayState};
use yes_or_no::placement::{AxisRange, FixedLayout, Rect, Size};
use yes_or_no::random::ScriptedUnits;
use yes_or_no::CardSettings;

fn desktop() -> FixedLayout {
    FixedLayout::centered(
        Size::new(1024.0, 768.0),
        Size::new(120.0, 40.0),
        Size::new(400.0, 300.0),
    )
}

fn moved_to(effects: &[Effect]) -> Option<(f64, f64)> {
    effects.iter().find_map(|e| match e {
        Effect::MoveDecline { x, y } => Some((*x, *y)),
        _ => None,
    })
}

#[test]
fn decline_keeps_running_until_accepted() {
    let layout = desktop();
    let zone = layout.avoid.expand(40.0);
    let x_range = AxisRange::new(1024.0, 120.0, 20.0);
    let y_range = AxisRange::new(768.0, 40.0, 20.0);
    let mut card = CardController::new(CardSettings::default(), false);
    let mut rng = Pcg32::seed_from_u64(14);

    let first = card.handle(CardInput::PageLoaded, &layout, &mut rng);
    assert!(moved_to(&first).is_some());

    for _ in 0..50 {
        let effects = card.handle(CardInput::DeclineApproached, &layout, &mut rng);
        let (x, y) = moved_to(&effects).expect("decline should move");
        assert!(x_range.contains(x) && y_range.contains(y));
        if (x, y) != (20.0, 20.0) {
            assert!(!Rect::at(x, y, layout.control).overlaps(&zone));
        }
    }
}

#[test]
fn accept_then_escape_session() {
    let layout = desktop();
    let mut card = CardController::new(CardSettings::default(), false);
    let mut rng = ScriptedUnits::new(vec![0.9, 0.1]);

    card.handle(CardInput::PageLoaded, &layout, &mut rng);

    let accepted = card.handle(CardInput::Accept, &layout, &mut rng);
    assert!(accepted.contains(&Effect::SetOverlayVisible(true)));
    assert!(accepted.contains(&Effect::SetDeclineVisible(false)));
    assert!(accepted.contains(&Effect::PlayVideo));
    assert_eq!(card.state().overlay, OverlayState::Visible);

    // Frozen while the overlay is up
    assert!(card.handle(CardInput::ViewportResized, &layout, &mut rng).is_empty());
    assert!(card.handle(CardInput::DeclineApproached, &layout, &mut rng).is_empty());

    // Clicks on the modal content do not close it
    let content_click = CardInput::OverlayClicked { on_backdrop: false };
    assert!(card.handle(content_click, &layout, &mut rng).is_empty());
    assert_eq!(card.state().overlay, OverlayState::Visible);

    let closed = card.handle(CardInput::KeyPressed("Escape".into()), &layout, &mut rng);
    assert_eq!(closed, vec![Effect::SetOverlayVisible(false), Effect::ResetVideo]);
    assert_eq!(card.state().overlay, OverlayState::Hidden);

    // Resizes move the (hidden) button again once the overlay is gone
    let resized = card.handle(CardInput::ViewportResized, &layout, &mut rng);
    assert!(moved_to(&resized).is_some());
}

#[test]
fn accept_is_idempotent_on_visibility() {
    let layout = desktop();
    let mut card = CardController::new(CardSettings::default(), false);
    let mut rng = ScriptedUnits::new(vec![0.0]);

    for round in 1..=3 {
        let effects = card.handle(CardInput::Accept, &layout, &mut rng);
        assert_eq!(effects[0], Effect::SetOverlayVisible(true));
        assert_eq!(effects[1], Effect::SetDeclineVisible(false));
        assert_eq!(card.state().bursts_started, round);
    }
}

#[test]
fn hearts_keep_falling_after_dismiss_by_default() {
    let layout = desktop();
    let mut card = CardController::new(CardSettings::default(), false);
    let mut rng = Pcg32::seed_from_u64(3);

    card.handle(CardInput::Accept, &layout, &mut rng);
    let closed = card.handle(CardInput::Close, &layout, &mut rng);
    assert!(!closed.contains(&Effect::CancelBursts));

    // A pending spawn tick still produces a heart
    let tick = card.handle(CardInput::SpawnTick, &layout, &mut rng);
    assert!(matches!(tick.as_slice(), [Effect::SpawnParticle(_)]));
}

#[test]
fn backdrop_click_closes_only_when_visible() {
    let layout = desktop();
    let mut card = CardController::new(CardSettings::default(), false);
    let mut rng = ScriptedUnits::new(vec![0.0]);
    let backdrop = || CardInput::OverlayClicked { on_backdrop: true };

    assert!(card.handle(backdrop(), &layout, &mut rng).is_empty());

    card.handle(CardInput::Accept, &layout, &mut rng);
    let closed = card.handle(backdrop(), &layout, &mut rng);
    assert!(closed.contains(&Effect::ResetVideo));
    assert!(card.handle(backdrop(), &layout, &mut rng).is_empty());
}

#[test]
fn music_session() {
    let layout = desktop();
    let mut card = CardController::new(CardSettings::default(), true);
    let mut rng = ScriptedUnits::new(vec![0.0]);

    let on = card.handle(CardInput::ToggleMusic, &layout, &mut rng);
    assert!(on.contains(&Effect::StartMusic {
        volume: 0.5,
        looped: true
    }));
    assert_eq!(card.state().music, Some(MusicState::Playing));

    // Saying yes silences the music and rewinds it
    let accepted = card.handle(CardInput::Accept, &layout, &mut rng);
    let stop = accepted.iter().position(|e| *e == Effect::StopMusic);
    let play = accepted.iter().position(|e| *e == Effect::PlayVideo);
    assert!(stop.is_some() && play.is_some() && stop < play);
    assert_eq!(card.state().music, Some(MusicState::Paused));

    // Music can be switched back on behind the overlay
    let on_again = card.handle(CardInput::ToggleMusic, &layout, &mut rng);
    assert!(matches!(on_again[0], Effect::StartMusic { .. }));
}

#[test]
fn opt_in_cancel_on_dismiss() {
    let settings = CardSettings::from_json(r#"{ "burst": { "stop_on_dismiss": true } }"#).unwrap();
    let layout = desktop();
    let mut card = CardController::new(settings, false);
    let mut rng = ScriptedUnits::new(vec![0.0]);

    card.handle(CardInput::Accept, &layout, &mut rng);
    let closed = card.handle(CardInput::Close, &layout, &mut rng);
    assert_eq!(
        closed,
        vec![
            Effect::SetOverlayVisible(false),
            Effect::ResetVideo,
            Effect::CancelBursts
        ]
    );
}
