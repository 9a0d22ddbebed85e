//! Card presenter
//!
//! [`CardController`] turns browser inputs into [`Effect`]s. It owns the only
//! mutable UI state (overlay visibility and music) and never touches the DOM
//! itself; the platform layer applies the effects it returns.

pub mod controller;
pub mod effect;
pub mod particle;
pub mod state;

pub use controller::{CardController, CardInput};
pub use effect::Effect;
pub use particle::Particle;
pub use state::{CardState, MusicState, OverlayState};
