//! Browser platform layer
//!
//! Handles everything that touches the DOM:
//! - Layout queries for the placement engine
//! - Applying controller effects (styles, media, hearts, timers)
//! - Event listener registration

pub mod dom;

pub use dom::{DomLayout, DomStage, add_listener};
