//! Randomized retry-with-fallback placement
//!
//! The decline button gets a random spot inside the padded viewport that does
//! not touch the card's no-go zone. After a fixed number of misses the button
//! is parked in the top-left corner, which may overlap the zone on tiny
//! screens but always terminates.

use serde::{Deserialize, Serialize};

use super::probe::LayoutProbe;
use super::rect::{Rect, Size};
use crate::clamp_to;
use crate::consts::*;
use crate::random::UnitSource;

/// Tunables for a placement call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    /// Gap kept between the button and the viewport edges
    pub padding: f64,
    /// Margin grown around the avoid region
    pub avoid_margin: f64,
    /// Random attempts before the fallback
    pub max_attempts: u32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            padding: EDGE_PADDING,
            avoid_margin: AVOID_MARGIN,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Valid top-left coordinates along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// `[padding, viewport - control - padding]`, collapsing to a single
    /// point when the viewport is too small.
    pub fn new(viewport_extent: f64, control_extent: f64, padding: f64) -> Self {
        let max = (viewport_extent - control_extent - padding).max(0.0);
        Self {
            min: padding.min(max),
            max,
        }
    }

    /// Map a unit draw onto a whole-pixel coordinate in the range
    pub fn sample(&self, u: f64) -> f64 {
        (self.min + u * (self.max - self.min)).floor()
    }

    pub fn clamp(&self, v: f64) -> f64 {
        clamp_to(v, self.min, self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Result of a placement call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    /// Attempts consumed (equals the budget on fallback)
    pub attempts: u32,
    /// True when no random candidate cleared the no-go zone
    pub fell_back: bool,
}

impl Placement {
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Pick a top-left position for a `control`-sized button inside `viewport`
/// that stays clear of `avoid` expanded by `params.avoid_margin`.
pub fn place_control<R: UnitSource + ?Sized>(
    viewport: Size,
    avoid: Rect,
    control: Size,
    params: &PlacementParams,
    rng: &mut R,
) -> Placement {
    let x_range = AxisRange::new(viewport.width, control.width, params.padding);
    let y_range = AxisRange::new(viewport.height, control.height, params.padding);
    let zone = avoid.expand(params.avoid_margin);

    for attempt in 1..=params.max_attempts {
        let x = x_range.sample(rng.next_unit());
        let y = y_range.sample(rng.next_unit());

        if !Rect::at(x, y, control).overlaps(&zone) {
            return Placement {
                x: x_range.clamp(x),
                y: y_range.clamp(y),
                attempts: attempt,
                fell_back: false,
            };
        }
    }

    Placement {
        x: params.padding,
        y: params.padding,
        attempts: params.max_attempts,
        fell_back: true,
    }
}

/// Read the current layout from `probe` and place the button
pub fn place_with_probe<P, R>(probe: &P, params: &PlacementParams, rng: &mut R) -> Placement
where
    P: LayoutProbe + ?Sized,
    R: UnitSource + ?Sized,
{
    place_control(
        probe.viewport(),
        probe.avoid_region(),
        probe.control_size(),
        params,
        rng,
    )
}
