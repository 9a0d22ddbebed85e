//! Random source used by placement and particles
//!
//! Everything random in the card goes through [`UnitSource`] so tests can
//! swap in a seeded PCG or a fixed script of values.

use rand::Rng;
use rand_pcg::Pcg32;

/// Uniform draws in `[0, 1)`
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`
    fn next_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

impl UnitSource for Pcg32 {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedUnits {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedUnits {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }

    /// How many values have been drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UnitSource for ScriptedUnits {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
