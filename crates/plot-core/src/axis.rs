// File: crates/plot-core/src/axis.rs
// Summary: Axis model with label, range and tick layout.

use crate::grid::{format_tick, nice_step, nice_ticks};

/// Roughly how many ticks an axis aims for.
pub const TICK_TARGET: usize = 8;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Tick values with their printed labels.
    pub fn ticks(&self) -> Vec<(f64, String)> {
        let step = nice_step(self.max - self.min, TICK_TARGET);
        nice_ticks(self.min, self.max, TICK_TARGET)
            .into_iter()
            .map(|v| (v, format_tick(v, step)))
            .collect()
    }
}
