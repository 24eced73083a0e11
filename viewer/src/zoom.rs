//! Zoom factor held as whole steps from the baseline.

use common::viewer_const::{ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// Zoom level counted in `ZOOM_STEP` increments from `ZOOM_DEFAULT`.
///
/// Every value of this type lies in `[ZOOM_MIN, ZOOM_MAX]` and is reachable from the
/// baseline by a whole number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomLevel {
    steps: i32,
}

fn min_steps() -> i32 {
    ((ZOOM_MIN - ZOOM_DEFAULT) / ZOOM_STEP).round() as i32
}

fn max_steps() -> i32 {
    ((ZOOM_MAX - ZOOM_DEFAULT) / ZOOM_STEP).round() as i32
}

impl ZoomLevel {
    /// Snaps an arbitrary factor to the nearest step. Out-of-range and non-finite factors are refused.
    pub fn from_factor(factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor < ZOOM_MIN || factor > ZOOM_MAX {
            return None;
        }
        let steps = ((factor - ZOOM_DEFAULT) / ZOOM_STEP).round() as i32;
        Some(Self { steps: steps.clamp(min_steps(), max_steps()) })
    }

    pub fn factor(self) -> f64 {
        ZOOM_DEFAULT + f64::from(self.steps) * ZOOM_STEP
    }

    pub fn percent(self) -> u32 {
        (self.factor() * 100.0).round() as u32
    }

    pub fn zoomed_in(self) -> Self {
        Self { steps: (self.steps + 1).min(max_steps()) }
    }

    pub fn zoomed_out(self) -> Self {
        Self { steps: (self.steps - 1).max(min_steps()) }
    }

    pub fn is_max(self) -> bool {
        self.steps >= max_steps()
    }

    pub fn is_min(self) -> bool {
        self.steps <= min_steps()
    }
}
