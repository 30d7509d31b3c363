//! Exponential smoothing of the accelerometer signal
//!
//! Raw readings jitter by a few hundredths of a g even on a table. A simple
//! exponential moving average with a heavy weight on the newest sample keeps
//! control responsive while taking the edge off the noise.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::MotionSample;

/// One smoothing step: `raw * factor + prev * (1 - factor)`
#[inline]
pub fn smooth(prev: f32, raw: f32, factor: f32) -> f32 {
    raw * factor + prev * (1.0 - factor)
}

/// Smooth both axes at once
#[inline]
pub fn smooth_xy(prev: Vec2, raw: Vec2, factor: f32) -> Vec2 {
    Vec2::new(smooth(prev.x, raw.x, factor), smooth(prev.y, raw.y, factor))
}

/// Running averages of the two tilt axes (start at zero)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub x: f32,
    pub y: f32,
}

impl FilterState {
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Low-pass filter over incoming samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalFilter {
    factor: f32,
    state: FilterState,
}

impl SignalFilter {
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            state: FilterState::default(),
        }
    }

    /// Fold a sample into the running averages.
    ///
    /// `None` (sensor gap) or a reading with a non-finite axis leaves the
    /// state untouched and returns the last filtered value.
    pub fn apply(&mut self, sample: Option<MotionSample>) -> Vec2 {
        if let Some(sample) = sample.filter(MotionSample::is_finite) {
            let filtered = smooth_xy(self.state.xy(), sample.xy(), self.factor);
            self.state = FilterState {
                x: filtered.x,
                y: filtered.y,
            };
        }
        self.state.xy()
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}
