//! Hit points
//!
//! Combat itself happens elsewhere; this only stores the value and the
//! numbers a health bar needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HEALTH_BAR_HEIGHT, HEALTH_BAR_WIDTH, MAX_HEALTH};

/// Hit points in `[0, MAX_HEALTH]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

impl Health {
    pub fn full() -> Self {
        Self {
            current: MAX_HEALTH,
        }
    }

    /// Health at `hp`, capped to `MAX_HEALTH`
    pub fn new(hp: u32) -> Self {
        Self {
            current: hp.min(MAX_HEALTH),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Remove hit points, stopping at zero
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Restore hit points, stopping at `MAX_HEALTH`
    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(MAX_HEALTH);
    }

    /// Remaining fraction (0.0 - 1.0)
    pub fn fill_ratio(&self) -> f32 {
        self.current as f32 / MAX_HEALTH as f32
    }

    /// Width of the filled part of a bar `bar_width` wide.
    ///
    /// One point is reserved for the 0.5-point border on each side.
    pub fn fill_width(&self, bar_width: f32) -> f32 {
        ((bar_width - 1.0) * self.fill_ratio()).max(0.0)
    }

    /// Outline size of the standard health bar
    pub fn bar_size() -> Vec2 {
        Vec2::new(HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT)
    }

    /// Filled rectangle inside the standard bar, inset by the border
    pub fn fill_size(&self) -> Vec2 {
        let bar = Self::bar_size();
        Vec2::new(self.fill_width(bar.x), bar.y - 1.0)
    }
}
