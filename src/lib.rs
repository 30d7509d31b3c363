//! Tilt Kernel - per-frame motion core for a tilt-controlled arena game
//!
//! Core modules:
//! - `sim`: Pure motion pipeline (filter, integrate, bounce, orient, aim)
//! - `platform`: Acceleration sources and sensor subscription lifetime
//! - `scene`: Player + turret composition driven once per frame
//! - `health`: Hit point values and bar fill geometry
//! - `tuning`: Data-driven motion constants

pub mod error;
pub mod health;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use error::{KernelError, Result};
pub use health::Health;
pub use scene::{Scene, SceneFrame};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Tilt of 1g maps to this acceleration (points/s²)
    pub const MAX_ACCELERATION: f32 = 400.0;
    /// Per-axis speed cap (points/s)
    pub const MAX_SPEED: f32 = 200.0;
    /// Fraction of velocity/acceleration kept after hitting a border
    pub const COLLISION_DAMPING: f32 = 0.4;

    /// Weight of the newest accelerometer sample in the low-pass filter
    pub const FILTER_FACTOR: f32 = 0.75;

    /// Below this speed the heading is held (points/s)
    pub const ROTATION_THRESHOLD: f32 = 40.0;
    /// Weight of the newest heading in the rotation blend
    pub const ROTATION_BLEND: f32 = 0.2;
    /// Sprite artwork faces up, so rendered rotation is heading - 90°
    pub const PRESENTATION_OFFSET: f32 = std::f32::consts::FRAC_PI_2;

    /// Frame gaps shorter than this are stretched to it (seconds)
    pub const MIN_FRAME_TIME: f64 = 1.0 / 30.0;
    /// Frame gaps longer than this are cut to it (seconds)
    pub const MAX_FRAME_TIME: f64 = 0.25;

    /// Player spawns this far from the right edge
    pub const PLAYER_START_INSET_X: f32 = 50.0;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_START_Y: f32 = 60.0;

    /// Hit points
    pub const MAX_HEALTH: u32 = 100;
    pub const HEALTH_BAR_WIDTH: f32 = 40.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 4.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
