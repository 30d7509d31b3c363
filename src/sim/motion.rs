//! Tilt-to-acceleration mapping and explicit Euler integration

use glam::Vec2;

use super::state::KinematicState;
use crate::error::{KernelError, Result};

/// A validated frame step in seconds (finite and strictly positive)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Timestep(f32);

impl Timestep {
    pub fn new(seconds: f32) -> Result<Self> {
        if seconds.is_finite() && seconds > 0.0 {
            Ok(Self(seconds))
        } else {
            Err(KernelError::InvalidTimestep(seconds))
        }
    }

    #[inline]
    pub fn seconds(self) -> f32 {
        self.0
    }
}

/// Map filtered tilt to world acceleration.
///
/// The device is held in landscape, so tilt Y drives world X (negated) and
/// tilt X drives world Y.
#[inline]
pub fn acceleration_from_tilt(filtered: Vec2, max_acceleration: f32) -> Vec2 {
    Vec2::new(-filtered.y * max_acceleration, filtered.x * max_acceleration)
}

/// Clamp each velocity axis independently to `[-max_speed, max_speed]`
#[inline]
pub fn clamp_velocity(velocity: Vec2, max_speed: f32) -> Vec2 {
    Vec2::new(
        velocity.x.clamp(-max_speed, max_speed),
        velocity.y.clamp(-max_speed, max_speed),
    )
}

/// Advance one step: `v += a*dt` (clamped), then `p += v*dt`.
///
/// Position is not bounded here; run the result through
/// [`resolve`](super::boundary::resolve) before using it.
pub fn integrate(
    state: &KinematicState,
    acceleration: Vec2,
    dt: Timestep,
    max_speed: f32,
) -> KinematicState {
    let dt = dt.seconds();
    let velocity = clamp_velocity(state.velocity + acceleration * dt, max_speed);
    KinematicState {
        position: state.position + velocity * dt,
        velocity,
        acceleration,
    }
}
