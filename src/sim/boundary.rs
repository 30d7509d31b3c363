//! Arena border collision and response
//!
//! A border hit is inelastic: the component into the wall is reflected and
//! damped, the component along the wall is damped but keeps its sign. The
//! same response is applied to acceleration so the tilt does not pin the
//! entity against the wall on the next frame.
//!
//! When both borders are hit in one frame (a corner), the vertical-wall
//! response runs first and the horizontal-wall response second. Each axis
//! ends up negated once and damped twice.

use glam::Vec2;

use super::state::{Arena, KinematicState};

/// Which borders were hit this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    /// Hit the left or right border
    pub collided_x: bool,
    /// Hit the bottom or top border
    pub collided_y: bool,
}

impl BoundaryContact {
    #[inline]
    pub fn any(&self) -> bool {
        self.collided_x || self.collided_y
    }
}

/// Result of resolving a state against the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryHit {
    /// State with position on or inside the border and response applied
    pub state: KinematicState,
    pub contact: BoundaryContact,
}

/// Response to a vertical (left/right) wall
#[inline]
pub fn bounce_off_vertical(v: Vec2, damping: f32) -> Vec2 {
    Vec2::new(-v.x * damping, v.y * damping)
}

/// Response to a horizontal (top/bottom) wall
#[inline]
pub fn bounce_off_horizontal(v: Vec2, damping: f32) -> Vec2 {
    Vec2::new(v.x * damping, -v.y * damping)
}

/// Clamp one coordinate into `[0, limit]`.
///
/// Counts as a hit when the coordinate is outside the range, or sits exactly
/// on a border while still moving outward. Resting on a border is not a hit.
fn clamp_axis(pos: f32, vel: f32, limit: f32) -> (f32, bool) {
    if pos < 0.0 {
        (0.0, true)
    } else if pos > limit {
        (limit, true)
    } else if (pos == 0.0 && vel < 0.0) || (pos == limit && vel > 0.0) {
        (pos, true)
    } else {
        (pos, false)
    }
}

/// Clamp position into the arena and apply the bounce response
pub fn resolve(state: &KinematicState, arena: &Arena, damping: f32) -> BoundaryHit {
    let (x, collided_x) = clamp_axis(state.position.x, state.velocity.x, arena.width());
    let (y, collided_y) = clamp_axis(state.position.y, state.velocity.y, arena.height());

    let mut velocity = state.velocity;
    let mut acceleration = state.acceleration;

    if collided_x {
        acceleration = bounce_off_vertical(acceleration, damping);
        velocity = bounce_off_vertical(velocity, damping);
    }
    if collided_y {
        acceleration = bounce_off_horizontal(acceleration, damping);
        velocity = bounce_off_horizontal(velocity, damping);
    }

    BoundaryHit {
        state: KinematicState {
            position: Vec2::new(x, y),
            velocity,
            acceleration,
        },
        contact: BoundaryContact {
            collided_x,
            collided_y,
        },
    }
}
