//! Kinematic state and core simulation types
//!
//! Everything a controller carries between frames lives here or in the
//! component modules; none of it touches a clock or a device.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{KernelError, Result};

/// Raw accelerometer reading (in g)
///
/// Only `x` and `y` drive motion; `z` is kept so sources can pass the
/// device reading through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl MotionSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Sample from a planar tilt (z left at zero)
    pub fn planar(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// The two axes the kernel consumes
    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Whether both consumed axes are usable numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.xy().is_finite()
    }
}

/// Rectangular play area `[0, width] x [0, height]`, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArenaBounds")]
pub struct Arena {
    width: f32,
    height: f32,
}

/// Unchecked wire form of [`Arena`]
#[derive(Deserialize)]
struct ArenaBounds {
    width: f32,
    height: f32,
}

impl TryFrom<ArenaBounds> for Arena {
    type Error = KernelError;

    fn try_from(bounds: ArenaBounds) -> Result<Self> {
        Arena::new(bounds.width, bounds.height)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(KernelError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies on or inside the border
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Nearest point on or inside the border
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x.clamp(0.0, self.width), point.y.clamp(0.0, self.height))
    }
}

/// Position, velocity and acceleration of one moving entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl KinematicState {
    /// Entity at rest at `position`
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
