//! Facing angle derived from velocity
//!
//! `atan2` jumps from +π to -π when the velocity swings through the
//! negative X axis. Blending across that jump would spin the sprite the long
//! way round, so the raw angle is first lifted onto a continuous heading that
//! accumulates full turns, and only then low-pass filtered.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PRESENTATION_OFFSET;
use crate::normalize_angle;

/// How the raw angle moved relative to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCut {
    /// Plain delta, no wrap
    None,
    /// Raw angle jumped up by more than π (crossed from -π to +π)
    CrossedPositive,
    /// Raw angle jumped down by more than π (crossed from +π to -π)
    CrossedNegative,
}

impl BranchCut {
    pub fn classify(prev_raw: f32, raw: f32) -> Self {
        if raw - prev_raw > PI {
            BranchCut::CrossedPositive
        } else if prev_raw - raw > PI {
            BranchCut::CrossedNegative
        } else {
            BranchCut::None
        }
    }

    /// Full turn that cancels the wrap
    #[inline]
    pub fn correction(self) -> f32 {
        match self {
            BranchCut::None => 0.0,
            BranchCut::CrossedPositive => -TAU,
            BranchCut::CrossedNegative => TAU,
        }
    }
}

/// Advance a continuous heading by the wrapped raw delta.
///
/// For raw angles in (-π, π] the returned heading never moves by more than π.
pub fn unwrap_heading(prev_raw: f32, raw: f32, prev_heading: f32) -> f32 {
    prev_heading + (raw - prev_raw) + BranchCut::classify(prev_raw, raw).correction()
}

/// Low-pass blend of the heading: `heading * blend + smoothed * (1 - blend)`
#[inline]
pub fn blend_heading(heading: f32, smoothed: f32, blend: f32) -> f32 {
    heading * blend + smoothed * (1.0 - blend)
}

/// Heading state of one entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationState {
    /// Continuous raw heading (radians, unbounded)
    pub heading: f32,
    /// Last wrapped `atan2` value, for the next crossing test
    pub last_raw: f32,
    /// Blended heading used for rendering (radians, unbounded)
    pub smoothed: f32,
}

impl OrientationState {
    /// Sprite rotation: smoothed heading minus the artwork offset
    #[inline]
    pub fn render_rotation(&self) -> f32 {
        self.smoothed - PRESENTATION_OFFSET
    }

    /// Smoothed heading folded into [-π, π)
    pub fn facing(&self) -> f32 {
        normalize_angle(self.smoothed)
    }
}

/// Update heading from velocity.
///
/// At or below `threshold` speed the state is returned unchanged so a
/// near-stationary entity keeps its last facing.
pub fn update(
    state: &OrientationState,
    velocity: Vec2,
    threshold: f32,
    blend: f32,
) -> OrientationState {
    if velocity.length() <= threshold {
        return *state;
    }

    let raw = velocity.y.atan2(velocity.x);
    let cut = BranchCut::classify(state.last_raw, raw);
    if cut != BranchCut::None {
        log::debug!("Heading crossed branch cut: {:?} ({} -> {})", cut, state.last_raw, raw);
    }

    let heading = unwrap_heading(state.last_raw, raw, state.heading);
    OrientationState {
        heading,
        last_raw: raw,
        smoothed: blend_heading(heading, state.smoothed, blend),
    }
}
