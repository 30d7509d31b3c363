//! Turret aiming

use glam::Vec2;

use crate::consts::PRESENTATION_OFFSET;

/// Angle from `origin` to `target` in radians, `atan2` convention.
///
/// Coincident points have no direction; they are defined to aim along +X
/// (angle 0) rather than relying on the math library's `atan2(0, 0)`.
pub fn raw_bearing(origin: Vec2, target: Vec2) -> f32 {
    let delta = target - origin;
    if delta == Vec2::ZERO {
        return 0.0;
    }
    delta.y.atan2(delta.x)
}

/// Sprite rotation that points a turret at `origin` toward `target`.
///
/// Recomputed from scratch every frame, no smoothing.
#[inline]
pub fn bearing(origin: Vec2, target: Vec2) -> f32 {
    raw_bearing(origin, target) - PRESENTATION_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_bearing_along_axes() {
        assert!((bearing(Vec2::ZERO, Vec2::new(1.0, 0.0)) - (-FRAC_PI_2)).abs() < 1e-6);
        assert!(bearing(Vec2::ZERO, Vec2::new(0.0, 5.0)).abs() < 1e-6);
        assert!((bearing(Vec2::ZERO, Vec2::new(-3.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_from_offset_origin() {
        let origin = Vec2::new(100.0, 100.0);
        let target = Vec2::new(110.0, 110.0);
        assert!((raw_bearing(origin, target) - PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_points_are_defined() {
        let p = Vec2::new(42.0, -7.0);
        assert_eq!(raw_bearing(p, p), 0.0);
        assert_eq!(bearing(p, p), -FRAC_PI_2);
        assert_eq!(bearing(Vec2::ZERO, Vec2::ZERO), -FRAC_PI_2);
    }
}
