//! Per-frame tick
//!
//! Runs the motion pipeline for one entity in a fixed order:
//! filter -> integrate -> boundary -> orientation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary::{self, BoundaryContact};
use super::filter::SignalFilter;
use super::motion::{self, Timestep};
use super::orientation::{self, OrientationState};
use super::state::{Arena, KinematicState, MotionSample};
use crate::error::Result;
use crate::tuning::Tuning;

/// Turns frame timestamps into clamped timesteps.
///
/// `dt = clamp(now - last, min_frame_time, max_frame_time)`. The first frame
/// has no previous timestamp and uses `min_frame_time`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    min_frame_time: f64,
    max_frame_time: f64,
}

impl FrameClock {
    pub fn new(min_frame_time: f64, max_frame_time: f64) -> Self {
        Self {
            last_time: None,
            min_frame_time,
            max_frame_time,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.min_frame_time, tuning.max_frame_time)
    }

    /// Record `now` (seconds) and return the step since the previous frame
    pub fn advance(&mut self, now: f64) -> Result<Timestep> {
        let elapsed = match self.last_time {
            _ if !now.is_finite() => {
                log::warn!("Non-finite frame timestamp {now}, using minimum step");
                self.min_frame_time
            }
            None => self.min_frame_time,
            Some(last) => {
                if now < last {
                    log::warn!("Frame timestamp went backwards ({last} -> {now}), using minimum step");
                }
                now - last
            }
        };
        if now.is_finite() {
            self.last_time = Some(now);
        }

        let dt = elapsed.clamp(self.min_frame_time, self.max_frame_time);
        Timestep::new(dt as f32)
    }

    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }
}

/// What the renderer needs after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Sprite rotation in radians (heading - 90°)
    pub render_rotation: f32,
    #[serde(skip)]
    pub contact: BoundaryContact,
}

/// Motion controller for one tilt-driven entity
#[derive(Debug, Clone)]
pub struct PlayerController {
    tuning: Tuning,
    arena: Arena,
    filter: SignalFilter,
    kinematics: KinematicState,
    orientation: OrientationState,
    clock: FrameClock,
}

impl PlayerController {
    /// Create a controller at rest at `start` (clamped into the arena)
    pub fn new(arena: Arena, tuning: Tuning, start: Vec2) -> Result<Self> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            arena,
            filter: SignalFilter::new(tuning.filter_factor),
            kinematics: KinematicState::at(arena.clamp(start)),
            orientation: OrientationState::default(),
            clock: FrameClock::from_tuning(&tuning),
        })
    }

    /// Advance using a frame timestamp (seconds)
    pub fn tick(&mut self, sample: Option<MotionSample>, timestamp: f64) -> Result<FrameOutput> {
        let dt = self.clock.advance(timestamp)?;
        Ok(self.step(sample, dt))
    }

    /// Advance by an explicit timestep
    pub fn step(&mut self, sample: Option<MotionSample>, dt: Timestep) -> FrameOutput {
        let sample = sample.filter(|sample| {
            let usable = sample.is_finite();
            if !usable {
                log::warn!("Non-finite acceleration sample {sample:?}, treating as missing");
            }
            usable
        });

        // A sensor gap keeps the previous (possibly bounce-damped) acceleration
        let acceleration = match sample {
            Some(sample) => {
                let filtered = self.filter.apply(Some(sample));
                motion::acceleration_from_tilt(filtered, self.tuning.max_acceleration)
            }
            None => self.kinematics.acceleration,
        };

        let moved = motion::integrate(&self.kinematics, acceleration, dt, self.tuning.max_speed);
        let hit = boundary::resolve(&moved, &self.arena, self.tuning.collision_damping);
        if hit.contact.any() {
            log::debug!(
                "Border hit at ({:.1}, {:.1}) x={} y={}",
                hit.state.position.x,
                hit.state.position.y,
                hit.contact.collided_x,
                hit.contact.collided_y
            );
        }
        self.kinematics = hit.state;

        self.orientation = orientation::update(
            &self.orientation,
            self.kinematics.velocity,
            self.tuning.rotation_threshold,
            self.tuning.rotation_blend,
        );

        FrameOutput {
            position: self.kinematics.position,
            velocity: self.kinematics.velocity,
            render_rotation: self.orientation.render_rotation(),
            contact: hit.contact,
        }
    }

    pub fn kinematics(&self) -> &KinematicState {
        &self.kinematics
    }

    /// Replace the kinematic state (position is clamped into the arena)
    pub fn set_kinematics(&mut self, mut state: KinematicState) {
        state.position = self.arena.clamp(state.position);
        self.kinematics = state;
    }

    pub fn orientation(&self) -> &OrientationState {
        &self.orientation
    }

    pub fn filter(&self) -> &SignalFilter {
        &self.filter
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MIN_FRAME_TIME;
    use crate::error::KernelError;

    fn arena() -> Arena {
        Arena::new(200.0, 200.0).unwrap()
    }

    fn dt(seconds: f32) -> Timestep {
        Timestep::new(seconds).unwrap()
    }

    #[test]
    fn test_clock_first_frame_uses_minimum() {
        let mut clock = FrameClock::new(MIN_FRAME_TIME, 0.25);
        let first = clock.advance(1234.5).unwrap();
        assert!((first.seconds() - MIN_FRAME_TIME as f32).abs() < 1e-6);
        assert_eq!(clock.last_time(), Some(1234.5));
    }

    #[test]
    fn test_clock_clamps_short_long_and_backwards_gaps() {
        let mut clock = FrameClock::new(MIN_FRAME_TIME, 0.25);
        clock.advance(10.0).unwrap();

        // 60 Hz frame is stretched to the 30 Hz minimum
        let short = clock.advance(10.0 + 1.0 / 60.0).unwrap();
        assert!((short.seconds() - MIN_FRAME_TIME as f32).abs() < 1e-6);

        let normal = clock.advance(10.0 + 1.0 / 60.0 + 0.05).unwrap();
        assert!((normal.seconds() - 0.05).abs() < 1e-5);

        let stall = clock.advance(15.0).unwrap();
        assert!((stall.seconds() - 0.25).abs() < 1e-6);

        let backwards = clock.advance(14.0).unwrap();
        assert!((backwards.seconds() - MIN_FRAME_TIME as f32).abs() < 1e-6);

        let repeated = clock.advance(14.0).unwrap();
        assert!(repeated.seconds() > 0.0);

        let nan = clock.advance(f64::NAN).unwrap();
        assert!((nan.seconds() - MIN_FRAME_TIME as f32).abs() < 1e-6);
        assert_eq!(clock.last_time(), Some(14.0));
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            collision_damping: -0.1,
            ..Default::default()
        };
        let err = PlayerController::new(arena(), tuning, Vec2::ZERO).unwrap_err();
        assert!(matches!(err, KernelError::InvalidTuning(_)));
    }

    #[test]
    fn test_start_clamped_into_arena() {
        let player =
            PlayerController::new(arena(), Tuning::default(), Vec2::new(350.0, -5.0)).unwrap();
        assert_eq!(player.position(), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_end_to_end_bounce_off_right_wall() {
        let mut player =
            PlayerController::new(arena(), Tuning::default(), Vec2::new(190.0, 100.0)).unwrap();
        player.set_kinematics(KinematicState {
            position: Vec2::new(190.0, 100.0),
            velocity: Vec2::new(50.0, 0.0),
            acceleration: Vec2::ZERO,
        });

        let first = player.step(None, dt(0.1));
        assert!((first.position.x - 195.0).abs() < 1e-4);
        assert!(!first.contact.collided_x);

        let second = player.step(None, dt(0.1));
        assert_eq!(second.position.x, 200.0);
        assert!(second.contact.collided_x);
        assert!(!second.contact.collided_y);
        assert!((second.velocity.x - (-20.0)).abs() < 1e-4);
        assert_eq!(second.velocity.y, 0.0);
        assert_eq!(second.position.y, 100.0);
    }

    #[test]
    fn test_tilt_drives_player() {
        let mut player =
            PlayerController::new(arena(), Tuning::default(), Vec2::new(100.0, 100.0)).unwrap();
        // Tilt Y negative -> push right
        let out = player.step(Some(MotionSample::planar(0.0, -1.0)), dt(0.1));
        // filtered y = -0.75, a.x = 300, v.x = 30, p.x = 103
        assert!((player.kinematics().acceleration.x - 300.0).abs() < 1e-3);
        assert!((out.velocity.x - 30.0).abs() < 1e-3);
        assert!((out.position.x - 103.0).abs() < 1e-3);
        assert_eq!(out.velocity.y, 0.0);
    }

    #[test]
    fn test_sensor_gap_keeps_acceleration_and_filter() {
        let mut player =
            PlayerController::new(arena(), Tuning::default(), Vec2::new(100.0, 100.0)).unwrap();
        player.step(Some(MotionSample::planar(0.5, 0.0)), dt(0.05));
        let filter_before = player.filter().state();
        let accel_before = player.kinematics().acceleration;

        let out = player.step(None, dt(0.05));
        assert_eq!(player.filter().state(), filter_before);
        assert_eq!(player.kinematics().acceleration, accel_before);
        // Still accelerating upward
        assert!(out.velocity.y > 0.0);
    }

    #[test]
    fn test_non_finite_sample_does_not_escape_arena() {
        let mut player =
            PlayerController::new(arena(), Tuning::default(), Vec2::new(100.0, 100.0)).unwrap();
        player.step(Some(MotionSample::planar(0.2, -0.3)), dt(0.05));
        let accel_before = player.kinematics().acceleration;

        let out = player.step(Some(MotionSample::planar(f32::NAN, 0.0)), dt(0.05));
        assert!(out.position.is_finite());
        assert_eq!(player.kinematics().acceleration, accel_before);

        player.step(Some(MotionSample::planar(0.0, f32::INFINITY)), dt(0.05));
        for _ in 0..100 {
            let out = player.step(Some(MotionSample::planar(0.0, 0.0)), dt(0.05));
            assert!(out.position.is_finite());
            assert!(out.velocity.is_finite());
            assert!(player.arena().contains(out.position));
        }
        assert!(player.filter().state().xy().is_finite());
        assert!(player.orientation().smoothed.is_finite());
    }

    #[test]
    fn test_orientation_follows_velocity() {
        let mut player =
            PlayerController::new(arena(), Tuning::default(), Vec2::new(100.0, 100.0)).unwrap();
        player.set_kinematics(KinematicState {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(0.0, 100.0),
            acceleration: Vec2::ZERO,
        });
        let out = player.step(None, dt(MIN_FRAME_TIME as f32));
        let expected = std::f32::consts::FRAC_PI_2 * 0.2 - std::f32::consts::FRAC_PI_2;
        assert!((out.render_rotation - expected).abs() < 1e-5);

        // Slow drift holds the facing
        player.set_kinematics(KinematicState {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(10.0, 0.0),
            acceleration: Vec2::ZERO,
        });
        let held = player.step(None, dt(MIN_FRAME_TIME as f32));
        assert_eq!(held.render_rotation, out.render_rotation);
    }

    #[test]
    fn test_invariants_hold_over_long_run() {
        let mut player =
            PlayerController::new(arena(), Tuning::default(), Vec2::new(150.0, 60.0)).unwrap();
        let tilts = [(1.0, -1.0), (-1.0, 1.0), (0.3, 0.9), (-0.8, -0.6)];
        let mut t = 0.0;
        for frame in 0..600 {
            let (x, y) = tilts[(frame / 75) % tilts.len()];
            let sample = (frame % 7 != 0).then(|| MotionSample::planar(x, y));
            t += 1.0 / 60.0;
            let out = player.tick(sample, t).unwrap();
            assert!(out.velocity.x.abs() <= 200.0);
            assert!(out.velocity.y.abs() <= 200.0);
            assert!(player.arena().contains(out.position));
            assert!(out.render_rotation.is_finite());
        }
    }
}
