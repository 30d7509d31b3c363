//! Built-in acceleration sources
//!
//! Real devices plug in through [`AccelerationSource`]; these cover the
//! no-sensor case, deterministic replays, and a seeded noisy tilt for demos.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::AccelerationSource;
use crate::sim::MotionSample;

/// Device without an accelerometer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl AccelerationSource for NoSensor {
    fn sample(&mut self) -> Option<MotionSample> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Replays a fixed sequence of readings, then reports no data
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    samples: VecDeque<Option<MotionSample>>,
}

impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = Option<MotionSample>>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Same reading repeated `frames` times
    pub fn constant(sample: MotionSample, frames: usize) -> Self {
        Self::new(std::iter::repeat_n(Some(sample), frames))
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl AccelerationSource for ScriptedSource {
    fn sample(&mut self) -> Option<MotionSample> {
        self.samples.pop_front().flatten()
    }
}

/// Constant tilt plus uniform jitter from a seeded RNG.
///
/// `dropout` is the chance per frame that no reading arrives.
#[derive(Debug, Clone)]
pub struct NoisyTilt {
    tilt: MotionSample,
    jitter: f32,
    dropout: f64,
    rng: Pcg32,
}

impl NoisyTilt {
    pub fn new(tilt: MotionSample, jitter: f32, seed: u64) -> Self {
        Self {
            tilt,
            jitter: if jitter.is_finite() { jitter.abs() } else { 0.0 },
            dropout: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn with_dropout(mut self, dropout: f64) -> Self {
        self.dropout = dropout.clamp(0.0, 1.0);
        self
    }

    /// Change the underlying tilt (jitter and RNG stream continue)
    pub fn set_tilt(&mut self, tilt: MotionSample) {
        self.tilt = tilt;
    }
}

impl AccelerationSource for NoisyTilt {
    fn sample(&mut self) -> Option<MotionSample> {
        if self.dropout > 0.0 && self.rng.random_bool(self.dropout) {
            return None;
        }
        if self.jitter == 0.0 {
            return Some(self.tilt);
        }
        let j = self.jitter;
        Some(MotionSample::new(
            self.tilt.x + self.rng.random_range(-j..=j),
            self.tilt.y + self.rng.random_range(-j..=j),
            self.tilt.z,
        ))
    }
}
