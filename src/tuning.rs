//! Motion tuning
//!
//! Every constant the kernel reads lives here so a level or device profile
//! can override it from JSON. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{KernelError, Result};

/// Motion constants for one controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Acceleration for a 1g tilt (points/s²)
    pub max_acceleration: f32,
    /// Per-axis speed cap (points/s)
    pub max_speed: f32,
    /// Velocity/acceleration fraction kept after a border hit (0 - 1)
    pub collision_damping: f32,
    /// Weight of the newest sample in the input filter (0 - 1)
    pub filter_factor: f32,
    /// Speed at or below which heading is held (points/s)
    pub rotation_threshold: f32,
    /// Weight of the newest heading in the rotation blend (0 - 1)
    pub rotation_blend: f32,
    /// Shortest frame step (seconds)
    pub min_frame_time: f64,
    /// Longest frame step (seconds)
    pub max_frame_time: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_acceleration: MAX_ACCELERATION,
            max_speed: MAX_SPEED,
            collision_damping: COLLISION_DAMPING,
            filter_factor: FILTER_FACTOR,
            rotation_threshold: ROTATION_THRESHOLD,
            rotation_blend: ROTATION_BLEND,
            min_frame_time: MIN_FRAME_TIME,
            max_frame_time: MAX_FRAME_TIME,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the clamps or produce NaN
    pub fn validate(&self) -> Result<()> {
        fn unit(name: &str, value: f32) -> Result<()> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(KernelError::InvalidTuning(format!(
                    "{name} must be within [0, 1], got {value}"
                )))
            }
        }

        if !(self.max_acceleration.is_finite() && self.max_acceleration >= 0.0) {
            return Err(KernelError::InvalidTuning(format!(
                "max_acceleration must be finite and >= 0, got {}",
                self.max_acceleration
            )));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(KernelError::InvalidTuning(format!(
                "max_speed must be finite and > 0, got {}",
                self.max_speed
            )));
        }
        if !(self.rotation_threshold.is_finite() && self.rotation_threshold >= 0.0) {
            return Err(KernelError::InvalidTuning(format!(
                "rotation_threshold must be finite and >= 0, got {}",
                self.rotation_threshold
            )));
        }
        unit("collision_damping", self.collision_damping)?;
        unit("filter_factor", self.filter_factor)?;
        unit("rotation_blend", self.rotation_blend)?;

        // Frame steps are applied in f32, so the bounds must survive the cast
        if !(self.min_frame_time.is_finite() && (self.min_frame_time as f32) > 0.0) {
            return Err(KernelError::InvalidTuning(format!(
                "min_frame_time must be finite and > 0, got {}",
                self.min_frame_time
            )));
        }
        if !(self.max_frame_time.is_finite()
            && (self.max_frame_time as f32).is_finite()
            && self.max_frame_time >= self.min_frame_time)
        {
            return Err(KernelError::InvalidTuning(format!(
                "max_frame_time must be >= min_frame_time ({}), got {}",
                self.min_frame_time, self.max_frame_time
            )));
        }
        Ok(())
    }
}
