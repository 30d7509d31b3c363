//! Player and turret driven once per frame
//!
//! The player spawns near the bottom-right corner and is steered by tilt.
//! The cannon sits at the arena centre and its turret tracks the player.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_START_INSET_X, PLAYER_START_Y};
use crate::error::Result;
use crate::health::Health;
use crate::platform::AccelerationSource;
use crate::sim::{Arena, FrameOutput, MotionSample, PlayerController, bearing};
use crate::tuning::Tuning;

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub player: FrameOutput,
    /// Turret sprite rotation in radians
    pub turret_rotation: f32,
}

/// One player, one cannon
#[derive(Debug, Clone)]
pub struct Scene {
    arena: Arena,
    player: PlayerController,
    turret_position: Vec2,
    turret_rotation: f32,
    pub player_health: Health,
    pub cannon_health: Health,
    frames: u64,
}

impl Scene {
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Result<Self> {
        let arena = Arena::new(width, height)?;
        let start = Vec2::new(width - PLAYER_START_INSET_X, PLAYER_START_Y);
        let player = PlayerController::new(arena, tuning, start)?;
        let turret_position = arena.center();
        let turret_rotation = bearing(turret_position, player.position());

        log::info!(
            "Scene {}x{}: player at ({:.0}, {:.0}), cannon at ({:.0}, {:.0})",
            width,
            height,
            player.position().x,
            player.position().y,
            turret_position.x,
            turret_position.y
        );

        Ok(Self {
            arena,
            player,
            turret_position,
            turret_rotation,
            player_health: Health::full(),
            cannon_health: Health::full(),
            frames: 0,
        })
    }

    /// Pull a sample from `source` and advance one frame
    pub fn tick(&mut self, source: &mut impl AccelerationSource, timestamp: f64) -> Result<SceneFrame> {
        let sample = source.sample();
        self.advance(sample, timestamp)
    }

    /// Advance one frame with an already-read sample
    pub fn advance(&mut self, sample: Option<MotionSample>, timestamp: f64) -> Result<SceneFrame> {
        let player = self.player.tick(sample, timestamp)?;
        self.turret_rotation = bearing(self.turret_position, player.position);
        self.frames += 1;

        Ok(SceneFrame {
            player,
            turret_rotation: self.turret_rotation,
        })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn turret_position(&self) -> Vec2 {
        self.turret_position
    }

    pub fn turret_rotation(&self) -> f32 {
        self.turret_rotation
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
