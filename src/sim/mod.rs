//! Motion simulation module
//!
//! All per-frame motion logic lives here. This module must stay pure:
//! - No wall clock (callers pass timestamps or timesteps)
//! - No device access (callers pass samples)
//! - No rendering or platform dependencies

pub mod bearing;
pub mod boundary;
pub mod filter;
pub mod motion;
pub mod orientation;
pub mod state;
pub mod tick;

pub use bearing::{bearing, raw_bearing};
pub use boundary::{BoundaryContact, BoundaryHit, resolve};
pub use filter::{FilterState, SignalFilter};
pub use motion::{Timestep, acceleration_from_tilt, integrate};
pub use orientation::{BranchCut, OrientationState, unwrap_heading};
pub use state::{Arena, KinematicState, MotionSample};
pub use tick::{FrameClock, FrameOutput, PlayerController};
