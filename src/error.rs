//! Kernel error types

/// Errors raised at the kernel's input contract boundaries
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    #[error("Invalid timestep: {0} s (must be finite and > 0)")]
    InvalidTimestep(f32),

    #[error("Invalid arena: {width}x{height} (dimensions must be finite and > 0)")]
    InvalidArena { width: f32, height: f32 },

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KernelError>;
