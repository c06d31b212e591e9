//! Error types for GPU operations.

use thiserror::Error;

/// Result type for GPU operations.
pub type Result<T> = std::result::Result<T, GpuError>;

/// Error types that can occur during GPU operations.
#[derive(Error, Debug)]
pub enum GpuError {
    /// GPU device not available or not found.
    #[error("GPU device not available: {0}")]
    DeviceNotAvailable(String),

    /// Invalid buffer size or dimensions.
    #[error("Invalid buffer size: expected {expected}, got {actual}")]
    InvalidBufferSize {
        /// Expected buffer size
        expected: usize,
        /// Actual buffer size
        actual: usize,
    },

    /// Kernel launch failed.
    #[error("Kernel launch failed: {0}")]
    KernelLaunchFailed(String),

    /// Memory transfer failed (host ↔ device).
    #[error("Memory transfer failed: {0}")]
    MemoryTransferFailed(String),

    /// Requested reduction strategy index does not exist.
    #[error("unknown algorithm {0}: please choose a number between 0-3")]
    UnknownStrategy(usize),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
