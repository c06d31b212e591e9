//! GPU sum-reduction backend for the parsum benchmarks using CubeCL.
//!
//! This crate provides the four GPU sum-reduction strategies the
//! `reduce_gpu` benchmark driver dispatches, together with the runtime
//! wrapper and host/device memory transfer they need.
//!
//! # Feature Flags
//!
//! - `cuda`: Enable CUDA backend (NVIDIA GPUs)
//! - `wgpu`: Enable WGPU backend (Vulkan/Metal/DirectX12)
//!
//! Both backend features imply the internal `gpu` feature that gates the
//! CubeCL-dependent modules; without either, only the error types build.
//!
//! # Examples
//!
//! ```rust,ignore
//! use parsum_gpu::{init_wgpu_runtime, sum_execute, to_device, ReduceStrategy};
//!
//! let runtime = init_wgpu_runtime()?;
//! let data: Vec<f64> = (0..1024).map(|i| i as f64).collect();
//! let data_gpu = to_device(&data, vec![1024], &runtime)?;
//! let sum = sum_execute::<_, f64>(ReduceStrategy::GroupLocal, &data_gpu, &runtime)?;
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;

#[cfg(feature = "gpu")]
pub mod runtime;

#[cfg(feature = "gpu")]
pub mod memory;

#[cfg(feature = "gpu")]
pub mod kernels;

#[cfg(feature = "gpu")]
pub mod ops;

// Re-exports
pub use error::{GpuError, Result};

#[cfg(feature = "gpu")]
pub use runtime::*;

#[cfg(feature = "gpu")]
pub use memory::*;

#[cfg(feature = "gpu")]
pub use kernels::*;

#[cfg(feature = "gpu")]
pub use ops::*;
