//! GPU kernel implementations using CubeCL.
//!
//! This module contains the sum-reduction kernels, one per strategy.
//! Each kernel is annotated with `#[cube(launch_unchecked)]` for CubeCL
//! compilation.

// CubeCL's #[cube] macro generates code without docs
#![allow(missing_docs)]

pub mod reduction;

// Re-export commonly used kernels
pub use reduction::*;
