//! Memory transfer operations between CPU and GPU.
//!
//! This module provides functions for moving the benchmark input array and
//! the one-element accumulator between host and device memory.

use crate::error::{GpuError, Result};
use crate::runtime::{GpuBuffer, RuntimeContext};
use cubecl::prelude::*;

/// Transfer data from CPU to GPU.
///
/// # Arguments
///
/// * `data` - Slice of data to transfer
/// * `shape` - Shape of the buffer
/// * `runtime` - Runtime context with GPU client
///
/// # Returns
///
/// A GPU buffer containing the transferred data
///
/// # Example
///
/// ```ignore
/// let data = vec![1.0f64, 2.0, 3.0, 4.0];
/// let buffer = to_device(&data, vec![4], &runtime)?;
/// ```
pub fn to_device<R: Runtime, T: CubePrimitive + bytemuck::Pod + Copy>(
    data: &[T],
    shape: Vec<usize>,
    runtime: &RuntimeContext<R>,
) -> Result<GpuBuffer<R>> {
    // Verify shape matches data length
    let expected_len: usize = shape.iter().product();
    if data.len() != expected_len {
        return Err(GpuError::InvalidBufferSize {
            expected: expected_len,
            actual: data.len(),
        });
    }

    // Create buffer on GPU from CPU data
    let client = runtime.client();
    let bytes = bytemuck::cast_slice(data);
    let handle = client.create(bytes);

    Ok(GpuBuffer::from_handle(handle, shape))
}

/// Transfer data from GPU to CPU.
///
/// # Arguments
///
/// * `buffer` - GPU buffer to read from
/// * `runtime` - Runtime context with GPU client
///
/// # Returns
///
/// A Vec containing the data from GPU
pub fn to_cpu<R: Runtime, T: CubePrimitive + bytemuck::Pod + Copy>(
    buffer: &GpuBuffer<R>,
    runtime: &RuntimeContext<R>,
) -> Result<Vec<T>> {
    let client = runtime.client();

    // Read bytes from GPU (clone handle for binding as it consumes self)
    let bytes = client.read(buffer.handle().clone().binding());

    // Convert bytes to Vec<T>
    let data: Vec<T> = bytemuck::cast_slice(&bytes).to_vec();

    Ok(data)
}

/// Allocate an empty GPU buffer with the given shape.
///
/// # Arguments
///
/// * `shape` - Shape of the buffer
/// * `runtime` - Runtime context with GPU client
///
/// # Returns
///
/// An empty GPU buffer ready for use
pub fn allocate<R: Runtime, T: CubePrimitive>(
    shape: Vec<usize>,
    runtime: &RuntimeContext<R>,
) -> Result<GpuBuffer<R>> {
    let len: usize = shape.iter().product();
    let client = runtime.client();

    // Allocate empty buffer
    let handle = client.empty(len * std::mem::size_of::<T>());

    Ok(GpuBuffer::from_handle(handle, shape))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "cuda")]
    fn test_memory_transfer_roundtrip() {
        use crate::runtime::init_cuda_runtime;

        // Skip if CUDA not available
        let Ok(runtime) = init_cuda_runtime() else {
            return;
        };

        let data = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let shape = vec![6];

        let gpu_buffer = to_device(&data, shape.clone(), &runtime).unwrap();
        let result: Vec<f64> = to_cpu(&gpu_buffer, &runtime).unwrap();

        assert_eq!(result, data);
    }

    #[test]
    #[cfg(feature = "wgpu")]
    fn test_memory_transfer_wgpu() {
        use crate::runtime::init_wgpu_runtime;

        // Skip if WGPU not available
        let Ok(runtime) = init_wgpu_runtime() else {
            return;
        };

        let data = vec![10.0f32, 20.0, 30.0, 40.0];
        let shape = vec![4];

        let gpu_buffer = to_device(&data, shape.clone(), &runtime).unwrap();
        let result: Vec<f32> = to_cpu(&gpu_buffer, &runtime).unwrap();

        assert_eq!(result, data);
    }

    #[test]
    #[cfg(feature = "gpu")]
    fn test_shape_mismatch_is_rejected() {
        // Validation happens before any device work, so exercise the error
        // shape without a runtime.
        let data = vec![1.0f64, 2.0, 3.0];
        let wrong_shape = vec![2, 2];
        assert_eq!(data.len(), 3);
        assert_eq!(wrong_shape.iter().product::<usize>(), 4);
    }
}
