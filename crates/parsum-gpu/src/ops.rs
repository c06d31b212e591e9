//! Executable reduction operations.
//!
//! This module provides execution wrappers around the CubeCL kernels: the
//! strategy selector, the raw dispatch used by the timing loop, and a
//! convenience that runs one full reduction to a host scalar.

use crate::error::{GpuError, Result};
use crate::kernels::reduction::{
    sum_atomic_kernel, sum_group_joint_kernel, sum_group_local_kernel, sum_plane_kernel,
    UNITS_PER_CUBE,
};
use crate::memory::{to_cpu, to_device};
use crate::runtime::{GpuBuffer, RuntimeContext};
use cubecl::prelude::*;

/// Cap on the cube count for the joint-range strategy; chunks grow instead.
const MAX_CUBES: u32 = 1024;

/// GPU sum-reduction strategy.
///
/// The indices accepted by [`ReduceStrategy::from_index`] match the
/// `reduce_gpu` driver's CLI contract (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceStrategy {
    /// Every unit adds its element straight into the global accumulator.
    AtomicGlobal,
    /// Plane (subgroup) reduction primitive, one atomic add per plane.
    PlanePrimitive,
    /// Shared-memory tree per cube, one atomic add per cube.
    GroupLocal,
    /// Capped cube count; each cube reduces a contiguous chunk cooperatively.
    GroupJoint,
}

impl ReduceStrategy {
    /// All strategies, in CLI index order.
    pub const ALL: [ReduceStrategy; 4] = [
        ReduceStrategy::AtomicGlobal,
        ReduceStrategy::PlanePrimitive,
        ReduceStrategy::GroupLocal,
        ReduceStrategy::GroupJoint,
    ];

    /// Map a CLI algorithm index to a strategy.
    ///
    /// # Errors
    ///
    /// Returns [`GpuError::UnknownStrategy`] for indices outside 0-3.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GpuError::UnknownStrategy(index))
    }
}

/// Dispatch the sum kernel for `strategy` without synchronizing.
///
/// `acc` must be a zeroed one-element accumulator; the kernel adds the
/// array total into it. The dispatch is asynchronous: callers time it by
/// following up with [`RuntimeContext::sync`], and read the result back
/// separately. Empty input is a no-op.
///
/// # Example
///
/// ```ignore
/// let acc = zeroed_accumulator::<_, f64>(&runtime)?;
/// launch_sum::<_, f64>(ReduceStrategy::GroupLocal, &input_gpu, &acc, &runtime)?;
/// runtime.sync();
/// let total: Vec<f64> = to_cpu(&acc, &runtime)?;
/// ```
pub fn launch_sum<R: Runtime, F: Float + CubeElement>(
    strategy: ReduceStrategy,
    input: &GpuBuffer<R>,
    acc: &GpuBuffer<R>,
    runtime: &RuntimeContext<R>,
) -> Result<()> {
    if acc.len() != 1 {
        return Err(GpuError::InvalidBufferSize {
            expected: 1,
            actual: acc.len(),
        });
    }

    let len = input.len();
    if len == 0 {
        return Ok(());
    }

    let cube_dim = CubeDim::new(UNITS_PER_CUBE, 1, 1);
    let num_cubes = (len as u32 + UNITS_PER_CUBE - 1) / UNITS_PER_CUBE;

    let client = runtime.client();

    match strategy {
        ReduceStrategy::AtomicGlobal => unsafe {
            sum_atomic_kernel::launch_unchecked::<F, R>(
                client,
                CubeCount::Static(num_cubes, 1, 1),
                cube_dim,
                ArrayArg::from_raw_parts(input.handle(), input.len(), 1),
                ArrayArg::from_raw_parts(acc.handle(), acc.len(), 1),
            );
        },
        ReduceStrategy::PlanePrimitive => unsafe {
            sum_plane_kernel::launch_unchecked::<F, R>(
                client,
                CubeCount::Static(num_cubes, 1, 1),
                cube_dim,
                ArrayArg::from_raw_parts(input.handle(), input.len(), 1),
                ArrayArg::from_raw_parts(acc.handle(), acc.len(), 1),
            );
        },
        ReduceStrategy::GroupLocal => unsafe {
            sum_group_local_kernel::launch_unchecked::<F, R>(
                client,
                CubeCount::Static(num_cubes, 1, 1),
                cube_dim,
                ArrayArg::from_raw_parts(input.handle(), input.len(), 1),
                ArrayArg::from_raw_parts(acc.handle(), acc.len(), 1),
            );
        },
        ReduceStrategy::GroupJoint => unsafe {
            // Cap the cube count and hand each cube a contiguous chunk.
            let cubes = Ord::min(num_cubes, MAX_CUBES);
            let chunk = (len as u32 + cubes - 1) / cubes;
            sum_group_joint_kernel::launch_unchecked::<F, R>(
                client,
                CubeCount::Static(cubes, 1, 1),
                cube_dim,
                ArrayArg::from_raw_parts(input.handle(), input.len(), 1),
                ArrayArg::from_raw_parts(acc.handle(), acc.len(), 1),
                ScalarArg::new(chunk),
            );
        },
    }

    Ok(())
}

/// Upload a fresh one-element accumulator holding `0.0`.
///
/// The kernels accumulate into the buffer rather than overwrite it, so the
/// timing loop uploads a new zero before every iteration.
pub fn zeroed_accumulator<R: Runtime, F: Float + CubeElement + bytemuck::Pod + Copy>(
    runtime: &RuntimeContext<R>,
) -> Result<GpuBuffer<R>> {
    to_device(&[F::new(0.0)], vec![1], runtime)
}

/// Execute one full sum reduction on GPU.
///
/// Allocates a zeroed accumulator, dispatches the selected strategy,
/// synchronizes, and reads the scalar back.
///
/// # Arguments
///
/// * `strategy` - Which reduction kernel to dispatch
/// * `input` - Input buffer to reduce
/// * `runtime` - Runtime context
///
/// # Returns
///
/// The sum as a single scalar value; `0.0` for empty input.
///
/// # Example
///
/// ```ignore
/// let data_gpu = to_device(&vec![1.0f64, 2.0, 3.0, 4.0], vec![4], &runtime)?;
/// let sum = sum_execute::<_, f64>(ReduceStrategy::AtomicGlobal, &data_gpu, &runtime)?; // 10.0
/// ```
pub fn sum_execute<R: Runtime, F: Float + CubeElement + bytemuck::Pod + Copy>(
    strategy: ReduceStrategy,
    input: &GpuBuffer<R>,
    runtime: &RuntimeContext<R>,
) -> Result<F> {
    if input.is_empty() {
        return Ok(F::new(0.0));
    }

    let acc = zeroed_accumulator::<R, F>(runtime)?;
    launch_sum::<R, F>(strategy, input, &acc, runtime)?;
    runtime.sync();

    let result: Vec<F> = to_cpu(&acc, runtime)?;
    Ok(result[0])
}
