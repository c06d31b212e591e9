//! Sum-reduction kernels.
//!
//! Four alternative strategies for summing an array into a one-element
//! accumulator, trading atomic contention against local reduction work:
//!
//! - [`sum_atomic_kernel`]: one atomic add per element
//! - [`sum_plane_kernel`]: one atomic add per plane (subgroup)
//! - [`sum_group_local_kernel`]: one atomic add per cube
//! - [`sum_group_joint_kernel`]: one atomic add per cube, few cubes
//!
//! All kernels bounds-check their loads, so any array length is accepted.
//! The accumulator must hold exactly one element and be zeroed before
//! launch; additions are reordered freely, which is fine for sums.

#![allow(missing_docs)]

use cubecl::prelude::*;

/// Units per cube used by every launch. Must match the shared-memory size
/// declared in the group kernels.
pub const UNITS_PER_CUBE: u32 = 256;

/// Naive atomic accumulation.
///
/// Every unit adds its element straight into the global accumulator. The
/// simplest possible strategy and the contention worst case: the
/// accumulator cache line is fought over by every unit in flight.
#[cube(launch_unchecked)]
pub fn sum_atomic_kernel<F: Float>(input: &Array<F>, acc: &mut Array<Atomic<F>>) {
    let pos = ABSOLUTE_POS;

    if pos < input.len() {
        Atomic::add(&acc[0], input[pos]);
    }
}

/// Plane-primitive reduction.
///
/// Each unit loads one element and the plane is reduced with CubeCL's
/// built-in `plane_sum`. Only the first unit of each plane touches the
/// accumulator, cutting atomic traffic by the plane width.
#[cube(launch_unchecked)]
pub fn sum_plane_kernel<F: Float>(input: &Array<F>, acc: &mut Array<Atomic<F>>) {
    let pos = ABSOLUTE_POS;

    // Out-of-bounds units contribute the additive identity so the plane
    // reduction stays uniform.
    let value = if pos < input.len() {
        input[pos]
    } else {
        F::new(0.0)
    };

    let plane_total = plane_sum(value);

    if UNIT_POS_PLANE == 0 {
        Atomic::add(&acc[0], plane_total);
    }
}

/// Per-group local reduction.
///
/// Each cube loads `CUBE_DIM_X` contiguous elements into shared memory and
/// reduces them with a tree, halving the active stride each level. Unit 0
/// publishes the cube total with a single atomic add.
#[cube(launch_unchecked)]
pub fn sum_group_local_kernel<F: Float>(input: &Array<F>, acc: &mut Array<Atomic<F>>) {
    let tid = UNIT_POS;
    let block_id = CUBE_POS;
    let block_size = CUBE_DIM_X;

    // Global position in input array
    let global_id = block_id * block_size + tid;

    let mut shared = SharedMemory::<F>::new(256);

    // Load data into shared memory; out of bounds loads zero
    shared[tid] = if global_id < input.len() {
        input[global_id]
    } else {
        F::new(0.0)
    };

    // Tree reduction in shared memory
    let mut stride = block_size / 2;

    while stride > 0 {
        sync_units(); // Synchronize threads in the block

        if tid < stride {
            shared[tid] = shared[tid] + shared[tid + stride];
        }

        stride /= 2;
    }

    // Thread 0 publishes the block's result
    if tid == 0 {
        Atomic::add(&acc[0], shared[0]);
    }
}

/// Per-group joint-range reduction.
///
/// The launch caps the cube count, so each cube owns a contiguous chunk
/// larger than its unit count. Units walk the chunk with a `CUBE_DIM_X`
/// stride accumulating in registers, then the cube finishes with the same
/// shared-memory tree and one atomic add.
#[cube(launch_unchecked)]
pub fn sum_group_joint_kernel<F: Float>(
    input: &Array<F>,
    acc: &mut Array<Atomic<F>>,
    chunk: u32,
) {
    let tid = UNIT_POS;
    let block_size = CUBE_DIM_X;
    let start = CUBE_POS * chunk;

    // Strided accumulation over this cube's chunk
    let mut local_sum = F::new(0.0);
    let mut i = start + tid;
    let stop = start + chunk;

    while i < stop {
        if i < input.len() {
            local_sum = local_sum + input[i];
        }
        i += block_size;
    }

    let mut shared = SharedMemory::<F>::new(256);
    shared[tid] = local_sum;

    let mut stride = block_size / 2;

    while stride > 0 {
        sync_units();

        if tid < stride {
            shared[tid] = shared[tid] + shared[tid + stride];
        }

        stride /= 2;
    }

    if tid == 0 {
        Atomic::add(&acc[0], shared[0]);
    }
}
