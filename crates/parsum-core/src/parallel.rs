//! CPU reduction strategies.
//!
//! Two ways of summing a slice on the host: the standard-library iterator
//! (sequential) and rayon's parallel iterator. The drivers pick one; the
//! benches compare them.

use rayon::prelude::*;

/// Execution strategy for the CPU sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Single-threaded standard-library iterator sum.
    Serial,
    /// Rayon parallel iterator sum across worker threads.
    ParallelElements,
}

/// Sum `data` with the given strategy.
///
/// Both strategies compute the same value for the benchmark inputs; the
/// parallel one reorders additions, so exotic inputs may differ in the
/// last ulp.
pub fn sum(data: &[f64], strategy: ExecutionStrategy) -> f64 {
    match strategy {
        ExecutionStrategy::Serial => data.iter().sum(),
        ExecutionStrategy::ParallelElements => data.par_iter().sum(),
    }
}
