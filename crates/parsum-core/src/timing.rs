//! Timing accumulation for the benchmark loops.
//!
//! The drivers measure two spans per iteration: the kernel span (dispatch
//! plus device synchronization) and the application span (everything,
//! including the result read-back). `TimingStats` accumulates both and
//! produces the nanosecond averages the drivers print.

use std::time::Duration;

/// Accumulates per-iteration timings for a benchmark run.
///
/// Kernel time is accumulated over every iteration. Application time
/// discards the first iteration, which pays one-off costs (kernel JIT
/// compilation, pipeline setup, cold caches) that would dominate a short
/// run. The averages divide by `iterations` and `iterations - 1`
/// respectively.
#[derive(Debug, Default, Clone)]
pub struct TimingStats {
    kernel_total: Duration,
    application_total: Duration,
    iterations: u32,
}

impl TimingStats {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one iteration.
    ///
    /// `kernel` is the device-side span (dispatch + sync); `application`
    /// is the end-to-end span including the result read-back.
    pub fn record(&mut self, kernel: Duration, application: Duration) {
        self.kernel_total += kernel;
        if self.iterations != 0 {
            self.application_total += application;
        }
        self.iterations += 1;
    }

    /// Record an iteration with no separate kernel span (CPU drivers).
    pub fn record_application(&mut self, application: Duration) {
        self.record(Duration::ZERO, application);
    }

    /// Number of recorded iterations.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Average kernel time in nanoseconds over all iterations.
    pub fn average_kernel_ns(&self) -> u128 {
        if self.iterations == 0 {
            return 0;
        }
        self.kernel_total.as_nanos() / self.iterations as u128
    }

    /// Average application time in nanoseconds, excluding the discarded
    /// first iteration.
    pub fn average_application_ns(&self) -> u128 {
        if self.iterations < 2 {
            return 0;
        }
        self.application_total.as_nanos() / (self.iterations - 1) as u128
    }
}
