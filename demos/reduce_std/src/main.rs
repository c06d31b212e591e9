//! Standard-library sum-reduction micro-benchmark.
//!
//! Sums the sequence `0, 1, …, size-1` with a plain sequential iterator,
//! the baseline the parallel drivers are compared against.

use clap::Parser;
use parsum_core::{iota, sum, ExecutionStrategy, TimingStats};
use std::time::Instant;

/// Benchmark the standard-library sequential sum reduction.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Timing-loop iterations; the first application sample is discarded.
    #[arg(long, default_value_t = 2, value_parser = parse_iters)]
    iters: u32,

    /// Input array length.
    #[arg(long, default_value_t = 1 << 15)]
    size: usize,
}

fn parse_iters(raw: &str) -> Result<u32, String> {
    let iters: u32 = raw.parse().map_err(|e| format!("{e}"))?;
    if iters < 2 {
        return Err("at least 2 iterations are required (the first is discarded)".into());
    }
    Ok(iters)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = iota(args.size);
    log::info!("size: {}, iters: {}", args.size, args.iters);

    let mut stats = TimingStats::new();
    let mut output = 0.0f64;

    for _ in 0..args.iters {
        let start = Instant::now();
        output = sum(&input, ExecutionStrategy::Serial);
        stats.record_application(start.elapsed());
    }

    println!(
        " array size: {} output: {} average application time (ns): {}",
        args.size,
        output,
        stats.average_application_ns()
    );
}
