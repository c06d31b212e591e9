//! GPU sum-reduction micro-benchmark.
//!
//! Sums the sequence `0, 1, …, size-1` on the GPU with one of four kernel
//! strategies, timing each iteration's dispatch (kernel time) and
//! dispatch-plus-read-back (application time).
//!
//! ```text
//! cargo run -p reduce_gpu --release --features cuda -- 2 --iters 10 --size 1048576
//! ```

use clap::Parser;

/// Benchmark the GPU sum-reduction strategies.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Reduction strategy: 0 = atomic, 1 = plane primitive, 2 = group
    /// local, 3 = group joint-range.
    #[arg(default_value_t = 0)]
    alg: usize,

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

fn main() -> parsum_gpu::Result<()> {
    env_logger::init();
    let args = Args::parse();

    #[cfg(feature = "cuda")]
    {
        match parsum_gpu::init_cuda_runtime() {
            Ok(runtime) => run_benchmark(&args, &runtime)?,
            Err(e) => println!("CUDA not available: {:?}", e),
        }
    }

    #[cfg(all(feature = "wgpu", not(feature = "cuda")))]
    {
        match parsum_gpu::init_wgpu_runtime() {
            Ok(runtime) => run_benchmark(&args, &runtime)?,
            Err(e) => println!("WGPU not available: {:?}", e),
        }
    }

    #[cfg(not(any(feature = "cuda", feature = "wgpu")))]
    {
        let _ = &args;
        println!("No GPU features enabled!");
        println!("Build with: cargo run -p reduce_gpu --features cuda");
        println!("        or: cargo run -p reduce_gpu --features wgpu");
    }

    Ok(())
}

#[cfg(any(feature = "cuda", feature = "wgpu"))]
fn run_benchmark<R: parsum_gpu::CubeclRuntime>(
    args: &Args,
    runtime: &parsum_gpu::RuntimeContext<R>,
) -> parsum_gpu::Result<()> {
    use parsum_core::{iota, iota_sum, TimingStats};
    use parsum_gpu::{launch_sum, to_cpu, to_device, zeroed_accumulator, GpuError, ReduceStrategy};
    use std::time::Instant;

    let strategy = ReduceStrategy::from_index(args.alg)?;

    let (max_page, align) = runtime.memory_properties();
    log::info!(
        "backend: {}, strategy: {:?}, size: {}, iters: {}",
        runtime.backend_name(),
        strategy,
        args.size,
        args.iters
    );
    log::debug!("device memory: max_page={}B, alignment={}B", max_page, align);

    let input = iota(args.size);
    let input_gpu = to_device(&input, vec![args.size], runtime)?;

    let mut stats = TimingStats::new();
    let mut output = 0.0f64;

    for _ in 0..args.iters {
        // Fresh zero before the clock starts; the kernels accumulate.
        let acc = zeroed_accumulator::<R, f64>(runtime)?;

        let start = Instant::now();
        launch_sum::<R, f64>(strategy, &input_gpu, &acc, runtime)?;
        runtime.sync();
        let kernel_time = start.elapsed();

        let result: Vec<f64> = to_cpu(&acc, runtime)?;
        let application_time = start.elapsed();

        output = result[0];
        stats.record(kernel_time, application_time);
    }

    let expected = iota_sum(args.size);
    if (output - expected).abs() > expected.abs() * 1e-9 + 1e-9 {
        return Err(GpuError::Other(format!(
            "sum mismatch: got {}, expected {}",
            output, expected
        )));
    }

    println!(
        " array size: {} output: {} average kernel_time (ns): {} average application time (ns): {}",
        args.size,
        output,
        stats.average_kernel_ns(),
        stats.average_application_ns()
    );

    Ok(())
}
