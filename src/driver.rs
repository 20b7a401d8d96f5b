use std::hint::black_box;

use anyhow::Result;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::{BenchConfig, BASE_SIZE};
use crate::copy;
use crate::report::{format_size, ResultRow, ResultTable, VARIANT_COUNT};
use crate::runner::run_timed;

type CopyFn = fn(&mut [u8], &[u8]);

/// Run order per variant: scalar baseline first, then widening vector
/// registers.
pub const VARIANTS: [(&str, CopyFn); VARIANT_COUNT] = [
    ("scalar", copy::copy_scalar),
    ("sse", copy::copy_sse),
    ("avx2", copy::copy_avx2),
    ("avx512", copy::copy_avx512),
];

/// Candidate buffer lengths: doubling from [`BASE_SIZE`] up to
/// `max_size`, each jittered upward by less than its base. Jitter keeps
/// the list strictly increasing since every element stays below the
/// next base.
pub fn generate_sizes(max_size: usize, seed: Option<u64>) -> Vec<usize> {
    match seed {
        Some(seed) => jittered_sizes(max_size, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => jittered_sizes(max_size, &mut rand::rng()),
    }
}

fn jittered_sizes<R: Rng>(max_size: usize, rng: &mut R) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut base = BASE_SIZE;
    while base <= max_size {
        sizes.push(base + rng.random_range(0..base));
        base *= 2;
    }
    sizes
}

/// Benchmark every variant at every generated size.
pub fn run_suite(config: &BenchConfig) -> Result<ResultTable> {
    config.validate()?;
    let sizes = generate_sizes(config.max_size, config.seed);
    run_sizes(config, &sizes)
}

/// Benchmark every variant at the given sizes, in order.
///
/// One row per size; a fresh index-initialized source and zeroed
/// destination pair is allocated per worker thread, inside that
/// worker's untimed setup.
pub fn run_sizes(config: &BenchConfig, sizes: &[usize]) -> Result<ResultTable> {
    config.validate()?;
    let repetitions = config.repetitions;
    let threads = config.threads;

    let mut table = ResultTable::new();

    for &size in sizes {
        let fmt_size = format_size(size);
        println!("copy size {}", fmt_size);

        let timings: [String; VARIANT_COUNT] = std::array::from_fn(|i| {
            let (label, copy_fn) = VARIANTS[i];
            let report = run_timed(label, threads, || {
                let src = source_buffer(size);
                let mut dst = vec![0u8; size];
                move || {
                    for _ in 0..repetitions {
                        copy_fn(&mut dst, &src);
                    }
                    black_box(&dst);
                }
            });

            let scaled = report.scaled();
            println!("  {:<8} {}", label, scaled);
            scaled.to_string()
        });
        println!();

        table.push(ResultRow {
            size,
            fmt_size,
            timings,
        });
    }

    Ok(table)
}

fn source_buffer(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}
