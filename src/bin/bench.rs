use std::path::Path;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use vcopy::{
    driver, output_filename, simd_info, BenchConfig, CpuInfo, DEFAULT_MAX_SIZE,
    DEFAULT_REPETITIONS,
};

fn main() -> Result<()> {
    let matches = Command::new("vcopy-bench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scalar vs vectorized memory-copy micro-benchmark")
        .arg(
            Arg::new("threads")
                .help("Worker threads per benchmark (default: half the available cores)")
                .long("threads")
                .short('t')
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("repetitions")
                .help("Copies per timed region")
                .long("repetitions")
                .short('n')
                .value_parser(clap::value_parser!(usize))
                .default_value(DEFAULT_REPETITIONS.to_string()),
        )
        .arg(
            Arg::new("max_size_mb")
                .help("Upper bound of the size sweep in MB")
                .long("max-size-mb")
                .value_parser(clap::value_parser!(usize))
                .default_value((DEFAULT_MAX_SIZE / (1024 * 1024)).to_string()),
        )
        .arg(
            Arg::new("seed")
                .help("Seed the size jitter for a reproducible sweep")
                .long("seed")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("no_csv")
                .help("Skip writing the result file")
                .long("no-csv")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = BenchConfig::new();
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        config = config.with_threads(threads);
    }
    if let Some(&repetitions) = matches.get_one::<usize>("repetitions") {
        config = config.with_repetitions(repetitions);
    }
    if let Some(&max_size_mb) = matches.get_one::<usize>("max_size_mb") {
        config = config.with_max_size_mb(max_size_mb);
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let cpu = CpuInfo::query();
    print_banner(&config, &cpu);

    let table = driver::run_suite(&config)?;

    if !matches.get_flag("no_csv") {
        let filename = output_filename(config.threads, config.repetitions, &cpu.brand);
        match table.save(Path::new(&filename)) {
            Ok(()) => println!("results written to {}", filename),
            Err(err) => eprintln!("{}", err),
        }
    }

    Ok(())
}

fn print_banner(config: &BenchConfig, cpu: &CpuInfo) {
    let info = simd_info();
    println!("=== vcopy ===");
    println!("  CPU:      {} ({})", cpu.brand, cpu.vendor);
    println!("  SSE2:     {}", if info.sse2 { "yes" } else { "no" });
    println!("  AVX2:     {}", if info.avx2 { "yes" } else { "no" });
    println!("  AVX-512:  {}", if info.avx512 { "yes" } else { "no" });
    println!("  Best:     {}", info.best_available());
    println!(
        "  Threads:  {}, repetitions: {}, max size: {} MB",
        config.threads,
        config.repetitions,
        config.max_size / (1024 * 1024)
    );
    println!();
}
