pub mod config;
pub mod copy;
pub mod cpu;
pub mod driver;
pub mod error;
pub mod report;
pub mod runner;
pub mod timing;

pub use config::{
    default_thread_count, BenchConfig, BASE_SIZE, DEFAULT_MAX_SIZE, DEFAULT_REPETITIONS,
};
pub use copy::{
    best_level, copy_auto, copy_avx2, copy_avx512, copy_scalar, copy_sse, is_avx2_available,
    is_avx512_available, is_sse2_available, simd_info, SimdInfo, SimdLevel,
};
pub use cpu::CpuInfo;
pub use driver::{generate_sizes, run_sizes, run_suite, VARIANTS};
pub use error::{BenchError, Result};
pub use report::{format_size, output_filename, ResultRow, ResultTable, CSV_HEADER};
pub use runner::{run_timed, RunReport};
pub use timing::{measure, ScaledDuration, TimeUnit, UNIT_THRESHOLD};
