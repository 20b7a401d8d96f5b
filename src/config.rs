use crate::error::{BenchError, Result};

/// Repetitions of the copy inside each timed region.
pub const DEFAULT_REPETITIONS: usize = 100;

/// Smallest benchmarked buffer; the size list doubles from here.
pub const BASE_SIZE: usize = 16;

/// Upper bound of the size sweep, ~100 MiB.
pub const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

pub fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get() / 2)
        .unwrap_or(1)
        .max(1)
}

#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    pub repetitions: usize,
    pub threads: usize,
    pub max_size: usize,
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            threads: default_thread_count(),
            max_size: DEFAULT_MAX_SIZE,
            seed: None,
        }
    }

    pub const fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub const fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub const fn with_max_size_mb(mut self, size_mb: usize) -> Self {
        self.max_size = size_mb * 1024 * 1024;
        self
    }

    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(BenchError::InvalidArgument(
                "repetitions must be at least 1".into(),
            ));
        }
        if self.threads == 0 {
            return Err(BenchError::InvalidArgument(
                "thread count must be at least 1".into(),
            ));
        }
        if self.max_size < BASE_SIZE {
            return Err(BenchError::InvalidArgument(format!(
                "max size {} is below the {} byte base",
                self.max_size, BASE_SIZE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(BenchConfig::new().validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = BenchConfig::new()
            .with_repetitions(10)
            .with_threads(2)
            .with_max_size_mb(1)
            .with_seed(7);
        assert_eq!(config.repetitions, 10);
        assert_eq!(config.threads, 2);
        assert_eq!(config.max_size, 1024 * 1024);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn rejects_zero_and_undersized() {
        assert!(BenchConfig::new().with_repetitions(0).validate().is_err());
        assert!(BenchConfig::new().with_threads(0).validate().is_err());
        assert!(BenchConfig::new().with_max_size(8).validate().is_err());
    }

    #[test]
    fn thread_default_is_nonzero() {
        assert!(default_thread_count() >= 1);
    }
}
