use std::time::Duration;

use crossbeam_channel::bounded;

use crate::timing::{measure, ScaledDuration};

/// Outcome of one timed run.
///
/// `total` is the sum of each worker's independently measured elapsed
/// time — an aggregate CPU-time-like cost, not the wall-clock span of
/// the parallel region. Do not read it as parallel speedup.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub label: String,
    pub threads: usize,
    pub per_thread: Vec<Duration>,
}

impl RunReport {
    pub fn total(&self) -> Duration {
        self.per_thread.iter().sum()
    }

    pub fn scaled(&self) -> ScaledDuration {
        ScaledDuration::from_duration(self.total())
    }
}

/// Run a workload on `threads` workers and time it.
///
/// With one thread the work runs inline. Otherwise each worker calls
/// `setup` to build its own private work state (buffers live here, so
/// peak memory is `threads` times one worker's allocation), then times
/// a single invocation of the returned closure. Per-thread durations
/// travel back over a channel; nothing is shared between workers.
pub fn run_timed<S, F>(label: &str, threads: usize, setup: S) -> RunReport
where
    S: Fn() -> F + Sync,
    F: FnMut(),
{
    if threads <= 1 {
        let mut work = setup();
        let elapsed = measure(|| work());
        return RunReport {
            label: label.to_string(),
            threads: 1,
            per_thread: vec![elapsed],
        };
    }

    let (tx, rx) = bounded(threads);

    std::thread::scope(|s| {
        for _ in 0..threads {
            let tx = tx.clone();
            let setup = &setup;
            s.spawn(move || {
                let mut work = setup();
                let elapsed = measure(|| work());
                let _ = tx.send(elapsed);
            });
        }
    });
    drop(tx);

    let per_thread: Vec<Duration> = rx.iter().collect();

    RunReport {
        label: label.to_string(),
        threads,
        per_thread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_thread_runs_inline() {
        let report = run_timed("inline", 1, || {
            || std::thread::sleep(Duration::from_millis(1))
        });
        assert_eq!(report.threads, 1);
        assert_eq!(report.per_thread.len(), 1);
        assert!(report.total() >= Duration::from_millis(1));
    }

    #[test]
    fn fanout_collects_one_duration_per_thread() {
        let report = run_timed("fanout", 4, || {
            || std::thread::sleep(Duration::from_millis(2))
        });
        assert_eq!(report.threads, 4);
        assert_eq!(report.per_thread.len(), 4);
        for d in &report.per_thread {
            assert!(*d >= Duration::from_millis(2));
        }
    }

    #[test]
    fn aggregate_grows_with_thread_count() {
        let workload = || || std::thread::sleep(Duration::from_millis(2));
        let single = run_timed("one", 1, workload);
        let fanned = run_timed("four", 4, workload);
        // Sum of per-thread times, so four sleeps always total at
        // least one sleep.
        assert!(fanned.total() >= single.total());
    }

    #[test]
    fn setup_runs_outside_the_timed_region() {
        let report = run_timed("setup", 2, || {
            std::thread::sleep(Duration::from_millis(20));
            || {}
        });
        for d in &report.per_thread {
            assert!(*d < Duration::from_millis(20));
        }
    }
}
