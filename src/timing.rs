use std::fmt;
use std::time::{Duration, Instant};

/// A unit is chosen only once its integral magnitude exceeds this.
pub const UNIT_THRESHOLD: u128 = 100;

/// Run a unit of work exactly once and return its wall-clock elapsed
/// time from a monotonic clock.
#[inline]
pub fn measure<F: FnOnce()>(task: F) -> Duration {
    let t0 = Instant::now();
    task();
    t0.elapsed()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Secs,
    Millis,
    Micros,
    Nanos,
}

impl TimeUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Secs => "sec",
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "us",
            TimeUnit::Nanos => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// An elapsed duration scaled to the coarsest unit of
/// {sec, ms, us, ns} whose integral value exceeds [`UNIT_THRESHOLD`].
///
/// Durations of 100 ns or less still scale to nanoseconds; a
/// measurement always formats to a non-empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledDuration {
    pub value: u128,
    pub unit: TimeUnit,
}

impl ScaledDuration {
    pub fn from_duration(elapsed: Duration) -> Self {
        if elapsed.as_secs() as u128 > UNIT_THRESHOLD {
            Self {
                value: elapsed.as_secs() as u128,
                unit: TimeUnit::Secs,
            }
        } else if elapsed.as_millis() > UNIT_THRESHOLD {
            Self {
                value: elapsed.as_millis(),
                unit: TimeUnit::Millis,
            }
        } else if elapsed.as_micros() > UNIT_THRESHOLD {
            Self {
                value: elapsed.as_micros(),
                unit: TimeUnit::Micros,
            }
        } else {
            Self {
                value: elapsed.as_nanos(),
                unit: TimeUnit::Nanos,
            }
        }
    }
}

impl fmt::Display for ScaledDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_coarsest_unit_over_threshold() {
        let scaled = ScaledDuration::from_duration(Duration::from_nanos(250_000_000));
        assert_eq!(scaled.value, 250);
        assert_eq!(scaled.unit, TimeUnit::Millis);
        assert_eq!(scaled.to_string(), "250 ms");
    }

    #[test]
    fn seconds_only_past_threshold() {
        let scaled = ScaledDuration::from_duration(Duration::from_secs(250));
        assert_eq!(scaled.to_string(), "250 sec");

        // 90 s is below the seconds threshold, so it reports in ms.
        let scaled = ScaledDuration::from_duration(Duration::from_secs(90));
        assert_eq!(scaled.to_string(), "90000 ms");
    }

    #[test]
    fn threshold_is_exclusive() {
        // Exactly 100 ms does not qualify for ms; it falls to us.
        let scaled = ScaledDuration::from_duration(Duration::from_millis(100));
        assert_eq!(scaled.to_string(), "100000 us");

        let scaled = ScaledDuration::from_duration(Duration::from_micros(101));
        assert_eq!(scaled.to_string(), "101 us");
    }

    #[test]
    fn sub_threshold_nanos_still_format() {
        let scaled = ScaledDuration::from_duration(Duration::from_nanos(50));
        assert_eq!(scaled.to_string(), "50 ns");

        let scaled = ScaledDuration::from_duration(Duration::ZERO);
        assert_eq!(scaled.to_string(), "0 ns");
    }

    #[test]
    fn measure_reports_nonzero_for_real_work() {
        let elapsed = measure(|| {
            let mut acc = 0u64;
            for i in 0..10_000u64 {
                acc = acc.wrapping_add(std::hint::black_box(i));
            }
            std::hint::black_box(acc);
        });
        assert!(elapsed > Duration::ZERO);
    }
}
