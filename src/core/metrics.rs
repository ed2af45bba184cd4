//! Logger metrics for observability
//!
//! Counters for monitoring logger health: how many records were written,
//! how many the threshold filtered out, and how many sink writes failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rnlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.total_emitted(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records that passed the threshold and were handed to the sinks
    total_emitted: AtomicU64,

    /// Records rejected by the threshold
    filtered_count: AtomicU64,

    /// Individual sink writes that returned an error
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_emitted: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_emitted(&self) -> u64 {
        self.total_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.total_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Add `count` failed sink writes from one record
    #[inline]
    pub fn record_write_failures(&self, count: u64) -> u64 {
        self.write_failures.fetch_add(count, Ordering::Relaxed)
    }

    /// Sink write failures per emitted record, as a percentage.
    /// Returns 0.0 before anything was emitted.
    pub fn failure_rate(&self) -> f64 {
        let emitted = self.total_emitted();
        if emitted == 0 {
            return 0.0;
        }
        (self.write_failures() as f64 / emitted as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_emitted.store(0, Ordering::Relaxed);
        self.filtered_count.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..8 {
            metrics.record_emitted();
        }
        metrics.record_write_failures(2);
        metrics.record_filtered();

        assert_eq!(metrics.total_emitted(), 8);
        assert_eq!(metrics.write_failures(), 2);
        assert_eq!(metrics.filtered_count(), 1);
        assert!((24.9..=25.1).contains(&metrics.failure_rate()));

        metrics.reset();
        assert_eq!(metrics.total_emitted(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }
}
