//! Logger metrics for observability
//!
//! Per-call failures inside handlers are swallowed so logging can never
//! abort the caller; these counters are how that best-effort delivery stays
//! observable.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracking records that passed the gate.
///
/// One count per record, not per handler: a record that failed in at least
/// one attached handler counts as dropped, otherwise as emitted. Calls
/// suppressed by the severity gate or warn-once deduplication count nothing.
///
/// # Example
///
/// ```
/// use kazlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_dropped();
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records delivered to every attached handler without error
    records_emitted: AtomicU64,

    /// Records that at least one handler failed to persist
    records_dropped: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_emitted: AtomicU64::new(0),
            records_dropped: AtomicU64::new(0),
        }
    }

    /// Get the number of fully delivered records
    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    /// Get the number of records dropped by at least one handler
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.records_dropped.load(Ordering::Relaxed)
    }

    /// Record a fully delivered record
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.records_emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped record
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.records_dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no records have passed the gate.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.emitted_count() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.records_emitted.store(0, Ordering::Relaxed);
        self.records_dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            records_emitted: AtomicU64::new(self.emitted_count()),
            records_dropped: AtomicU64::new(self.dropped_count()),
        }
    }
}
