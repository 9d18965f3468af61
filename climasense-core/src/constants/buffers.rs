//! Buffer Sizes
//!
//! Capacities of the fixed strings built for the presentation sink. Sized
//! for the worst case so formatting never truncates.

/// Active alerts summary.
///
/// "Alerts: " plus all ten labels and their separators is 140 bytes.
pub const ALERT_SUMMARY_CAPACITY: usize = 160;

/// Energy summary line.
///
/// Each "•" separator is 3 bytes of UTF-8.
pub const ENERGY_LINE_CAPACITY: usize = 96;

/// Number of alert types tracked.
pub const ALERT_COUNT: usize = 10;
