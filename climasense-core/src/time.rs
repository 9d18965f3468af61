//! Time management for the monitor loop
//!
//! The device clock is a free-running millisecond counter that wraps after
//! 2^32 ms (~49.7 days). Every interval check in the crate goes through
//! [`elapsed_ms`], which subtracts with wraparound so a check that straddles
//! the wrap still sees the true elapsed time.
//!
//! Provides:
//! - [`FixedTime`]: controllable clock for tests and simulations
//! - [`MonotonicClock`]: `Instant`-backed clock (std only)
//! - [`WarmUpTimer`]: latching warm-up gate for gas sensors

use crate::traits::TimeSource;

/// Timestamp in milliseconds since device boot (wraps at `u32::MAX`)
pub type Timestamp = u32;

/// Milliseconds elapsed from `since` to `now`, tolerant of counter wraparound
#[inline]
pub const fn elapsed_ms(since: Timestamp, now: Timestamp) -> u32 {
    now.wrapping_sub(since)
}

/// Fixed time source for testing
#[derive(Debug, Clone, Copy)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock reading `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock, wrapping like the hardware counter does
    pub fn advance(&mut self, ms: u32) {
        self.timestamp = self.timestamp.wrapping_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Monotonic clock backed by `std::time::Instant`
///
/// Starts at 0 when created and wraps like the device counter.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Clock reading 0 now
    pub fn new() -> Self {
        Self { start: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicClock {
    fn now(&self) -> Timestamp {
        // Truncation is the wraparound
        self.start.elapsed().as_millis() as Timestamp
    }
}

/// Latching warm-up gate for sensors that read garbage after power-on
///
/// MQ-series gas sensors need their heater to stabilise before the analog
/// output means anything. Once the delay has elapsed the timer stays warm,
/// so a later clock wrap cannot flip it back to cold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmUpTimer {
    started_at: Timestamp,
    duration_ms: u32,
    warmed_up: bool,
}

impl WarmUpTimer {
    /// Start warming up at `now`
    pub fn start(now: Timestamp, duration_ms: u32) -> Self {
        Self {
            started_at: now,
            duration_ms,
            warmed_up: duration_ms == 0,
        }
    }

    /// Update and report whether the warm-up delay has elapsed
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if !self.warmed_up && elapsed_ms(self.started_at, now) >= self.duration_ms {
            self.warmed_up = true;
        }
        self.warmed_up
    }

    /// Last known warm-up state without advancing
    pub fn is_warmed_up(&self) -> bool {
        self.warmed_up
    }

    /// Milliseconds left until warm, 0 once warmed up
    pub fn remaining_ms(&self, now: Timestamp) -> u32 {
        if self.warmed_up {
            0
        } else {
            self.duration_ms.saturating_sub(elapsed_ms(self.started_at, now))
        }
    }
}
