//! Time Source Abstraction
//!
//! This module provides the `TimeSource` trait so the scheduler can read the
//! device clock without knowing where it comes from.
//!
//! ## Implementation Requirements
//!
//! - Milliseconds since boot, monotonic apart from wraparound at `u32::MAX`
//! - Wraparound is expected and must not be "corrected" by the source;
//!   consumers compare timestamps with [`crate::time::elapsed_ms`]
//!
//! ## Common Implementations
//!
//! - `MonotonicClock`: `std::time::Instant` backed (host builds)
//! - `FixedTime`: controllable time for testing
//! - Firmware: a thin wrapper over the HAL's millisecond tick counter

use crate::time::Timestamp;

/// Source of time for the monitor loop
///
/// ```rust
/// use climasense_core::traits::TimeSource;
/// use climasense_core::time::Timestamp;
///
/// struct TickCounter {
///     ticks: u32,
/// }
///
/// impl TimeSource for TickCounter {
///     fn now(&self) -> Timestamp {
///         self.ticks // 1 kHz tick, already milliseconds
///     }
/// }
/// ```
pub trait TimeSource {
    /// Current timestamp in milliseconds since boot
    fn now(&self) -> Timestamp;
}
