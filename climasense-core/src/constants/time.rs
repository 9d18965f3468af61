//! Time-Related Constants
//!
//! Cadences, state-machine durations and warm-up delays. All values are in
//! milliseconds of the device's wrapping tick counter unless named otherwise.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u32 = 3600;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u32 = MS_PER_SECOND * SECONDS_PER_HOUR;

/// Hours per day.
pub const HOURS_PER_DAY: u32 = 24;

/// Milliseconds per day, the length of the rolling accounting window.
pub const MS_PER_DAY: u32 = MS_PER_HOUR * HOURS_PER_DAY;

// ===== SCHEDULER CADENCES =====

/// Interval between energy model steps.
///
/// The heat load changes on the scale of minutes; 5 s keeps the display
/// responsive without wasting cycles.
pub const ENERGY_CALC_INTERVAL_MS: u32 = 5_000;

/// Interval between alert threshold evaluations.
pub const ALERT_CHECK_INTERVAL_MS: u32 = 2_000;

/// Buzzer sequencer service cadence.
///
/// Fine enough that a 200 ms beep lands within 5% of its nominal length.
pub const BUZZER_SERVICE_INTERVAL_MS: u32 = 10;

// ===== AC STATE MACHINE =====

/// Time the compressor spends in STARTING before it counts as RUNNING.
pub const AC_STARTUP_DURATION_MS: u32 = 30_000;

/// Minimum dwell in IDLE before the unit may shut down completely.
///
/// Five minutes matches the anti-short-cycle delay most compressors enforce.
pub const AC_MIN_OFF_GUARD_MS: u32 = 5 * 60 * MS_PER_SECOND;

// ===== BUZZER =====

/// Length of one beep.
pub const BUZZER_BEEP_DURATION_MS: u32 = 200;

/// Silence between beeps in a burst.
pub const BUZZER_BEEP_INTERVAL_MS: u32 = 300;

/// Beeps per burst.
pub const BUZZER_BEEP_COUNT: u8 = 3;

/// Buzzer fitted and enabled at boot.
pub const BUZZER_ENABLED: bool = true;

// ===== SENSOR WARM-UP =====

/// MQ-9 CO sensor heater warm-up.
///
/// Source: Hanwei MQ-9 datasheet (readings unstable during preheat)
pub const CO_SENSOR_WARMUP_MS: u32 = 60_000;

/// MQ-131 ozone sensor heater warm-up.
///
/// Source: Winsen MQ131 datasheet (longer preheat than MQ-9)
pub const OZONE_SENSOR_WARMUP_MS: u32 = 120_000;
