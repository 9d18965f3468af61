//! Constants for ClimaSense Core
//!
//! Every tunable number the engines use has a named default here, with its
//! unit in the name and a note on where it comes from. Runtime configuration
//! structs in [`crate::config`] are initialised from these.
//!
//! ## Organization
//!
//! - **Physics**: unit conversions and physical constants
//! - **HVAC**: room model and air-conditioner characteristics
//! - **Thresholds**: alert trigger levels
//! - **Time**: scheduler cadences, durations and warm-up delays
//! - **Buffers**: fixed string capacities
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name (`_MS`, `_C`, `_PCT`, `_WATTS`)
//! 3. Reference a standard or datasheet where one exists

/// Physical constants and unit conversions.
pub mod physics;

/// Room thermal model and air-conditioner parameters.
pub mod hvac;

/// Alert thresholds for comfort, air quality and energy.
pub mod thresholds;

/// Scheduler intervals, state-machine durations and sensor warm-up.
pub mod time;

/// Fixed-capacity buffer sizes.
pub mod buffers;

pub use physics::{KELVIN_OFFSET, WATTS_TO_BTU_PER_HR};

pub use time::{
    MS_PER_SECOND, MS_PER_HOUR, MS_PER_DAY,
    ENERGY_CALC_INTERVAL_MS, ALERT_CHECK_INTERVAL_MS, BUZZER_SERVICE_INTERVAL_MS,
};
