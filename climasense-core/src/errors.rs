//! Error Types for Configuration and Input Failures
//!
//! ## Design Philosophy
//!
//! The core has no fatal error paths at runtime. A model tick that sees bad
//! input holds its last snapshot, and an alert whose sensor is still warming
//! up is forced inactive. Errors therefore show up in exactly two places:
//!
//! 1. **Construction**: a configuration that cannot produce sane numbers
//!    (inverted bands, zero intervals) is rejected up front with
//!    [`ConfigError`], so nothing downstream has to re-check it.
//!
//! 2. **Input gating**: [`InputError`] names *why* the inputs of a model tick
//!    were unusable. The energy engine logs it and skips the tick; it never
//!    escapes a `tick()` call.
//!
//! Both enums are `Copy` and carry only `&'static str` or numeric payloads,
//! so they can be returned from hot paths without allocation.
//!
//! ## Error Categories
//!
//! ### Stale or invalid input
//! - `SensorDataInvalid`: the indoor sensor has no valid reading yet
//! - `OutdoorTemperatureUnavailable` / `OutdoorHumidityUnavailable`: the
//!   weather source returned NaN
//!
//! ### Rejected configuration
//! - `NonPositive`: an interval, area or tariff that must be > 0
//! - `InvertedRange`: a lower bound above its upper bound
//! - `Invalid`: any other structural problem, with a reason

use thiserror_no_std::Error;

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration rejected at construction time
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A value that must be strictly positive was zero or negative
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// The value that was supplied
        value: f32,
    },

    /// A lower bound exceeds its upper bound
    #[error("{field}: lower bound {low} exceeds upper bound {high}")]
    InvertedRange {
        /// Name of the offending band
        field: &'static str,
        /// Supplied lower bound
        low: f32,
        /// Supplied upper bound
        high: f32,
    },

    /// Structurally invalid configuration
    #[error("Invalid configuration: {reason}")]
    Invalid {
        /// What is wrong
        reason: &'static str,
    },
}

/// Reason a set of model inputs could not be used
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Indoor sensor has not produced a valid reading
    #[error("Indoor sensor data not valid")]
    SensorDataInvalid,

    /// Outdoor temperature is NaN or otherwise not a real number
    #[error("Outdoor temperature unavailable")]
    OutdoorTemperatureUnavailable,

    /// Outdoor humidity is NaN or otherwise not a real number
    #[error("Outdoor humidity unavailable")]
    OutdoorHumidityUnavailable,
}

impl ConfigError {
    /// Check that `value` is strictly positive
    pub(crate) fn require_positive(field: &'static str, value: f32) -> ConfigResult<()> {
        // NaN fails this comparison too
        if value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive { field, value })
        }
    }

    /// Check that `low <= high`
    pub(crate) fn require_ordered(field: &'static str, low: f32, high: f32) -> ConfigResult<()> {
        if low <= high {
            Ok(())
        } else {
            Err(ConfigError::InvertedRange { field, low, high })
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonPositive { field, value } =>
                defmt::write!(fmt, "{} must be positive, got {}", field, value),
            Self::InvertedRange { field, low, high } =>
                defmt::write!(fmt, "{}: {} > {}", field, low, high),
            Self::Invalid { reason } =>
                defmt::write!(fmt, "Invalid configuration: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::SensorDataInvalid => defmt::write!(fmt, "Indoor sensor data not valid"),
            Self::OutdoorTemperatureUnavailable => defmt::write!(fmt, "Outdoor temperature unavailable"),
            Self::OutdoorHumidityUnavailable => defmt::write!(fmt, "Outdoor humidity unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check_rejects_zero_and_nan() {
        assert!(ConfigError::require_positive("interval", 1.0).is_ok());
        assert!(matches!(
            ConfigError::require_positive("interval", 0.0),
            Err(ConfigError::NonPositive { field: "interval", .. })
        ));
        assert!(ConfigError::require_positive("interval", f32::NAN).is_err());
    }

    #[test]
    fn ordered_check_allows_equal_bounds() {
        assert!(ConfigError::require_ordered("cop", 2.0, 2.0).is_ok());
        assert_eq!(
            ConfigError::require_ordered("cop", 5.0, 2.0),
            Err(ConfigError::InvertedRange { field: "cop", low: 5.0, high: 2.0 })
        );
    }
}
