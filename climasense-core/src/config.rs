//! Runtime configuration
//!
//! Each engine takes a plain configuration struct whose `Default` comes from
//! [`crate::constants`]. With the `serde` feature the structs can be loaded
//! from JSON or TOML on hosts that have a filesystem; on the device they are
//! usually built in code.
//!
//! Configurations are checked once, at engine construction, by `validate()`.
//! Anything that would later produce a division by zero or an inverted clamp
//! band is rejected there.
//!
//! ```rust
//! use climasense_core::config::EnergyConfig;
//!
//! let config = EnergyConfig {
//!     target_indoor_temp_c: 25.0,
//!     electricity_rate_per_kwh: 0.22,
//!     ..EnergyConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{hvac, thresholds, time};
use crate::errors::{ConfigError, ConfigResult};

/// Energy estimation engine settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnergyConfig {
    /// Minimum time between model steps
    pub calc_interval_ms: u32,

    // Room model
    /// Wall heat transfer coefficient (W/m²K)
    pub heat_transfer_coeff_w_per_m2k: f32,
    /// Exposed surface area (m²)
    pub surface_area_m2: f32,
    /// Conditioned air volume (m³)
    pub air_volume_m3: f32,
    /// Latent load per %RH per m³ (W)
    pub latent_heat_factor: f32,
    /// Latent load increase per °C above the reference
    pub latent_heat_temp_factor: f32,

    // COP model
    /// Setpoint the unit cools towards (°C)
    pub target_indoor_temp_c: f32,
    /// Fraction of Carnot COP actually achieved
    pub carnot_efficiency: f32,
    /// COP loss per °C of indoor/outdoor difference
    pub cop_degradation_per_c: f32,
    /// Floor for the degradation multiplier
    pub min_cop_degradation: f32,
    /// Lower COP clamp
    pub min_cop: f32,
    /// Upper COP clamp
    pub max_cop: f32,

    // Efficiency penalties
    /// Temperature difference with no efficiency penalty (°C)
    pub optimal_temp_difference_c: f32,
    /// Power penalty per °C over the optimal difference
    pub temp_efficiency_penalty: f32,
    /// Outdoor humidity with no efficiency penalty (%RH)
    pub optimal_humidity_pct: f32,
    /// Power penalty per %RH over the optimal humidity
    pub humidity_efficiency_penalty: f32,
    /// Fixed multiplier for the particular unit
    pub unit_efficiency_factor: f32,

    // Electrical
    /// Upper clamp on estimated draw (W)
    pub max_power_watts: f32,
    /// Draw while IDLE (W)
    pub fan_only_power_watts: f32,
    /// Inrush multiplier while STARTING
    pub startup_power_multiplier: f32,
    /// Tariff (currency per kWh)
    pub electricity_rate_per_kwh: f32,

    // State machine
    /// Time spent in STARTING (ms)
    pub startup_duration_ms: u32,
    /// Minimum IDLE dwell before switching OFF (ms)
    pub min_off_guard_ms: u32,
    /// Band around the setpoint that counts as reached (°C)
    pub deadband_c: f32,
    /// Extra drift past the deadband before IDLE restarts (°C)
    pub restart_tolerance_c: f32,
    /// Heat load that starts the unit from OFF (W)
    pub auto_on_heat_load_watts: f32,
    /// Heat load below which IDLE may switch OFF (W)
    pub auto_off_heat_load_watts: f32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            calc_interval_ms: time::ENERGY_CALC_INTERVAL_MS,

            heat_transfer_coeff_w_per_m2k: hvac::ROOM_HEAT_TRANSFER_COEFF_W_PER_M2K,
            surface_area_m2: hvac::ROOM_SURFACE_AREA_M2,
            air_volume_m3: hvac::ROOM_AIR_VOLUME_M3,
            latent_heat_factor: hvac::LATENT_HEAT_FACTOR,
            latent_heat_temp_factor: hvac::LATENT_HEAT_TEMP_FACTOR,

            target_indoor_temp_c: hvac::TARGET_INDOOR_TEMP_C,
            carnot_efficiency: hvac::AC_CARNOT_EFFICIENCY,
            cop_degradation_per_c: hvac::COP_DEGRADATION_PER_C,
            min_cop_degradation: hvac::MIN_COP_DEGRADATION,
            min_cop: hvac::MIN_COP,
            max_cop: hvac::MAX_COP,

            optimal_temp_difference_c: hvac::OPTIMAL_TEMP_DIFFERENCE_C,
            temp_efficiency_penalty: hvac::TEMP_EFFICIENCY_PENALTY_PER_C,
            optimal_humidity_pct: hvac::OPTIMAL_HUMIDITY_PCT,
            humidity_efficiency_penalty: hvac::HUMIDITY_EFFICIENCY_PENALTY_PER_PCT,
            unit_efficiency_factor: hvac::AC_UNIT_EFFICIENCY_FACTOR,

            max_power_watts: hvac::AC_MAX_POWER_WATTS,
            fan_only_power_watts: hvac::AC_FAN_ONLY_POWER_WATTS,
            startup_power_multiplier: hvac::AC_STARTUP_POWER_MULTIPLIER,
            electricity_rate_per_kwh: hvac::ELECTRICITY_RATE_PER_KWH,

            startup_duration_ms: time::AC_STARTUP_DURATION_MS,
            min_off_guard_ms: time::AC_MIN_OFF_GUARD_MS,
            deadband_c: hvac::AC_TEMP_DEADBAND_C,
            restart_tolerance_c: hvac::AC_RESTART_TOLERANCE_C,
            auto_on_heat_load_watts: hvac::AUTO_ON_HEAT_LOAD_WATTS,
            auto_off_heat_load_watts: hvac::AUTO_OFF_HEAT_LOAD_WATTS,
        }
    }
}

impl EnergyConfig {
    /// Reject settings that would make the model produce nonsense
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigError::require_positive("calc_interval_ms", self.calc_interval_ms as f32)?;
        ConfigError::require_positive("surface_area_m2", self.surface_area_m2)?;
        ConfigError::require_positive("air_volume_m3", self.air_volume_m3)?;
        ConfigError::require_positive("carnot_efficiency", self.carnot_efficiency)?;
        ConfigError::require_positive("min_cop", self.min_cop)?;
        ConfigError::require_positive("max_power_watts", self.max_power_watts)?;
        ConfigError::require_positive("electricity_rate_per_kwh", self.electricity_rate_per_kwh)?;
        ConfigError::require_ordered("cop", self.min_cop, self.max_cop)?;
        ConfigError::require_ordered(
            "fan_only_power_watts",
            self.fan_only_power_watts,
            self.max_power_watts,
        )?;

        if !(self.min_cop_degradation > 0.0 && self.min_cop_degradation <= 1.0) {
            return Err(ConfigError::Invalid {
                reason: "min_cop_degradation must be in (0, 1]",
            });
        }
        if self.startup_power_multiplier < 1.0 {
            return Err(ConfigError::Invalid {
                reason: "startup_power_multiplier must be at least 1",
            });
        }
        if self.deadband_c < 0.0 || self.restart_tolerance_c < 0.0 {
            return Err(ConfigError::Invalid {
                reason: "deadband and restart tolerance must not be negative",
            });
        }
        // Hysteresis needs a gap between the two load thresholds
        if self.auto_off_heat_load_watts >= self.auto_on_heat_load_watts {
            return Err(ConfigError::InvertedRange {
                field: "auto_heat_load_watts",
                low: self.auto_off_heat_load_watts,
                high: self.auto_on_heat_load_watts,
            });
        }
        Ok(())
    }
}

/// Alert threshold settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertConfig {
    /// Minimum time between threshold evaluations
    pub check_interval_ms: u32,
    /// Indoor upper bound (°C)
    pub temp_high_c: f32,
    /// Indoor lower bound (°C)
    pub temp_low_c: f32,
    /// Largest tolerated |outdoor − indoor| (°C)
    pub temp_difference_high_c: f32,
    /// Indoor upper bound (%RH)
    pub humidity_high_pct: f32,
    /// Indoor lower bound (%RH)
    pub humidity_low_pct: f32,
    /// Largest tolerated |outdoor − indoor| (%RH)
    pub humidity_difference_high_pct: f32,
    /// CO limit (ppm)
    pub co_high_ppm: f32,
    /// Raise the ozone alert when the comparator trips
    pub ozone_alert_on_detection: bool,
    /// Draw limit (W)
    pub power_high_watts: f32,
    /// Projected daily cost limit
    pub daily_cost_high: f32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            check_interval_ms: time::ALERT_CHECK_INTERVAL_MS,
            temp_high_c: thresholds::TEMP_HIGH_THRESHOLD_C,
            temp_low_c: thresholds::TEMP_LOW_THRESHOLD_C,
            temp_difference_high_c: thresholds::TEMP_DIFFERENCE_HIGH_THRESHOLD_C,
            humidity_high_pct: thresholds::HUMIDITY_HIGH_THRESHOLD_PCT,
            humidity_low_pct: thresholds::HUMIDITY_LOW_THRESHOLD_PCT,
            humidity_difference_high_pct: thresholds::HUMIDITY_DIFFERENCE_HIGH_THRESHOLD_PCT,
            co_high_ppm: thresholds::CO_HIGH_THRESHOLD_PPM,
            ozone_alert_on_detection: thresholds::OZONE_ALERT_ON_DETECTION,
            power_high_watts: thresholds::POWER_HIGH_THRESHOLD_WATTS,
            daily_cost_high: thresholds::DAILY_COST_HIGH_THRESHOLD,
        }
    }
}

impl AlertConfig {
    /// Reject inverted comfort bands and a zero check interval
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigError::require_positive("check_interval_ms", self.check_interval_ms as f32)?;
        ConfigError::require_ordered("temp", self.temp_low_c, self.temp_high_c)?;
        ConfigError::require_ordered("humidity", self.humidity_low_pct, self.humidity_high_pct)?;
        Ok(())
    }
}

/// Buzzer sequencer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuzzerConfig {
    /// Buzzer fitted and allowed to sound
    pub enabled: bool,
    /// Length of one beep (ms)
    pub beep_duration_ms: u32,
    /// Gap between beeps of a burst (ms)
    pub beep_interval_ms: u32,
    /// Beeps per burst before the long rest
    pub beep_count: u8,
    /// Sequencer service cadence
    pub service_interval_ms: u32,
}

impl Default for BuzzerConfig {
    fn default() -> Self {
        Self {
            enabled: time::BUZZER_ENABLED,
            beep_duration_ms: time::BUZZER_BEEP_DURATION_MS,
            beep_interval_ms: time::BUZZER_BEEP_INTERVAL_MS,
            beep_count: time::BUZZER_BEEP_COUNT,
            service_interval_ms: time::BUZZER_SERVICE_INTERVAL_MS,
        }
    }
}

impl BuzzerConfig {
    /// Reject a zero beep length, cadence or count
    pub fn validate(&self) -> ConfigResult<()> {
        ConfigError::require_positive("beep_duration_ms", self.beep_duration_ms as f32)?;
        ConfigError::require_positive("service_interval_ms", self.service_interval_ms as f32)?;
        if self.beep_count == 0 {
            return Err(ConfigError::Invalid {
                reason: "beep_count must be at least 1",
            });
        }
        Ok(())
    }
}

/// Complete monitor configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Energy engine settings
    pub energy: EnergyConfig,
    /// Alert thresholds
    pub alerts: AlertConfig,
    /// Buzzer settings
    pub buzzer: BuzzerConfig,
}

impl MonitorConfig {
    /// Validate every section
    pub fn validate(&self) -> ConfigResult<()> {
        self.energy.validate()?;
        self.alerts.validate()?;
        self.buzzer.validate()
    }
}
