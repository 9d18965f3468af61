//! Telemetry Records for ClimaSense
//!
//! ## Overview
//!
//! A [`TelemetryRecord`] is one flat snapshot of everything the monitor
//! knows at an instant: raw indoor readings, outdoor weather, the energy
//! engine's estimates and the alert state. It is captured from the core's
//! read-only accessors and serialized as a single JSON object, ready for a
//! dashboard that ingests key/value telemetry.
//!
//! Transport is not handled here. The caller posts the JSON however its
//! platform does HTTP or MQTT.
//!
//! ## Field Names
//!
//! Keys are stable snake_case names so existing dashboards keep working:
//!
//! ```json
//! {
//!   "indoor_temperature": 27.4,
//!   "indoor_humidity": 58.0,
//!   "co_ppm": 3.1,
//!   "co_sensor_warmed_up": true,
//!   "ozone_detected": false,
//!   "ozone_sensor_warmed_up": true,
//!   "outdoor_temperature": 33.0,
//!   "outdoor_humidity": null,
//!   "estimated_power_watts": 1180.0,
//!   "daily_energy_kwh": 9.4,
//!   "daily_cost_estimate": 2.82,
//!   "current_cop": 4.1,
//!   "heat_load_btu": 16500.0,
//!   "current_eer": 14.0,
//!   "duty_cycle": 0.41,
//!   "ac_state": "RUNNING",
//!   "temp_difference": -5.6,
//!   "humidity_difference": null,
//!   "active_alerts": 0,
//!   "alert_summary": "No alerts",
//!   "timestamp": 123456
//! }
//! ```
//!
//! ### Missing values
//!
//! A reading that is not available is `null`, never `NaN` or a stale
//! number: indoor values when the probe has no valid data, outdoor values
//! when the weather source returned NaN, and the differences when either
//! side is missing.
//!
//! ## Usage Example
//!
//! ```rust
//! use climasense_core::{IndoorReading, Monitor, MonitorConfig, OutdoorReading};
//! use climasense_telemetry::TelemetryRecord;
//! # use core::convert::Infallible;
//! # struct Pin;
//! # impl embedded_hal::digital::ErrorType for Pin { type Error = Infallible; }
//! # impl embedded_hal::digital::OutputPin for Pin {
//! #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//!
//! let monitor = Monitor::new(MonitorConfig::default(), Pin, 0)?;
//! let indoor = IndoorReading::new(26.0, 55.0);
//! let outdoor = OutdoorReading::new(31.0, 70.0);
//!
//! let record = TelemetryRecord::capture(10_000, &monitor, &indoor, &outdoor);
//! let json = record.to_json()?;
//! assert!(json.contains("\"ac_state\":\"OFF\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use climasense_core::readings::{humidity_difference, temp_difference};
use climasense_core::{IndoorSensors, Monitor, OutdoorWeather, Timestamp};
use embedded_hal::digital::OutputPin;
use serde::{Deserialize, Serialize};

/// Telemetry errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum TelemetryError {
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One telemetry upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    // Indoor
    pub indoor_temperature: Option<f32>,
    pub indoor_humidity: Option<f32>,
    pub co_ppm: f32,
    pub co_sensor_warmed_up: bool,
    pub ozone_detected: bool,
    pub ozone_sensor_warmed_up: bool,

    // Outdoor
    pub outdoor_temperature: Option<f32>,
    pub outdoor_humidity: Option<f32>,

    // Energy
    pub estimated_power_watts: f32,
    /// Projected full-day energy
    pub daily_energy_kwh: f32,
    /// Projected full-day cost
    pub daily_cost_estimate: f32,
    pub current_cop: f32,
    pub heat_load_btu: f32,
    pub current_eer: f32,
    pub duty_cycle: f32,
    pub ac_state: String,

    // Indoor minus outdoor
    pub temp_difference: Option<f32>,
    pub humidity_difference: Option<f32>,

    // Alerts
    pub active_alerts: usize,
    pub alert_summary: String,

    /// Device clock at capture (ms since boot)
    pub timestamp: Timestamp,
}

fn finite(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

impl TelemetryRecord {
    /// Gather a record from the monitor and the readings it last saw
    pub fn capture<P, S, W>(now: Timestamp, monitor: &Monitor<P>, sensors: &S, weather: &W) -> Self
    where
        P: OutputPin,
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        let indoor_valid = sensors.is_data_valid();
        let energy = monitor.energy();
        let alerts = monitor.alerts();

        Self {
            indoor_temperature: indoor_valid.then(|| sensors.indoor_temp()).and_then(finite),
            indoor_humidity: indoor_valid.then(|| sensors.indoor_humidity()).and_then(finite),
            co_ppm: sensors.co_ppm(),
            co_sensor_warmed_up: sensors.is_co_warmed_up(),
            ozone_detected: sensors.is_ozone_detected(),
            ozone_sensor_warmed_up: sensors.is_ozone_warmed_up(),

            outdoor_temperature: finite(weather.outdoor_temp()),
            outdoor_humidity: finite(weather.outdoor_humidity()),

            estimated_power_watts: energy.power_watts(),
            daily_energy_kwh: energy.projected_daily_kwh(),
            daily_cost_estimate: energy.daily_cost_estimate(),
            current_cop: energy.cop(),
            heat_load_btu: energy.heat_load_btu(),
            current_eer: energy.eer(),
            duty_cycle: energy.duty_cycle(),
            ac_state: energy.state().label().to_string(),

            temp_difference: temp_difference(sensors, weather).and_then(finite),
            humidity_difference: humidity_difference(sensors, weather).and_then(finite),

            active_alerts: alerts.active_count(),
            alert_summary: alerts.summary().to_string(),

            timestamp: now,
        }
    }

    /// Compact JSON object
    pub fn to_json(&self) -> Result<String, TelemetryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, TelemetryError> {
        Ok(serde_json::to_value(self)?)
    }
}
