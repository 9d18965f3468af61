//! Alert & Notification Engine
//!
//! Evaluates ten threshold conditions against the indoor sensors, the
//! outdoor weather and the energy engine, and sounds the buzzer while any of
//! them holds.
//!
//! ## Cadences
//!
//! `tick()` is called on every loop pass and does two independent things:
//!
//! - **Threshold check** every `check_interval_ms` (2 s by default)
//! - **Buzzer service** every `service_interval_ms` (10 ms by default), but
//!   only while something is alerting or a beep sequence is in progress
//!
//! Keeping the buzzer on its own cadence holds beep lengths to ~10 ms
//! without re-running the threshold logic at that rate.
//!
//! ## Gating
//!
//! | Alerts | Evaluated when | Otherwise |
//! |---|---|---|
//! | temp high/low, humidity high/low, temp diff | indoor data valid and outdoor temp is a number | held |
//! | humidity diff | as above and outdoor humidity is a number | held |
//! | CO high | CO sensor warmed up | cleared |
//! | ozone | ozone sensor warmed up and detection alerting enabled | cleared |
//! | power, daily cost | always | - |
//!
//! Every record changes only on an edge, so `first_triggered` marks when
//! the condition started.

pub mod buzzer;
pub mod types;

pub use buzzer::{Buzzer, BuzzerState};
pub use types::{AlertCategory, AlertRecord, AlertTable, AlertType, Edge};

use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::config::{AlertConfig, BuzzerConfig};
use crate::constants::buffers::ALERT_SUMMARY_CAPACITY;
use crate::errors::ConfigResult;
use crate::time::{elapsed_ms, Timestamp};
use crate::traits::{EnergyReadings, IndoorSensors, OutdoorWeather};

/// Alert summary string
pub type AlertSummary = String<ALERT_SUMMARY_CAPACITY>;

/// Threshold evaluator and buzzer driver
#[derive(Debug)]
pub struct AlertEngine<P> {
    config: AlertConfig,
    service_interval_ms: u32,
    table: AlertTable,
    buzzer: Buzzer<P>,
    last_check: Timestamp,
    last_service: Timestamp,
}

impl<P: OutputPin> AlertEngine<P> {
    /// Create with all alerts inactive; the first check runs one interval
    /// after `now`
    pub fn new(
        config: AlertConfig,
        buzzer_config: BuzzerConfig,
        buzzer_pin: P,
        now: Timestamp,
    ) -> ConfigResult<Self> {
        config.validate()?;
        buzzer_config.validate()?;

        let rest_ms = config.check_interval_ms.saturating_mul(2);
        Ok(Self {
            config,
            service_interval_ms: buzzer_config.service_interval_ms,
            table: AlertTable::new(),
            buzzer: Buzzer::new(buzzer_pin, buzzer_config, rest_ms),
            last_check: now,
            last_service: now,
        })
    }

    /// Check thresholds and service the buzzer when their intervals are due
    pub fn tick<S, W, E>(
        &mut self,
        now: Timestamp,
        sensors: &S,
        weather: &W,
        energy: &E,
    ) -> Result<(), P::Error>
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
        E: EnergyReadings + ?Sized,
    {
        if elapsed_ms(self.last_check, now) >= self.config.check_interval_ms {
            self.last_check = now;
            self.check_thresholds(now, sensors, weather, energy);
        }

        let alerting = self.table.any_active();
        if self.buzzer.is_enabled()
            && (alerting || self.buzzer.is_busy())
            && elapsed_ms(self.last_service, now) >= self.service_interval_ms
        {
            self.last_service = now;
            self.buzzer.service(now, alerting)?;
        }
        Ok(())
    }

    /// Evaluate every condition once, regardless of the check interval
    pub fn check_thresholds<S, W, E>(&mut self, now: Timestamp, sensors: &S, weather: &W, energy: &E)
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
        E: EnergyReadings + ?Sized,
    {
        let cfg = self.config;
        let outdoor_temp = weather.outdoor_temp();

        if sensors.is_data_valid() && !outdoor_temp.is_nan() {
            let temp = sensors.indoor_temp();
            let humidity = sensors.indoor_humidity();

            self.apply(AlertType::TempHigh, temp > cfg.temp_high_c, now);
            self.apply(AlertType::TempLow, temp < cfg.temp_low_c, now);
            self.apply(
                AlertType::TempDifferenceHigh,
                libm::fabsf(outdoor_temp - temp) > cfg.temp_difference_high_c,
                now,
            );
            self.apply(AlertType::HumidityHigh, humidity > cfg.humidity_high_pct, now);
            self.apply(AlertType::HumidityLow, humidity < cfg.humidity_low_pct, now);

            let outdoor_humidity = weather.outdoor_humidity();
            if !outdoor_humidity.is_nan() {
                self.apply(
                    AlertType::HumidityDifferenceHigh,
                    libm::fabsf(outdoor_humidity - humidity) > cfg.humidity_difference_high_pct,
                    now,
                );
            }
        }

        let co_high = sensors.is_co_warmed_up() && sensors.co_ppm() > cfg.co_high_ppm;
        self.apply(AlertType::CoHigh, co_high, now);

        let ozone = sensors.is_ozone_warmed_up()
            && cfg.ozone_alert_on_detection
            && sensors.is_ozone_detected();
        self.apply(AlertType::OzoneDetected, ozone, now);

        self.apply(AlertType::PowerHigh, energy.power_watts() > cfg.power_high_watts, now);
        self.apply(
            AlertType::DailyCostHigh,
            energy.daily_cost_estimate() > cfg.daily_cost_high,
            now,
        );
    }

    fn apply(&mut self, alert_type: AlertType, condition: bool, now: Timestamp) {
        match self.table.update(alert_type, condition, now) {
            Some(Edge::Raised) => {
                log_warn!("Alert raised: {}", alert_type);
            }
            Some(Edge::Cleared) => {
                log_info!("Alert cleared: {}", alert_type);
            }
            None => {}
        }
    }

    /// Enable or disable the buzzer at runtime; disabling silences it now
    pub fn set_buzzer_enabled(&mut self, enabled: bool) -> Result<(), P::Error> {
        self.buzzer.set_enabled(enabled)
    }

    /// Any alert currently active
    pub fn has_active_alerts(&self) -> bool {
        self.table.any_active()
    }

    /// Number of active alerts
    pub fn active_count(&self) -> usize {
        self.table.active_count()
    }

    /// O(1) check of a single alert
    pub fn is_alert_active(&self, alert_type: AlertType) -> bool {
        self.table.is_active(alert_type)
    }

    /// Record for one alert type
    pub fn record(&self, alert_type: AlertType) -> &AlertRecord {
        self.table.get(alert_type)
    }

    /// All records, in `AlertType` order
    pub fn records(&self) -> &[AlertRecord] {
        self.table.records()
    }

    /// No temperature or humidity bound exceeded
    pub fn is_indoor_normal(&self) -> bool {
        self.table.category_normal(AlertCategory::IndoorComfort)
    }

    /// Power and projected cost within bounds
    pub fn is_energy_normal(&self) -> bool {
        self.table.category_normal(AlertCategory::Energy)
    }

    /// No CO or ozone alert
    pub fn is_air_quality_normal(&self) -> bool {
        self.table.category_normal(AlertCategory::AirQuality)
    }

    /// `Alerts: High Temp, High CO` or `No alerts`
    pub fn summary(&self) -> AlertSummary {
        let mut summary = AlertSummary::new();
        if !self.table.any_active() {
            // Capacity is far above the literal
            let _ = summary.push_str("No alerts");
            return summary;
        }

        let _ = summary.push_str("Alerts: ");
        for (i, record) in self.table.active().enumerate() {
            if i > 0 {
                let _ = summary.push_str(", ");
            }
            if summary.push_str(record.alert_type.message()).is_err() {
                log_warn!("Alert summary truncated");
                break;
            }
        }
        summary
    }

    /// Active thresholds
    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Buzzer sequencer
    pub fn buzzer(&self) -> &Buzzer<P> {
        &self.buzzer
    }
}
