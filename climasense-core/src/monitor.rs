//! Cooperative scheduler tying the two engines together
//!
//! The firmware main loop calls [`Monitor::tick`] (or [`Monitor::poll`]) as
//! often as it likes. Each call runs the energy engine first, then the alert
//! engine, so the power and cost thresholds always see a snapshot that is
//! complete for this pass.

use embedded_hal::digital::OutputPin;

use crate::alerts::AlertEngine;
use crate::config::MonitorConfig;
use crate::display;
use crate::energy::EnergyEngine;
use crate::errors::ConfigResult;
use crate::time::Timestamp;
use crate::traits::{IndoorSensors, OutdoorWeather, PresentationSink, TimeSource};

/// Energy and alert engines driven from one loop
#[derive(Debug)]
pub struct Monitor<P> {
    energy: EnergyEngine,
    alerts: AlertEngine<P>,
}

impl<P: OutputPin> Monitor<P> {
    /// Validate `config` and build both engines starting at `now`
    pub fn new(config: MonitorConfig, buzzer_pin: P, now: Timestamp) -> ConfigResult<Self> {
        config.validate()?;

        let energy = EnergyEngine::new(config.energy, now)?;
        let alerts = AlertEngine::new(config.alerts, config.buzzer, buzzer_pin, now)?;
        log_info!("Monitor started at {} ms", now);

        Ok(Self { energy, alerts })
    }

    /// One loop pass at `now`
    pub fn tick<S, W>(&mut self, now: Timestamp, sensors: &S, weather: &W) -> Result<(), P::Error>
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        self.energy.tick(now, sensors, weather);
        self.alerts.tick(now, sensors, weather, &self.energy)
    }

    /// One loop pass at the clock's current time
    pub fn poll<C, S, W>(&mut self, clock: &C, sensors: &S, weather: &W) -> Result<(), P::Error>
    where
        C: TimeSource + ?Sized,
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        self.tick(clock.now(), sensors, weather)
    }

    /// Push the current presentation fields
    pub fn publish<K>(&self, sink: &mut K)
    where
        K: PresentationSink + ?Sized,
    {
        display::publish(sink, &self.energy, &self.alerts);
    }

    /// Manual switch-on
    pub fn set_ac_on(&mut self, now: Timestamp) {
        log_info!("AC switched on manually");
        self.energy.set_on(now);
    }

    /// Manual switch-off
    pub fn set_ac_off(&mut self, now: Timestamp) {
        log_info!("AC switched off manually");
        self.energy.set_off(now);
    }

    /// Enable or disable the buzzer; disabling silences it at once
    pub fn set_buzzer_enabled(&mut self, enabled: bool) -> Result<(), P::Error> {
        self.alerts.set_buzzer_enabled(enabled)
    }

    /// Energy engine, read-only
    pub fn energy(&self) -> &EnergyEngine {
        &self.energy
    }

    /// Alert engine, read-only
    pub fn alerts(&self) -> &AlertEngine<P> {
        &self.alerts
    }
}
