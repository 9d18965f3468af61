//! Energy Estimation Engine
//!
//! Estimates what the air conditioner is drawing from indoor and outdoor
//! conditions alone; there is no current clamp on the mains.
//!
//! ## Model step
//!
//! `tick()` is called on every loop pass and does real work once per
//! `calc_interval_ms`. Each step, in order:
//!
//! 1. Roll the daily window over if it is 24 h old
//! 2. Gate the inputs; on failure the step ends here and every output keeps
//!    its previous value
//! 3. Book the time since the last booking into today's runtime and energy,
//!    at the draw of the state that was in effect, priced from this step's
//!    readings
//! 4. Compute the heat load and advance the state machine (at most one
//!    transition)
//! 5. Recompute the snapshot for the new state
//!
//! While OFF, step 4 still runs so the unit can auto-start, but the
//! snapshot only drops its power and EER to zero.
//!
//! ## Accounting
//!
//! Booking is done up to an `accounted_until` mark rather than once per
//! state change. Every non-OFF state counts as runtime, IDLE included, and
//! `set_off()` books the partial interval before switching off.
//!
//! ## Module Organization
//!
//! - [`model`] - Pure heat-load, COP and power functions
//! - [`state`] - [`AcState`] and its transition table
//! - [`daily`] - Rolling 24 h runtime/energy window

pub mod daily;
pub mod model;
pub mod state;

pub use daily::DailyAccumulator;
pub use model::HeatLoad;
pub use state::AcState;

use crate::config::EnergyConfig;
use crate::errors::ConfigResult;
use crate::readings::ModelInputs;
use crate::time::{elapsed_ms, Timestamp};
use crate::traits::{EnergyReadings, IndoorSensors, OutdoorWeather};

use state::TransitionInputs;

/// Outputs of the most recent successful model step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergySnapshot {
    /// Sensible plus latent heat load (W)
    pub heat_load_watts: f32,
    /// Estimated coefficient of performance
    pub cop: f32,
    /// Estimated electrical draw (W)
    pub power_watts: f32,
    /// Energy efficiency ratio (BTU/hr per W)
    pub eer: f32,
    /// Fraction of today the unit has been on
    pub duty_cycle: f32,
}

impl EnergySnapshot {
    /// Heat load in BTU/hr
    pub fn heat_load_btu(&self) -> f32 {
        self.heat_load_watts * crate::constants::WATTS_TO_BTU_PER_HR
    }
}

/// Air-conditioner power and daily energy estimator
#[derive(Debug, Clone)]
pub struct EnergyEngine {
    config: EnergyConfig,
    state: AcState,
    last_state_change: Timestamp,
    last_calc: Timestamp,
    accounted_until: Timestamp,
    snapshot: EnergySnapshot,
    /// Steady-state draw from the last good readings, whatever the state
    base_power_watts: f32,
    daily: DailyAccumulator,
    projected_kwh: f32,
}

impl EnergyEngine {
    /// Create an engine in the OFF state; the first model step runs one
    /// interval after `now`
    pub fn new(config: EnergyConfig, now: Timestamp) -> ConfigResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            state: AcState::Off,
            last_state_change: now,
            last_calc: now,
            accounted_until: now,
            snapshot: EnergySnapshot::default(),
            base_power_watts: 0.0,
            daily: DailyAccumulator::new(now),
            projected_kwh: 0.0,
        })
    }

    /// Run a model step if the calculation interval has elapsed
    pub fn tick<S, W>(&mut self, now: Timestamp, sensors: &S, weather: &W)
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        if elapsed_ms(self.last_calc, now) < self.config.calc_interval_ms {
            return;
        }
        self.last_calc = now;

        if self.daily.roll_over_if_due(now) {
            log_info!("Daily energy window reset");
        }

        let inputs = match ModelInputs::read(sensors, weather) {
            Ok(inputs) => inputs,
            Err(_e) => {
                log_debug!("Energy model step skipped: {}", _e);
                return;
            }
        };

        let load = HeatLoad::compute(&self.config, &inputs);
        let cop = model::estimate_cop(&self.config, &inputs);
        self.base_power_watts = model::base_power_watts(&self.config, &inputs, &load, cop);
        self.account(now, model::power_for_state(&self.config, self.state, self.base_power_watts));

        let transition = TransitionInputs {
            elapsed_in_state_ms: elapsed_ms(self.last_state_change, now),
            indoor_temp_c: inputs.indoor_temp_c,
            heat_load_watts: load.total_watts(),
        };
        if let Some(next) = state::next_state(&self.config, self.state, &transition) {
            self.transition(next, now);
        }

        self.update_snapshot(now, &load, cop);
    }

    /// Manual switch-on; only acts from OFF
    ///
    /// Inrush draw is seeded from the last good readings so the interval up
    /// to the next model step is booked at STARTING power.
    pub fn set_on(&mut self, now: Timestamp) {
        if self.state == AcState::Off {
            self.accounted_until = now;
            self.transition(AcState::Starting, now);

            let power = model::power_for_state(&self.config, AcState::Starting, self.base_power_watts);
            self.snapshot.power_watts = power;
            self.snapshot.eer = model::eer(self.snapshot.heat_load_btu(), power);
        }
    }

    /// Manual switch-off; books the partial interval first
    pub fn set_off(&mut self, now: Timestamp) {
        if self.state != AcState::Off {
            self.account(now, self.snapshot.power_watts);
            self.transition(AcState::Off, now);
            self.snapshot.power_watts = 0.0;
            self.snapshot.eer = 0.0;
        }
    }

    /// Would the unit auto-start on these readings (pure)
    pub fn should_auto_start<S, W>(&self, sensors: &S, weather: &W) -> bool
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        self.probe_load(sensors, weather)
            .is_some_and(|load| load > self.config.auto_on_heat_load_watts)
    }

    /// Would the unit auto-stop on these readings, guard time aside (pure)
    pub fn should_auto_stop<S, W>(&self, sensors: &S, weather: &W) -> bool
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        self.probe_load(sensors, weather)
            .is_some_and(|load| load < self.config.auto_off_heat_load_watts)
    }

    fn probe_load<S, W>(&self, sensors: &S, weather: &W) -> Option<f32>
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        ModelInputs::read(sensors, weather)
            .ok()
            .map(|inputs| HeatLoad::compute(&self.config, &inputs).total_watts())
    }

    /// Book the time since the last booking at `watts`
    fn account(&mut self, now: Timestamp, watts: f32) {
        let interval = elapsed_ms(self.accounted_until, now);
        if self.state.is_on() {
            self.daily.accumulate(now, interval, watts);
        }
        self.accounted_until = now;
    }

    fn transition(&mut self, next: AcState, now: Timestamp) {
        log_info!("AC state {} -> {}", self.state, next);
        self.state = next;
        self.last_state_change = now;
    }

    fn update_snapshot(&mut self, now: Timestamp, load: &HeatLoad, cop: f32) {
        if self.state.is_on() {
            let power = model::power_for_state(&self.config, self.state, self.base_power_watts);

            self.snapshot.heat_load_watts = load.total_watts();
            self.snapshot.cop = cop;
            self.snapshot.power_watts = power;
            self.snapshot.eer = model::eer(load.btu_per_hr(), power);
        } else {
            self.snapshot.power_watts = 0.0;
            self.snapshot.eer = 0.0;
        }

        self.snapshot.duty_cycle = self.daily.duty_cycle(now);
        self.projected_kwh = self.daily.projected_energy_kwh(now, self.snapshot.power_watts);
    }

    /// Active settings
    pub fn config(&self) -> &EnergyConfig {
        &self.config
    }

    /// Current operating state
    pub fn state(&self) -> AcState {
        self.state
    }

    /// When the current state was entered
    pub fn last_state_change(&self) -> Timestamp {
        self.last_state_change
    }

    /// Outputs of the last model step
    pub fn snapshot(&self) -> &EnergySnapshot {
        &self.snapshot
    }

    /// Today's runtime and energy window
    pub fn daily(&self) -> &DailyAccumulator {
        &self.daily
    }

    /// Estimated draw (W); 0 while OFF
    pub fn power_watts(&self) -> f32 {
        self.snapshot.power_watts
    }

    /// Estimated COP
    pub fn cop(&self) -> f32 {
        self.snapshot.cop
    }

    /// Heat load (W)
    pub fn heat_load_watts(&self) -> f32 {
        self.snapshot.heat_load_watts
    }

    /// Heat load (BTU/hr)
    pub fn heat_load_btu(&self) -> f32 {
        self.snapshot.heat_load_btu()
    }

    /// Energy efficiency ratio; 0 while OFF
    pub fn eer(&self) -> f32 {
        self.snapshot.eer
    }

    /// Fraction of today the unit has been on
    pub fn duty_cycle(&self) -> f32 {
        self.snapshot.duty_cycle
    }

    /// Whole seconds on today
    pub fn runtime_seconds_today(&self) -> u32 {
        self.daily.runtime_seconds()
    }

    /// Energy booked today (kWh)
    pub fn energy_today_kwh(&self) -> f32 {
        self.daily.energy_kwh()
    }

    /// Cost of the energy booked today
    pub fn cost_today(&self) -> f32 {
        self.daily.energy_kwh() * self.config.electricity_rate_per_kwh
    }

    /// Full-day energy if today's pattern holds, as of the last model step
    pub fn projected_daily_kwh(&self) -> f32 {
        self.projected_kwh
    }

    /// Full-day cost if today's pattern holds
    pub fn daily_cost_estimate(&self) -> f32 {
        self.projected_kwh * self.config.electricity_rate_per_kwh
    }
}

impl EnergyReadings for EnergyEngine {
    fn power_watts(&self) -> f32 {
        EnergyEngine::power_watts(self)
    }

    fn daily_cost_estimate(&self) -> f32 {
        EnergyEngine::daily_cost_estimate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::{IndoorReading, OutdoorReading};

    const STEP: u32 = crate::constants::ENERGY_CALC_INTERVAL_MS;

    fn engine() -> EnergyEngine {
        EnergyEngine::new(EnergyConfig::default(), 0).unwrap()
    }

    #[test]
    fn starts_off_with_zero_outputs() {
        let engine = engine();
        assert_eq!(engine.state(), AcState::Off);
        assert_eq!(engine.power_watts(), 0.0);
        assert_eq!(engine.energy_today_kwh(), 0.0);
        assert_eq!(engine.daily_cost_estimate(), 0.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = EnergyConfig {
            max_power_watts: 0.0,
            ..EnergyConfig::default()
        };
        assert!(EnergyEngine::new(config, 0).is_err());
    }

    #[test]
    fn rate_limited_to_interval() {
        let mut engine = engine();
        let hot = IndoorReading::new(30.0, 60.0);
        let outdoor = OutdoorReading::new(36.0, 70.0);

        engine.tick(STEP - 1, &hot, &outdoor);
        assert_eq!(engine.state(), AcState::Off);

        engine.tick(STEP, &hot, &outdoor);
        assert_eq!(engine.state(), AcState::Starting);
        assert!(engine.power_watts() > 0.0);
    }

    #[test]
    fn same_timestamp_twice_is_a_no_op() {
        let mut engine = engine();
        let indoor = IndoorReading::new(30.0, 60.0);
        let outdoor = OutdoorReading::new(36.0, 70.0);
        engine.set_on(0);
        engine.tick(STEP, &indoor, &outdoor);
        engine.tick(2 * STEP, &indoor, &outdoor);

        let before = (engine.state(), *engine.snapshot(), *engine.daily());
        engine.tick(2 * STEP, &indoor, &outdoor);
        assert_eq!(before, (engine.state(), *engine.snapshot(), *engine.daily()));
    }

    #[test]
    fn set_on_only_from_off() {
        let mut engine = engine();
        engine.set_on(100);
        assert_eq!(engine.state(), AcState::Starting);
        assert_eq!(engine.last_state_change(), 100);

        engine.set_on(200);
        assert_eq!(engine.last_state_change(), 100);
    }

    #[test]
    fn set_off_books_partial_runtime() {
        let mut engine = engine();
        engine.set_on(0);
        engine.set_off(12_000);

        assert_eq!(engine.state(), AcState::Off);
        assert_eq!(engine.runtime_seconds_today(), 12);
        assert_eq!(engine.power_watts(), 0.0);

        // Second switch-off is ignored
        engine.set_off(20_000);
        assert_eq!(engine.runtime_seconds_today(), 12);
    }

    #[test]
    fn first_interval_after_set_on_is_booked_at_inrush() {
        let mut engine = engine();
        let indoor = IndoorReading::new(30.0, 60.0);
        let outdoor = OutdoorReading::new(36.0, 70.0);

        engine.set_on(0);
        engine.tick(STEP, &indoor, &outdoor);
        assert_eq!(engine.state(), AcState::Starting);

        // One interval at the STARTING draw computed from these readings
        let expected_kwh = engine.power_watts() * STEP as f32 / 3_600_000.0 / 1_000.0;
        assert!(engine.energy_today_kwh() > 0.0);
        assert!((engine.energy_today_kwh() - expected_kwh).abs() < 1e-6);
    }

    #[test]
    fn set_on_seeds_inrush_from_last_readings() {
        let mut engine = engine();
        // Mild: stays OFF but the model still sees the room
        let indoor = IndoorReading::new(25.0, 50.0);
        let outdoor = OutdoorReading::new(26.0, 50.0);
        engine.tick(STEP, &indoor, &outdoor);
        assert_eq!(engine.state(), AcState::Off);
        assert_eq!(engine.power_watts(), 0.0);

        engine.set_on(STEP);
        assert!(engine.power_watts() > 0.0);

        engine.set_off(STEP + 4_000);
        assert_eq!(engine.runtime_seconds_today(), 4);
        assert!(engine.energy_today_kwh() > 0.0);
    }

    #[test]
    fn invalid_inputs_hold_snapshot() {
        let mut engine = engine();
        let indoor = IndoorReading::new(30.0, 60.0);
        let outdoor = OutdoorReading::new(36.0, 70.0);
        engine.set_on(0);
        engine.tick(STEP, &indoor, &outdoor);
        let snapshot = *engine.snapshot();
        let runtime = engine.runtime_seconds_today();

        engine.tick(2 * STEP, &IndoorReading::invalid(), &outdoor);
        engine.tick(3 * STEP, &indoor, &OutdoorReading::unavailable());
        assert_eq!(*engine.snapshot(), snapshot);
        assert_eq!(engine.runtime_seconds_today(), runtime);
    }

    #[test]
    fn idle_draws_fan_power() {
        let mut engine = engine();
        let at_target = IndoorReading::new(24.0, 50.0);
        let outdoor = OutdoorReading::new(30.0, 60.0);
        engine.set_on(0);

        // STARTING -> RUNNING once startup has elapsed, then RUNNING -> IDLE
        let mut now = 0;
        while engine.state() != AcState::Idle {
            now += STEP;
            engine.tick(now, &at_target, &outdoor);
            assert!(now < 60_000, "never reached IDLE");
        }
        assert_eq!(engine.power_watts(), engine.config().fan_only_power_watts);
    }

    #[test]
    fn auto_probes_are_pure() {
        let engine = engine();
        let hot = IndoorReading::new(30.0, 60.0);
        let outdoor = OutdoorReading::new(36.0, 70.0);
        assert!(engine.should_auto_start(&hot, &outdoor));
        assert!(!engine.should_auto_stop(&hot, &outdoor));

        let mild = OutdoorReading::new(24.5, 50.0);
        let comfortable = IndoorReading::new(24.0, 50.0);
        assert!(engine.should_auto_stop(&comfortable, &mild));

        assert!(!engine.should_auto_start(&IndoorReading::invalid(), &outdoor));
        assert!(!engine.should_auto_stop(&IndoorReading::invalid(), &outdoor));
        assert_eq!(engine.state(), AcState::Off);
    }

    #[test]
    fn cost_follows_tariff() {
        let config = EnergyConfig {
            electricity_rate_per_kwh: 0.5,
            ..EnergyConfig::default()
        };
        let mut engine = EnergyEngine::new(config, 0).unwrap();
        let indoor = IndoorReading::new(30.0, 60.0);
        let outdoor = OutdoorReading::new(36.0, 70.0);
        engine.set_on(0);
        for step in 1..=20 {
            engine.tick(step * STEP, &indoor, &outdoor);
        }
        assert!(engine.energy_today_kwh() > 0.0);
        assert!((engine.cost_today() - engine.energy_today_kwh() * 0.5).abs() < 1e-6);
        assert!(engine.daily_cost_estimate() >= engine.cost_today());
    }
}
