//! Energy engine over realistic timelines: state cycle, accounting, rollover

mod common;

use climasense_core::{
    AcState, EnergyConfig, EnergyEngine, IndoorReading, OutdoorReading, Timestamp,
};
use climasense_core::constants::{MS_PER_DAY, MS_PER_HOUR};

const STEP: u32 = 5_000;

fn run(
    engine: &mut EnergyEngine,
    from: Timestamp,
    to: Timestamp,
    indoor: &IndoorReading,
    outdoor: &OutdoorReading,
) -> Timestamp {
    let mut now = from;
    while now != to {
        now = now.wrapping_add(STEP);
        engine.tick(now, indoor, outdoor);
    }
    now
}

#[test]
fn full_cycle_off_to_off() {
    let config = EnergyConfig::default();
    let mut engine = EnergyEngine::new(config, 0).unwrap();
    let hot = IndoorReading::new(30.0, 50.0);
    let hot_outside = OutdoorReading::new(35.0, 60.0);

    // Load ~1.2 kW: auto-start on the first step
    engine.tick(STEP, &hot, &hot_outside);
    assert_eq!(engine.state(), AcState::Starting);
    let starting_power = engine.power_watts();

    let now = run(&mut engine, STEP, STEP + config.startup_duration_ms, &hot, &hot_outside);
    assert_eq!(engine.state(), AcState::Running);
    assert!(
        common::approx_eq(starting_power, engine.power_watts() * config.startup_power_multiplier, 1e-4),
        "inrush should be the running draw times the startup multiplier"
    );

    // Room reaches target on a mild evening
    let comfortable = IndoorReading::new(24.2, 50.0);
    let mild = OutdoorReading::new(24.5, 50.0);
    let now = run(&mut engine, now, now + STEP, &comfortable, &mild);
    assert_eq!(engine.state(), AcState::Idle);
    assert_eq!(engine.power_watts(), config.fan_only_power_watts);
    let idle_since = now;

    // Low load, but the guard holds the fan on
    let now = run(&mut engine, now, idle_since + config.min_off_guard_ms - STEP, &comfortable, &mild);
    assert_eq!(engine.state(), AcState::Idle);

    run(&mut engine, now, now + STEP, &comfortable, &mild);
    assert_eq!(engine.state(), AcState::Off);
    assert_eq!(engine.power_watts(), 0.0);
    assert_eq!(engine.eer(), 0.0);
}

#[test]
fn idle_restarts_when_room_drifts() {
    let config = EnergyConfig::default();
    let mut engine = EnergyEngine::new(config, 0).unwrap();
    let outdoor = OutdoorReading::new(33.0, 60.0);
    engine.set_on(0);

    let now = run(&mut engine, 0, 40_000, &IndoorReading::new(24.0, 50.0), &outdoor);
    assert_eq!(engine.state(), AcState::Idle);

    // 1.4°C above target: inside deadband + tolerance, stays idle
    let now = run(&mut engine, now, now + STEP, &IndoorReading::new(25.4, 50.0), &outdoor);
    assert_eq!(engine.state(), AcState::Idle);

    run(&mut engine, now, now + STEP, &IndoorReading::new(25.6, 50.0), &outdoor);
    assert_eq!(engine.state(), AcState::Running);
}

#[test]
fn runtime_counts_every_non_off_state() {
    let mut engine = EnergyEngine::new(EnergyConfig::default(), 0).unwrap();
    let indoor = IndoorReading::new(24.0, 50.0);
    let outdoor = OutdoorReading::new(30.0, 60.0);

    engine.set_on(0);
    run(&mut engine, 0, 120_000, &indoor, &outdoor);
    assert_eq!(engine.state(), AcState::Idle);
    assert_eq!(engine.runtime_seconds_today(), 120);
    assert!((engine.duty_cycle() - 1.0).abs() < 1e-6);
}

#[test]
fn manual_off_folds_partial_interval() {
    let mut engine = EnergyEngine::new(EnergyConfig::default(), 0).unwrap();
    let indoor = IndoorReading::new(28.0, 50.0);
    let outdoor = OutdoorReading::new(33.0, 60.0);

    engine.set_on(0);
    run(&mut engine, 0, 20_000, &indoor, &outdoor);
    let energy_before = engine.energy_today_kwh();

    // 3.5 s after the last model step
    engine.set_off(23_500);
    assert_eq!(engine.runtime_seconds_today(), 23);
    assert!(engine.energy_today_kwh() > energy_before);

    // Nothing accrues while off
    run(&mut engine, 20_000, 60_000, &IndoorReading::new(24.0, 50.0), &OutdoorReading::new(24.0, 50.0));
    assert_eq!(engine.runtime_seconds_today(), 23);
}

#[test]
fn daily_rollover_resets_once() {
    let config = EnergyConfig {
        calc_interval_ms: 60_000,
        ..EnergyConfig::default()
    };
    let mut engine = EnergyEngine::new(config, 0).unwrap();
    let indoor = IndoorReading::new(30.0, 50.0);
    let outdoor = OutdoorReading::new(35.0, 60.0);
    engine.set_on(0);

    let mut now = 0;
    while now < MS_PER_DAY - 60_000 {
        now += 60_000;
        engine.tick(now, &indoor, &outdoor);
    }
    assert_eq!(engine.runtime_seconds_today(), (MS_PER_DAY - 60_000) / 1_000);
    let yesterday_kwh = engine.energy_today_kwh();
    assert!(yesterday_kwh > 0.0);

    // Step that lands exactly on the 24 h mark starts a new window and books
    // nothing from before it
    now += 60_000;
    engine.tick(now, &indoor, &outdoor);
    assert_eq!(engine.runtime_seconds_today(), 0);
    assert_eq!(engine.energy_today_kwh(), 0.0);
    assert_eq!(engine.daily().day_start(), MS_PER_DAY);

    now += 60_000;
    engine.tick(now, &indoor, &outdoor);
    assert_eq!(engine.runtime_seconds_today(), 60);
    assert!(engine.energy_today_kwh() < yesterday_kwh);
}

#[test]
fn projection_covers_rest_of_day() {
    let mut engine = EnergyEngine::new(EnergyConfig::default(), 0).unwrap();
    let indoor = IndoorReading::new(30.0, 50.0);
    let outdoor = OutdoorReading::new(35.0, 60.0);
    engine.set_on(0);
    run(&mut engine, 0, MS_PER_HOUR, &indoor, &outdoor);

    // Always on so far: projection is about 24x the first hour
    let first_hour = engine.energy_today_kwh();
    let projected = engine.projected_daily_kwh();
    assert!(projected > 20.0 * first_hour && projected < 26.0 * first_hour);
    assert!(
        common::approx_eq(engine.daily_cost_estimate(), projected * 0.30, 1e-5),
        "cost estimate should be projected energy at the default tariff"
    );
}

#[test]
fn accounting_across_counter_wrap() {
    let start = u32::MAX - 12_000;
    let mut engine = EnergyEngine::new(EnergyConfig::default(), start).unwrap();
    let indoor = IndoorReading::new(28.0, 50.0);
    let outdoor = OutdoorReading::new(33.0, 60.0);

    engine.set_on(start);
    let end = start.wrapping_add(60_000);
    run(&mut engine, start, end, &indoor, &outdoor);

    assert_eq!(engine.runtime_seconds_today(), 60);
    assert_eq!(engine.daily().elapsed_today_ms(end), 60_000);
    // Startup ends 30 s after set_on, wrap or not
    assert_eq!(engine.state(), AcState::Running);
}
