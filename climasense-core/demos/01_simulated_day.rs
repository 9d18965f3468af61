//! Simulated Day Example
//!
//! Runs the monitor through 24 hours of a summer day at 100 ms loop
//! resolution. Outdoor weather follows a daily sine; the room warms towards
//! outdoor temperature and cools while the modelled compressor runs.
//!
//! ## What You'll Learn
//!
//! - Wiring sensors, weather and a buzzer pin into a [`Monitor`]
//! - Driving it from a [`TimeSource`]
//! - Reading energy figures and pushing them to a presentation sink
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_simulated_day
//! ```

use core::convert::Infallible;

use climasense_core::time::FixedTime;
use climasense_core::{
    AcState, IndoorReading, Monitor, MonitorConfig, OutdoorReading, PresentationSink,
    TimeSource,
};
use embedded_hal::digital::{ErrorType, OutputPin};

const LOOP_MS: u32 = 100;
const HOUR_MS: u32 = 3_600_000;

/// Counts rising edges instead of making noise
#[derive(Default)]
struct CountingBuzzer {
    high: bool,
    beeps: u32,
}

impl ErrorType for CountingBuzzer {
    type Error = Infallible;
}

impl OutputPin for CountingBuzzer {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        if !self.high {
            self.beeps += 1;
        }
        self.high = true;
        Ok(())
    }
}

/// Prints each field on one line
struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn update_energy_line(&mut self, line: &str) {
        print!("  {line}");
    }

    fn update_ac_status(&mut self, status: &str) {
        print!("  [{status:>8}]");
    }

    fn update_alerts(&mut self, summary: &str) {
        print!("  {summary}");
    }

    fn update_indoor_indicator(&mut self, normal: bool) {
        print!("  indoor:{}", if normal { "ok" } else { "!!" });
    }

    fn update_energy_indicator(&mut self, normal: bool) {
        print!(" energy:{}", if normal { "ok" } else { "!!" });
    }

    fn update_air_quality_indicator(&mut self, normal: bool) {
        println!(" air:{}", if normal { "ok" } else { "!!" });
    }
}

/// Outdoor conditions: 24°C at dawn, 36°C mid-afternoon
fn weather_at(now: u32) -> OutdoorReading {
    let hours = now as f32 / HOUR_MS as f32;
    let phase = (hours - 9.0) / 24.0 * core::f32::consts::TAU;
    OutdoorReading::new(30.0 + 6.0 * phase.sin(), 65.0 - 15.0 * phase.sin())
}

fn main() {
    println!("ClimaSense Simulated Day");
    println!("========================\n");

    let mut clock = FixedTime::new(0);
    let mut monitor = match Monitor::new(MonitorConfig::default(), CountingBuzzer::default(), clock.now()) {
        Ok(monitor) => monitor,
        Err(e) => {
            eprintln!("configuration rejected: {e}");
            return;
        }
    };
    let mut sink = ConsoleSink;

    let mut indoor_temp = 26.0_f32;
    let mut indoor_humidity = 55.0_f32;

    // Stop short of the 24 h mark, where the daily totals roll over
    while clock.now() < 24 * HOUR_MS - LOOP_MS {
        clock.advance(LOOP_MS);
        let now = clock.now();
        let outdoor = weather_at(now);

        // Crude room: drifts towards outdoor, pulled down while cooling
        let dt_h = LOOP_MS as f32 / HOUR_MS as f32;
        indoor_temp += (outdoor.temperature_c - indoor_temp) * 0.4 * dt_h;
        indoor_humidity += (outdoor.humidity_pct - indoor_humidity) * 0.2 * dt_h;
        match monitor.energy().state() {
            AcState::Running => indoor_temp -= 3.0 * dt_h,
            AcState::Starting => indoor_temp -= 1.0 * dt_h,
            AcState::Idle | AcState::Off => {}
        }

        let indoor = IndoorReading::new(indoor_temp, indoor_humidity);
        monitor.poll(&clock, &indoor, &outdoor).unwrap_or_else(|e| match e {});

        if now % HOUR_MS == 0 {
            print!("{:02}:00  in {:.1}°C  out {:.1}°C", now / HOUR_MS, indoor_temp, outdoor.temperature_c);
            monitor.publish(&mut sink);
        }
    }

    let energy = monitor.energy();
    println!("\nSummary");
    println!("-------");
    println!("Runtime today:   {:.1} h", energy.runtime_seconds_today() as f32 / 3600.0);
    println!("Energy today:    {:.2} kWh", energy.energy_today_kwh());
    println!("Cost today:      ${:.2}", energy.cost_today());
    println!("Buzzer bursts:   {} beeps", monitor.alerts().buzzer().pin().beeps);
}
