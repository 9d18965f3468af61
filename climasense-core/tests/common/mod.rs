//! Shared fakes for integration tests
//!
//! - [`RecordingPin`]: output pin that remembers its level and every write
//! - [`FaultyPin`]: output pin whose writes always fail
//! - [`RecordingSink`]: presentation sink keeping the last value per field
//! - [`run_buzzer`]: drives a monitor over a time range and returns the
//!   pin's level changes with their timestamps

#![allow(dead_code)]

use core::convert::Infallible;

use climasense_core::{
    IndoorSensors, Monitor, OutdoorWeather, PresentationSink, Timestamp,
};
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

/// Output pin that records every write
#[derive(Debug, Default)]
pub struct RecordingPin {
    pub high: bool,
    pub writes: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        self.writes.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        self.writes.push(true);
        Ok(())
    }
}

/// Pin error surfaced by [`FaultyPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that refuses every write
#[derive(Debug, Default)]
pub struct FaultyPin;

impl ErrorType for FaultyPin {
    type Error = PinFault;
}

impl OutputPin for FaultyPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }
}

/// Last value pushed to each presentation field
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub energy_line: String,
    pub ac_status: String,
    pub alerts: String,
    pub indoor_normal: Option<bool>,
    pub energy_normal: Option<bool>,
    pub air_quality_normal: Option<bool>,
    pub updates: usize,
}

impl PresentationSink for RecordingSink {
    fn update_energy_line(&mut self, line: &str) {
        self.energy_line = line.to_string();
        self.updates += 1;
    }

    fn update_ac_status(&mut self, status: &str) {
        self.ac_status = status.to_string();
        self.updates += 1;
    }

    fn update_alerts(&mut self, summary: &str) {
        self.alerts = summary.to_string();
        self.updates += 1;
    }

    fn update_indoor_indicator(&mut self, normal: bool) {
        self.indoor_normal = Some(normal);
        self.updates += 1;
    }

    fn update_energy_indicator(&mut self, normal: bool) {
        self.energy_normal = Some(normal);
        self.updates += 1;
    }

    fn update_air_quality_indicator(&mut self, normal: bool) {
        self.air_quality_normal = Some(normal);
        self.updates += 1;
    }
}

/// Tick `monitor` from `start` to `end` inclusive every `step` ms and
/// return `(time, level)` for every change of the buzzer output
pub fn run_buzzer<S, W>(
    monitor: &mut Monitor<RecordingPin>,
    start: Timestamp,
    end: Timestamp,
    step: u32,
    sensors: &S,
    weather: &W,
) -> Vec<(Timestamp, bool)>
where
    S: IndoorSensors,
    W: OutdoorWeather,
{
    let mut edges = Vec::new();
    let mut level = monitor.alerts().buzzer().pin().high;
    let mut now = start;
    loop {
        monitor.tick(now, sensors, weather).unwrap();
        let current = monitor.alerts().buzzer().pin().high;
        if current != level {
            edges.push((now, current));
            level = current;
        }
        if now == end {
            break;
        }
        now = now.wrapping_add(step);
    }
    edges
}

/// Relative float comparison for model outputs
pub fn approx_eq(a: f32, b: f32, rel: f32) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}
