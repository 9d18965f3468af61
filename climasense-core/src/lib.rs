//! Decision core for the ClimaSense indoor climate monitor
//!
//! Turns indoor sensor readings and outdoor weather into two things:
//! - an estimate of the air conditioner's power draw, running state and
//!   daily energy/cost ([`energy`])
//! - threshold-triggered alerts with an audible beep sequence ([`alerts`])
//!
//! Key constraints:
//! - Runs on a single cooperative loop, no blocking, no I/O in the core
//! - No heap allocation (fixed-capacity strings and arrays)
//! - Millisecond clock that wraps after ~49.7 days
//!
//! ```no_run
//! use climasense_core::{Monitor, MonitorConfig, IndoorReading, OutdoorReading};
//! # use core::convert::Infallible;
//! # struct Pin;
//! # impl embedded_hal::digital::ErrorType for Pin { type Error = Infallible; }
//! # impl embedded_hal::digital::OutputPin for Pin {
//! #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//!
//! let mut monitor = Monitor::new(MonitorConfig::default(), Pin, 0).unwrap();
//! let indoor = IndoorReading::new(27.5, 62.0);
//! let outdoor = OutdoorReading::new(33.0, 70.0);
//!
//! // Called from the main loop on every pass
//! monitor.tick(5_000, &indoor, &outdoor).unwrap();
//! let watts = monitor.energy().power_watts();
//! # let _ = watts;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod alerts;
pub mod config;
pub mod constants;
pub mod display;
pub mod energy;
pub mod errors;
pub mod monitor;
pub mod readings;
pub mod time;
pub mod traits;

// Public API
pub use alerts::{AlertCategory, AlertEngine, AlertRecord, AlertType, Buzzer, BuzzerState};
pub use config::{AlertConfig, BuzzerConfig, EnergyConfig, MonitorConfig};
pub use energy::{AcState, EnergyEngine, EnergySnapshot};
pub use errors::{ConfigError, ConfigResult, InputError};
pub use monitor::Monitor;
pub use readings::{IndoorReading, ModelInputs, OutdoorReading};
pub use time::{elapsed_ms, FixedTime, Timestamp, WarmUpTimer};
pub use traits::{EnergyReadings, IndoorSensors, OutdoorWeather, PresentationSink, TimeSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
