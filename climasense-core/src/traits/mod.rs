//! Core Traits and Abstractions for ClimaSense
//!
//! The core never talks to hardware or the network. Everything it reads comes
//! in through the traits in this module, and everything it shows goes out
//! through [`PresentationSink`]. Engines take these as generic parameters on
//! each `tick`, so a test can hand in a scripted fake where the firmware
//! hands in its sensor driver.
//!
//! ## Module Organization
//!
//! - [`inputs`] - Read-only views of indoor sensors, outdoor weather and the
//!   energy engine's outputs
//! - [`time`] - Clock abstraction
//! - [`sink`] - Write-only presentation interface
//!
//! The buzzer output is not defined here: it is any
//! [`embedded_hal::digital::OutputPin`].

pub mod inputs;
pub mod sink;
pub mod time;

pub use inputs::{EnergyReadings, IndoorSensors, OutdoorWeather};
pub use sink::PresentationSink;
pub use time::TimeSource;
