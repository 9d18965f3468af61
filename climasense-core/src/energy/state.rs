//! Air-conditioner operating state machine
//!
//! ```text
//!            load > auto_on              startup elapsed
//!   ┌─────┐ ───────────────▶ ┌──────────┐ ──────────────▶ ┌─────────┐
//!   │ OFF │                  │ STARTING │                 │ RUNNING │
//!   └─────┘ ◀─┐              └──────────┘                 └─────────┘
//!             │ guard elapsed                   |err| ≤ deadband │  ▲
//!             │ and load < auto_off                              ▼  │ |err| > deadband
//!             │                                           ┌──────┐  │       + tolerance
//!             └────────────────────────────────────────── │ IDLE │ ─┘
//!                                                         └──────┘
//! ```
//!
//! The state is a software model of what the unit is probably doing, used
//! for the power estimate. It never drives hardware.

use core::fmt;

use crate::config::EnergyConfig;

/// Modelled operating state of the air conditioner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcState {
    /// Unit switched off, no draw
    #[default]
    Off,
    /// Compressor spinning up, inrush draw
    Starting,
    /// Compressor running at steady state
    Running,
    /// Compressor resting inside the deadband, fan only
    Idle,
}

impl AcState {
    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            AcState::Off => "OFF",
            AcState::Starting => "STARTING",
            AcState::Running => "RUNNING",
            AcState::Idle => "IDLE",
        }
    }

    /// Anything but OFF counts towards daily runtime
    pub const fn is_on(self) -> bool {
        !matches!(self, AcState::Off)
    }
}

impl fmt::Display for AcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AcState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

/// What the state machine looks at on one model step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionInputs {
    /// Time spent in the current state
    pub elapsed_in_state_ms: u32,
    /// Indoor temperature in °C
    pub indoor_temp_c: f32,
    /// Total heat load in watts
    pub heat_load_watts: f32,
}

/// Next state, or `None` to stay put
///
/// At most one transition per call. From IDLE the restart condition is
/// checked before the shutdown condition, so a room drifting out of the
/// deadband never powers down.
pub fn next_state(config: &EnergyConfig, state: AcState, inputs: &TransitionInputs) -> Option<AcState> {
    let temp_error = libm::fabsf(inputs.indoor_temp_c - config.target_indoor_temp_c);

    match state {
        AcState::Off if inputs.heat_load_watts > config.auto_on_heat_load_watts => {
            Some(AcState::Starting)
        }
        AcState::Starting if inputs.elapsed_in_state_ms >= config.startup_duration_ms => {
            Some(AcState::Running)
        }
        AcState::Running if temp_error <= config.deadband_c => Some(AcState::Idle),
        AcState::Idle if temp_error > config.deadband_c + config.restart_tolerance_c => {
            Some(AcState::Running)
        }
        AcState::Idle
            if inputs.elapsed_in_state_ms >= config.min_off_guard_ms
                && inputs.heat_load_watts < config.auto_off_heat_load_watts =>
        {
            Some(AcState::Off)
        }
        _ => None,
    }
}
