//! Beep sequencer for the piezo buzzer
//!
//! While any alert is active the buzzer sounds a burst of `beep_count`
//! beeps, rests, then repeats:
//!
//! ```text
//!        beep   gap   beep   gap   beep   gap        rest
//! HIGH  ┌────┐      ┌────┐      ┌────┐
//! LOW ──┘    └──────┘    └──────┘    └──────────────────────────────┐ …
//!       IDLE→BEEPING → PAUSED → …                WAITING          → IDLE
//! ```
//!
//! The sequencer only changes state when [`Buzzer::service`] is called, so
//! beep timing is as fine as the caller's service cadence.

use core::fmt;

use embedded_hal::digital::OutputPin;

use crate::config::BuzzerConfig;
use crate::time::{elapsed_ms, Timestamp};

/// Sequencer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuzzerState {
    /// Silent, ready to start a burst
    #[default]
    Idle,
    /// Output high
    Beeping,
    /// Output low between beeps of a burst
    Paused,
    /// Output low, resting after a burst
    Waiting,
}

impl BuzzerState {
    /// Upper-case name for logs and status lines
    pub const fn label(self) -> &'static str {
        match self {
            BuzzerState::Idle => "IDLE",
            BuzzerState::Beeping => "BEEPING",
            BuzzerState::Paused => "PAUSED",
            BuzzerState::Waiting => "WAITING",
        }
    }
}

impl fmt::Display for BuzzerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BuzzerState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

/// Buzzer on a digital output pin
#[derive(Debug)]
pub struct Buzzer<P> {
    pin: P,
    config: BuzzerConfig,
    rest_ms: u32,
    enabled: bool,
    state: BuzzerState,
    beeps: u8,
    state_since: Timestamp,
}

impl<P: OutputPin> Buzzer<P> {
    /// Wrap `pin`; `rest_ms` is the silence after each burst
    pub fn new(pin: P, config: BuzzerConfig, rest_ms: u32) -> Self {
        Self {
            pin,
            config,
            rest_ms,
            enabled: config.enabled,
            state: BuzzerState::Idle,
            beeps: 0,
            state_since: 0,
        }
    }

    /// Advance the sequence
    ///
    /// `alerting` is whether any alert is active right now. When it is
    /// false, or the buzzer is disabled, the output is driven low and the
    /// sequence resets.
    pub fn service(&mut self, now: Timestamp, alerting: bool) -> Result<(), P::Error> {
        if !self.enabled || !alerting {
            return self.silence();
        }

        let elapsed = elapsed_ms(self.state_since, now);
        match self.state {
            BuzzerState::Idle => {
                self.pin.set_high()?;
                self.beeps = 0;
                self.enter(BuzzerState::Beeping, now);
                log_debug!("Buzzer burst started");
            }
            BuzzerState::Beeping if elapsed >= self.config.beep_duration_ms => {
                self.pin.set_low()?;
                self.beeps = self.beeps.saturating_add(1);
                self.enter(BuzzerState::Paused, now);
            }
            BuzzerState::Paused if elapsed >= self.config.beep_interval_ms => {
                if self.beeps < self.config.beep_count {
                    self.pin.set_high()?;
                    self.enter(BuzzerState::Beeping, now);
                } else {
                    self.enter(BuzzerState::Waiting, now);
                    log_debug!("Buzzer resting for {} ms", self.rest_ms);
                }
            }
            BuzzerState::Waiting if elapsed >= self.rest_ms => {
                // Next service call starts a new burst if still alerting
                self.enter(BuzzerState::Idle, now);
            }
            _ => {}
        }
        Ok(())
    }

    /// Enable or disable at runtime; disabling silences immediately
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), P::Error> {
        self.enabled = enabled;
        if enabled {
            Ok(())
        } else {
            self.silence()
        }
    }

    fn silence(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.state = BuzzerState::Idle;
        self.beeps = 0;
        Ok(())
    }

    fn enter(&mut self, state: BuzzerState, now: Timestamp) {
        self.state = state;
        self.state_since = now;
    }

    /// Current sequencer state
    pub fn state(&self) -> BuzzerState {
        self.state
    }

    /// Whether the buzzer may sound
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Beeps completed in the current burst
    pub fn beeps(&self) -> u8 {
        self.beeps
    }

    /// Mid-sequence: a caller must keep servicing even if alerts cleared
    pub fn is_busy(&self) -> bool {
        self.state != BuzzerState::Idle
    }

    /// Borrow the output pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Debug, Default)]
    struct FlagPin {
        high: bool,
    }

    impl ErrorType for FlagPin {
        type Error = Infallible;
    }

    impl OutputPin for FlagPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    fn buzzer() -> Buzzer<FlagPin> {
        Buzzer::new(FlagPin::default(), BuzzerConfig::default(), 4_000)
    }

    #[test]
    fn one_burst() {
        let mut buzzer = buzzer();
        buzzer.service(0, true).unwrap();
        assert_eq!(buzzer.state(), BuzzerState::Beeping);
        assert!(buzzer.pin().high);

        buzzer.service(199, true).unwrap();
        assert!(buzzer.pin().high);
        buzzer.service(200, true).unwrap();
        assert_eq!(buzzer.state(), BuzzerState::Paused);
        assert_eq!(buzzer.beeps(), 1);

        buzzer.service(500, true).unwrap();
        buzzer.service(700, true).unwrap();
        buzzer.service(1_000, true).unwrap();
        buzzer.service(1_200, true).unwrap();
        assert_eq!(buzzer.beeps(), 3);
        assert!(!buzzer.pin().high);

        buzzer.service(1_500, true).unwrap();
        assert_eq!(buzzer.state(), BuzzerState::Waiting);

        buzzer.service(5_499, true).unwrap();
        assert_eq!(buzzer.state(), BuzzerState::Waiting);
        buzzer.service(5_500, true).unwrap();
        assert_eq!(buzzer.state(), BuzzerState::Idle);
    }

    #[test]
    fn clearing_alerts_silences_mid_beep() {
        let mut buzzer = buzzer();
        buzzer.service(0, true).unwrap();
        buzzer.service(50, false).unwrap();
        assert_eq!(buzzer.state(), BuzzerState::Idle);
        assert_eq!(buzzer.beeps(), 0);
        assert!(!buzzer.pin().high);
    }

    #[test]
    fn disabled_never_sounds() {
        let config = BuzzerConfig {
            enabled: false,
            ..BuzzerConfig::default()
        };
        let mut buzzer = Buzzer::new(FlagPin::default(), config, 4_000);
        buzzer.service(0, true).unwrap();
        assert_eq!(buzzer.state(), BuzzerState::Idle);
        assert!(!buzzer.pin().high);
    }

    #[test]
    fn runtime_disable_silences() {
        let mut buzzer = buzzer();
        buzzer.service(0, true).unwrap();
        assert!(buzzer.pin().high);

        buzzer.set_enabled(false).unwrap();
        assert!(!buzzer.pin().high);
        assert!(!buzzer.is_busy());

        buzzer.set_enabled(true).unwrap();
        buzzer.service(10, true).unwrap();
        assert!(buzzer.pin().high);
    }
}
