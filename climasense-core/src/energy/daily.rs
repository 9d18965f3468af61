//! Rolling 24-hour runtime and energy accounting
//!
//! The window starts at construction and restarts every time 24 h have
//! passed since its start. Nothing here survives a reboot.

use crate::constants::physics::WATTS_PER_KW;
use crate::constants::time::{HOURS_PER_DAY, MS_PER_DAY, MS_PER_HOUR, MS_PER_SECOND};
use crate::time::{elapsed_ms, Timestamp};

/// Today's runtime and energy totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAccumulator {
    runtime_ms: u32,
    energy_kwh: f32,
    day_start: Timestamp,
}

impl DailyAccumulator {
    /// Empty window starting at `now`
    pub fn new(now: Timestamp) -> Self {
        Self {
            runtime_ms: 0,
            energy_kwh: 0.0,
            day_start: now,
        }
    }

    /// Zero the totals if the window is 24 h old. Returns true on rollover.
    pub fn roll_over_if_due(&mut self, now: Timestamp) -> bool {
        if self.elapsed_today_ms(now) >= MS_PER_DAY {
            *self = Self::new(now);
            true
        } else {
            false
        }
    }

    /// Add `interval_ms` of runtime at `power_watts`
    ///
    /// The interval is clipped to the current window so time before the
    /// last rollover is never credited to today.
    pub fn accumulate(&mut self, now: Timestamp, interval_ms: u32, power_watts: f32) {
        let interval_ms = interval_ms.min(self.elapsed_today_ms(now));
        if interval_ms == 0 {
            return;
        }

        self.runtime_ms = self.runtime_ms.saturating_add(interval_ms);
        let hours = interval_ms as f32 / MS_PER_HOUR as f32;
        self.energy_kwh += power_watts.max(0.0) * hours / WATTS_PER_KW;
    }

    /// Start of the current 24 h window
    pub fn day_start(&self) -> Timestamp {
        self.day_start
    }

    /// Time since the window started
    pub fn elapsed_today_ms(&self, now: Timestamp) -> u32 {
        elapsed_ms(self.day_start, now)
    }

    /// Whole seconds on today
    pub fn runtime_seconds(&self) -> u32 {
        self.runtime_ms / MS_PER_SECOND
    }

    /// Runtime today in hours
    pub fn runtime_hours(&self) -> f32 {
        self.runtime_ms as f32 / MS_PER_HOUR as f32
    }

    /// Energy booked today (kWh)
    pub fn energy_kwh(&self) -> f32 {
        self.energy_kwh
    }

    /// Fraction of today the unit was on, in `[0, 1]`
    pub fn duty_cycle(&self, now: Timestamp) -> f32 {
        let elapsed = self.elapsed_today_ms(now);
        if elapsed == 0 {
            return 0.0;
        }
        (self.runtime_ms as f32 / elapsed as f32).clamp(0.0, 1.0)
    }

    /// Mean draw while on; `fallback_watts` until some energy has been booked
    pub fn average_power_watts(&self, fallback_watts: f32) -> f32 {
        if self.runtime_ms > 0 && self.energy_kwh > 0.0 {
            self.energy_kwh * WATTS_PER_KW / self.runtime_hours()
        } else {
            fallback_watts
        }
    }

    /// Energy by the end of the window if today's pattern continues
    pub fn projected_energy_kwh(&self, now: Timestamp, current_power_watts: f32) -> f32 {
        let elapsed_hours = self.elapsed_today_ms(now) as f32 / MS_PER_HOUR as f32;
        let remaining_hours = (HOURS_PER_DAY as f32 - elapsed_hours).max(0.0);
        let average_watts = self.average_power_watts(current_power_watts);

        self.energy_kwh + average_watts * remaining_hours * self.duty_cycle(now) / WATTS_PER_KW
    }
}
