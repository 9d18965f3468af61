//! Presentation formatting
//!
//! Builds the values handed to a [`PresentationSink`]. Strings are
//! fixed-capacity so formatting works without an allocator.

use core::fmt::Write;

use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::alerts::AlertEngine;
use crate::constants::buffers::ENERGY_LINE_CAPACITY;
use crate::energy::EnergyEngine;
use crate::traits::PresentationSink;

/// Energy summary line
pub type EnergyLine = String<ENERGY_LINE_CAPACITY>;

/// `1180W  •  9.4kWh/day  •  $2.82/day  •  41% duty`
///
/// Watts and duty percentage are truncated, not rounded.
pub fn energy_line(power_watts: f32, daily_kwh: f32, daily_cost: f32, duty_cycle: f32) -> EnergyLine {
    let mut line = EnergyLine::new();
    let written = write!(
        line,
        "{}W  \u{2022}  {:.1}kWh/day  \u{2022}  ${:.2}/day  \u{2022}  {}% duty",
        power_watts as i32,
        daily_kwh,
        daily_cost,
        (duty_cycle * 100.0) as i32,
    );
    if written.is_err() {
        log_warn!("Energy line truncated");
    }
    line
}

/// Energy line from the engine's projected daily figures
pub fn energy_line_for(energy: &EnergyEngine) -> EnergyLine {
    energy_line(
        energy.power_watts(),
        energy.projected_daily_kwh(),
        energy.daily_cost_estimate(),
        energy.duty_cycle(),
    )
}

/// Push every presentation field to `sink`
pub fn publish<K, P>(sink: &mut K, energy: &EnergyEngine, alerts: &AlertEngine<P>)
where
    K: PresentationSink + ?Sized,
    P: OutputPin,
{
    sink.update_energy_line(&energy_line_for(energy));
    sink.update_ac_status(energy.state().label());
    sink.update_alerts(&alerts.summary());
    sink.update_indoor_indicator(alerts.is_indoor_normal());
    sink.update_energy_indicator(alerts.is_energy_normal());
    sink.update_air_quality_indicator(alerts.is_air_quality_normal());
}
