//! HVAC Thermodynamic Model
//!
//! ## Physics Background
//!
//! ### Heat load
//!
//! The air conditioner has to remove whatever heat leaks into the room.
//! Two components are modelled:
//!
//! ```text
//! Sensible = U × A × |T_out − T_in|
//! Latent   = |RH_out − RH_in| × V × k_latent × (1 + (T_avg − 20) × k_temp)
//! ```
//!
//! Sensible load is conduction through the envelope. Latent load is the
//! moisture the coil has to condense out of infiltrating air; warmer air
//! carries more water per %RH, hence the temperature correction.
//!
//! ### Coefficient of performance
//!
//! A heat pump moving heat from `T_cold` to `T_hot` cannot beat Carnot:
//!
//! ```text
//! COP_carnot = T_cold / (T_hot − T_cold)      (Kelvin)
//! ```
//!
//! Real units reach a fraction of that, and lose more as the lift grows.
//! The result is clamped to a plausible band so a mild day cannot report a
//! COP of 40.
//!
//! ### Power
//!
//! ```text
//! P_base = (Sensible + Latent) / COP × penalties × unit factor
//! ```
//!
//! Then the operating state decides what is actually drawn: inrush while
//! STARTING, `P_base` while RUNNING, fan only while IDLE.
//!
//! All functions here are pure; the engine owns the state.

use crate::config::EnergyConfig;
use crate::constants::hvac::MIN_TEMPERATURE_LIFT_K;
use crate::constants::physics::{KELVIN_OFFSET, LATENT_REFERENCE_TEMP_C, WATTS_TO_BTU_PER_HR};
use crate::readings::ModelInputs;

use super::state::AcState;

/// Heat load split into its components (W)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeatLoad {
    /// Temperature-driven load (W)
    pub sensible_watts: f32,
    /// Moisture-removal load (W)
    pub latent_watts: f32,
}

impl HeatLoad {
    /// Compute both components from validated inputs
    pub fn compute(config: &EnergyConfig, inputs: &ModelInputs) -> Self {
        Self {
            sensible_watts: sensible_heat_load(config, inputs),
            latent_watts: latent_heat_load(config, inputs),
        }
    }

    /// Sensible plus latent (W)
    pub fn total_watts(&self) -> f32 {
        self.sensible_watts + self.latent_watts
    }

    /// Total load in BTU/hr
    pub fn btu_per_hr(&self) -> f32 {
        self.total_watts() * WATTS_TO_BTU_PER_HR
    }
}

/// Conduction through the envelope: U × A × ΔT
pub fn sensible_heat_load(config: &EnergyConfig, inputs: &ModelInputs) -> f32 {
    config.heat_transfer_coeff_w_per_m2k * config.surface_area_m2 * inputs.temp_difference()
}

/// Moisture removal load, corrected for average air temperature
pub fn latent_heat_load(config: &EnergyConfig, inputs: &ModelInputs) -> f32 {
    let avg_temp = (inputs.indoor_temp_c + inputs.outdoor_temp_c) / 2.0;
    // Correction only scales the load; it must not flip its sign in deep cold
    let temp_factor =
        (1.0 + (avg_temp - LATENT_REFERENCE_TEMP_C) * config.latent_heat_temp_factor).max(0.0);

    inputs.humidity_difference() * config.air_volume_m3 * config.latent_heat_factor * temp_factor
}

/// Theoretical Carnot COP between the target temperature and outdoors
///
/// The lift is floored at `MIN_TEMPERATURE_LIFT_K` so the ratio stays finite
/// when outdoor air is at or below target.
pub fn carnot_cop(target_temp_c: f32, outdoor_temp_c: f32) -> f32 {
    let cold_k = target_temp_c + KELVIN_OFFSET;
    let hot_k = outdoor_temp_c + KELVIN_OFFSET;
    let lift = (hot_k - cold_k).max(MIN_TEMPERATURE_LIFT_K);
    cold_k / lift
}

/// Realistic COP, always within `[config.min_cop, config.max_cop]`
pub fn estimate_cop(config: &EnergyConfig, inputs: &ModelInputs) -> f32 {
    let real_cop = carnot_cop(config.target_indoor_temp_c, inputs.outdoor_temp_c)
        * config.carnot_efficiency;

    let degradation = (1.0 - inputs.temp_difference() * config.cop_degradation_per_c)
        .max(config.min_cop_degradation);

    (real_cop * degradation).clamp(config.min_cop, config.max_cop)
}

/// Multiplicative penalty for operating away from the optimal point
///
/// Exactly 1.0 when both the temperature difference and the outdoor
/// humidity are at or below their optimal values.
pub fn efficiency_factor(config: &EnergyConfig, inputs: &ModelInputs) -> f32 {
    let mut factor = 1.0;

    let temp_difference = inputs.temp_difference();
    if temp_difference > config.optimal_temp_difference_c {
        factor *= 1.0
            + (temp_difference - config.optimal_temp_difference_c) * config.temp_efficiency_penalty;
    }

    if inputs.outdoor_humidity_pct > config.optimal_humidity_pct {
        factor *= 1.0
            + (inputs.outdoor_humidity_pct - config.optimal_humidity_pct)
                * config.humidity_efficiency_penalty;
    }

    factor
}

/// Compressor power needed to carry `load` at `cop`, before state scaling
pub fn base_power_watts(config: &EnergyConfig, inputs: &ModelInputs, load: &HeatLoad, cop: f32) -> f32 {
    // COP is clamped to a positive band upstream; the floor is for callers
    // passing their own value
    let cop = cop.max(f32::MIN_POSITIVE);
    load.total_watts() / cop * efficiency_factor(config, inputs) * config.unit_efficiency_factor
}

/// Electrical draw in a given operating state, clamped to `[0, max_power]`
pub fn power_for_state(config: &EnergyConfig, state: AcState, base_power_watts: f32) -> f32 {
    let power = match state {
        AcState::Off => 0.0,
        AcState::Starting => base_power_watts * config.startup_power_multiplier,
        AcState::Running => base_power_watts,
        AcState::Idle => config.fan_only_power_watts,
    };
    power.clamp(0.0, config.max_power_watts)
}

/// Energy efficiency ratio: BTU/hr of heat load per watt drawn
pub fn eer(heat_load_btu: f32, power_watts: f32) -> f32 {
    if power_watts > 0.0 {
        heat_load_btu / power_watts
    } else {
        0.0
    }
}
