//! Physical Constants
//!
//! Unit conversions used by the thermodynamic model.

/// Offset between Celsius and Kelvin scales.
///
/// Source: SI Brochure, 9th edition (2019)
pub const KELVIN_OFFSET: f32 = 273.15;

/// Watts to BTU per hour.
///
/// 1 W = 3.412142 BTU/hr. Residential AC capacity and EER are quoted in
/// BTU/hr, so the heat load is exposed in both units.
///
/// Source: ASHRAE Handbook - Fundamentals, Chapter 38
pub const WATTS_TO_BTU_PER_HR: f32 = 3.412_142;

/// Reference temperature for the latent load temperature correction (°C).
///
/// Latent load is scaled up or down relative to this average air temperature.
pub const LATENT_REFERENCE_TEMP_C: f32 = 20.0;

/// Watts per kilowatt.
pub const WATTS_PER_KW: f32 = 1000.0;
