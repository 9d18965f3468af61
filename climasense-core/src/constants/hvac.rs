//! HVAC Model Parameters
//!
//! Describes the conditioned room and the air conditioner serving it. The
//! defaults model a ~25 m² bedroom with a 2.5 m ceiling cooled by a 12 000
//! BTU/hr split unit. Change them through [`crate::config::EnergyConfig`]
//! rather than editing the constants for a single deployment.

// ===== ROOM THERMAL MODEL =====

/// Overall heat transfer coefficient of the room envelope (W/m²·K).
///
/// Blended U-value across walls, glazing and ceiling. Single-glazed tropical
/// apartments sit around 2-3 W/m²·K.
///
/// Source: ASHRAE Handbook - Fundamentals, Chapter 27 (typical assemblies)
pub const ROOM_HEAT_TRANSFER_COEFF_W_PER_M2K: f32 = 2.5;

/// Envelope surface area exchanging heat with outdoors (m²).
pub const ROOM_SURFACE_AREA_M2: f32 = 60.0;

/// Conditioned air volume (m³).
pub const ROOM_AIR_VOLUME_M3: f32 = 75.0;

/// Latent load per percent of RH difference per cubic metre (W / %RH·m³).
///
/// Empirical lump that folds air change rate and latent heat of
/// vaporisation into one factor.
pub const LATENT_HEAT_FACTOR: f32 = 0.5;

/// Fractional change of latent load per °C of average air temperature
/// away from the reference temperature.
pub const LATENT_HEAT_TEMP_FACTOR: f32 = 0.02;

// ===== COEFFICIENT OF PERFORMANCE =====

/// Temperature the AC is set to hold (°C).
///
/// Used as the cold side of the Carnot COP and as the thermostat target.
pub const TARGET_INDOOR_TEMP_C: f32 = 24.0;

/// Fraction of Carnot COP a real vapour-compression unit achieves.
///
/// Typical inverter split systems reach 40-50% of the Carnot limit.
pub const AC_CARNOT_EFFICIENCY: f32 = 0.45;

/// COP degradation per °C of indoor/outdoor difference.
pub const COP_DEGRADATION_PER_C: f32 = 0.02;

/// Floor on the COP degradation multiplier.
pub const MIN_COP_DEGRADATION: f32 = 0.5;

/// Lower bound on the reported COP.
pub const MIN_COP: f32 = 1.5;

/// Upper bound on the reported COP.
pub const MAX_COP: f32 = 6.0;

/// Smallest temperature lift used in the Carnot denominator (K).
///
/// When outdoor air is at or below target the Carnot COP diverges; clamping
/// the lift keeps the result finite before the [MIN_COP, MAX_COP] clamp.
pub const MIN_TEMPERATURE_LIFT_K: f32 = 1.0;

// ===== EFFICIENCY PENALTIES =====

/// Indoor/outdoor difference above which efficiency starts to drop (°C).
pub const OPTIMAL_TEMP_DIFFERENCE_C: f32 = 8.0;

/// Power penalty per °C above the optimal difference.
pub const TEMP_EFFICIENCY_PENALTY_PER_C: f32 = 0.02;

/// Outdoor humidity above which efficiency starts to drop (%RH).
pub const OPTIMAL_HUMIDITY_PCT: f32 = 60.0;

/// Power penalty per %RH above the optimal humidity.
pub const HUMIDITY_EFFICIENCY_PENALTY_PER_PCT: f32 = 0.005;

/// Unit-specific multiplier on the modelled power (ducting, fan, controls).
pub const AC_UNIT_EFFICIENCY_FACTOR: f32 = 1.1;

// ===== ELECTRICAL =====

/// Maximum electrical draw of the unit (W).
pub const AC_MAX_POWER_WATTS: f32 = 3500.0;

/// Indoor fan draw while the compressor is cycled off (W).
pub const AC_FAN_ONLY_POWER_WATTS: f32 = 75.0;

/// Inrush multiplier applied while the compressor spins up.
pub const AC_STARTUP_POWER_MULTIPLIER: f32 = 1.6;

/// Electricity tariff (currency units per kWh).
///
/// Source: SP Group residential tariff, Singapore (2024 Q4, rounded)
pub const ELECTRICITY_RATE_PER_KWH: f32 = 0.30;

// ===== STATE MACHINE =====

/// Thermostat deadband around the target (°C).
pub const AC_TEMP_DEADBAND_C: f32 = 0.5;

/// Extra drift beyond the deadband before the compressor restarts (°C).
pub const AC_RESTART_TOLERANCE_C: f32 = 1.0;

/// Heat load above which an OFF unit is expected to start (W).
pub const AUTO_ON_HEAT_LOAD_WATTS: f32 = 600.0;

/// Heat load below which an IDLE unit is expected to shut down (W).
pub const AUTO_OFF_HEAT_LOAD_WATTS: f32 = 300.0;
