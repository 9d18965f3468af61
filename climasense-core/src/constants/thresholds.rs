//! Alert Thresholds
//!
//! Trigger levels for the ten alert types. A condition is "high" when the
//! reading is strictly greater than the threshold and "low" when strictly
//! less.

// ===== INDOOR COMFORT =====

/// Indoor temperature above which the room is too warm (°C).
///
/// Source: ASHRAE Standard 55-2020 upper operative temperature (rounded)
pub const TEMP_HIGH_THRESHOLD_C: f32 = 28.0;

/// Indoor temperature below which the room is too cold (°C).
pub const TEMP_LOW_THRESHOLD_C: f32 = 18.0;

/// Indoor relative humidity above which mould risk rises (%).
pub const HUMIDITY_HIGH_THRESHOLD_PCT: f32 = 70.0;

/// Indoor relative humidity below which air is uncomfortably dry (%).
pub const HUMIDITY_LOW_THRESHOLD_PCT: f32 = 30.0;

// ===== INDOOR / OUTDOOR DELTA =====

/// Indoor/outdoor temperature difference considered excessive (°C).
///
/// Large differences make the unit work hard and cause thermal shock on
/// entering or leaving the room.
pub const TEMP_DIFFERENCE_HIGH_THRESHOLD_C: f32 = 10.0;

/// Indoor/outdoor humidity difference considered excessive (%RH).
pub const HUMIDITY_DIFFERENCE_HIGH_THRESHOLD_PCT: f32 = 30.0;

// ===== AIR QUALITY =====

/// CO concentration above which the alert trips (ppm).
///
/// Source: US EPA NAAQS 1-hour standard (35 ppm)
pub const CO_HIGH_THRESHOLD_PPM: f32 = 35.0;

/// Raise an alert whenever the ozone comparator trips.
pub const OZONE_ALERT_ON_DETECTION: bool = true;

// ===== ENERGY =====

/// Instantaneous power above which the alert trips (W).
pub const POWER_HIGH_THRESHOLD_WATTS: f32 = 2500.0;

/// Projected daily cost above which the alert trips (currency units).
pub const DAILY_COST_HIGH_THRESHOLD: f32 = 8.0;
