//! Read-only input interfaces
//!
//! These are the narrow views the core takes of its collaborators. Each one
//! is a handful of getters; none of them can be used to mutate the source.
//!
//! ## Validity
//!
//! Indoor readings carry an explicit `is_data_valid()` flag. Outdoor readings
//! carry no flag: an unavailable value is reported as `f32::NAN`, and the
//! consumer decides which computations it gates on it.
//!
//! Gas sensors report a warm-up flag separately. Until it is set their
//! values are meaningless and the alert engine treats them as unknown.

/// Indoor sensor block (temperature/humidity probe plus gas sensors)
pub trait IndoorSensors {
    /// True once the temperature/humidity probe has produced a valid reading
    fn is_data_valid(&self) -> bool;

    /// Indoor temperature in degrees Celsius
    fn indoor_temp(&self) -> f32;

    /// Indoor relative humidity in percent
    fn indoor_humidity(&self) -> f32;

    /// True once the CO sensor heater has finished warming up
    fn is_co_warmed_up(&self) -> bool;

    /// CO concentration in ppm
    fn co_ppm(&self) -> f32;

    /// True once the ozone sensor heater has finished warming up
    fn is_ozone_warmed_up(&self) -> bool;

    /// Ozone threshold comparator tripped (already corrected for active-low)
    fn is_ozone_detected(&self) -> bool;
}

/// Outdoor weather observation
pub trait OutdoorWeather {
    /// Outdoor temperature in degrees Celsius, NaN if unavailable
    fn outdoor_temp(&self) -> f32;

    /// Outdoor relative humidity in percent, NaN if unavailable
    fn outdoor_humidity(&self) -> f32;
}

/// Energy figures the alert engine compares against its thresholds
pub trait EnergyReadings {
    /// Instantaneous estimated power draw in watts
    fn power_watts(&self) -> f32;

    /// Projected electricity cost for the current day
    fn daily_cost_estimate(&self) -> f32;
}
