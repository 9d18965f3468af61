//! Reading value types and the model input gate
//!
//! [`IndoorReading`] and [`OutdoorReading`] are plain snapshots implementing
//! the input traits. Firmware that polls its drivers elsewhere can copy the
//! latest values into them each loop pass; tests use them directly.
//!
//! [`ModelInputs`] is the one place that decides whether a set of readings
//! is good enough to run the thermodynamic model on.

use crate::errors::InputError;
use crate::traits::{IndoorSensors, OutdoorWeather};

/// Snapshot of the indoor sensor block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndoorReading {
    /// Probe produced a usable temperature/humidity pair
    pub data_valid: bool,
    /// Indoor temperature (°C)
    pub temperature_c: f32,
    /// Indoor relative humidity (%)
    pub humidity_pct: f32,
    /// CO sensor past its warm-up delay
    pub co_warmed_up: bool,
    /// CO concentration (ppm)
    pub co_ppm: f32,
    /// Ozone sensor past its warm-up delay
    pub ozone_warmed_up: bool,
    /// Ozone comparator output
    pub ozone_detected: bool,
}

impl IndoorReading {
    /// Valid temperature/humidity reading with both gas sensors warmed up
    /// and reporting clean air
    pub fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            data_valid: true,
            temperature_c,
            humidity_pct,
            co_warmed_up: true,
            co_ppm: 0.0,
            ozone_warmed_up: true,
            ozone_detected: false,
        }
    }

    /// Reading from a sensor that has not produced data yet
    pub fn invalid() -> Self {
        Self {
            data_valid: false,
            temperature_c: f32::NAN,
            humidity_pct: f32::NAN,
            co_warmed_up: false,
            co_ppm: 0.0,
            ozone_warmed_up: false,
            ozone_detected: false,
        }
    }

    /// Attach a CO reading
    pub fn with_co(mut self, co_ppm: f32, warmed_up: bool) -> Self {
        self.co_ppm = co_ppm;
        self.co_warmed_up = warmed_up;
        self
    }

    /// Attach an ozone reading
    pub fn with_ozone(mut self, detected: bool, warmed_up: bool) -> Self {
        self.ozone_detected = detected;
        self.ozone_warmed_up = warmed_up;
        self
    }
}

impl IndoorSensors for IndoorReading {
    fn is_data_valid(&self) -> bool {
        self.data_valid
    }

    fn indoor_temp(&self) -> f32 {
        self.temperature_c
    }

    fn indoor_humidity(&self) -> f32 {
        self.humidity_pct
    }

    fn is_co_warmed_up(&self) -> bool {
        self.co_warmed_up
    }

    fn co_ppm(&self) -> f32 {
        self.co_ppm
    }

    fn is_ozone_warmed_up(&self) -> bool {
        self.ozone_warmed_up
    }

    fn is_ozone_detected(&self) -> bool {
        self.ozone_detected
    }
}

/// Snapshot of the outdoor weather observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutdoorReading {
    /// Outdoor temperature (°C); NaN when unavailable
    pub temperature_c: f32,
    /// Outdoor relative humidity (%); NaN when unavailable
    pub humidity_pct: f32,
}

impl OutdoorReading {
    /// Outdoor reading from weather data
    pub fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self { temperature_c, humidity_pct }
    }

    /// No observation available yet
    pub fn unavailable() -> Self {
        Self {
            temperature_c: f32::NAN,
            humidity_pct: f32::NAN,
        }
    }
}

impl OutdoorWeather for OutdoorReading {
    fn outdoor_temp(&self) -> f32 {
        self.temperature_c
    }

    fn outdoor_humidity(&self) -> f32 {
        self.humidity_pct
    }
}

/// Validated inputs for one thermodynamic model step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInputs {
    /// Indoor temperature (°C)
    pub indoor_temp_c: f32,
    /// Indoor relative humidity (%)
    pub indoor_humidity_pct: f32,
    /// Outdoor temperature (°C)
    pub outdoor_temp_c: f32,
    /// Outdoor relative humidity (%)
    pub outdoor_humidity_pct: f32,
}

impl ModelInputs {
    /// Gate the raw readings; every field of the result is a finite number
    pub fn read<S, W>(sensors: &S, weather: &W) -> Result<Self, InputError>
    where
        S: IndoorSensors + ?Sized,
        W: OutdoorWeather + ?Sized,
    {
        let indoor_temp_c = sensors.indoor_temp();
        let indoor_humidity_pct = sensors.indoor_humidity();
        if !sensors.is_data_valid() || !indoor_temp_c.is_finite() || !indoor_humidity_pct.is_finite() {
            return Err(InputError::SensorDataInvalid);
        }

        let outdoor_temp_c = weather.outdoor_temp();
        if !outdoor_temp_c.is_finite() {
            return Err(InputError::OutdoorTemperatureUnavailable);
        }

        let outdoor_humidity_pct = weather.outdoor_humidity();
        if !outdoor_humidity_pct.is_finite() {
            return Err(InputError::OutdoorHumidityUnavailable);
        }

        Ok(Self {
            indoor_temp_c,
            indoor_humidity_pct,
            outdoor_temp_c,
            outdoor_humidity_pct,
        })
    }

    /// Absolute indoor/outdoor temperature difference (°C)
    pub fn temp_difference(&self) -> f32 {
        libm::fabsf(self.outdoor_temp_c - self.indoor_temp_c)
    }

    /// Absolute indoor/outdoor humidity difference (%RH)
    pub fn humidity_difference(&self) -> f32 {
        libm::fabsf(self.outdoor_humidity_pct - self.indoor_humidity_pct)
    }
}

/// Indoor minus outdoor temperature, `None` when either side is unusable
pub fn temp_difference<S, W>(sensors: &S, weather: &W) -> Option<f32>
where
    S: IndoorSensors + ?Sized,
    W: OutdoorWeather + ?Sized,
{
    let outdoor = weather.outdoor_temp();
    if !sensors.is_data_valid() || !outdoor.is_finite() {
        return None;
    }
    Some(sensors.indoor_temp() - outdoor)
}

/// Indoor minus outdoor humidity, `None` when either side is unusable
pub fn humidity_difference<S, W>(sensors: &S, weather: &W) -> Option<f32>
where
    S: IndoorSensors + ?Sized,
    W: OutdoorWeather + ?Sized,
{
    let outdoor = weather.outdoor_humidity();
    if !sensors.is_data_valid() || !outdoor.is_finite() {
        return None;
    }
    Some(sensors.indoor_humidity() - outdoor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_inputs_pass_gate() {
        let inputs = ModelInputs::read(
            &IndoorReading::new(26.0, 55.0),
            &OutdoorReading::new(31.0, 75.0),
        )
        .unwrap();
        assert_eq!(inputs.temp_difference(), 5.0);
        assert_eq!(inputs.humidity_difference(), 20.0);
    }

    #[test]
    fn gate_reports_first_failure() {
        let outdoor = OutdoorReading::new(31.0, 75.0);
        assert_eq!(
            ModelInputs::read(&IndoorReading::invalid(), &outdoor),
            Err(InputError::SensorDataInvalid)
        );

        let indoor = IndoorReading::new(26.0, 55.0);
        assert_eq!(
            ModelInputs::read(&indoor, &OutdoorReading::unavailable()),
            Err(InputError::OutdoorTemperatureUnavailable)
        );
        assert_eq!(
            ModelInputs::read(&indoor, &OutdoorReading::new(31.0, f32::NAN)),
            Err(InputError::OutdoorHumidityUnavailable)
        );
    }

    #[test]
    fn valid_flag_with_nan_value_is_rejected() {
        let mut indoor = IndoorReading::new(26.0, 55.0);
        indoor.temperature_c = f32::NAN;
        assert!(ModelInputs::read(&indoor, &OutdoorReading::new(31.0, 75.0)).is_err());
    }

    #[test]
    fn signed_differences() {
        let indoor = IndoorReading::new(24.0, 50.0);
        let outdoor = OutdoorReading::new(30.0, 80.0);
        assert_eq!(temp_difference(&indoor, &outdoor), Some(-6.0));
        assert_eq!(humidity_difference(&indoor, &outdoor), Some(-30.0));
        assert_eq!(temp_difference(&indoor, &OutdoorReading::unavailable()), None);
        assert_eq!(humidity_difference(&IndoorReading::invalid(), &outdoor), None);
    }
}
