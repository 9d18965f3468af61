//! Alert identities and their per-type records

use core::fmt;

use crate::constants::buffers::ALERT_COUNT;
use crate::time::{elapsed_ms, Timestamp};

/// The ten conditions the monitor watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlertType {
    /// Indoor temperature above the upper bound
    TempHigh = 0,
    /// Indoor temperature below the lower bound
    TempLow = 1,
    /// Indoor and outdoor temperatures too far apart
    TempDifferenceHigh = 2,
    /// Indoor humidity above the upper bound
    HumidityHigh = 3,
    /// Indoor humidity below the lower bound
    HumidityLow = 4,
    /// Indoor and outdoor humidity too far apart
    HumidityDifferenceHigh = 5,
    /// CO concentration above the limit
    CoHigh = 6,
    /// Ozone comparator tripped
    OzoneDetected = 7,
    /// Estimated AC draw above the limit
    PowerHigh = 8,
    /// Projected daily cost above the limit
    DailyCostHigh = 9,
}

/// Grouping used by the status indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertCategory {
    /// Indoor temperature and humidity bounds
    IndoorComfort,
    /// Indoor/outdoor differences
    OutdoorDelta,
    /// Power draw and projected cost
    Energy,
    /// CO and ozone
    AirQuality,
}

impl AlertType {
    /// Every alert type, in table order
    pub const ALL: [AlertType; ALERT_COUNT] = [
        AlertType::TempHigh,
        AlertType::TempLow,
        AlertType::TempDifferenceHigh,
        AlertType::HumidityHigh,
        AlertType::HumidityLow,
        AlertType::HumidityDifferenceHigh,
        AlertType::CoHigh,
        AlertType::OzoneDetected,
        AlertType::PowerHigh,
        AlertType::DailyCostHigh,
    ];

    /// Position in [`AlertType::ALL`] and in the record table
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label shown on the display
    pub const fn message(self) -> &'static str {
        match self {
            AlertType::TempHigh => "High Temp",
            AlertType::TempLow => "Low Temp",
            AlertType::TempDifferenceHigh => "High Temp Diff",
            AlertType::HumidityHigh => "High Humidity",
            AlertType::HumidityLow => "Low Humidity",
            AlertType::HumidityDifferenceHigh => "High Humidity Diff",
            AlertType::CoHigh => "High CO",
            AlertType::OzoneDetected => "Ozone Detected",
            AlertType::PowerHigh => "High Power",
            AlertType::DailyCostHigh => "High Cost",
        }
    }

    /// Indicator group
    pub const fn category(self) -> AlertCategory {
        match self {
            AlertType::TempHigh
            | AlertType::TempLow
            | AlertType::HumidityHigh
            | AlertType::HumidityLow => AlertCategory::IndoorComfort,
            AlertType::TempDifferenceHigh | AlertType::HumidityDifferenceHigh => {
                AlertCategory::OutdoorDelta
            }
            AlertType::CoHigh | AlertType::OzoneDetected => AlertCategory::AirQuality,
            AlertType::PowerHigh | AlertType::DailyCostHigh => AlertCategory::Energy,
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.message())
    }
}

/// State of one alert type
///
/// `first_triggered` is only meaningful while `active`; it is zeroed on
/// clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertRecord {
    /// Which condition
    pub alert_type: AlertType,
    /// Condition currently holds
    pub active: bool,
    /// When the condition last went false to true; 0 while inactive
    pub first_triggered: Timestamp,
}

impl AlertRecord {
    /// Inactive record
    pub const fn new(alert_type: AlertType) -> Self {
        Self {
            alert_type,
            active: false,
            first_triggered: 0,
        }
    }

    /// Time since the condition went true, `None` while inactive
    pub fn active_for(&self, now: Timestamp) -> Option<u32> {
        self.active.then(|| elapsed_ms(self.first_triggered, now))
    }
}

/// Direction of an alert state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Condition went false to true
    Raised,
    /// Condition went true to false
    Cleared,
}

/// Fixed table of records, indexed by `AlertType`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertTable {
    records: [AlertRecord; ALERT_COUNT],
}

impl Default for AlertTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertTable {
    /// All ten records, inactive
    pub fn new() -> Self {
        Self {
            records: AlertType::ALL.map(AlertRecord::new),
        }
    }

    /// Apply the current value of a condition; only edges change the record
    pub fn update(&mut self, alert_type: AlertType, condition: bool, now: Timestamp) -> Option<Edge> {
        let record = &mut self.records[alert_type.index()];
        match (record.active, condition) {
            (false, true) => {
                record.active = true;
                record.first_triggered = now;
                Some(Edge::Raised)
            }
            (true, false) => {
                record.active = false;
                record.first_triggered = 0;
                Some(Edge::Cleared)
            }
            _ => None,
        }
    }

    /// Record for `alert_type`
    pub fn get(&self, alert_type: AlertType) -> &AlertRecord {
        &self.records[alert_type.index()]
    }

    /// Whether `alert_type` is active
    pub fn is_active(&self, alert_type: AlertType) -> bool {
        self.get(alert_type).active
    }

    /// All records in `AlertType` order
    pub fn records(&self) -> &[AlertRecord] {
        &self.records
    }

    /// Active records in `AlertType` order
    pub fn active(&self) -> impl Iterator<Item = &AlertRecord> {
        self.records.iter().filter(|r| r.active)
    }

    /// Number of active records
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Any record active
    pub fn any_active(&self) -> bool {
        self.records.iter().any(|r| r.active)
    }

    /// True when no alert of `category` is active
    pub fn category_normal(&self, category: AlertCategory) -> bool {
        !self.active().any(|r| r.alert_type.category() == category)
    }
}
