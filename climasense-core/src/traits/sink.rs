//! Presentation output
//!
//! The display (or any other front end) receives one pre-formatted value per
//! logical field. The core only ever writes to it; rendering, paging and
//! transport are the sink's business.

/// Write-only receiver for display fields
pub trait PresentationSink {
    /// Energy summary line, e.g. `1180W  •  9.4kWh/day  •  $2.82/day  •  41% duty`
    fn update_energy_line(&mut self, line: &str);

    /// AC running state label (`OFF`, `STARTING`, `RUNNING`, `IDLE`)
    fn update_ac_status(&mut self, status: &str);

    /// Active alerts summary (`No alerts` when none)
    fn update_alerts(&mut self, summary: &str);

    /// Indoor comfort indicator (temperature and humidity within bounds)
    fn update_indoor_indicator(&mut self, normal: bool);

    /// Energy indicator (power and projected cost within bounds)
    fn update_energy_indicator(&mut self, normal: bool);

    /// Air quality indicator (no CO or ozone alert)
    fn update_air_quality_indicator(&mut self, normal: bool);
}
