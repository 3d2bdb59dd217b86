//! Shared types used across rmlink crates.

use std::fmt;

/// A decoded sensor readout from a remote.
///
/// All RM-family remotes carry a thermometer; only second-generation
/// models with a hygrometer report humidity, so that field is optional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent, when the model has a hygrometer.
    pub humidity: Option<f64>,
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.humidity {
            Some(h) => write!(f, "{:.1} degC / {:.1}%", self.temperature, h),
            None => write!(f, "{:.1} degC", self.temperature),
        }
    }
}

/// Identifying information about the device a codec is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Human-readable model name (e.g. "RM4 pro").
    pub model_name: String,
    /// The device-type code the device announces during discovery.
    pub device_type: u16,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#06x})", self.model_name, self.device_type)
    }
}
