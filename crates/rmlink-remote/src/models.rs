//! RM-family model definitions.
//!
//! Each supported remote is described by a [`RemoteModel`] struct that
//! captures its device-type code, protocol generation, and capabilities.
//! These are compile-time constants used by the codec to pick the right
//! framing rules and to reject operations the hardware cannot perform.
//!
//! | Model     | Device type | Generation | RF  | Sensors       |
//! |-----------|-------------|------------|-----|---------------|
//! | RM2 pro   | `0x2712`    | 1          | yes | temperature   |
//! | RM mini 3 | `0x5F36`    | 1          | no  | none          |
//! | RM4 mini  | `0x51DA`    | 2          | no  | temp+humidity |
//! | RM4 pro   | `0x6026`    | 2          | yes | temp+humidity |

use rmlink_core::types::DeviceInfo;

use crate::frame::Generation;

/// What a given remote model's hardware can do.
///
/// The command set is uniform across the family, but the cheaper models
/// omit the RF front-end and/or the sensor package. The codec checks
/// these flags before issuing a command the firmware cannot answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteCapabilities {
    /// Has an RF front-end (frequency sweep / RF capture commands).
    pub has_rf: bool,
    /// Has a thermometer (sensor query commands).
    pub has_sensors: bool,
    /// Has a hygrometer (humidity field in sensor results).
    pub has_humidity: bool,
}

impl RemoteCapabilities {
    /// Baseline capabilities for a generation when no model is known.
    ///
    /// Both generations default to the fully equipped ("pro") variant;
    /// humidity hardware only exists on second-generation devices.
    pub fn for_generation(generation: Generation) -> Self {
        RemoteCapabilities {
            has_rf: true,
            has_sensors: true,
            has_humidity: generation == Generation::Gen2,
        }
    }
}

/// Static model definition for an RM-family remote.
#[derive(Debug, Clone)]
pub struct RemoteModel {
    /// Human-readable model name (e.g. "RM4 pro").
    pub name: &'static str,
    /// Device-type code announced by the device during discovery.
    pub device_type: u16,
    /// Protocol generation, selecting framing and sensor decoding.
    pub generation: Generation,
    /// Hardware capability flags.
    pub capabilities: RemoteCapabilities,
}

impl RemoteModel {
    /// Identifying information for this model.
    pub fn info(&self) -> DeviceInfo {
        DeviceInfo {
            model_name: self.name.to_string(),
            device_type: self.device_type,
        }
    }
}

/// RM2 pro: first generation with RF front-end and thermometer.
pub fn rm2_pro() -> RemoteModel {
    RemoteModel {
        name: "RM2 pro",
        device_type: 0x2712,
        generation: Generation::Gen1,
        capabilities: RemoteCapabilities {
            has_rf: true,
            has_sensors: true,
            has_humidity: false,
        },
    }
}

/// RM mini 3: first generation, IR only, no sensors.
pub fn rm_mini_3() -> RemoteModel {
    RemoteModel {
        name: "RM mini 3",
        device_type: 0x5F36,
        generation: Generation::Gen1,
        capabilities: RemoteCapabilities {
            has_rf: false,
            has_sensors: false,
            has_humidity: false,
        },
    }
}

/// RM4 mini: second generation, IR only, temperature and humidity sensors.
pub fn rm4_mini() -> RemoteModel {
    RemoteModel {
        name: "RM4 mini",
        device_type: 0x51DA,
        generation: Generation::Gen2,
        capabilities: RemoteCapabilities {
            has_rf: false,
            has_sensors: true,
            has_humidity: true,
        },
    }
}

/// RM4 pro: second generation, fully equipped.
pub fn rm4_pro() -> RemoteModel {
    RemoteModel {
        name: "RM4 pro",
        device_type: 0x6026,
        generation: Generation::Gen2,
        capabilities: RemoteCapabilities {
            has_rf: true,
            has_sensors: true,
            has_humidity: true,
        },
    }
}

/// All model definitions in this crate.
pub fn all_models() -> Vec<RemoteModel> {
    vec![rm2_pro(), rm_mini_3(), rm4_mini(), rm4_pro()]
}
