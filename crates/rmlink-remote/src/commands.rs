//! Command opcodes and response-layout constants.
//!
//! Every logical operation on a remote is identified by a 32-bit command
//! opcode carried inside a transport packet of type [`REQUEST_TYPE_COMMAND`].
//! Opcodes are shared across device generations except for the sensor
//! query, which moved from `0x01` to `0x24` in the second generation.
//!
//! # Response layout
//!
//! ```text
//! offset 0x00..0x22   transport header (opaque to this layer)
//! offset 0x22..0x24   status code, u16 little-endian, 0 = success
//! offset 0x24..0x38   transport header, continued
//! offset 0x38..       result region, encrypted under the session key
//! ```

use rmlink_core::error::{Error, Result};

/// Transport-level packet type for command requests.
pub const REQUEST_TYPE_COMMAND: u8 = 0x6A;

/// Query the onboard sensors (first-generation opcode).
pub const CMD_CHECK_SENSORS: u32 = 0x01;

/// Transmit a previously captured IR/RF code.
pub const CMD_SEND_DATA: u32 = 0x02;

/// Enter IR learning mode.
pub const CMD_ENTER_LEARNING: u32 = 0x03;

/// Read back the last captured code.
pub const CMD_CHECK_DATA: u32 = 0x04;

/// Start an RF carrier frequency sweep.
pub const CMD_SWEEP_FREQUENCY: u32 = 0x19;

/// Ask whether the frequency sweep has locked onto a carrier.
pub const CMD_CHECK_FREQUENCY: u32 = 0x1A;

/// Capture an RF packet at the locked frequency.
pub const CMD_FIND_RF_PACKET: u32 = 0x1B;

/// Abort a running frequency sweep.
pub const CMD_CANCEL_SWEEP_FREQUENCY: u32 = 0x1E;

/// Query the onboard sensors (second-generation opcode).
pub const CMD_CHECK_SENSORS_V2: u32 = 0x24;

/// Byte offset of the status code field in a raw response.
pub const STATUS_OFFSET: usize = 0x22;

/// Byte offset of the encrypted result region in a raw response.
pub const RESULT_OFFSET: usize = 0x38;

/// Interpret a two-byte status field extracted from a raw response.
///
/// The field is little-endian unsigned. Zero means success; any other
/// value is a firmware-reported error surfaced as
/// [`Error::Device`] with the code carried through verbatim.
pub fn check_status(field: [u8; 2]) -> Result<()> {
    let code = u16::from_le_bytes(field);
    if code == 0 {
        Ok(())
    } else {
        Err(Error::Device { code })
    }
}

/// Validate the status field of a full raw response.
///
/// Fails with [`Error::MalformedResponse`] if the response is too short
/// to contain a status field at [`STATUS_OFFSET`], or with
/// [`Error::Device`] if the field is nonzero.
pub fn check_response_status(raw: &[u8]) -> Result<()> {
    if raw.len() < STATUS_OFFSET + 2 {
        return Err(Error::MalformedResponse(format!(
            "response too short for status field: {} bytes",
            raw.len()
        )));
    }
    check_status([raw[STATUS_OFFSET], raw[STATUS_OFFSET + 1]])
}
