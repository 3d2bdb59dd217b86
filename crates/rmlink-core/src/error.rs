//! Error types for rmlink.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Transport-layer, crypto-layer, and
//! protocol-layer errors are all captured here.

/// The error type for all rmlink operations.
///
/// Variants cover the full range of failure modes encountered when
/// talking to a remote: physical transport failures, firmware-reported
/// error codes, decryption failures, and malformed response payloads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level error (socket I/O, framing at the wire layer).
    #[error("transport error: {0}")]
    Transport(String),

    /// The device reported a nonzero status code in its response.
    ///
    /// The numeric meaning of the code is firmware-specific; this layer
    /// only distinguishes zero (success) from nonzero and carries the
    /// code through for higher-level lookup.
    #[error("device returned error code {code:#06x}")]
    Device {
        /// The raw little-endian status code from the response header.
        code: u16,
    },

    /// Decryption of the response body failed (e.g. ciphertext length is
    /// not a whole number of cipher blocks).
    #[error("crypto error: {0}")]
    Crypto(String),

    /// The decrypted response was too short for the requested
    /// interpretation (missing header bytes, empty result where a flag
    /// or sensor value was expected).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The requested operation is not supported by this device model.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// An invalid parameter was passed to a command.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No connection to the device has been established.
    #[error("not connected")]
    NotConnected,

    /// Timed out waiting for a response from the device.
    #[error("timeout waiting for response")]
    Timeout,

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
