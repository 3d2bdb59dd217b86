//! rmlink-core: Core traits, types, and error definitions for rmlink.
//!
//! This crate defines the device-agnostic abstractions the protocol
//! codecs are built on. Applications depend on these types without
//! pulling in any specific device driver.
//!
//! # Key types
//!
//! - [`Transport`] -- one-round-trip packet exchange with a device
//! - [`CryptoProvider`] -- response-body decryption primitive
//! - [`SensorReading`] / [`DeviceInfo`] -- typed results
//! - [`Error`] / [`Result`] -- error handling

pub mod crypto;
pub mod error;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use rmlink_core::*`.
pub use crypto::CryptoProvider;
pub use error::{Error, Result};
pub use transport::Transport;
pub use types::{DeviceInfo, SensorReading};
