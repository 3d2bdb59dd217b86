//! rmlink-test-harness: Test utilities and mock collaborators for rmlink.
//!
//! This crate provides [`MockTransport`] and [`MockCrypto`] for
//! deterministic unit testing of protocol codecs without real device
//! hardware or session keys.

pub mod mock_crypto;
pub mod mock_transport;

pub use mock_crypto::MockCrypto;
pub use mock_transport::MockTransport;
