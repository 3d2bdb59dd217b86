//! Transport trait for device communication.
//!
//! The [`Transport`] trait abstracts over the link that carries framed
//! packets to a device and returns its raw replies. Real implementations
//! own the socket, session keys for outbound encryption, packet counters,
//! and retransmission policy; the codec layer only sees one round-trip at
//! a time.
//!
//! Protocol codecs (e.g. the remote codec in `rmlink-remote`) operate on
//! a `Transport` rather than directly on a
//! socket, enabling both real hardware control and deterministic unit
//! testing with `MockTransport` from the `rmlink-test-harness` crate.

use async_trait::async_trait;

use crate::error::Result;

/// Asynchronous request/response transport to a device.
///
/// One call to [`exchange`](Transport::exchange) is one full round-trip:
/// the implementation frames and sends `body` under the given request
/// type, waits for the device's reply, and returns the raw reply bytes
/// unprocessed. Timeout and retransmission are entirely the transport's
/// responsibility; callers see a timeout only as an error surfaced from
/// this method.
///
/// Methods take `&self` so a single device handle can serve concurrent
/// callers; implementations serialize access internally as needed.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the device's raw response.
    ///
    /// `request_type` is the transport-level packet type tag;
    /// `body` is the already-serialized command packet body.
    async fn exchange(&self, request_type: u8, body: &[u8]) -> Result<Vec<u8>>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent `exchange()` calls should
    /// return [`Error::NotConnected`](crate::error::Error::NotConnected).
    async fn close(&self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}
