//! Mock transport for deterministic testing of protocol codecs.
//!
//! [`MockTransport`] implements the [`Transport`] trait with pre-loaded
//! request/response pairs. This lets you test packet framing and
//! response unframing without real hardware.
//!
//! # Example
//!
//! ```
//! use rmlink_test_harness::MockTransport;
//!
//! let mock = MockTransport::new();
//! // Pre-load: when the codec sends this body, return this raw response.
//! mock.expect(0x6A, &[0x03, 0x00, 0x00, 0x00], &[0u8; 0x38]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use rmlink_core::error::{Error, Result};
use rmlink_core::transport::Transport;

/// A pre-loaded request/response pair for the mock transport.
#[derive(Debug, Clone)]
struct Expectation {
    /// The request type tag we expect, or `None` to match any request.
    request_type: Option<u8>,
    /// The exact body bytes we expect, or `None` to match any body.
    body: Option<Vec<u8>>,
    /// The raw response to return for the matching request.
    response: Vec<u8>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Ordered queue of expected request/response pairs.
    expectations: VecDeque<Expectation>,
    /// Log of all exchanges made through this transport.
    sent_log: Vec<(u8, Vec<u8>)>,
    /// Whether the transport is "connected".
    connected: bool,
}

/// A mock [`Transport`] for testing codecs without hardware.
///
/// Expectations are consumed in order: each `exchange()` call pops the
/// next expectation, verifies the request against it, and returns the
/// pre-loaded raw response. If no expectation remains or the request
/// does not match, an error is returned.
///
/// State lives behind a `Mutex` because [`Transport`] takes `&self`.
#[derive(Debug)]
pub struct MockTransport {
    inner: Mutex<Inner>,
}

impl MockTransport {
    /// Create a new mock transport in the connected state.
    pub fn new() -> Self {
        MockTransport {
            inner: Mutex::new(Inner {
                connected: true,
                ..Inner::default()
            }),
        }
    }

    /// Add an expected request/response pair.
    ///
    /// The next `exchange()` call must use exactly this request type and
    /// body; it will return `response`.
    pub fn expect(&self, request_type: u8, body: &[u8], response: &[u8]) {
        self.inner.lock().unwrap().expectations.push_back(Expectation {
            request_type: Some(request_type),
            body: Some(body.to_vec()),
            response: response.to_vec(),
        });
    }

    /// Add a response returned for the next `exchange()` regardless of
    /// what is sent.
    ///
    /// Useful for tests that only care about response handling.
    pub fn respond(&self, response: &[u8]) {
        self.inner.lock().unwrap().expectations.push_back(Expectation {
            request_type: None,
            body: None,
            response: response.to_vec(),
        });
    }

    /// Return a copy of all exchanges made through this transport.
    ///
    /// Each element is the `(request_type, body)` pair from one
    /// `exchange()` call.
    pub fn sent_data(&self) -> Vec<(u8, Vec<u8>)> {
        self.inner.lock().unwrap().sent_log.clone()
    }

    /// Return the number of expectations that have not yet been consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.inner.lock().unwrap().expectations.len()
    }

    /// Set the connected state of the mock transport.
    ///
    /// When set to `false`, subsequent `exchange()` calls will return
    /// [`Error::NotConnected`].
    pub fn set_connected(&self, connected: bool) {
        self.inner.lock().unwrap().connected = connected;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn exchange(&self, request_type: u8, body: &[u8]) -> Result<Vec<u8>> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.connected {
            return Err(Error::NotConnected);
        }

        inner.sent_log.push((request_type, body.to_vec()));

        let expectation = inner.expectations.pop_front().ok_or_else(|| {
            Error::Transport("no more expectations in mock transport".into())
        })?;

        if let Some(expected_type) = expectation.request_type {
            if request_type != expected_type {
                return Err(Error::Transport(format!(
                    "unexpected request type: expected {expected_type:#04x}, got {request_type:#04x}"
                )));
            }
        }
        if let Some(ref expected_body) = expectation.body {
            if body != expected_body.as_slice() {
                return Err(Error::Transport(format!(
                    "unexpected body: expected {expected_body:02X?}, got {body:02X?}"
                )));
            }
        }

        Ok(expectation.response)
    }

    async fn close(&self) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.connected = false;
        inner.expectations.clear();
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.inner.lock().unwrap().connected
    }
}
