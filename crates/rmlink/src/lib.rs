//! # rmlink -- Codec library for RM-family universal remotes
//!
//! `rmlink` is an asynchronous Rust library for driving IR/RF universal
//! remotes that speak the RM framed command protocol. It translates
//! logical operations (transmit a learned code, enter learning mode,
//! query sensors, sweep carrier frequency) into exact packet bytes and
//! decodes the encrypted device replies back into typed results.
//!
//! The library deliberately stops at the codec boundary: the network
//! transport (sockets, retries, timeouts) and the session cipher are
//! injected by the caller through the [`Transport`] and
//! [`CryptoProvider`] traits. This keeps the protocol logic free of I/O
//! policy and makes it fully testable with the mocks in
//! `rmlink-test-harness`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use rmlink::remote::{models::rm4_pro, RemoteCodec};
//!
//! # async fn example(
//! #     transport: Arc<dyn rmlink::Transport>,
//! #     crypto: Arc<dyn rmlink::CryptoProvider>,
//! # ) -> rmlink::Result<()> {
//! let codec = RemoteCodec::new(&rm4_pro(), transport, crypto);
//!
//! codec.enter_learning().await?;
//! // ... point the original remote at the device, then:
//! let code = codec.check_data().await?;
//! codec.send_data(&code).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! | Crate                 | Purpose                                    |
//! |-----------------------|--------------------------------------------|
//! | `rmlink-core`         | Traits, types, errors                      |
//! | `rmlink-remote`       | RM command codec (both device generations) |
//! | `rmlink-test-harness` | Mock transport/crypto for testing          |
//! | **`rmlink`**          | This facade crate -- re-exports everything |

pub use rmlink_core::*;

/// RM remote protocol codec.
///
/// Provides [`RemoteCodec`](remote::RemoteCodec) and the model table for
/// both device generations.
#[cfg(feature = "remote")]
pub mod remote {
    pub use rmlink_remote::*;
}

/// Returns the model definitions for all supported remotes.
///
/// The entry point for applications that need to map a discovered
/// device-type code to a protocol generation and capability set.
#[cfg(feature = "remote")]
pub fn supported_models() -> Vec<remote::RemoteModel> {
    remote::models::all_models()
}
