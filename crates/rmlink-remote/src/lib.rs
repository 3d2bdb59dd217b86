//! rmlink-remote: Protocol codec for RM-family universal remotes.
//!
//! This crate implements the framed command/response protocol spoken by
//! both generations of the RM remote family: packet framing, status
//! validation, result decryption and unframing, and sensor decoding.
//! The network transport and the session cipher are injected through the
//! [`Transport`](rmlink_core::Transport) and
//! [`CryptoProvider`](rmlink_core::CryptoProvider) traits from
//! `rmlink-core`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rmlink_remote::{models::rm4_pro, RemoteCodec};
//!
//! # async fn example(
//! #     transport: Arc<dyn rmlink_core::Transport>,
//! #     crypto: Arc<dyn rmlink_core::CryptoProvider>,
//! # ) -> rmlink_core::Result<()> {
//! let codec = RemoteCodec::new(&rm4_pro(), transport, crypto);
//! let reading = codec.check_sensors().await?;
//! println!("{reading}");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod commands;
pub mod frame;
pub mod models;

pub use codec::RemoteCodec;
pub use frame::Generation;
pub use models::{RemoteCapabilities, RemoteModel};
