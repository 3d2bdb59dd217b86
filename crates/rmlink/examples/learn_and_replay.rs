//! IR learn-and-replay walkthrough.
//!
//! Demonstrates the full codec pipeline -- enter learning mode, read the
//! captured code back, replay it -- wired to the mock transport and
//! crypto provider from `rmlink-test-harness`. Swap in your own
//! [`Transport`](rmlink::Transport) / [`CryptoProvider`](rmlink::CryptoProvider)
//! implementations to drive real hardware.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p rmlink --example learn_and_replay
//! ```

use std::sync::Arc;

use rmlink::remote::{models::rm4_pro, RemoteCodec};
use rmlink_test_harness::{MockCrypto, MockTransport};

/// A well-formed raw response: zero status, `tail` as the result region.
fn raw_response(tail: &[u8]) -> Vec<u8> {
    let mut raw = vec![0u8; 0x38];
    raw.extend_from_slice(tail);
    raw
}

#[tokio::main]
async fn main() -> rmlink::Result<()> {
    let transport = Arc::new(MockTransport::new());
    let crypto = Arc::new(MockCrypto::new());

    // Script the three round-trips (identity "decryption": the bytes
    // after offset 0x38 are the plaintext, starting with the 6-byte
    // gen-2 response header).
    let captured_code = [0x26, 0x00, 0x0C, 0x5E, 0x5E, 0x00, 0x0D, 0x05];
    transport.respond(&raw_response(&[0; 6])); // enter_learning
    let mut check_data_tail = vec![0; 6];
    check_data_tail.extend_from_slice(&captured_code);
    transport.respond(&raw_response(&check_data_tail)); // check_data
    transport.respond(&raw_response(&[0; 6])); // send_data

    let codec = RemoteCodec::new(&rm4_pro(), transport.clone(), crypto);
    println!("Target: {}", codec.info());

    println!("Entering IR learning mode...");
    codec.enter_learning().await?;

    let code = codec.check_data().await?;
    println!("Captured {} byte code: {code:02X?}", code.len());

    println!("Replaying...");
    codec.send_data(&code).await?;

    for (request_type, body) in transport.sent_data() {
        println!("wire: type {request_type:#04x}, body {body:02X?}");
    }

    Ok(())
}
