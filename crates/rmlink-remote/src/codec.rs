//! RemoteCodec -- the command/response codec for RM-family remotes.
//!
//! This module ties the per-generation framing rules ([`frame`],
//! [`commands`]) to a [`Transport`] and a [`CryptoProvider`] to produce a
//! working device driver. Every operation is one synchronous round-trip:
//! build the packet body, exchange it, validate the status field, decrypt
//! the result region, strip the generation header.
//!
//! The codec holds no mutable state and imposes no timeout or retry of
//! its own; both are the transport's responsibility, and transport
//! failures surface to the caller unchanged.

use std::sync::Arc;

use tracing::debug;

use rmlink_core::crypto::CryptoProvider;
use rmlink_core::error::{Error, Result};
use rmlink_core::transport::Transport;
use rmlink_core::types::{DeviceInfo, SensorReading};

use crate::commands;
use crate::frame::Generation;
use crate::models::{RemoteCapabilities, RemoteModel};

/// A codec bound to one remote via an injected transport and crypto
/// provider.
///
/// Constructed from a [`RemoteModel`] (which fixes the generation and
/// capability flags) or directly from a [`Generation`] when the exact
/// model is unknown. The generation is immutable for the life of the
/// codec; concurrent calls against one instance are safe because all
/// state here is read-only.
pub struct RemoteCodec {
    generation: Generation,
    capabilities: RemoteCapabilities,
    info: DeviceInfo,
    transport: Arc<dyn Transport>,
    crypto: Arc<dyn CryptoProvider>,
}

impl RemoteCodec {
    /// Create a codec for a known device model.
    pub fn new(
        model: &RemoteModel,
        transport: Arc<dyn Transport>,
        crypto: Arc<dyn CryptoProvider>,
    ) -> Self {
        RemoteCodec {
            generation: model.generation,
            capabilities: model.capabilities,
            info: model.info(),
            transport,
            crypto,
        }
    }

    /// Create a codec for a device whose exact model is unknown.
    ///
    /// Capabilities default to the fully equipped variant of the given
    /// generation (see [`RemoteCapabilities::for_generation`]).
    pub fn with_generation(
        generation: Generation,
        transport: Arc<dyn Transport>,
        crypto: Arc<dyn CryptoProvider>,
    ) -> Self {
        RemoteCodec {
            generation,
            capabilities: RemoteCapabilities::for_generation(generation),
            info: DeviceInfo {
                model_name: format!("unknown {generation} remote"),
                device_type: 0,
            },
            transport,
            crypto,
        }
    }

    /// Identifying information about the bound device.
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// The protocol generation this codec frames for.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The capability flags this codec enforces.
    pub fn capabilities(&self) -> &RemoteCapabilities {
        &self.capabilities
    }

    /// Send a command and return the result payload.
    ///
    /// The pipeline is: build the packet body per generation, exchange it
    /// under request type [`commands::REQUEST_TYPE_COMMAND`], check the
    /// status field at offset `0x22` (nonzero fails with
    /// [`Error::Device`] before decryption is attempted), decrypt the
    /// region from offset `0x38`, and strip the generation header from
    /// the plaintext.
    pub async fn send_command(&self, command: u32, payload: &[u8]) -> Result<Vec<u8>> {
        let body = self.generation.build_body(command, payload)?;
        debug!(
            command = format_args!("{command:#04x}"),
            body_len = body.len(),
            generation = %self.generation,
            "sending command"
        );

        let raw = self
            .transport
            .exchange(commands::REQUEST_TYPE_COMMAND, &body)
            .await?;
        commands::check_response_status(&raw)?;

        if raw.len() < commands::RESULT_OFFSET {
            return Err(Error::MalformedResponse(format!(
                "response too short for result region: {} bytes",
                raw.len()
            )));
        }
        let plain = self.crypto.decrypt(&raw[commands::RESULT_OFFSET..])?;

        let header = self.generation.header_len();
        if plain.len() < header {
            return Err(Error::MalformedResponse(format!(
                "decrypted payload shorter than {header}-byte header: {} bytes",
                plain.len()
            )));
        }
        Ok(plain[header..].to_vec())
    }

    /// Read back the last captured IR/RF code.
    pub async fn check_data(&self) -> Result<Vec<u8>> {
        self.send_command(commands::CMD_CHECK_DATA, &[]).await
    }

    /// Transmit a captured code.
    pub async fn send_data(&self, code: &[u8]) -> Result<()> {
        self.send_command(commands::CMD_SEND_DATA, code).await?;
        Ok(())
    }

    /// Enter IR learning mode.
    pub async fn enter_learning(&self) -> Result<()> {
        self.send_command(commands::CMD_ENTER_LEARNING, &[]).await?;
        Ok(())
    }

    /// Start an RF carrier frequency sweep.
    pub async fn sweep_frequency(&self) -> Result<()> {
        self.require_rf("frequency sweep")?;
        self.send_command(commands::CMD_SWEEP_FREQUENCY, &[]).await?;
        Ok(())
    }

    /// Abort a running frequency sweep.
    pub async fn cancel_sweep_frequency(&self) -> Result<()> {
        self.require_rf("frequency sweep")?;
        self.send_command(commands::CMD_CANCEL_SWEEP_FREQUENCY, &[])
            .await?;
        Ok(())
    }

    /// Return whether the frequency sweep has locked onto a carrier.
    pub async fn check_frequency(&self) -> Result<bool> {
        self.require_rf("frequency sweep")?;
        let data = self.send_command(commands::CMD_CHECK_FREQUENCY, &[]).await?;
        flag(&data, "frequency check")
    }

    /// Capture an RF packet at the locked frequency.
    ///
    /// Returns `true` once the device has captured a packet.
    pub async fn find_rf_packet(&self) -> Result<bool> {
        self.require_rf("RF capture")?;
        let data = self.send_command(commands::CMD_FIND_RF_PACKET, &[]).await?;
        flag(&data, "RF packet check")
    }

    /// Query the onboard sensors.
    ///
    /// Uses the generation-specific opcode and decoding: first-generation
    /// devices report temperature in tenths, second-generation devices
    /// report temperature and humidity in hundredths.
    pub async fn check_sensors(&self) -> Result<SensorReading> {
        if !self.capabilities.has_sensors {
            return Err(Error::Unsupported(format!(
                "{} has no sensors",
                self.info.model_name
            )));
        }
        let data = self
            .send_command(self.generation.sensor_command(), &[])
            .await?;
        let reading = self.generation.decode_sensors(&data)?;
        debug!(%reading, "sensor readout");
        Ok(reading)
    }

    /// Return the ambient temperature in degrees Celsius.
    pub async fn check_temperature(&self) -> Result<f64> {
        Ok(self.check_sensors().await?.temperature)
    }

    /// Return the relative humidity in percent.
    ///
    /// Only second-generation models with a hygrometer support this;
    /// others fail with [`Error::Unsupported`].
    pub async fn check_humidity(&self) -> Result<f64> {
        if !self.capabilities.has_humidity {
            return Err(Error::Unsupported(format!(
                "{} has no hygrometer",
                self.info.model_name
            )));
        }
        let reading = self.check_sensors().await?;
        reading.humidity.ok_or_else(|| {
            Error::MalformedResponse("sensor result carried no humidity field".into())
        })
    }

    fn require_rf(&self, what: &str) -> Result<()> {
        if self.capabilities.has_rf {
            Ok(())
        } else {
            Err(Error::Unsupported(format!(
                "{}: {} has no RF front-end",
                what, self.info.model_name
            )))
        }
    }
}

/// Interpret the first result byte as a boolean flag (`1` = true).
///
/// An empty result is a malformed response, not `false`: silently
/// reporting "no" on a truncated payload could mask a transport or
/// decryption fault.
fn flag(data: &[u8], what: &str) -> Result<bool> {
    match data.first() {
        Some(&b) => Ok(b == 1),
        None => Err(Error::MalformedResponse(format!(
            "empty result for {what}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{rm2_pro, rm4_mini, rm4_pro, rm_mini_3};
    use rmlink_test_harness::{MockCrypto, MockTransport};

    /// A well-formed raw response: zero status, `tail` as the encrypted
    /// result region starting at 0x38.
    fn raw_response(tail: &[u8]) -> Vec<u8> {
        let mut raw = vec![0u8; commands::RESULT_OFFSET];
        raw.extend_from_slice(tail);
        raw
    }

    /// A raw response carrying a nonzero status code.
    fn error_response(code: u16) -> Vec<u8> {
        let mut raw = vec![0u8; commands::RESULT_OFFSET];
        raw[commands::STATUS_OFFSET..commands::STATUS_OFFSET + 2]
            .copy_from_slice(&code.to_le_bytes());
        raw
    }

    fn gen1_codec(transport: Arc<MockTransport>, crypto: Arc<MockCrypto>) -> RemoteCodec {
        RemoteCodec::new(&rm2_pro(), transport, crypto)
    }

    fn gen2_codec(transport: Arc<MockTransport>, crypto: Arc<MockCrypto>) -> RemoteCodec {
        RemoteCodec::new(&rm4_pro(), transport, crypto)
    }

    // ---------------------------------------------------------------
    // Packet framing
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn gen1_frames_command_then_payload() {
        let transport = Arc::new(MockTransport::new());
        // send_data 0x2 with a two-byte code; identity crypto decrypts the
        // 4 zero bytes after 0x38 into exactly the gen-1 header.
        transport.expect(
            0x6A,
            &[0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB],
            &raw_response(&[0, 0, 0, 0]),
        );
        let codec = gen1_codec(transport.clone(), Arc::new(MockCrypto::new()));

        codec.send_data(&[0xAA, 0xBB]).await.unwrap();
        assert_eq!(transport.remaining_expectations(), 0);
    }

    #[tokio::test]
    async fn gen2_frames_length_prefix_command_payload() {
        let transport = Arc::new(MockTransport::new());
        transport.expect(
            0x6A,
            &[0x06, 0x00, 0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB],
            &raw_response(&[0, 0, 0, 0, 0, 0]),
        );
        let codec = gen2_codec(transport.clone(), Arc::new(MockCrypto::new()));

        codec.send_data(&[0xAA, 0xBB]).await.unwrap();
        assert_eq!(transport.remaining_expectations(), 0);
    }

    #[tokio::test]
    async fn send_data_is_idempotent_at_the_codec_layer() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[0, 0, 0, 0]));
        transport.respond(&raw_response(&[0, 0, 0, 0]));
        let codec = gen1_codec(transport.clone(), Arc::new(MockCrypto::new()));

        codec.send_data(&[0x26, 0x00, 0x0C]).await.unwrap();
        codec.send_data(&[0x26, 0x00, 0x0C]).await.unwrap();

        let sent = transport.sent_data();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }

    // ---------------------------------------------------------------
    // Response unframing
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn gen1_strips_four_byte_header() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[]));
        let crypto = Arc::new(MockCrypto::returning(&[0, 0, 0, 0, 0x11, 0x22]));
        let codec = gen1_codec(transport, crypto);

        let result = codec.send_command(0x04, &[]).await.unwrap();
        assert_eq!(result, vec![0x11, 0x22]);
    }

    #[tokio::test]
    async fn gen2_strips_six_byte_header() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[]));
        let crypto = Arc::new(MockCrypto::returning(&[0, 0, 0, 0, 0, 0, 0x11, 0x22]));
        let codec = gen2_codec(transport, crypto);

        let result = codec.send_command(0x04, &[]).await.unwrap();
        assert_eq!(result, vec![0x11, 0x22]);
    }

    #[tokio::test]
    async fn decrypts_exactly_the_result_region() {
        let transport = Arc::new(MockTransport::new());
        // Identity crypto: the bytes after 0x38 come back as plaintext.
        transport.respond(&raw_response(&[0, 0, 0, 0, 0xDE, 0xAD]));
        let codec = gen1_codec(transport, Arc::new(MockCrypto::new()));

        let result = codec.check_data().await.unwrap();
        assert_eq!(result, vec![0xDE, 0xAD]);
    }

    #[tokio::test]
    async fn device_error_carries_code_and_skips_decrypt() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&error_response(1));
        let crypto = Arc::new(MockCrypto::new());
        let codec = gen1_codec(transport, crypto.clone());

        match codec.enter_learning().await {
            Err(Error::Device { code }) => assert_eq!(code, 1),
            other => panic!("expected Device error, got {other:?}"),
        }
        assert_eq!(crypto.calls(), 0);
    }

    #[tokio::test]
    async fn gen2_device_error_before_decrypt() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&error_response(0xFFF9));
        let crypto = Arc::new(MockCrypto::new());
        let codec = gen2_codec(transport, crypto.clone());

        match codec.check_data().await {
            Err(Error::Device { code }) => assert_eq!(code, 0xFFF9),
            other => panic!("expected Device error, got {other:?}"),
        }
        assert_eq!(crypto.calls(), 0);
    }

    #[tokio::test]
    async fn short_raw_response_is_malformed() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&[0u8; 0x10]);
        let codec = gen1_codec(transport, Arc::new(MockCrypto::new()));

        assert!(matches!(
            codec.check_data().await,
            Err(Error::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn short_decrypted_payload_is_malformed() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[]));
        // Two bytes of plaintext cannot contain the 4-byte gen-1 header.
        let crypto = Arc::new(MockCrypto::returning(&[0x00, 0x00]));
        let codec = gen1_codec(transport, crypto);

        assert!(matches!(
            codec.check_data().await,
            Err(Error::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn transport_error_propagates_unchanged() {
        let transport = Arc::new(MockTransport::new()); // no expectations
        let codec = gen1_codec(transport, Arc::new(MockCrypto::new()));

        assert!(matches!(
            codec.enter_learning().await,
            Err(Error::Transport(_))
        ));
    }

    #[tokio::test]
    async fn crypto_error_propagates_unchanged() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[0, 0, 0, 0]));
        let codec = gen1_codec(transport, Arc::new(MockCrypto::failing()));

        assert!(matches!(codec.check_data().await, Err(Error::Crypto(_))));
    }

    // ---------------------------------------------------------------
    // Boolean checks
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn check_frequency_true_on_one() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[0, 0, 0, 0, 0x01]));
        let codec = gen1_codec(transport, Arc::new(MockCrypto::new()));

        assert!(codec.check_frequency().await.unwrap());
    }

    #[tokio::test]
    async fn check_frequency_false_on_zero_and_other_bytes() {
        for byte in [0x00, 0x02, 0xFF] {
            let transport = Arc::new(MockTransport::new());
            transport.respond(&raw_response(&[0, 0, 0, 0, byte]));
            let codec = gen1_codec(transport, Arc::new(MockCrypto::new()));
            assert!(!codec.check_frequency().await.unwrap(), "byte {byte:#04x}");
        }
    }

    #[tokio::test]
    async fn find_rf_packet_true_on_one() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[0, 0, 0, 0, 0x01, 0x99]));
        let codec = gen1_codec(transport, Arc::new(MockCrypto::new()));

        assert!(codec.find_rf_packet().await.unwrap());
    }

    #[tokio::test]
    async fn empty_result_for_flag_is_malformed() {
        let transport = Arc::new(MockTransport::new());
        // Exactly the header, nothing left for the flag byte.
        transport.respond(&raw_response(&[0, 0, 0, 0]));
        let codec = gen1_codec(transport, Arc::new(MockCrypto::new()));

        assert!(matches!(
            codec.check_frequency().await,
            Err(Error::MalformedResponse(_))
        ));
    }

    // ---------------------------------------------------------------
    // Sensors
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn gen1_check_temperature() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[0u8; 8]));
        let crypto = Arc::new(MockCrypto::returning(&[0, 0, 0, 0, 21, 5]));
        let codec = gen1_codec(transport.clone(), crypto);

        assert_eq!(codec.check_temperature().await.unwrap(), 21.5);
        // The sensor query went out under the gen-1 opcode.
        assert_eq!(transport.sent_data()[0].1, vec![0x01, 0x00, 0x00, 0x00]);
    }

    #[tokio::test]
    async fn gen2_check_sensors() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[]));
        let crypto = Arc::new(MockCrypto::returning(&[0, 0, 0, 0, 0, 0, 21, 50, 45, 30]));
        let codec = gen2_codec(transport.clone(), crypto);

        let reading = codec.check_sensors().await.unwrap();
        assert_eq!(reading.temperature, 21.5);
        assert_eq!(reading.humidity, Some(45.3));
        // The sensor query went out under the gen-2 opcode.
        assert_eq!(
            transport.sent_data()[0].1,
            vec![0x04, 0x00, 0x24, 0x00, 0x00, 0x00]
        );
    }

    #[tokio::test]
    async fn gen2_check_humidity() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[]));
        let crypto = Arc::new(MockCrypto::returning(&[0, 0, 0, 0, 0, 0, 21, 50, 45, 30]));
        let codec = gen2_codec(transport, crypto);

        assert_eq!(codec.check_humidity().await.unwrap(), 45.3);
    }

    #[tokio::test]
    async fn truncated_sensor_result_is_malformed() {
        let transport = Arc::new(MockTransport::new());
        transport.respond(&raw_response(&[]));
        let crypto = Arc::new(MockCrypto::returning(&[0, 0, 0, 0, 0, 0, 21]));
        let codec = gen2_codec(transport, crypto);

        assert!(matches!(
            codec.check_sensors().await,
            Err(Error::MalformedResponse(_))
        ));
    }

    // ---------------------------------------------------------------
    // Capability gating
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn humidity_unsupported_on_gen1() {
        let transport = Arc::new(MockTransport::new());
        let codec = gen1_codec(transport.clone(), Arc::new(MockCrypto::new()));

        assert!(matches!(
            codec.check_humidity().await,
            Err(Error::Unsupported(_))
        ));
        // No command went over the wire.
        assert!(transport.sent_data().is_empty());
    }

    #[tokio::test]
    async fn rf_unsupported_on_ir_only_model() {
        let transport = Arc::new(MockTransport::new());
        let codec = RemoteCodec::new(
            &rm4_mini(),
            transport.clone(),
            Arc::new(MockCrypto::new()),
        );

        assert!(matches!(
            codec.sweep_frequency().await,
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            codec.check_frequency().await,
            Err(Error::Unsupported(_))
        ));
        assert!(transport.sent_data().is_empty());
    }

    #[tokio::test]
    async fn sensors_unsupported_on_sensorless_model() {
        let transport = Arc::new(MockTransport::new());
        let codec = RemoteCodec::new(
            &rm_mini_3(),
            transport.clone(),
            Arc::new(MockCrypto::new()),
        );

        assert!(matches!(
            codec.check_sensors().await,
            Err(Error::Unsupported(_))
        ));
        assert!(transport.sent_data().is_empty());
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    #[tokio::test]
    async fn codec_from_model_reports_info() {
        let codec = gen2_codec(Arc::new(MockTransport::new()), Arc::new(MockCrypto::new()));
        assert_eq!(codec.info().model_name, "RM4 pro");
        assert_eq!(codec.generation(), Generation::Gen2);
        assert!(codec.capabilities().has_humidity);
    }

    #[tokio::test]
    async fn codec_with_generation_defaults() {
        let codec = RemoteCodec::with_generation(
            Generation::Gen1,
            Arc::new(MockTransport::new()),
            Arc::new(MockCrypto::new()),
        );
        assert_eq!(codec.generation(), Generation::Gen1);
        assert!(codec.capabilities().has_rf);
        assert!(!codec.capabilities().has_humidity);
    }
}
