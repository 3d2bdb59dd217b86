//! Crypto provider trait for response decryption.
//!
//! Device replies carry their result region encrypted under the session
//! key negotiated at pairing time. Key management and the cipher itself
//! live outside this library; the codec only needs a decryption primitive
//! it can apply to the encrypted slice of a raw response.
//!
//! Outbound encryption is not part of this trait: the transport encrypts
//! the whole framed packet as part of wire framing, before the bytes
//! leave the host.

use crate::error::Result;

/// Decryption primitive applied to the encrypted region of a raw response.
///
/// Implementations are pure byte-to-byte transforms (typically AES-CBC
/// under the session key) and are expected to be cheap relative to the
/// network round-trip, hence the synchronous signature.
pub trait CryptoProvider: Send + Sync {
    /// Decrypt `cipher` and return the plaintext.
    ///
    /// Fails with [`Error::Crypto`](crate::error::Error::Crypto) on
    /// malformed ciphertext (e.g. a length that is not a whole number of
    /// cipher blocks).
    fn decrypt(&self, cipher: &[u8]) -> Result<Vec<u8>>;
}
