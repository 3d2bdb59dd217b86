//! Mock crypto provider for deterministic testing.
//!
//! [`MockCrypto`] implements [`CryptoProvider`] with scripted plaintexts
//! instead of a real cipher. It also counts `decrypt()` calls, which lets
//! tests assert that decryption is *not* attempted when a response
//! carries a device error.

use std::collections::VecDeque;
use std::sync::Mutex;

use rmlink_core::crypto::CryptoProvider;
use rmlink_core::error::{Error, Result};

#[derive(Debug, Default)]
struct Inner {
    /// Plaintexts returned by successive `decrypt()` calls, in order.
    scripted: VecDeque<Vec<u8>>,
    /// When set, every `decrypt()` call fails.
    fail: bool,
    /// Total number of `decrypt()` calls made.
    calls: usize,
}

/// A mock [`CryptoProvider`] with scripted plaintexts.
///
/// With no script loaded, `decrypt()` is the identity transform (the
/// "ciphertext" is returned unchanged). Scripted plaintexts are consumed
/// in order; once the script is exhausted, decryption falls back to the
/// identity transform again.
#[derive(Debug, Default)]
pub struct MockCrypto {
    inner: Mutex<Inner>,
}

impl MockCrypto {
    /// Create a mock that decrypts everything to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose next `decrypt()` call returns `plaintext`.
    pub fn returning(plaintext: &[u8]) -> Self {
        let mock = Self::new();
        mock.push_plaintext(plaintext);
        mock
    }

    /// Create a mock whose `decrypt()` calls all fail with
    /// [`Error::Crypto`].
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().fail = true;
        mock
    }

    /// Queue a plaintext to be returned by a subsequent `decrypt()` call.
    pub fn push_plaintext(&self, plaintext: &[u8]) {
        self.inner
            .lock()
            .unwrap()
            .scripted
            .push_back(plaintext.to_vec());
    }

    /// Number of `decrypt()` calls made so far.
    pub fn calls(&self) -> usize {
        self.inner.lock().unwrap().calls
    }
}

impl CryptoProvider for MockCrypto {
    fn decrypt(&self, cipher: &[u8]) -> Result<Vec<u8>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls += 1;
        if inner.fail {
            return Err(Error::Crypto("mock decryption failure".into()));
        }
        match inner.scripted.pop_front() {
            Some(plain) => Ok(plain),
            None => Ok(cipher.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_by_default() {
        let mock = MockCrypto::new();
        assert_eq!(mock.decrypt(&[1, 2, 3]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn scripted_plaintexts_in_order() {
        let mock = MockCrypto::returning(&[0xAA]);
        mock.push_plaintext(&[0xBB]);

        assert_eq!(mock.decrypt(&[]).unwrap(), vec![0xAA]);
        assert_eq!(mock.decrypt(&[]).unwrap(), vec![0xBB]);
        // Script exhausted: back to identity.
        assert_eq!(mock.decrypt(&[0xCC]).unwrap(), vec![0xCC]);
    }

    #[test]
    fn failing_mock() {
        let mock = MockCrypto::failing();
        assert!(matches!(mock.decrypt(&[1]), Err(Error::Crypto(_))));
    }

    #[test]
    fn counts_calls() {
        let mock = MockCrypto::new();
        assert_eq!(mock.calls(), 0);
        mock.decrypt(&[]).unwrap();
        mock.decrypt(&[]).unwrap();
        assert_eq!(mock.calls(), 2);
    }
}
