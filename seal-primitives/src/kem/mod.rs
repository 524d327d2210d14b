//! Key encapsulation for the envelope session key.
//!
//! The envelope stores the KEM ciphertext that protects the one-time session
//! key. Which KEM produced it is recorded in the flags byte, so decryption
//! selects the implementation at runtime through the [`KeyEncapsulator`]
//! trait.

pub mod ml_kem;

pub use ml_kem::{MlKemKem, MlKemLevel};

use crate::secret::SessionSecret;
use thiserror::Error;

/// A key encapsulation mechanism operating on serialized keys.
///
/// Object-safe: implementations are selected from the envelope flags byte at
/// decryption time.
pub trait KeyEncapsulator: Send + Sync {
    /// Encapsulates a fresh session secret to the recipient's public key.
    ///
    /// Returns the KEM ciphertext for the envelope and the session secret to
    /// feed into key derivation.
    ///
    /// # Errors
    /// Returns an error if the public key is malformed or encapsulation fails.
    fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, SessionSecret), KemError>;

    /// Recovers the session secret from a KEM ciphertext.
    ///
    /// # Errors
    /// Returns an error if the secret key or ciphertext is malformed or
    /// decapsulation fails.
    fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<SessionSecret, KemError>;

    /// The fixed ciphertext length of this mechanism in bytes.
    fn ciphertext_len(&self) -> usize;
}

/// Error types for KEM operations.
#[derive(Debug, Error)]
pub enum KemError {
    /// Key generation failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Encapsulation failed.
    #[error("Encapsulation failed: {0}")]
    Encapsulation(String),

    /// Decapsulation failed.
    #[error("Decapsulation failed: {0}")]
    Decapsulation(String),

    /// Invalid key length.
    #[error("Invalid {key_type} length for {variant}: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// The KEM variant name.
        variant: &'static str,
        /// Expected size in bytes.
        expected: usize,
        /// Actual size received.
        actual: usize,
        /// Which key (public/secret).
        key_type: &'static str,
    },

    /// Invalid ciphertext length.
    #[error("Invalid ciphertext length for {variant}: expected {expected}, got {actual}")]
    InvalidCiphertextLength {
        /// The KEM variant name.
        variant: &'static str,
        /// Expected ciphertext size.
        expected: usize,
        /// Actual ciphertext size.
        actual: usize,
    },

    /// Shared secret had an unexpected length.
    #[error("Invalid shared secret length: expected {expected}, got {actual}")]
    InvalidSharedSecretLength {
        /// Expected size in bytes.
        expected: usize,
        /// Actual size received.
        actual: usize,
    },
}
