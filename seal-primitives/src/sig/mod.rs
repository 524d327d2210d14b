//! Post-quantum signatures over the envelope.
//!
//! The optional signature section covers the whole envelope (header, KEM
//! ciphertext, tag, and cipher body), binding provenance to everything the
//! AEAD already authenticates plus the framing itself.

pub mod dilithium;

pub use dilithium::Dilithium5Scheme;

use thiserror::Error;
use zeroize::Zeroizing;

/// A detached-signature scheme operating on serialized keys.
///
/// Signatures are fixed-length per scheme, which lets the envelope header
/// record the signature length before the signature itself is computed.
/// Object-safe.
pub trait SignatureScheme: Send + Sync {
    /// Generates a signing keypair.
    ///
    /// Returns `(public_key_bytes, secret_key_bytes)`; the secret half is
    /// wrapped in `Zeroizing`.
    ///
    /// # Errors
    /// Returns an error if key generation fails.
    fn generate_keypair(&self) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), SigError>;

    /// Produces a detached signature over `message`.
    ///
    /// # Errors
    /// Returns an error if the secret key is malformed.
    fn sign(&self, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>, SigError>;

    /// Verifies a detached signature over `message`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify;
    /// errors are reserved for malformed keys or signatures.
    ///
    /// # Errors
    /// Returns an error if the public key or signature bytes cannot be parsed.
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool, SigError>;

    /// The fixed signature length of this scheme in bytes.
    fn signature_len(&self) -> usize;
}

/// Error types for signature operations.
#[derive(Debug, Error)]
pub enum SigError {
    /// Key generation failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// The public key bytes could not be parsed.
    #[error("Malformed public key: expected {expected} bytes, got {actual}")]
    MalformedPublicKey {
        /// Expected size in bytes.
        expected: usize,
        /// Actual size received.
        actual: usize,
    },

    /// The secret key bytes could not be parsed.
    #[error("Malformed secret key: expected {expected} bytes, got {actual}")]
    MalformedSecretKey {
        /// Expected size in bytes.
        expected: usize,
        /// Actual size received.
        actual: usize,
    },

    /// The signature bytes could not be parsed.
    #[error("Malformed signature: expected {expected} bytes, got {actual}")]
    MalformedSignature {
        /// Expected size in bytes.
        expected: usize,
        /// Actual size received.
        actual: usize,
    },
}
