//! Error types for envelope operations.

use seal_primitives::{AeadError, KdfError, KemError, SigError};
use seal_types::resource_limits::ResourceError;
use thiserror::Error;

/// Errors from envelope parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The magic bytes did not match `PQC1`.
    #[error("Bad magic bytes")]
    BadMagic,

    /// The input ended before the declared sections.
    #[error("Truncated envelope: need {needed} bytes, have {have}")]
    Truncated {
        /// Bytes required by the header (or the header itself).
        needed: usize,
        /// Bytes actually available.
        have: usize,
    },

    /// The header fields are internally inconsistent.
    #[error("Malformed envelope: {0}")]
    Malformed(&'static str),
}

/// Errors from envelope encryption and decryption.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvelopeError {
    /// The envelope bytes could not be parsed.
    #[error("Envelope format error: {0}")]
    Format(#[from] FormatError),

    /// A KEM operation failed.
    #[error("KEM operation failed: {0}")]
    Kem(#[from] KemError),

    /// Session-key derivation failed.
    #[error("Key derivation failed: {0}")]
    Kdf(#[from] KdfError),

    /// AEAD sealing failed while producing an envelope.
    #[error("Encryption failed: {0}")]
    Encryption(#[from] AeadError),

    /// Signing or signature parsing failed.
    #[error("Signature operation failed: {0}")]
    Signing(#[from] SigError),

    /// A verified signature was required but not available.
    #[error("Signature required but not present or not verifiable")]
    SignatureRequired,

    /// Signature verification failed while enforcement was on.
    #[error("Signature verification failed")]
    SignatureInvalid,

    /// The AEAD rejected the body: the envelope was tampered with or the
    /// wrong recipient key was used.
    #[error("Envelope authentication failed")]
    Authentication,

    /// An input exceeded the configured resource limits.
    #[error("Resource limit exceeded: {0}")]
    Resource(#[from] ResourceError),
}

/// A specialized Result type for envelope operations.
pub type Result<T> = std::result::Result<T, EnvelopeError>;
