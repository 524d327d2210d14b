//! # PQSeal
//!
//! Hybrid post-quantum envelope encryption for arbitrary byte buffers.
//!
//! A PQSeal envelope protects a one-time session key with ML-KEM (FIPS 203),
//! encrypts the body with an AEAD (AES-256-GCM or ChaCha20-Poly1305), and
//! optionally binds provenance with a Dilithium5 signature over the whole
//! envelope.
//!
//! ## Quick start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pqseal::{decrypt, encrypt, generate_kem_keypair, KemAlgorithm, SignatureStatus};
//!
//! let (pk, sk) = generate_kem_keypair(KemAlgorithm::MlKem768)?;
//!
//! let envelope = encrypt(b"hello world", &pk, None)?;
//! let (plaintext, status) = decrypt(&envelope, &sk, None, false)?;
//!
//! assert_eq!(plaintext, b"hello world");
//! assert_eq!(status, SignatureStatus::NotPresent);
//! # Ok(())
//! # }
//! ```
//!
//! ## Signed envelopes
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pqseal::{decrypt, encrypt, generate_kem_keypair, generate_signing_keypair, KemAlgorithm};
//!
//! let (pk, sk) = generate_kem_keypair(KemAlgorithm::MlKem768)?;
//! let (signer_pk, signer_sk) = generate_signing_keypair()?;
//!
//! let envelope = encrypt(b"audited", &pk, Some(&signer_sk))?;
//! // require_signature = true: only a verified signature yields plaintext.
//! let (plaintext, status) = decrypt(&envelope, &sk, Some(&signer_pk), true)?;
//! assert!(status.is_verified());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Key generation for envelopes.
pub mod keygen;
/// On-disk key storage.
pub mod key_provider;

// ============================================================
// Core envelope types
// ============================================================

pub use seal_envelope::{
    Decrypted, Envelope, EnvelopeError, EnvelopeSuite, FormatError, HybridDecryptor,
    HybridEncryptor, Result, HEADER_LEN, MAGIC,
};

// ============================================================
// Domain types
// ============================================================

pub use seal_types::resource_limits;
pub use seal_types::{
    AeadAlgorithm, AlgorithmFlags, KemAlgorithm, ResourceLimits, SignatureStatus,
};

// ============================================================
// Primitives (for callers composing their own pipelines)
// ============================================================

pub use seal_primitives::{
    AeadCipher, Dilithium5Scheme, KeyEncapsulator, MlKemKem, MlKemLevel, SessionSecret,
    SignatureScheme,
};

pub use key_provider::{FileKeyProvider, KeyProvider, KeyProviderError};
pub use keygen::{generate_kem_keypair, generate_signing_keypair};

// ============================================================
// Convenience API
// ============================================================

/// Encrypts `plaintext` to a recipient with the default suite
/// (ML-KEM-768 + AES-256-GCM), optionally signing the envelope.
///
/// # Errors
/// Returns an [`EnvelopeError`] if any stage of envelope production fails.
pub fn encrypt(
    plaintext: &[u8],
    recipient_public_key: &[u8],
    signer_secret_key: Option<&[u8]>,
) -> Result<Vec<u8>> {
    HybridEncryptor::default().encrypt(plaintext, recipient_public_key, signer_secret_key)
}

/// Encrypts with an explicit algorithm suite.
///
/// # Errors
/// Returns an [`EnvelopeError`] if any stage of envelope production fails.
pub fn encrypt_with_suite(
    suite: EnvelopeSuite,
    plaintext: &[u8],
    recipient_public_key: &[u8],
    signer_secret_key: Option<&[u8]>,
) -> Result<Vec<u8>> {
    HybridEncryptor::new(suite).encrypt(plaintext, recipient_public_key, signer_secret_key)
}

/// Decrypts an envelope, returning the plaintext and the signature outcome.
///
/// With `require_signature` set, only an envelope whose signature verifies
/// against `signer_public_key` yields plaintext.
///
/// # Errors
/// Returns an [`EnvelopeError`] if parsing, signature policy, decapsulation,
/// or body authentication fails.
pub fn decrypt(
    envelope: &[u8],
    recipient_secret_key: &[u8],
    signer_public_key: Option<&[u8]>,
    require_signature: bool,
) -> Result<(Vec<u8>, SignatureStatus)> {
    let out = HybridDecryptor::new().decrypt(
        envelope,
        recipient_secret_key,
        signer_public_key,
        require_signature,
    )?;
    Ok((out.plaintext, out.signature))
}
