//! Authenticated Encryption with Additional Data (AEAD)
//!
//! AEAD schemes for the envelope body, following NIST SP 800-38D and
//! RFC 8439:
//!
//! - **AES-256-GCM** (NIST SP 800-38D)
//! - **ChaCha20-Poly1305** (RFC 8439)
//!
//! ## AEAD Security Notes
//!
//! - **Nonce Reuse**: NEVER reuse a nonce with the same key - this breaks security
//! - **Nonce Prediction**: Use cryptographically secure random nonces
//! - **Tag Verification**: ALWAYS verify the authentication tag before accepting ciphertext
//! - **Side Channels**: Tag verification is constant-time inside aws-lc-rs

pub mod aes_gcm;
pub mod chacha20poly1305;

pub use aes_gcm::Aes256GcmCipher;
pub use chacha20poly1305::ChaCha20Poly1305Cipher;

use rand::RngCore;

/// AEAD cipher nonce length.
pub const NONCE_LEN: usize = 12;

/// AEAD authentication tag length.
pub const TAG_LEN: usize = 16;

/// AEAD key length (32 bytes for both supported ciphers).
pub const KEY_LEN: usize = 32;

/// Nonce type for AEAD ciphers.
pub type Nonce = [u8; NONCE_LEN];

/// Auth tag type for AEAD ciphers.
pub type Tag = [u8; TAG_LEN];

/// Generates a random nonce from the operating system RNG.
#[must_use]
pub fn generate_nonce() -> Nonce {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce);
    nonce
}

/// An AEAD cipher keyed per call.
///
/// The envelope derives a fresh key for every seal, so implementations take
/// the key as an argument instead of holding it. Object-safe: the decoder
/// picks the cipher from the envelope flags byte at runtime.
pub trait AeadCipher: Send + Sync {
    /// Encrypts `plaintext` under `key` and `nonce`.
    ///
    /// Returns the ciphertext body and the detached authentication tag.
    ///
    /// # Errors
    /// Returns `AeadError` if encryption fails.
    fn seal(
        &self,
        key: &[u8; KEY_LEN],
        nonce: &Nonce,
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Tag), AeadError>;

    /// Decrypts `ciphertext` and verifies `tag` under `key` and `nonce`.
    ///
    /// # Errors
    /// Returns [`AeadError::TagVerificationFailed`] if the tag does not
    /// authenticate the ciphertext, or another `AeadError` on setup failure.
    fn open(
        &self,
        key: &[u8; KEY_LEN],
        nonce: &Nonce,
        ciphertext: &[u8],
        tag: &Tag,
    ) -> Result<Vec<u8>, AeadError>;
}

/// AEAD errors.
#[derive(Debug, thiserror::Error)]
pub enum AeadError {
    /// Invalid key length.
    #[error("Invalid key length")]
    InvalidKeyLength,

    /// Authentication tag verification failed.
    #[error("Authentication tag verification failed")]
    TagVerificationFailed,

    /// Encryption failed.
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}
