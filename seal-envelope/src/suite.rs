//! Algorithm suite selection.

use seal_primitives::aead::{Aes256GcmCipher, ChaCha20Poly1305Cipher};
use seal_primitives::{AeadCipher, MlKemKem, MlKemLevel};
use seal_types::{AeadAlgorithm, KemAlgorithm};

static AES_256_GCM_CIPHER: Aes256GcmCipher = Aes256GcmCipher;
static CHACHA20_POLY1305_CIPHER: ChaCha20Poly1305Cipher = ChaCha20Poly1305Cipher;

/// The algorithm pair an encryptor commits to at construction time.
///
/// The default suite is ML-KEM-768 with AES-256-GCM. Decryption does not use
/// a suite: the decoder reads the flags byte and selects adapters itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopeSuite {
    /// KEM protecting the session key.
    pub kem: KemAlgorithm,
    /// AEAD sealing the body.
    pub aead: AeadAlgorithm,
}

impl EnvelopeSuite {
    /// Builds a suite from its parts.
    #[must_use]
    pub const fn new(kem: KemAlgorithm, aead: AeadAlgorithm) -> Self {
        Self { kem, aead }
    }
}

/// Selects the KEM adapter for an algorithm identifier.
pub(crate) fn kem_for(alg: KemAlgorithm) -> MlKemKem {
    match alg {
        KemAlgorithm::MlKem768 => MlKemKem::new(MlKemLevel::MlKem768),
        KemAlgorithm::MlKem1024 => MlKemKem::new(MlKemLevel::MlKem1024),
    }
}

/// Selects the AEAD adapter for an algorithm identifier.
pub(crate) fn cipher_for(alg: AeadAlgorithm) -> &'static dyn AeadCipher {
    match alg {
        AeadAlgorithm::Aes256Gcm => &AES_256_GCM_CIPHER,
        AeadAlgorithm::ChaCha20Poly1305 => &CHACHA20_POLY1305_CIPHER,
    }
}
