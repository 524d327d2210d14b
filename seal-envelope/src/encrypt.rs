//! Envelope encryption.
//!
//! Pipeline: encapsulate a fresh session secret to the recipient's KEM
//! public key, derive the AEAD key through HKDF-SHA256, seal the plaintext,
//! then optionally sign the assembled envelope. Any failure aborts before
//! bytes are produced; partial envelopes are never returned.

use tracing::instrument;

use seal_primitives::aead::generate_nonce;
use seal_primitives::{derive_session_key, Dilithium5Scheme, KeyEncapsulator, SignatureScheme};
use seal_types::resource_limits::{validate_encryption_size, validate_signature_size};
use seal_types::AlgorithmFlags;

use crate::codec::Envelope;
use crate::error::Result;
use crate::suite::{cipher_for, kem_for, EnvelopeSuite};

/// Produces envelopes for a fixed algorithm suite.
///
/// The suite is committed once at construction; every envelope this
/// encryptor produces records it in the flags byte so the decryptor can
/// select matching adapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridEncryptor {
    suite: EnvelopeSuite,
    signer: Dilithium5Scheme,
}

impl HybridEncryptor {
    /// Creates an encryptor for the given suite.
    #[must_use]
    pub const fn new(suite: EnvelopeSuite) -> Self {
        Self { suite, signer: Dilithium5Scheme }
    }

    /// The suite this encryptor produces envelopes with.
    #[must_use]
    pub const fn suite(&self) -> EnvelopeSuite {
        self.suite
    }

    /// Encrypts `plaintext` to the recipient, optionally signing the result.
    ///
    /// `recipient_public_key` is a serialized ML-KEM public key at the
    /// suite's parameter set. When `signer_secret_key` is given, the
    /// envelope carries a Dilithium5 signature over its header and all
    /// cryptographic sections.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::Resource`](crate::EnvelopeError::Resource) if the
    ///   plaintext exceeds the configured size limit
    /// - [`EnvelopeError::Kem`](crate::EnvelopeError::Kem) if the recipient
    ///   key is malformed or encapsulation fails
    /// - [`EnvelopeError::Encryption`](crate::EnvelopeError::Encryption) if
    ///   AEAD sealing fails
    /// - [`EnvelopeError::Signing`](crate::EnvelopeError::Signing) if the
    ///   signer key is malformed
    #[instrument(level = "debug", skip_all, fields(
        plaintext_len = plaintext.len(),
        kem = self.suite.kem.name(),
        aead = self.suite.aead.name(),
        signed = signer_secret_key.is_some(),
    ))]
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        recipient_public_key: &[u8],
        signer_secret_key: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        validate_encryption_size(plaintext.len())?;

        let kem = kem_for(self.suite.kem);
        let (kem_ciphertext, session_secret) = kem.encapsulate(recipient_public_key)?;

        // Zeroizing wrappers wipe the secret and the derived key on drop.
        let session_key = derive_session_key(&session_secret)?;
        drop(session_secret);

        let nonce = generate_nonce();
        let cipher = cipher_for(self.suite.aead);
        let (cipher_body, aead_tag) = cipher.seal(&session_key, &nonce, plaintext)?;
        drop(session_key);

        let mut envelope = Envelope {
            flags: AlgorithmFlags::new(
                self.suite.kem,
                self.suite.aead,
                signer_secret_key.is_some(),
            ),
            nonce,
            kem_ciphertext,
            aead_tag,
            signature: None,
            cipher_body,
        };

        if let Some(signer_key) = signer_secret_key {
            let payload = envelope.signature_payload(self.signer.signature_len());
            validate_signature_size(payload.len())?;
            let signature = self.signer.sign(signer_key, &payload)?;
            envelope.signature = Some(signature);
        }

        Ok(envelope.encode())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::codec::HEADER_LEN;
    use seal_primitives::{MlKemKem, MlKemLevel};
    use seal_types::{AeadAlgorithm, KemAlgorithm};

    #[test]
    fn test_unsigned_envelope_layout() {
        let (pk, _sk) = MlKemKem::generate_keypair(MlKemLevel::MlKem768).unwrap();
        let encryptor = HybridEncryptor::default();

        let bytes = encryptor.encrypt(b"hello world", &pk, None).unwrap();
        assert_eq!(&bytes[0..4], b"PQC1");
        // Unsigned default suite: flags byte is all zeroes.
        assert_eq!(bytes[4], 0x00);
        // sig_len field is zero.
        assert_eq!(&bytes[13..17], &[0, 0, 0, 0]);
        assert_eq!(bytes.len(), HEADER_LEN + 1088 + 16 + 11);
    }

    #[test]
    fn test_signed_envelope_layout() {
        let (pk, _sk) = MlKemKem::generate_keypair(MlKemLevel::MlKem768).unwrap();
        let scheme = Dilithium5Scheme;
        let (_spk, ssk) = scheme.generate_keypair().unwrap();
        let encryptor = HybridEncryptor::default();

        let bytes = encryptor.encrypt(b"signed", &pk, Some(&ssk)).unwrap();
        assert_eq!(bytes[4] & 0x02, 0x02);
        let sig_len = u32::from_be_bytes(bytes[13..17].try_into().unwrap()) as usize;
        assert_eq!(sig_len, scheme.signature_len());
        assert_eq!(bytes.len(), HEADER_LEN + 1088 + 16 + sig_len + 6);
    }

    #[test]
    fn test_nondefault_suite_recorded_in_flags() {
        let (pk, _sk) = MlKemKem::generate_keypair(MlKemLevel::MlKem1024).unwrap();
        let encryptor = HybridEncryptor::new(EnvelopeSuite::new(
            KemAlgorithm::MlKem1024,
            AeadAlgorithm::ChaCha20Poly1305,
        ));

        let bytes = encryptor.encrypt(b"suite", &pk, None).unwrap();
        assert_eq!(bytes[4], 0x05);
        let kem_ct_len = u32::from_be_bytes(bytes[5..9].try_into().unwrap()) as usize;
        assert_eq!(kem_ct_len, 1568);
    }

    #[test]
    fn test_envelopes_are_unique_per_call() {
        let (pk, _sk) = MlKemKem::generate_keypair(MlKemLevel::MlKem768).unwrap();
        let encryptor = HybridEncryptor::default();

        let a = encryptor.encrypt(b"same plaintext", &pk, None).unwrap();
        let b = encryptor.encrypt(b"same plaintext", &pk, None).unwrap();
        // Fresh encapsulation and nonce every call.
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_recipient_key_rejected() {
        let encryptor = HybridEncryptor::default();
        let err = encryptor.encrypt(b"data", &[0u8; 10], None).unwrap_err();
        assert!(matches!(err, crate::EnvelopeError::Kem(_)));
    }

    #[test]
    fn test_empty_plaintext_allowed() {
        let (pk, _sk) = MlKemKem::generate_keypair(MlKemLevel::MlKem768).unwrap();
        let encryptor = HybridEncryptor::default();

        let bytes = encryptor.encrypt(b"", &pk, None).unwrap();
        assert_eq!(bytes.len(), HEADER_LEN + 1088 + 16);
    }
}
