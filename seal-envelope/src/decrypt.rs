//! Envelope decryption.
//!
//! Decryption is a linear state machine:
//!
//! 1. **Parse** the wire bytes (pure framing, no cryptography)
//! 2. **Gate**: with `require_signature`, refuse envelopes that cannot yield
//!    a *verified* signature before any cryptographic work starts
//! 3. **Verify** the signature when one is present and a verifier key was
//!    supplied
//! 4. **Decapsulate** the session secret and re-derive the AEAD key
//! 5. **Open** the body; this AEAD gate is unconditional and terminal
//!
//! Verification precedes decapsulation so a forged envelope is rejected
//! before any secret-key operation touches it. When enforcement is off a
//! failed signature does not block decryption: the plaintext is returned
//! with [`SignatureStatus::Failed`] and the caller decides.

use tracing::{instrument, warn};

use seal_primitives::{
    derive_session_key, AeadError, Dilithium5Scheme, KeyEncapsulator, SigError, SignatureScheme,
};
use seal_types::resource_limits::{validate_decryption_size, validate_signature_size};
use seal_types::SignatureStatus;

use crate::codec::Envelope;
use crate::error::{EnvelopeError, Result};
use crate::suite::{cipher_for, kem_for};

/// A successfully decrypted envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decrypted {
    /// The recovered plaintext.
    pub plaintext: Vec<u8>,
    /// What happened to the envelope's signature, if anything.
    pub signature: SignatureStatus,
}

/// Opens envelopes of any suite.
///
/// Unlike [`HybridEncryptor`](crate::HybridEncryptor), the decryptor is not
/// tied to a suite: it reads the flags byte from each envelope and selects
/// the matching adapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridDecryptor {
    verifier: Dilithium5Scheme,
}

impl HybridDecryptor {
    /// Creates a decryptor.
    #[must_use]
    pub const fn new() -> Self {
        Self { verifier: Dilithium5Scheme }
    }

    /// Decrypts an envelope.
    ///
    /// `recipient_secret_key` is the serialized ML-KEM secret key matching
    /// the envelope's KEM variant. `signer_public_key` enables signature
    /// verification when the envelope carries one. With `require_signature`
    /// set, only envelopes whose signature verifies yield plaintext.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::Resource`] if the envelope exceeds the size limit
    /// - [`EnvelopeError::Format`] if the bytes do not parse
    /// - [`EnvelopeError::SignatureRequired`] if `require_signature` is set
    ///   and the envelope is unsigned, or no verifier key was supplied
    /// - [`EnvelopeError::SignatureInvalid`] if `require_signature` is set
    ///   and verification fails
    /// - [`EnvelopeError::Kem`] if decapsulation fails
    /// - [`EnvelopeError::Authentication`] if the AEAD rejects the body
    #[instrument(level = "debug", skip_all, fields(
        envelope_len = envelope_bytes.len(),
        require_signature,
        verifier_key = signer_public_key.is_some(),
    ))]
    pub fn decrypt(
        &self,
        envelope_bytes: &[u8],
        recipient_secret_key: &[u8],
        signer_public_key: Option<&[u8]>,
        require_signature: bool,
    ) -> Result<Decrypted> {
        validate_decryption_size(envelope_bytes.len())?;

        // 1. Parse
        let envelope = Envelope::decode(envelope_bytes)?;

        // 2. Signature gate: enforcement demands a verifiable signature
        // before any cryptographic work.
        if require_signature && (envelope.signature.is_none() || signer_public_key.is_none()) {
            return Err(EnvelopeError::SignatureRequired);
        }

        // 3. Verify
        let signature_status = match (&envelope.signature, signer_public_key) {
            (None, _) => SignatureStatus::NotPresent,
            (Some(_), None) => SignatureStatus::NotChecked,
            (Some(signature), Some(public_key)) => {
                let payload = envelope.signature_payload(signature.len());
                validate_signature_size(payload.len())?;
                match self.verifier.verify(public_key, &payload, signature) {
                    Ok(true) => SignatureStatus::Verified,
                    // Signature bytes that fail verification or cannot even
                    // be parsed are the same thing to the caller: an
                    // unverifiable signature. A malformed verifier key is
                    // still a caller error and propagates.
                    Ok(false) | Err(SigError::MalformedSignature { .. }) => {
                        if require_signature {
                            return Err(EnvelopeError::SignatureInvalid);
                        }
                        warn!("envelope signature failed verification; decrypting anyway");
                        SignatureStatus::Failed
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        // 4. Decapsulate and re-derive the AEAD key
        let kem = kem_for(envelope.flags.kem());
        let session_secret = kem.decapsulate(&envelope.kem_ciphertext, recipient_secret_key)?;
        let session_key = derive_session_key(&session_secret)?;
        drop(session_secret);

        // 5. Open (unconditional terminal gate)
        let cipher = cipher_for(envelope.flags.aead());
        let plaintext = cipher
            .open(&session_key, &envelope.nonce, &envelope.cipher_body, &envelope.aead_tag)
            .map_err(|e| match e {
                AeadError::TagVerificationFailed => EnvelopeError::Authentication,
                other => EnvelopeError::Encryption(other),
            })?;

        Ok(Decrypted { plaintext, signature: signature_status })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::encrypt::HybridEncryptor;
    use crate::suite::EnvelopeSuite;
    use seal_primitives::{MlKemKem, MlKemLevel};
    use seal_types::{AeadAlgorithm, KemAlgorithm};

    fn kem_keys() -> (Vec<u8>, Vec<u8>) {
        let (pk, sk) = MlKemKem::generate_keypair(MlKemLevel::MlKem768).unwrap();
        (pk, sk.to_vec())
    }

    fn sig_keys() -> (Vec<u8>, Vec<u8>) {
        let (pk, sk) = Dilithium5Scheme.generate_keypair().unwrap();
        (pk, sk.to_vec())
    }

    #[test]
    fn test_round_trip_unsigned() {
        let (pk, sk) = kem_keys();
        let bytes = HybridEncryptor::default().encrypt(b"hello world", &pk, None).unwrap();

        let out = HybridDecryptor::new().decrypt(&bytes, &sk, None, false).unwrap();
        assert_eq!(out.plaintext, b"hello world");
        assert_eq!(out.signature, SignatureStatus::NotPresent);
    }

    #[test]
    fn test_round_trip_signed_and_verified() {
        let (pk, sk) = kem_keys();
        let (spk, ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed payload", &pk, Some(&ssk)).unwrap();

        let out = HybridDecryptor::new().decrypt(&bytes, &sk, Some(&spk), true).unwrap();
        assert_eq!(out.plaintext, b"signed payload");
        assert_eq!(out.signature, SignatureStatus::Verified);
    }

    #[test]
    fn test_round_trip_all_suites() {
        let suites = [
            EnvelopeSuite::new(KemAlgorithm::MlKem768, AeadAlgorithm::Aes256Gcm),
            EnvelopeSuite::new(KemAlgorithm::MlKem768, AeadAlgorithm::ChaCha20Poly1305),
            EnvelopeSuite::new(KemAlgorithm::MlKem1024, AeadAlgorithm::Aes256Gcm),
            EnvelopeSuite::new(KemAlgorithm::MlKem1024, AeadAlgorithm::ChaCha20Poly1305),
        ];
        for suite in suites {
            let level = match suite.kem {
                KemAlgorithm::MlKem768 => MlKemLevel::MlKem768,
                KemAlgorithm::MlKem1024 => MlKemLevel::MlKem1024,
            };
            let (pk, sk) = MlKemKem::generate_keypair(level).unwrap();
            let bytes = HybridEncryptor::new(suite).encrypt(b"suite check", &pk, None).unwrap();
            let out = HybridDecryptor::new().decrypt(&bytes, &sk, None, false).unwrap();
            assert_eq!(out.plaintext, b"suite check");
        }
    }

    #[test]
    fn test_unsigned_with_enforcement_rejected() {
        let (pk, sk) = kem_keys();
        let (spk, _ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"unsigned", &pk, None).unwrap();

        let err = HybridDecryptor::new().decrypt(&bytes, &sk, Some(&spk), true).unwrap_err();
        assert!(matches!(err, EnvelopeError::SignatureRequired));
    }

    #[test]
    fn test_signed_without_verifier_key_under_enforcement_rejected() {
        let (pk, sk) = kem_keys();
        let (_spk, ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed", &pk, Some(&ssk)).unwrap();

        let err = HybridDecryptor::new().decrypt(&bytes, &sk, None, true).unwrap_err();
        assert!(matches!(err, EnvelopeError::SignatureRequired));
    }

    #[test]
    fn test_signed_without_verifier_key_reports_not_checked() {
        let (pk, sk) = kem_keys();
        let (_spk, ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed", &pk, Some(&ssk)).unwrap();

        let out = HybridDecryptor::new().decrypt(&bytes, &sk, None, false).unwrap();
        assert_eq!(out.plaintext, b"signed");
        assert_eq!(out.signature, SignatureStatus::NotChecked);
    }

    #[test]
    fn test_wrong_signer_key_fails_open_without_enforcement() {
        let (pk, sk) = kem_keys();
        let (_spk, ssk) = sig_keys();
        let (other_spk, _other_ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed", &pk, Some(&ssk)).unwrap();

        // Decrypt-then-warn: plaintext is released, status says Failed.
        let out = HybridDecryptor::new().decrypt(&bytes, &sk, Some(&other_spk), false).unwrap();
        assert_eq!(out.plaintext, b"signed");
        assert_eq!(out.signature, SignatureStatus::Failed);
    }

    #[test]
    fn test_wrong_signer_key_under_enforcement_rejected() {
        let (pk, sk) = kem_keys();
        let (_spk, ssk) = sig_keys();
        let (other_spk, _other_ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed", &pk, Some(&ssk)).unwrap();

        let err =
            HybridDecryptor::new().decrypt(&bytes, &sk, Some(&other_spk), true).unwrap_err();
        assert!(matches!(err, EnvelopeError::SignatureInvalid));
    }

    #[test]
    fn test_unparsable_signature_fails_open_without_enforcement() {
        let (pk, sk) = kem_keys();
        let (spk, ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed", &pk, Some(&ssk)).unwrap();

        // Rewrite the signature section to garbage of the wrong length.
        // The envelope still parses; the signature just cannot verify.
        let mut envelope = crate::codec::Envelope::decode(&bytes).unwrap();
        envelope.signature = Some(vec![0u8; 8]);
        let rewritten = envelope.encode();

        let out = HybridDecryptor::new().decrypt(&rewritten, &sk, Some(&spk), false).unwrap();
        assert_eq!(out.plaintext, b"signed");
        assert_eq!(out.signature, SignatureStatus::Failed);
    }

    #[test]
    fn test_unparsable_signature_under_enforcement_rejected() {
        let (pk, sk) = kem_keys();
        let (spk, ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed", &pk, Some(&ssk)).unwrap();

        let mut envelope = crate::codec::Envelope::decode(&bytes).unwrap();
        envelope.signature = Some(vec![0u8; 8]);
        let rewritten = envelope.encode();

        let err = HybridDecryptor::new().decrypt(&rewritten, &sk, Some(&spk), true).unwrap_err();
        assert!(matches!(err, EnvelopeError::SignatureInvalid));
    }

    #[test]
    fn test_malformed_verifier_key_is_caller_error() {
        let (pk, sk) = kem_keys();
        let (_spk, ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"signed", &pk, Some(&ssk)).unwrap();

        let bad_key = [0u8; 8];
        let err =
            HybridDecryptor::new().decrypt(&bytes, &sk, Some(&bad_key[..]), false).unwrap_err();
        assert!(matches!(err, EnvelopeError::Signing(SigError::MalformedPublicKey { .. })));
    }

    #[test]
    fn test_tampered_body_fails_authentication() {
        let (pk, sk) = kem_keys();
        let mut bytes = HybridEncryptor::default().encrypt(b"integrity", &pk, None).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;

        let err = HybridDecryptor::new().decrypt(&bytes, &sk, None, false).unwrap_err();
        assert!(matches!(err, EnvelopeError::Authentication));
    }

    #[test]
    fn test_tampered_tag_fails_authentication() {
        let (pk, sk) = kem_keys();
        let mut bytes = HybridEncryptor::default().encrypt(b"integrity", &pk, None).unwrap();
        // Tag starts right after header + KEM ciphertext.
        let tag_offset = crate::codec::HEADER_LEN + 1088;
        bytes[tag_offset] ^= 0x01;

        let err = HybridDecryptor::new().decrypt(&bytes, &sk, None, false).unwrap_err();
        assert!(matches!(err, EnvelopeError::Authentication));
    }

    #[test]
    fn test_tampered_header_breaks_signature() {
        let (pk, sk) = kem_keys();
        let (spk, ssk) = sig_keys();
        let bytes = HybridEncryptor::default().encrypt(b"covered", &pk, Some(&ssk)).unwrap();

        // Flip the AEAD-variant flag bit. The signature covers the header,
        // so verification must fail before any cipher work happens.
        let mut tampered = bytes;
        tampered[4] ^= 0x04;
        let err = HybridDecryptor::new().decrypt(&tampered, &sk, Some(&spk), true).unwrap_err();
        assert!(matches!(err, EnvelopeError::SignatureInvalid));
    }

    #[test]
    fn test_wrong_recipient_key_fails_authentication() {
        let (pk, _sk) = kem_keys();
        let (_pk2, sk2) = kem_keys();
        let bytes = HybridEncryptor::default().encrypt(b"wrong door", &pk, None).unwrap();

        // ML-KEM implicit rejection yields a wrong secret; the AEAD gate
        // catches it.
        let err = HybridDecryptor::new().decrypt(&bytes, &sk2, None, false).unwrap_err();
        assert!(matches!(err, EnvelopeError::Authentication));
    }

    #[test]
    fn test_garbage_input_is_format_error() {
        let (_pk, sk) = kem_keys();
        let err = HybridDecryptor::new().decrypt(b"???", &sk, None, false).unwrap_err();
        assert!(matches!(err, EnvelopeError::Format(_)));
    }
}
