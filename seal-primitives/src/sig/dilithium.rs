//! Dilithium5 detached signatures via pqcrypto.
//!
//! Dilithium5 is the NIST Security Category 5 parameter set of
//! CRYSTALS-Dilithium, the scheme standardized as ML-DSA (FIPS 204).
//! Signatures are fixed-length, so the envelope header can record the
//! signature length before signing.

use pqcrypto_dilithium::dilithium5;
use pqcrypto_traits::sign::{
    DetachedSignature as _, PublicKey as _, SecretKey as _, VerificationError,
};
use tracing::instrument;
use zeroize::Zeroizing;

use super::{SigError, SignatureScheme};

/// Dilithium5 detached-signature scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dilithium5Scheme;

impl Dilithium5Scheme {
    /// Public key size in bytes.
    #[must_use]
    pub fn public_key_size() -> usize {
        dilithium5::public_key_bytes()
    }

    /// Secret key size in bytes.
    #[must_use]
    pub fn secret_key_size() -> usize {
        dilithium5::secret_key_bytes()
    }

    /// Signature size in bytes.
    #[must_use]
    pub fn signature_size() -> usize {
        dilithium5::signature_bytes()
    }
}

impl SignatureScheme for Dilithium5Scheme {
    #[instrument(level = "debug", skip(self))]
    fn generate_keypair(&self) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), SigError> {
        let (pk, sk) = dilithium5::keypair();
        Ok((pk.as_bytes().to_vec(), Zeroizing::new(sk.as_bytes().to_vec())))
    }

    #[instrument(level = "debug", skip(self, secret_key, message), fields(msg_len = message.len()))]
    fn sign(&self, secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>, SigError> {
        let sk = dilithium5::SecretKey::from_bytes(secret_key).map_err(|_e| {
            SigError::MalformedSecretKey {
                expected: dilithium5::secret_key_bytes(),
                actual: secret_key.len(),
            }
        })?;
        let sig = dilithium5::detached_sign(message, &sk);
        Ok(sig.as_bytes().to_vec())
    }

    #[instrument(level = "debug", skip(self, public_key, message, signature), fields(msg_len = message.len(), sig_len = signature.len()))]
    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SigError> {
        let pk = dilithium5::PublicKey::from_bytes(public_key).map_err(|_e| {
            SigError::MalformedPublicKey {
                expected: dilithium5::public_key_bytes(),
                actual: public_key.len(),
            }
        })?;
        let sig = dilithium5::DetachedSignature::from_bytes(signature).map_err(|_e| {
            SigError::MalformedSignature {
                expected: dilithium5::signature_bytes(),
                actual: signature.len(),
            }
        })?;

        match dilithium5::verify_detached_signature(&sig, message, &pk) {
            Ok(()) => Ok(true),
            Err(VerificationError::InvalidSignature) => Ok(false),
            Err(VerificationError::UnknownVerificationError) => Ok(false),
            Err(_) => Ok(false),
        }
    }

    fn signature_len(&self) -> usize {
        dilithium5::signature_bytes()
    }
}
