//! Key generation for envelopes.
//!
//! Keys are returned as serialized bytes so they can be stored through a
//! [`KeyProvider`](crate::KeyProvider) or transmitted directly. Secret
//! halves are wrapped in `Zeroizing` and wiped on drop.

use zeroize::Zeroizing;

use seal_primitives::{KemError, MlKemKem, MlKemLevel, SigError};
use seal_primitives::{Dilithium5Scheme, SignatureScheme};
use seal_types::KemAlgorithm;

/// Generates an ML-KEM keypair for envelope encryption.
///
/// Returns `(public_key_bytes, secret_key_bytes)`.
///
/// # Errors
/// Returns an error if key generation fails.
pub fn generate_kem_keypair(
    algorithm: KemAlgorithm,
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), KemError> {
    let level = match algorithm {
        KemAlgorithm::MlKem768 => MlKemLevel::MlKem768,
        KemAlgorithm::MlKem1024 => MlKemLevel::MlKem1024,
    };
    MlKemKem::generate_keypair(level)
}

/// Generates a Dilithium5 keypair for envelope signing.
///
/// Returns `(public_key_bytes, secret_key_bytes)`.
///
/// # Errors
/// Returns an error if key generation fails.
pub fn generate_signing_keypair() -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), SigError> {
    Dilithium5Scheme.generate_keypair()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_kem_keypair_sizes() {
        let (pk, sk) = generate_kem_keypair(KemAlgorithm::MlKem768).unwrap();
        assert_eq!(pk.len(), 1184);
        assert_eq!(sk.len(), 2400);

        let (pk, sk) = generate_kem_keypair(KemAlgorithm::MlKem1024).unwrap();
        assert_eq!(pk.len(), 1568);
        assert_eq!(sk.len(), 3168);
    }

    #[test]
    fn test_signing_keypair_sizes() {
        let (pk, sk) = generate_signing_keypair().unwrap();
        assert_eq!(pk.len(), 2592);
        assert_eq!(sk.len(), 4864);
    }

    #[test]
    fn test_keypairs_are_unique() {
        let (pk1, _) = generate_kem_keypair(KemAlgorithm::MlKem768).unwrap();
        let (pk2, _) = generate_kem_keypair(KemAlgorithm::MlKem768).unwrap();
        assert_ne!(pk1, pk2);
    }
}
