//! ML-KEM (FIPS 203) key encapsulation via aws-lc-rs.
//!
//! Two parameter sets are supported, matching the variants the envelope
//! flags byte can address:
//!
//! - **ML-KEM-768**: NIST Security Category 3 (AES-192 equivalent)
//!   - Public key: 1184 bytes, secret key: 2400 bytes, ciphertext: 1088 bytes
//! - **ML-KEM-1024**: NIST Security Category 5 (AES-256 equivalent)
//!   - Public key: 1568 bytes, secret key: 3168 bytes, ciphertext: 1568 bytes
//!
//! The shared secret is 32 bytes at both levels.
//!
//! Keys are handled as serialized bytes: public keys from
//! `EncapsulationKey::key_bytes()`, secret keys from
//! `DecapsulationKey::key_bytes()` (available since aws-lc-rs v1.16.0).
//! aws-lc-rs uses its internal FIPS-approved DRBG for key generation and
//! encapsulation randomness.

use aws_lc_rs::kem::{Algorithm as AwsKemAlgorithm, DecapsulationKey, EncapsulationKey};
use tracing::instrument;
use zeroize::Zeroizing;

use super::{KemError, KeyEncapsulator};
use crate::secret::SessionSecret;

/// ML-KEM parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MlKemLevel {
    /// ML-KEM-768: NIST Security Category 3.
    #[default]
    MlKem768,
    /// ML-KEM-1024: NIST Security Category 5.
    MlKem1024,
}

impl MlKemLevel {
    /// Returns the public key size in bytes for this parameter set.
    #[must_use]
    pub const fn public_key_size(self) -> usize {
        match self {
            Self::MlKem768 => 1184,
            Self::MlKem1024 => 1568,
        }
    }

    /// Returns the secret key size in bytes for this parameter set.
    #[must_use]
    pub const fn secret_key_size(self) -> usize {
        match self {
            Self::MlKem768 => 2400,
            Self::MlKem1024 => 3168,
        }
    }

    /// Returns the ciphertext size in bytes for this parameter set.
    #[must_use]
    pub const fn ciphertext_size(self) -> usize {
        match self {
            Self::MlKem768 => 1088,
            Self::MlKem1024 => 1568,
        }
    }

    /// Returns the shared secret size in bytes (32 for both parameter sets).
    #[must_use]
    pub const fn shared_secret_size(self) -> usize {
        32
    }

    /// Returns the parameter set name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MlKem768 => "ML-KEM-768",
            Self::MlKem1024 => "ML-KEM-1024",
        }
    }

    /// Returns the aws-lc-rs algorithm for this parameter set.
    fn as_aws_algorithm(self) -> &'static AwsKemAlgorithm {
        match self {
            Self::MlKem768 => &aws_lc_rs::kem::ML_KEM_768,
            Self::MlKem1024 => &aws_lc_rs::kem::ML_KEM_1024,
        }
    }
}

/// ML-KEM encapsulator over serialized keys.
#[derive(Debug, Clone, Copy)]
pub struct MlKemKem {
    level: MlKemLevel,
}

impl MlKemKem {
    /// Creates an encapsulator for the given parameter set.
    #[must_use]
    pub const fn new(level: MlKemLevel) -> Self {
        Self { level }
    }

    /// The parameter set this encapsulator operates at.
    #[must_use]
    pub const fn level(&self) -> MlKemLevel {
        self.level
    }

    /// Generates an ML-KEM keypair at the given parameter set.
    ///
    /// Returns `(public_key_bytes, secret_key_bytes)`. The secret half is
    /// wrapped in `Zeroizing` so it is wiped when dropped.
    ///
    /// # Errors
    /// Returns an error if key generation or serialization fails.
    #[instrument(level = "debug", fields(level = level.name()))]
    pub fn generate_keypair(level: MlKemLevel) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), KemError> {
        let algorithm = level.as_aws_algorithm();

        let decaps_key = DecapsulationKey::generate(algorithm)
            .map_err(|e| KemError::KeyGeneration(format!("aws-lc-rs key generation: {}", e)))?;

        let encaps_key = decaps_key
            .encapsulation_key()
            .map_err(|e| KemError::KeyGeneration(format!("encapsulation key derivation: {}", e)))?;

        let pk_bytes = encaps_key
            .key_bytes()
            .map_err(|e| KemError::KeyGeneration(format!("public key serialization: {}", e)))?;

        let sk_bytes = decaps_key
            .key_bytes()
            .map_err(|e| KemError::KeyGeneration(format!("secret key serialization: {}", e)))?;

        Ok((pk_bytes.as_ref().to_vec(), Zeroizing::new(sk_bytes.as_ref().to_vec())))
    }

    fn check_public_key(&self, public_key: &[u8]) -> Result<(), KemError> {
        let expected = self.level.public_key_size();
        if public_key.len() != expected {
            return Err(KemError::InvalidKeyLength {
                variant: self.level.name(),
                expected,
                actual: public_key.len(),
                key_type: "public key",
            });
        }
        Ok(())
    }

    fn check_secret_key(&self, secret_key: &[u8]) -> Result<(), KemError> {
        let expected = self.level.secret_key_size();
        if secret_key.len() != expected {
            return Err(KemError::InvalidKeyLength {
                variant: self.level.name(),
                expected,
                actual: secret_key.len(),
                key_type: "secret key",
            });
        }
        Ok(())
    }
}

impl Default for MlKemKem {
    fn default() -> Self {
        Self::new(MlKemLevel::MlKem768)
    }
}

impl KeyEncapsulator for MlKemKem {
    #[instrument(level = "debug", skip(self, public_key), fields(level = self.level.name(), pk_len = public_key.len()))]
    fn encapsulate(&self, public_key: &[u8]) -> Result<(Vec<u8>, SessionSecret), KemError> {
        self.check_public_key(public_key)?;

        let algorithm = self.level.as_aws_algorithm();
        let encaps_key = EncapsulationKey::new(algorithm, public_key)
            .map_err(|_e| KemError::Encapsulation("invalid public key format".to_string()))?;

        let (ciphertext, shared_secret) = encaps_key
            .encapsulate()
            .map_err(|e| KemError::Encapsulation(format!("aws-lc-rs encapsulate: {}", e)))?;

        let secret = SessionSecret::from_slice(shared_secret.as_ref())?;
        Ok((ciphertext.as_ref().to_vec(), secret))
    }

    #[instrument(level = "debug", skip(self, ciphertext, secret_key), fields(level = self.level.name(), ct_len = ciphertext.len()))]
    fn decapsulate(&self, ciphertext: &[u8], secret_key: &[u8]) -> Result<SessionSecret, KemError> {
        self.check_secret_key(secret_key)?;

        let expected_ct = self.level.ciphertext_size();
        if ciphertext.len() != expected_ct {
            return Err(KemError::InvalidCiphertextLength {
                variant: self.level.name(),
                expected: expected_ct,
                actual: ciphertext.len(),
            });
        }

        let algorithm = self.level.as_aws_algorithm();
        let decaps_key = DecapsulationKey::new(algorithm, secret_key).map_err(|e| {
            KemError::Decapsulation(format!("DecapsulationKey reconstruction: {}", e))
        })?;

        let shared_secret = decaps_key
            .decapsulate(ciphertext.into())
            .map_err(|e| KemError::Decapsulation(format!("aws-lc-rs decapsulate: {}", e)))?;

        SessionSecret::from_slice(shared_secret.as_ref())
    }

    fn ciphertext_len(&self) -> usize {
        self.level.ciphertext_size()
    }
}
