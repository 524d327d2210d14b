//! Session secrets established by key encapsulation.

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::kem::KemError;

/// The 32-byte shared secret established through key encapsulation.
///
/// One `SessionSecret` protects exactly one envelope: it is derived into the
/// AEAD key and then dropped.
///
/// # Security Note
/// - Clone is intentionally NOT implemented to prevent copies of secret material
/// - The field is private; use the provided accessors
/// - Data is automatically zeroized on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionSecret {
    data: [u8; 32],
}

impl std::fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSecret").field("data", &"[REDACTED]").finish()
    }
}

impl SessionSecret {
    /// Creates a new session secret from bytes.
    #[must_use]
    pub fn new(data: [u8; 32]) -> Self {
        Self { data }
    }

    /// Creates a session secret from a slice.
    ///
    /// # Errors
    /// Returns an error if the slice is not exactly 32 bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, KemError> {
        if data.len() != 32 {
            return Err(KemError::InvalidSharedSecretLength { expected: 32, actual: data.len() });
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(data);
        Ok(Self { data: bytes })
    }

    /// Returns a reference to the secret bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl ConstantTimeEq for SessionSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data.ct_eq(&other.data)
    }
}

impl PartialEq for SessionSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SessionSecret {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_comparison() {
        let ss1 = SessionSecret::new([1u8; 32]);
        let ss2 = SessionSecret::new([1u8; 32]);
        let ss3 = SessionSecret::new([2u8; 32]);

        assert_eq!(ss1, ss2);
        assert_ne!(ss1, ss3);
        assert!(bool::from(ss1.ct_eq(&ss2)));
        assert!(!bool::from(ss1.ct_eq(&ss3)));
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(SessionSecret::from_slice(&[0u8; 31]).is_err());
        assert!(SessionSecret::from_slice(&[0u8; 33]).is_err());
        assert!(SessionSecret::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let ss = SessionSecret::new([0xAB; 32]);
        let dbg = format!("{:?}", ss);
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains("171"));
    }
}
