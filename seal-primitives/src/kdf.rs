//! HKDF-SHA256 session-key derivation.
//!
//! The KEM shared secret is never used as an AEAD key directly. It always
//! passes through HKDF-SHA256 with a fixed domain-separation label, so the
//! AEAD key is bound to this envelope format and a future format revision
//! (or another protocol reusing the same KEM keys) derives unrelated keys.

use aws_lc_rs::hkdf::{KeyType, Salt, HKDF_SHA256};
use zeroize::Zeroizing;

use crate::secret::SessionSecret;

/// Derived AEAD key length in bytes.
pub const SESSION_KEY_LEN: usize = 32;

/// Domain-separation label for envelope key derivation.
const KDF_INFO: &[u8] = b"PQSeal-Envelope-v1";

/// Error types for key derivation.
#[derive(Debug, thiserror::Error)]
pub enum KdfError {
    /// HKDF expansion failed.
    #[error("HKDF expansion failed")]
    ExpandFailed,
}

/// Custom output length type for aws-lc-rs HKDF.
struct HkdfOutputLen(usize);

impl KeyType for HkdfOutputLen {
    fn len(&self) -> usize {
        self.0
    }
}

/// Derives the 32-byte AEAD key from a KEM session secret.
///
/// HKDF-SHA256 with an empty salt and a fixed info label. The output is
/// wrapped in `Zeroizing` so it is wiped once the AEAD call completes.
///
/// # Errors
///
/// Returns an error if HKDF expansion fails.
pub fn derive_session_key(
    secret: &SessionSecret,
) -> Result<Zeroizing<[u8; SESSION_KEY_LEN]>, KdfError> {
    let salt = Salt::new(HKDF_SHA256, &[]);
    let prk = salt.extract(secret.as_bytes());
    let info_refs: [&[u8]; 1] = [KDF_INFO];
    let okm =
        prk.expand(&info_refs, HkdfOutputLen(SESSION_KEY_LEN)).map_err(|_e| KdfError::ExpandFailed)?;

    let mut key = Zeroizing::new([0u8; SESSION_KEY_LEN]);
    okm.fill(&mut *key).map_err(|_e| KdfError::ExpandFailed)?;

    Ok(key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let ss1 = SessionSecret::new([0x11; 32]);
        let ss2 = SessionSecret::new([0x11; 32]);
        let k1 = derive_session_key(&ss1).unwrap();
        let k2 = derive_session_key(&ss2).unwrap();
        assert_eq!(*k1, *k2);
    }

    #[test]
    fn test_different_secrets_derive_different_keys() {
        let k1 = derive_session_key(&SessionSecret::new([0x11; 32])).unwrap();
        let k2 = derive_session_key(&SessionSecret::new([0x22; 32])).unwrap();
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn test_derived_key_differs_from_secret() {
        let ss = SessionSecret::new([0x33; 32]);
        let key = derive_session_key(&ss).unwrap();
        assert_ne!(key.as_slice(), ss.as_bytes());
    }
}
