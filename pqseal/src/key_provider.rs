//! On-disk key storage.
//!
//! The envelope core performs no I/O; key material reaches it through the
//! [`KeyProvider`] seam. [`FileKeyProvider`] is the bundled implementation:
//! one directory per user holding the four key files
//!
//! ```text
//! <root>/<user>/<user>_kem_public.key
//! <root>/<user>/<user>_kem_private.key
//! <root>/<user>/<user>_dss_public.key
//! <root>/<user>/<user>_dss_private.key
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zeroize::Zeroizing;

use crate::keygen::{generate_kem_keypair, generate_signing_keypair};
use seal_primitives::{KemError, SigError};
use seal_types::KemAlgorithm;

/// Errors from key storage operations.
#[derive(Debug, Error)]
pub enum KeyProviderError {
    /// A key file could not be read or written.
    #[error("Key I/O failed for '{path}': {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// KEM key generation failed.
    #[error("KEM key generation failed: {0}")]
    Kem(#[from] KemError),

    /// Signing key generation failed.
    #[error("Signing key generation failed: {0}")]
    Sig(#[from] SigError),
}

/// A source of serialized envelope keys.
pub trait KeyProvider {
    /// Loads a user's ML-KEM public key.
    ///
    /// # Errors
    /// Returns an error if the key cannot be loaded.
    fn load_public_kem_key(&self, user_id: &str) -> Result<Vec<u8>, KeyProviderError>;

    /// Loads a user's ML-KEM secret key.
    ///
    /// # Errors
    /// Returns an error if the key cannot be loaded.
    fn load_private_kem_key(&self, user_id: &str) -> Result<Zeroizing<Vec<u8>>, KeyProviderError>;

    /// Loads a user's signing public key.
    ///
    /// # Errors
    /// Returns an error if the key cannot be loaded.
    fn load_public_signing_key(&self, user_id: &str) -> Result<Vec<u8>, KeyProviderError>;

    /// Loads a user's signing secret key.
    ///
    /// # Errors
    /// Returns an error if the key cannot be loaded.
    fn load_private_signing_key(
        &self,
        user_id: &str,
    ) -> Result<Zeroizing<Vec<u8>>, KeyProviderError>;
}

/// Directory-backed key storage.
#[derive(Debug, Clone)]
pub struct FileKeyProvider {
    root: PathBuf,
}

impl FileKeyProvider {
    /// Creates a provider rooted at `root`. The directory is created lazily
    /// when keys are first generated.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory keys are stored under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, user_id: &str, suffix: &str) -> PathBuf {
        self.root.join(user_id).join(format!("{user_id}_{suffix}.key"))
    }

    fn read_key(&self, path: PathBuf) -> Result<Vec<u8>, KeyProviderError> {
        fs::read(&path).map_err(|source| KeyProviderError::Io { path, source })
    }

    fn write_key(&self, path: PathBuf, bytes: &[u8]) -> Result<(), KeyProviderError> {
        fs::write(&path, bytes).map_err(|source| KeyProviderError::Io { path, source })
    }

    /// Generates and stores a full key set (KEM + signing) for a user.
    ///
    /// Creates `<root>/<user_id>/` and writes the four key files.
    ///
    /// # Errors
    /// Returns an error if key generation fails or any file cannot be
    /// written.
    pub fn generate_user_keys(
        &self,
        user_id: &str,
        kem_algorithm: KemAlgorithm,
    ) -> Result<(), KeyProviderError> {
        let user_dir = self.root.join(user_id);
        fs::create_dir_all(&user_dir)
            .map_err(|source| KeyProviderError::Io { path: user_dir.clone(), source })?;

        let (kem_pk, kem_sk) = generate_kem_keypair(kem_algorithm)?;
        let (dss_pk, dss_sk) = generate_signing_keypair()?;

        self.write_key(self.key_path(user_id, "kem_public"), &kem_pk)?;
        self.write_key(self.key_path(user_id, "kem_private"), &kem_sk)?;
        self.write_key(self.key_path(user_id, "dss_public"), &dss_pk)?;
        self.write_key(self.key_path(user_id, "dss_private"), &dss_sk)?;

        Ok(())
    }
}

impl KeyProvider for FileKeyProvider {
    fn load_public_kem_key(&self, user_id: &str) -> Result<Vec<u8>, KeyProviderError> {
        self.read_key(self.key_path(user_id, "kem_public"))
    }

    fn load_private_kem_key(&self, user_id: &str) -> Result<Zeroizing<Vec<u8>>, KeyProviderError> {
        self.read_key(self.key_path(user_id, "kem_private")).map(Zeroizing::new)
    }

    fn load_public_signing_key(&self, user_id: &str) -> Result<Vec<u8>, KeyProviderError> {
        self.read_key(self.key_path(user_id, "dss_public"))
    }

    fn load_private_signing_key(
        &self,
        user_id: &str,
    ) -> Result<Zeroizing<Vec<u8>>, KeyProviderError> {
        self.read_key(self.key_path(user_id, "dss_private")).map(Zeroizing::new)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_load_user_keys() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileKeyProvider::new(dir.path());

        provider.generate_user_keys("alice", KemAlgorithm::MlKem768).unwrap();

        assert_eq!(provider.load_public_kem_key("alice").unwrap().len(), 1184);
        assert_eq!(provider.load_private_kem_key("alice").unwrap().len(), 2400);
        assert_eq!(provider.load_public_signing_key("alice").unwrap().len(), 2592);
        assert_eq!(provider.load_private_signing_key("alice").unwrap().len(), 4864);
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileKeyProvider::new(dir.path());

        provider.generate_user_keys("bob", KemAlgorithm::MlKem768).unwrap();

        for suffix in ["kem_public", "kem_private", "dss_public", "dss_private"] {
            let path = dir.path().join("bob").join(format!("bob_{suffix}.key"));
            assert!(path.exists(), "missing {path:?}");
        }
    }

    #[test]
    fn test_missing_user_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileKeyProvider::new(dir.path());

        let err = provider.load_public_kem_key("nobody").unwrap_err();
        assert!(matches!(err, KeyProviderError::Io { .. }));
    }
}
