//! AES-256-GCM via aws-lc-rs.

use aws_lc_rs::aead::{Aad, LessSafeKey, Nonce as AwsNonce, UnboundKey, AES_256_GCM};

use super::{AeadCipher, AeadError, Nonce, Tag, KEY_LEN, TAG_LEN};

/// AES-256-GCM cipher (NIST SP 800-38D).
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256GcmCipher;

impl AeadCipher for Aes256GcmCipher {
    fn seal(
        &self,
        key: &[u8; KEY_LEN],
        nonce: &Nonce,
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Tag), AeadError> {
        let unbound_key = UnboundKey::new(&AES_256_GCM, key).map_err(|_e| {
            AeadError::EncryptionFailed("Failed to create AES-256-GCM key".to_string())
        })?;
        let sealing_key = LessSafeKey::new(unbound_key);
        let aws_nonce = AwsNonce::assume_unique_for_key(*nonce);

        // Encrypt in-place: plaintext becomes ciphertext + tag
        let mut in_out = plaintext.to_vec();
        sealing_key
            .seal_in_place_append_tag(aws_nonce, Aad::empty(), &mut in_out)
            .map_err(|_e| AeadError::EncryptionFailed("AES-GCM encryption failed".to_string()))?;

        // The tag is the last 16 bytes of the sealed buffer
        let ct_len = in_out.len().saturating_sub(TAG_LEN);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&in_out[ct_len..]);
        in_out.truncate(ct_len);

        Ok((in_out, tag))
    }

    fn open(
        &self,
        key: &[u8; KEY_LEN],
        nonce: &Nonce,
        ciphertext: &[u8],
        tag: &Tag,
    ) -> Result<Vec<u8>, AeadError> {
        let unbound_key =
            UnboundKey::new(&AES_256_GCM, key).map_err(|_e| AeadError::InvalidKeyLength)?;
        let opening_key = LessSafeKey::new(unbound_key);
        let aws_nonce = AwsNonce::assume_unique_for_key(*nonce);

        // aws-lc-rs expects ciphertext || tag in one buffer
        let mut in_out = Vec::with_capacity(ciphertext.len() + TAG_LEN);
        in_out.extend_from_slice(ciphertext);
        in_out.extend_from_slice(tag);

        let plaintext = opening_key
            .open_in_place(aws_nonce, Aad::empty(), &mut in_out)
            .map_err(|_e| AeadError::TagVerificationFailed)?;

        Ok(plaintext.to_vec())
    }
}
