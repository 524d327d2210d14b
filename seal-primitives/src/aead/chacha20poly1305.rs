//! ChaCha20-Poly1305 via aws-lc-rs.

use aws_lc_rs::aead::{Aad, LessSafeKey, Nonce as AwsNonce, UnboundKey, CHACHA20_POLY1305};

use super::{AeadCipher, AeadError, Nonce, Tag, KEY_LEN, TAG_LEN};

/// ChaCha20-Poly1305 cipher (RFC 8439).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaCha20Poly1305Cipher;

impl AeadCipher for ChaCha20Poly1305Cipher {
    fn seal(
        &self,
        key: &[u8; KEY_LEN],
        nonce: &Nonce,
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, Tag), AeadError> {
        let unbound_key = UnboundKey::new(&CHACHA20_POLY1305, key).map_err(|_e| {
            AeadError::EncryptionFailed("Failed to create ChaCha20-Poly1305 key".to_string())
        })?;
        let sealing_key = LessSafeKey::new(unbound_key);
        let aws_nonce = AwsNonce::assume_unique_for_key(*nonce);

        let mut in_out = plaintext.to_vec();
        sealing_key.seal_in_place_append_tag(aws_nonce, Aad::empty(), &mut in_out).map_err(
            |_e| AeadError::EncryptionFailed("ChaCha20-Poly1305 encryption failed".to_string()),
        )?;

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
            UnboundKey::new(&CHACHA20_POLY1305, key).map_err(|_e| AeadError::InvalidKeyLength)?;
        let opening_key = LessSafeKey::new(unbound_key);
        let aws_nonce = AwsNonce::assume_unique_for_key(*nonce);

        let mut in_out = Vec::with_capacity(ciphertext.len() + TAG_LEN);
        in_out.extend_from_slice(ciphertext);
        in_out.extend_from_slice(tag);

        let plaintext = opening_key
            .open_in_place(aws_nonce, Aad::empty(), &mut in_out)
            .map_err(|_e| AeadError::TagVerificationFailed)?;

        Ok(plaintext.to_vec())
    }
}
