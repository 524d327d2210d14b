//! Envelope parsing and serialization.
//!
//! This module is pure framing: no randomness, no cryptography. Decoding
//! never mutates its input, and decoding the same bytes twice yields
//! identical structures.

use seal_primitives::aead::{Nonce, Tag, NONCE_LEN, TAG_LEN};
use seal_types::AlgorithmFlags;

use crate::error::FormatError;

/// Magic bytes opening every envelope.
pub const MAGIC: [u8; 4] = *b"PQC1";

/// Fixed header length in bytes: magic(4) + flags(1) + three u32 length
/// fields(12) + nonce(12).
pub const HEADER_LEN: usize = 29;

/// A parsed envelope.
///
/// The header length fields are not stored: they are recomputed from the
/// sections on encode, so an `Envelope` cannot express an inconsistent
/// layout. The signature-present flag bit is likewise derived from
/// `signature` when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Algorithm flags.
    pub flags: AlgorithmFlags,
    /// AEAD nonce.
    pub nonce: Nonce,
    /// KEM ciphertext protecting the session key.
    pub kem_ciphertext: Vec<u8>,
    /// AEAD authentication tag over the cipher body.
    pub aead_tag: Tag,
    /// Detached signature over the envelope, if present.
    pub signature: Option<Vec<u8>>,
    /// AEAD-encrypted body. May be empty.
    pub cipher_body: Vec<u8>,
}

impl Envelope {
    /// Serializes the envelope to wire bytes.
    ///
    /// Deterministic: the same envelope always encodes to the same bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let sig_len = self.signature.as_ref().map_or(0, Vec::len);
        let mut out = Vec::with_capacity(
            HEADER_LEN + self.kem_ciphertext.len() + TAG_LEN + sig_len + self.cipher_body.len(),
        );
        self.write_header(&mut out, sig_len);
        out.extend_from_slice(&self.kem_ciphertext);
        out.extend_from_slice(&self.aead_tag);
        if let Some(sig) = &self.signature {
            out.extend_from_slice(sig);
        }
        out.extend_from_slice(&self.cipher_body);
        out
    }

    /// Builds the byte string a signature covers.
    ///
    /// The payload is the full header with the signature length field set to
    /// `sig_len` and the signature-present bit set, followed by the KEM
    /// ciphertext, the AEAD tag, and the cipher body. The signature bytes
    /// themselves are never part of the payload; `sig_len` can therefore be
    /// filled in before signing because signature lengths are fixed per
    /// scheme.
    #[must_use]
    pub fn signature_payload(&self, sig_len: usize) -> Vec<u8> {
        let mut payload = Vec::with_capacity(
            HEADER_LEN + self.kem_ciphertext.len() + TAG_LEN + self.cipher_body.len(),
        );
        self.write_header(&mut payload, sig_len);
        payload.extend_from_slice(&self.kem_ciphertext);
        payload.extend_from_slice(&self.aead_tag);
        payload.extend_from_slice(&self.cipher_body);
        payload
    }

    fn write_header(&self, out: &mut Vec<u8>, sig_len: usize) {
        let signed = sig_len > 0;
        out.extend_from_slice(&MAGIC);
        out.push(self.flags.with_signed(signed).as_byte());
        out.extend_from_slice(&(self.kem_ciphertext.len() as u32).to_be_bytes());
        out.extend_from_slice(&(TAG_LEN as u32).to_be_bytes());
        out.extend_from_slice(&(sig_len as u32).to_be_bytes());
        out.extend_from_slice(&self.nonce);
    }

    /// Parses an envelope from wire bytes.
    ///
    /// # Errors
    ///
    /// - [`FormatError::Truncated`] if the input is shorter than the header
    ///   or than the lengths the header declares
    /// - [`FormatError::BadMagic`] if the magic bytes are wrong
    /// - [`FormatError::Malformed`] if the flags byte has reserved bits set,
    ///   the tag length is not 16, or the signature length contradicts the
    ///   signature-present flag
    pub fn decode(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < HEADER_LEN {
            return Err(FormatError::Truncated { needed: HEADER_LEN, have: bytes.len() });
        }
        if bytes[0..4] != MAGIC {
            return Err(FormatError::BadMagic);
        }

        let flags = AlgorithmFlags::from_byte(bytes[4])
            .map_err(|_e| FormatError::Malformed("reserved flag bits set"))?;

        let kem_ct_len = read_u32(bytes, 5) as usize;
        let tag_len = read_u32(bytes, 9) as usize;
        let sig_len = read_u32(bytes, 13) as usize;

        if tag_len != TAG_LEN {
            return Err(FormatError::Malformed("tag length must be 16"));
        }
        if sig_len > 0 && !flags.signed() {
            return Err(FormatError::Malformed("signature length set without signature flag"));
        }
        if flags.signed() && sig_len == 0 {
            return Err(FormatError::Malformed("signature flag set without signature length"));
        }

        let needed = HEADER_LEN
            .checked_add(kem_ct_len)
            .and_then(|n| n.checked_add(tag_len))
            .and_then(|n| n.checked_add(sig_len))
            .ok_or(FormatError::Malformed("section lengths overflow"))?;
        if bytes.len() < needed {
            return Err(FormatError::Truncated { needed, have: bytes.len() });
        }

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[17..29]);

        let mut offset = HEADER_LEN;
        let kem_ciphertext = bytes[offset..offset + kem_ct_len].to_vec();
        offset += kem_ct_len;

        let mut aead_tag = [0u8; TAG_LEN];
        aead_tag.copy_from_slice(&bytes[offset..offset + tag_len]);
        offset += tag_len;

        let signature = if sig_len > 0 {
            let sig = bytes[offset..offset + sig_len].to_vec();
            offset += sig_len;
            Some(sig)
        } else {
            None
        };

        // Everything after the declared sections is the cipher body.
        let cipher_body = bytes[offset..].to_vec();

        Ok(Self { flags, nonce, kem_ciphertext, aead_tag, signature, cipher_body })
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_be_bytes(buf)
}
