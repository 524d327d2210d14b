//! The envelope flags byte.
//!
//! A single byte in the envelope header records which algorithms produced
//! the envelope and whether a signature section is present:
//!
//! | Bit | Meaning |
//! |-----|---------|
//! | 0   | KEM variant: clear = ML-KEM-768, set = ML-KEM-1024 |
//! | 1   | Signature section present |
//! | 2   | AEAD variant: clear = AES-256-GCM, set = ChaCha20-Poly1305 |
//! | 3–7 | Reserved, must be zero |
//!
//! Parsing rejects any byte with a reserved bit set so that future
//! assignments cannot be silently misread by older decoders.

use crate::error::{Result, TypeError};

const FLAG_KEM_1024: u8 = 0b0000_0001;
const FLAG_SIGNED: u8 = 0b0000_0010;
const FLAG_AEAD_CHACHA: u8 = 0b0000_0100;
const RESERVED_MASK: u8 = 0b1111_1000;

/// Key encapsulation mechanism used to protect the session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KemAlgorithm {
    /// ML-KEM-768 (FIPS 203, NIST Category 3).
    #[default]
    MlKem768,
    /// ML-KEM-1024 (FIPS 203, NIST Category 5).
    MlKem1024,
}

impl KemAlgorithm {
    /// Human-readable algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MlKem768 => "ML-KEM-768",
            Self::MlKem1024 => "ML-KEM-1024",
        }
    }
}

/// Authenticated cipher used for the envelope body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AeadAlgorithm {
    /// AES-256-GCM.
    #[default]
    Aes256Gcm,
    /// ChaCha20-Poly1305.
    ChaCha20Poly1305,
}

impl AeadAlgorithm {
    /// Human-readable algorithm name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes256Gcm => "AES-256-GCM",
            Self::ChaCha20Poly1305 => "ChaCha20-Poly1305",
        }
    }
}

/// The parsed envelope flags byte.
///
/// Constructed either from its parts at encryption time or parsed from the
/// wire at decryption time. The wire byte is recoverable via
/// [`AlgorithmFlags::as_byte`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmFlags {
    kem: KemAlgorithm,
    aead: AeadAlgorithm,
    signed: bool,
}

impl AlgorithmFlags {
    /// Builds a flags value from its parts.
    #[must_use]
    pub const fn new(kem: KemAlgorithm, aead: AeadAlgorithm, signed: bool) -> Self {
        Self { kem, aead, signed }
    }

    /// Parses a wire flags byte.
    ///
    /// # Errors
    /// Returns [`TypeError::ReservedFlagBit`] if any of bits 3–7 is set.
    pub fn from_byte(byte: u8) -> Result<Self> {
        if byte & RESERVED_MASK != 0 {
            return Err(TypeError::ReservedFlagBit(byte));
        }
        let kem = if byte & FLAG_KEM_1024 != 0 {
            KemAlgorithm::MlKem1024
        } else {
            KemAlgorithm::MlKem768
        };
        let aead = if byte & FLAG_AEAD_CHACHA != 0 {
            AeadAlgorithm::ChaCha20Poly1305
        } else {
            AeadAlgorithm::Aes256Gcm
        };
        Ok(Self { kem, aead, signed: byte & FLAG_SIGNED != 0 })
    }

    /// Encodes the flags as a wire byte.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        let mut byte = 0u8;
        if matches!(self.kem, KemAlgorithm::MlKem1024) {
            byte |= FLAG_KEM_1024;
        }
        if self.signed {
            byte |= FLAG_SIGNED;
        }
        if matches!(self.aead, AeadAlgorithm::ChaCha20Poly1305) {
            byte |= FLAG_AEAD_CHACHA;
        }
        byte
    }

    /// The KEM that protected the session key.
    #[must_use]
    pub const fn kem(self) -> KemAlgorithm {
        self.kem
    }

    /// The AEAD that sealed the body.
    #[must_use]
    pub const fn aead(self) -> AeadAlgorithm {
        self.aead
    }

    /// Whether a signature section is present.
    #[must_use]
    pub const fn signed(self) -> bool {
        self.signed
    }

    /// Returns a copy with the signature-present bit set or cleared.
    #[must_use]
    pub const fn with_signed(self, signed: bool) -> Self {
        Self { kem: self.kem, aead: self.aead, signed }
    }
}

impl Default for AlgorithmFlags {
    fn default() -> Self {
        Self::new(KemAlgorithm::default(), AeadAlgorithm::default(), false)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_byte_is_zero() {
        assert_eq!(AlgorithmFlags::default().as_byte(), 0x00);
    }

    #[test]
    fn test_round_trip_all_valid_bytes() {
        for byte in 0u8..=0x07 {
            let flags = AlgorithmFlags::from_byte(byte).unwrap();
            assert_eq!(flags.as_byte(), byte);
        }
    }

    #[test]
    fn test_reserved_bits_rejected() {
        for byte in [0x08u8, 0x10, 0x20, 0x40, 0x80, 0xFF, 0x09] {
            assert!(matches!(
                AlgorithmFlags::from_byte(byte),
                Err(TypeError::ReservedFlagBit(b)) if b == byte
            ));
        }
    }

    #[test]
    fn test_bit_assignments() {
        let flags = AlgorithmFlags::from_byte(0x01).unwrap();
        assert_eq!(flags.kem(), KemAlgorithm::MlKem1024);
        assert!(!flags.signed());
        assert_eq!(flags.aead(), AeadAlgorithm::Aes256Gcm);

        let flags = AlgorithmFlags::from_byte(0x02).unwrap();
        assert_eq!(flags.kem(), KemAlgorithm::MlKem768);
        assert!(flags.signed());

        let flags = AlgorithmFlags::from_byte(0x04).unwrap();
        assert_eq!(flags.aead(), AeadAlgorithm::ChaCha20Poly1305);
    }

    #[test]
    fn test_with_signed_preserves_algorithms() {
        let flags =
            AlgorithmFlags::new(KemAlgorithm::MlKem1024, AeadAlgorithm::ChaCha20Poly1305, false);
        let signed = flags.with_signed(true);
        assert!(signed.signed());
        assert_eq!(signed.kem(), KemAlgorithm::MlKem1024);
        assert_eq!(signed.aead(), AeadAlgorithm::ChaCha20Poly1305);
        assert_eq!(signed.as_byte(), 0x07);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(KemAlgorithm::MlKem768.name(), "ML-KEM-768");
        assert_eq!(KemAlgorithm::MlKem1024.name(), "ML-KEM-1024");
        assert_eq!(AeadAlgorithm::Aes256Gcm.name(), "AES-256-GCM");
        assert_eq!(AeadAlgorithm::ChaCha20Poly1305.name(), "ChaCha20-Poly1305");
    }
}
