//! # PQSeal Primitives
//!
//! The cryptographic building blocks behind the PQSeal envelope format:
//!
//! - **kem**: ML-KEM (FIPS 203) key encapsulation via aws-lc-rs, behind the
//!   [`KeyEncapsulator`] trait
//! - **aead**: AES-256-GCM and ChaCha20-Poly1305 via aws-lc-rs, behind the
//!   [`AeadCipher`] trait
//! - **sig**: Dilithium5 detached signatures via pqcrypto, behind the
//!   [`SignatureScheme`] trait
//! - **kdf**: HKDF-SHA256 session-key derivation
//!
//! The traits are object-safe and byte-oriented so that an envelope decoder
//! can pick the concrete algorithm from a parsed flags byte at runtime. All
//! secret material is zeroized on drop and redacted from `Debug` output.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Authenticated encryption for the envelope body.
pub mod aead;
/// HKDF-SHA256 session-key derivation.
pub mod kdf;
/// ML-KEM key encapsulation.
pub mod kem;
/// Session secrets established by the KEM.
pub mod secret;
/// Post-quantum signatures over the envelope.
pub mod sig;

pub use aead::{AeadCipher, AeadError, Nonce, Tag, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_session_key, KdfError, SESSION_KEY_LEN};
pub use kem::{KemError, KeyEncapsulator, MlKemKem, MlKemLevel};
pub use secret::SessionSecret;
pub use sig::{Dilithium5Scheme, SigError, SignatureScheme};
