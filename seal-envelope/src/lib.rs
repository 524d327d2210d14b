//! # PQSeal Envelope
//!
//! The hybrid post-quantum envelope format: a binary framing that carries an
//! ML-KEM ciphertext protecting a one-time session key, an AEAD-encrypted
//! body, and an optional Dilithium5 signature over the whole envelope.
//!
//! ## Wire layout (big-endian)
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0      | 4    | Magic `PQC1` |
//! | 4      | 1    | Algorithm flags |
//! | 5      | 4    | KEM ciphertext length |
//! | 9      | 4    | AEAD tag length |
//! | 13     | 4    | Signature length (0 if absent) |
//! | 17     | 12   | AEAD nonce |
//! | 29     | var  | KEM ciphertext |
//! | var    | 16   | AEAD tag |
//! | var    | var  | Signature (omitted when length 0) |
//! | var    | var  | AEAD cipher body (remainder) |
//!
//! ## Modules
//!
//! - [`codec`]: pure parsing and serialization of the layout above
//! - [`encrypt`]: [`HybridEncryptor`], plaintext to envelope
//! - [`decrypt`]: [`HybridDecryptor`], envelope to plaintext plus a
//!   [`SignatureStatus`](seal_types::SignatureStatus)
//! - [`error`]: the envelope error taxonomy

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Envelope parsing and serialization.
pub mod codec;
/// Envelope decryption and signature verification.
pub mod decrypt;
/// Envelope encryption and signing.
pub mod encrypt;
/// Error types for envelope operations.
pub mod error;

mod suite;

pub use codec::{Envelope, HEADER_LEN, MAGIC};
pub use decrypt::{Decrypted, HybridDecryptor};
pub use encrypt::HybridEncryptor;
pub use error::{EnvelopeError, FormatError, Result};
pub use suite::EnvelopeSuite;
