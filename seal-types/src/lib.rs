//! # PQSeal Types
//!
//! Pure-Rust domain types for the PQSeal hybrid envelope format.
//!
//! This crate contains all types that have **zero FFI dependencies**:
//! algorithm identifiers, the envelope flags byte, signature verification
//! status, and resource limits. Crates that only need to talk *about*
//! envelopes (rather than produce them) can depend on this without pulling
//! in aws-lc-sys.
//!
//! ## What's Here
//!
//! - **flags**: [`AlgorithmFlags`], [`KemAlgorithm`], [`AeadAlgorithm`]
//! - **status**: [`SignatureStatus`] reported after decryption
//! - **resource_limits**: configurable input-size limits (DoS prevention)
//! - **error**: [`TypeError`] for pure-Rust error conditions

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Error types for pure-Rust operations.
pub mod error;
/// The envelope flags byte and the algorithm identifiers it encodes.
pub mod flags;
/// Resource limits for envelope operations (DoS prevention).
pub mod resource_limits;
/// Signature verification status reported to callers.
pub mod status;

pub use error::{Result, TypeError};
pub use flags::{AeadAlgorithm, AlgorithmFlags, KemAlgorithm};
pub use resource_limits::{ResourceError, ResourceLimits, ResourceLimitsManager};
pub use status::SignatureStatus;
