//! Signature verification status.

/// Outcome of signature handling for one decrypted envelope.
///
/// Decryption can succeed while the signature story is anything but
/// clear-cut, so the status is reported alongside the plaintext instead of
/// being collapsed into success/failure. Callers that demand provenance
/// should pass `require_signature = true`, which turns every case except
/// `Verified` into an error before plaintext is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureStatus {
    /// The envelope carried no signature section.
    NotPresent,
    /// A signature was present but no verifier key was supplied.
    NotChecked,
    /// The signature verified against the supplied public key.
    Verified,
    /// The signature failed verification. The plaintext is still returned
    /// when enforcement is off, but its provenance is unestablished.
    Failed,
}

impl SignatureStatus {
    /// True only when the signature verified.
    #[must_use]
    pub const fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl std::fmt::Display for SignatureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotPresent => "not present",
            Self::NotChecked => "not checked",
            Self::Verified => "verified",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}
