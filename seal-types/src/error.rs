//! Error types for pure-Rust type operations.

use thiserror::Error;

/// Errors arising from pure-Rust type parsing and validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TypeError {
    /// A reserved bit was set in the envelope flags byte.
    #[error("Reserved flag bit set: {0:#04x}")]
    ReservedFlagBit(u8),

    /// A value was outside its valid range.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// A specialized Result type for pure-Rust type operations.
pub type Result<T> = std::result::Result<T, TypeError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypeError::ReservedFlagBit(0x88);
        assert!(format!("{}", err).contains("0x88"));

        let err = TypeError::InvalidValue("bad".to_string());
        assert!(format!("{}", err).contains("bad"));
    }
}
