//! Error types for the blowcrypt library.

use std::fmt;

/// Errors produced by the blowcrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlowfishError {
    /// Key length is zero or exceeds 256 bytes.
    InvalidKeyLength,
    /// Ciphertext length is not a multiple of the 8-byte block size.
    InvalidCiphertextLength,
}

impl fmt::Display for BlowfishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlowfishError::InvalidKeyLength => {
                write!(f, "Key length must be between 1 and 256 bytes")
            }
            BlowfishError::InvalidCiphertextLength => {
                write!(f, "Ciphertext length is not a multiple of 8 bytes")
            }
        }
    }
}

impl std::error::Error for BlowfishError {}
