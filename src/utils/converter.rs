//! Byte-to-word conversion utilities.
//!
//! Provides conversion between 4-byte groups and 32-bit words under an
//! explicit byte order, and extraction of individual bytes from a word under
//! an explicit sign interpretation. The sign interpretation replicates the
//! behavior of legacy Java deployments where `byte` is a signed type, so
//! that ciphertext produced by those systems can be reproduced bit-for-bit.

/// Byte order used when combining bytes into words and splitting words back
/// into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Byte 0 occupies the least significant position.
    Little,
    /// Byte 0 occupies the most significant position.
    Big,
}

/// Interpretation applied to a byte extracted from a word before it is used
/// as a substitution-table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignMode {
    /// Bytes are unsigned values 0–255.
    Unsigned,
    /// Bytes are reinterpreted as signed 8-bit values, so 128–255 become
    /// −128..−1. Reproduces the sign-extension defect of legacy Java
    /// implementations, where the missing `& 0xFF` mask turned high bytes
    /// into negative table indices.
    LegacySigned,
}

/// Combines four unsigned bytes into a 32-bit word.
///
/// Bytes are always treated as unsigned 0–255 here; [`SignMode`] applies
/// only to [`extract_byte`].
///
/// # Parameters
/// - `bytes`: The four bytes to combine.
/// - `endianness`: Byte order (little: `bytes[0]` least significant; big:
///   `bytes[0]` most significant).
///
/// # Returns
/// The packed 32-bit word.
pub fn pack_word(bytes: &[u8; 4], endianness: Endianness) -> u32 {
    let mut word: u32 = 0;
    match endianness {
        Endianness::Big => {
            for &b in bytes.iter() {
                word = (word << 8) | b as u32;
            }
        }
        Endianness::Little => {
            for &b in bytes.iter().rev() {
                word = (word << 8) | b as u32;
            }
        }
    }
    word
}

/// Splits a 32-bit word into four bytes.
///
/// Exact inverse of [`pack_word`] for all inputs and both byte orders.
///
/// # Parameters
/// - `word`: The word to split.
/// - `endianness`: Byte order of the output.
///
/// # Returns
/// The four bytes of `word`.
pub fn unpack_word(word: u32, endianness: Endianness) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    match endianness {
        Endianness::Big => {
            for (i, slot) in bytes.iter_mut().enumerate() {
                *slot = (word >> (24 - 8 * i)) as u8;
            }
        }
        Endianness::Little => {
            for (i, slot) in bytes.iter_mut().enumerate() {
                *slot = (word >> (8 * i)) as u8;
            }
        }
    }
    bytes
}

/// Extracts one byte from a word as a substitution-table index.
///
/// Position 0 is the least significant byte. Under [`SignMode::Unsigned`]
/// the result is the raw byte value 0–255. Under [`SignMode::LegacySigned`]
/// the byte is reinterpreted as an 8-bit signed value first, replicating
/// Java's sign extension: bytes ≥ 0x80 become negative indices.
///
/// # Parameters
/// - `word`: The word to extract from.
/// - `pos`: Byte position (0..=3, 0 is least significant).
/// - `sign_mode`: Sign interpretation of the extracted byte.
///
/// # Returns
/// The index value: 0–255 for unsigned, −128..=127 for legacy-signed.
///
/// # Panics
/// Panics if `pos > 3`.
#[inline]
pub fn extract_byte(word: u32, pos: u32, sign_mode: SignMode) -> i32 {
    assert!(pos < 4, "byte position out of range");
    let byte = (word >> (8 * pos)) as u8;
    match sign_mode {
        SignMode::Unsigned => byte as i32,
        SignMode::LegacySigned => byte as i8 as i32,
    }
}
