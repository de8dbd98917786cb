//! Key schedule: derives the full substitution state from a raw key.
//!
//! The schedule is self-referential: after XOR-mixing the key into the
//! P-array seeds, it repeatedly encrypts a running block with the state as
//! currently built and writes each result pair into the next two entries.
//! The fill order (P[0..=17] ascending, then S0, S1, S2, S3, each
//! ascending) is a strict correctness invariant; any deviation breaks
//! compatibility with the published test vectors.

use crate::error::BlowfishError;
use crate::feistel;
use crate::sbox::SBoxState;
use crate::utils::converter::{self, Endianness, SignMode};

/// Minimum accepted key length in bytes.
pub(crate) const MIN_KEY_BYTES: usize = 1;

/// Maximum accepted key length in bytes.
pub(crate) const MAX_KEY_BYTES: usize = 256;

/// Packs the next four key bytes into a word, cycling back to the start of
/// the key on wraparound.
///
/// # Parameters
/// - `key`: The raw key bytes.
/// - `pos`: Running position into the key, updated in place.
/// - `endianness`: Byte order for the packed word.
///
/// # Returns
/// The packed 32-bit key word.
fn next_key_word(key: &[u8], pos: &mut usize, endianness: Endianness) -> u32 {
    let mut quad = [0u8; 4];
    for slot in quad.iter_mut() {
        if *pos >= key.len() {
            *pos = 0;
        }
        *slot = key[*pos];
        *pos += 1;
    }
    converter::pack_word(&quad, endianness)
}

/// Derives a fully-populated [`SBoxState`] from a raw key.
///
/// # Parameters
/// - `key`: Raw key bytes, 1–256 of them.
/// - `endianness`: Byte order used to pack key bytes into subkey words.
/// - `sign_mode`: Sign interpretation used by the bootstrap encryptions.
///
/// # Returns
/// The populated state, ready for block operations.
///
/// # Errors
/// Returns [`BlowfishError::InvalidKeyLength`] if the key is empty or longer
/// than 256 bytes.
pub(crate) fn expand_key(
    key: &[u8],
    endianness: Endianness,
    sign_mode: SignMode,
) -> Result<SBoxState, BlowfishError> {
    if !(MIN_KEY_BYTES..=MAX_KEY_BYTES).contains(&key.len()) {
        return Err(BlowfishError::InvalidKeyLength);
    }

    let mut state = SBoxState::seeded();

    // Mix the key into the P-array, cycling key bytes as needed
    let mut pos = 0usize;
    for subkey in state.p.iter_mut() {
        *subkey ^= next_key_word(key, &mut pos, endianness);
    }

    // Bootstrap: encrypt a running block with the state as currently built
    // and overwrite the next two entries with the result. P-array first,
    // then each S-box in order. The encryption reads the same state the
    // loop is writing, so index access is required here.
    let (mut l, mut r) = (0u32, 0u32);
    for i in (0..18).step_by(2) {
        (l, r) = feistel::encrypt_words(&state, l, r, sign_mode);
        state.p[i] = l;
        state.p[i + 1] = r;
    }
    #[allow(clippy::needless_range_loop)]
    for table in 0..4 {
        for j in (0..256).step_by(2) {
            (l, r) = feistel::encrypt_words(&state, l, r, sign_mode);
            state.s[table][j] = l;
            state.s[table][j + 1] = r;
        }
    }

    Ok(state)
}
