//! Feistel network core: round function and single-block operations.
//!
//! Implements the 16-round Feistel structure over a word pair (L, R). The
//! round function reads the S-boxes through [`SBoxState::s_entry`], so the
//! sign interpretation of extracted bytes is the only point where
//! [`SignMode`] influences the data path.

use crate::sbox::SBoxState;
use crate::utils::converter::{self, SignMode};

/// Number of Feistel rounds.
const ROUNDS: usize = 16;

/// The round function F over a single 32-bit word.
///
/// Splits `x` into bytes a, b, c, d (most to least significant) and combines
/// the corresponding S-box entries as
/// `((S0[a] + S1[b]) ^ S2[c]) + S3[d]`, with all additions wrapping
/// modulo 2^32.
///
/// # Parameters
/// - `state`: The populated key state.
/// - `x`: The input word.
/// - `sign_mode`: Sign interpretation for the byte-to-index conversion.
///
/// # Returns
/// The 32-bit round function output.
#[inline]
pub(crate) fn round_f(state: &SBoxState, x: u32, sign_mode: SignMode) -> u32 {
    let a = converter::extract_byte(x, 3, sign_mode);
    let b = converter::extract_byte(x, 2, sign_mode);
    let c = converter::extract_byte(x, 1, sign_mode);
    let d = converter::extract_byte(x, 0, sign_mode);
    let f = state
        .s_entry(0, a)
        .wrapping_add(state.s_entry(1, b))
        ^ state.s_entry(2, c);
    f.wrapping_add(state.s_entry(3, d))
}

/// Encrypts one block given as a word pair.
///
/// Runs 16 Feistel rounds with P[0..=15], undoes the final swap, then
/// applies the output whitening `R ^= P[16]; L ^= P[17]`.
///
/// # Parameters
/// - `state`: The populated key state (read-only).
/// - `l`, `r`: The plaintext word pair.
/// - `sign_mode`: Sign interpretation used inside the round function.
///
/// # Returns
/// The ciphertext word pair.
pub(crate) fn encrypt_words(
    state: &SBoxState,
    mut l: u32,
    mut r: u32,
    sign_mode: SignMode,
) -> (u32, u32) {
    for i in 0..ROUNDS {
        l ^= state.p[i];
        r ^= round_f(state, l, sign_mode);
        std::mem::swap(&mut l, &mut r);
    }
    // Undo the final swap before whitening
    std::mem::swap(&mut l, &mut r);
    r ^= state.p[16];
    l ^= state.p[17];
    (l, r)
}

/// Decrypts one block given as a word pair.
///
/// Identical round structure to [`encrypt_words`] with the subkeys applied
/// in reverse order: rounds use P[17] down to P[2], and the final combine
/// uses P[1] and P[0]. Exact algebraic inverse of [`encrypt_words`] for all
/// inputs and all populated states.
///
/// # Parameters
/// - `state`: The populated key state (read-only).
/// - `l`, `r`: The ciphertext word pair.
/// - `sign_mode`: Sign interpretation used inside the round function.
///
/// # Returns
/// The plaintext word pair.
pub(crate) fn decrypt_words(
    state: &SBoxState,
    mut l: u32,
    mut r: u32,
    sign_mode: SignMode,
) -> (u32, u32) {
    for i in (2..18).rev() {
        l ^= state.p[i];
        r ^= round_f(state, l, sign_mode);
        std::mem::swap(&mut l, &mut r);
    }
    std::mem::swap(&mut l, &mut r);
    r ^= state.p[1];
    l ^= state.p[0];
    (l, r)
}
