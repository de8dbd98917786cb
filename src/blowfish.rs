//! Blowfish: keyed 64-bit-block Feistel cipher engine.
//!
//! Orchestrates the key schedule and the per-block Feistel core behind a
//! byte-oriented API. Each instance derives its own substitution state at
//! construction time and never mutates it afterwards, so a single instance
//! can serve concurrent encrypt/decrypt calls without coordination.
//!
//! Compatible bit-for-bit with legacy Java deployments when configured with
//! [`SignMode::LegacySigned`].

use crate::error::BlowfishError;
use crate::feistel;
use crate::key_schedule;
use crate::sbox::SBoxState;
use crate::utils::converter::{self, Endianness, SignMode};

/// Block size in bytes.
const BLOCK_BYTES: usize = 8;

/// Keyed Blowfish cipher instance.
///
/// # Architecture
///
/// Construction runs the self-referential key schedule, deriving the
/// 18-entry P-array and four 256-entry S-boxes from the raw key and the
/// fixed pi-derived seed tables. All block operations read that state
/// without modifying it.
///
/// The configured [`Endianness`] controls every byte↔word conversion (key
/// words, plaintext packing, ciphertext unpacking). The configured
/// [`SignMode`] controls only the byte-to-index conversion inside the round
/// function; [`SignMode::LegacySigned`] reproduces the historical
/// sign-extension defect where bytes ≥ 0x80 became negative table indices.
///
/// Encrypting and decrypting with mismatched endianness or sign mode is not
/// detected as an error: it silently yields incorrect plaintext. Callers
/// must use the same configuration on both sides.
pub struct Blowfish {
    state: SBoxState,
    endianness: Endianness,
    sign_mode: SignMode,
}

impl Blowfish {
    /// Creates a cipher in the reference configuration: big-endian byte
    /// order, unsigned byte indexing.
    ///
    /// This configuration reproduces the published Blowfish test vectors.
    ///
    /// # Parameters
    /// - `key`: Raw key bytes, 1–256 of them.
    ///
    /// # Errors
    /// Returns [`BlowfishError::InvalidKeyLength`] if the key is empty or
    /// longer than 256 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use blowcrypt::Blowfish;
    ///
    /// let bf = Blowfish::new(b"verysecretpasswd").unwrap();
    /// let mut block = *b"abcd1234";
    /// bf.encrypt_block(&mut block);
    /// assert_ne!(&block, b"abcd1234");
    /// bf.decrypt_block(&mut block);
    /// assert_eq!(&block, b"abcd1234");
    /// ```
    ///
    /// ```
    /// use blowcrypt::Blowfish;
    ///
    /// assert!(Blowfish::new(&[]).is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, BlowfishError> {
        Self::with_config(key, Endianness::Big, SignMode::Unsigned)
    }

    /// Creates a cipher with an explicit byte order and sign interpretation.
    ///
    /// # Parameters
    /// - `key`: Raw key bytes, 1–256 of them.
    /// - `endianness`: Byte order for all byte↔word conversions.
    /// - `sign_mode`: Byte-to-index interpretation inside the round function.
    ///
    /// # Errors
    /// Returns [`BlowfishError::InvalidKeyLength`] if the key is empty or
    /// longer than 256 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use blowcrypt::{Blowfish, Endianness, SignMode};
    ///
    /// let bf = Blowfish::with_config(b"secret", Endianness::Little, SignMode::LegacySigned)
    ///     .unwrap();
    /// let ciphertext = bf.encrypt(b"0123456789abcdef");
    /// assert_eq!(bf.decrypt(&ciphertext).unwrap(), b"0123456789abcdef");
    /// ```
    pub fn with_config(
        key: &[u8],
        endianness: Endianness,
        sign_mode: SignMode,
    ) -> Result<Self, BlowfishError> {
        let state = key_schedule::expand_key(key, endianness, sign_mode)?;
        Ok(Blowfish {
            state,
            endianness,
            sign_mode,
        })
    }

    /// Encrypts a byte sequence of arbitrary length.
    ///
    /// The input is padded with trailing zero bytes up to the next multiple
    /// of 8, split into 8-byte blocks, and encrypted block by block. Empty
    /// input produces empty output. The padding is not removed by
    /// [`decrypt`](Self::decrypt); callers needing the exact original
    /// length must track it externally.
    ///
    /// # Parameters
    /// - `plaintext`: The bytes to encrypt.
    ///
    /// # Returns
    /// The ciphertext, `plaintext.len()` rounded up to a multiple of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use blowcrypt::Blowfish;
    ///
    /// let bf = Blowfish::new(b"my key").unwrap();
    /// let ciphertext = bf.encrypt(b"hello");
    /// assert_eq!(ciphertext.len(), 8);
    /// ```
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut padded = plaintext.to_vec();
        if !padded.len().is_multiple_of(BLOCK_BYTES) {
            padded.resize(padded.len().next_multiple_of(BLOCK_BYTES), 0);
        }

        let mut output = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_BYTES) {
            let l = converter::pack_word(&[chunk[0], chunk[1], chunk[2], chunk[3]], self.endianness);
            let r = converter::pack_word(&[chunk[4], chunk[5], chunk[6], chunk[7]], self.endianness);
            let (l, r) = feistel::encrypt_words(&self.state, l, r, self.sign_mode);
            output.extend_from_slice(&converter::unpack_word(l, self.endianness));
            output.extend_from_slice(&converter::unpack_word(r, self.endianness));
        }
        output
    }

    /// Decrypts a byte sequence produced by [`encrypt`](Self::encrypt).
    ///
    /// Zero padding added during encryption is preserved in the output.
    ///
    /// # Parameters
    /// - `ciphertext`: The bytes to decrypt; the length must be a multiple
    ///   of 8.
    ///
    /// # Returns
    /// The decrypted bytes, same length as the input.
    ///
    /// # Errors
    /// Returns [`BlowfishError::InvalidCiphertextLength`] if the input
    /// length is not a multiple of 8. No partial output is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use blowcrypt::Blowfish;
    ///
    /// let bf = Blowfish::new(b"my key").unwrap();
    /// let ciphertext = bf.encrypt(b"exactly8ized");
    /// let plaintext = bf.decrypt(&ciphertext).unwrap();
    /// assert!(plaintext.starts_with(b"exactly8ized"));
    /// ```
    ///
    /// ```
    /// use blowcrypt::Blowfish;
    ///
    /// let bf = Blowfish::new(b"my key").unwrap();
    /// assert!(bf.decrypt(&[0u8; 7]).is_err());
    /// ```
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, BlowfishError> {
        if !ciphertext.len().is_multiple_of(BLOCK_BYTES) {
            return Err(BlowfishError::InvalidCiphertextLength);
        }

        let mut output = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(BLOCK_BYTES) {
            let l = converter::pack_word(&[chunk[0], chunk[1], chunk[2], chunk[3]], self.endianness);
            let r = converter::pack_word(&[chunk[4], chunk[5], chunk[6], chunk[7]], self.endianness);
            let (l, r) = feistel::decrypt_words(&self.state, l, r, self.sign_mode);
            output.extend_from_slice(&converter::unpack_word(l, self.endianness));
            output.extend_from_slice(&converter::unpack_word(r, self.endianness));
        }
        Ok(output)
    }

    /// Encrypts exactly one 8-byte block in place.
    ///
    /// # Parameters
    /// - `block`: The block to encrypt (modified in place).
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        let l = converter::pack_word(&[block[0], block[1], block[2], block[3]], self.endianness);
        let r = converter::pack_word(&[block[4], block[5], block[6], block[7]], self.endianness);
        let (l, r) = feistel::encrypt_words(&self.state, l, r, self.sign_mode);
        block[0..4].copy_from_slice(&converter::unpack_word(l, self.endianness));
        block[4..8].copy_from_slice(&converter::unpack_word(r, self.endianness));
    }

    /// Decrypts exactly one 8-byte block in place.
    ///
    /// # Parameters
    /// - `block`: The block to decrypt (modified in place).
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        let l = converter::pack_word(&[block[0], block[1], block[2], block[3]], self.endianness);
        let r = converter::pack_word(&[block[4], block[5], block[6], block[7]], self.endianness);
        let (l, r) = feistel::decrypt_words(&self.state, l, r, self.sign_mode);
        block[0..4].copy_from_slice(&converter::unpack_word(l, self.endianness));
        block[4..8].copy_from_slice(&converter::unpack_word(r, self.endianness));
    }

    /// Returns the configured byte order.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns the configured sign interpretation.
    pub fn sign_mode(&self) -> SignMode {
        self.sign_mode
    }

    /// Returns the derived P-array entry at `index`.
    ///
    /// # Parameters
    /// - `index`: Subkey index (0..18).
    ///
    /// # Returns
    /// The subkey value, or 0 if the index is out of range.
    pub fn subkey_value(&self, index: usize) -> u32 {
        if index >= 18 {
            return 0;
        }
        self.state.p[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let bf = Blowfish::new(b"key").unwrap();
        assert_eq!(bf.endianness(), Endianness::Big);
        assert_eq!(bf.sign_mode(), SignMode::Unsigned);
    }

    #[test]
    fn test_invalid_key_lengths() {
        assert!(matches!(
            Blowfish::new(&[]),
            Err(BlowfishError::InvalidKeyLength)
        ));
        assert!(matches!(
            Blowfish::new(&[0u8; 257]),
            Err(BlowfishError::InvalidKeyLength)
        ));
        assert!(Blowfish::new(&[0u8; 1]).is_ok());
        assert!(Blowfish::new(&[0u8; 256]).is_ok());
    }

    #[test]
    fn test_zero_key_known_answer() {
        // Published vector: all-zero key, all-zero block -> 4EF997456198DD78
        let bf = Blowfish::new(&[0u8; 8]).unwrap();
        let mut block = [0u8; 8];
        bf.encrypt_block(&mut block);
        assert_eq!(block, [0x4E, 0xF9, 0x97, 0x45, 0x61, 0x98, 0xDD, 0x78]);
    }

    #[test]
    fn test_sixteen_zero_key_known_answer() {
        // Zero key words XOR to nothing, so the 16-byte zero key matches
        // the 8-byte zero key vector
        let bf = Blowfish::new(&[0u8; 16]).unwrap();
        assert_eq!(
            bf.encrypt(&[0u8; 8]),
            [0x4E, 0xF9, 0x97, 0x45, 0x61, 0x98, 0xDD, 0x78]
        );
    }

    #[test]
    fn test_encrypt_block_known_answer() {
        let bf = Blowfish::new(b"verysecretpasswd").unwrap();
        let mut block = *b"abcd1234";
        bf.encrypt_block(&mut block);
        assert_eq!(block, [0x05, 0xAE, 0xB2, 0xB5, 0x4B, 0x4A, 0x3A, 0x74]);
    }

    #[test]
    fn test_roundtrip_block_aligned() {
        let bf = Blowfish::new(b"RoundTripKey").unwrap();
        let plaintext = b"0123456789abcdef";
        let ciphertext = bf.encrypt(plaintext);
        assert_ne!(&ciphertext[..], &plaintext[..]);
        assert_eq!(bf.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_roundtrip_all_configurations() {
        let plaintext = b"The quick brown fox jumps over..";
        for endianness in [Endianness::Big, Endianness::Little] {
            for sign_mode in [SignMode::Unsigned, SignMode::LegacySigned] {
                let bf = Blowfish::with_config(b"ConfigKey", endianness, sign_mode).unwrap();
                let ciphertext = bf.encrypt(plaintext);
                assert_eq!(
                    bf.decrypt(&ciphertext).unwrap(),
                    plaintext,
                    "roundtrip failed for {:?}/{:?}",
                    endianness,
                    sign_mode
                );
            }
        }
    }

    #[test]
    fn test_encrypt_pads_to_block_boundary() {
        let bf = Blowfish::new(b"PaddingKey").unwrap();
        assert_eq!(bf.encrypt(b"a").len(), 8);
        assert_eq!(bf.encrypt(&[0u8; 7]).len(), 8);
        assert_eq!(bf.encrypt(&[0u8; 8]).len(), 8);
        assert_eq!(bf.encrypt(&[0u8; 9]).len(), 16);
        assert_eq!(bf.encrypt(&[0u8; 19]).len(), 24);
    }

    #[test]
    fn test_padding_is_trailing_zeros() {
        let bf = Blowfish::new(b"PaddingKey").unwrap();
        let ciphertext = bf.encrypt(b"hello");
        let decrypted = bf.decrypt(&ciphertext).unwrap();
        assert_eq!(&decrypted[..5], b"hello");
        assert_eq!(&decrypted[5..], &[0u8; 3]);
    }

    #[test]
    fn test_short_input_equals_padded_input() {
        // Explicit zero padding and implicit padding encrypt identically
        let bf = Blowfish::new(b"PaddingKey").unwrap();
        let mut padded = b"hello".to_vec();
        padded.resize(8, 0);
        assert_eq!(bf.encrypt(b"hello"), bf.encrypt(&padded));
    }

    #[test]
    fn test_empty_input() {
        let bf = Blowfish::new(b"EmptyKey").unwrap();
        assert!(bf.encrypt(&[]).is_empty());
        assert!(bf.decrypt(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decrypt_rejects_partial_blocks() {
        let bf = Blowfish::new(b"LengthKey").unwrap();
        for len in [1usize, 7, 9, 15, 17] {
            let ciphertext = vec![0u8; len];
            assert!(
                matches!(
                    bf.decrypt(&ciphertext),
                    Err(BlowfishError::InvalidCiphertextLength)
                ),
                "length {} was not rejected",
                len
            );
        }
    }

    #[test]
    fn test_sign_modes_produce_different_ciphertext() {
        let unsigned =
            Blowfish::with_config(b"ModeKey", Endianness::Big, SignMode::Unsigned).unwrap();
        let legacy =
            Blowfish::with_config(b"ModeKey", Endianness::Big, SignMode::LegacySigned).unwrap();
        let plaintext = b"\x01\x02\x03\x04\x05\x06\x07\x08";
        assert_ne!(unsigned.encrypt(plaintext), legacy.encrypt(plaintext));
    }

    #[test]
    fn test_endianness_produces_different_ciphertext() {
        let big = Blowfish::with_config(b"EndianKey", Endianness::Big, SignMode::Unsigned).unwrap();
        let little =
            Blowfish::with_config(b"EndianKey", Endianness::Little, SignMode::Unsigned).unwrap();
        let plaintext = b"\x01\x02\x03\x04\x05\x06\x07\x08";
        assert_ne!(big.encrypt(plaintext), little.encrypt(plaintext));
    }

    #[test]
    fn test_wrong_key_does_not_decrypt() {
        let encoder = Blowfish::new(b"CorrectKey").unwrap();
        let decoder = Blowfish::new(b"IncorrectKey").unwrap();
        let plaintext = b"sensitive block!";
        let ciphertext = encoder.encrypt(plaintext);
        assert_ne!(decoder.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_block_and_wrapper_apis_agree() {
        let bf = Blowfish::new(b"AgreeKey").unwrap();
        let mut block = *b"8bytes!!";
        bf.encrypt_block(&mut block);
        assert_eq!(bf.encrypt(b"8bytes!!"), block);
        bf.decrypt_block(&mut block);
        assert_eq!(&block, b"8bytes!!");
    }

    #[test]
    fn test_subkey_value_bounds() {
        let bf = Blowfish::new(&[0u8; 8]).unwrap();
        assert_eq!(bf.subkey_value(0), 0x706D_9FCC);
        assert_eq!(bf.subkey_value(17), 0x196A_7C43);
        assert_eq!(bf.subkey_value(18), 0);
        assert_eq!(bf.subkey_value(usize::MAX), 0);
    }
}
