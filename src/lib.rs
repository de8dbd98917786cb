//! blowcrypt symmetric block-cipher engine.
//!
//! Blowfish implementation: a keyed 64-bit-block Feistel cipher with
//! variable-length keys (1–256 bytes), explicit endianness handling, and a
//! legacy compatibility mode reproducing the sign-extension defect of
//! historical Java deployments byte-for-byte.
//!
//! # Architecture
//!
//! ```text
//! converter   (byte↔word packing under explicit Endianness,
//!     ↓        byte→index extraction under explicit SignMode)
//! SBoxState   (18-entry P-array + four 256-entry S-boxes,
//!     ↓        seeded from pi, populated once per instance)
//! key_schedule (self-referential bootstrap: the cipher encrypts
//!     ↓         with its own in-progress key material)
//! feistel     (round function + 16-round single-block encrypt/decrypt)
//!     ↓
//! Blowfish    (public handle: block splitting, zero padding,
//!              per-instance immutable key state)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use blowcrypt::Blowfish;
//!
//! let bf = Blowfish::new(b"my secret key").unwrap();
//!
//! let ciphertext = bf.encrypt(b"eight by eight..");
//! assert_ne!(&ciphertext[..], b"eight by eight..");
//!
//! let plaintext = bf.decrypt(&ciphertext).unwrap();
//! assert_eq!(plaintext, b"eight by eight..");
//! ```
//!
//! Reproduce legacy ciphertext with the signed byte-indexing defect:
//!
//! ```
//! use blowcrypt::{Blowfish, Endianness, SignMode};
//!
//! let bf = Blowfish::with_config(
//!     b"my secret key",
//!     Endianness::Big,
//!     SignMode::LegacySigned,
//! )
//! .unwrap();
//!
//! let ciphertext = bf.encrypt(b"eight by eight..");
//! assert_eq!(bf.decrypt(&ciphertext).unwrap(), b"eight by eight..");
//! ```

#![deny(clippy::all)]

pub mod error;

mod blowfish;
mod feistel;
mod key_schedule;
mod sbox;
mod seeds;
pub mod utils;

pub use blowfish::Blowfish;
pub use utils::converter::{Endianness, SignMode};
