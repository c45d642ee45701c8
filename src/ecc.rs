//! Error correction codes over single machine words.
//!
//! This module provides error correction codes whose data and codewords
//! live in one fixed-width unsigned integer each:
//! - Hamming codes (single-bit error correction)
//!
//! # Error Correction Algorithms
//!
//! Error correction codes add computed check bits to data so that errors
//! introduced in transmission or storage can be detected and repaired on
//! the receiving side.
//!
//! # Examples
//!
//! ```rust
//! use wordcodes::ecc::hamming::{hamming_decode, hamming_encode};
//!
//! let encoded = hamming_encode(0b1010u32, 3).unwrap();
//! let (decoded, has_error) = hamming_decode(encoded, 3).unwrap();
//! assert_eq!(decoded, 0b1010);
//! assert!(!has_error);
//! ```

use crate::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for error correction codes operating on single words
pub trait WordCode {
    /// Word type carrying both data and codewords
    type Word;

    /// Encode data with error correction parity bits
    fn encode(&self, data: Self::Word) -> Result<Self::Word>;

    /// Decode a received word, correcting errors where possible.
    /// Returns the decoded data and whether an error was corrected.
    fn decode(&self, received: Self::Word) -> Result<(Self::Word, bool)>;
}

/// Hamming error correction codes
pub mod hamming;
pub use hamming::{hamming_decode, hamming_encode, HammingCode};
