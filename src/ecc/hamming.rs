//! Hamming error correction code over single machine words.
//!
//! Hamming codes are a family of linear error-correcting codes developed by
//! Richard Hamming in 1950. A code built from `r` parity bits spans a codeword
//! of `n = 2^r - 1` bits carrying `n - r` data bits, and corrects any single
//! flipped bit per codeword. Unlike block codecs that stream bytes, this
//! implementation keeps the whole codeword in one unsigned machine word, which
//! suits protecting values that already live in a register or memory word.
//!
//! Bit positions are numbered starting from 1 at the least significant bit.
//! Positions whose index is a power of two (1, 2, 4, 8, ...) hold parity bits;
//! every other position holds the next data bit, least significant first. The
//! parity bit at position `2^j` checks every position whose index has bit `j`
//! set, so when a single bit flips, the set of failing checks reads out the
//! flipped position directly.
//!
//! This implementation provides:
//! - Encoding of a data word into a parity-augmented codeword
//! - Decoding with single-bit error detection and correction
//! - Support for any unsigned primitive word type and any codeword size
//!   that fits inside it
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Register and latch protection in high-radiation environments
//! - Short telemetry and telecommand frames
//!
//! # Examples
//!
//! ```
//! use wordcodes::ecc::hamming::HammingCode;
//!
//! // Hamming(7,4): 3 parity bits protect 4 data bits.
//! let code = HammingCode::<u32>::new(3).unwrap();
//! let encoded = code.encode(0b1010).unwrap();
//!
//! // A noisy channel flips bit 5 of the codeword.
//! let received = encoded ^ (1 << 4);
//! let (decoded, has_error) = code.decode(received).unwrap();
//! assert_eq!(decoded, 0b1010);
//! assert!(has_error);
//! ```

use std::marker::PhantomData;

use log::debug;
use num_traits::{PrimInt, Unsigned};

use crate::ecc::{Result, WordCode};
use crate::error::Error;

/// Number of bits in the word type `W`.
fn word_bits<W: PrimInt + Unsigned>() -> u32 {
    W::zero().count_zeros()
}

/// Number of bits actually needed to represent `word`.
fn significant_bits<W: PrimInt + Unsigned>(word: W) -> u32 {
    word_bits::<W>() - word.leading_zeros()
}

/// Codeword length for a code with `n_parity_bits` parity bits: `2^r - 1`.
fn n_encoded_bits(n_parity_bits: u32) -> u32 {
    debug_assert!(n_parity_bits < u32::BITS);
    (1 << n_parity_bits) - 1
}

/// True if the 1-based position holds a parity bit, i.e. its index has
/// exactly one set bit.
fn is_parity_position(bit_index: u32) -> bool {
    debug_assert!(bit_index >= 1, "bit positions are numbered from 1");
    bit_index.count_ones() == 1
}

/// Return the bit of `word` at the 1-based position `bit_index`.
fn get_bit<W: PrimInt + Unsigned>(word: W, bit_index: u32) -> u32 {
    debug_assert!(bit_index >= 1, "bit positions are numbered from 1");
    if (word >> (bit_index as usize - 1)) & W::one() == W::one() {
        1
    } else {
        0
    }
}

/// Return `word` with the bit at the 1-based position `bit_index` forced
/// to `bit_value`.
fn set_bit<W: PrimInt + Unsigned>(word: W, bit_index: u32, bit_value: u32) -> W {
    debug_assert!(bit_index >= 1, "bit positions are numbered from 1");
    debug_assert!(bit_value <= 1, "a bit is 0 or 1");
    let mask = W::one() << (bit_index as usize - 1);
    if bit_value == 1 {
        word | mask
    } else {
        word & !mask
    }
}

/// Parity over the data bits of `word` checked by the parity bit at
/// `parity_pos`. The word spans `n_bits` positions in total.
///
/// With `parity_pos = 2^j` this is the exclusive-or of every non-parity
/// position whose index has bit `j` set. The accumulator starts at zero,
/// so a range with no covered data position yields a well-defined 0.
fn compute_parity<W: PrimInt + Unsigned>(word: W, parity_pos: u32, n_bits: u32) -> u32 {
    debug_assert!(parity_pos >= 1, "bit positions are numbered from 1");
    let mut parity = 0;
    for i in 1..=n_bits {
        if !is_parity_position(i) && i & parity_pos != 0 {
            parity ^= get_bit(word, i);
        }
    }
    parity
}

/// A Hamming code configuration for codewords held in a single word of
/// type `W`.
///
/// A code with `r` parity bits occupies `n = 2^r - 1` bit positions and
/// carries `k = n - r` data bits, giving the classic Hamming(7,4) for
/// `r = 3`, Hamming(15,11) for `r = 4` and so on. `n` must fit within the
/// bit width of `W`, which `new` validates once up front.
#[derive(Debug, Clone, Copy)]
pub struct HammingCode<W> {
    /// Number of parity bits per codeword
    n_parity_bits: u32,
    _word: PhantomData<W>,
}

impl<W: PrimInt + Unsigned> HammingCode<W> {
    /// Creates a Hamming code with `n_parity_bits` parity bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `n_parity_bits` is zero or if the
    /// resulting codeword of `2^n_parity_bits - 1` bits does not fit in `W`.
    pub fn new(n_parity_bits: u32) -> Result<Self> {
        if n_parity_bits == 0 {
            return Err(Error::InvalidInput(
                "At least one parity bit is required".to_string(),
            ));
        }
        // Guard the shift in n_encoded_bits before using it.
        if n_parity_bits >= u32::BITS {
            return Err(Error::InvalidInput(format!(
                "{} parity bits cannot address a codeword",
                n_parity_bits
            )));
        }

        let n_bits = n_encoded_bits(n_parity_bits);
        let width = word_bits::<W>();
        if n_bits > width {
            return Err(Error::InvalidInput(format!(
                "Codeword of {} bits does not fit the {}-bit word type",
                n_bits, width
            )));
        }

        Ok(HammingCode {
            n_parity_bits,
            _word: PhantomData,
        })
    }

    /// Number of parity bits per codeword.
    pub fn n_parity_bits(&self) -> u32 {
        self.n_parity_bits
    }

    /// Total codeword length in bits (`2^r - 1`).
    pub fn n_encoded_bits(&self) -> u32 {
        n_encoded_bits(self.n_parity_bits)
    }

    /// Number of data bits per codeword (`2^r - 1 - r`).
    pub fn n_data_bits(&self) -> u32 {
        self.n_encoded_bits() - self.n_parity_bits
    }

    /// Encodes a data word into a parity-augmented codeword.
    ///
    /// Data bits are placed least significant first into the non-parity
    /// positions, then each parity position receives the parity of the
    /// positions it checks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLarge`] if `data` needs more than
    /// [`n_data_bits`](Self::n_data_bits) bits.
    pub fn encode(&self, data: W) -> Result<W> {
        let n_bits = self.n_encoded_bits();
        let n_data = self.n_data_bits();
        if data >> (n_data as usize) != W::zero() {
            return Err(Error::InputTooLarge {
                length: significant_bits(data) as usize,
                max_length: n_data as usize,
            });
        }

        let mut encoded = W::zero();

        // Spread the data bits over the non-parity positions. At a data
        // position i, `parity_seen` parity positions lie below it, so it
        // receives data bit i - parity_seen.
        let mut parity_seen = 0;
        for i in 1..=n_bits {
            if is_parity_position(i) {
                parity_seen += 1;
            } else {
                encoded = set_bit(encoded, i, get_bit(data, i - parity_seen));
            }
        }

        // Fill in the parity bits. Parity positions are excluded from each
        // other's checks, so the order does not matter.
        for p in 1..=n_bits {
            if is_parity_position(p) {
                encoded = set_bit(encoded, p, compute_parity(encoded, p, n_bits));
            }
        }

        Ok(encoded)
    }

    /// Decodes a received codeword, correcting at most one flipped bit.
    ///
    /// Returns the decoded data word and a flag that is `true` when a
    /// single-bit error was detected and corrected. A corrected error is
    /// the designed-for case of the code, not a failure, so it is reported
    /// through the flag rather than the error channel.
    ///
    /// The code cannot tell a corrected single-bit error apart from a
    /// mis-corrected multi-bit error; with two or more flipped bits the
    /// result is silently wrong. This is a fundamental property of
    /// single-error-correcting Hamming codes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLarge`] if `received` has bits set above
    /// the codeword length.
    pub fn decode(&self, received: W) -> Result<(W, bool)> {
        let n_bits = self.n_encoded_bits();
        if received >> (n_bits as usize) != W::zero() {
            return Err(Error::InputTooLarge {
                length: significant_bits(received) as usize,
                max_length: n_bits as usize,
            });
        }

        // Re-run every parity check. Each failing check contributes its
        // own parity position to the syndrome; the positions are distinct
        // powers of two, each visited once, so OR-ing them composes the
        // 1-based index of the flipped bit.
        let mut syndrome: u32 = 0;
        for p in 1..=n_bits {
            if is_parity_position(p) && compute_parity(received, p, n_bits) != get_bit(received, p)
            {
                syndrome |= p;
            }
        }

        let mut fixed = received;
        let mut has_error = false;
        if syndrome != 0 {
            debug!("Correcting single-bit error at position {}", syndrome);
            fixed = set_bit(received, syndrome, get_bit(received, syndrome) ^ 1);
            has_error = true;
        }

        // Collect the data bits back out of the corrected codeword,
        // mirroring the placement done by encode.
        let mut decoded = W::zero();
        let mut parity_seen = 0;
        for i in 1..=n_bits {
            if is_parity_position(i) {
                parity_seen += 1;
            } else {
                decoded = set_bit(decoded, i - parity_seen, get_bit(fixed, i));
            }
        }

        Ok((decoded, has_error))
    }
}

impl<W: PrimInt + Unsigned> WordCode for HammingCode<W> {
    type Word = W;

    fn encode(&self, data: W) -> Result<W> {
        HammingCode::encode(self, data)
    }

    fn decode(&self, received: W) -> Result<(W, bool)> {
        HammingCode::decode(self, received)
    }
}

/// Encodes `data` using a Hamming code with `n_parity_bits` parity bits.
///
/// # Examples
///
/// ```
/// use wordcodes::ecc::hamming::hamming_encode;
///
/// assert_eq!(hamming_encode(0b1010u32, 3).unwrap(), 0b1010010);
/// ```
pub fn hamming_encode<W: PrimInt + Unsigned>(data: W, n_parity_bits: u32) -> Result<W> {
    HammingCode::new(n_parity_bits)?.encode(data)
}

/// Decodes `encoded` using a Hamming code with `n_parity_bits` parity
/// bits, returning the data word and whether a bit error was corrected.
///
/// # Examples
///
/// ```
/// use wordcodes::ecc::hamming::hamming_decode;
///
/// assert_eq!(hamming_decode(0b1010010u32, 3).unwrap(), (0b1010, false));
/// ```
pub fn hamming_decode<W: PrimInt + Unsigned>(encoded: W, n_parity_bits: u32) -> Result<(W, bool)> {
    HammingCode::new(n_parity_bits)?.decode(encoded)
}
