//! Binary-coded decimal digit packing.
//!
//! A [`Bcd`] word stores up to [`MAX_BCD_DIGITS`] decimal digits, one per
//! 4-bit nibble, with the least significant digit in the least significant
//! nibble. Written in hex, a packed value therefore reads exactly like the
//! decimal number it holds: decimal 255 packs to `0x255`.
//!
//! BCD sidesteps binary-to-decimal conversion wherever digits are the
//! native unit, such as seven-segment displays and real-time clock chips.
//!
//! # Examples
//!
//! ```
//! use wordcodes::bcd::{bcd_to_binary, binary_to_bcd};
//!
//! let bcd = binary_to_bcd(0xff).unwrap();
//! assert_eq!(bcd, 0x255);
//! assert_eq!(bcd_to_binary(bcd).unwrap(), 0xff);
//! ```

use crate::error::{Error, Result};

/// A plain binary unsigned integer.
pub type Binary = u64;

/// Packed decimal digits, one per nibble, least significant digit first.
pub type Bcd = u64;

/// Bits per packed decimal digit.
pub const BCD_BITS: u32 = 4;

/// Number of decimal digits a [`Bcd`] word can hold.
pub const MAX_BCD_DIGITS: u32 = Bcd::BITS / BCD_BITS;

/// Number of decimal digits needed to write `value`.
fn n_decimal_digits(value: Binary) -> usize {
    let mut count = 0;
    let mut remaining = value;
    while remaining > 0 {
        remaining /= 10;
        count += 1;
    }
    count
}

/// Returns the decimal digit of `bcd` at `digit_index`, counting from 0 at
/// the least significant digit.
///
/// The nibble is returned as stored; callers that need a validated digit
/// should go through [`bcd_to_binary`].
///
/// # Examples
///
/// ```
/// use wordcodes::bcd::bcd_digit;
///
/// assert_eq!(bcd_digit(0x255, 0), 5);
/// assert_eq!(bcd_digit(0x255, 2), 2);
/// ```
pub fn bcd_digit(bcd: Bcd, digit_index: u32) -> u8 {
    debug_assert!(digit_index < MAX_BCD_DIGITS, "digit index out of range");
    ((bcd >> (digit_index * BCD_BITS)) & 0xf) as u8
}

/// Converts a binary value into packed decimal digits.
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] if `value` has more than
/// [`MAX_BCD_DIGITS`] decimal digits.
///
/// # Examples
///
/// ```
/// use wordcodes::bcd::binary_to_bcd;
///
/// assert_eq!(binary_to_bcd(0xc).unwrap(), 0x12);
/// assert_eq!(binary_to_bcd(0xff).unwrap(), 0x255);
/// ```
pub fn binary_to_bcd(value: Binary) -> Result<Bcd> {
    let mut bcd: Bcd = 0;
    let mut remaining = value;
    let mut digit_index = 0;
    while remaining > 0 {
        if digit_index >= MAX_BCD_DIGITS {
            return Err(Error::InputTooLarge {
                length: n_decimal_digits(value),
                max_length: MAX_BCD_DIGITS as usize,
            });
        }
        bcd |= (remaining % 10) << (digit_index * BCD_BITS);
        remaining /= 10;
        digit_index += 1;
    }
    Ok(bcd)
}

/// Converts packed decimal digits back into a binary value.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] if a nibble of `bcd` is not a decimal
/// digit. Digits are checked from the most significant end, so the
/// reported index is the highest offending digit.
///
/// # Examples
///
/// ```
/// use wordcodes::bcd::bcd_to_binary;
///
/// assert_eq!(bcd_to_binary(0x12).unwrap(), 0xc);
/// assert_eq!(bcd_to_binary(0x255).unwrap(), 0xff);
/// ```
pub fn bcd_to_binary(bcd: Bcd) -> Result<Binary> {
    let mut value: Binary = 0;
    for digit_index in (0..MAX_BCD_DIGITS).rev() {
        let digit = bcd_digit(bcd, digit_index);
        if digit > 9 {
            return Err(Error::InvalidDigit {
                digit,
                index: digit_index,
            });
        }
        value = value * 10 + Binary::from(digit);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcd_digit_extraction() {
        assert_eq!(bcd_digit(0x0, 0), 0);
        assert_eq!(bcd_digit(0x12, 0), 2);
        assert_eq!(bcd_digit(0x12, 1), 1);
        assert_eq!(bcd_digit(0x12, 2), 0);

        let all_nines: Bcd = 0x9999_9999_9999_9999;
        for digit_index in 0..MAX_BCD_DIGITS {
            assert_eq!(bcd_digit(all_nines, digit_index), 9);
        }
        assert_eq!(bcd_digit(0x8000_0000_0000_0001, 15), 8);
    }

    #[test]
    fn test_binary_to_bcd() {
        assert_eq!(binary_to_bcd(0).unwrap(), 0);
        assert_eq!(binary_to_bcd(7).unwrap(), 0x7);
        assert_eq!(binary_to_bcd(0xc).unwrap(), 0x12);
        assert_eq!(binary_to_bcd(0xff).unwrap(), 0x255);
        assert_eq!(binary_to_bcd(1_000_000).unwrap(), 0x1_000_000);
        assert_eq!(
            binary_to_bcd(9_999_999_999_999_999).unwrap(),
            0x9999_9999_9999_9999
        );
    }

    #[test]
    fn test_binary_to_bcd_rejects_too_many_digits() {
        assert_eq!(
            binary_to_bcd(10_000_000_000_000_000),
            Err(Error::InputTooLarge {
                length: 17,
                max_length: 16,
            })
        );
        assert_eq!(
            binary_to_bcd(u64::MAX),
            Err(Error::InputTooLarge {
                length: 20,
                max_length: 16,
            })
        );
    }

    #[test]
    fn test_bcd_to_binary() {
        assert_eq!(bcd_to_binary(0).unwrap(), 0);
        assert_eq!(bcd_to_binary(0x12).unwrap(), 0xc);
        assert_eq!(bcd_to_binary(0x255).unwrap(), 0xff);
        assert_eq!(
            bcd_to_binary(0x9999_9999_9999_9999).unwrap(),
            9_999_999_999_999_999
        );
    }

    #[test]
    fn test_bcd_to_binary_rejects_non_decimal_nibbles() {
        assert_eq!(
            bcd_to_binary(0x1a),
            Err(Error::InvalidDigit { digit: 0xa, index: 0 })
        );
        // The highest bad digit wins when several nibbles are out of range.
        assert_eq!(
            bcd_to_binary(0xa5),
            Err(Error::InvalidDigit { digit: 0xa, index: 1 })
        );
        assert_eq!(
            bcd_to_binary(0xf000_0000_0000_0000),
            Err(Error::InvalidDigit {
                digit: 0xf,
                index: 15,
            })
        );
    }

    #[test]
    fn test_binary_bcd_round_trip() {
        for value in [0u64, 1, 9, 10, 99, 100, 255, 1066, 424_242, 9_999_999_999_999_999] {
            let bcd = binary_to_bcd(value).unwrap();
            assert_eq!(bcd_to_binary(bcd).unwrap(), value, "value {}", value);
        }
    }
}
