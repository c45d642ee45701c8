use thiserror::Error;

/// Errors reported by the codecs in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter violated the contract of the called operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An input needed more bits or digits than the operation can hold
    #[error("Input too large: length {length} exceeds maximum {max_length}")]
    InputTooLarge { length: usize, max_length: usize },

    /// A packed decimal word contained a nibble that is not a decimal digit
    #[error("Invalid BCD digit {digit:#x} at digit index {index}")]
    InvalidDigit { digit: u8, index: u32 },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;
