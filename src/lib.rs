pub mod bcd;
pub mod ecc;
pub mod error;

pub use ecc::hamming;
pub use error::{Error, Result};
