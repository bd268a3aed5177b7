// SPDX-License-Identifier: MIT
//
// Parse errors. The color math itself is total; only text input can fail.

use thiserror::Error;

/// Failure to read a hexadecimal color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHexError {
    #[error("invalid hex color length: {0} digits (expected 3, 4, 6 or 8)")]
    InvalidLength(usize),

    /// `index` counts chars from the start of the input, `#` included.
    #[error("invalid hex digit {digit:?} at index {index}")]
    InvalidDigit { digit: char, index: usize },
}

/// Result type alias for fallible srlab-color operations.
pub type Result<T> = std::result::Result<T, ParseHexError>;
