//! Error types for XMP options and paths
//!
//! This module defines all error types used by the option vocabularies and
//! the property-path model.

use thiserror::Error;

/// Error types for XMP option and path operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmpError {
    /// A raw bitmask carries bits the option vocabulary does not recognize
    #[error("Bad options: the option bit(s) 0x{0:x} are invalid")]
    InvalidOptionBits(u32),

    /// Individually valid option bits form an inconsistent combination
    #[error("Bad options: {0}")]
    BadOptions(String),

    /// Indexed access past the end of a path
    #[error("Index out of range: {index} (path has {len} segments)")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The number of segments in the path
        len: usize,
    },
}

impl XmpError {
    /// Whether this error reports an invalid option configuration
    pub fn is_bad_options(&self) -> bool {
        matches!(self, XmpError::InvalidOptionBits(_) | XmpError::BadOptions(_))
    }

    /// The exact offending bits, if this error was raised for unknown bits
    pub fn invalid_bits(&self) -> Option<u32> {
        match self {
            XmpError::InvalidOptionBits(bits) => Some(*bits),
            _ => None,
        }
    }
}

/// Result type alias for XMP operations
pub type XmpResult<T> = Result<T, XmpError>;
