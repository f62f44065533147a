//! Error types for CRC construction and input handling.
//!
//! Two kinds only: parameters rejected at construction, and text that cannot
//! be represented in the requested encoding. Everything else in this crate is
//! infallible by type.

use core::fmt;

/// Error raised by CRC construction or text processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// A construction parameter is out of range.
  ///
  /// Fatal to construction: no partial accumulator is returned.
  InvalidParameter {
    /// Name of the offending parameter.
    parameter: &'static str,
    /// The rejected value.
    value: u64,
  },

  /// Text input cannot be represented in the requested encoding.
  ///
  /// The accumulator is left unchanged when this is returned: no bytes of
  /// the rejected input are folded into the register.
  InvalidInput {
    /// Name of the encoding the input failed to satisfy.
    encoding: &'static str,
  },
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidParameter { parameter, value } => {
        write!(f, "invalid CRC parameter `{parameter}`: {value:#x}")
      }
      Self::InvalidInput { encoding } => {
        write!(f, "input is not representable as {encoding}")
      }
    }
  }
}

impl core::error::Error for CrcError {}
