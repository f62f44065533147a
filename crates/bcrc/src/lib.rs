//! Runtime-parameterized CRC computation.
//!
//! Most CRC crates fix the algorithm at compile time. This crate instead
//! models the full parameter space at runtime: any width from 1 to 64 bits,
//! any polynomial, initial value and final XOR, and independent input/output
//! reflection. One accumulator type covers every variant in the CRC
//! catalogue, plus every variant nobody bothered to catalogue.
//!
//! # Model
//!
//! Parameters follow the Rocksoft conventions used by the
//! [CRC catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width` | CRC width in bits (1..=64) |
//! | `polynomial` | Generator polynomial, without the implicit high bit |
//! | `initial` | Initial register value |
//! | `reflect_in` | Reflect each input byte before processing |
//! | `reflect_out` | Reflect the final register before the XOR |
//! | `xor_out` | Value XORed into the final register |
//!
//! Numeric parameters are masked to the low `width` bits at construction;
//! a width outside 1..=64 is rejected with [`CrcError::InvalidParameter`].
//!
//! # Example
//!
//! ```rust
//! use bcrc::{Crc, CrcParams};
//!
//! // CRC-16/ARC, built from raw parameters
//! let params = CrcParams::new(16, 0x8005)?
//!   .with_reflect_input(true)
//!   .with_reflect_output(true);
//!
//! // One-shot computation
//! assert_eq!(Crc::compute(params, b"123456789"), 0xBB3D);
//!
//! // Streaming computation, chainable like the accumulator it is
//! let mut crc = Crc::new(params);
//! assert_eq!(crc.process("1234").process("56789").checksum(), 0xBB3D);
//! assert_eq!(crc.reset().process("123456789").checksum(), 0xBB3D);
//!
//! // Or start from a catalogue preset
//! assert_eq!(Crc::compute(CrcParams::CRC32_ISO, b"123456789"), 0xCBF4_3926);
//! # Ok::<(), bcrc::CrcError>(())
//! ```
//!
//! # Performance
//!
//! Construction builds a 256-entry lookup table (O(256 × 8) bit steps); each
//! processed byte is then a single table lookup. The bit-at-a-time simulation
//! lives in [`reference`] and exists as the correctness oracle, not as a
//! production path.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! bcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod crc;
mod error;
mod params;
pub mod reference;
mod table;

pub use crc::{Crc, TextEncoding};
pub use error::CrcError;
pub use params::CrcParams;
pub use table::LookupTable;
// Re-export the trait for convenience
pub use bcrc_traits::Checksum;
#[cfg(feature = "std")]
pub use bcrc_traits::io::{ChecksumReader, ChecksumWriter};
