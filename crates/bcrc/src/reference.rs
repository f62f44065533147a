//! Bitwise reference implementation.
//!
//! The canonical "source of truth" for CRC computation over any parameter
//! set. It processes one bit at a time, directly mirroring the mathematical
//! definition:
//!
//! - **Obviously correct**: no tables, no internal register conventions —
//!   just the shift register from the textbook, `width` bits wide
//! - **Const-evaluable**: check values are verified at compile time below
//! - **The test oracle**: the table-driven engine must produce identical
//!   results for every parameter set and input
//!
//! # Performance
//!
//! Intentionally slow (~8 operations per bit). Use for correctness
//! verification and generating expected values; use [`Crc`](crate::Crc) for
//! production throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::{CrcParams, reflect_bits};

/// Bitwise CRC computation over `data` for any parameter set.
///
/// Maintains the register in the unreflected (MSB-first) domain of the
/// Rocksoft model: input bytes are bit-reversed when `reflect_in`, each bit
/// is fed at the top of the register, and `reflect_out`/`xor_out` are applied
/// at the end.
#[must_use]
pub const fn bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let width = params.width() as u32;
  let mask = params.mask();
  let top = 1u64 << (width - 1);
  let poly = params.polynomial();

  let mut register = params.initial();
  let mut i: usize = 0;
  while i < data.len() {
    let byte = if params.reflect_in() { data[i].reverse_bits() } else { data[i] };
    let mut bit: u32 = 0;
    while bit < 8 {
      register ^= (((byte >> (7 - bit)) & 1) as u64) << (width - 1);
      let high = register & top != 0;
      register = (register << 1) & mask;
      if high {
        register ^= poly;
      }
      bit += 1;
    }
    i += 1;
  }

  let out = if params.reflect_out() {
    reflect_bits(register, params.width())
  } else {
    register
  };
  (out ^ params.xor_out()) & mask
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Check values from the CRC catalogue, verified against the reference at
// compile time. If these fail, the build fails.

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

const _: () = assert!(bitwise(&CrcParams::CRC32C, CHECK_INPUT) == 0xE306_9283);
const _: () = assert!(bitwise(&CrcParams::CRC32_ISO, CHECK_INPUT) == 0xCBF4_3926);
const _: () = assert!(bitwise(&CrcParams::CRC64_XZ, CHECK_INPUT) == 0x995D_C9BB_DF19_39FA);
const _: () = assert!(bitwise(&CrcParams::CRC64_NVME, CHECK_INPUT) == 0xAE8B_1486_0A79_9888);
const _: () = assert!(bitwise(&CrcParams::CRC16_ARC, CHECK_INPUT) == 0xBB3D);
const _: () = assert!(bitwise(&CrcParams::CRC16_CCITT_FALSE, CHECK_INPUT) == 0x29B1);
const _: () = assert!(bitwise(&CrcParams::CRC8_MAXIM, CHECK_INPUT) == 0xA1);
const _: () = assert!(bitwise(&CrcParams::CRC24_OPENPGP, CHECK_INPUT) == 0x0021_CF02);
