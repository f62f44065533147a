//! The CRC accumulator.
//!
//! One mutable register, seeded from the parameter set, folded forward one
//! byte per table lookup. `reset` and `process` return `&mut Self` so call
//! sites can chain, matching the accumulator's origin as a builder-style
//! handle:
//!
//! ```rust
//! use bcrc::{Crc, CrcParams};
//!
//! let mut crc = Crc::new(CrcParams::CRC16_ARC);
//! assert_eq!(crc.reset().process("123456789").checksum(), 0xBB3D);
//! ```

use bcrc_traits::Checksum;

use crate::error::CrcError;
use crate::params::{CrcParams, reflect_bits};
use crate::table::LookupTable;

/// Byte encoding applied by [`Crc::process_text`].
///
/// Checksums are defined over bytes; hashing text therefore requires naming
/// an encoding. An undocumented default here is the one place a CRC API can
/// silently produce wrong answers, so the choice is explicit and caller
/// visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
  /// The string's UTF-8 bytes. Infallible; this is the documented default,
  /// and what [`Crc::process`] applies when handed a string.
  #[default]
  Utf8,
  /// Strict ASCII. Text containing any non-ASCII character is rejected with
  /// [`CrcError::InvalidInput`] before a single byte is folded.
  Ascii,
}

impl TextEncoding {
  const fn name(self) -> &'static str {
    match self {
      Self::Utf8 => "UTF-8",
      Self::Ascii => "ASCII",
    }
  }
}

/// A streaming CRC accumulator for one runtime parameter set.
///
/// Holds the parameters, the derived 256-entry lookup table, and the running
/// register. The register is the only mutable state: there is no terminal
/// state, and an accumulator can be reset and reused indefinitely.
///
/// Intended for exclusive use by one caller at a time; all mutation goes
/// through `&mut self`, and sharing across threads requires external
/// synchronization like any other `&mut` state.
///
/// # Example
///
/// ```rust
/// use bcrc::{Crc, CrcParams};
///
/// let mut crc = Crc::new(CrcParams::CRC32_ISO);
/// crc.process(b"1234");
/// crc.process(b"56789");
/// assert_eq!(crc.checksum(), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Crc {
  params: CrcParams,
  table: LookupTable,
  /// Running state: reflected-domain when `reflect_in`, left-justified
  /// normal-domain otherwise.
  register: u64,
}

impl Crc {
  /// Create an accumulator for `params`, seeded with its initial value.
  ///
  /// Builds the lookup table (256 × 8 bit steps); parameters are already
  /// validated, so construction is infallible.
  #[must_use]
  pub fn new(params: CrcParams) -> Self {
    let table = LookupTable::for_params(&params);
    Self {
      params,
      table,
      register: seed(&params),
    }
  }

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn compute(params: CrcParams, data: &[u8]) -> u64 {
    let mut crc = Self::new(params);
    crc.process(data);
    crc.checksum()
  }

  /// Create an accumulator that resumes from a previously returned checksum.
  ///
  /// Processing more data continues the stream that produced `crc`:
  ///
  /// ```rust
  /// use bcrc::{Crc, CrcParams};
  ///
  /// let first = Crc::compute(CrcParams::CRC32_ISO, b"hello ");
  /// let mut resumed = Crc::resume(CrcParams::CRC32_ISO, first);
  /// resumed.process(b"world");
  /// assert_eq!(resumed.checksum(), Crc::compute(CrcParams::CRC32_ISO, b"hello world"));
  /// ```
  #[must_use]
  pub fn resume(params: CrcParams, crc: u64) -> Self {
    let mut this = Self::new(params);
    this.register = unfinalize(&params, crc);
    this
  }

  /// Reset the register to the seeded initial state.
  ///
  /// Returns `self` for chaining. Pure mutation; no allocation.
  #[inline]
  pub fn reset(&mut self) -> &mut Self {
    self.register = seed(&self.params);
    self
  }

  /// Fold a sequence of bytes into the register.
  ///
  /// Accepts anything byte-viewable: `&[u8]`, arrays, `&str` (its UTF-8
  /// bytes — see [`TextEncoding`] for the encoding contract). An empty
  /// sequence is a no-op. Calls are cumulative: processing `"ab"` then
  /// `"c"` equals processing `"abc"` once. Returns `self` for chaining.
  #[inline]
  pub fn process(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
    let data = data.as_ref();
    if self.params.reflect_in() {
      for &byte in data {
        self.register = self.table.entry((self.register ^ u64::from(byte)) as u8) ^ (self.register >> 8);
      }
    } else {
      for &byte in data {
        self.register = self.table.entry((self.register >> 56) as u8 ^ byte) ^ (self.register << 8);
      }
    }
    self
  }

  /// Fold text into the register under an explicit [`TextEncoding`].
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::InvalidInput`] when `text` is not representable in
  /// `encoding`. The register is untouched on failure: validation happens
  /// before any byte is folded.
  pub fn process_text(&mut self, text: &str, encoding: TextEncoding) -> Result<&mut Self, CrcError> {
    if matches!(encoding, TextEncoding::Ascii) && !text.is_ascii() {
      return Err(CrcError::InvalidInput {
        encoding: encoding.name(),
      });
    }
    Ok(self.process(text))
  }

  /// The checksum for everything processed since the last reset.
  ///
  /// Applies output reflection and the final XOR without mutating the
  /// register: the call is idempotent and freely interleavable with further
  /// [`process`](Self::process) calls.
  #[inline]
  #[must_use]
  pub fn checksum(&self) -> u64 {
    let params = &self.params;
    let out = if params.reflect_in() {
      // Register already lives in the reflected domain.
      if params.reflect_out() {
        self.register
      } else {
        reflect_bits(self.register, params.width())
      }
    } else {
      let raw = self.register >> (64 - u32::from(params.width()));
      if params.reflect_out() { reflect_bits(raw, params.width()) } else { raw }
    };
    (out ^ params.xor_out()) & params.mask()
  }

  /// The parameter set this accumulator was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }
}

impl core::fmt::Debug for Crc {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Crc")
      .field("params", &self.params)
      .field("checksum", &self.checksum())
      .finish_non_exhaustive()
  }
}

impl Checksum for Crc {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.process(data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.checksum()
  }

  #[inline]
  fn reset(&mut self) {
    Crc::reset(self);
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.process(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

/// Seed register value for `params`, in the internal convention.
#[inline]
const fn seed(params: &CrcParams) -> u64 {
  if params.reflect_in() {
    reflect_bits(params.initial(), params.width())
  } else {
    params.initial() << (64 - params.width() as u32)
  }
}

/// Inverse of `checksum()`: recover the internal register from a final value.
const fn unfinalize(params: &CrcParams, crc: u64) -> u64 {
  let raw = (crc ^ params.xor_out()) & params.mask();
  if params.reflect_in() {
    if params.reflect_out() {
      raw
    } else {
      reflect_bits(raw, params.width())
    }
  } else {
    let normal = if params.reflect_out() {
      reflect_bits(raw, params.width())
    } else {
      raw
    };
    normal << (64 - params.width() as u32)
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;
  use crate::reference;

  #[test]
  fn check_string_arc() {
    assert_eq!(Crc::compute(CrcParams::CRC16_ARC, b"123456789"), 0xBB3D);
  }

  #[test]
  fn empty_input_is_noop() {
    let mut crc = Crc::new(CrcParams::CRC16_ARC);
    let before = crc.checksum();
    crc.process(b"");
    assert_eq!(crc.checksum(), before);
    assert_eq!(before, 0x0000);
  }

  #[test]
  fn empty_checksum_is_seed_transform() {
    // CCITT-FALSE: init 0xFFFF, no reflection, no final XOR.
    assert_eq!(Crc::compute(CrcParams::CRC16_CCITT_FALSE, b""), 0xFFFF);
  }

  #[test]
  fn incremental_matches_oneshot() {
    let mut crc = Crc::new(CrcParams::CRC32_ISO);
    crc.process(b"1234");
    crc.process(b"56789");
    assert_eq!(crc.checksum(), 0xCBF4_3926);
  }

  #[test]
  fn chaining_matches_statements() {
    let mut chained = Crc::new(CrcParams::CRC16_ARC);
    let chained_value = chained.reset().process("input").checksum();

    let mut stepwise = Crc::new(CrcParams::CRC16_ARC);
    stepwise.reset();
    stepwise.process("input");
    assert_eq!(stepwise.checksum(), chained_value);
  }

  #[test]
  fn checksum_does_not_mutate() {
    let mut crc = Crc::new(CrcParams::CRC32_ISO);
    crc.process(b"data");
    let first = crc.checksum();
    assert_eq!(crc.checksum(), first);
    crc.process(b"more");
    let after = crc.checksum();
    assert_ne!(first, after);
    assert_eq!(crc.checksum(), after);
  }

  #[test]
  fn reset_restores_seed() {
    let mut crc = Crc::new(CrcParams::CRC32_ISO);
    crc.process(b"garbage");
    crc.reset();
    crc.process(b"123456789");
    assert_eq!(crc.checksum(), 0xCBF4_3926);
  }

  #[test]
  fn resume_continues_stream() {
    let data = b"hello world";
    for params in [CrcParams::CRC32_ISO, CrcParams::CRC16_CCITT_FALSE, CrcParams::CRC8_MAXIM] {
      let (a, b) = data.split_at(6);
      let first = Crc::compute(params, a);
      let mut resumed = Crc::resume(params, first);
      resumed.process(b);
      assert_eq!(resumed.checksum(), Crc::compute(params, data));
    }
  }

  #[test]
  fn process_text_utf8_matches_bytes() {
    let mut text = Crc::new(CrcParams::CRC32_ISO);
    text.process_text("héllo", TextEncoding::Utf8).unwrap();

    assert_eq!(text.checksum(), Crc::compute(CrcParams::CRC32_ISO, "héllo".as_bytes()));
  }

  #[test]
  fn process_text_ascii_rejects_non_ascii() {
    let mut crc = Crc::new(CrcParams::CRC32_ISO);
    crc.process(b"prefix");
    let before = crc.checksum();

    let err = crc.process_text("héllo", TextEncoding::Ascii).unwrap_err();
    assert_eq!(err, CrcError::InvalidInput { encoding: "ASCII" });
    // Strong exception safety: nothing was folded.
    assert_eq!(crc.checksum(), before);
  }

  #[test]
  fn process_text_ascii_accepts_ascii() {
    let mut crc = Crc::new(CrcParams::CRC16_ARC);
    crc.process_text("123456789", TextEncoding::Ascii).unwrap();
    assert_eq!(crc.checksum(), 0xBB3D);
  }

  #[test]
  fn single_bytes_match_reference_all_conventions() {
    // Exhaustive one-byte agreement between the table engine and the bitwise
    // oracle, covering sub-byte widths and all four reflection combinations.
    let cases = [
      CrcParams::new(3, 0x3).unwrap().with_initial(0x7),
      CrcParams::new(5, 0x05).unwrap().with_initial(0x1F).with_reflect_input(true).with_reflect_output(true),
      CrcParams::new(7, 0x09).unwrap(),
      CrcParams::new(8, 0x07).unwrap(),
      CrcParams::new(12, 0x80F).unwrap().with_reflect_output(true),
      CrcParams::new(16, 0x8005).unwrap().with_reflect_input(true),
      CrcParams::new(32, 0x04C1_1DB7).unwrap().with_initial(0xFFFF_FFFF),
      CrcParams::new(64, 0x42F0_E1EB_A9EA_3693).unwrap().with_reflect_input(true).with_reflect_output(true),
    ];
    for params in cases {
      for byte in 0u8..=255 {
        assert_eq!(
          Crc::compute(params, &[byte]),
          reference::bitwise(&params, &[byte]),
          "mismatch for {params:?} byte {byte:#04x}"
        );
      }
    }
  }

  #[test]
  fn clone_shares_nothing_mutable() {
    let mut crc = Crc::new(CrcParams::CRC32_ISO);
    crc.process(b"1234");

    let mut fork = crc.clone();
    crc.process(b"56789");
    fork.process(b"56789");
    assert_eq!(crc.checksum(), fork.checksum());
  }

  #[test]
  fn checksum_trait_delegates() {
    let mut crc = Crc::new(CrcParams::CRC16_ARC);
    crc.update(b"1234");
    crc.update(b"56789");
    assert_eq!(crc.finalize(), 0xBB3D);

    bcrc_traits::Checksum::reset(&mut crc);
    crc.update_vectored(&[b"1234".as_slice(), b"56789".as_slice()]);
    assert_eq!(crc.finalize(), 0xBB3D);
  }

  #[cfg(feature = "std")]
  #[test]
  fn write_impl_feeds_register() {
    use std::io::Write as _;

    let mut crc = Crc::new(CrcParams::CRC32_ISO);
    crc.write_all(b"123456789").unwrap();
    crc.flush().unwrap();
    assert_eq!(crc.checksum(), 0xCBF4_3926);
  }
}
