//! CRC algorithm parameters.
//!
//! This module defines the runtime parameter set for a CRC algorithm,
//! following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! # Reflection
//!
//! "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-32C) use
//! reflected input and output, which maps to LSB-first processing.

use crate::error::CrcError;

/// CRC algorithm parameters.
///
/// Captures everything needed to define a CRC algorithm. Construction
/// validates the width and masks every numeric parameter to the low `width`
/// bits, so a `CrcParams` value is valid by construction and the fields are
/// deliberately private.
///
/// # Example
///
/// ```rust
/// use bcrc::CrcParams;
///
/// // CRC-16/ARC from raw parameters
/// let params = CrcParams::new(16, 0x8005)?
///   .with_reflect_input(true)
///   .with_reflect_output(true);
/// assert_eq!(params.polynomial(), 0x8005);
///
/// // Values wider than `width` are masked, never silently kept
/// let narrow = CrcParams::new(8, 0x8005)?;
/// assert_eq!(narrow.polynomial(), 0x05);
/// # Ok::<(), bcrc::CrcError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits, 1..=64.
  width: u8,
  /// Generator polynomial (without implicit high bit), width-masked.
  polynomial: u64,
  /// Initial register value, width-masked.
  initial: u64,
  /// Reflect input bytes before processing.
  reflect_in: bool,
  /// Reflect final register before XOR.
  reflect_out: bool,
  /// XOR value applied to the final register, width-masked.
  xor_out: u64,
}

impl CrcParams {
  /// CRC-32C (Castagnoli) - iSCSI, SCTP, Btrfs, ext4, RocksDB, LevelDB.
  pub const CRC32C: Self = Self::preset(32, 0x1EDC6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

  /// CRC-32 (ISO-HDLC) - Ethernet, gzip, zip, PNG, SATA.
  ///
  /// The most widely used CRC-32 variant.
  pub const CRC32_ISO: Self = Self::preset(32, 0x04C11DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

  /// CRC-64/XZ - XZ Utils, 7-Zip.
  pub const CRC64_XZ: Self = Self::preset(
    64,
    0x42F0_E1EB_A9EA_3693,
    0xFFFF_FFFF_FFFF_FFFF,
    true,
    true,
    0xFFFF_FFFF_FFFF_FFFF,
  );

  /// CRC-64/NVME - NVMe storage specification.
  pub const CRC64_NVME: Self = Self::preset(
    64,
    0xAD93_D235_94C9_3659,
    0xFFFF_FFFF_FFFF_FFFF,
    true,
    true,
    0xFFFF_FFFF_FFFF_FFFF,
  );

  /// CRC-16/ARC (aka CRC-16/IBM) - Modbus, USB, many legacy protocols.
  pub const CRC16_ARC: Self = Self::preset(16, 0x8005, 0x0000, true, true, 0x0000);

  /// CRC-16/CCITT-FALSE (aka CRC-16/IBM-3740) - X.25, PPP, SD cards.
  pub const CRC16_CCITT_FALSE: Self = Self::preset(16, 0x1021, 0xFFFF, false, false, 0x0000);

  /// CRC-8/MAXIM - 1-Wire, iButton, sensor networks.
  pub const CRC8_MAXIM: Self = Self::preset(8, 0x31, 0x00, true, true, 0x00);

  /// CRC-24/OpenPGP - OpenPGP (RFC 4880).
  pub const CRC24_OPENPGP: Self = Self::preset(24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000);

  /// Preset constructor for the catalogue constants above.
  ///
  /// Width must be a literal in 1..=64; values are masked like `new` does.
  const fn preset(width: u8, polynomial: u64, initial: u64, reflect_in: bool, reflect_out: bool, xor_out: u64) -> Self {
    let mask = mask_for(width);
    Self {
      width,
      polynomial: polynomial & mask,
      initial: initial & mask,
      reflect_in,
      reflect_out,
      xor_out: xor_out & mask,
    }
  }

  /// Create a parameter set for a `width`-bit CRC over `polynomial`.
  ///
  /// Defaults: `initial = 0`, no reflection, `xor_out = 0`; adjust with the
  /// `with_*` builders. The polynomial is masked to the low `width` bits.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::InvalidParameter`] when `width` is 0 or exceeds 64.
  pub const fn new(width: u8, polynomial: u64) -> Result<Self, CrcError> {
    if width == 0 || width > 64 {
      return Err(CrcError::InvalidParameter {
        parameter: "width",
        value: width as u64,
      });
    }
    Ok(Self {
      width,
      polynomial: polynomial & mask_for(width),
      initial: 0,
      reflect_in: false,
      reflect_out: false,
      xor_out: 0,
    })
  }

  /// Set the initial register value (width-masked).
  #[must_use]
  pub const fn with_initial(mut self, initial: u64) -> Self {
    self.initial = initial & self.mask();
    self
  }

  /// Set whether input bytes are reflected (processed LSB-first).
  #[must_use]
  pub const fn with_reflect_input(mut self, reflect: bool) -> Self {
    self.reflect_in = reflect;
    self
  }

  /// Set whether the final register is bit-reversed before the XOR.
  #[must_use]
  pub const fn with_reflect_output(mut self, reflect: bool) -> Self {
    self.reflect_out = reflect;
    self
  }

  /// Set the value XORed into the final register (width-masked).
  #[must_use]
  pub const fn with_final_xor(mut self, xor_out: u64) -> Self {
    self.xor_out = xor_out & self.mask();
    self
  }

  /// Width in bits, 1..=64.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial, masked to `width` bits.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// Initial register value, masked to `width` bits.
  #[inline]
  #[must_use]
  pub const fn initial(&self) -> u64 {
    self.initial
  }

  /// Whether input bytes are reflected.
  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the final register is reflected.
  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// Final XOR value, masked to `width` bits.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u64 {
    self.xor_out
  }

  /// Mask covering the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    mask_for(self.width)
  }

  /// Returns the reflected polynomial (bit-reversed within `width` bits).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect_bits(self.polynomial, self.width)
  }
}

/// Mask covering the low `width` bits; `width` must be 1..=64.
const fn mask_for(width: u8) -> u64 {
  u64::MAX >> (64 - width as u32)
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// `value` must already be masked to `width` bits.
#[inline]
#[must_use]
pub(crate) const fn reflect_bits(value: u64, width: u8) -> u64 {
  value.reverse_bits() >> (64 - width as u32)
}
