//! Published check values from the CRC catalogue.
//!
//! Every vector is the checksum of the standard input `"123456789"`. The
//! selection deliberately spans sub-byte widths, non-byte-aligned widths,
//! and all four input/output reflection combinations.

use bcrc::{Crc, CrcParams};

const CHECK_INPUT: &[u8] = b"123456789";

fn check(params: CrcParams) -> u64 {
  Crc::compute(params, CHECK_INPUT)
}

fn params(width: u8, poly: u64) -> CrcParams {
  CrcParams::new(width, poly).expect("valid width")
}

#[test]
fn crc3_rohc() {
  let p = params(3, 0x3)
    .with_initial(0x7)
    .with_reflect_input(true)
    .with_reflect_output(true);
  assert_eq!(check(p), 0x6);
}

#[test]
fn crc5_usb() {
  let p = params(5, 0x05)
    .with_initial(0x1F)
    .with_reflect_input(true)
    .with_reflect_output(true)
    .with_final_xor(0x1F);
  assert_eq!(check(p), 0x19);
}

#[test]
fn crc7_mmc() {
  assert_eq!(check(params(7, 0x09)), 0x75);
}

#[test]
fn crc8_smbus() {
  assert_eq!(check(params(8, 0x07)), 0xF4);
}

#[test]
fn crc8_maxim() {
  assert_eq!(check(CrcParams::CRC8_MAXIM), 0xA1);
}

#[test]
fn crc12_umts() {
  // Reflects the output but not the input.
  let p = params(12, 0x80F).with_reflect_output(true);
  assert_eq!(check(p), 0xDAF);
}

#[test]
fn crc16_arc() {
  assert_eq!(check(CrcParams::CRC16_ARC), 0xBB3D);
}

#[test]
fn crc16_ccitt_false() {
  assert_eq!(check(CrcParams::CRC16_CCITT_FALSE), 0x29B1);
}

#[test]
fn crc16_kermit() {
  let p = params(16, 0x1021).with_reflect_input(true).with_reflect_output(true);
  assert_eq!(check(p), 0x2189);
}

#[test]
fn crc16_xmodem() {
  assert_eq!(check(params(16, 0x1021)), 0x31C3);
}

#[test]
fn crc16_riello() {
  // Asymmetric seed under reflection: exercises seed reflection.
  let p = params(16, 0x1021)
    .with_initial(0xB2AA)
    .with_reflect_input(true)
    .with_reflect_output(true);
  assert_eq!(check(p), 0x63D0);
}

#[test]
fn crc24_openpgp() {
  assert_eq!(check(CrcParams::CRC24_OPENPGP), 0x0021_CF02);
}

#[test]
fn crc32_iso_hdlc() {
  assert_eq!(check(CrcParams::CRC32_ISO), 0xCBF4_3926);
}

#[test]
fn crc32_bzip2() {
  let p = params(32, 0x04C1_1DB7)
    .with_initial(0xFFFF_FFFF)
    .with_final_xor(0xFFFF_FFFF);
  assert_eq!(check(p), 0xFC89_1918);
}

#[test]
fn crc32_mpeg2() {
  let p = params(32, 0x04C1_1DB7).with_initial(0xFFFF_FFFF);
  assert_eq!(check(p), 0x0376_E6E7);
}

#[test]
fn crc32c() {
  assert_eq!(check(CrcParams::CRC32C), 0xE306_9283);
}

#[test]
fn crc40_gsm() {
  let p = params(40, 0x0004_8200_09).with_final_xor(0xFF_FFFF_FFFF);
  assert_eq!(check(p), 0xD4_164F_C646);
}

#[test]
fn crc64_ecma_182() {
  assert_eq!(check(params(64, 0x42F0_E1EB_A9EA_3693)), 0x6C40_DF5F_0B49_7347);
}

#[test]
fn crc64_xz() {
  assert_eq!(check(CrcParams::CRC64_XZ), 0x995D_C9BB_DF19_39FA);
}

#[test]
fn crc64_nvme() {
  assert_eq!(check(CrcParams::CRC64_NVME), 0xAE8B_1486_0A79_9888);
}

#[test]
fn empty_input_vectors() {
  // Empty input leaves the seeded register untouched; the checksum is the
  // output transform of the seed.
  assert_eq!(Crc::compute(CrcParams::CRC16_ARC, b""), 0x0000);
  assert_eq!(Crc::compute(CrcParams::CRC16_CCITT_FALSE, b""), 0xFFFF);
  assert_eq!(Crc::compute(CrcParams::CRC32_ISO, b""), 0x0000_0000);
  assert_eq!(Crc::compute(CrcParams::CRC24_OPENPGP, b""), 0x00B7_04CE);
}

#[test]
fn width8_polynomial_is_masked() {
  // A polynomial wider than the register keeps only its low bits.
  let p = params(8, 0x8005);
  assert_eq!(p.polynomial(), 0x05);
  assert_eq!(Crc::compute(p, b""), 0x00);
  assert_eq!(Crc::compute(p, &[0]), 0x00);
}
