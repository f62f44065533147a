//! Basic engine usage: presets, raw parameters, streaming, and resume.
//!
//! Run with: `cargo run --example basic -p bcrc`

use bcrc::{Crc, CrcParams, TextEncoding};

fn main() -> Result<(), bcrc::CrcError> {
  preset_examples();
  raw_parameter_examples()?;
  streaming_examples();
  resume_example();
  text_example()?;
  Ok(())
}

/// Catalogue presets: one-shot computation.
fn preset_examples() {
  println!("--- Catalogue Presets ---\n");

  let data = b"123456789";

  let crc32 = Crc::compute(CrcParams::CRC32_ISO, data);
  println!("CRC-32 (ISO-HDLC): 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let crc32c = Crc::compute(CrcParams::CRC32C, data);
  println!("CRC-32C:           0x{crc32c:08X}");
  assert_eq!(crc32c, 0xE306_9283);

  let crc64 = Crc::compute(CrcParams::CRC64_XZ, data);
  println!("CRC-64 (XZ):       0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  let crc16 = Crc::compute(CrcParams::CRC16_ARC, data);
  println!("CRC-16 (ARC):      0x{crc16:04X}");
  assert_eq!(crc16, 0xBB3D);

  println!();
}

/// Any width, any polynomial: parameters are a runtime value.
fn raw_parameter_examples() -> Result<(), bcrc::CrcError> {
  println!("--- Raw Parameters ---\n");

  // CRC-5/USB, a sub-byte width.
  let usb = CrcParams::new(5, 0x05)?
    .with_initial(0x1F)
    .with_reflect_input(true)
    .with_reflect_output(true)
    .with_final_xor(0x1F);
  let crc5 = Crc::compute(usb, b"123456789");
  println!("CRC-5 (USB):       0x{crc5:02X}");
  assert_eq!(crc5, 0x19);

  // A width of 0 or above 64 is rejected, not truncated.
  assert!(CrcParams::new(0, 0x07).is_err());
  assert!(CrcParams::new(65, 0x07).is_err());
  println!("width 0 and 65 rejected");

  println!();
  Ok(())
}

/// Streaming computation: process data in chunks, chain freely.
fn streaming_examples() {
  println!("--- Streaming ---\n");

  let mut crc = Crc::new(CrcParams::CRC32_ISO);
  crc.process(b"1234");
  crc.process(b"56789");
  println!("streamed CRC-32:   0x{:08X}", crc.checksum());
  assert_eq!(crc.checksum(), 0xCBF4_3926);

  // checksum() is a pure read: keep processing afterwards.
  crc.process(b"...");
  println!("extended CRC-32:   0x{:08X}", crc.checksum());

  // reset() reseeds; calls chain like the accumulator handle it is.
  let chained = crc.reset().process("123456789").checksum();
  println!("chained CRC-32:    0x{chained:08X}");
  assert_eq!(chained, 0xCBF4_3926);

  println!();
}

/// Resume computation from a previously returned checksum.
fn resume_example() {
  println!("--- Resume ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let saved = Crc::compute(CrcParams::CRC32_ISO, part1);
  println!("saved state:       0x{saved:08X}");

  let mut resumed = Crc::resume(CrcParams::CRC32_ISO, saved);
  resumed.process(part2);
  let final_crc = resumed.checksum();
  println!("resumed CRC:       0x{final_crc:08X}");

  let mut full = Crc::new(CrcParams::CRC32_ISO);
  full.process(part1);
  full.process(part2);
  assert_eq!(final_crc, full.checksum());
  println!("matches full computation");

  println!();
}

/// Text goes through an explicit, documented encoding.
fn text_example() -> Result<(), bcrc::CrcError> {
  println!("--- Text Encoding ---\n");

  let mut crc = Crc::new(CrcParams::CRC16_ARC);
  crc.process_text("123456789", TextEncoding::Ascii)?;
  println!("ASCII text CRC:    0x{:04X}", crc.checksum());

  // Non-ASCII input is rejected before anything is folded.
  let err = crc.reset().process_text("naïve", TextEncoding::Ascii).unwrap_err();
  println!("non-ASCII rejected: {err}");

  Ok(())
}
