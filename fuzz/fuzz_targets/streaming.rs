//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary chunkings, resets, and resumes produce the same
//! result as one-shot computation.

#![no_main]

use arbitrary::Arbitrary;
use bcrc::{Crc, CrcParams};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width_seed: u8,
  polynomial: u64,
  initial: u64,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates.
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let width = 1 + input.width_seed % 64;
  let params = CrcParams::new(width, input.polynomial)
    .expect("width is in 1..=64 by construction")
    .with_initial(input.initial)
    .with_reflect_input(input.reflect_in)
    .with_reflect_output(input.reflect_out)
    .with_final_xor(input.xor_out);

  let data = &input.data;
  let expected = Crc::compute(params, data);

  // Arbitrary chunk sizes must not change the result.
  let mut crc = Crc::new(params);
  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    crc.process(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }
  assert_eq!(crc.checksum(), expected, "streaming mismatch");

  // checksum() is a pure read.
  assert_eq!(crc.checksum(), expected, "checksum mutated state");

  // Reset and replay in one shot.
  crc.reset().process(data);
  assert_eq!(crc.checksum(), expected, "reset/replay mismatch");

  // Resume from the midpoint checksum.
  let split = data.len() / 2;
  let first = Crc::compute(params, &data[..split]);
  let mut resumed = Crc::resume(params, first);
  resumed.process(&data[split..]);
  assert_eq!(resumed.checksum(), expected, "resume mismatch");
});
