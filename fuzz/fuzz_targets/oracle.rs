//! Differential fuzzing against the bitwise reference.
//!
//! Drives arbitrary parameter sets and inputs through the table-driven
//! engine and compares every result with the bit-at-a-time oracle.

#![no_main]

use arbitrary::Arbitrary;
use bcrc::{Crc, CrcParams, reference};
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
}

fuzz_target!(|input: Input| {
  let width = 1 + input.width_seed % 64;
  let params = CrcParams::new(width, input.polynomial)
    .expect("width is in 1..=64 by construction")
    .with_initial(input.initial)
    .with_reflect_input(input.reflect_in)
    .with_reflect_output(input.reflect_out)
    .with_final_xor(input.xor_out);

  let ours = Crc::compute(params, &input.data);
  let oracle = reference::bitwise(&params, &input.data);

  assert_eq!(
    ours,
    oracle,
    "engine/oracle mismatch: params={:?}, len={}",
    params,
    input.data.len()
  );

  // The result must always fit the declared width.
  assert_eq!(ours & !params.mask(), 0, "checksum exceeds width: {ours:#x}");
});
