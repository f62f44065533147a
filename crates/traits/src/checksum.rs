//! The streaming checksum trait.
//!
//! - **Performance**: zero-cost abstraction, inline-friendly
//! - **Streaming**: incremental updates for large or chunked data
//! - **Runtime construction**: implementors are built from parameters, not
//!   `Default` — the trait covers only the running state machine

use core::fmt::Debug;

/// Streaming checksum computation.
///
/// Provides the running-state interface shared by all bcrc hashers: feed
/// bytes with [`update`](Self::update), read the current value with
/// [`finalize`](Self::finalize), and return to the seeded state with
/// [`reset`](Self::reset).
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent: calling it repeatedly without an
///   intervening `update`/`reset` returns the same value, and it never
///   mutates the running state.
/// - `reset()` must restore the hasher to the state it had at construction.
/// - Updates are cumulative: `update(a); update(b)` must equal
///   `update(ab)` for any split of the input.
pub trait Checksum {
  /// The checksum output type.
  ///
  /// `u64` for the runtime-parameterized CRC engine; narrower algorithms
  /// would use `u32`, `u16`, and so on.
  type Output: Copy + Eq + Debug;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each
  /// buffer in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume or mutate the hasher; further updates
  /// may follow, and a later `finalize()` reflects them.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its seeded state.
  fn reset(&mut self);
}
