//! Core checksum traits for bcrc.
//!
//! This crate provides the foundational trait that bcrc hashers conform to.
//! It is `no_std` compatible and has zero dependencies.
//!
//! # Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Streaming checksum computation (update / finalize / reset) |
//! | [`io::ChecksumReader`] | Wrap a `Read`, checksum bytes as they pass through |
//! | [`io::ChecksumWriter`] | Wrap a `Write`, checksum bytes as they pass through |
//!
//! Unlike digest-style traits, implementors here are constructed at runtime
//! from algorithm parameters, so this trait deliberately has no `new()` or
//! `Default` constructor: callers build a hasher first and hand it to whatever
//! needs one.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::Checksum;
