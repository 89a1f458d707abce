//! Core checksum traits for linkcrc.
//!
//! This crate provides the foundational traits that every linkcrc checksum
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming error-detection checksums | CRC-8, CRC-16, CRC-32, LRC |
//!
//! # Error Types
//!
//! - [`FrameError`] - A framed message failed checksum verification
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
pub mod error;
pub mod io;

pub use checksum::Checksum;
pub use error::FrameError;
