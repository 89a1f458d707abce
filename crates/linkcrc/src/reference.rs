//! Bitwise reference implementation for every CRC width.
//!
//! This module is the "source of truth" for CRC computation. It processes one
//! bit at a time in the natural (MSB-first) orientation of the Rocksoft model:
//!
//! 1. Start from `initial`
//! 2. Reflect each input byte when `reflect_in` is set
//! 3. XOR the byte into the top of the register, then shift eight times,
//!    XOR-ing the polynomial in whenever the bit shifted out was set
//! 4. Reflect the register when `reflect_out` is set, then apply `xor_out`
//!
//! The table-driven path in [`crate::table`] must produce identical results.
//! These functions are `const` so the catalogue check values are verified at
//! compile time.
//!
//! # Performance
//!
//! Intentionally slow (~8 operations per bit). Use for correctness checks,
//! test oracles and one-off computations on tiny buffers.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::{CrcParams, reflect_bits};

/// Compute the CRC of `data` from the descriptor's initial value.
///
/// A zero-length buffer returns [`CrcParams::empty_value`].
///
/// # Panics
///
/// Panics if `params.width` is outside `8..=32`.
#[inline]
#[must_use]
pub const fn checksum(params: &CrcParams, data: &[u8]) -> u32 {
  check_width(params);
  update(params, params.empty_value(), data)
}

/// Continue a CRC from a previously returned checksum value.
///
/// `update(p, checksum(p, a), b) == checksum(p, a || b)` for every split.
///
/// # Panics
///
/// Panics if `params.width` is outside `8..=32`.
#[must_use]
pub const fn update(params: &CrcParams, crc: u32, data: &[u8]) -> u32 {
  check_width(params);
  let mask = params.mask();
  let top = 1u32 << (params.width - 1);
  let shift = params.width as u32 - 8;

  let mut reg = natural_register(params, crc);
  let mut i: usize = 0;
  while i < data.len() {
    let byte = if params.reflect_in {
      reflect_bits(data[i] as u32, 8)
    } else {
      data[i] as u32
    };
    reg ^= byte << shift;
    let mut bit: u32 = 0;
    while bit < 8 {
      reg = if reg & top != 0 {
        (reg << 1) ^ params.polynomial
      } else {
        reg << 1
      };
      reg &= mask;
      bit += 1;
    }
    i += 1;
  }

  let out = if params.reflect_out {
    reflect_bits(reg, params.width)
  } else {
    reg
  };
  (out ^ params.xor_out) & mask
}

const fn check_width(params: &CrcParams) {
  assert!(params.width >= 8 && params.width <= 32, "CRC width must be within 8..=32");
}

/// Undo the output transform to recover the natural-orientation register.
const fn natural_register(params: &CrcParams, crc: u32) -> u32 {
  let reg = (crc ^ params.xor_out) & params.mask();
  if params.reflect_out {
    reflect_bits(reg, params.width)
  } else {
    reg
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Standard test input for CRC check values.
pub const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  let mut i = 0;
  while i < CrcParams::ALL.len() {
    let params = &CrcParams::ALL[i];
    assert!(checksum(params, CHECK_INPUT) == params.check);
    i += 1;
  }
};
