//! CRC-8/SMBUS, the plain "CRC-8".
//!
//! Polynomial 0x07, zero initial value, no reflection, no output XOR. Used by
//! SMBus packet error checking and many small sensor protocols.

use crate::{Algorithm, CrcParams, macros::define_crc_type, reference};

/// Process-wide CRC-8/SMBUS algorithm (table built on first use).
pub static CRC8_SMBUS: Algorithm<u8> = Algorithm::new(CrcParams::CRC8_SMBUS);

/// CRC-8/SMBUS of `data` (bitwise reference path).
///
/// ```
/// assert_eq!(linkcrc::crc8::crc8(b"123456789"), 0xF4);
/// ```
#[inline]
#[must_use]
pub const fn crc8(data: &[u8]) -> u8 {
  reference::checksum(&CrcParams::CRC8_SMBUS, data) as u8
}

define_crc_type! {
  /// Streaming CRC-8/SMBUS.
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc8Smbus};
  ///
  /// let mut hasher = Crc8Smbus::new();
  /// hasher.update(b"1234");
  /// hasher.update(b"56789");
  /// assert_eq!(hasher.finalize(), 0xF4);
  /// ```
  pub struct Crc8Smbus {
    word: u8,
    params: CrcParams::CRC8_SMBUS,
    algorithm: CRC8_SMBUS,
  }
}
