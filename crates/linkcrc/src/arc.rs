//! CRC-16/ARC (aka CRC-16/IBM, the classic "CRC-16").
//!
//! Reflected polynomial 0x8005 (0xA001 reflected), zero initial value. The
//! SimpleBGC serial API (v2.68 and later) appends it to every command,
//! transmitted low byte first.
//!
//! | Function | Path | Form |
//! |----------|------|------|
//! | [`crc16_arc_calculate`] | reference | one-shot |
//! | [`crc16_arc_update`] | reference | running, in place over two little-endian bytes |
//! | [`crc16_arc_fast`] | table | running |

use crate::{Algorithm, CrcParams, macros::define_crc_type, reference};

/// Process-wide CRC-16/ARC algorithm (table built on first use).
pub static CRC16_ARC: Algorithm<u16> = Algorithm::new(CrcParams::CRC16_ARC);

/// CRC-16/ARC of `data` (bitwise reference path).
#[inline]
#[must_use]
pub const fn crc16_arc_calculate(data: &[u8]) -> u16 {
  reference::checksum(&CrcParams::CRC16_ARC, data) as u16
}

/// Fold `data` into a running CRC-16/ARC stored as two little-endian bytes.
///
/// Start from `[0, 0]`. After the last fragment `crc` holds the trailer in
/// wire order.
///
/// ```
/// use linkcrc::arc::crc16_arc_update;
///
/// let mut crc = [0u8; 2];
/// crc16_arc_update(b"12345", &mut crc);
/// crc16_arc_update(b"6789", &mut crc);
/// assert_eq!(crc, [0x3D, 0xBB]);
/// ```
#[inline]
pub fn crc16_arc_update(data: &[u8], crc: &mut [u8; 2]) {
  let running = u16::from_le_bytes(*crc);
  *crc = (reference::update(&CrcParams::CRC16_ARC, running as u32, data) as u16).to_le_bytes();
}

/// Continue a CRC-16/ARC over `data` (table path).
///
/// Start from `0` for a new message.
#[inline]
#[must_use]
pub fn crc16_arc_fast(crc: u16, data: &[u8]) -> u16 {
  CRC16_ARC.fast_update(crc, data)
}

define_crc_type! {
  /// Streaming CRC-16/ARC.
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc16Arc};
  ///
  /// assert_eq!(Crc16Arc::checksum(b"123456789"), 0xBB3D);
  /// ```
  pub struct Crc16Arc {
    word: u16,
    params: CrcParams::CRC16_ARC,
    algorithm: CRC16_ARC,
  }
}
