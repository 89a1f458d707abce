//! CRC-16 on the CCITT polynomial (0x1021).
//!
//! Two descriptors share the polynomial:
//!
//! - **CRC-16/XMODEM** (zero init): [`crc_ccit16_fast`], [`Crc16Xmodem`].
//! - **CRC-16/CCITT-FALSE** (init 0xFFFF, catalogued as CRC-16/IBM-3740):
//!   the DroneCAN/UAVCAN v0 multi-frame transfer CRC, [`uavcan_transfer_crc`],
//!   [`Crc16CcittFalse`].
//!
//! A UAVCAN v0 transfer CRC is seeded with the 64-bit data type signature
//! (little-endian) before the payload; see
//! [`uavcan_transfer_crc_with_signature`].

use crate::{Algorithm, CrcParams, macros::define_crc_type};

/// Process-wide CRC-16/XMODEM algorithm (table built on first use).
pub static CRC16_XMODEM: Algorithm<u16> = Algorithm::new(CrcParams::CRC16_XMODEM);

/// Process-wide CRC-16/CCITT-FALSE algorithm (table built on first use).
pub static CRC16_CCITT_FALSE: Algorithm<u16> = Algorithm::new(CrcParams::CRC16_CCITT_FALSE);

/// Build the CCITT table now rather than on the first [`crc_ccit16_fast`].
#[inline]
pub fn crc_ccit16_init() {
  CRC16_XMODEM.init();
}

/// CRC-16/XMODEM of `data` (table path).
///
/// ```
/// assert_eq!(linkcrc::ccitt::crc_ccit16_fast(b"123456789"), 0x31C3);
/// ```
#[inline]
#[must_use]
pub fn crc_ccit16_fast(data: &[u8]) -> u16 {
  CRC16_XMODEM.fast(data)
}

/// UAVCAN v0 transfer CRC of `data` (CRC-16/CCITT-FALSE, table path).
#[inline]
#[must_use]
pub fn uavcan_transfer_crc(data: &[u8]) -> u16 {
  CRC16_CCITT_FALSE.fast(data)
}

/// UAVCAN v0 transfer CRC seeded with a data type signature.
///
/// The eight signature bytes are fed little-endian, then the payload.
#[inline]
#[must_use]
pub fn uavcan_transfer_crc_with_signature(signature: u64, payload: &[u8]) -> u16 {
  let seeded = CRC16_CCITT_FALSE.fast(&signature.to_le_bytes());
  CRC16_CCITT_FALSE.fast_update(seeded, payload)
}

define_crc_type! {
  /// Streaming CRC-16/XMODEM.
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc16Xmodem};
  ///
  /// assert_eq!(Crc16Xmodem::checksum(b"123456789"), 0x31C3);
  /// ```
  pub struct Crc16Xmodem {
    word: u16,
    params: CrcParams::CRC16_XMODEM,
    algorithm: CRC16_XMODEM,
  }
}

define_crc_type! {
  /// Streaming CRC-16/CCITT-FALSE (UAVCAN v0 transfer CRC).
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc16CcittFalse};
  ///
  /// let mut crc = Crc16CcittFalse::new();
  /// crc.update(&0x0123_4567_89AB_CDEFu64.to_le_bytes());
  /// crc.update(b"payload");
  /// assert_eq!(
  ///   crc.finalize(),
  ///   linkcrc::ccitt::uavcan_transfer_crc_with_signature(0x0123_4567_89AB_CDEF, b"payload"),
  /// );
  /// ```
  pub struct Crc16CcittFalse {
    word: u16,
    params: CrcParams::CRC16_CCITT_FALSE,
    algorithm: CRC16_CCITT_FALSE,
  }
}
