//! Robotis Dynamixel protocol 2.0 packet CRC (CRC-16/UMTS).
//!
//! Polynomial 0x8005, zero initial value, no reflection. The CRC covers the
//! whole packet from the header up to the last parameter and is appended low
//! byte first:
//!
//! ```text
//! FF FF FD 00 [id] [len lo] [len hi] [instruction] [params ...] [crc lo] [crc hi]
//! ```
//!
//! `len` counts the instruction, the parameters and the two CRC bytes.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use traits::FrameError;

use crate::{Algorithm, CrcParams, macros::define_crc_type};

/// Process-wide CRC-16/UMTS algorithm (table built on first use).
pub static CRC16_UMTS: Algorithm<u16> = Algorithm::new(CrcParams::CRC16_UMTS);

/// Protocol 2.0 packet header.
pub const HEADER: [u8; 4] = [0xFF, 0xFF, 0xFD, 0x00];

/// Shortest packet: header, id, length, instruction and CRC.
pub const MIN_PACKET: usize = 10;

/// Bytes before the part counted by the length field: header, id, length.
const LENGTH_OFFSET: usize = 7;

/// Continue a Dynamixel CRC over `data` (table path).
///
/// Start from `0` for a new packet.
///
/// ```
/// use linkcrc::robotis::robotis_servo_crc;
///
/// // Ping id 1.
/// let ping = [0xFF, 0xFF, 0xFD, 0x00, 0x01, 0x03, 0x00, 0x01];
/// assert_eq!(robotis_servo_crc(0, &ping), 0x4E19);
/// ```
#[inline]
#[must_use]
pub fn robotis_servo_crc(accum: u16, data: &[u8]) -> u16 {
  CRC16_UMTS.fast_update(accum, data)
}

/// Append the CRC trailer to a packet.
#[cfg(feature = "alloc")]
pub fn append_crc(packet: &mut Vec<u8>) {
  let crc = robotis_servo_crc(0, packet);
  packet.extend_from_slice(&crc.to_le_bytes());
}

/// Check header, length field and CRC trailer of a received packet.
///
/// # Errors
///
/// - [`FrameError::TooShort`] below [`MIN_PACKET`] bytes
/// - [`FrameError::Malformed`] for a wrong header or a length field that
///   disagrees with the packet size
/// - [`FrameError::Mismatch`] when the trailer differs from the computed CRC
pub fn verify_packet(packet: &[u8]) -> Result<(), FrameError> {
  let len = packet.len();
  if len < MIN_PACKET {
    return Err(FrameError::TooShort { len, min: MIN_PACKET });
  }
  let (head, trailer) = packet.split_at(len - 2);
  let declared = match head {
    [0xFF, 0xFF, 0xFD, 0x00, _id, lo, hi, ..] => usize::from(u16::from_le_bytes([*lo, *hi])),
    _ => return Err(FrameError::Malformed),
  };
  if declared != len - LENGTH_OFFSET {
    return Err(FrameError::Malformed);
  }
  let expected = match trailer {
    [lo, hi] => u16::from_le_bytes([*lo, *hi]),
    _ => return Err(FrameError::Malformed),
  };
  let computed = robotis_servo_crc(0, head);
  if computed == expected {
    Ok(())
  } else {
    Err(FrameError::Mismatch {
      expected: expected.into(),
      computed: computed.into(),
    })
  }
}

define_crc_type! {
  /// Streaming CRC-16/UMTS.
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc16Umts};
  ///
  /// assert_eq!(Crc16Umts::checksum(b"123456789"), 0xFEE8);
  /// ```
  pub struct Crc16Umts {
    word: u16,
    params: CrcParams::CRC16_UMTS,
    algorithm: CRC16_UMTS,
  }
}
