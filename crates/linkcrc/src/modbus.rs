//! Modbus serial line checksums.
//!
//! - **RTU**: CRC-16/MODBUS (reflected 0x8005, init 0xFFFF) over address,
//!   function code and data, appended **low byte first**.
//! - **ASCII**: LRC, the two's complement of the modulo-256 byte sum, over the
//!   decoded binary message, sent as two hex characters before `CR LF`. LRC is
//!   not a CRC.
//!
//! ```text
//! RTU    [addr][func][data ...][crc lo][crc hi]
//! ASCII  ':' hex(addr func data ...) hex(lrc) '\r' '\n'
//! ```
//!
//! # Example
//!
//! ```
//! use linkcrc::modbus;
//!
//! // Read Holding Registers: slave 1, start 0, quantity 10.
//! let pdu = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A];
//! assert_eq!(modbus::mb_crc16(&pdu), 0xCDC5);
//! assert_eq!(modbus::encode_crc(modbus::mb_crc16(&pdu)), [0xC5, 0xCD]);
//! assert_eq!(modbus::mb_ascii_lrc(&pdu), 0xF2);
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use traits::FrameError;

use crate::{Algorithm, CrcParams, macros::define_crc_type};

/// Process-wide CRC-16/MODBUS algorithm (table built on first use).
pub static CRC16_MODBUS: Algorithm<u16> = Algorithm::new(CrcParams::CRC16_MODBUS);

/// Shortest RTU frame: address, function code and the two CRC bytes.
pub const RTU_MIN_FRAME: usize = 4;

/// Shortest ASCII frame: `:`, address, function code, LRC (two hex digits each) and `CR LF`.
pub const ASCII_MIN_FRAME: usize = 9;

// ─────────────────────────────────────────────────────────────────────────────
// RTU
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-16/MODBUS of an RTU frame body (table path).
#[inline]
#[must_use]
pub fn mb_crc16(frame: &[u8]) -> u16 {
  CRC16_MODBUS.fast(frame)
}

/// Wire order of an RTU CRC: low byte first.
#[inline]
#[must_use]
pub const fn encode_crc(crc: u16) -> [u8; 2] {
  crc.to_le_bytes()
}

/// Append the RTU CRC trailer to `frame`.
#[cfg(feature = "alloc")]
pub fn append_crc(frame: &mut Vec<u8>) {
  let crc = mb_crc16(frame);
  frame.extend_from_slice(&encode_crc(crc));
}

/// Check the CRC trailer of a received RTU frame.
///
/// # Errors
///
/// - [`FrameError::TooShort`] below [`RTU_MIN_FRAME`] bytes
/// - [`FrameError::Mismatch`] when the trailer differs from the computed CRC
pub fn verify_rtu_frame(frame: &[u8]) -> Result<(), FrameError> {
  let len = frame.len();
  if len < RTU_MIN_FRAME {
    return Err(FrameError::TooShort { len, min: RTU_MIN_FRAME });
  }
  let (body, trailer) = frame.split_at(len - 2);
  let expected = match trailer {
    [lo, hi] => u16::from_le_bytes([*lo, *hi]),
    _ => return Err(FrameError::Malformed),
  };
  let computed = mb_crc16(body);
  if computed == expected {
    Ok(())
  } else {
    Err(FrameError::Mismatch {
      expected: expected.into(),
      computed: computed.into(),
    })
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// ASCII
// ─────────────────────────────────────────────────────────────────────────────

/// LRC of a decoded ASCII-mode message.
#[inline]
#[must_use]
pub fn mb_ascii_lrc(frame: &[u8]) -> u8 {
  mb_ascii_lrc_update(0, frame)
}

/// Continue an LRC from a previously returned value.
///
/// Start from `0` for a new message.
#[inline]
#[must_use]
pub fn mb_ascii_lrc_update(lrc: u8, data: &[u8]) -> u8 {
  let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
  lrc.wrapping_sub(sum)
}

#[inline]
const fn hex_value(digit: u8) -> Option<u8> {
  match digit {
    b'0'..=b'9' => Some(digit - b'0'),
    b'A'..=b'F' => Some(digit - b'A' + 10),
    b'a'..=b'f' => Some(digit - b'a' + 10),
    _ => None,
  }
}

/// Check the LRC of a received ASCII frame, including its `:` and `CR LF`.
///
/// Hex digits may be upper or lower case.
///
/// # Errors
///
/// - [`FrameError::TooShort`] below [`ASCII_MIN_FRAME`] bytes
/// - [`FrameError::Malformed`] for a missing delimiter or a non-hex character
/// - [`FrameError::Mismatch`] when the LRC differs from the computed one
pub fn verify_ascii_frame(frame: &[u8]) -> Result<(), FrameError> {
  let len = frame.len();
  if len < ASCII_MIN_FRAME {
    return Err(FrameError::TooShort {
      len,
      min: ASCII_MIN_FRAME,
    });
  }
  let hex = frame
    .strip_prefix(b":")
    .and_then(|rest| rest.strip_suffix(b"\r\n"))
    .ok_or(FrameError::Malformed)?;
  if hex.len() % 2 != 0 {
    return Err(FrameError::Malformed);
  }

  let count = hex.len() / 2;
  let mut lrc = 0u8;
  let mut expected = 0u8;
  for (i, pair) in hex.chunks_exact(2).enumerate() {
    let byte = match pair {
      [hi, lo] => match (hex_value(*hi), hex_value(*lo)) {
        (Some(hi), Some(lo)) => (hi << 4) | lo,
        _ => return Err(FrameError::Malformed),
      },
      _ => return Err(FrameError::Malformed),
    };
    if i + 1 == count {
      expected = byte;
    } else {
      lrc = mb_ascii_lrc_update(lrc, &[byte]);
    }
  }

  if lrc == expected {
    Ok(())
  } else {
    Err(FrameError::Mismatch {
      expected: expected.into(),
      computed: lrc.into(),
    })
  }
}

#[cfg(feature = "alloc")]
#[inline]
const fn hex_digit(nibble: u8) -> u8 {
  match nibble & 0x0F {
    n @ 0..=9 => b'0' + n,
    n => b'A' + n - 10,
  }
}

/// Encode a binary message as a complete ASCII frame with LRC.
///
/// Hex digits are upper case.
#[cfg(feature = "alloc")]
#[must_use]
pub fn encode_ascii_frame(message: &[u8]) -> Vec<u8> {
  let lrc = mb_ascii_lrc(message);
  let mut frame = Vec::with_capacity(message.len() * 2 + 5);
  frame.push(b':');
  for &byte in message.iter().chain(core::iter::once(&lrc)) {
    frame.push(hex_digit(byte >> 4));
    frame.push(hex_digit(byte));
  }
  frame.extend_from_slice(b"\r\n");
  frame
}

// ─────────────────────────────────────────────────────────────────────────────
// Hashers
// ─────────────────────────────────────────────────────────────────────────────

define_crc_type! {
  /// Streaming CRC-16/MODBUS.
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc16Modbus};
  ///
  /// let mut hasher = Crc16Modbus::new();
  /// hasher.update(&[0x01, 0x03, 0x00]);
  /// hasher.update(&[0x00, 0x00, 0x0A]);
  /// assert_eq!(hasher.finalize(), 0xCDC5);
  /// ```
  pub struct Crc16Modbus {
    word: u16,
    params: CrcParams::CRC16_MODBUS,
    algorithm: CRC16_MODBUS,
  }
}

/// Streaming Modbus ASCII LRC.
///
/// # Example
///
/// ```rust
/// use linkcrc::{Checksum, Lrc};
///
/// assert_eq!(Lrc::checksum(&[0x02, 0x30, 0x31]), 0x9D);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lrc {
  lrc: u8,
}

impl Lrc {
  /// Create a hasher for an empty message.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { lrc: 0 }
  }

  /// Create a hasher to resume from a previous LRC value.
  #[inline]
  #[must_use]
  pub const fn resume(lrc: u8) -> Self {
    Self { lrc }
  }
}

impl traits::Checksum for Lrc {
  const OUTPUT_SIZE: usize = 1;
  type Output = u8;

  #[inline]
  fn new() -> Self {
    Self::new()
  }

  #[inline]
  fn with_initial(initial: u8) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.lrc = mb_ascii_lrc_update(self.lrc, data);
  }

  #[inline]
  fn finalize(&self) -> u8 {
    self.lrc
  }

  #[inline]
  fn reset(&mut self) {
    self.lrc = 0;
  }
}
