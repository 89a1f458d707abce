//! CRC-8/DVB-S2 (polynomial 0xD5).
//!
//! Used by the RunCam device protocol, CRSF and MSP v2 framing. All three
//! append a single CRC byte computed over the preceding frame bytes.

use traits::FrameError;

use crate::{Algorithm, CrcParams, macros::define_crc_type, reference};

/// Process-wide CRC-8/DVB-S2 algorithm (table built on first use).
pub static CRC8_DVB_S2: Algorithm<u8> = Algorithm::new(CrcParams::CRC8_DVB_S2);

/// Fold a single byte into a running CRC-8/DVB-S2 (bitwise).
///
/// ```
/// use linkcrc::dvb_s2::crc8_dvb_s2;
///
/// let crc = b"123456789".iter().fold(0, |crc, &b| crc8_dvb_s2(crc, b));
/// assert_eq!(crc, 0xBC);
/// ```
#[inline]
#[must_use]
pub const fn crc8_dvb_s2(crc: u8, byte: u8) -> u8 {
  reference::update(&CrcParams::CRC8_DVB_S2, crc as u32, &[byte]) as u8
}

/// Continue a CRC-8/DVB-S2 over `data` (table path).
///
/// Start from `0` for a new frame.
#[inline]
#[must_use]
pub fn crc8_dvb_s2_update(crc: u8, data: &[u8]) -> u8 {
  CRC8_DVB_S2.fast_update(crc, data)
}

/// Check a frame whose last byte is the CRC-8/DVB-S2 of everything before it.
///
/// # Errors
///
/// - [`FrameError::TooShort`] for an empty frame
/// - [`FrameError::Mismatch`] when the trailer byte is wrong
pub fn verify(frame: &[u8]) -> Result<(), FrameError> {
  let Some((&expected, body)) = frame.split_last() else {
    return Err(FrameError::TooShort { len: 0, min: 1 });
  };
  let computed = crc8_dvb_s2_update(0, body);
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
  /// Streaming CRC-8/DVB-S2.
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc8DvbS2};
  ///
  /// assert_eq!(Crc8DvbS2::checksum(b"123456789"), 0xBC);
  /// ```
  pub struct Crc8DvbS2 {
    word: u8,
    params: CrcParams::CRC8_DVB_S2,
    algorithm: CRC8_DVB_S2,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Checksum;

  #[test]
  fn check_value() {
    assert_eq!(crc8_dvb_s2_update(0, b"123456789"), 0xBC);
    assert_eq!(CRC8_DVB_S2.slow(b"123456789"), 0xBC);
  }

  #[test]
  fn zero_byte_keeps_zero() {
    assert_eq!(crc8_dvb_s2(0, 0), 0);
    assert_eq!(crc8_dvb_s2_update(0, &[0]), 0);
  }

  #[test]
  fn single_step_matches_table_step() {
    for crc in [0u8, 0x01, 0x5A, 0xBC, 0xFF] {
      for byte in 0..=255u8 {
        assert_eq!(crc8_dvb_s2(crc, byte), crc8_dvb_s2_update(crc, &[byte]));
      }
    }
  }

  #[test]
  fn running_equals_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let (a, b) = data.split_at(17);
    assert_eq!(crc8_dvb_s2_update(crc8_dvb_s2_update(0, a), b), 0x2A);
  }

  #[test]
  fn verify_frames() {
    let mut frame = b"\xCC\x01\x02".to_vec();
    frame.push(crc8_dvb_s2_update(0, &frame));
    assert_eq!(verify(&frame), Ok(()));

    frame[1] ^= 0x10;
    assert!(verify(&frame).unwrap_err().is_mismatch());
    assert_eq!(verify(&[]), Err(FrameError::TooShort { len: 0, min: 1 }));
  }

  #[test]
  fn hasher_matches_function() {
    let data = b"runcam";
    assert_eq!(Crc8DvbS2::checksum(data), crc8_dvb_s2_update(0, data));
  }
}
