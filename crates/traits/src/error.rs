//! Error types for frame verification.
//!
//! Checksum computation itself is total. Errors only arise when a caller asks
//! whether a received frame carries a valid trailer.

use core::fmt;

/// A framed message failed verification.
///
/// Checksum values are widened to `u32` so one error type serves every width.
///
/// # Examples
///
/// ```
/// use traits::FrameError;
///
/// fn check(trailer: u16, computed: u16) -> Result<(), FrameError> {
///   if trailer == computed {
///     Ok(())
///   } else {
///     Err(FrameError::Mismatch {
///       expected: trailer.into(),
///       computed: computed.into(),
///     })
///   }
/// }
///
/// assert!(check(0xCDC5, 0xCDC5).is_ok());
/// assert!(check(0xCDC5, 0x0000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FrameError {
  /// The frame is shorter than its checksum trailer (plus any fixed header).
  TooShort {
    /// Length of the frame that was supplied.
    len: usize,
    /// Minimum length a frame of this kind can have.
    min: usize,
  },
  /// The trailer does not match the checksum computed over the frame body.
  Mismatch {
    /// Checksum carried by the frame.
    expected: u32,
    /// Checksum computed over the frame body.
    computed: u32,
  },
  /// The frame does not follow its textual encoding (e.g. Modbus ASCII hex).
  Malformed,
}

impl FrameError {
  /// Returns `true` for [`FrameError::Mismatch`].
  #[inline]
  #[must_use]
  pub const fn is_mismatch(&self) -> bool {
    matches!(self, Self::Mismatch { .. })
  }
}

impl fmt::Display for FrameError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::TooShort { len, min } => write!(f, "frame too short: {len} bytes, need at least {min}"),
      Self::Mismatch { expected, computed } => {
        write!(f, "checksum mismatch: frame carries {expected:#x}, computed {computed:#x}")
      }
      Self::Malformed => f.write_str("malformed frame encoding"),
    }
  }
}

impl core::error::Error for FrameError {}
