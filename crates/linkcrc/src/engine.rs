//! Generic CRC engine selected at runtime.
//!
//! One engine computes one of three classic standards, chosen by
//! [`Standard`]. Several engines of different widths coexist in one program;
//! results are widened to `u32`.
//!
//! | Standard | Descriptor | Check |
//! |----------|------------|-------|
//! | [`Standard::Ccitt`] | CRC-16/CCITT-FALSE (0x1021, init 0xFFFF) | `0x29B1` |
//! | [`Standard::Crc16`] | CRC-16/ARC (reflected 0x8005) | `0xBB3D` |
//! | [`Standard::Crc32`] | CRC-32/ISO-HDLC | `0xCBF43926` |
//!
//! # Example
//!
//! ```
//! use linkcrc::engine::{ChecksumEngine, Standard};
//!
//! let engine = ChecksumEngine::new(Standard::Crc32);
//! assert_eq!(engine.slow(b"123456789"), engine.fast(b"123456789"));
//! assert_eq!(engine.name(), "CRC-32");
//! ```

use core::fmt;

use crate::{CrcParams, arc::CRC16_ARC, ccitt::CRC16_CCITT_FALSE, crc32::CRC32};

/// Standard computed by a [`ChecksumEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Standard {
  /// CRC-CCITT: CRC-16/CCITT-FALSE.
  Ccitt,
  /// CRC-16: CRC-16/ARC.
  Crc16,
  /// CRC-32: CRC-32/ISO-HDLC.
  #[default]
  Crc32,
}

impl Standard {
  /// Every standard, narrowest first.
  pub const ALL: [Self; 3] = [Self::Ccitt, Self::Crc16, Self::Crc32];

  /// Short display name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Ccitt => "CRC-CCITT",
      Self::Crc16 => "CRC-16",
      Self::Crc32 => "CRC-32",
    }
  }

  /// Descriptor computed for this standard.
  #[must_use]
  pub const fn params(self) -> &'static CrcParams {
    match self {
      Self::Ccitt => &CrcParams::CRC16_CCITT_FALSE,
      Self::Crc16 => &CrcParams::CRC16_ARC,
      Self::Crc32 => &CrcParams::CRC32_ISO_HDLC,
    }
  }

  /// Checksum width in bits.
  #[must_use]
  pub const fn width(self) -> u8 {
    self.params().width
  }
}

impl fmt::Display for Standard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Runtime-selected CRC computation.
///
/// Cheap to copy: tables live in the process-wide variant statics, shared
/// with the named functions of the same descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChecksumEngine {
  standard: Standard,
}

impl ChecksumEngine {
  /// Engine for `standard`. Tables are built on first `fast` use.
  #[inline]
  #[must_use]
  pub const fn new(standard: Standard) -> Self {
    Self { standard }
  }

  /// Standard this engine computes.
  #[inline]
  #[must_use]
  pub const fn standard(&self) -> Standard {
    self.standard
  }

  /// Short display name of the standard.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.standard.name()
  }

  /// Checksum width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.standard.width()
  }

  /// Descriptor computed by this engine.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &'static CrcParams {
    self.standard.params()
  }

  /// Build this standard's table now.
  pub fn init(&self) {
    match self.standard {
      Standard::Ccitt => CRC16_CCITT_FALSE.init(),
      Standard::Crc16 => CRC16_ARC.init(),
      Standard::Crc32 => CRC32.init(),
    }
  }

  /// Bitwise reference checksum of `data`.
  #[must_use]
  pub fn slow(&self, data: &[u8]) -> u32 {
    match self.standard {
      Standard::Ccitt => CRC16_CCITT_FALSE.slow(data).into(),
      Standard::Crc16 => CRC16_ARC.slow(data).into(),
      Standard::Crc32 => CRC32.slow(data),
    }
  }

  /// Table-driven checksum of `data`.
  #[must_use]
  pub fn fast(&self, data: &[u8]) -> u32 {
    match self.standard {
      Standard::Ccitt => CRC16_CCITT_FALSE.fast(data).into(),
      Standard::Crc16 => CRC16_ARC.fast(data).into(),
      Standard::Crc32 => CRC32.fast(data),
    }
  }
}

impl From<Standard> for ChecksumEngine {
  fn from(standard: Standard) -> Self {
    Self::new(standard)
  }
}

/// Build the tables of every [`Standard`] eagerly.
pub fn crc_init() {
  for standard in Standard::ALL {
    ChecksumEngine::new(standard).init();
  }
}

/// Bitwise reference checksum of `data` under `standard`.
#[inline]
#[must_use]
pub fn crc_slow(standard: Standard, data: &[u8]) -> u32 {
  ChecksumEngine::new(standard).slow(data)
}

/// Table-driven checksum of `data` under `standard`.
#[inline]
#[must_use]
pub fn crc_fast(standard: Standard, data: &[u8]) -> u32 {
  ChecksumEngine::new(standard).fast(data)
}
