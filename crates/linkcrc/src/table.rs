//! Byte-at-a-time lookup tables.
//!
//! A [`CrcTable`] holds 256 entries, one per input byte value. Entry `i` is
//! one 8-bit division step of byte `i` starting from a zero register, which
//! lets the table path consume a whole byte per lookup:
//!
//! | Register domain | Step |
//! |-----------------|------|
//! | reflected (`reflect_in`) | `reg = T[(reg ^ byte) & 0xFF] ^ (reg >> 8)` |
//! | natural | `reg = T[((reg >> (width - 8)) ^ byte) & 0xFF] ^ (reg << 8)` |
//!
//! Entries are stored at the algorithm's own width ([`Word`]), so a CRC-8
//! table costs 256 bytes and a CRC-16 table 512 bytes.

use core::fmt::Debug;

use crate::params::CrcParams;

mod sealed {
  pub trait Sealed {}
  impl Sealed for u8 {}
  impl Sealed for u16 {}
  impl Sealed for u32 {}
}

/// Unsigned checksum word: `u8`, `u16` or `u32`.
///
/// This trait is sealed. Computation happens in `u32`; `Word` only decides
/// how values and table entries are stored and returned.
pub trait Word: sealed::Sealed + Copy + Eq + Debug + Default + Send + Sync + Into<u32> + 'static {
  /// Width of the word in bits.
  const BITS: u8;

  /// Keep the low `BITS` bits of `value`.
  fn truncate(value: u32) -> Self;
}

impl Word for u8 {
  const BITS: u8 = 8;

  #[inline(always)]
  fn truncate(value: u32) -> Self {
    value as Self
  }
}

impl Word for u16 {
  const BITS: u8 = 16;

  #[inline(always)]
  fn truncate(value: u32) -> Self {
    value as Self
  }
}

impl Word for u32 {
  const BITS: u8 = 32;

  #[inline(always)]
  fn truncate(value: u32) -> Self {
    value
  }
}

/// Compute a single table entry for `index`.
///
/// Uses the reflected polynomial for reflected-input descriptors and the
/// natural polynomial (aligned to the top of the register) otherwise.
#[must_use]
pub const fn entry(params: &CrcParams, index: u8) -> u32 {
  let mask = params.mask();
  if params.reflect_in {
    let poly = params.polynomial_reflected();
    let mut crc = index as u32;
    let mut i = 0;
    while i < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      i += 1;
    }
    crc & mask
  } else {
    let top = 1u32 << (params.width - 1);
    let mut crc = (index as u32) << (params.width as u32 - 8);
    let mut i = 0;
    while i < 8 {
      crc = if crc & top != 0 {
        (crc << 1) ^ params.polynomial
      } else {
        crc << 1
      };
      crc &= mask;
      i += 1;
    }
    crc
  }
}

/// 256-entry lookup table for one descriptor.
///
/// Built by [`CrcTable::new`]; never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable<W: Word> {
  entries: [W; 256],
  reflected: bool,
  width: u8,
}

impl<W: Word> CrcTable<W> {
  /// Generate the table for `params`.
  ///
  /// # Panics
  ///
  /// Panics if `params.width` is below 8 or wider than `W`.
  #[must_use]
  pub fn new(params: &CrcParams) -> Self {
    assert!(
      params.width >= 8 && params.width <= W::BITS,
      "{} does not fit a {}-bit table",
      params.name,
      W::BITS
    );
    Self {
      entries: core::array::from_fn(|i| W::truncate(entry(params, i as u8))),
      reflected: params.reflect_in,
      width: params.width,
    }
  }

  /// Entry for input byte `index`.
  #[inline]
  #[must_use]
  #[allow(clippy::indexing_slicing)] // u8 index into a 256-entry array
  pub fn get(&self, index: u8) -> W {
    self.entries[usize::from(index)]
  }

  /// All 256 entries in index order.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[W; 256] {
    &self.entries
  }

  /// Whether the table was built for the reflected (LSB-first) domain.
  #[inline]
  #[must_use]
  pub fn is_reflected(&self) -> bool {
    self.reflected
  }

  /// Feed `data` through the table, returning the updated *raw* register.
  #[inline]
  #[must_use]
  pub fn update(&self, mut reg: u32, data: &[u8]) -> u32 {
    if self.reflected {
      for &byte in data {
        let entry: u32 = self.get((reg as u8) ^ byte).into();
        reg = entry ^ (reg >> 8);
      }
      reg
    } else {
      let shift = u32::from(self.width) - 8;
      let mask = u32::MAX >> (32 - u32::from(self.width));
      for &byte in data {
        let entry: u32 = self.get(((reg >> shift) as u8) ^ byte).into();
        reg = (entry ^ (reg << 8)) & mask;
      }
      reg
    }
  }
}

impl<W: Word> Debug for CrcTable<W> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CrcTable")
      .field("width", &self.width)
      .field("reflected", &self.reflected)
      .field("first", &self.entries.get(..4))
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::reference;

  fn table_checksum<W: Word>(params: &CrcParams, data: &[u8]) -> u32 {
    let table = CrcTable::<W>::new(params);
    params.finalize(table.update(params.init_register(), data))
  }

  #[test]
  fn first_entries() {
    let arc = CrcTable::<u16>::new(&CrcParams::CRC16_ARC);
    assert_eq!(arc.get(0), 0x0000);
    assert_eq!(arc.get(1), 0xC0C1);
    assert_eq!(arc.get(255), 0x4040);

    let xmodem = CrcTable::<u16>::new(&CrcParams::CRC16_XMODEM);
    assert_eq!(xmodem.get(1), 0x1021);
    assert_eq!(xmodem.get(2), 0x2042);

    let crc32 = CrcTable::<u32>::new(&CrcParams::CRC32_ISO_HDLC);
    assert_eq!(crc32.get(1), 0x7707_3096);
    assert_eq!(crc32.get(255), 0x2D02_EF8D);

    let dvb = CrcTable::<u8>::new(&CrcParams::CRC8_DVB_S2);
    assert_eq!(dvb.get(1), 0xD5);
  }

  #[test]
  fn entry_is_single_byte_division() {
    // Entry i equals the reference transform of byte i from a zero register.
    for params in CrcParams::ALL {
      for i in 0..=255u8 {
        let expected = reference::update(&params, params.finalize(0), &[i]);
        assert_eq!(params.finalize(entry(&params, i)), expected, "{} entry {i}", params.name);
      }
    }
  }

  #[test]
  fn check_values() {
    let input = reference::CHECK_INPUT;
    assert_eq!(table_checksum::<u8>(&CrcParams::CRC8_SMBUS, input), 0xF4);
    assert_eq!(table_checksum::<u8>(&CrcParams::CRC8_DVB_S2, input), 0xBC);
    assert_eq!(table_checksum::<u16>(&CrcParams::CRC16_ARC, input), 0xBB3D);
    assert_eq!(table_checksum::<u16>(&CrcParams::CRC16_XMODEM, input), 0x31C3);
    assert_eq!(table_checksum::<u16>(&CrcParams::CRC16_CCITT_FALSE, input), 0x29B1);
    assert_eq!(table_checksum::<u16>(&CrcParams::CRC16_MODBUS, input), 0x4B37);
    assert_eq!(table_checksum::<u16>(&CrcParams::CRC16_UMTS, input), 0xFEE8);
    assert_eq!(table_checksum::<u32>(&CrcParams::CRC32_ISO_HDLC, input), 0xCBF4_3926);
  }

  #[test]
  fn wide_table_accepts_narrow_params() {
    let table = CrcTable::<u32>::new(&CrcParams::CRC16_MODBUS);
    let params = CrcParams::CRC16_MODBUS;
    assert_eq!(params.finalize(table.update(params.init_register(), b"123456789")), 0x4B37);
  }

  #[test]
  #[should_panic(expected = "does not fit")]
  fn narrow_table_rejects_wide_params() {
    let _ = CrcTable::<u8>::new(&CrcParams::CRC16_ARC);
  }

  #[test]
  fn deterministic() {
    let a = CrcTable::<u16>::new(&CrcParams::CRC16_UMTS);
    let b = CrcTable::<u16>::new(&CrcParams::CRC16_UMTS);
    assert!(a == b);
    assert!(!a.is_reflected());
  }
}
