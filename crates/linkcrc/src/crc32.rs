//! CRC-32/ISO-HDLC and the Ethernet receive hash filter.
//!
//! The same CRC-32 that forms the Ethernet FCS is used by MAC controllers
//! (ENC28J60 and friends) to filter multicast frames: six bits of the CRC of
//! the destination address select one bit in a 64-bit hash table register.
//! A frame is accepted when its bit is set.

use crate::{Algorithm, CrcParams, macros::define_crc_type};

/// Process-wide CRC-32 algorithm (table built on first use).
pub static CRC32: Algorithm<u32> = Algorithm::new(CrcParams::CRC32_ISO_HDLC);

/// Right shift that moves the hash slot to the low bits of the CRC.
pub const HASH_SHIFT: u32 = 23;

/// Mask applied after [`HASH_SHIFT`]: 64 slots.
pub const HASH_MASK: u32 = 0x3F;

/// CRC-32 of `data` (table path).
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  CRC32.fast(data)
}

/// Hash-table slot (0..64) of a MAC address.
///
/// Builds the CRC-32 table on first use.
///
/// ```
/// use linkcrc::crc32::compute_hashtable_fast32;
///
/// // IPv4 all-hosts multicast group.
/// assert_eq!(compute_hashtable_fast32(&[0x01, 0x00, 0x5E, 0x00, 0x00, 0x01]), 12);
/// ```
#[inline]
#[must_use]
pub fn compute_hashtable_fast32(addr: &[u8; 6]) -> u8 {
  ((crc32(addr) >> HASH_SHIFT) & HASH_MASK) as u8
}

/// 64-bit multicast hash filter, as loaded into a MAC's hash table register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HashFilter {
  bits: u64,
}

impl HashFilter {
  /// An empty filter that accepts nothing.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { bits: 0 }
  }

  /// Rebuild a filter from a register value.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u64) -> Self {
    Self { bits }
  }

  /// Register value to program into the controller.
  #[inline]
  #[must_use]
  pub const fn bits(&self) -> u64 {
    self.bits
  }

  /// Accept frames addressed to `addr` (and every address sharing its slot).
  #[inline]
  pub fn insert(&mut self, addr: &[u8; 6]) {
    self.bits |= 1u64 << compute_hashtable_fast32(addr);
  }

  /// Whether a frame addressed to `addr` passes the filter.
  #[inline]
  #[must_use]
  pub fn contains(&self, addr: &[u8; 6]) -> bool {
    self.bits & (1u64 << compute_hashtable_fast32(addr)) != 0
  }

  /// Drop every slot.
  #[inline]
  pub fn clear(&mut self) {
    self.bits = 0;
  }
}

impl<'a> FromIterator<&'a [u8; 6]> for HashFilter {
  fn from_iter<I: IntoIterator<Item = &'a [u8; 6]>>(iter: I) -> Self {
    let mut filter = Self::new();
    for addr in iter {
      filter.insert(addr);
    }
    filter
  }
}

define_crc_type! {
  /// Streaming CRC-32/ISO-HDLC.
  ///
  /// # Example
  ///
  /// ```rust
  /// use linkcrc::{Checksum, Crc32};
  ///
  /// assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
  /// ```
  pub struct Crc32 {
    word: u32,
    params: CrcParams::CRC32_ISO_HDLC,
    algorithm: CRC32,
  }
}
