//! A CRC descriptor bound to its lazily built table.
//!
//! [`Algorithm`] is the unit every named variant is built from. It owns a
//! [`CrcParams`] and a [`TableCache`], so a `static` algorithm builds its
//! table once, on first table-path use, and shares it for the process
//! lifetime:
//!
//! ```
//! use linkcrc::{Algorithm, CrcParams};
//!
//! const CRC16_KERMIT: CrcParams = CrcParams {
//!   name: "CRC-16/KERMIT",
//!   width: 16,
//!   polynomial: 0x1021,
//!   initial: 0x0000,
//!   reflect_in: true,
//!   reflect_out: true,
//!   xor_out: 0x0000,
//!   check: 0x2189,
//! };
//!
//! static KERMIT: Algorithm<u16> = Algorithm::new(CRC16_KERMIT);
//!
//! assert_eq!(KERMIT.fast(b"123456789"), 0x2189);
//! assert_eq!(KERMIT.slow(b"123456789"), 0x2189);
//! ```
//!
//! Values returned by every method are the *published* checksum (after
//! output reflection and `xor_out`); running forms accept such a value and
//! continue from it.

use core::fmt;

use crate::{
  cache::TableCache,
  config,
  params::CrcParams,
  reference,
  table::{CrcTable, Word},
};

/// Backend name of the bitwise reference path.
pub const REFERENCE_BACKEND: &str = "portable/bitwise";
/// Backend name of the byte-at-a-time table path.
pub const TABLE_BACKEND: &str = "portable/bytewise-table";

/// CRC descriptor plus its one-time table cache.
pub struct Algorithm<W: Word> {
  params: CrcParams,
  table: TableCache<CrcTable<W>>,
}

impl<W: Word> Algorithm<W> {
  /// Bind `params` to an empty table cache.
  ///
  /// # Panics
  ///
  /// Panics (at compile time in a `static`) if `params.width` is below 8 or
  /// wider than `W`.
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    assert!(
      params.width >= 8 && params.width <= W::BITS,
      "CRC width does not fit the checksum word"
    );
    Self {
      params,
      table: TableCache::new(),
    }
  }

  /// The descriptor this algorithm computes.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Checksum of a zero-length message.
  #[inline]
  #[must_use]
  pub fn empty_value(&self) -> W {
    W::truncate(self.params.empty_value())
  }

  /// Bitwise reference checksum of `data`.
  #[inline]
  #[must_use]
  pub fn slow(&self, data: &[u8]) -> W {
    W::truncate(reference::checksum(&self.params, data))
  }

  /// Continue a reference checksum from a published value.
  #[inline]
  #[must_use]
  pub fn slow_update(&self, crc: W, data: &[u8]) -> W {
    W::truncate(reference::update(&self.params, crc.into(), data))
  }

  /// Table-driven checksum of `data`.
  #[inline]
  #[must_use]
  pub fn fast(&self, data: &[u8]) -> W {
    self.fast_update(self.empty_value(), data)
  }

  /// Continue a table-driven checksum from a published value.
  #[inline]
  #[must_use]
  pub fn fast_update(&self, crc: W, data: &[u8]) -> W {
    let params = &self.params;
    let reg = params.register_from(crc.into());
    W::truncate(params.finalize(self.with_table(|table| table.update(reg, data))))
  }

  /// Checksum of `data` on the configured path.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> W {
    self.update(self.empty_value(), data)
  }

  /// Continue a checksum on the configured path.
  #[inline]
  #[must_use]
  pub fn update(&self, crc: W, data: &[u8]) -> W {
    if config::get().effective_force.uses_reference() {
      self.slow_update(crc, data)
    } else {
      self.fast_update(crc, data)
    }
  }

  /// Build the table now instead of on first table-path use.
  ///
  /// A no-op once built. Has no lasting effect on targets without atomics.
  #[inline]
  pub fn init(&self) {
    self.with_table(|_| ());
  }

  /// Whether the table has been built.
  #[inline]
  #[must_use]
  pub fn is_table_built(&self) -> bool {
    self.table.is_built()
  }

  /// Run `f` against the table, building it first if needed.
  #[inline]
  pub fn with_table<R>(&self, f: impl FnOnce(&CrcTable<W>) -> R) -> R {
    self.table.with(|| CrcTable::new(&self.params), f)
  }

  /// The cached table, building it first if needed.
  #[cfg(any(feature = "std", target_has_atomic = "8"))]
  #[inline]
  #[must_use]
  pub fn table(&self) -> &CrcTable<W> {
    self.table.get_or_init(|| CrcTable::new(&self.params))
  }

  /// Name of the path [`checksum`](Self::checksum) currently takes.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    if config::get().effective_force.uses_reference() {
      REFERENCE_BACKEND
    } else {
      TABLE_BACKEND
    }
  }
}

impl<W: Word> fmt::Debug for Algorithm<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Algorithm")
      .field("name", &self.params.name)
      .field("table_built", &self.is_table_built())
      .finish_non_exhaustive()
  }
}
