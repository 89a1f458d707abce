//! Path and table-cache introspection.
//!
//! Lets callers (and benchmarks) confirm which path a checksum takes and
//! which built-in tables have been built, without touching the hot path.
//!
//! # Examples
//!
//! ```
//! use linkcrc::{Crc16Modbus, introspect};
//!
//! println!("Modbus backend: {}", introspect::backend_for::<Crc16Modbus>());
//! println!("{}", introspect::table_status());
//! ```

use core::fmt;

use crate::{
  CrcParams,
  arc::CRC16_ARC,
  ccitt::{CRC16_CCITT_FALSE, CRC16_XMODEM},
  crc8::CRC8_SMBUS,
  crc32::CRC32,
  dvb_s2::CRC8_DVB_S2,
  modbus::CRC16_MODBUS,
  robotis::CRC16_UMTS,
};

/// Types that report which computation path they currently use.
///
/// Implemented for every hasher type.
pub trait BackendIntrospect {
  /// Name of the path `update` takes, e.g. `"portable/bytewise-table"`.
  fn backend_name() -> &'static str;

  /// Descriptor the type computes.
  fn params() -> &'static CrcParams;
}

/// Returns the backend name selected for `T`.
#[inline]
#[must_use]
pub fn backend_for<T: BackendIntrospect>() -> &'static str {
  T::backend_name()
}

/// Build state of one built-in table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableState {
  /// Catalogue name of the descriptor.
  pub name: &'static str,
  /// Whether the table has been built.
  pub built: bool,
}

/// Build state of every built-in table, in catalogue order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableStatus {
  tables: [TableState; 8],
}

impl TableStatus {
  /// All entries.
  #[inline]
  #[must_use]
  pub fn tables(&self) -> &[TableState] {
    &self.tables
  }

  /// Build state of the table named `name`, if it is built in.
  #[must_use]
  pub fn get(&self, name: &str) -> Option<bool> {
    self.tables.iter().find(|t| t.name == name).map(|t| t.built)
  }

  /// Number of tables built so far.
  #[must_use]
  pub fn built_count(&self) -> usize {
    self.tables.iter().filter(|t| t.built).count()
  }
}

impl fmt::Display for TableStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, table) in self.tables.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      let state = if table.built { "built" } else { "lazy" };
      write!(f, "{}={state}", table.name)?;
    }
    Ok(())
  }
}

/// Snapshot of which built-in tables have been built.
#[must_use]
pub fn table_status() -> TableStatus {
  fn state(name: &'static str, built: bool) -> TableState {
    TableState { name, built }
  }

  TableStatus {
    tables: [
      state(CRC8_SMBUS.params().name, CRC8_SMBUS.is_table_built()),
      state(CRC8_DVB_S2.params().name, CRC8_DVB_S2.is_table_built()),
      state(CRC16_ARC.params().name, CRC16_ARC.is_table_built()),
      state(CRC16_XMODEM.params().name, CRC16_XMODEM.is_table_built()),
      state(CRC16_CCITT_FALSE.params().name, CRC16_CCITT_FALSE.is_table_built()),
      state(CRC16_MODBUS.params().name, CRC16_MODBUS.is_table_built()),
      state(CRC16_UMTS.params().name, CRC16_UMTS.is_table_built()),
      state(CRC32.params().name, CRC32.is_table_built()),
    ],
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Crc16Modbus, Crc32 as Crc32Hasher, algorithm};

  #[test]
  fn backend_names() {
    let name = backend_for::<Crc16Modbus>();
    assert!(name == algorithm::TABLE_BACKEND || name == algorithm::REFERENCE_BACKEND);
    assert_eq!(<Crc32Hasher as BackendIntrospect>::params().check, 0xCBF4_3926);
  }

  #[test]
  fn status_tracks_builds() {
    CRC16_MODBUS.init();
    let status = table_status();
    assert_eq!(status.tables().len(), CrcParams::ALL.len());
    assert_eq!(status.get("CRC-16/MODBUS"), Some(true));
    assert_eq!(status.get("CRC-64/XZ"), None);
    assert!(status.built_count() >= 1);
  }

  #[test]
  fn status_names_follow_catalogue() {
    let status = table_status();
    for (state, params) in status.tables().iter().zip(CrcParams::ALL) {
      assert_eq!(state.name, params.name);
    }
  }

  #[test]
  fn display_lists_every_table() {
    let text = std::format!("{}", table_status());
    assert!(text.contains("CRC-16/MODBUS="));
    assert!(text.contains("CRC-32/ISO-HDLC="));
  }
}
