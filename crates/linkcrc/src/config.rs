//! Runtime path selection (reference vs table) and overrides.
//!
//! Every [`Algorithm`](crate::Algorithm) and hasher type consults [`get`] when
//! asked for a checksum without naming a path. The explicit `slow`/`fast`
//! entry points ignore it.
//!
//! With the `std` feature the selection can be forced through the
//! `LINKCRC_FORCE` environment variable, read once per process:
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` (or unset) | table path |
//! | `reference`, `bitwise`, `slow` | bitwise reference path |
//! | `table`, `fast`, `portable` | table path |
//!
//! Unrecognized values are ignored.

/// Forced path selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Force {
  /// Use the default selector (table path).
  #[default]
  Auto,
  /// Force the bitwise reference implementation (slow, obviously correct).
  Reference,
  /// Force the byte-at-a-time table implementation.
  Table,
}

impl Force {
  /// Canonical lowercase name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Table => "table",
    }
  }

  /// Parse a force name, ignoring ASCII case and surrounding whitespace.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference")
      || value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("slow")
    {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("table")
      || value.eq_ignore_ascii_case("fast")
      || value.eq_ignore_ascii_case("portable")
    {
      return Some(Self::Table);
    }
    None
  }

  /// Whether this selection runs the reference path.
  #[inline]
  #[must_use]
  pub const fn uses_reference(self) -> bool {
    matches!(self, Self::Reference)
  }
}

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Requested force mode (env).
  pub requested_force: Force,
  /// Force mode actually applied.
  ///
  /// `Auto` resolves to `Table`: every target can run the table path.
  pub effective_force: Force,
}

#[cfg(feature = "std")]
fn read_env_force() -> Force {
  std::env::var("LINKCRC_FORCE")
    .ok()
    .and_then(|value| Force::parse(&value))
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested_force() -> Force {
  use std::sync::OnceLock;
  static REQUESTED: OnceLock<Force> = OnceLock::new();
  *REQUESTED.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> Force {
  Force::Auto
}

#[inline]
#[must_use]
const fn resolve(requested: Force) -> Force {
  match requested {
    Force::Auto | Force::Table => Force::Table,
    Force::Reference => Force::Reference,
  }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> Config {
  let requested_force = requested_force();
  Config {
    requested_force,
    effective_force: resolve(requested_force),
  }
}
