//! Internal macros for CRC variant generation.
//!
//! Every named standard exposes the same streaming hasher surface; only the
//! word type, descriptor and backing [`Algorithm`](crate::Algorithm) static
//! differ.

/// Generate a CRC hasher type with all trait implementations.
///
/// This macro creates:
/// - The struct definition holding the published running value
/// - `PARAMS`, `new()`, `resume()`, `value()`, `backend_name()` items
/// - `Default`, `Checksum` and `BackendIntrospect` implementations
/// - A `std::io::Write` implementation (with `std`)
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16Modbus`)
/// - `$word`: The checksum word (`u8`, `u16` or `u32`)
/// - `$params`: The descriptor constant (e.g., `CrcParams::CRC16_MODBUS`)
/// - `$algorithm`: The `Algorithm<$word>` static (e.g., `CRC16_MODBUS`)
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      word: $word:ty,
      params: $params:expr,
      algorithm: $algorithm:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      crc: $word,
    }

    impl $name {
      /// Descriptor computed by this type.
      pub const PARAMS: $crate::CrcParams = $params;

      /// Create a hasher with the algorithm's initial value.
      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self {
          crc: Self::PARAMS.empty_value() as $word,
        }
      }

      /// Create a hasher to resume from a previous checksum value.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $word) -> Self {
        Self { crc }
      }

      /// Checksum of everything fed so far.
      #[inline]
      #[must_use]
      pub const fn value(&self) -> $word {
        self.crc
      }

      /// Get the name of the currently selected backend.
      #[must_use]
      pub fn backend_name() -> &'static str {
        $algorithm.backend_name()
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$word>();
      type Output = $word;

      #[inline]
      fn new() -> Self {
        Self::new()
      }

      #[inline]
      fn with_initial(initial: $word) -> Self {
        Self::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.crc = $algorithm.update(self.crc, data);
      }

      #[inline]
      fn finalize(&self) -> $word {
        self.crc
      }

      #[inline]
      fn reset(&mut self) {
        *self = Self::new();
      }
    }

    impl $crate::introspect::BackendIntrospect for $name {
      fn backend_name() -> &'static str {
        $algorithm.backend_name()
      }

      fn params() -> &'static $crate::CrcParams {
        $algorithm.params()
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $name {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        <Self as $crate::Checksum>::update(self, buf);
        Ok(buf.len())
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}

pub(crate) use define_crc_type;
