//! Error-detection checksum traits.
//!
//! Traits for CRC and LRC style checksums used to validate frames on serial
//! and bus links.
//!
//! - **Embedded first**: `no_std`, no allocation, inline-friendly
//! - **Streaming**: Frames can be checksummed as fragments arrive
//! - **Verification**: Compare a received trailer against the computed value

use core::fmt::Debug;

use crate::FrameError;

/// Error-detection checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates over message fragments.
///
/// # Usage
///
/// ```rust,ignore
/// use linkcrc::{Checksum, Crc16Modbus};
///
/// // One-shot
/// let crc = Crc16Modbus::checksum(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x0A]);
///
/// // Streaming (e.g. bytes arriving from a UART)
/// let mut hasher = Crc16Modbus::new();
/// hasher.update(&[0x01, 0x03, 0x00]);
/// hasher.update(&[0x00, 0x00, 0x0A]);
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - `with_initial(checksum(a))` followed by `update(b)` must equal `checksum(a || b)`
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-8 / LRC: 1
  /// - CRC-16: 2
  /// - CRC-32: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u8`, `u16` or `u32`).
  type Output: Copy + Eq + Debug + Default + Into<u32>;

  /// Create a new hasher with the algorithm's initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously returned checksum.
  ///
  /// Useful for resuming a checksum computation across message fragments.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Check `data` against a checksum received alongside it.
  ///
  /// # Errors
  ///
  /// Returns [`FrameError::Mismatch`] when the computed checksum differs
  /// from `expected`.
  #[inline]
  fn verify(data: &[u8], expected: Self::Output) -> Result<(), FrameError> {
    let computed = Self::checksum(data);
    if computed == expected {
      Ok(())
    } else {
      Err(FrameError::Mismatch {
        expected: expected.into(),
        computed: computed.into(),
      })
    }
  }

  /// Wrap a reader to compute checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use linkcrc::{Checksum, Crc16Umts};
  ///
  /// let port = serialport::new("/dev/ttyUSB0", 57_600).open()?;
  /// let mut reader = Crc16Umts::reader(port);
  /// let mut header = [0u8; 8];
  /// reader.read_exact(&mut header)?;
  /// println!("CRC: {:04x}", reader.checksum());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use linkcrc::{Checksum, Crc16Modbus};
  ///
  /// let mut writer = Crc16Modbus::writer(port);
  /// let pdu = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A];
  /// writer.write_all(&pdu)?;
  /// let (mut port, crc) = writer.into_parts();
  /// port.write_all(&crc.to_le_bytes())?;
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}
