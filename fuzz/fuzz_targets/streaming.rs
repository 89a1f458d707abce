//! Fuzz target for the streaming hasher API.
//!
//! Tests that arbitrary sequences of update calls produce correct results.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkcrc::{Checksum, Crc8DvbS2, Crc16Arc, Crc16Modbus, Crc16Umts, Crc32, Lrc};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  test_streaming::<Crc8DvbS2>(data, &input.chunk_sizes);
  test_streaming::<Crc16Arc>(data, &input.chunk_sizes);
  test_streaming::<Crc16Modbus>(data, &input.chunk_sizes);
  test_streaming::<Crc16Umts>(data, &input.chunk_sizes);
  test_streaming::<Crc32>(data, &input.chunk_sizes);
  test_streaming::<Lrc>(data, &input.chunk_sizes);
});

fn test_streaming<C: Checksum>(data: &[u8], chunk_sizes: &[usize]) {
  let expected = C::checksum(data);

  let mut hasher = C::new();
  let mut resumed = C::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = match chunk_sizes.get(chunk_idx % chunk_sizes.len().max(1)) {
      Some(size) => (size % 256).max(1),
      None => 1,
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    // Rebuild from the published value at every fragment boundary.
    resumed = C::with_initial(resumed.finalize());
    resumed.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch");
  assert_eq!(resumed.finalize(), expected, "resume mismatch");
}
