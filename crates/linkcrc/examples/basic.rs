//! Basic checksum usage: one-shot, streaming and the two computation paths.
//!
//! Run with: `cargo run --example basic -p linkcrc`

use linkcrc::{
  Checksum, Crc8DvbS2, Crc16Arc, Crc16CcittFalse, Crc16Modbus, Crc16Umts, Crc32, Lrc,
  engine::{ChecksumEngine, Standard},
  introspect,
};

fn main() {
  println!("=== linkcrc Basic Examples ===\n");

  one_shot_examples();
  streaming_example();
  engine_example();

  println!("\nTables: {}", introspect::table_status());
}

/// One-shot computation over the catalogue check string.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let dvb = Crc8DvbS2::checksum(data);
  println!("CRC-8/DVB-S2:       0x{dvb:02X}");
  assert_eq!(dvb, 0xBC);

  let arc = Crc16Arc::checksum(data);
  println!("CRC-16/ARC:         0x{arc:04X}");
  assert_eq!(arc, 0xBB3D);

  let uavcan = Crc16CcittFalse::checksum(data);
  println!("CRC-16/CCITT-FALSE: 0x{uavcan:04X}");
  assert_eq!(uavcan, 0x29B1);

  let modbus = Crc16Modbus::checksum(data);
  println!("CRC-16/MODBUS:      0x{modbus:04X}");
  assert_eq!(modbus, 0x4B37);

  let umts = Crc16Umts::checksum(data);
  println!("CRC-16/UMTS:        0x{umts:04X}");
  assert_eq!(umts, 0xFEE8);

  let crc32 = Crc32::checksum(data);
  println!("CRC-32:             0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let lrc = Lrc::checksum(data);
  println!("LRC:                0x{lrc:02X}");
  assert_eq!(lrc, 0x23);
}

/// Streaming: bytes arrive from a UART in arbitrary fragments.
fn streaming_example() {
  println!("\n--- Streaming ---\n");

  let fragments: [&[u8]; 3] = [&[0x01, 0x03], &[0x00, 0x00, 0x00], &[0x0A]];

  let mut hasher = Crc16Modbus::new();
  for fragment in fragments {
    hasher.update(fragment);
    println!("after {:02X?}: 0x{:04X}", fragment, hasher.finalize());
  }
  assert_eq!(hasher.finalize(), 0xCDC5);
  println!("trailer on the wire: {:02X?}", linkcrc::modbus::encode_crc(hasher.finalize()));
}

/// The runtime-selected engine exposes both paths side by side.
fn engine_example() {
  println!("\n--- Engine (slow vs fast) ---\n");

  for standard in Standard::ALL {
    let engine = ChecksumEngine::new(standard);
    let slow = engine.slow(b"123456789");
    let fast = engine.fast(b"123456789");
    println!("{:<10} slow=0x{slow:08X} fast=0x{fast:08X}", engine.name());
    assert_eq!(slow, fast);
  }
}
