//! Checksumming frames as they cross an I/O boundary.
//!
//! Run with: `cargo run --example framing -p linkcrc`

use std::io::{Cursor, Read, Write};

use linkcrc::{Checksum, Crc16Modbus, Crc16Umts, modbus, robotis};

fn main() -> std::io::Result<()> {
  write_rtu_frame()?;
  read_dynamixel_status()?;
  ascii_frame();
  Ok(())
}

/// Compute the Modbus CRC while writing the frame body, then append it.
fn write_rtu_frame() -> std::io::Result<()> {
  let mut writer = Crc16Modbus::writer(Vec::new());
  writer.write_all(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x0A])?;
  let (mut port, crc) = writer.into_parts();
  port.write_all(&modbus::encode_crc(crc))?;

  println!("RTU frame: {port:02X?}");
  assert!(modbus::verify_rtu_frame(&port).is_ok());
  Ok(())
}

/// Checksum a Dynamixel packet header and body as they are read.
fn read_dynamixel_status() -> std::io::Result<()> {
  let wire = [0xFF, 0xFF, 0xFD, 0x00, 0x01, 0x03, 0x00, 0x01, 0x19, 0x4E];
  let mut reader = Crc16Umts::reader(Cursor::new(wire));

  let mut body = [0u8; 8];
  reader.read_exact(&mut body)?;
  let computed = reader.checksum();

  let mut port = reader.into_inner();
  let mut trailer = [0u8; 2];
  port.read_exact(&mut trailer)?;

  println!("Dynamixel CRC: computed 0x{computed:04X}, received 0x{:04X}", u16::from_le_bytes(trailer));
  assert_eq!(computed, u16::from_le_bytes(trailer));
  assert!(robotis::verify_packet(&wire).is_ok());
  Ok(())
}

/// Modbus ASCII frames carry an LRC, not a CRC.
fn ascii_frame() {
  let frame = modbus::encode_ascii_frame(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x0A]);
  println!("ASCII frame: {:?}", String::from_utf8_lossy(&frame));
  assert!(modbus::verify_ascii_frame(&frame).is_ok());
}
