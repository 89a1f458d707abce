//! Published check values and protocol frames.

use linkcrc::{
  Checksum, Crc8DvbS2, Crc8Smbus, Crc16Arc, Crc16CcittFalse, Crc16Modbus, Crc16Umts, Crc16Xmodem, Crc32, CrcParams,
  Lrc, arc, ccitt, crc8, crc32, dvb_s2, engine, modbus, robotis,
};

const CHECK: &[u8] = b"123456789";
const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

#[test]
fn catalogue_check_values() {
  assert_eq!(Crc8Smbus::checksum(CHECK), 0xF4);
  assert_eq!(Crc8DvbS2::checksum(CHECK), 0xBC);
  assert_eq!(Crc16Arc::checksum(CHECK), 0xBB3D);
  assert_eq!(Crc16Xmodem::checksum(CHECK), 0x31C3);
  assert_eq!(Crc16CcittFalse::checksum(CHECK), 0x29B1);
  assert_eq!(Crc16Modbus::checksum(CHECK), 0x4B37);
  assert_eq!(Crc16Umts::checksum(CHECK), 0xFEE8);
  assert_eq!(Crc32::checksum(CHECK), 0xCBF4_3926);
}

#[test]
fn catalogue_params_carry_check() {
  for params in CrcParams::ALL {
    assert_eq!(linkcrc::reference::checksum(&params, CHECK), params.check, "{}", params.name);
  }
}

#[test]
fn fox_vectors() {
  assert_eq!(Crc8Smbus::checksum(FOX), 0xC1);
  assert_eq!(Crc8DvbS2::checksum(FOX), 0x2A);
  assert_eq!(Crc16Arc::checksum(FOX), 0xFCDF);
  assert_eq!(Crc16Xmodem::checksum(FOX), 0xF0C8);
  assert_eq!(Crc16CcittFalse::checksum(FOX), 0x8FDD);
  assert_eq!(Crc16Modbus::checksum(FOX), 0xA89C);
  assert_eq!(Crc16Umts::checksum(FOX), 0x60AE);
  assert_eq!(Crc32::checksum(FOX), 0x414F_A339);
}

#[test]
fn named_functions() {
  assert_eq!(crc8::crc8(CHECK), 0xF4);
  assert_eq!(dvb_s2::crc8_dvb_s2_update(0, CHECK), 0xBC);
  assert_eq!(dvb_s2::crc8_dvb_s2(0, 0), 0);
  assert_eq!(arc::crc16_arc_calculate(CHECK), 0xBB3D);
  assert_eq!(arc::crc16_arc_fast(0, CHECK), 0xBB3D);
  assert_eq!(ccitt::crc_ccit16_fast(CHECK), 0x31C3);
  assert_eq!(modbus::mb_crc16(CHECK), 0x4B37);
  assert_eq!(modbus::mb_ascii_lrc(CHECK), 0x23);
  assert_eq!(robotis::robotis_servo_crc(0, CHECK), 0xFEE8);
  assert_eq!(crc32::crc32(CHECK), 0xCBF4_3926);
}

#[test]
fn empty_inputs() {
  assert_eq!(crc8::crc8(&[]), 0);
  assert_eq!(arc::crc16_arc_calculate(&[]), 0);
  assert_eq!(ccitt::uavcan_transfer_crc(&[]), 0xFFFF);
  assert_eq!(modbus::mb_crc16(&[]), 0xFFFF);
  assert_eq!(modbus::mb_ascii_lrc(&[]), 0);
  assert_eq!(crc32::crc32(&[]), 0);
}

#[test]
fn arc_split_message() {
  let partial = arc::crc16_arc_calculate(b"12345");
  assert_eq!(partial, 0xA455);
  assert_eq!(arc::crc16_arc_fast(partial, b"6789"), 0xBB3D);

  let mut inplace = [0u8; 2];
  arc::crc16_arc_update(b"12345", &mut inplace);
  arc::crc16_arc_update(b"6789", &mut inplace);
  assert_eq!(inplace, [0x3D, 0xBB]);
}

#[test]
fn modbus_read_holding_registers() {
  let pdu = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A];
  assert_eq!(modbus::mb_crc16(&pdu), 0xCDC5);
  assert_eq!(modbus::encode_crc(0xCDC5), [0xC5, 0xCD]);
  assert_eq!(
    modbus::verify_rtu_frame(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x0A, 0xC5, 0xCD]),
    Ok(())
  );
  assert_eq!(modbus::mb_ascii_lrc(&pdu), 0xF2);
  assert_eq!(modbus::verify_ascii_frame(b":01030000000AF2\r\n"), Ok(()));
}

#[test]
fn modbus_lrc_example() {
  assert_eq!(modbus::mb_ascii_lrc(&[0x02, 0x30, 0x31]), 0x9D);
  assert_eq!(Lrc::checksum(&[0x02, 0x30, 0x31]), 0x9D);
}

#[test]
fn dynamixel_packets() {
  let ping = [0xFF, 0xFF, 0xFD, 0x00, 0x01, 0x03, 0x00, 0x01];
  assert_eq!(robotis::robotis_servo_crc(0, &ping), 0x4E19);
  assert_eq!(
    robotis::verify_packet(&[0xFF, 0xFF, 0xFD, 0x00, 0x01, 0x03, 0x00, 0x01, 0x19, 0x4E]),
    Ok(())
  );

  let read = [0xFF, 0xFF, 0xFD, 0x00, 0x01, 0x07, 0x00, 0x02, 0x00, 0x00, 0x04, 0x00];
  assert_eq!(robotis::robotis_servo_crc(0, &read), 0x4521);
}

#[test]
fn ethernet_hash_slot() {
  let all_hosts = [0x01, 0x00, 0x5E, 0x00, 0x00, 0x01];
  assert_eq!(crc32::crc32(&all_hosts), 0x264B_3A01);
  assert_eq!(crc32::compute_hashtable_fast32(&all_hosts), 12);
}

#[test]
fn engine_standards() {
  assert_eq!(engine::crc_slow(engine::Standard::Ccitt, CHECK), 0x29B1);
  assert_eq!(engine::crc_fast(engine::Standard::Crc16, CHECK), 0xBB3D);
  assert_eq!(engine::crc_fast(engine::Standard::Crc32, CHECK), 0xCBF4_3926);
}
