//! Differential fuzzing of the table path against the reference path.
//!
//! Every built-in descriptor is also checked against the `crc` catalogue.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linkcrc::{CrcParams, arc, ccitt, crc8, crc32, dvb_s2, modbus, robotis};

const ORACLE_CRC8_SMBUS: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_SMBUS);
const ORACLE_CRC16_MODBUS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_MODBUS);
const ORACLE_CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

fuzz_target!(|data: &[u8]| {
  test_paths_agree(data);
  test_against_catalogue(data);
});

fn test_paths_agree(data: &[u8]) {
  assert_eq!(crc8::CRC8_SMBUS.slow(data), crc8::CRC8_SMBUS.fast(data), "CRC-8/SMBUS");
  assert_eq!(dvb_s2::CRC8_DVB_S2.slow(data), dvb_s2::CRC8_DVB_S2.fast(data), "CRC-8/DVB-S2");
  assert_eq!(arc::crc16_arc_calculate(data), arc::crc16_arc_fast(0, data), "CRC-16/ARC");
  assert_eq!(ccitt::CRC16_XMODEM.slow(data), ccitt::crc_ccit16_fast(data), "CRC-16/XMODEM");
  assert_eq!(
    ccitt::CRC16_CCITT_FALSE.slow(data),
    ccitt::uavcan_transfer_crc(data),
    "CRC-16/IBM-3740"
  );
  assert_eq!(modbus::CRC16_MODBUS.slow(data), modbus::mb_crc16(data), "CRC-16/MODBUS");
  assert_eq!(robotis::CRC16_UMTS.slow(data), robotis::robotis_servo_crc(0, data), "CRC-16/UMTS");
  assert_eq!(crc32::CRC32.slow(data), crc32::crc32(data), "CRC-32/ISO-HDLC");

  // The first bytes double as an arbitrary descriptor.
  if let [width, p0, p1, p2, p3, flags, rest @ ..] = data {
    let width = 8 + width % 25;
    let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
    let params = CrcParams {
      name: "fuzz",
      width,
      polynomial: (u32::from_le_bytes([*p0, *p1, *p2, *p3]) & mask) | 1,
      initial: u32::from_le_bytes([*p3, *p2, *p1, *p0]) & mask,
      reflect_in: flags & 1 != 0,
      reflect_out: flags & 2 != 0,
      xor_out: if flags & 4 != 0 { mask } else { 0 },
      check: 0,
    };
    let table = linkcrc::CrcTable::<u32>::new(&params);
    let fast = params.finalize(table.update(params.init_register(), rest));
    assert_eq!(fast, linkcrc::reference::checksum(&params, rest), "{params:?}");
  }
}

fn test_against_catalogue(data: &[u8]) {
  assert_eq!(crc8::crc8(data), ORACLE_CRC8_SMBUS.checksum(data));
  assert_eq!(modbus::mb_crc16(data), ORACLE_CRC16_MODBUS.checksum(data));
  assert_eq!(crc32::crc32(data), ORACLE_CRC32.checksum(data));
}
