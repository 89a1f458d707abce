//! Property-based tests for the public checksum surface.
//!
//! These tests verify invariants that must hold for all inputs, and
//! cross-validate every descriptor against the `crc` catalogue (and CRC-32
//! against `crc-fast`).

use crc_fast::CrcAlgorithm;
use linkcrc::{
  Checksum, Crc8DvbS2, Crc8Smbus, Crc16Arc, Crc16CcittFalse, Crc16Modbus, Crc16Umts, Crc16Xmodem, Crc32, Lrc, arc,
  ccitt, crc8, crc32, dvb_s2, engine, modbus, robotis,
};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

// Generic Property Tests

/// Incremental updates produce the same result as one-shot.
fn prop_incremental_equals_oneshot<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let mut incremental = C::new();
  incremental.update(a);
  incremental.update(b);

  incremental.finalize() == C::checksum(data)
}

/// Many incremental updates produce the same result as one-shot.
fn prop_multi_incremental<C: Checksum>(data: &[u8], splits: &[usize]) -> bool {
  let mut hasher = C::new();
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      hasher.update(&data[prev..split]);
      prev = split;
    }
  }
  if prev < data.len() {
    hasher.update(&data[prev..]);
  }

  hasher.finalize() == C::checksum(data)
}

/// Reset returns the hasher to its initial state.
fn prop_reset_works<C: Checksum>(data: &[u8]) -> bool {
  let mut hasher = C::new();
  hasher.update(data);
  hasher.reset();
  hasher.update(data);

  hasher.finalize() == C::checksum(data)
}

/// Resuming from a published value continues the computation.
fn prop_resume_works<C: Checksum>(data: &[u8], split: usize) -> bool {
  let split = split.min(data.len());
  let (a, b) = data.split_at(split);

  let mut resumed = C::with_initial(C::checksum(a));
  resumed.update(b);

  resumed.finalize() == C::checksum(data)
}

macro_rules! hasher_properties {
  ($($module:ident => $ty:ty),* $(,)?) => {
    $(
      mod $module {
        use super::*;

        proptest! {
          #![proptest_config(ProptestConfig::with_cases(256))]

          #[test]
          fn incremental_equals_oneshot(data in arb_data(), split in 0..8192usize) {
            prop_assert!(prop_incremental_equals_oneshot::<$ty>(&data, split));
          }

          #[test]
          fn multi_incremental(data in arb_data(), splits in arb_splits(8192, 5)) {
            prop_assert!(prop_multi_incremental::<$ty>(&data, &splits));
          }

          #[test]
          fn reset(data in arb_data()) {
            prop_assert!(prop_reset_works::<$ty>(&data));
          }

          #[test]
          fn resume(data in arb_data(), split in 0..8192usize) {
            prop_assert!(prop_resume_works::<$ty>(&data, split));
          }
        }
      }
    )*
  };
}

hasher_properties! {
  crc8_smbus => Crc8Smbus,
  crc8_dvb_s2 => Crc8DvbS2,
  crc16_arc => Crc16Arc,
  crc16_xmodem => Crc16Xmodem,
  crc16_ccitt_false => Crc16CcittFalse,
  crc16_modbus => Crc16Modbus,
  crc16_umts => Crc16Umts,
  crc32_iso_hdlc => Crc32,
  lrc => Lrc,
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-validation against the `crc` catalogue and crc-fast
// ─────────────────────────────────────────────────────────────────────────────

const ORACLE_CRC8_SMBUS: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_SMBUS);
const ORACLE_CRC8_DVB_S2: crc::Crc<u8> = crc::Crc::<u8>::new(&crc::CRC_8_DVB_S2);
const ORACLE_CRC16_ARC: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_ARC);
const ORACLE_CRC16_XMODEM: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM);
const ORACLE_CRC16_IBM_3740: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740);
const ORACLE_CRC16_MODBUS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_MODBUS);
const ORACLE_CRC16_UMTS: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_UMTS);

proptest! {
  #[test]
  fn crc8_matches_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let expected = ORACLE_CRC8_SMBUS.checksum(&data);
    prop_assert_eq!(crc8::crc8(&data), expected);
    prop_assert_eq!(Crc8Smbus::checksum(&data), expected);
  }

  #[test]
  fn dvb_s2_matches_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let expected = ORACLE_CRC8_DVB_S2.checksum(&data);
    prop_assert_eq!(dvb_s2::crc8_dvb_s2_update(0, &data), expected);
    prop_assert_eq!(data.iter().fold(0, |crc, &b| dvb_s2::crc8_dvb_s2(crc, b)), expected);
  }

  #[test]
  fn arc_matches_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let expected = ORACLE_CRC16_ARC.checksum(&data);
    prop_assert_eq!(arc::crc16_arc_calculate(&data), expected);
    prop_assert_eq!(arc::crc16_arc_fast(0, &data), expected);
    let mut inplace = [0u8; 2];
    arc::crc16_arc_update(&data, &mut inplace);
    prop_assert_eq!(inplace, expected.to_le_bytes());
  }

  #[test]
  fn xmodem_matches_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(ccitt::crc_ccit16_fast(&data), ORACLE_CRC16_XMODEM.checksum(&data));
  }

  #[test]
  fn ccitt_false_matches_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let expected = ORACLE_CRC16_IBM_3740.checksum(&data);
    prop_assert_eq!(ccitt::uavcan_transfer_crc(&data), expected);
    prop_assert_eq!(engine::crc_fast(engine::Standard::Ccitt, &data), u32::from(expected));
  }

  #[test]
  fn modbus_matches_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(modbus::mb_crc16(&data), ORACLE_CRC16_MODBUS.checksum(&data));
  }

  #[test]
  fn umts_matches_crc_catalogue(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(robotis::robotis_servo_crc(0, &data), ORACLE_CRC16_UMTS.checksum(&data));
  }

  #[test]
  fn crc32_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let expected = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(crc32::crc32(&data), expected);
    prop_assert_eq!(engine::crc_slow(engine::Standard::Crc32, &data), expected);
  }

  #[test]
  fn streaming_matches_crc_catalogue(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut ours = Crc16Modbus::new();
    let mut reference = ORACLE_CRC16_MODBUS.digest();

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize());
  }

  #[test]
  fn lrc_cancels_the_byte_sum(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let lrc = modbus::mb_ascii_lrc(&data);
    let total = data.iter().fold(lrc, |acc, &b| acc.wrapping_add(b));
    prop_assert_eq!(total, 0);
  }

  #[test]
  fn rtu_frames_verify(body in proptest::collection::vec(any::<u8>(), 2..=252)) {
    let mut frame = body.clone();
    modbus::append_crc(&mut frame);
    prop_assert_eq!(modbus::verify_rtu_frame(&frame), Ok(()));
  }

  #[test]
  fn rtu_frames_reject_bit_flips(body in proptest::collection::vec(any::<u8>(), 2..=252), bit in any::<usize>()) {
    let mut frame = body.clone();
    modbus::append_crc(&mut frame);
    let bit = bit % (frame.len() * 8);
    frame[bit / 8] ^= 1 << (bit % 8);
    prop_assert!(modbus::verify_rtu_frame(&frame).is_err());
  }

  #[test]
  fn ascii_frames_verify(message in proptest::collection::vec(any::<u8>(), 2..=252)) {
    let frame = modbus::encode_ascii_frame(&message);
    prop_assert_eq!(modbus::verify_ascii_frame(&frame), Ok(()));
  }
}
