//! Fuzz target for frame verification.
//!
//! Verification must never panic on arbitrary input, and frames built by the
//! library must always verify.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linkcrc::{dvb_s2, modbus, robotis};

fuzz_target!(|data: &[u8]| {
  let _ = modbus::verify_rtu_frame(data);
  let _ = modbus::verify_ascii_frame(data);
  let _ = robotis::verify_packet(data);
  let _ = dvb_s2::verify(data);

  if data.len() >= 2 {
    let mut rtu = data.to_vec();
    modbus::append_crc(&mut rtu);
    assert_eq!(modbus::verify_rtu_frame(&rtu), Ok(()));

    let ascii = modbus::encode_ascii_frame(data);
    assert_eq!(modbus::verify_ascii_frame(&ascii), Ok(()));
  }
});
