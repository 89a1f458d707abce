use proptest::prelude::*;

use crate::{CrcParams, CrcTable, reference, table};

/// Arbitrary Rocksoft descriptor of width 8..=32 (odd polynomial).
fn arb_params() -> impl Strategy<Value = CrcParams> {
  (8u8..=32, any::<u32>(), any::<u32>(), any::<bool>(), any::<bool>(), any::<u32>()).prop_map(
    |(width, poly, init, reflect_in, reflect_out, xor_out)| {
      let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
      CrcParams {
        name: "arbitrary",
        width,
        polynomial: (poly & mask) | 1,
        initial: init & mask,
        reflect_in,
        reflect_out,
        xor_out: xor_out & mask,
        check: 0,
      }
    },
  )
}

fn table_checksum(params: &CrcParams, crc: u32, data: &[u8]) -> u32 {
  let table = CrcTable::<u32>::new(params);
  params.finalize(table.update(params.register_from(crc), data))
}

proptest! {
  #[test]
  fn table_matches_reference_for_any_descriptor(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let expected = reference::checksum(&params, &data);
    prop_assert_eq!(table_checksum(&params, params.empty_value(), &data), expected);
  }

  #[test]
  fn resume_matches_oneshot_for_any_descriptor(
    params in arb_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let whole = reference::checksum(&params, &data);
    prop_assert_eq!(reference::update(&params, reference::checksum(&params, a), b), whole);
    prop_assert_eq!(table_checksum(&params, reference::checksum(&params, a), b), whole);
  }

  #[test]
  fn register_round_trips(params in arb_params(), value in any::<u32>()) {
    let value = value & params.mask();
    prop_assert_eq!(params.finalize(params.register_from(value)), value);
  }

  #[test]
  fn entries_match_single_byte_reference(params in arb_params(), index in any::<u8>()) {
    let expected = reference::update(&params, params.finalize(0), &[index]);
    prop_assert_eq!(params.finalize(table::entry(&params, index)), expected);
  }

  #[test]
  fn builtin_catalogue_paths_agree(
    data in proptest::collection::vec(any::<u8>(), 0..=4096)
  ) {
    for params in CrcParams::ALL {
      let expected = reference::checksum(&params, &data);
      prop_assert_eq!(table_checksum(&params, params.empty_value(), &data), expected, "{}", params.name);
    }
  }
}
