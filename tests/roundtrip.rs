//! Property tests for P1 (round-trip) across the scalar codec family.

use proptest::prelude::*;
use sortkey::{BoolCodec, Codec, F32Codec, F64Codec, I32Codec, I64Codec, U32Codec, U64Codec};

fn roundtrip<C: Codec>(codec: &C, value: C::Value) -> C::Value
where
    C::Value: Copy,
{
    let mut buf = Vec::new();
    codec.encode(&mut buf, value).unwrap();
    let mut cursor = &buf[..];
    codec.decode(&mut cursor).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    #[test]
    fn bool_roundtrips(v: bool) {
        prop_assert_eq!(roundtrip(&BoolCodec, v), v);
    }

    #[test]
    fn u32_roundtrips(v: u32) {
        prop_assert_eq!(roundtrip(&U32Codec, v), v);
    }

    #[test]
    fn u64_roundtrips(v: u64) {
        prop_assert_eq!(roundtrip(&U64Codec, v), v);
    }

    #[test]
    fn i32_roundtrips(v: i32) {
        prop_assert_eq!(roundtrip(&I32Codec, v), v);
    }

    #[test]
    fn i64_roundtrips(v: i64) {
        prop_assert_eq!(roundtrip(&I64Codec, v), v);
    }

    #[test]
    fn f32_roundtrips_non_nan(v in any::<f32>().prop_filter("exclude NaN", |v| !v.is_nan())) {
        let back = roundtrip(&F32Codec, v);
        prop_assert_eq!(back.to_bits(), v.to_bits());
    }

    #[test]
    fn f64_roundtrips_non_nan(v in any::<f64>().prop_filter("exclude NaN", |v| !v.is_nan())) {
        let back = roundtrip(&F64Codec, v);
        prop_assert_eq!(back.to_bits(), v.to_bits());
    }
}

#[test]
fn f32_subnormal_boundary_roundtrips() {
    let smallest = f32::from_bits(1);
    let largest = f32::from_bits(0x007F_FFFF);
    for v in [smallest, -smallest, largest, -largest] {
        assert_eq!(roundtrip(&F32Codec, v).to_bits(), v.to_bits());
    }
}

#[test]
fn f64_subnormal_boundary_roundtrips() {
    let smallest = f64::from_bits(1);
    let largest = f64::from_bits(0x000F_FFFF_FFFF_FFFF);
    for v in [smallest, -smallest, largest, -largest] {
        assert_eq!(roundtrip(&F64Codec, v).to_bits(), v.to_bits());
    }
}
