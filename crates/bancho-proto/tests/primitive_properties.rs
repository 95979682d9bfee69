//! Property-based tests for the primitive reader/writer.
//!
//! Verifies round-trip identity for every integer width and for
//! length-prefixed strings across arbitrary inputs, not just the fixed
//! examples covered by the unit tests alongside the implementation.

use bancho_proto::io::{Reader, Writer};
use proptest::prelude::*;

macro_rules! prop_round_trip {
    ($name:ident, $ty:ty, $write:ident, $read:ident) => {
        #[test]
        fn $name() {
            proptest!(|(value in any::<$ty>())| {
                let mut w = Writer::new();
                w.$write(value);
                let mut r = Reader::new(w.into_bytes());
                prop_assert_eq!(r.$read().expect("decode should succeed"), value);
            });
        }
    };
}

prop_round_trip!(prop_u8_round_trip, u8, write_u8, read_u8);
prop_round_trip!(prop_i8_round_trip, i8, write_i8, read_i8);
prop_round_trip!(prop_u16_round_trip, u16, write_u16, read_u16);
prop_round_trip!(prop_i16_round_trip, i16, write_i16, read_i16);
prop_round_trip!(prop_u32_round_trip, u32, write_u32, read_u32);
prop_round_trip!(prop_i32_round_trip, i32, write_i32, read_i32);
prop_round_trip!(prop_u64_round_trip, u64, write_u64, read_u64);
prop_round_trip!(prop_i64_round_trip, i64, write_i64, read_i64);
prop_round_trip!(prop_bool_round_trip, bool, write_bool, read_bool);

#[test]
fn prop_uleb128_round_trip() {
    proptest!(|(value in any::<u64>())| {
        let mut w = Writer::new();
        w.write_uleb128(value);
        let mut r = Reader::new(w.into_bytes());
        prop_assert_eq!(r.read_uleb128().expect("decode should succeed"), value);
    });
}

#[test]
fn prop_string_round_trip_ascii() {
    proptest!(|(value in "[ -~]{0,300}")| {
        let mut w = Writer::new();
        w.write_string(&value);
        let mut r = Reader::new(w.into_bytes());
        prop_assert_eq!(r.read_string().expect("decode should succeed"), value);
    });
}

#[test]
fn prop_string_round_trip_arbitrary_utf8() {
    proptest!(|(value in "\\PC{0,64}")| {
        let mut w = Writer::new();
        w.write_string(&value);
        let mut r = Reader::new(w.into_bytes());
        prop_assert_eq!(r.read_string().expect("decode should succeed"), value);
    });
}

#[test]
fn prop_gzip_round_trip() {
    proptest!(|(data in prop::collection::vec(any::<u8>(), 0..4096))| {
        let compressed = bancho_proto::io::gzip(&data).expect("gzip should succeed");
        let decompressed = bancho_proto::io::gunzip(&compressed).expect("gunzip should succeed");
        prop_assert_eq!(decompressed.as_ref(), data.as_slice());
    });
}
