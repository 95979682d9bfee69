//! Fuzz target for the envelope layer (opcode + length framing).
//!
//! Feeds arbitrary bytes through both envelope shapes with a small
//! declared-length cap, so oversize-rejection and truncated-input paths
//! are reached as often as a clean decode. Must never panic.

#![no_main]

use arbitrary::Arbitrary;
use bancho_core::envelope::{decode, EnvelopeStyle};
use bancho_proto::Reader;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    modern: bool,
    force_uncompressed: bool,
    max_payload_len: u32,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let style = if input.modern {
        EnvelopeStyle::Modern { force_uncompressed: input.force_uncompressed }
    } else {
        EnvelopeStyle::LegacyGzip
    };

    let mut reader = Reader::new(input.data);
    let _ = decode(style, &mut reader, input.max_payload_len);
});
