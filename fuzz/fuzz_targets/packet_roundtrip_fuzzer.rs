//! Fuzz target for `Codec::read_packet` across the full build registry.
//!
//! Picks a build by raw `u32` (exercising the registry's clamp/round-up
//! rules as a side effect) and feeds arbitrary bytes to that build's
//! codec. A successful decode is round-tripped through `write_packet`
//! and decoded again, since a codec that can read a shape but not write
//! it back out would be a real defect. Never panics on malformed input.

#![no_main]

use arbitrary::Arbitrary;
use bancho_core::envelope::DEFAULT_MAX_PAYLOAD_LEN;
use bancho_core::VersionRegistry;
use bancho_proto::{Reader, Writer};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static REGISTRY: OnceLock<VersionRegistry> = OnceLock::new();

#[derive(Debug, Arbitrary)]
struct Input {
    build: u32,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let registry = REGISTRY.get_or_init(VersionRegistry::standard);
    let codec = registry.select(input.build);

    let mut reader = Reader::new(input.data);
    if let Ok((kind, packet)) = codec.read_packet(&mut reader, DEFAULT_MAX_PAYLOAD_LEN) {
        let mut writer = Writer::new();
        if codec.write_packet(&mut writer, kind, &packet).is_ok() {
            let bytes = writer.into_bytes();
            let mut reread = Reader::new(bytes);
            let _ = codec.read_packet(&mut reread, DEFAULT_MAX_PAYLOAD_LEN);
        }
    }
});
