//! Testable Property 5: the legacy envelope (build <= 323) always gzips
//! its body, even when the body is empty; the modern envelope drops
//! in-packet compression entirely once a build deprecates it (b1800).

use bancho_core::VersionRegistry;
use bancho_proto::model::DecodedPacket;
use bancho_proto::{PacketKind, Writer};

#[test]
fn build_282_gzips_an_empty_ping_body() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(282);

    let mut w = Writer::new();
    codec.write_packet(&mut w, PacketKind::BanchoPing, &DecodedPacket::Empty).expect("ping is always available");
    let bytes = w.into_bytes();

    let opcode = u16::from_le_bytes([bytes[0], bytes[1]]);
    assert_eq!(opcode, 8, "BanchoPing keeps wire opcode 8 below the b282 shift point");

    let length = u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);
    let gzip_body = &bytes[6..];
    assert_eq!(length as usize, gzip_body.len(), "declared length matches the gzip output's size");
    assert_eq!(bytes.len(), 6 + gzip_body.len(), "no trailing bytes past the gzip body");

    let decompressed = bancho_proto::io::gunzip(gzip_body).expect("legacy body is always gzip");
    assert!(decompressed.is_empty(), "BanchoPing carries no payload");
}

#[test]
fn build_1800_sends_an_empty_ping_uncompressed() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(1800);

    let mut w = Writer::new();
    codec.write_packet(&mut w, PacketKind::BanchoPing, &DecodedPacket::Empty).expect("ping is always available");
    let bytes = w.into_bytes();

    let opcode = u16::from_le_bytes([bytes[0], bytes[1]]);
    assert_eq!(opcode, 8);

    assert_eq!(&bytes[2..], &[0x00, 0x00, 0x00, 0x00, 0x00], "compression flag false, zero-length body");
    assert_eq!(bytes.len(), 7);
}
