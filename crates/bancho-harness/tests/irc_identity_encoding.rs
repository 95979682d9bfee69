//! Testable Property 6: from b1788 onward, an IRC-bridged user's id is
//! encoded as its negation rather than demoted to a separate `IrcJoin`
//! packet (`spec.md` §3's IRC identity invariant).

use bancho_core::VersionRegistry;
use bancho_proto::model::presence::UserPresence;
use bancho_proto::model::user::UserInfo;
use bancho_proto::model::DecodedPacket;
use bancho_proto::model::misc::Permissions;
use bancho_proto::{PacketKind, Reader, Writer};

fn irc_user(id: i32) -> UserInfo {
    UserInfo {
        id,
        name: "Alice".to_owned(),
        presence: Some(UserPresence {
            is_irc: true,
            timezone: 0,
            country_index: 0,
            permissions: Permissions::NONE,
            longitude: 0.0,
            latitude: 0.0,
            city: String::new(),
        }),
        status: None,
        stats: None,
    }
}

#[test]
fn irc_user_stats_encodes_id_as_its_negation() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(1788);

    let mut w = Writer::new();
    codec
        .write_packet(&mut w, PacketKind::BanchoUserStats, &DecodedPacket::User(irc_user(42)))
        .expect("user stats is always available at b1788");
    let bytes = w.into_bytes();

    // envelope header: u16 opcode, bool compression, u32 length; body is gzipped
    // since b1788 hasn't yet deprecated in-packet compression.
    let gzip_body = &bytes[7..];
    let body = bancho_proto::io::gunzip(gzip_body).expect("b1788 still gzips its body");
    let wire_id = i32::from_le_bytes([body[0], body[1], body[2], body[3]]);
    assert_eq!(wire_id, -42, "IRC-bridged id is written as its negation");

    let mut r = Reader::new(bytes);
    let (kind, decoded) = codec.read_packet(&mut r, bancho_core::envelope::DEFAULT_MAX_PAYLOAD_LEN).expect("round trip");
    assert_eq!(kind, PacketKind::BanchoUserStats);
    let DecodedPacket::User(info) = decoded else { panic!("expected a User payload") };
    assert_eq!(info.id, 42, "decode recovers the non-negated id");
    assert!(info.presence.expect("presence present").is_irc, "decode recovers the IRC flag");
}

#[test]
fn non_irc_user_stats_keeps_a_positive_id() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(1788);

    let mut non_irc = irc_user(42);
    non_irc.presence.as_mut().expect("presence present").is_irc = false;

    let mut w = Writer::new();
    codec
        .write_packet(&mut w, PacketKind::BanchoUserStats, &DecodedPacket::User(non_irc))
        .expect("user stats is always available at b1788");
    let bytes = w.into_bytes();
    let gzip_body = &bytes[7..];
    let body = bancho_proto::io::gunzip(gzip_body).expect("b1788 still gzips its body");
    let wire_id = i32::from_le_bytes([body[0], body[1], body[2], body[3]]);
    assert_eq!(wire_id, 42);
}
