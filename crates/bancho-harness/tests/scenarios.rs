//! End-to-end scenarios A-D (Testable Properties 9-12): fixed build,
//! fixed packet, fixed wire bytes, driven entirely through the public
//! `Codec` API.

use bancho_core::envelope::DEFAULT_MAX_PAYLOAD_LEN;
use bancho_core::VersionRegistry;
use bancho_proto::model::chat::ChatMessage;
use bancho_proto::model::mods::Mods;
use bancho_proto::model::presence::UserPresence;
use bancho_proto::model::status::{Mode, Status, UserStatus};
use bancho_proto::model::stats::UserStats;
use bancho_proto::model::user::{QuitState, UserInfo, UserQuit};
use bancho_proto::model::DecodedPacket;
use bancho_proto::{PacketKind, Reader, Writer};

#[test]
fn scenario_a_login_reply_at_b20130815() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(20_130_815);

    let mut w = Writer::new();
    codec
        .write_packet(&mut w, PacketKind::BanchoLoginReply, &DecodedPacket::Id32(12345))
        .expect("login reply is always available");
    let bytes = w.into_bytes();

    let mut expected = vec![0x05, 0x00]; // opcode 5, little-endian u16
    expected.push(0x00); // compression flag off, per this build's policy
    expected.extend_from_slice(&4u32.to_le_bytes()); // body length
    expected.extend_from_slice(&12345i32.to_le_bytes()); // body: little-endian i32
    assert_eq!(bytes, expected);

    let mut r = Reader::new(bytes);
    let (kind, decoded) = codec.read_packet(&mut r, DEFAULT_MAX_PAYLOAD_LEN).expect("round trip");
    assert_eq!(kind, PacketKind::BanchoLoginReply);
    assert_eq!(decoded, DecodedPacket::Id32(12345));
}

#[test]
fn scenario_b_legacy_ping_frame_at_b323() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(323);

    let gzip_empty = bancho_proto::io::gzip(&[]).expect("gzip of empty body");
    let mut w = Writer::new();
    w.write_u16(8); // BanchoPing, unaffected by b323's opcode shift
    w.write_u32(gzip_empty.len() as u32);
    w.write_bytes(&gzip_empty);

    let mut r = Reader::new(w.into_bytes());
    let (kind, decoded) = codec.read_packet(&mut r, DEFAULT_MAX_PAYLOAD_LEN).expect("legacy frame decodes");
    assert_eq!(kind, PacketKind::BanchoPing);
    assert_eq!(decoded, DecodedPacket::Empty);
}

#[test]
fn b323_user_stats_emits_two_back_to_back_packets() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(323);

    let info = UserInfo {
        id: 7,
        name: "Alice".to_owned(),
        presence: Some(UserPresence {
            is_irc: false,
            timezone: 0,
            country_index: 0,
            permissions: bancho_proto::model::misc::Permissions::NONE,
            longitude: 0.0,
            latitude: 0.0,
            city: "Wherever".to_owned(),
        }),
        status: Some(UserStatus {
            action: Status::Playing,
            text: "Freedom Dive".to_owned(),
            mods: Mods::empty(),
            mode: Mode::Osu,
            beatmap_checksum: String::new(),
            beatmap_id: 0,
            update_stats: false,
        }),
        stats: Some(UserStats { rank: 1, rscore: 0, tscore: 0, accuracy: 0.0, playcount: 0, pp: None }),
    };

    let mut w = Writer::new();
    codec
        .write_packet(&mut w, PacketKind::BanchoUserStats, &DecodedPacket::User(info))
        .expect("user stats is always available at b323");
    let bytes = w.into_bytes();

    let mut r = Reader::new(bytes);
    let (first_kind, first) = codec.read_packet(&mut r, DEFAULT_MAX_PAYLOAD_LEN).expect("first packet decodes");
    assert_eq!(first_kind, PacketKind::BanchoUserStats);
    let DecodedPacket::User(first_info) = first else { panic!("expected a User payload") };
    assert_eq!(first_info.name, "Alice", "the `newstats` packet carries the name/stats/presence block");
    assert_eq!(first_info.stats.expect("stats present").rank, 1);

    let (second_kind, second) = codec.read_packet(&mut r, DEFAULT_MAX_PAYLOAD_LEN).expect("second packet decodes");
    assert_eq!(second_kind, PacketKind::BanchoUserStats);
    let DecodedPacket::User(second_info) = second else { panic!("expected a User payload") };
    assert_eq!(second_info.name, "", "the status-only packet carries no name/stats/presence block");
    assert!(second_info.stats.is_none());
    assert_eq!(second_info.status.expect("status present").action, Status::Playing);
}

#[test]
fn scenario_c_channel_message_at_b282() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(282);

    let mut w = Writer::new();
    let to_osu = ChatMessage { sender: "Alice".to_owned(), content: "hello".to_owned(), target: "#osu".to_owned(), sender_id: 0 };
    codec
        .write_packet(&mut w, PacketKind::BanchoMessage, &DecodedPacket::Message(to_osu))
        .expect("a message to #osu is always available at b282");
    let bytes = w.into_bytes();

    // legacy envelope: u16 opcode, u32 length, gzip body
    let gzip_body = &bytes[6..];
    let body = bancho_proto::io::gunzip(gzip_body).expect("legacy body is always gzip");
    let mut expected_body = vec![0x0B, 0x05];
    expected_body.extend_from_slice(b"Alice");
    expected_body.push(0x0B);
    expected_body.push(0x05);
    expected_body.extend_from_slice(b"hello");
    assert_eq!(body.as_ref(), expected_body.as_slice());

    let mut w_dropped = Writer::new();
    let to_mp = ChatMessage { sender: "Alice".to_owned(), content: "hello".to_owned(), target: "#mp_1".to_owned(), sender_id: 0 };
    codec
        .write_packet(&mut w_dropped, PacketKind::BanchoMessage, &DecodedPacket::Message(to_mp))
        .expect("b282 drops unsupported targets rather than erroring");
    assert!(w_dropped.into_bytes().is_empty(), "a target b282 can't route drops silently");
}

#[test]
fn scenario_d_user_quit_at_b20121224() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(20_121_224);

    let mut w = Writer::new();
    let quit = UserQuit { info: None, user_id: 7, quit_state: QuitState::Gone };
    codec.write_packet(&mut w, PacketKind::BanchoUserQuit, &DecodedPacket::UserQuit(quit)).expect("user quit is always available");
    let bytes = w.into_bytes();

    // b20121224 postdates b1800's gzip deprecation: body is raw, uncompressed.
    let body = &bytes[7..];
    assert_eq!(body, &[0x07, 0x00, 0x00, 0x00, 0x00]);

    let mut r = Reader::new(bytes);
    let (kind, decoded) = codec.read_packet(&mut r, DEFAULT_MAX_PAYLOAD_LEN).expect("round trip");
    assert_eq!(kind, PacketKind::BanchoUserQuit);
    let DecodedPacket::UserQuit(v) = decoded else { panic!("expected a UserQuit payload") };
    assert_eq!(v.user_id, 7);
    assert_eq!(v.quit_state, QuitState::Gone);
}
