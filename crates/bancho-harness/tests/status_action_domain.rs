//! Testable Property 7: every `Status` action value round-trips through
//! a build's status codec exactly, and a byte outside the 0..=13 domain
//! is rejected with `MalformedPayload` rather than silently truncated
//! or defaulted.

use bancho_core::envelope::DEFAULT_MAX_PAYLOAD_LEN;
use bancho_core::VersionRegistry;
use bancho_proto::error::CodecError;
use bancho_proto::model::mods::Mods;
use bancho_proto::model::status::{Mode, Status, UserStatus};
use bancho_proto::model::DecodedPacket;
use bancho_proto::{PacketKind, Reader, Writer};

const ALL_ACTIONS: &[Status] = &[
    Status::Idle,
    Status::Afk,
    Status::Playing,
    Status::Editing,
    Status::Modding,
    Status::Multiplayer,
    Status::Watching,
    Status::Unknown,
    Status::Testing,
    Status::Submitting,
    Status::Paused,
    Status::Lobby,
    Status::Multiplaying,
    Status::OsuDirect,
];

fn status(action: Status) -> UserStatus {
    UserStatus {
        action,
        text: "Freedom Dive".to_owned(),
        mods: Mods::empty(),
        mode: Mode::Osu,
        beatmap_checksum: "deadbeefdeadbeefdeadbeefdeadbeef".to_owned(),
        beatmap_id: 126_645,
        update_stats: false,
    }
}

#[test]
fn every_status_action_round_trips_at_b20130815() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(20_130_815);

    for &action in ALL_ACTIONS {
        let mut w = Writer::new();
        codec
            .write_packet(&mut w, PacketKind::OsuUserStatus, &DecodedPacket::UserStatus(status(action)))
            .unwrap_or_else(|e| panic!("{action:?} should always be writable: {e}"));
        let mut r = Reader::new(w.into_bytes());
        let (kind, decoded) = codec.read_packet(&mut r, DEFAULT_MAX_PAYLOAD_LEN).unwrap_or_else(|e| {
            panic!("{action:?} should decode what it just encoded: {e}")
        });
        assert_eq!(kind, PacketKind::OsuUserStatus);
        let DecodedPacket::UserStatus(round_tripped) = decoded else { panic!("expected a UserStatus payload") };
        assert_eq!(round_tripped.action, action);
        if action != Status::Unknown {
            assert_eq!(round_tripped.text, "Freedom Dive");
            assert_eq!(round_tripped.beatmap_id, 126_645);
        }
    }
}

#[test]
fn out_of_domain_action_byte_is_malformed() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(20_130_815);

    let mut w = Writer::new();
    w.write_u8(14); // one past Status::OsuDirect, the highest assigned value
    w.write_bool(false);
    let mut r = Reader::new(w.into_bytes());

    let err = bancho_core::rich::status::read_v1796(codec, &mut r).expect_err("byte 14 is out of domain");
    assert!(matches!(err, CodecError::MalformedPayload { .. }));
}
