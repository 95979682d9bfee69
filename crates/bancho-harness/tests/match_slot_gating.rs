//! Testable Property 8: b20140528's `Match` layout carries 8 slots at
//! protocol version 18 and 16 slots once the negotiated protocol version
//! reaches 19; writing a `Match` whose slot count doesn't match the
//! codec's configured size raises `MalformedPayload`.

use bancho_core::VersionRegistry;
use bancho_proto::error::CodecError;
use bancho_proto::model::multiplayer::{Match, MatchType, ScoringType, SlotStatus, SlotTeam, TeamType};
use bancho_proto::model::mods::Mods;
use bancho_proto::model::status::Mode;
use bancho_proto::model::DecodedPacket;
use bancho_proto::{PacketKind, Reader, Writer};

fn empty_match(slot_count: usize) -> Match {
    Match {
        id: 1,
        in_progress: false,
        match_type: MatchType::Standard,
        mods: Mods::empty(),
        name: "my room".to_owned(),
        password: String::new(),
        beatmap_text: String::new(),
        beatmap_id: 0,
        beatmap_checksum: String::new(),
        slots: vec![
            bancho_proto::model::multiplayer::MatchSlot {
                user_id: 0,
                status: SlotStatus::OPEN,
                team: SlotTeam::Neutral,
                mods: Mods::empty(),
            };
            slot_count
        ],
        host_id: 7,
        mode: Mode::Osu,
        scoring_type: ScoringType::Score,
        team_type: TeamType::HeadToHead,
        freemod: false,
        seed: 0,
    }
}

#[test]
fn protocol_18_uses_eight_slots() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(20_140_528);
    codec.set_protocol_version(18);
    assert_eq!(codec.slot_size(), 8);

    let mut w = Writer::new();
    codec
        .write_packet(&mut w, PacketKind::OsuMatchCreate, &DecodedPacket::Match(empty_match(8)))
        .expect("8 slots matches protocol 18's configured size");
    let mut r = Reader::new(w.into_bytes());
    let (_, decoded) = codec.read_packet(&mut r, bancho_core::envelope::DEFAULT_MAX_PAYLOAD_LEN).expect("round trip");
    let DecodedPacket::Match(m) = decoded else { panic!("expected a Match payload") };
    assert_eq!(m.slots.len(), 8);
}

#[test]
fn protocol_19_uses_sixteen_slots() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(20_140_528);
    codec.set_protocol_version(19);
    assert_eq!(codec.slot_size(), 16);

    let mut w = Writer::new();
    codec
        .write_packet(&mut w, PacketKind::OsuMatchCreate, &DecodedPacket::Match(empty_match(16)))
        .expect("16 slots matches protocol 19's configured size");
    let mut r = Reader::new(w.into_bytes());
    let (_, decoded) = codec.read_packet(&mut r, bancho_core::envelope::DEFAULT_MAX_PAYLOAD_LEN).expect("round trip");
    let DecodedPacket::Match(m) = decoded else { panic!("expected a Match payload") };
    assert_eq!(m.slots.len(), 16);
}

#[test]
fn mismatched_slot_count_is_malformed() {
    let registry = VersionRegistry::standard();
    let codec = registry.select(20_140_528);
    codec.set_protocol_version(18);

    let mut w = Writer::new();
    let err = codec
        .write_packet(&mut w, PacketKind::OsuMatchCreate, &DecodedPacket::Match(empty_match(16)))
        .expect_err("16 slots does not match protocol 18's 8-slot layout");
    assert!(matches!(err, CodecError::MalformedPayload { .. }));
}
