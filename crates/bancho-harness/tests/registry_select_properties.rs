//! Property-based companion to `version_dispatch.rs`: instead of probing
//! only the registered build boundaries, throws arbitrary build numbers
//! at `select` and checks the two invariants `spec.md` §8 Property 3
//! promises hold everywhere, not just at the edges.

use bancho_core::VersionRegistry;
use proptest::prelude::*;

proptest! {
    #[test]
    fn select_is_monotonic_for_any_pair_of_builds(a in any::<u32>(), b in any::<u32>()) {
        let registry = VersionRegistry::standard();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(registry.select(lo).build() <= registry.select(hi).build());
    }

    #[test]
    fn select_always_returns_a_registered_build(probe in any::<u32>()) {
        let registry = VersionRegistry::standard();
        let builds = registry.builds();
        let selected = registry.select(probe).build();
        prop_assert!(builds.contains(&selected));
    }

    #[test]
    fn status_text_of_any_length_round_trips_through_b20130815(text in "\\PC{0,512}") {
        use bancho_proto::model::mods::Mods;
        use bancho_proto::model::status::{Mode, Status, UserStatus};
        use bancho_proto::model::DecodedPacket;
        use bancho_proto::{PacketKind, Reader, Writer};

        let registry = VersionRegistry::standard();
        let codec = registry.select(20_130_815);
        let status = UserStatus {
            action: Status::Playing,
            text,
            mods: Mods::empty(),
            mode: Mode::Osu,
            beatmap_checksum: String::new(),
            beatmap_id: 0,
            update_stats: false,
        };

        let mut w = Writer::new();
        codec.write_packet(&mut w, PacketKind::OsuUserStatus, &DecodedPacket::UserStatus(status.clone())).unwrap();
        let mut r = Reader::new(w.into_bytes());
        let (_, decoded) = codec.read_packet(&mut r, bancho_core::envelope::DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        let DecodedPacket::UserStatus(round_tripped) = decoded else { panic!("expected a UserStatus payload") };
        prop_assert_eq!(round_tripped.text, status.text);
    }
}
