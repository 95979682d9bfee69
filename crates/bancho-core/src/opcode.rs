//! Per-version opcode remapping: the bijection between a build's wire
//! opcode and the stable logical [`PacketKind`] (`spec.md` §4.6).

use bancho_proto::packet::PacketKind;

/// A pure pair of bijections between wire opcodes and logical packet
/// kinds, in effect for one version or a range of versions.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeMap {
    /// Wire opcode -> logical kind, used on decode.
    pub to_kind: fn(u16) -> Option<PacketKind>,
    /// Logical kind -> wire opcode, used on encode.
    pub to_wire: fn(PacketKind) -> Option<u16>,
}

/// Identity mapping: wire opcode equals [`PacketKind::canonical`]. Used by
/// every build from b1788 onward, once the legacy remap quirks (`IrcJoin`
/// at 11, `MatchChangeBeatmap` at 50) are retired.
pub const IDENTITY: OpcodeMap = OpcodeMap { to_kind: identity_to_kind, to_wire: identity_to_wire };

fn identity_to_kind(opcode: u16) -> Option<PacketKind> {
    canonical_to_kind(u32::from(opcode))
}

fn identity_to_wire(kind: PacketKind) -> Option<u16> {
    u16::try_from(kind.canonical()).ok()
}

/// Recover a [`PacketKind`] from its canonical (modern) numeric value.
/// `const fn PacketKind::try_from` doesn't exist on the enum (it has no
/// `#[repr(u32)]` derive for that), so this is a explicit table instead.
pub fn canonical_to_kind(value: u32) -> Option<PacketKind> {
    use PacketKind::*;
    // Ordered to match `packet.rs`'s declaration order exactly.
    const TABLE: &[PacketKind] = &[
        OsuUserStatus,
        OsuMessage,
        OsuExit,
        OsuStatusUpdateRequest,
        OsuPong,
        BanchoLoginReply,
        BanchoCommandError,
        BanchoMessage,
        BanchoPing,
        BanchoIrcChangeUsername,
        BanchoIrcQuit,
        BanchoUserStats,
        BanchoUserQuit,
        BanchoSpectatorJoined,
        BanchoSpectatorLeft,
        BanchoSpectateFrames,
        OsuStartSpectating,
        OsuStopSpectating,
        OsuSpectateFrames,
        BanchoVersionUpdate,
        OsuErrorReport,
        OsuCantSpectate,
        BanchoSpectatorCantSpectate,
        BanchoGetAttention,
        BanchoAnnounce,
        OsuPrivateMessage,
        BanchoMatchUpdate,
        BanchoMatchNew,
        BanchoMatchDisband,
        OsuLobbyPart,
        OsuLobbyJoin,
        OsuMatchCreate,
        OsuMatchJoin,
        OsuMatchPart,
        BanchoLobbyJoin,
        BanchoLobbyPart,
        BanchoMatchJoinSuccess,
        BanchoMatchJoinFail,
        OsuMatchChangeSlot,
        OsuMatchReady,
        OsuMatchLock,
        OsuMatchChangeSettings,
        BanchoFellowSpectatorJoined,
        BanchoFellowSpectatorLeft,
        OsuMatchStart,
    ];
    if let Ok(index) = usize::try_from(value) {
        if index < TABLE.len() {
            return Some(TABLE[index]);
        }
    }
    // Beyond 44 the table is sparse (45 is unused on the wire) and dense
    // again from 46; fall back to the exhaustive match for those.
    canonical_to_kind_tail(value)
}

fn canonical_to_kind_tail(value: u32) -> Option<PacketKind> {
    use PacketKind::*;
    Some(match value {
        46 => BanchoMatchStart,
        47 => OsuMatchScoreUpdate,
        48 => BanchoMatchScoreUpdate,
        49 => OsuMatchComplete,
        50 => BanchoMatchTransferHost,
        51 => OsuMatchChangeMods,
        52 => OsuMatchLoadComplete,
        53 => BanchoMatchAllPlayersLoaded,
        54 => OsuMatchNoBeatmap,
        55 => OsuMatchNotReady,
        56 => OsuMatchFailed,
        57 => BanchoMatchPlayerFailed,
        58 => BanchoMatchComplete,
        59 => OsuMatchHasBeatmap,
        60 => OsuMatchSkipRequest,
        61 => BanchoMatchSkip,
        62 => BanchoUnauthorized,
        63 => OsuChannelJoin,
        64 => BanchoChannelJoinSuccess,
        65 => BanchoChannelAvailable,
        66 => BanchoChannelRevoked,
        67 => BanchoChannelAvailableAutojoin,
        68 => OsuBeatmapInfoRequest,
        69 => BanchoBeatmapInfoReply,
        70 => OsuMatchTransferHost,
        71 => BanchoLoginPermissions,
        72 => BanchoFriendsList,
        73 => OsuFriendsAdd,
        74 => OsuFriendsRemove,
        75 => BanchoProtocolNegotiation,
        76 => BanchoTitleUpdate,
        77 => OsuMatchChangeTeam,
        78 => OsuChannelLeave,
        79 => OsuReceiveUpdates,
        80 => BanchoMonitor,
        81 => BanchoMatchPlayerSkipped,
        82 => OsuSetIrcAwayMessage,
        83 => BanchoUserPresence,
        85 => OsuUserStatsRequest,
        86 => BanchoRestart,
        87 => OsuInvite,
        88 => BanchoInvite,
        89 => BanchoChannelInfoComplete,
        90 => OsuMatchChangePassword,
        91 => BanchoMatchChangePassword,
        92 => BanchoSilenceInfo,
        93 => OsuTournamentMatchInfo,
        94 => BanchoUserSilenced,
        95 => BanchoUserPresenceSingle,
        96 => BanchoUserPresenceBundle,
        97 => OsuPresenceRequest,
        98 => OsuPresenceRequestAll,
        99 => OsuChangeFriendOnlyDMs,
        100 => BanchoUserDMsBlocked,
        101 => BanchoTargetIsSilenced,
        102 => BanchoVersionUpdateForced,
        103 => BanchoSwitchServer,
        104 => BanchoAccountRestricted,
        105 => BanchoRTX,
        106 => BanchoMatchAbort,
        107 => BanchoSwitchTournamentServer,
        108 => OsuTournamentJoinMatchChannel,
        109 => OsuTournamentLeaveMatchChannel,
        0xFFFF => IrcJoin,
        0xFFFE => MatchChangeBeatmap,
        _ => return None,
    })
}

/// b282's opcode remap: wire `11` names `IrcJoin`; wire `12..=45` and wire
/// `>50` are both shifted up by one relative to the logical table (see
/// `DESIGN.md`/`SPEC_FULL.md` for the resolved boundary behavior, pinned
/// against `original_source/chio/clients/b282.py`).
pub const B282: OpcodeMap = OpcodeMap { to_kind: b282_to_kind, to_wire: b282_to_wire };

fn b282_to_kind(opcode: u16) -> Option<PacketKind> {
    if opcode == 11 {
        return Some(PacketKind::IrcJoin);
    }
    let logical = if (12..=45).contains(&opcode) {
        u32::from(opcode) - 1
    } else if opcode > 50 {
        u32::from(opcode) - 1
    } else {
        u32::from(opcode)
    };
    canonical_to_kind(logical)
}

fn b282_to_wire(kind: PacketKind) -> Option<u16> {
    if kind == PacketKind::IrcJoin {
        return Some(11);
    }
    let canonical = kind.canonical();
    let wire = if (11..45).contains(&canonical) {
        canonical + 1
    } else if canonical > 50 {
        canonical + 1
    } else {
        canonical
    };
    u16::try_from(wire).ok()
}

/// b323's opcode remap: `IrcJoin` gets its own wire value (`11`, no longer
/// a remap target), `MatchChangeBeatmap` claims wire `50`, and the
/// `12..=45` shift persists for everything else (`>50` is no longer
/// shifted, because wire `50` is now spoken for).
pub const B323: OpcodeMap = OpcodeMap { to_kind: b323_to_kind, to_wire: b323_to_wire };

fn b323_to_kind(opcode: u16) -> Option<PacketKind> {
    match opcode {
        11 => Some(PacketKind::IrcJoin),
        50 => Some(PacketKind::MatchChangeBeatmap),
        12..=45 => canonical_to_kind(u32::from(opcode) - 1),
        other => canonical_to_kind(u32::from(other)),
    }
}

fn b323_to_wire(kind: PacketKind) -> Option<u16> {
    match kind {
        PacketKind::IrcJoin => Some(11),
        PacketKind::MatchChangeBeatmap => Some(50),
        other => {
            let canonical = other.canonical();
            let wire = if (11..45).contains(&canonical) { canonical + 1 } else { canonical };
            u16::try_from(wire).ok()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_every_canonical_kind() {
        for opcode in 0u16..=109 {
            if let Some(kind) = identity_to_kind(opcode) {
                assert_eq!(identity_to_wire(kind), Some(opcode));
            }
        }
    }

    #[test]
    fn b282_irc_join_maps_to_eleven() {
        assert_eq!(b282_to_kind(11), Some(PacketKind::IrcJoin));
        assert_eq!(b282_to_wire(PacketKind::IrcJoin), Some(11));
    }

    #[test]
    fn b282_shifts_mid_range_opcodes() {
        // Wire 12 names logical 11 (BanchoUserStats).
        assert_eq!(b282_to_kind(12), Some(PacketKind::BanchoUserStats));
        assert_eq!(b282_to_wire(PacketKind::BanchoUserStats), Some(12));
    }

    #[test]
    fn b323_match_change_beatmap_claims_fifty() {
        assert_eq!(b323_to_kind(50), Some(PacketKind::MatchChangeBeatmap));
        assert_eq!(b323_to_wire(PacketKind::MatchChangeBeatmap), Some(50));
    }
}
