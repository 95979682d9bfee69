//! The generic packet shapes: the ~75 [`PacketKind`]s that never grew a
//! build-specific domain record (`spec.md` §2 puts the whole per-version
//! codec surface at "~60%" of the implementation; these are the other
//! 40%, unchanged across every build that carries them at all).
//!
//! Three concerns are handled here instead of in [`crate::op_table`]:
//! the base wire shape for a kind, the rare cases where that shape's
//! *width* still changed mid-history, and the build range a kind is
//! actually available in (most appear at b282 and never leave; a few
//! join or retire partway through).

use bancho_proto::error::Result;
use bancho_proto::io::{Reader, Writer};
use bancho_proto::model::DecodedPacket;
use bancho_proto::packet::PacketKind;

/// One of the handful of version-stable wire shapes a generic packet can
/// take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrivialShape {
    /// No payload.
    Empty,
    /// A single signed 32-bit value.
    Id32,
    /// A single unsigned 32-bit value.
    U32,
    /// A single length-prefixed UTF-8 string.
    Str,
    /// A length-prefixed list of signed ids. `count_is_i16` picks a `u16`
    /// count prefix over the default `u32`; `elem_is_i16` picks `i16`
    /// (sign-extended) elements over the default `i32`.
    IdList32 { count_is_i16: bool, elem_is_i16: bool },
}

/// This kind's wire shape on the very first build that carries it, before
/// any width override applies. Kinds dispatched through
/// [`crate::op_table::OpTable`] instead of this module are never actually
/// looked up here; they're still listed below (mapped to an unused
/// placeholder shape) so the match stays exhaustive.
#[allow(clippy::too_many_lines)]
#[must_use]
pub const fn base_shape(kind: PacketKind) -> TrivialShape {
    use PacketKind::{
        BanchoAccountRestricted, BanchoAnnounce, BanchoBeatmapInfoReply,
        BanchoChannelAvailable, BanchoChannelAvailableAutojoin, BanchoChannelInfoComplete,
        BanchoChannelJoinSuccess, BanchoChannelRevoked, BanchoCommandError,
        BanchoFellowSpectatorJoined, BanchoFellowSpectatorLeft, BanchoFriendsList,
        BanchoGetAttention, BanchoInvite, BanchoIrcChangeUsername, BanchoIrcQuit, IrcJoin,
        BanchoLobbyJoin, BanchoLobbyPart, BanchoLoginPermissions, BanchoLoginReply,
        BanchoMatchAbort, BanchoMatchAllPlayersLoaded, BanchoMatchChangePassword,
        BanchoMatchComplete, BanchoMatchDisband, BanchoMatchJoinFail, BanchoMatchJoinSuccess,
        BanchoMatchNew, BanchoMatchPlayerFailed, BanchoMatchPlayerSkipped,
        BanchoMatchScoreUpdate, BanchoMatchSkip, BanchoMatchStart, BanchoMatchTransferHost,
        BanchoMatchUpdate, BanchoMessage, BanchoMonitor, BanchoPing, BanchoProtocolNegotiation,
        BanchoRTX, BanchoRestart, BanchoSilenceInfo, BanchoSpectateFrames,
        BanchoSpectatorCantSpectate, BanchoSpectatorJoined, BanchoSpectatorLeft,
        BanchoSwitchServer, BanchoSwitchTournamentServer, BanchoTargetIsSilenced,
        BanchoTitleUpdate, BanchoUnauthorized, BanchoUserDMsBlocked, BanchoUserPresence,
        BanchoUserPresenceBundle, BanchoUserPresenceSingle, BanchoUserQuit, BanchoUserSilenced,
        BanchoUserStats, BanchoVersionUpdate, BanchoVersionUpdateForced,
        MatchChangeBeatmap, OsuBeatmapInfoRequest,
        OsuCantSpectate, OsuChangeFriendOnlyDMs, OsuChannelJoin, OsuChannelLeave, OsuErrorReport,
        OsuExit, OsuFriendsAdd, OsuFriendsRemove, OsuInvite, OsuLobbyJoin, OsuLobbyPart,
        OsuMatchChangeMods, OsuMatchChangePassword, OsuMatchChangeSettings,
        OsuMatchChangeSlot, OsuMatchChangeTeam, OsuMatchComplete, OsuMatchCreate,
        OsuMatchFailed, OsuMatchHasBeatmap, OsuMatchJoin, OsuMatchLoadComplete, OsuMatchLock,
        OsuMatchNoBeatmap, OsuMatchNotReady, OsuMatchPart, OsuMatchReady, OsuMatchScoreUpdate,
        OsuMatchSkipRequest, OsuMatchStart, OsuMatchTransferHost, OsuMessage, OsuPong,
        OsuPresenceRequest, OsuPresenceRequestAll, OsuPrivateMessage, OsuReceiveUpdates,
        OsuSetIrcAwayMessage, OsuSpectateFrames, OsuStartSpectating, OsuStatusUpdateRequest,
        OsuStopSpectating, OsuTournamentJoinMatchChannel, OsuTournamentLeaveMatchChannel,
        OsuTournamentMatchInfo, OsuUserStatsRequest, OsuUserStatus,
    };
    match kind {
        OsuExit
        | OsuStatusUpdateRequest
        | OsuPong
        | BanchoPing
        | OsuStopSpectating
        | BanchoVersionUpdate
        | OsuCantSpectate
        | OsuLobbyPart
        | OsuLobbyJoin
        | OsuMatchPart
        | BanchoMatchJoinFail
        | OsuMatchReady
        | OsuMatchStart
        | OsuMatchScoreUpdate
        | BanchoMatchScoreUpdate
        | OsuMatchComplete
        | BanchoMatchTransferHost
        | OsuMatchLoadComplete
        | BanchoMatchAllPlayersLoaded
        | OsuMatchNoBeatmap
        | OsuMatchNotReady
        | OsuMatchFailed
        | BanchoMatchComplete
        | OsuMatchHasBeatmap
        | OsuMatchSkipRequest
        | BanchoUnauthorized
        | OsuMatchChangeTeam
        | BanchoMonitor
        | OsuPresenceRequestAll
        | OsuChangeFriendOnlyDMs
        | BanchoVersionUpdateForced
        | BanchoAccountRestricted
        | BanchoMatchAbort => TrivialShape::Empty,

        BanchoLoginReply
        | BanchoSpectatorJoined
        | BanchoSpectatorLeft
        | OsuStartSpectating
        | BanchoSpectatorCantSpectate
        | BanchoGetAttention
        | BanchoMatchDisband
        | BanchoLobbyJoin
        | BanchoLobbyPart
        | OsuMatchChangeSlot
        | OsuMatchLock
        | BanchoFellowSpectatorJoined
        | BanchoFellowSpectatorLeft
        | BanchoMatchPlayerFailed
        | BanchoMatchSkip
        | OsuMatchTransferHost
        | OsuFriendsAdd
        | OsuFriendsRemove
        | BanchoMatchPlayerSkipped
        | OsuInvite
        | OsuTournamentMatchInfo
        | BanchoUserSilenced
        | BanchoUserPresenceSingle
        | OsuTournamentJoinMatchChannel
        | OsuTournamentLeaveMatchChannel
        | OsuReceiveUpdates => TrivialShape::Id32,

        OsuMatchChangeMods | BanchoLoginPermissions | BanchoRestart | BanchoSilenceInfo => {
            TrivialShape::U32
        }

        BanchoCommandError
        | BanchoIrcChangeUsername
        | BanchoIrcQuit
        | IrcJoin
        | OsuErrorReport
        | BanchoAnnounce
        | OsuChannelLeave
        | OsuSetIrcAwayMessage
        | BanchoInvite
        | BanchoChannelInfoComplete
        | OsuMatchChangePassword
        | BanchoMatchChangePassword
        | BanchoUserDMsBlocked
        | BanchoTargetIsSilenced
        | BanchoSwitchServer
        | BanchoRTX
        | BanchoSwitchTournamentServer => TrivialShape::Str,

        BanchoFriendsList | BanchoUserPresenceBundle | OsuPresenceRequest => {
            TrivialShape::IdList32 { count_is_i16: false, elem_is_i16: false }
        }
        OsuUserStatsRequest => TrivialShape::IdList32 { count_is_i16: true, elem_is_i16: true },

        // Rich kinds: dispatched through `OpTable`, never through this
        // module. Listed only so the match is exhaustive.
        OsuUserStatus
        | OsuMessage
        | OsuPrivateMessage
        | BanchoMessage
        | BanchoUserStats
        | BanchoUserPresence
        | BanchoUserQuit
        | BanchoSpectateFrames
        | OsuSpectateFrames
        | BanchoMatchUpdate
        | BanchoMatchNew
        | OsuMatchCreate
        | OsuMatchJoin
        | BanchoMatchJoinSuccess
        | OsuMatchChangeSettings
        | MatchChangeBeatmap
        | BanchoMatchStart
        | OsuChannelJoin
        | BanchoChannelJoinSuccess
        | BanchoChannelAvailable
        | BanchoChannelRevoked
        | BanchoChannelAvailableAutojoin
        | OsuBeatmapInfoRequest
        | BanchoBeatmapInfoReply
        | BanchoProtocolNegotiation
        | BanchoTitleUpdate => TrivialShape::Empty,
    }
}

/// Builds at which a generic kind joins the wire if later than b282 (no
/// entry means "available from b282 onward"). `IrcJoin` is the one
/// retirement: it leaves the generic set at b1788 once IRC users are
/// represented as negative ids inside `UserStats`/`UserPresence` instead.
const INTRODUCED: &[(PacketKind, u32)] = &[
    (PacketKind::BanchoGetAttention, 291),
    (PacketKind::BanchoAnnounce, 291),
    (PacketKind::OsuFriendsAdd, 452),
    (PacketKind::OsuFriendsRemove, 452),
    (PacketKind::BanchoFriendsList, 452),
    (PacketKind::BanchoChannelInfoComplete, 489),
    (PacketKind::BanchoMatchSkip, 504),
    (PacketKind::BanchoLoginPermissions, 591),
    (PacketKind::BanchoSilenceInfo, 591),
    (PacketKind::BanchoUserSilenced, 591),
    (PacketKind::BanchoUserDMsBlocked, 591),
    (PacketKind::BanchoTargetIsSilenced, 591),
    (PacketKind::BanchoMonitor, 634),
    (PacketKind::OsuUserStatsRequest, 1788),
    (PacketKind::BanchoRestart, 1788),
];

const RETIRED: &[(PacketKind, u32)] = &[(PacketKind::IrcJoin, 1788)];

/// Whether `kind` is part of the generic wire vocabulary at `build`.
#[must_use]
pub fn is_available(kind: PacketKind, build: u32) -> bool {
    let introduced = INTRODUCED.iter().find(|(k, _)| *k == kind).map_or(282, |(_, b)| *b);
    if build < introduced {
        return false;
    }
    !RETIRED.iter().any(|(k, b)| *k == kind && build >= *b)
}

/// Kinds whose base shape from [`base_shape`] still needs a width
/// override past a given build (distinct from introduction: the kind was
/// already on the wire, only its encoding widened).
#[must_use]
pub fn shape_for(kind: PacketKind, build: u32) -> TrivialShape {
    if kind == PacketKind::BanchoFriendsList && build >= 1788 {
        return TrivialShape::IdList32 { count_is_i16: true, elem_is_i16: false };
    }
    base_shape(kind)
}

/// Decode a generic packet payload per `shape`.
pub fn decode(shape: TrivialShape, r: &mut Reader) -> Result<DecodedPacket> {
    Ok(match shape {
        TrivialShape::Empty => DecodedPacket::Empty,
        TrivialShape::Id32 => DecodedPacket::Id32(r.read_i32()?),
        TrivialShape::U32 => DecodedPacket::U32(r.read_u32()?),
        TrivialShape::Str => DecodedPacket::Str(r.read_string()?),
        TrivialShape::IdList32 { count_is_i16, elem_is_i16 } => {
            let count = if count_is_i16 { u32::from(r.read_u16()?) } else { r.read_u32()? };
            let mut ids = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let id = if elem_is_i16 { i32::from(r.read_i16()?) } else { r.read_i32()? };
                ids.push(id);
            }
            DecodedPacket::IdList32(ids)
        }
    })
}

/// Encode a generic packet payload per `shape`. Errors if `packet` doesn't
/// match the variant `shape` expects.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(shape: TrivialShape, w: &mut Writer, packet: &DecodedPacket) -> Result<()> {
    use bancho_proto::error::CodecError;
    match (shape, packet) {
        (TrivialShape::Empty, DecodedPacket::Empty) => {}
        (TrivialShape::Id32, DecodedPacket::Id32(v)) => w.write_i32(*v),
        (TrivialShape::U32, DecodedPacket::U32(v)) => w.write_u32(*v),
        (TrivialShape::Str, DecodedPacket::Str(v)) => w.write_string(v),
        (TrivialShape::IdList32 { count_is_i16, elem_is_i16 }, DecodedPacket::IdList32(ids)) => {
            if count_is_i16 {
                w.write_u16(ids.len() as u16);
            } else {
                w.write_u32(ids.len() as u32);
            }
            for &id in ids {
                if elem_is_i16 {
                    w.write_i16(id as i16);
                } else {
                    w.write_i32(id);
                }
            }
        }
        _ => return Err(CodecError::malformed("packet value does not match its generic shape")),
    }
    Ok(())
}
