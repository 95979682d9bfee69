//! The closed set of logical packet identities and their canonical (modern,
//! build ≥ 20121224) numeric opcodes.
//!
//! Each build's codec remaps between this canonical numbering and the wire
//! opcode it actually sends; see `bancho_core::versions`. Two entries
//! (`IrcJoin`, `MatchChangeBeatmap`) are legacy-only: no modern build
//! carries them on the wire, but they remain part of the closed set so
//! legacy codecs can name them.

use crate::error::Direction;

/// Stable logical identity for every Bancho packet, independent of any
/// build's numeric opcode. Numbering matches the canonical (modern,
/// build ≥ 20121224) wire table one-for-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
#[allow(missing_docs)] // one per wire packet; names are self-describing
pub enum PacketKind {
    OsuUserStatus = 0,
    OsuMessage = 1,
    OsuExit = 2,
    OsuStatusUpdateRequest = 3,
    OsuPong = 4,
    BanchoLoginReply = 5,
    BanchoCommandError = 6,
    BanchoMessage = 7,
    BanchoPing = 8,
    BanchoIrcChangeUsername = 9,
    BanchoIrcQuit = 10,
    BanchoUserStats = 11,
    BanchoUserQuit = 12,
    BanchoSpectatorJoined = 13,
    BanchoSpectatorLeft = 14,
    BanchoSpectateFrames = 15,
    OsuStartSpectating = 16,
    OsuStopSpectating = 17,
    OsuSpectateFrames = 18,
    BanchoVersionUpdate = 19,
    OsuErrorReport = 20,
    OsuCantSpectate = 21,
    BanchoSpectatorCantSpectate = 22,
    BanchoGetAttention = 23,
    BanchoAnnounce = 24,
    OsuPrivateMessage = 25,
    BanchoMatchUpdate = 26,
    BanchoMatchNew = 27,
    BanchoMatchDisband = 28,
    OsuLobbyPart = 29,
    OsuLobbyJoin = 30,
    OsuMatchCreate = 31,
    OsuMatchJoin = 32,
    OsuMatchPart = 33,
    BanchoLobbyJoin = 34,
    BanchoLobbyPart = 35,
    BanchoMatchJoinSuccess = 36,
    BanchoMatchJoinFail = 37,
    OsuMatchChangeSlot = 38,
    OsuMatchReady = 39,
    OsuMatchLock = 40,
    OsuMatchChangeSettings = 41,
    BanchoFellowSpectatorJoined = 42,
    BanchoFellowSpectatorLeft = 43,
    OsuMatchStart = 44,
    BanchoMatchStart = 46,
    OsuMatchScoreUpdate = 47,
    BanchoMatchScoreUpdate = 48,
    OsuMatchComplete = 49,
    BanchoMatchTransferHost = 50,
    OsuMatchChangeMods = 51,
    OsuMatchLoadComplete = 52,
    BanchoMatchAllPlayersLoaded = 53,
    OsuMatchNoBeatmap = 54,
    OsuMatchNotReady = 55,
    OsuMatchFailed = 56,
    BanchoMatchPlayerFailed = 57,
    BanchoMatchComplete = 58,
    OsuMatchHasBeatmap = 59,
    OsuMatchSkipRequest = 60,
    BanchoMatchSkip = 61,
    BanchoUnauthorized = 62,
    OsuChannelJoin = 63,
    BanchoChannelJoinSuccess = 64,
    BanchoChannelAvailable = 65,
    BanchoChannelRevoked = 66,
    BanchoChannelAvailableAutojoin = 67,
    OsuBeatmapInfoRequest = 68,
    BanchoBeatmapInfoReply = 69,
    OsuMatchTransferHost = 70,
    BanchoLoginPermissions = 71,
    BanchoFriendsList = 72,
    OsuFriendsAdd = 73,
    OsuFriendsRemove = 74,
    BanchoProtocolNegotiation = 75,
    BanchoTitleUpdate = 76,
    OsuMatchChangeTeam = 77,
    OsuChannelLeave = 78,
    OsuReceiveUpdates = 79,
    BanchoMonitor = 80,
    BanchoMatchPlayerSkipped = 81,
    OsuSetIrcAwayMessage = 82,
    BanchoUserPresence = 83,
    OsuUserStatsRequest = 85,
    BanchoRestart = 86,
    OsuInvite = 87,
    BanchoInvite = 88,
    BanchoChannelInfoComplete = 89,
    OsuMatchChangePassword = 90,
    BanchoMatchChangePassword = 91,
    BanchoSilenceInfo = 92,
    OsuTournamentMatchInfo = 93,
    BanchoUserSilenced = 94,
    BanchoUserPresenceSingle = 95,
    BanchoUserPresenceBundle = 96,
    OsuPresenceRequest = 97,
    OsuPresenceRequestAll = 98,
    OsuChangeFriendOnlyDMs = 99,
    BanchoUserDMsBlocked = 100,
    BanchoTargetIsSilenced = 101,
    BanchoVersionUpdateForced = 102,
    BanchoSwitchServer = 103,
    BanchoAccountRestricted = 104,
    BanchoRTX = 105,
    BanchoMatchAbort = 106,
    BanchoSwitchTournamentServer = 107,
    OsuTournamentJoinMatchChannel = 108,
    OsuTournamentLeaveMatchChannel = 109,

    /// Legacy-only: IRC bridge join notification. No modern opcode carries
    /// it; builds from b1788 onward represent IRC users as negative ids
    /// instead (see `UserStats`/`UserPresence`).
    IrcJoin = 0xFFFF,
    /// Legacy-only: in-lobby beatmap change. Retired once modern match
    /// flow folded this into `OsuMatchChangeSettings`.
    MatchChangeBeatmap = 0xFFFE,
}

impl PacketKind {
    /// Canonical numeric value (matches the modern, build ≥ 20121224 wire
    /// table one-for-one; legacy builds remap around this).
    #[must_use]
    pub const fn canonical(self) -> u32 {
        self as u32
    }

    /// `true` for `Osu*` packets (client → server).
    #[must_use]
    pub const fn is_client_packet(self) -> bool {
        matches!(self.direction(), Direction::ClientToServer)
    }

    /// `true` for `Bancho*` packets (server → client).
    #[must_use]
    pub const fn is_server_packet(self) -> bool {
        matches!(self.direction(), Direction::ServerToClient)
    }

    /// Which side of the wire originates this packet.
    #[must_use]
    pub const fn direction(self) -> Direction {
        use PacketKind::{
            BanchoAccountRestricted, BanchoAnnounce, BanchoBeatmapInfoReply,
            BanchoChannelAvailable, BanchoChannelAvailableAutojoin, BanchoChannelInfoComplete,
            BanchoChannelJoinSuccess, BanchoChannelRevoked, BanchoCommandError,
            BanchoFellowSpectatorJoined, BanchoFellowSpectatorLeft, BanchoFriendsList,
            BanchoGetAttention, BanchoInvite, BanchoIrcChangeUsername, BanchoIrcQuit, IrcJoin,
            BanchoLobbyJoin, BanchoLobbyPart, BanchoLoginPermissions, BanchoLoginReply,
            BanchoMatchAbort, BanchoMatchAllPlayersLoaded, BanchoMatchChangePassword,
            BanchoMatchComplete, BanchoMatchDisband, BanchoMatchJoinFail,
            BanchoMatchJoinSuccess, BanchoMatchNew, BanchoMatchPlayerFailed,
            BanchoMatchPlayerSkipped, BanchoMatchScoreUpdate, BanchoMatchSkip,
            BanchoMatchStart, BanchoMatchTransferHost, BanchoMatchUpdate, BanchoMessage,
            BanchoMonitor, BanchoPing, BanchoProtocolNegotiation, BanchoRTX, BanchoRestart,
            BanchoSilenceInfo, BanchoSpectateFrames, BanchoSpectatorCantSpectate,
            BanchoSpectatorJoined, BanchoSpectatorLeft, BanchoSwitchServer,
            BanchoSwitchTournamentServer, BanchoTargetIsSilenced, BanchoTitleUpdate,
            BanchoUnauthorized, BanchoUserDMsBlocked, BanchoUserPresence,
            BanchoUserPresenceBundle, BanchoUserPresenceSingle, BanchoUserQuit,
            BanchoUserSilenced, BanchoUserStats, BanchoVersionUpdate,
            BanchoVersionUpdateForced, OsuBeatmapInfoRequest, OsuCantSpectate,
            OsuChangeFriendOnlyDMs, OsuChannelJoin, OsuChannelLeave, OsuErrorReport, OsuExit,
            OsuFriendsAdd, OsuFriendsRemove, OsuInvite, OsuLobbyJoin, OsuLobbyPart,
            OsuMatchChangeMods, OsuMatchChangePassword, OsuMatchChangeSettings,
            OsuMatchChangeSlot, OsuMatchChangeTeam, MatchChangeBeatmap, OsuMatchComplete,
            OsuMatchCreate, OsuMatchFailed, OsuMatchHasBeatmap, OsuMatchJoin,
            OsuMatchLoadComplete, OsuMatchLock, OsuMatchNoBeatmap, OsuMatchNotReady,
            OsuMatchPart, OsuMatchReady, OsuMatchScoreUpdate, OsuMatchSkipRequest,
            OsuMatchStart, OsuMatchTransferHost, OsuMessage, OsuPong, OsuPresenceRequest,
            OsuPresenceRequestAll, OsuPrivateMessage, OsuReceiveUpdates, OsuSetIrcAwayMessage,
            OsuSpectateFrames, OsuStartSpectating, OsuStatusUpdateRequest, OsuStopSpectating,
            OsuTournamentJoinMatchChannel, OsuTournamentLeaveMatchChannel,
            OsuTournamentMatchInfo, OsuUserStatsRequest, OsuUserStatus,
        };
        match self {
            OsuUserStatus
            | OsuMessage
            | OsuExit
            | OsuStatusUpdateRequest
            | OsuPong
            | OsuPrivateMessage
            | OsuLobbyPart
            | OsuLobbyJoin
            | OsuMatchCreate
            | OsuMatchJoin
            | OsuMatchPart
            | OsuMatchChangeSlot
            | OsuMatchReady
            | OsuMatchLock
            | OsuMatchChangeSettings
            | OsuMatchStart
            | OsuMatchScoreUpdate
            | OsuMatchComplete
            | OsuMatchChangeMods
            | OsuMatchLoadComplete
            | OsuMatchNoBeatmap
            | OsuMatchNotReady
            | OsuMatchFailed
            | OsuMatchHasBeatmap
            | OsuMatchSkipRequest
            | OsuChannelJoin
            | OsuBeatmapInfoRequest
            | OsuMatchTransferHost
            | OsuFriendsAdd
            | OsuFriendsRemove
            | OsuMatchChangeTeam
            | OsuChannelLeave
            | OsuReceiveUpdates
            | OsuSetIrcAwayMessage
            | OsuUserStatsRequest
            | OsuInvite
            | OsuMatchChangePassword
            | OsuTournamentMatchInfo
            | OsuPresenceRequest
            | OsuPresenceRequestAll
            | OsuChangeFriendOnlyDMs
            | OsuTournamentJoinMatchChannel
            | OsuTournamentLeaveMatchChannel
            | OsuStartSpectating
            | OsuStopSpectating
            | OsuSpectateFrames
            | OsuErrorReport
            | OsuCantSpectate
            | MatchChangeBeatmap => Direction::ClientToServer,

            BanchoLoginReply
            | BanchoCommandError
            | BanchoMessage
            | BanchoPing
            | BanchoIrcChangeUsername
            | BanchoIrcQuit
            | BanchoUserStats
            | BanchoUserQuit
            | BanchoSpectatorJoined
            | BanchoSpectatorLeft
            | BanchoSpectateFrames
            | BanchoVersionUpdate
            | BanchoSpectatorCantSpectate
            | BanchoGetAttention
            | BanchoAnnounce
            | BanchoMatchUpdate
            | BanchoMatchNew
            | BanchoMatchDisband
            | BanchoLobbyJoin
            | BanchoLobbyPart
            | BanchoMatchJoinSuccess
            | BanchoMatchJoinFail
            | BanchoFellowSpectatorJoined
            | BanchoFellowSpectatorLeft
            | BanchoMatchStart
            | BanchoMatchScoreUpdate
            | BanchoMatchTransferHost
            | BanchoMatchAllPlayersLoaded
            | BanchoMatchPlayerFailed
            | BanchoMatchComplete
            | BanchoMatchSkip
            | BanchoUnauthorized
            | BanchoChannelJoinSuccess
            | BanchoChannelAvailable
            | BanchoChannelRevoked
            | BanchoChannelAvailableAutojoin
            | BanchoBeatmapInfoReply
            | BanchoLoginPermissions
            | BanchoFriendsList
            | BanchoProtocolNegotiation
            | BanchoTitleUpdate
            | BanchoMonitor
            | BanchoMatchPlayerSkipped
            | BanchoUserPresence
            | BanchoRestart
            | BanchoInvite
            | BanchoChannelInfoComplete
            | BanchoMatchChangePassword
            | BanchoSilenceInfo
            | BanchoUserSilenced
            | BanchoUserPresenceSingle
            | BanchoUserPresenceBundle
            | BanchoUserDMsBlocked
            | BanchoTargetIsSilenced
            | BanchoVersionUpdateForced
            | BanchoSwitchServer
            | BanchoAccountRestricted
            | BanchoRTX
            | BanchoMatchAbort
            | BanchoSwitchTournamentServer
            | IrcJoin => Direction::ServerToClient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values_match_modern_wire_table() {
        assert_eq!(PacketKind::OsuUserStatus.canonical(), 0);
        assert_eq!(PacketKind::BanchoUserStats.canonical(), 11);
        assert_eq!(PacketKind::BanchoMatchStart.canonical(), 46);
        assert_eq!(PacketKind::BanchoProtocolNegotiation.canonical(), 75);
        assert_eq!(PacketKind::IrcJoin.canonical(), 0xFFFF);
        assert_eq!(PacketKind::MatchChangeBeatmap.canonical(), 0xFFFE);
    }

    #[test]
    fn directions_partition_by_name_prefix() {
        assert!(PacketKind::OsuMessage.is_client_packet());
        assert!(!PacketKind::OsuMessage.is_server_packet());
        assert!(PacketKind::BanchoMessage.is_server_packet());
        assert!(!PacketKind::BanchoMessage.is_client_packet());
        assert!(PacketKind::IrcJoin.is_server_packet());
        assert!(PacketKind::MatchChangeBeatmap.is_client_packet());
    }
}
