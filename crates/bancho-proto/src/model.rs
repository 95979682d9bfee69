//! Version-neutral message records and enums for every domain message the
//! codec carries. Each submodule groups one family (§3 of the design doc);
//! [`DecodedPacket`] is the tagged union a per-version codec dispatches on.

pub mod beatmap;
pub mod chat;
pub mod misc;
pub mod mods;
pub mod multiplayer;
pub mod presence;
pub mod replay;
pub mod stats;
pub mod status;
pub mod user;

use beatmap::{BeatmapInfoReply, BeatmapInfoRequest};
use chat::{Channel, ChatMessage};
use misc::TitleUpdate;
use multiplayer::{Match, MatchJoin};
use replay::ReplayFrameBundle;
use status::UserStatus;
use user::{UserInfo, UserQuit};

/// The version-neutral value a decoded packet carries, tagged by
/// [`crate::packet::PacketKind`].
///
/// Most of the ~90 logical packets never acquire a version-specific wire
/// layout beyond "one 32-bit value" or "no body at all" (confirmed by how
/// few methods each per-build codec in the reference implementation
/// overrides); those are represented here by the generic [`Self::Empty`],
/// [`Self::Id32`], [`Self::U32`], and [`Self::Str`] variants rather than by
/// a dedicated type per kind. The remaining "rich" packets — the ones
/// `spec.md` §3 actually describes a record for — get a dedicated variant.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)] // variants are self-describing, see field docs above
pub enum DecodedPacket {
    /// No payload at all (e.g. `BanchoPing`, `OsuExit`).
    Empty,
    /// A single signed 32-bit value: most user-id notifications
    /// (`BanchoSpectatorJoined`, `OsuStartSpectating`, ...), and
    /// `BanchoLoginReply` (positive: user id: negative: a
    /// [`misc::LoginError`] code at the matching wire value).
    Id32(i32),
    /// A single unsigned 32-bit value (`BanchoRestart`'s retry-after
    /// milliseconds).
    U32(u32),
    /// A single UTF-8 string (`BanchoAnnounce`).
    Str(String),
    /// A list of signed 32-bit ids (`BanchoFriendsList`,
    /// `OsuUserStatsRequest`); wire width of the length prefix and each
    /// element varies by build, handled inside the codec.
    IdList32(Vec<i32>),
    UserStatus(UserStatus),
    /// Presence, stats, or the pre-b1788 combined bundle — whichever
    /// fields the wire shape for this build and kind carries are
    /// populated; the rest are `None`.
    User(UserInfo),
    UserQuit(UserQuit),
    Message(ChatMessage),
    Channel(Channel),
    BeatmapInfoRequest(BeatmapInfoRequest),
    BeatmapInfoReply(BeatmapInfoReply),
    ReplayFrameBundle(ReplayFrameBundle),
    Match(Match),
    MatchJoin(MatchJoin),
    TitleUpdate(TitleUpdate),
}
