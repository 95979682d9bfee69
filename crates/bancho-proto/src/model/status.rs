//! Player status: the activity a user is currently reporting.

use crate::error::CodecError;
use crate::model::mods::Mods;

/// Game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// osu!standard.
    Osu = 0,
    /// osu!taiko.
    Taiko = 1,
    /// osu!catch.
    Catch = 2,
    /// osu!mania.
    Mania = 3,
}

impl Mode {
    /// Recover a [`Mode`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            other => Err(CodecError::malformed(format!("unknown mode byte {other}"))),
        }
    }
}

/// A user's current activity.
///
/// `StatsUpdate` shares `Paused`'s numeric value (10): very old builds used
/// that action byte to mean "request a stats refresh" rather than "paused
/// gameplay". Builds before the distinction existed decode byte 10 as
/// `Paused`; callers who need the legacy meaning check the build number
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// Idle, not doing anything in particular.
    Idle = 0,
    /// Away from keyboard.
    Afk = 1,
    /// Playing a beatmap.
    Playing = 2,
    /// In the beatmap editor.
    Editing = 3,
    /// Modding a beatmap.
    Modding = 4,
    /// In a multiplayer lobby.
    Multiplayer = 5,
    /// Spectating another player.
    Watching = 6,
    /// Unknown/unset.
    Unknown = 7,
    /// Running a test build.
    Testing = 8,
    /// Submitting a score.
    Submitting = 9,
    /// Paused gameplay (and, on the oldest builds, a stats-update request).
    Paused = 10,
    /// In the multiplayer lobby list.
    Lobby = 11,
    /// Actively playing a multiplayer match.
    Multiplaying = 12,
    /// Browsing osu!direct.
    OsuDirect = 13,
}

impl Status {
    /// Recover a [`Status`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Idle),
            1 => Ok(Self::Afk),
            2 => Ok(Self::Playing),
            3 => Ok(Self::Editing),
            4 => Ok(Self::Modding),
            5 => Ok(Self::Multiplayer),
            6 => Ok(Self::Watching),
            7 => Ok(Self::Unknown),
            8 => Ok(Self::Testing),
            9 => Ok(Self::Submitting),
            10 => Ok(Self::Paused),
            11 => Ok(Self::Lobby),
            12 => Ok(Self::Multiplaying),
            13 => Ok(Self::OsuDirect),
            other => Err(CodecError::malformed(format!("unknown status action byte {other}"))),
        }
    }
}

/// What a client is currently doing, as reported to (and relayed by) the
/// server.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStatus {
    /// The activity being reported.
    pub action: Status,
    /// Free-form status text (e.g. a beatmap title).
    pub text: String,
    /// Selected mods.
    pub mods: Mods,
    /// Selected game mode.
    pub mode: Mode,
    /// MD5 checksum of the beatmap in play, if any.
    pub beatmap_checksum: String,
    /// Beatmap id, or 0 if none.
    pub beatmap_id: i32,
    /// Set by legacy encoders only: whether this status change should also
    /// trigger a stats refresh on the recipient. Never appears on the wire;
    /// it's consumed by the codec that produced this value, not carried
    /// through it.
    pub update_stats: bool,
}
