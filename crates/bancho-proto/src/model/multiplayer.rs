//! Multiplayer match state.

use bitflags::bitflags;

use crate::error::CodecError;
use crate::model::mods::Mods;

bitflags! {
    /// Per-slot readiness/occupancy flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SlotStatus: u8 {
        const OPEN      = 1 << 0;
        const LOCKED    = 1 << 1;
        const NOT_READY = 1 << 2;
        const READY     = 1 << 3;
        const NO_MAP    = 1 << 4;
        const PLAYING   = 1 << 5;
        const COMPLETE  = 1 << 6;
        const QUIT      = 1 << 7;
        /// Any status implying a player occupies the slot.
        const HAS_PLAYER = Self::NOT_READY.bits() | Self::READY.bits() | Self::NO_MAP.bits()
            | Self::PLAYING.bits() | Self::COMPLETE.bits();
    }
}

impl SlotStatus {
    /// True if this status implies a player occupies the slot.
    #[must_use]
    pub fn has_player(self) -> bool {
        self.intersects(Self::HAS_PLAYER)
    }
}

/// Which team a slot is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SlotTeam {
    /// No team (non-team-based match types).
    Neutral = 0,
    /// Blue team.
    Blue = 1,
    /// Red team.
    Red = 2,
}

impl SlotTeam {
    /// Recover a [`SlotTeam`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Blue),
            2 => Ok(Self::Red),
            other => Err(CodecError::malformed(format!("unknown slot team byte {other}"))),
        }
    }
}

/// Match ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MatchType {
    /// Ordinary match.
    Standard = 0,
    /// Powerplay ruleset.
    Powerplay = 1,
}

impl MatchType {
    /// Recover a [`MatchType`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Powerplay),
            other => Err(CodecError::malformed(format!("unknown match type byte {other}"))),
        }
    }
}

/// How match scores are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ScoringType {
    /// Raw score total.
    Score = 0,
    /// Accuracy percentage.
    Accuracy = 1,
    /// Combo length.
    Combo = 2,
    /// Revised scoring algorithm.
    ScoreV2 = 3,
}

impl ScoringType {
    /// Recover a [`ScoringType`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Score),
            1 => Ok(Self::Accuracy),
            2 => Ok(Self::Combo),
            3 => Ok(Self::ScoreV2),
            other => Err(CodecError::malformed(format!("unknown scoring type byte {other}"))),
        }
    }
}

/// Team configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TeamType {
    HeadToHead = 0,
    TagCoop = 1,
    TeamVs = 2,
    TagTeam = 3,
}

impl TeamType {
    /// Recover a [`TeamType`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::HeadToHead),
            1 => Ok(Self::TagCoop),
            2 => Ok(Self::TeamVs),
            3 => Ok(Self::TagTeam),
            other => Err(CodecError::malformed(format!("unknown team type byte {other}"))),
        }
    }
}

/// One occupant slot in a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSlot {
    /// Occupant's user id. Meaningless unless `status.has_player()`.
    pub user_id: i32,
    pub status: SlotStatus,
    pub team: SlotTeam,
    /// Per-slot mod selection, only meaningful when the match has
    /// `freemod` set.
    pub mods: Mods,
}

/// Full multiplayer match state.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Match id. `u8` on the wire before b1817/b20121224, `u16` after;
    /// this model always carries the widened form.
    pub id: u16,
    pub in_progress: bool,
    pub match_type: MatchType,
    /// Match-wide mod selection (ignored per-slot unless `freemod`).
    pub mods: Mods,
    pub name: String,
    pub password: String,
    pub beatmap_text: String,
    pub beatmap_id: i32,
    pub beatmap_checksum: String,
    /// Length always equals the codec's configured slot size (8 or 16).
    pub slots: Vec<MatchSlot>,
    pub host_id: i32,
    pub mode: crate::model::status::Mode,
    pub scoring_type: ScoringType,
    pub team_type: TeamType,
    pub freemod: bool,
    /// Random seed shared by all clients for deterministic beatmap
    /// shuffling in target-practice mode. `0` before the field existed.
    pub seed: i32,
}

/// A client's request to join a match by id and password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchJoin {
    pub match_id: u16,
    pub password: String,
}
