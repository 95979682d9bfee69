//! Beatmap metadata lookup.

use crate::error::CodecError;

/// Ranking state of a beatmap on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum RankedStatus {
    /// Not yet ranked or rejected.
    Pending = 0,
    /// Ranked and scorable.
    Ranked = 1,
    /// Approved (ranked, but not through the usual ranking criteria).
    Approved = 2,
    /// Qualified, pending a ranking review window.
    Qualified = 3,
}

impl RankedStatus {
    /// Recover a [`RankedStatus`] from its wire byte.
    pub fn try_from_i8(value: i8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Ranked),
            2 => Ok(Self::Approved),
            3 => Ok(Self::Qualified),
            other => Err(CodecError::malformed(format!("unknown ranked status byte {other}"))),
        }
    }
}

/// A letter grade for one game mode on one beatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Silver SS.
    XH = 0,
    /// Silver S.
    SH = 1,
    /// SS.
    X = 2,
    /// S.
    S = 3,
    A = 4,
    B = 5,
    C = 6,
    D = 7,
    /// Failed.
    F = 8,
    /// No score.
    N = 9,
}

impl Rank {
    /// Recover a [`Rank`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::XH),
            1 => Ok(Self::SH),
            2 => Ok(Self::X),
            3 => Ok(Self::S),
            4 => Ok(Self::A),
            5 => Ok(Self::B),
            6 => Ok(Self::C),
            7 => Ok(Self::D),
            8 => Ok(Self::F),
            9 => Ok(Self::N),
            other => Err(CodecError::malformed(format!("unknown rank byte {other}"))),
        }
    }
}

/// Per-mode grade and ranking metadata for one beatmap difficulty.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatmapInfo {
    /// Index into the requesting client's filename list.
    pub index: i32,
    /// Beatmap (difficulty) id.
    pub beatmap_id: i32,
    /// Beatmap set id.
    pub beatmap_set_id: i32,
    /// Forum thread id for the set.
    pub thread_id: i32,
    /// Current ranking state.
    pub ranked_status: RankedStatus,
    /// Grade in osu!standard, if the requester has a score.
    pub osu_rank: Rank,
    /// Grade in osu!taiko.
    pub taiko_rank: Rank,
    /// Grade in osu!catch.
    pub fruits_rank: Rank,
    /// Grade in osu!mania.
    pub mania_rank: Rank,
    /// MD5 checksum of the beatmap file.
    pub checksum: String,
}

impl BeatmapInfo {
    /// True if the beatmap is in a scorable ranked state.
    #[must_use]
    pub fn is_ranked(&self) -> bool {
        matches!(self.ranked_status, RankedStatus::Ranked | RankedStatus::Approved)
    }
}

/// A batch of beatmap metadata, keyed by the request's index order.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatmapInfoReply {
    /// One entry per matched beatmap.
    pub beatmaps: Vec<BeatmapInfo>,
}

/// A client request for metadata on a set of beatmaps, by filename or id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatmapInfoRequest {
    /// Beatmap filenames to look up.
    pub filenames: Vec<String>,
    /// Beatmap ids to look up.
    pub ids: Vec<i32>,
}
