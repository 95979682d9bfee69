//! Spectator replay frames and in-progress score state.

use bitflags::bitflags;
use md5::{Digest, Md5};

use crate::error::CodecError;

bitflags! {
    /// Which keys/buttons are currently held.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ButtonState: u8 {
        const NO_BUTTON = 0;
        const LEFT1     = 1 << 0;
        const RIGHT1    = 1 << 1;
        const LEFT2     = 1 << 2;
        const RIGHT2    = 1 << 3;
        const SMOKE     = 1 << 4;
    }
}

/// A single recorded input frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayFrame {
    /// Keys held during this frame.
    pub button_state: ButtonState,
    /// Pre-`ButtonState` builds stored the left-mouse boolean here; later
    /// builds repurpose the byte but still send it for compatibility.
    pub legacy_byte: u8,
    pub mouse_x: f32,
    pub mouse_y: f32,
    /// Milliseconds since the start of the play.
    pub time: i32,
}

/// What kind of replay-frame bundle this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ReplayAction {
    Standard = 0,
    NewSong = 1,
    Skip = 2,
    Completion = 3,
    Fail = 4,
    Pause = 5,
    Unpause = 6,
    SongSelect = 7,
    WatchingOther = 8,
}

impl ReplayAction {
    /// Recover a [`ReplayAction`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Standard),
            1 => Ok(Self::NewSong),
            2 => Ok(Self::Skip),
            3 => Ok(Self::Completion),
            4 => Ok(Self::Fail),
            5 => Ok(Self::Pause),
            6 => Ok(Self::Unpause),
            7 => Ok(Self::SongSelect),
            8 => Ok(Self::WatchingOther),
            other => Err(CodecError::malformed(format!("unknown replay action byte {other}"))),
        }
    }
}

/// In-progress score state, sent alongside spectator frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFrame {
    pub time: i32,
    /// Sequential frame id within the play.
    pub id: u8,
    pub total_300: u16,
    pub total_100: u16,
    pub total_50: u16,
    pub total_geki: u16,
    pub total_katu: u16,
    pub total_miss: u16,
    pub total_score: i32,
    pub max_combo: u16,
    pub current_combo: u16,
    /// True if no non-perfect judgment has occurred yet.
    pub perfect: bool,
    pub hp: u8,
    /// Unused pass-through byte carried by some builds.
    pub tag_byte: u8,
}

impl ScoreFrame {
    /// Whether this frame represents a passing play. The reference
    /// implementation never actually computes this (it always reports
    /// `false`); this codec preserves that behavior rather than inventing
    /// pass/fail logic the wire format has no room for.
    #[must_use]
    pub fn passed(&self) -> bool {
        false
    }

    /// MD5 digest the client uses to detect tampering, derived from the
    /// same field concatenation the reference client hashes.
    #[must_use]
    pub fn checksum(&self) -> String {
        let data = format!(
            "{}{}{}{}{}{}{}{}{}{}",
            self.time,
            self.passed(),
            self.total_300,
            self.total_50,
            self.total_geki,
            self.total_katu,
            self.total_miss,
            self.current_combo,
            self.max_combo,
            self.hp
        );
        let digest = Md5::digest(data.as_bytes());
        hex_lower(&digest)
    }
}

fn hex_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

/// A bundle of replay frames plus optional in-progress score state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayFrameBundle {
    pub action: ReplayAction,
    /// Only present on the newest builds (`b20121224` onward).
    pub extra: Option<i32>,
    pub frames: Vec<ReplayFrame>,
    /// Present iff the build sends one and bytes remained to decode it.
    pub frame: Option<ScoreFrame>,
}
