//! Identity: who a user is, and how they left.

use crate::error::CodecError;
use crate::model::presence::UserPresence;
use crate::model::stats::UserStats;
use crate::model::status::UserStatus;

/// A user's identity plus whatever optional presence/status/stats blocks
/// the source packet carried. Builds before b1788 send all three inline;
/// later builds split them into separate packets, so most fields are
/// `Option`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    /// Numeric user id. IRC-bridged users are negative from b1788 onward.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Location/bridge metadata, if this record carries it.
    pub presence: Option<UserPresence>,
    /// Current activity, if this record carries it.
    pub status: Option<UserStatus>,
    /// Score statistics, if this record carries it.
    pub stats: Option<UserStats>,
}

impl UserInfo {
    /// The filename of this user's avatar image, as derived by every
    /// client: `"{id}_000.png"`.
    #[must_use]
    pub fn avatar_filename(&self) -> String {
        format!("{}_000.png", self.id)
    }
}

/// Which presence channels a departing user is still reachable on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuitState {
    /// Gone entirely.
    Gone = 0,
    /// Still connected to the game client.
    OsuRemaining = 1,
    /// Still connected via the IRC bridge.
    IrcRemaining = 2,
}

impl QuitState {
    /// Recover a [`QuitState`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Gone),
            1 => Ok(Self::OsuRemaining),
            2 => Ok(Self::IrcRemaining),
            other => Err(CodecError::malformed(format!("unknown quit state byte {other}"))),
        }
    }
}

/// A user leaving (either the game client, the IRC bridge, or both).
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuit {
    /// Full identity of the departing user, where the build carries it;
    /// builds from b20121224 onward carry only the bare user id instead.
    pub info: Option<UserInfo>,
    /// Bare user id, used by the unified `UserQuit` from b20121224 onward.
    pub user_id: i32,
    /// How the user is leaving.
    pub quit_state: QuitState,
}
