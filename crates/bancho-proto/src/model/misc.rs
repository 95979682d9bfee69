//! Small enums and value types that don't belong to any single packet
//! family: login outcomes, permission flags, presence filters, and the
//! title-screen update banner.

use bitflags::bitflags;

use crate::error::CodecError;

bitflags! {
    /// Account permission flags, encoded as a bitfield.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Permissions: u32 {
        /// No elevated permissions.
        const NONE       = 0;
        const REGULAR    = 1 << 0;
        const BAT        = 1 << 1;
        const SUPPORTER  = 1 << 2;
        const FRIEND     = 1 << 3;
        const PEPPY      = 1 << 4;
        const TOURNAMENT = 1 << 5;
    }
}

/// A login rejection reason. Sent in place of a user id on `LoginReply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LoginError {
    /// Bad username or password.
    InvalidLogin = -1,
    /// Client build not supported by the server.
    InvalidVersion = -2,
    /// Account is banned.
    UserBanned = -3,
    /// Account is inactive (e.g. unverified).
    UserInactive = -4,
    /// Generic server-side failure.
    ServerError = -5,
    /// Test build rejected outside an authorized tournament client.
    UnauthorizedTestBuild = -6,
}

impl LoginError {
    /// Recover a [`LoginError`] from its wire `i32`.
    pub fn try_from_i32(value: i32) -> Result<Self, CodecError> {
        match value {
            -1 => Ok(Self::InvalidLogin),
            -2 => Ok(Self::InvalidVersion),
            -3 => Ok(Self::UserBanned),
            -4 => Ok(Self::UserInactive),
            -5 => Ok(Self::ServerError),
            -6 => Ok(Self::UnauthorizedTestBuild),
            other => Err(CodecError::malformed(format!("unknown login error code {other}"))),
        }
    }
}

/// Avatar image format, as advertised in some legacy presence payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AvatarExtension {
    /// No avatar set.
    Empty = 0,
    /// PNG avatar.
    Png = 1,
    /// JPEG avatar.
    Jpg = 2,
}

impl AvatarExtension {
    /// Recover an [`AvatarExtension`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Png),
            2 => Ok(Self::Jpg),
            other => Err(CodecError::malformed(format!("unknown avatar extension byte {other}"))),
        }
    }
}

/// Which presence updates a client wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PresenceFilter {
    /// No presence updates.
    NoPlayers = 0,
    /// Every online user.
    All = 1,
    /// Friends only.
    Friends = 2,
}

impl PresenceFilter {
    /// Recover a [`PresenceFilter`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::NoPlayers),
            1 => Ok(Self::All),
            2 => Ok(Self::Friends),
            other => Err(CodecError::malformed(format!("unknown presence filter byte {other}"))),
        }
    }
}

/// How much detail a presence bundle update carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Completeness {
    /// Status only, no stats or presence.
    StatusOnly = 0,
    /// Stats only.
    Statistics = 1,
    /// Status, stats, and presence.
    Full = 2,
}

impl Completeness {
    /// Recover a [`Completeness`] from its wire byte.
    pub fn try_from_u8(value: u8) -> Result<Self, CodecError> {
        match value {
            0 => Ok(Self::StatusOnly),
            1 => Ok(Self::Statistics),
            2 => Ok(Self::Full),
            other => Err(CodecError::malformed(format!("unknown completeness byte {other}"))),
        }
    }
}

/// A title-screen announcement banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleUpdate {
    /// URL of the banner image.
    pub image_url: String,
    /// URL the banner links to when clicked.
    pub redirect_url: String,
}
