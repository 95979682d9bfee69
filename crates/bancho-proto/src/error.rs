//! Error taxonomy for the Bancho codec.
//!
//! Four variants cover every failure mode the codec can produce: a packet
//! whose opcode or direction doesn't fit the requested operation
//! (`InvalidPacket`), a payload whose bytes don't parse
//! (`MalformedPayload`), a declared length that exceeds the host's cap
//! (`Oversize`), and an I/O failure from the underlying stream (`IoError`).
//! The codec never salvages a failed decode; callers see every error.

use std::io;

use thiserror::Error;

use crate::packet::PacketKind;

/// Which side of the wire an operation was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Client-to-server (`Osu*`).
    ClientToServer,
    /// Server-to-client (`Bancho*`).
    ServerToClient,
}

/// Errors produced while encoding or decoding Bancho packets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The opcode is unknown, doesn't match the requested direction, or the
    /// selected version does not implement this kind on read.
    #[error("invalid packet: opcode={opcode:?} kind={kind:?} direction={direction:?} build={build}")]
    InvalidPacket {
        /// Wire opcode involved, if known.
        opcode: Option<u16>,
        /// Logical packet kind involved, if known.
        kind: Option<PacketKind>,
        /// Direction the operation was attempted in.
        direction: Direction,
        /// Build number of the codec that rejected the packet.
        build: u32,
    },

    /// A primitive read failed, a string tag was neither 0x00 nor 0x0B, a
    /// ULEB128 integer never terminated, gzip failed, or an enum byte fell
    /// outside its defined domain.
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// Human-readable description of what failed to parse.
        reason: String,
    },

    /// The envelope's declared payload length exceeds the host's cap.
    #[error("oversize payload: declared {declared} bytes, cap is {cap} bytes")]
    Oversize {
        /// Length the envelope claimed.
        declared: u32,
        /// The host-configured cap.
        cap: u32,
    },

    /// The underlying byte stream failed.
    #[error("stream I/O error: {0}")]
    IoError(String),
}

impl CodecError {
    /// Build a [`CodecError::MalformedPayload`] from a displayable reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload { reason: reason.into() }
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, CodecError>;
