//! Primitive wire I/O and the version-neutral message model for the
//! Bancho packet protocol.
//!
//! This crate has no notion of a client build or a per-version wire
//! shape — that lives in `bancho-core`. What it provides is the common
//! ground every build's codec is built from: little-endian primitive
//! reads/writes, the closed [`packet::PacketKind`] set with its canonical
//! (modern) numbering, the [`model::DecodedPacket`] tagged union, and the
//! shared [`error::CodecError`] taxonomy.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod io;
pub mod model;
pub mod packet;

pub use error::{CodecError, Direction, Result};
pub use io::{Reader, Writer};
pub use model::DecodedPacket;
pub use packet::PacketKind;
