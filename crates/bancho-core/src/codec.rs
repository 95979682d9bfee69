//! The per-build configuration bundle: opcode remap, envelope shape, and
//! operation table, wired together into the two operations a caller
//! actually drives a build with — `read_packet`/`write_packet`
//! (`spec.md` §4.3–§4.6).

use std::cell::Cell;

use bancho_proto::error::{CodecError, Direction, Result};
use bancho_proto::io::{Reader, Writer};
use bancho_proto::model::DecodedPacket;
use bancho_proto::packet::PacketKind;

use crate::envelope::{self, EnvelopeStyle};
use crate::op_table::OpTable;
use crate::opcode::OpcodeMap;
use crate::shape::MatchShape;
use crate::trivial;

/// One build's complete wire behavior. Cheap to construct (every field is
/// either a function pointer or plain data), so [`crate::versions`] builds
/// one per registered build up front rather than lazily.
///
/// `protocol_version` is the one field a caller mutates after construction
/// (`spec.md` §5's "per-instance, not globally shared" negotiated value);
/// it lives behind a [`Cell`] so `read_packet`/`write_packet` can stay
/// `&self` while still letting `BanchoProtocolNegotiation` seed it.
#[derive(Debug)]
pub struct Codec {
    pub(crate) build: u32,
    pub(crate) opcodes: OpcodeMap,
    pub(crate) envelope: EnvelopeStyle,
    pub(crate) ops: OpTable,
    protocol_version: Cell<u8>,
}

impl Codec {
    pub(crate) const fn new(
        build: u32,
        opcodes: OpcodeMap,
        envelope: EnvelopeStyle,
        ops: OpTable,
        protocol_version: u8,
    ) -> Self {
        Self { build, opcodes, envelope, ops, protocol_version: Cell::new(protocol_version) }
    }

    /// The build number this codec implements.
    #[must_use]
    pub const fn build(&self) -> u32 {
        self.build
    }

    /// The negotiated protocol version. Defaults to whatever
    /// [`crate::versions`] seeds for this build and changes only when a
    /// `BanchoProtocolNegotiation` packet is written or
    /// [`Self::set_protocol_version`] is called directly (tests use the
    /// latter to exercise slot-size gating without round-tripping a real
    /// packet).
    #[must_use]
    pub fn protocol_version(&self) -> u8 {
        self.protocol_version.get()
    }

    /// Overrides the negotiated protocol version in place.
    pub fn set_protocol_version(&self, version: u8) {
        self.protocol_version.set(version);
    }

    /// Which optional `Match` fields this build's wire layout carries.
    #[must_use]
    pub const fn match_shape(&self) -> MatchShape {
        self.ops.match_shape
    }

    /// The number of match slots this build's wire layout carries: 16 once
    /// the layout supports it (b20140528) and the negotiated protocol
    /// version is at least 19, 8 otherwise (`spec.md` §4.5's b20140528
    /// slot-size gate, Testable Property 8).
    #[must_use]
    pub fn slot_size(&self) -> u16 {
        if self.ops.match_shape.dynamic_slot_size && self.protocol_version() >= 19 { 16 } else { 8 }
    }

    /// Decodes one envelope and its payload. `max_payload_len` caps the
    /// envelope's declared length before any allocation (`spec.md` §5 — a
    /// policy of the caller, not a codec constant).
    pub fn read_packet(&self, reader: &mut Reader, max_payload_len: u32) -> Result<(PacketKind, DecodedPacket)> {
        let env = envelope::decode(self.envelope, reader, max_payload_len)?;
        let kind = (self.opcodes.to_kind)(env.opcode).ok_or(CodecError::InvalidPacket {
            opcode: Some(env.opcode),
            kind: None,
            direction: Direction::ClientToServer,
            build: self.build,
        })?;
        let mut body = Reader::new(env.payload);
        let decoded = self.decode_body(env.opcode, kind, &mut body)?;
        Ok((kind, decoded))
    }

    /// Encodes `packet` (requested as `kind`) and frames the result(s) into
    /// `writer`. A build that doesn't implement `kind` either drops the
    /// packet silently (server→client kinds: `spec.md` §4.3's forward-
    /// compatibility rule) or fails with [`CodecError::InvalidPacket`]
    /// (client→server kinds).
    pub fn write_packet(&self, writer: &mut Writer, kind: PacketKind, packet: &DecodedPacket) -> Result<()> {
        let wire_packets = self.encode_body(kind, packet)?;
        for (wire_kind, body) in &wire_packets {
            let opcode = (self.opcodes.to_wire)(*wire_kind).ok_or_else(|| CodecError::InvalidPacket {
                opcode: None,
                kind: Some(*wire_kind),
                direction: wire_kind.direction(),
                build: self.build,
            })?;
            envelope::encode(self.envelope, writer, opcode, body)?;
        }
        if kind == PacketKind::BanchoProtocolNegotiation && !wire_packets.is_empty() {
            if let DecodedPacket::Id32(version) = packet {
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                self.protocol_version.set((*version).max(0) as u8);
            }
        }
        Ok(())
    }

    fn decode_body(&self, opcode: u16, kind: PacketKind, r: &mut Reader) -> Result<DecodedPacket> {
        use PacketKind::{
            BanchoSpectateFrames, BanchoUserPresence, BanchoUserQuit, BanchoUserStats,
            MatchChangeBeatmap, OsuBeatmapInfoRequest, OsuChannelJoin, OsuMatchChangeSettings,
            OsuMatchCreate, OsuMatchJoin, OsuMessage, OsuPrivateMessage, OsuSpectateFrames,
            OsuUserStatus,
        };
        let unsupported = || CodecError::InvalidPacket {
            opcode: Some(opcode),
            kind: Some(kind),
            direction: kind.direction(),
            build: self.build,
        };
        Ok(match kind {
            OsuUserStatus => DecodedPacket::UserStatus((self.ops.read_user_status.ok_or_else(unsupported)?)(self, r)?),
            OsuMessage => DecodedPacket::Message((self.ops.read_channel_message.ok_or_else(unsupported)?)(self, r)?),
            OsuPrivateMessage => {
                DecodedPacket::Message((self.ops.read_private_message.ok_or_else(unsupported)?)(self, r)?)
            },
            OsuChannelJoin => DecodedPacket::Channel((self.ops.read_channel.ok_or_else(unsupported)?)(self, r)?),
            OsuBeatmapInfoRequest => {
                DecodedPacket::BeatmapInfoRequest((self.ops.read_beatmap_info_request.ok_or_else(unsupported)?)(self, r)?)
            },
            OsuSpectateFrames | BanchoSpectateFrames => {
                DecodedPacket::ReplayFrameBundle((self.ops.read_spectate_frames.ok_or_else(unsupported)?)(self, r)?)
            },
            OsuMatchCreate | OsuMatchChangeSettings | MatchChangeBeatmap => {
                DecodedPacket::Match((self.ops.read_match.ok_or_else(unsupported)?)(self, r)?)
            },
            OsuMatchJoin => DecodedPacket::MatchJoin((self.ops.read_match_join.ok_or_else(unsupported)?)(self, r)?),
            BanchoUserStats => DecodedPacket::User((self.ops.read_user_stats.ok_or_else(unsupported)?)(self, r)?),
            BanchoUserPresence => DecodedPacket::User((self.ops.read_user_presence.ok_or_else(unsupported)?)(self, r)?),
            BanchoUserQuit => DecodedPacket::UserQuit((self.ops.read_user_quit.ok_or_else(unsupported)?)(self, r)?),
            other => {
                if !trivial::is_available(other, self.build) {
                    return Err(unsupported());
                }
                trivial::decode(trivial::shape_for(other, self.build), r)?
            },
        })
    }

    fn encode_body(&self, kind: PacketKind, packet: &DecodedPacket) -> Result<Vec<(PacketKind, Vec<u8>)>> {
        use PacketKind::{
            BanchoBeatmapInfoReply, BanchoChannelAvailable, BanchoChannelAvailableAutojoin,
            BanchoChannelJoinSuccess, BanchoMatchNew, BanchoMatchStart, BanchoMatchUpdate,
            BanchoMessage, BanchoProtocolNegotiation, BanchoSpectateFrames, BanchoTitleUpdate,
            BanchoUserPresence, BanchoUserQuit, BanchoUserStats, OsuMatchJoin, OsuSpectateFrames,
            OsuUserStatus,
        };
        let mismatch = || CodecError::malformed("packet value does not match its requested kind");
        match kind {
            OsuUserStatus => {
                let DecodedPacket::UserStatus(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_user_status, v)
            },
            BanchoUserStats => {
                let DecodedPacket::User(v) = packet else { return Err(mismatch()) };
                self.multi_write(kind, self.ops.write_user_stats, v)
            },
            BanchoUserPresence => {
                let DecodedPacket::User(v) = packet else { return Err(mismatch()) };
                self.multi_write(kind, self.ops.write_user_presence, v)
            },
            BanchoUserQuit => {
                let DecodedPacket::UserQuit(v) = packet else { return Err(mismatch()) };
                self.multi_write(kind, self.ops.write_user_quit, v)
            },
            BanchoMessage => {
                let DecodedPacket::Message(v) = packet else { return Err(mismatch()) };
                self.multi_write(kind, self.ops.write_message, v)
            },
            BanchoChannelJoinSuccess | BanchoChannelAvailable | BanchoChannelAvailableAutojoin => {
                let DecodedPacket::Channel(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_channel, v)
            },
            BanchoBeatmapInfoReply => {
                let DecodedPacket::BeatmapInfoReply(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_beatmap_info_reply, v)
            },
            OsuSpectateFrames | BanchoSpectateFrames => {
                let DecodedPacket::ReplayFrameBundle(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_spectate_frames, v)
            },
            BanchoMatchUpdate | BanchoMatchNew | BanchoMatchStart => {
                let DecodedPacket::Match(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_match, v)
            },
            OsuMatchJoin => {
                let DecodedPacket::MatchJoin(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_match_join, v)
            },
            BanchoTitleUpdate => {
                let DecodedPacket::TitleUpdate(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_title_update, v)
            },
            BanchoProtocolNegotiation => {
                let DecodedPacket::Id32(v) = packet else { return Err(mismatch()) };
                self.single_write(kind, self.ops.write_protocol_negotiation, v)
            },
            other => {
                if !trivial::is_available(other, self.build) {
                    return self.missing(other);
                }
                let mut w = Writer::new();
                trivial::encode(trivial::shape_for(other, self.build), &mut w, packet)?;
                Ok(vec![(other, w.into_bytes())])
            },
        }
    }

    fn single_write<T>(
        &self,
        kind: PacketKind,
        op: Option<crate::op_table::WriteFn<T>>,
        value: &T,
    ) -> Result<Vec<(PacketKind, Vec<u8>)>> {
        let Some(f) = op else { return self.missing(kind) };
        let mut w = Writer::new();
        f(self, &mut w, value)?;
        Ok(vec![(kind, w.into_bytes())])
    }

    fn multi_write<T>(
        &self,
        kind: PacketKind,
        op: Option<crate::op_table::WriteMultiFn<T>>,
        value: &T,
    ) -> Result<Vec<(PacketKind, Vec<u8>)>> {
        let Some(f) = op else { return self.missing(kind) };
        f(self, value)
    }

    /// A build that doesn't implement `kind`: drop silently for
    /// server-direction kinds (old server, newer client-facing feature),
    /// fail for client-direction kinds (a caller asking to emit a packet
    /// this build's clients could never parse is a bug, not forward
    /// compatibility) — `spec.md` §4.3/§7.
    fn missing(&self, kind: PacketKind) -> Result<Vec<(PacketKind, Vec<u8>)>> {
        if kind.is_server_packet() {
            Ok(Vec::new())
        } else {
            Err(CodecError::InvalidPacket { opcode: None, kind: Some(kind), direction: kind.direction(), build: self.build })
        }
    }
}
