//! Chat message codecs: channel broadcasts and (from b294) private
//! messages, gaining a trailing sender id from b1817 onward.

use bancho_proto::error::Result;
use bancho_proto::io::Writer;
use bancho_proto::model::chat::ChatMessage;
use bancho_proto::packet::PacketKind;
use bancho_proto::{CodecError, Reader, Result as ProtoResult};

use crate::codec::Codec;

const DEFAULT_CHANNEL: &str = "#osu";

/// b282: sender+content only, fixed to `#osu`. Any other target is
/// silently dropped on write (no channels to route it through yet).
pub fn write_v282(_codec: &Codec, msg: &ChatMessage) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    if msg.target != DEFAULT_CHANNEL {
        return Ok(Vec::new());
    }
    let mut w = Writer::new();
    w.write_string(&msg.sender);
    w.write_string(&msg.content);
    Ok(vec![(PacketKind::BanchoMessage, w.into_bytes())])
}

pub fn read_channel_v282(_codec: &Codec, r: &mut Reader) -> ProtoResult<ChatMessage> {
    let content = r.read_string()?;
    Ok(ChatMessage { sender: String::new(), content, target: DEFAULT_CHANNEL.to_string(), sender_id: 0 })
}

/// b294: sender+content+target+trailing `bool is_direct_message`.
pub fn write_v294(_codec: &Codec, msg: &ChatMessage) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    let mut w = Writer::new();
    w.write_string(&msg.sender);
    w.write_string(&msg.content);
    w.write_string(&msg.target);
    w.write_bool(msg.is_direct_message());
    Ok(vec![(PacketKind::BanchoMessage, w.into_bytes())])
}

pub fn read_channel_v294(_codec: &Codec, r: &mut Reader) -> ProtoResult<ChatMessage> {
    let content = r.read_string()?;
    Ok(ChatMessage { sender: String::new(), content, target: DEFAULT_CHANNEL.to_string(), sender_id: 0 })
}

pub fn read_private_v294(_codec: &Codec, r: &mut Reader) -> ProtoResult<ChatMessage> {
    let target = r.read_string()?;
    let content = r.read_string()?;
    if !r.read_bool()? {
        return Err(CodecError::malformed("private message flag was false"));
    }
    Ok(ChatMessage { sender: String::new(), content, target, sender_id: 0 })
}

/// b1817/b20121224: same as [`write_v294`] plus a trailing `i32 sender_id`.
pub fn write_v1817(_codec: &Codec, msg: &ChatMessage) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    let mut w = Writer::new();
    w.write_string(&msg.sender);
    w.write_string(&msg.content);
    w.write_string(&msg.target);
    w.write_bool(msg.is_direct_message());
    w.write_i32(msg.sender_id);
    Ok(vec![(PacketKind::BanchoMessage, w.into_bytes())])
}

pub fn read_channel_v1817(_codec: &Codec, r: &mut Reader) -> ProtoResult<ChatMessage> {
    let content = r.read_string()?;
    let sender_id = r.read_i32()?;
    Ok(ChatMessage { sender: String::new(), content, target: DEFAULT_CHANNEL.to_string(), sender_id })
}

pub fn read_private_v1817(_codec: &Codec, r: &mut Reader) -> ProtoResult<ChatMessage> {
    let target = r.read_string()?;
    let content = r.read_string()?;
    if !r.read_bool()? {
        return Err(CodecError::malformed("private message flag was false"));
    }
    let sender_id = r.read_i32()?;
    Ok(ChatMessage { sender: String::new(), content, target, sender_id })
}
