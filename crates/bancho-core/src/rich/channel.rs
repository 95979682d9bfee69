//! Channel codec. `spec.md` §3 only names `name`/`topic`/`user_count` as
//! wire fields; `owner` is a model-only convenience never read off (or
//! written to) the wire by any build in this history.

use bancho_proto::error::Result;
use bancho_proto::io::Writer;
use bancho_proto::model::chat::Channel;
use bancho_proto::{Reader, Result as ProtoResult};

use crate::codec::Codec;

/// A client's bare channel-join request: name only.
pub fn read(_codec: &Codec, r: &mut Reader) -> ProtoResult<Channel> {
    let name = r.read_string()?;
    Ok(Channel { name, topic: String::new(), owner: String::new(), user_count: 0 })
}

/// An informational channel packet: name, topic, user count.
pub fn write(_codec: &Codec, w: &mut Writer, v: &Channel) -> Result<()> {
    w.write_string(&v.name);
    w.write_string(&v.topic);
    w.write_i32(v.user_count);
    Ok(())
}
