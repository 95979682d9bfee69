//! Title-screen banner and protocol-negotiation codecs. Both are
//! server-to-client only; neither is ever decoded.

use bancho_proto::error::Result;
use bancho_proto::io::Writer;
use bancho_proto::model::misc::TitleUpdate;

use crate::codec::Codec;

pub fn write_title_update(_codec: &Codec, w: &mut Writer, v: &TitleUpdate) -> Result<()> {
    w.write_string(&v.image_url);
    w.write_string(&v.redirect_url);
    Ok(())
}

/// `BanchoProtocolNegotiation`'s payload is a bare signed 32-bit protocol
/// version. Sending it also updates `Codec::protocol_version`
/// (`spec.md` §9); that side effect lives in `Codec::write_packet`, not
/// here, so this stays a pure encoder.
pub fn write_protocol_negotiation(_codec: &Codec, w: &mut Writer, v: &i32) -> Result<()> {
    w.write_i32(*v);
    Ok(())
}
