//! The packet envelope: opcode + length framing, with the legacy
//! (always-gzip) and modern (explicit compression flag) shapes described
//! in `spec.md` §4.3.

use bancho_proto::error::{CodecError, Result};
use bancho_proto::io::{Reader, Writer, gunzip, gzip};

/// Default cap on a declared payload length, enforced before allocating.
/// A policy of the host, not of the codec (`spec.md` §5) — callers that
/// need a different cap pass one explicitly to [`decode`].
pub const DEFAULT_MAX_PAYLOAD_LEN: u32 = 16 * 1024 * 1024;

/// The two envelope shapes a build can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStyle {
    /// `u16 opcode, u32 length`, body always gzip-compressed (build ≤ 323).
    LegacyGzip,
    /// `u16 opcode, bool compression, u32 length`, body gzipped iff the
    /// flag is set. `force_uncompressed` pins the flag to `false` on
    /// encode regardless of caller intent (build ≥ 1800).
    Modern {
        /// Write `compression = false` unconditionally, per build 1800's
        /// deprecation of in-packet gzip.
        force_uncompressed: bool,
    },
}

/// One decoded envelope: the wire opcode and the (already decompressed)
/// payload bytes.
#[derive(Debug, Clone)]
pub struct DecodedEnvelope {
    /// Raw wire opcode, before opcode remapping.
    pub opcode: u16,
    /// Decompressed payload bytes.
    pub payload: Vec<u8>,
}

/// Decode one envelope from `reader`, enforcing `max_payload_len` before
/// allocating the payload buffer.
pub fn decode(
    style: EnvelopeStyle,
    reader: &mut Reader,
    max_payload_len: u32,
) -> Result<DecodedEnvelope> {
    let opcode = reader.read_u16()?;

    let compressed = match style {
        EnvelopeStyle::LegacyGzip => true,
        EnvelopeStyle::Modern { .. } => reader.read_bool()?,
    };

    let length = reader.read_u32()?;
    if length > max_payload_len {
        return Err(CodecError::Oversize { declared: length, cap: max_payload_len });
    }

    let body = reader.read_bytes(length as usize)?;
    let payload = if compressed { gunzip(&body)?.to_vec() } else { body.to_vec() };

    Ok(DecodedEnvelope { opcode, payload })
}

/// Encode one envelope into `writer`. `body` is the already-assembled
/// payload; this function applies compression per `style` and writes the
/// length-prefixed frame.
pub fn encode(style: EnvelopeStyle, writer: &mut Writer, opcode: u16, body: &[u8]) -> Result<()> {
    match style {
        EnvelopeStyle::LegacyGzip => {
            let compressed = gzip(body)?;
            writer.write_u16(opcode);
            writer.write_u32(compressed.len() as u32);
            writer.write_bytes(&compressed);
        },
        EnvelopeStyle::Modern { force_uncompressed } => {
            if force_uncompressed {
                writer.write_u16(opcode);
                writer.write_bool(false);
                writer.write_u32(body.len() as u32);
                writer.write_bytes(body);
            } else {
                let compressed = gzip(body)?;
                writer.write_u16(opcode);
                writer.write_bool(true);
                writer.write_u32(compressed.len() as u32);
                writer.write_bytes(&compressed);
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_round_trip_empty_body() {
        let mut w = Writer::new();
        encode(EnvelopeStyle::LegacyGzip, &mut w, 8, b"").unwrap();
        let bytes = w.into_bytes();

        let mut r = Reader::new(bytes);
        let env = decode(EnvelopeStyle::LegacyGzip, &mut r, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        assert_eq!(env.opcode, 8);
        assert_eq!(env.payload, b"");
    }

    #[test]
    fn modern_forced_uncompressed_round_trip() {
        let style = EnvelopeStyle::Modern { force_uncompressed: true };
        let mut w = Writer::new();
        encode(style, &mut w, 5, &4i32.to_le_bytes()).unwrap();
        let bytes = w.into_bytes();
        assert_eq!(bytes, vec![5, 0, 0, 4, 0, 0, 0, 4, 0, 0, 0]);

        let mut r = Reader::new(bytes);
        let env = decode(style, &mut r, DEFAULT_MAX_PAYLOAD_LEN).unwrap();
        assert_eq!(env.opcode, 5);
        assert_eq!(env.payload, 4i32.to_le_bytes());
    }

    #[test]
    fn oversize_payload_is_rejected() {
        let mut w = Writer::new();
        w.write_u16(1);
        w.write_bool(false);
        w.write_u32(100);
        w.write_bytes(&[0u8; 10]);
        let mut r = Reader::new(w.into_bytes());
        let style = EnvelopeStyle::Modern { force_uncompressed: true };
        let err = decode(style, &mut r, 16).unwrap_err();
        assert!(matches!(err, CodecError::Oversize { declared: 100, cap: 16 }));
    }
}
