//! Primitive binary I/O for the wire: little-endian fixed-width types,
//! ULEB128 varints, length-prefixed strings, and gzip wrapping.
//!
//! The wire is little-endian throughout (unlike the teacher's big-endian,
//! fixed-size `FrameHeader`): Bancho's envelope and payloads are variable
//! length and were defined by a little-endian client runtime. Readers work
//! over a [`bytes::Buf`] cursor; writers accumulate into a [`BytesMut`].

use bytes::{Buf, BufMut, Bytes, BytesMut};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write as _};

use crate::error::{CodecError, Result};

/// Cursor over an in-memory payload, with ordered little-endian primitive
/// reads. Mirrors the source's `MemoryStream`: sequential `read(n)` plus a
/// way to ask how many bytes remain.
#[derive(Debug, Clone)]
pub struct Reader {
    buf: Bytes,
}

impl Reader {
    /// Wrap a byte buffer for sequential reading.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { buf: data.into() }
    }

    /// Bytes left unread in the stream.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// True once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read exactly `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        if self.buf.remaining() < n {
            return Err(CodecError::malformed(format!(
                "short read: wanted {n} bytes, {} remaining",
                self.buf.remaining()
            )));
        }
        Ok(self.buf.copy_to_bytes(n))
    }

    /// Read all remaining bytes.
    pub fn read_rest(&mut self) -> Bytes {
        let n = self.buf.remaining();
        self.buf.copy_to_bytes(n)
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        self.need(1)?;
        Ok(self.buf.get_i8())
    }

    /// Read an unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.need(1)?;
        Ok(self.buf.get_u8())
    }

    /// Read a little-endian `i16`.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.need(2)?;
        Ok(self.buf.get_i16_le())
    }

    /// Read a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.need(2)?;
        Ok(self.buf.get_u16_le())
    }

    /// Read a little-endian `i32`.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.need(4)?;
        Ok(self.buf.get_i32_le())
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.need(4)?;
        Ok(self.buf.get_u32_le())
    }

    /// Read a little-endian `i64`.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.need(8)?;
        Ok(self.buf.get_i64_le())
    }

    /// Read a little-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.need(8)?;
        Ok(self.buf.get_u64_le())
    }

    /// Read a little-endian `f32`.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.need(4)?;
        Ok(self.buf.get_f32_le())
    }

    /// Read a little-endian `f64`.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.need(8)?;
        Ok(self.buf.get_f64_le())
    }

    /// Read a single-byte boolean (0 or 1; any nonzero byte is `true`).
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a ULEB128-encoded non-negative integer.
    pub fn read_uleb128(&mut self) -> Result<u64> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.read_u8()?;
            if shift >= 64 {
                return Err(CodecError::malformed("ULEB128 integer did not terminate"));
            }
            result |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;
        }
    }

    /// Read a length-prefixed string: `0x00` means empty, `0x0B` means a
    /// ULEB128 length followed by that many UTF-8 bytes. Any other tag is
    /// malformed.
    pub fn read_string(&mut self) -> Result<String> {
        let tag = self.read_u8()?;
        match tag {
            0x00 => Ok(String::new()),
            0x0B => {
                let len = self.read_uleb128()?;
                let len = usize::try_from(len)
                    .map_err(|_| CodecError::malformed("string length overflowed usize"))?;
                let bytes = self.read_bytes(len)?;
                String::from_utf8(bytes.to_vec())
                    .map_err(|e| CodecError::malformed(format!("string is not valid UTF-8: {e}")))
            },
            other => Err(CodecError::malformed(format!("invalid string tag {other:#04x}"))),
        }
    }

    /// Gzip-decompress the entire remaining buffer.
    pub fn read_gzip_to_end(&mut self) -> Result<Bytes> {
        let compressed = self.read_rest();
        gunzip(&compressed)
    }

    fn need(&self, n: usize) -> Result<()> {
        if self.buf.remaining() < n {
            return Err(CodecError::malformed(format!(
                "short read: wanted {n} bytes, {} remaining",
                self.buf.remaining()
            )));
        }
        Ok(())
    }
}

/// Accumulates little-endian primitive writes into an in-memory buffer.
/// Mirrors the source's `MemoryStream` on the write side.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: BytesMut,
}

impl Writer {
    /// Start an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the writer, returning the accumulated bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append raw bytes verbatim.
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.put_slice(data);
    }

    /// Write a signed byte.
    pub fn write_i8(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    /// Write an unsigned byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Write a little-endian `i16`.
    pub fn write_i16(&mut self, value: i16) {
        self.buf.put_i16_le(value);
    }

    /// Write a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    /// Write a little-endian `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Write a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    /// Write a little-endian `i64`.
    pub fn write_i64(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    /// Write a little-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64_le(value);
    }

    /// Write a little-endian `f32`.
    pub fn write_f32(&mut self, value: f32) {
        self.buf.put_f32_le(value);
    }

    /// Write a little-endian `f64`.
    pub fn write_f64(&mut self, value: f64) {
        self.buf.put_f64_le(value);
    }

    /// Write a single-byte boolean.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Write a ULEB128-encoded non-negative integer. Zero encodes as a
    /// single `0x00` byte.
    pub fn write_uleb128(&mut self, mut value: u64) {
        if value == 0 {
            self.write_u8(0);
            return;
        }
        while value != 0 {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.write_u8(byte);
        }
    }

    /// Write a length-prefixed string: empty strings write a bare `0x00`
    /// tag, non-empty strings write `0x0B` + ULEB128 length + UTF-8 bytes.
    pub fn write_string(&mut self, value: &str) {
        if value.is_empty() {
            self.write_u8(0x00);
            return;
        }
        self.write_u8(0x0B);
        self.write_uleb128(value.len() as u64);
        self.write_bytes(value.as_bytes());
    }

    /// Gzip-compress `data` and append it verbatim (no length prefix —
    /// the envelope owns framing).
    pub fn write_gzip(&mut self, data: &[u8]) -> Result<()> {
        self.write_bytes(&gzip(data)?);
        Ok(())
    }
}

/// Gzip-compress a byte slice (RFC-1952, default compression level).
pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Gzip-decompress a byte slice.
pub fn gunzip(data: &[u8]) -> Result<Bytes> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| CodecError::malformed(format!("gzip decode failed: {e}")))?;
    Ok(Bytes::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uleb128_round_trip_known_values() {
        for &value in &[0u64, 1, 127, 128, 16384, (1u64 << 63) - 1] {
            let mut w = Writer::new();
            w.write_uleb128(value);
            let mut r = Reader::new(w.into_bytes());
            assert_eq!(r.read_uleb128().unwrap(), value);
        }
    }

    #[test]
    fn zero_encodes_as_single_byte() {
        let mut w = Writer::new();
        w.write_uleb128(0);
        assert_eq!(w.into_bytes(), vec![0x00]);
    }

    #[test]
    fn string_round_trip() {
        for s in ["", "a", "osu!", &"x".repeat(300)] {
            let mut w = Writer::new();
            w.write_string(s);
            let mut r = Reader::new(w.into_bytes());
            assert_eq!(r.read_string().unwrap(), s);
        }
    }

    #[test]
    fn string_multibyte_utf8_round_trip() {
        let s = "お前はもう死んでいる";
        let mut w = Writer::new();
        w.write_string(s);
        let mut r = Reader::new(w.into_bytes());
        assert_eq!(r.read_string().unwrap(), s);
    }

    #[test]
    fn empty_string_is_bare_tag() {
        let mut w = Writer::new();
        w.write_string("");
        assert_eq!(w.into_bytes(), vec![0x00]);
    }

    #[test]
    fn invalid_string_tag_is_malformed() {
        let mut r = Reader::new(vec![0x42]);
        assert!(matches!(r.read_string(), Err(CodecError::MalformedPayload { .. })));
    }

    #[test]
    fn gzip_round_trip_empty() {
        let compressed = gzip(b"").unwrap();
        assert_eq!(gunzip(&compressed).unwrap().as_ref(), b"");
    }

    #[test]
    fn gzip_round_trip_data() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let compressed = gzip(data).unwrap();
        assert_eq!(gunzip(&compressed).unwrap().as_ref(), data);
    }

    #[test]
    fn short_read_is_malformed() {
        let mut r = Reader::new(vec![0x01]);
        assert!(r.read_u32().is_err());
    }
}
