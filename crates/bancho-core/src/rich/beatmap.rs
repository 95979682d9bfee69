//! Beatmap info request/reply codecs. Per-mode grades (taiko/fruits/mania)
//! join the reply from b1817 onward; before that, only the osu!standard
//! grade is carried (`spec.md` §4.5 "b1817 → b20121224").

use bancho_proto::error::Result;
use bancho_proto::io::Writer;
use bancho_proto::model::beatmap::{BeatmapInfoReply, BeatmapInfoRequest};
use bancho_proto::{Reader, Result as ProtoResult};

use crate::codec::Codec;

pub fn read_request(_codec: &Codec, r: &mut Reader) -> ProtoResult<BeatmapInfoRequest> {
    let filename_count = r.read_u32()?;
    let mut filenames = Vec::with_capacity(filename_count as usize);
    for _ in 0..filename_count {
        filenames.push(r.read_string()?);
    }
    let id_count = r.read_u32()?;
    let mut ids = Vec::with_capacity(id_count as usize);
    for _ in 0..id_count {
        ids.push(r.read_i32()?);
    }
    Ok(BeatmapInfoRequest { filenames, ids })
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_reply_v489(_codec: &Codec, w: &mut Writer, v: &BeatmapInfoReply) -> Result<()> {
    w.write_u32(v.beatmaps.len() as u32);
    for b in &v.beatmaps {
        w.write_i32(b.index);
        w.write_i32(b.beatmap_id);
        w.write_i32(b.beatmap_set_id);
        w.write_i32(b.thread_id);
        w.write_i8(b.ranked_status as i8);
        w.write_u8(b.osu_rank as u8);
        w.write_string(&b.checksum);
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_reply_v1817(_codec: &Codec, w: &mut Writer, v: &BeatmapInfoReply) -> Result<()> {
    w.write_u32(v.beatmaps.len() as u32);
    for b in &v.beatmaps {
        w.write_i32(b.index);
        w.write_i32(b.beatmap_id);
        w.write_i32(b.beatmap_set_id);
        w.write_i32(b.thread_id);
        w.write_i8(b.ranked_status as i8);
        w.write_u8(b.osu_rank as u8);
        w.write_u8(b.taiko_rank as u8);
        w.write_u8(b.fruits_rank as u8);
        w.write_u8(b.mania_rank as u8);
        w.write_string(&b.checksum);
    }
    Ok(())
}
