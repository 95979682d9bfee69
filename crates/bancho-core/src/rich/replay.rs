//! Spectator replay frame bundle and score frame codecs.
//!
//! Frame encoding changes once (b334: two left/right-click booleans
//! become a raw [`ButtonState`] byte plus a legacy pass-through byte),
//! [`ScoreFrame`] joins from b294, and a leading `extra` field joins from
//! b20130815 (the Open Question in `spec.md` §9 resolves the
//! leading-vs-trailing ambiguity in favor of leading-from-b20130815-only;
//! see `DESIGN.md`).

use bancho_proto::error::Result;
use bancho_proto::io::Writer;
use bancho_proto::model::replay::{ButtonState, ReplayAction, ReplayFrame, ReplayFrameBundle, ScoreFrame};
use bancho_proto::{Reader, Result as ProtoResult};

use crate::codec::Codec;

fn read_frame_v282(r: &mut Reader) -> ProtoResult<ReplayFrame> {
    let left = r.read_bool()?;
    let right = r.read_bool()?;
    let mouse_x = r.read_f32()?;
    let mouse_y = r.read_f32()?;
    let time = r.read_i32()?;
    let mut button_state = ButtonState::NO_BUTTON;
    if left {
        button_state |= ButtonState::LEFT1;
    }
    if right {
        button_state |= ButtonState::RIGHT1;
    }
    Ok(ReplayFrame { button_state, legacy_byte: u8::from(left), mouse_x, mouse_y, time })
}

fn write_frame_v282(w: &mut Writer, f: &ReplayFrame) {
    w.write_bool(f.button_state.contains(ButtonState::LEFT1));
    w.write_bool(f.button_state.contains(ButtonState::RIGHT1));
    w.write_f32(f.mouse_x);
    w.write_f32(f.mouse_y);
    w.write_i32(f.time);
}

fn read_frame_v334(r: &mut Reader) -> ProtoResult<ReplayFrame> {
    let button_state = ButtonState::from_bits_truncate(r.read_u8()?);
    let legacy_byte = r.read_u8()?;
    let mouse_x = r.read_f32()?;
    let mouse_y = r.read_f32()?;
    let time = r.read_i32()?;
    Ok(ReplayFrame { button_state, legacy_byte, mouse_x, mouse_y, time })
}

fn write_frame_v334(w: &mut Writer, f: &ReplayFrame) {
    w.write_u8(f.button_state.bits());
    w.write_u8(f.legacy_byte);
    w.write_f32(f.mouse_x);
    w.write_f32(f.mouse_y);
    w.write_i32(f.time);
}

fn read_score_frame(r: &mut Reader) -> ProtoResult<ScoreFrame> {
    let time = r.read_i32()?;
    let _checksum = r.read_string()?;
    let id = r.read_u8()?;
    let total_300 = r.read_u16()?;
    let total_100 = r.read_u16()?;
    let total_50 = r.read_u16()?;
    let total_geki = r.read_u16()?;
    let total_katu = r.read_u16()?;
    let total_miss = r.read_u16()?;
    let total_score = r.read_i32()?;
    let max_combo = r.read_u16()?;
    let current_combo = r.read_u16()?;
    let perfect = r.read_bool()?;
    let hp = r.read_u8()?;
    let tag_byte = if r.is_empty() { 0 } else { r.read_u8()? };
    Ok(ScoreFrame {
        time,
        id,
        total_300,
        total_100,
        total_50,
        total_geki,
        total_katu,
        total_miss,
        total_score,
        max_combo,
        current_combo,
        perfect,
        hp,
        tag_byte,
    })
}

fn write_score_frame(w: &mut Writer, sf: &ScoreFrame) {
    w.write_i32(sf.time);
    w.write_string(&sf.checksum());
    w.write_u8(sf.id);
    w.write_u16(sf.total_300);
    w.write_u16(sf.total_100);
    w.write_u16(sf.total_50);
    w.write_u16(sf.total_geki);
    w.write_u16(sf.total_katu);
    w.write_u16(sf.total_miss);
    w.write_i32(sf.total_score);
    w.write_u16(sf.max_combo);
    w.write_u16(sf.current_combo);
    w.write_bool(sf.perfect);
    w.write_u8(sf.hp);
    w.write_u8(sf.tag_byte);
}

/// b282: no score frame, two-boolean click encoding.
pub fn read_v282(_codec: &Codec, r: &mut Reader) -> ProtoResult<ReplayFrameBundle> {
    let count = r.read_u16()?;
    let mut frames = Vec::with_capacity(count as usize);
    for _ in 0..count {
        frames.push(read_frame_v282(r)?);
    }
    let action = ReplayAction::try_from_u8(r.read_u8()?)?;
    Ok(ReplayFrameBundle { action, extra: None, frames, frame: None })
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_v282(_codec: &Codec, w: &mut Writer, v: &ReplayFrameBundle) -> Result<()> {
    w.write_u16(v.frames.len() as u16);
    for f in &v.frames {
        write_frame_v282(w, f);
    }
    w.write_u8(v.action as u8);
    Ok(())
}

/// b294: adds an optional trailing [`ScoreFrame`], still two-boolean clicks.
pub fn read_v294(_codec: &Codec, r: &mut Reader) -> ProtoResult<ReplayFrameBundle> {
    let count = r.read_u16()?;
    let mut frames = Vec::with_capacity(count as usize);
    for _ in 0..count {
        frames.push(read_frame_v282(r)?);
    }
    let action = ReplayAction::try_from_u8(r.read_u8()?)?;
    let frame = if r.is_empty() { None } else { Some(read_score_frame(r)?) };
    Ok(ReplayFrameBundle { action, extra: None, frames, frame })
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_v294(_codec: &Codec, w: &mut Writer, v: &ReplayFrameBundle) -> Result<()> {
    w.write_u16(v.frames.len() as u16);
    for f in &v.frames {
        write_frame_v282(w, f);
    }
    w.write_u8(v.action as u8);
    if let Some(frame) = &v.frame {
        write_score_frame(w, frame);
    }
    Ok(())
}

/// b334: raw `ButtonState` byte + legacy byte replace the two booleans.
pub fn read_v334(_codec: &Codec, r: &mut Reader) -> ProtoResult<ReplayFrameBundle> {
    let count = r.read_u16()?;
    let mut frames = Vec::with_capacity(count as usize);
    for _ in 0..count {
        frames.push(read_frame_v334(r)?);
    }
    let action = ReplayAction::try_from_u8(r.read_u8()?)?;
    let frame = if r.is_empty() { None } else { Some(read_score_frame(r)?) };
    Ok(ReplayFrameBundle { action, extra: None, frames, frame })
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_v334(_codec: &Codec, w: &mut Writer, v: &ReplayFrameBundle) -> Result<()> {
    w.write_u16(v.frames.len() as u16);
    for f in &v.frames {
        write_frame_v334(w, f);
    }
    w.write_u8(v.action as u8);
    if let Some(frame) = &v.frame {
        write_score_frame(w, frame);
    }
    Ok(())
}

/// b20130815: gains a leading `i32 extra`.
pub fn read_v20130815(_codec: &Codec, r: &mut Reader) -> ProtoResult<ReplayFrameBundle> {
    let extra = r.read_i32()?;
    let count = r.read_u16()?;
    let mut frames = Vec::with_capacity(count as usize);
    for _ in 0..count {
        frames.push(read_frame_v334(r)?);
    }
    let action = ReplayAction::try_from_u8(r.read_u8()?)?;
    let frame = if r.is_empty() { None } else { Some(read_score_frame(r)?) };
    Ok(ReplayFrameBundle { action, extra: Some(extra), frames, frame })
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_v20130815(_codec: &Codec, w: &mut Writer, v: &ReplayFrameBundle) -> Result<()> {
    w.write_i32(v.extra.unwrap_or(0));
    w.write_u16(v.frames.len() as u16);
    for f in &v.frames {
        write_frame_v334(w, f);
    }
    w.write_u8(v.action as u8);
    if let Some(frame) = &v.frame {
        write_score_frame(w, frame);
    }
    Ok(())
}
