//! `UserStatus` codecs. Three distinct wire shapes span the whole
//! history (`spec.md` §4.5 b282, b1150/b1700, b1796/b1797): whether a
//! `beatmap_update` flag precedes the status body, and whether mods are
//! `u16` or `u32` on the wire.

use bancho_proto::error::Result;
use bancho_proto::io::{Reader, Writer};
use bancho_proto::model::mods::Mods;
use bancho_proto::model::status::{Mode, Status, UserStatus};

use crate::codec::Codec;

/// b282: action byte, then (unless `Unknown`) text/checksum/`u16` mods.
/// No mode, no beatmap id, no `beatmap_update` flag yet.
pub fn read_v282(_codec: &Codec, r: &mut Reader) -> Result<UserStatus> {
    let action = Status::try_from_u8(r.read_u8()?)?;
    if action == Status::Unknown {
        return Ok(empty(action));
    }
    let text = r.read_string()?;
    let beatmap_checksum = r.read_string()?;
    let mods = Mods::from_bits_truncate(u32::from(r.read_u16()?));
    Ok(UserStatus { action, text, beatmap_checksum, mods, mode: Mode::Osu, beatmap_id: 0, update_stats: false })
}

/// Mirror of [`read_v282`].
pub fn write_v282(_codec: &Codec, w: &mut Writer, v: &UserStatus) -> Result<()> {
    w.write_u8(v.action as u8);
    if v.action != Status::Unknown {
        w.write_string(&v.text);
        w.write_string(&v.beatmap_checksum);
        #[allow(clippy::cast_possible_truncation)]
        w.write_u16(v.mods.bits() as u16);
    }
    Ok(())
}

/// b1150/b1700: action byte, unconditional `bool beatmap_update`, then (if
/// true) text/checksum/`u16` mods/`u8` mode/`i32` beatmap id.
pub fn read_v1150(_codec: &Codec, r: &mut Reader) -> Result<UserStatus> {
    let action = Status::try_from_u8(r.read_u8()?)?;
    if !r.read_bool()? {
        return Ok(empty(action));
    }
    let text = r.read_string()?;
    let beatmap_checksum = r.read_string()?;
    let mods = Mods::from_bits_truncate(u32::from(r.read_u16()?));
    let mode = Mode::try_from_u8(r.read_u8()?)?;
    let beatmap_id = r.read_i32()?;
    Ok(UserStatus { action, text, beatmap_checksum, mods, mode, beatmap_id, update_stats: false })
}

/// Mirror of [`read_v1150`].
pub fn write_v1150(_codec: &Codec, w: &mut Writer, v: &UserStatus) -> Result<()> {
    w.write_u8(v.action as u8);
    let has_body = v.action != Status::Unknown;
    w.write_bool(has_body);
    if has_body {
        w.write_string(&v.text);
        w.write_string(&v.beatmap_checksum);
        #[allow(clippy::cast_possible_truncation)]
        w.write_u16(v.mods.bits() as u16);
        w.write_u8(v.mode as u8);
        w.write_i32(v.beatmap_id);
    }
    Ok(())
}

/// b1796/b1797: same shape as [`read_v1150`], mods widened to `u32`.
pub fn read_v1796(_codec: &Codec, r: &mut Reader) -> Result<UserStatus> {
    let action = Status::try_from_u8(r.read_u8()?)?;
    if !r.read_bool()? {
        return Ok(empty(action));
    }
    let text = r.read_string()?;
    let beatmap_checksum = r.read_string()?;
    let mods = Mods::from_bits_truncate(r.read_u32()?);
    let mode = Mode::try_from_u8(r.read_u8()?)?;
    let beatmap_id = r.read_i32()?;
    Ok(UserStatus { action, text, beatmap_checksum, mods, mode, beatmap_id, update_stats: false })
}

/// Mirror of [`read_v1796`].
pub fn write_v1796(_codec: &Codec, w: &mut Writer, v: &UserStatus) -> Result<()> {
    w.write_u8(v.action as u8);
    let has_body = v.action != Status::Unknown;
    w.write_bool(has_body);
    if has_body {
        w.write_string(&v.text);
        w.write_string(&v.beatmap_checksum);
        w.write_u32(v.mods.bits());
        w.write_u8(v.mode as u8);
        w.write_i32(v.beatmap_id);
    }
    Ok(())
}

fn empty(action: Status) -> UserStatus {
    UserStatus {
        action,
        text: String::new(),
        beatmap_checksum: String::new(),
        mods: Mods::empty(),
        mode: Mode::Osu,
        beatmap_id: 0,
        update_stats: false,
    }
}
