//! Multiplayer `Match`/`MatchJoin` codecs.
//!
//! One shared implementation, parameterized by [`MatchShape`]
//! (`crate::shape`), covers every build from b334 (the first build with
//! a `Match` packet at all) through b20140528. Earlier builds have no
//! multiplayer support and leave the corresponding `OpTable` fields
//! `None`.

use bancho_proto::error::{CodecError, Result};
use bancho_proto::io::Writer;
use bancho_proto::model::mods::Mods;
use bancho_proto::model::multiplayer::{Match, MatchJoin, MatchSlot, ScoringType, SlotStatus, SlotTeam, TeamType};
use bancho_proto::model::status::Mode;
use bancho_proto::{Reader, Result as ProtoResult};

use crate::codec::Codec;

#[allow(clippy::cast_possible_truncation)]
pub fn read_match(codec: &Codec, r: &mut Reader) -> ProtoResult<Match> {
    let shape = codec.match_shape();
    let slot_size = codec.slot_size() as usize;

    let id = if shape.wide_id { r.read_u16()? } else { u16::from(r.read_u8()?) };
    let in_progress = r.read_bool()?;
    let match_type = bancho_proto::model::multiplayer::MatchType::try_from_u8(r.read_u8()?)?;
    let mods = if shape.wide_mods {
        Mods::from_bits_truncate(r.read_u32()?)
    } else {
        Mods::from_bits_truncate(u32::from(r.read_u16()?))
    };
    let name = r.read_string()?;
    let password = r.read_string()?;
    let beatmap_text = r.read_string()?;
    let beatmap_id = r.read_i32()?;
    let beatmap_checksum = r.read_string()?;

    let mut statuses = Vec::with_capacity(slot_size);
    for _ in 0..slot_size {
        statuses.push(SlotStatus::from_bits_truncate(r.read_u8()?));
    }

    let mut teams = vec![SlotTeam::Neutral; slot_size];
    if shape.has_slot_team {
        for team in &mut teams {
            *team = SlotTeam::try_from_u8(r.read_u8()?)?;
        }
    }

    let mut user_ids = vec![0i32; slot_size];
    for (status, user_id) in statuses.iter().zip(user_ids.iter_mut()) {
        if status.has_player() {
            *user_id = r.read_i32()?;
        }
    }

    let host_id = r.read_i32()?;
    let mode = if shape.has_mode { Mode::try_from_u8(r.read_u8()?)? } else { Mode::Osu };

    let mut freemod = false;
    let mut slot_mods = vec![Mods::empty(); slot_size];
    if shape.has_freemod {
        freemod = r.read_bool()?;
        if freemod {
            for mods in &mut slot_mods {
                *mods = Mods::from_bits_truncate(r.read_i32()? as u32);
            }
        }
    }

    let (scoring_type, team_type) = if shape.has_scoring_team_type {
        (ScoringType::try_from_u8(r.read_u8()?)?, TeamType::try_from_u8(r.read_u8()?)?)
    } else {
        (ScoringType::Score, TeamType::HeadToHead)
    };

    let seed = if shape.has_seed { r.read_i32()? } else { 0 };

    let slots = (0..slot_size)
        .map(|i| MatchSlot { user_id: user_ids[i], status: statuses[i], team: teams[i], mods: slot_mods[i] })
        .collect();

    Ok(Match {
        id,
        in_progress,
        match_type,
        mods,
        name,
        password,
        beatmap_text,
        beatmap_id,
        beatmap_checksum,
        slots,
        host_id,
        mode,
        scoring_type,
        team_type,
        freemod,
        seed,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn write_match(codec: &Codec, w: &mut Writer, v: &Match) -> Result<()> {
    let shape = codec.match_shape();
    let slot_size = codec.slot_size() as usize;
    if v.slots.len() != slot_size {
        return Err(CodecError::malformed(format!(
            "match has {} slots, codec is configured for {slot_size}",
            v.slots.len()
        )));
    }

    if shape.wide_id {
        w.write_u16(v.id);
    } else {
        w.write_u8(v.id as u8);
    }
    w.write_bool(v.in_progress);
    w.write_u8(v.match_type as u8);
    if shape.wide_mods {
        w.write_u32(v.mods.bits());
    } else {
        w.write_u16(v.mods.bits() as u16);
    }
    w.write_string(&v.name);
    w.write_string(&v.password);
    w.write_string(&v.beatmap_text);
    w.write_i32(v.beatmap_id);
    w.write_string(&v.beatmap_checksum);

    for slot in &v.slots {
        w.write_u8(slot.status.bits());
    }
    if shape.has_slot_team {
        for slot in &v.slots {
            w.write_u8(slot.team as u8);
        }
    }
    for slot in &v.slots {
        if slot.status.has_player() {
            w.write_i32(slot.user_id);
        }
    }

    w.write_i32(v.host_id);
    if shape.has_mode {
        w.write_u8(v.mode as u8);
    }
    if shape.has_freemod {
        w.write_bool(v.freemod);
        if v.freemod {
            for slot in &v.slots {
                w.write_i32(slot.mods.bits() as i32);
            }
        }
    }
    if shape.has_scoring_team_type {
        w.write_u8(v.scoring_type as u8);
        w.write_u8(v.team_type as u8);
    }
    if shape.has_seed {
        w.write_i32(v.seed);
    }
    Ok(())
}

pub fn read_match_join(codec: &Codec, r: &mut Reader) -> ProtoResult<MatchJoin> {
    let shape = codec.match_shape();
    let match_id = if shape.wide_id { r.read_u16()? } else { u16::from(r.read_u8()?) };
    let password = r.read_string()?;
    Ok(MatchJoin { match_id, password })
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_match_join(codec: &Codec, w: &mut Writer, v: &MatchJoin) -> Result<()> {
    let shape = codec.match_shape();
    if shape.wide_id {
        w.write_u16(v.match_id);
    } else {
        w.write_u8(v.match_id as u8);
    }
    w.write_string(&v.password);
    Ok(())
}
