//! `UserStats`/`UserPresence` codecs.
//!
//! Four distinct shapes span the whole history (`spec.md` §4.5 b282,
//! b323, b452, b1788, b20130815): a single combined record, a two-packet
//! "presence optional / status always" pair, a single record with a
//! trailing permission byte, and (from b1788) two genuinely separate
//! packets. Every shape demotes to a bare `IrcJoin{name}` when the user
//! is IRC-bridged and the build predates negative-id IRC encoding
//! (`spec.md` §3 Invariants).

use bancho_proto::error::Result;
use bancho_proto::io::Writer;
use bancho_proto::model::misc::{Completeness, Permissions};
use bancho_proto::model::presence::UserPresence;
use bancho_proto::model::stats::UserStats;
use bancho_proto::model::status::UserStatus;
use bancho_proto::model::user::UserInfo;
use bancho_proto::packet::PacketKind;
use bancho_proto::{Reader, Result as ProtoResult};

use crate::codec::Codec;
use crate::rich::status;

fn stats_or_default(info: &UserInfo) -> UserStats {
    info.stats.clone().unwrap_or(UserStats { rank: 0, rscore: 0, tscore: 0, accuracy: 0.0, playcount: 0, pp: None })
}

fn presence_or_default(info: &UserInfo) -> UserPresence {
    info.presence.clone().unwrap_or(UserPresence {
        is_irc: false,
        timezone: 0,
        country_index: 0,
        permissions: Permissions::NONE,
        longitude: 0.0,
        latitude: 0.0,
        city: String::new(),
    })
}

fn status_or_default(info: &UserInfo) -> UserStatus {
    info.status.clone().unwrap_or(UserStatus {
        action: bancho_proto::model::status::Status::Idle,
        text: String::new(),
        beatmap_checksum: String::new(),
        mods: bancho_proto::model::mods::Mods::empty(),
        mode: bancho_proto::model::status::Mode::Osu,
        beatmap_id: 0,
        update_stats: false,
    })
}

fn is_irc(info: &UserInfo) -> bool {
    info.presence.as_ref().is_some_and(|p| p.is_irc)
}

#[allow(clippy::cast_sign_loss)]
fn irc_demotion(info: &UserInfo) -> Vec<(PacketKind, Vec<u8>)> {
    let mut w = Writer::new();
    w.write_string(&info.name);
    vec![(PacketKind::IrcJoin, w.into_bytes())]
}

// ---- b282: single combined record ------------------------------------

#[allow(clippy::cast_sign_loss)]
pub fn write_v282(codec: &Codec, info: &UserInfo) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    if is_irc(info) {
        return Ok(irc_demotion(info));
    }
    let stats = stats_or_default(info);
    let presence = presence_or_default(info);
    let status = status_or_default(info);
    let mut w = Writer::new();
    w.write_u32(info.id as u32);
    w.write_string(&info.name);
    w.write_u64(stats.rscore);
    w.write_f64(stats.accuracy);
    w.write_u32(stats.playcount);
    w.write_u64(stats.tscore);
    w.write_u32(stats.rank);
    w.write_string(&info.avatar_filename());
    status::write_v282(codec, &mut w, &status)?;
    w.write_u8(timezone_byte(presence.timezone));
    w.write_string(&presence.city);
    Ok(vec![(PacketKind::BanchoUserStats, w.into_bytes())])
}

#[allow(clippy::cast_possible_wrap)]
pub fn read_v282(codec: &Codec, r: &mut Reader) -> ProtoResult<UserInfo> {
    let id = r.read_u32()? as i32;
    let name = r.read_string()?;
    let rscore = r.read_u64()?;
    let accuracy = r.read_f64()?;
    let playcount = r.read_u32()?;
    let tscore = r.read_u64()?;
    let rank = r.read_u32()?;
    let _avatar = r.read_string()?;
    let status = status::read_v282(codec, r)?;
    let timezone = from_timezone_byte(r.read_u8()?);
    let city = r.read_string()?;
    Ok(UserInfo {
        id,
        name,
        presence: Some(UserPresence {
            is_irc: false,
            timezone,
            country_index: 0,
            permissions: Permissions::NONE,
            longitude: 0.0,
            latitude: 0.0,
            city,
        }),
        status: Some(status),
        stats: Some(UserStats { rank, rscore, tscore, accuracy, playcount, pp: None }),
    })
}

// ---- b323: presence-optional / status-always two-packet shape --------

#[allow(clippy::cast_sign_loss)]
pub fn write_v323(codec: &Codec, info: &UserInfo) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    if is_irc(info) {
        return Ok(irc_demotion(info));
    }
    let with_stats = encode_v323(codec, info, true)?;
    let without_stats = encode_v323(codec, info, false)?;
    Ok(vec![(PacketKind::BanchoUserStats, with_stats), (PacketKind::BanchoUserStats, without_stats)])
}

#[allow(clippy::cast_sign_loss)]
fn encode_v323(codec: &Codec, info: &UserInfo, newstats: bool) -> Result<Vec<u8>> {
    let mut w = Writer::new();
    w.write_u32(info.id as u32);
    w.write_bool(newstats);
    if newstats {
        let stats = stats_or_default(info);
        let presence = presence_or_default(info);
        w.write_string(&info.name);
        w.write_u64(stats.rscore);
        w.write_f64(stats.accuracy);
        w.write_u32(stats.playcount);
        w.write_u64(stats.tscore);
        w.write_u32(stats.rank);
        w.write_string(&info.avatar_filename());
        w.write_u8(timezone_byte(presence.timezone));
        w.write_string(&presence.city);
    }
    status::write_v282(codec, &mut w, &status_or_default(info))?;
    Ok(w.into_bytes())
}

#[allow(clippy::cast_possible_wrap)]
pub fn read_v323(codec: &Codec, r: &mut Reader) -> ProtoResult<UserInfo> {
    let id = r.read_u32()? as i32;
    let newstats = r.read_bool()?;
    let (name, stats, presence) = if newstats {
        let name = r.read_string()?;
        let rscore = r.read_u64()?;
        let accuracy = r.read_f64()?;
        let playcount = r.read_u32()?;
        let tscore = r.read_u64()?;
        let rank = r.read_u32()?;
        let _avatar = r.read_string()?;
        let timezone = from_timezone_byte(r.read_u8()?);
        let city = r.read_string()?;
        (
            name,
            Some(UserStats { rank, rscore, tscore, accuracy, playcount, pp: None }),
            Some(UserPresence {
                is_irc: false,
                timezone,
                country_index: 0,
                permissions: Permissions::NONE,
                longitude: 0.0,
                latitude: 0.0,
                city,
            }),
        )
    } else {
        (String::new(), None, None)
    };
    let status = status::read_v282(codec, r)?;
    Ok(UserInfo { id, name, presence, status: Some(status), stats })
}

// ---- b452: single record, rank/accuracy narrowed, permission byte ----

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn write_v452(codec: &Codec, info: &UserInfo) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    if is_irc(info) {
        return Ok(irc_demotion(info));
    }
    let stats = stats_or_default(info);
    let presence = presence_or_default(info);
    let status = status_or_default(info);
    let mut w = Writer::new();
    w.write_u32(info.id as u32);
    w.write_u8(Completeness::Full as u8);
    status::write_v282(codec, &mut w, &status)?;
    w.write_u64(stats.rscore);
    w.write_f32(stats.accuracy as f32);
    w.write_u32(stats.playcount);
    w.write_u64(stats.tscore);
    w.write_u16(stats.rank.min(u32::from(u16::MAX)) as u16);
    w.write_string(&info.name);
    w.write_string(&info.avatar_filename());
    w.write_u8(timezone_byte(presence.timezone));
    w.write_string(&presence.city);
    w.write_u8(permissions_byte(presence.permissions));
    Ok(vec![(PacketKind::BanchoUserStats, w.into_bytes())])
}

#[allow(clippy::cast_possible_wrap)]
pub fn read_v452(codec: &Codec, r: &mut Reader) -> ProtoResult<UserInfo> {
    let id = r.read_u32()? as i32;
    let _completeness = Completeness::try_from_u8(r.read_u8()?)?;
    let status = status::read_v282(codec, r)?;
    let rscore = r.read_u64()?;
    let accuracy = f64::from(r.read_f32()?);
    let playcount = r.read_u32()?;
    let tscore = r.read_u64()?;
    let rank = u32::from(r.read_u16()?);
    let name = r.read_string()?;
    let _avatar = r.read_string()?;
    let timezone = from_timezone_byte(r.read_u8()?);
    let city = r.read_string()?;
    let permissions = Permissions::from_bits_truncate(u32::from(r.read_u8()?));
    Ok(UserInfo {
        id,
        name,
        presence: Some(UserPresence { is_irc: false, timezone, country_index: 0, permissions, longitude: 0.0, latitude: 0.0, city }),
        status: Some(status),
        stats: Some(UserStats { rank, rscore, tscore, accuracy, playcount, pp: None }),
    })
}

// ---- b1788: stats and presence become separate packets, IRC via sign ----

#[allow(clippy::cast_sign_loss)]
fn wire_id(info: &UserInfo) -> i32 {
    if is_irc(info) { -info.id.abs() } else { info.id }
}

fn irc_from_wire(raw: i32) -> (i32, bool) {
    if raw < 0 { (-raw, true) } else { (raw, false) }
}

pub fn write_user_stats_v1788(codec: &Codec, info: &UserInfo) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    let stats = stats_or_default(info);
    let status = status_or_default(info);
    let mut w = Writer::new();
    w.write_i32(wire_id(info));
    status::write_v1150(codec, &mut w, &status)?;
    w.write_u64(stats.rscore);
    w.write_f32(stats.accuracy as f32);
    w.write_u32(stats.playcount);
    w.write_u64(stats.tscore);
    w.write_u32(stats.rank);
    Ok(vec![(PacketKind::BanchoUserStats, w.into_bytes())])
}

pub fn read_user_stats_v1788(codec: &Codec, r: &mut Reader) -> ProtoResult<UserInfo> {
    let raw_id = r.read_i32()?;
    let (id, is_irc_flag) = irc_from_wire(raw_id);
    let status = status::read_v1150(codec, r)?;
    let rscore = r.read_u64()?;
    let accuracy = f64::from(r.read_f32()?);
    let playcount = r.read_u32()?;
    let tscore = r.read_u64()?;
    let rank = r.read_u32()?;
    Ok(UserInfo {
        id,
        name: String::new(),
        presence: Some(UserPresence {
            is_irc: is_irc_flag,
            timezone: 0,
            country_index: 0,
            permissions: Permissions::NONE,
            longitude: 0.0,
            latitude: 0.0,
            city: String::new(),
        }),
        status: Some(status),
        stats: Some(UserStats { rank, rscore, tscore, accuracy, playcount, pp: None }),
    })
}

#[allow(clippy::cast_possible_truncation)]
pub fn write_user_presence_v1788(_codec: &Codec, info: &UserInfo) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    use bancho_proto::model::misc::AvatarExtension;
    let presence = presence_or_default(info);
    let mut w = Writer::new();
    w.write_i32(wire_id(info));
    w.write_string(&info.name);
    w.write_u8(AvatarExtension::Empty as u8);
    w.write_u8(timezone_byte(presence.timezone));
    w.write_string(&presence.city);
    w.write_u8(permissions_byte(presence.permissions));
    w.write_f32(presence.longitude);
    w.write_f32(presence.latitude);
    Ok(vec![(PacketKind::BanchoUserPresence, w.into_bytes())])
}

pub fn read_user_presence_v1788(_codec: &Codec, r: &mut Reader) -> ProtoResult<UserInfo> {
    let raw_id = r.read_i32()?;
    let (id, is_irc_flag) = irc_from_wire(raw_id);
    let name = r.read_string()?;
    let _avatar_ext = r.read_u8()?;
    let timezone = from_timezone_byte(r.read_u8()?);
    let city = r.read_string()?;
    let permissions = Permissions::from_bits_truncate(u32::from(r.read_u8()?));
    let longitude = r.read_f32()?;
    let latitude = r.read_f32()?;
    Ok(UserInfo {
        id,
        name,
        presence: Some(UserPresence { is_irc: is_irc_flag, timezone, country_index: 0, permissions, longitude, latitude, city }),
        status: None,
        stats: None,
    })
}

// ---- b20130815: presence packs `permissions | (mode << 5)` into one byte ----

#[allow(clippy::cast_possible_truncation)]
pub fn write_user_presence_v20130815(_codec: &Codec, info: &UserInfo) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    let presence = presence_or_default(info);
    let mode = info.status.as_ref().map_or(0u8, |s| s.mode as u8);
    let mut w = Writer::new();
    w.write_i32(wire_id(info));
    w.write_string(&info.name);
    let packed = permissions_byte(presence.permissions) | (mode << 5);
    w.write_u8(packed);
    w.write_u8(timezone_byte(presence.timezone));
    w.write_string(&presence.city);
    w.write_f32(presence.longitude);
    w.write_f32(presence.latitude);
    Ok(vec![(PacketKind::BanchoUserPresence, w.into_bytes())])
}

pub fn read_user_presence_v20130815(_codec: &Codec, r: &mut Reader) -> ProtoResult<UserInfo> {
    let raw_id = r.read_i32()?;
    let (id, is_irc_flag) = irc_from_wire(raw_id);
    let name = r.read_string()?;
    let packed = r.read_u8()?;
    let permissions = Permissions::from_bits_truncate(u32::from(packed & 0b0001_1111));
    let mode_byte = packed >> 5;
    let timezone = from_timezone_byte(r.read_u8()?);
    let city = r.read_string()?;
    let longitude = r.read_f32()?;
    let latitude = r.read_f32()?;
    let status = bancho_proto::model::status::Mode::try_from_u8(mode_byte).ok().map(|mode| UserStatus {
        action: bancho_proto::model::status::Status::Idle,
        text: String::new(),
        beatmap_checksum: String::new(),
        mods: bancho_proto::model::mods::Mods::empty(),
        mode,
        beatmap_id: 0,
        update_stats: false,
    });
    Ok(UserInfo {
        id,
        name,
        presence: Some(UserPresence { is_irc: is_irc_flag, timezone, country_index: 0, permissions, longitude, latitude, city }),
        status,
        stats: None,
    })
}

#[allow(clippy::cast_sign_loss)]
fn timezone_byte(timezone: i8) -> u8 {
    (i16::from(timezone) + 24) as u8
}

#[allow(clippy::cast_possible_wrap)]
fn from_timezone_byte(byte: u8) -> i8 {
    (i16::from(byte) - 24) as i8
}

#[allow(clippy::cast_possible_truncation)]
fn permissions_byte(permissions: Permissions) -> u8 {
    permissions.bits() as u8
}
