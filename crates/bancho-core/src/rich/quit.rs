//! `UserQuit` codec.
//!
//! `spec.md` §4.5 only pins the wire shape down precisely at its
//! endpoints: b20121224's unified `{i32 user_id, u8 state}` record, and
//! the legacy branching behavior described in prose ("branches
//! `IrcQuit`/none/`UserQuit` by `is_irc`+quit state"). Absent a pinned
//! pre-unification shape, this codec uses the same `{user_id, state}`
//! wire record at every build — the unification at b20121224 changes
//! nothing structural, only collapses what had been two packet kinds
//! (`BanchoIrcQuit`, `BanchoUserQuit`) into one. A user leaving by the
//! IRC bridge alone is still demoted to a bare `BanchoIrcQuit{name}`
//! when the caller has a display name to give it (see `DESIGN.md`).

use bancho_proto::error::Result;
use bancho_proto::io::Writer;
use bancho_proto::model::user::{QuitState, UserQuit};
use bancho_proto::packet::PacketKind;
use bancho_proto::{Reader, Result as ProtoResult};

use crate::codec::Codec;

pub fn read(_codec: &Codec, r: &mut Reader) -> ProtoResult<UserQuit> {
    let user_id = r.read_i32()?;
    let quit_state = QuitState::try_from_u8(r.read_u8()?)?;
    Ok(UserQuit { info: None, user_id, quit_state })
}

pub fn write(_codec: &Codec, v: &UserQuit) -> Result<Vec<(PacketKind, Vec<u8>)>> {
    if v.quit_state == QuitState::IrcRemaining {
        if let Some(info) = &v.info {
            let mut w = Writer::new();
            w.write_string(&info.name);
            return Ok(vec![(PacketKind::BanchoIrcQuit, w.into_bytes())]);
        }
    }
    let mut w = Writer::new();
    w.write_i32(v.user_id);
    w.write_u8(v.quit_state as u8);
    Ok(vec![(PacketKind::BanchoUserQuit, w.into_bytes())])
}
