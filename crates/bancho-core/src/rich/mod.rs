//! Per-version codecs for the "rich" packet kinds: the ones with a
//! dedicated domain record rather than a generic shape (`spec.md` §3,
//! §4.5). Each submodule holds every wire-shape variant that kind has
//! taken across the build history; `crate::versions` wires the right
//! function into each build's [`crate::op_table::OpTable`].

pub mod beatmap;
pub mod channel;
pub mod chat;
pub mod misc;
pub mod multiplayer;
pub mod quit;
pub mod stats_presence;
pub mod status;
pub mod replay;
