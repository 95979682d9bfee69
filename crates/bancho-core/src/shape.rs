//! Configuration describing which optional fields a build's `Match` wire
//! layout carries (`spec.md` §4.5 "b334–b340" through "b20140528" deltas).
//!
//! A dedicated read/write function per build would duplicate the same
//! ~20 lines of field-by-field I/O seven times over with only a handful
//! of fields differing. Instead one shared implementation
//! (`crate::rich::multiplayer::read_match`/`write_match`) is parameterized
//! by this struct, and each build's [`crate::op_table::OpTable`] carries
//! its own `MatchShape` value alongside the (shared) function pointers —
//! still composed per build via struct-update syntax, just with data
//! instead of code as the varying part.

/// Width of the match id and mods fields on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchShape {
    /// `true` once match id is `u16` (b1817/b20121224 onward); `u8` before.
    pub wide_id: bool,
    /// `true` once match mods are `u32` (b1817/b20121224 onward); `u16`
    /// before.
    pub wide_mods: bool,
    /// `true` once the per-slot team byte block is written (protocol ≥ 4,
    /// from b558).
    pub has_slot_team: bool,
    /// `true` once `freemod` and its trailing per-slot mods block exist
    /// (from b388).
    pub has_freemod: bool,
    /// `true` once the trailing `u8 mode` exists (from b402/b470).
    pub has_mode: bool,
    /// `true` once trailing `scoring_type`/`team_type` bytes exist
    /// (protocol ≥ 3, from b535/b558).
    pub has_scoring_team_type: bool,
    /// `true` once the trailing `i32 seed` exists (from b20130815).
    pub has_seed: bool,
    /// `true` once slot size is computed per-call from `protocol_version`
    /// rather than fixed at 8 (b20140528: 16 slots at protocol ≥ 19).
    pub dynamic_slot_size: bool,
}

impl MatchShape {
    /// No optional field present: narrow id/mods, no freemod, no mode, no
    /// scoring/team bytes, no seed, fixed slot size. Matches b282 (which
    /// has no `Match` support at all; this value is never actually read
    /// before `write_match`/`read_match` are populated at b334).
    pub const EMPTY: Self = Self {
        wide_id: false,
        wide_mods: false,
        has_slot_team: false,
        has_freemod: false,
        has_mode: false,
        has_scoring_team_type: false,
        has_seed: false,
        dynamic_slot_size: false,
    };
}
