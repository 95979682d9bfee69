//! The `Mods` bitfield, stable across every build this crate supports.

use bitflags::bitflags;

bitflags! {
    /// Gameplay mod selection. A 32-bit bitfield on every build; early
    /// builds that only carry 16 bits on the wire sign-extend into this
    /// type and simply never set the high bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Mods: u32 {
        /// No mods selected.
        const NO_MOD       = 0;
        const NO_FAIL      = 1 << 0;
        const EASY         = 1 << 1;
        const NO_VIDEO     = 1 << 2;
        const HIDDEN       = 1 << 3;
        const HARD_ROCK    = 1 << 4;
        const SUDDEN_DEATH = 1 << 5;
        const DOUBLE_TIME  = 1 << 6;
        const RELAX        = 1 << 7;
        const HALF_TIME    = 1 << 8;
        const NIGHTCORE    = 1 << 9;
        const FLASHLIGHT   = 1 << 10;
        const AUTOPLAY     = 1 << 11;
        const SPUN_OUT     = 1 << 12;
        const AUTOPILOT    = 1 << 13;
        const PERFECT      = 1 << 14;
        const KEY4         = 1 << 15;
        const KEY5         = 1 << 16;
        const KEY6         = 1 << 17;
        const KEY7         = 1 << 18;
        const KEY8         = 1 << 19;
        const FADE_IN      = 1 << 20;
        const RANDOM       = 1 << 21;
        const CINEMA       = 1 << 22;
        const TARGET       = 1 << 23;
        const KEY9         = 1 << 24;
        const KEY_COOP     = 1 << 25;
        const KEY1         = 1 << 26;
        const KEY3         = 1 << 27;
        const KEY2         = 1 << 28;
        const SCORE_V2     = 1 << 29;
        const MIRROR       = 1 << 30;
    }
}

#[cfg(test)]
mod tests {
    use super::Mods;

    #[test]
    fn unknown_bits_round_trip_through_truncation() {
        let mods = Mods::from_bits_truncate(0xFFFF_FFFF);
        assert!(mods.contains(Mods::HIDDEN | Mods::HARD_ROCK));
    }

    #[test]
    fn bit_assignments_match_known_values() {
        assert_eq!(Mods::NO_FAIL.bits(), 1);
        assert_eq!(Mods::DOUBLE_TIME.bits(), 64);
        assert_eq!(Mods::MIRROR.bits(), 1 << 30);
    }
}
