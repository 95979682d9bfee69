//! Fuzz target for `VersionRegistry::select`'s build-number lookup.
//!
//! Exercises the exact-match/clamp/round-up rules directly against
//! arbitrary `u32` queries and checks the ordering invariant the unit
//! tests only sample: selection is monotonic non-decreasing in the
//! query build number.

#![no_main]

use bancho_core::VersionRegistry;
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

static REGISTRY: OnceLock<VersionRegistry> = OnceLock::new();

fuzz_target!(|builds: (u32, u32)| {
    let registry = REGISTRY.get_or_init(VersionRegistry::standard);
    let (a, b) = builds;
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let chosen_lo = registry.select(lo).build();
    let chosen_hi = registry.select(hi).build();
    assert!(chosen_lo <= chosen_hi, "select regressed: select({lo})={chosen_lo} > select({hi})={chosen_hi}");
});
