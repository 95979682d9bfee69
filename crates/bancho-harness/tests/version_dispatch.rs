//! Testable Property 3 (version dispatch monotonicity): for every
//! registered build `b` and any `v` in `[b, next(b)-1]`, `select(v)`
//! returns the codec registered at `b`; queries below the minimum or
//! above the maximum clamp to the endpoints.

use bancho_core::VersionRegistry;

#[test]
fn every_registered_build_selects_itself() {
    let registry = VersionRegistry::standard();
    for build in registry.builds() {
        assert_eq!(registry.select(build).build(), build);
    }
}

#[test]
fn every_build_in_a_registered_interval_selects_its_lower_bound() {
    let registry = VersionRegistry::standard();
    let builds = registry.builds();
    for window in builds.windows(2) {
        let (lower, upper) = (window[0], window[1]);
        for probe in [lower, lower + 1, upper - 1] {
            assert_eq!(
                registry.select(probe).build(),
                lower,
                "build {probe} should select codec {lower} (interval [{lower}, {upper}))"
            );
        }
    }
}

#[test]
fn below_minimum_clamps_to_minimum() {
    let registry = VersionRegistry::standard();
    let min = *registry.builds().first().expect("registry is non-empty");
    assert_eq!(registry.select(0).build(), min);
    assert_eq!(registry.select(min - 1).build(), min);
}

#[test]
fn above_maximum_clamps_to_maximum() {
    let registry = VersionRegistry::standard();
    let max = *registry.builds().last().expect("registry is non-empty");
    assert_eq!(registry.select(max + 1).build(), max);
    assert_eq!(registry.select(u32::MAX).build(), max);
}
