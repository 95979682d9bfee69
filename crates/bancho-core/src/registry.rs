//! Build number → codec lookup (`spec.md` §4.4).
//!
//! Four rules, tried in order: an exact match wins outright; a build older
//! than every registered codec clamps to the oldest; a build newer than
//! every registered codec clamps to the newest; otherwise the registry
//! rounds *up* to the first registered build strictly greater than the
//! query (`original_source/chio/clients/__init__.py`'s `select_client` —
//! an unrecognized build speaks whatever the nearest *newer* registered
//! client speaks, not the nearest older one, since a real deployment
//! registers every build a client actually shipped and an in-between
//! query only arises from a client the registry doesn't know by exact
//! number).

use tracing::debug;

use crate::codec::Codec;
use crate::versions;

/// An immutable set of per-build [`Codec`]s, queried by build number.
#[derive(Debug)]
pub struct VersionRegistry {
    /// Sorted ascending by [`Codec::build`]; never empty.
    codecs: Vec<Codec>,
}

impl VersionRegistry {
    /// Builds the registry from an explicit list of codecs, sorting by
    /// build number. Panics if `codecs` is empty — a registry with no
    /// codecs at all can't satisfy its own clamping rules.
    #[must_use]
    pub fn new(mut codecs: Vec<Codec>) -> Self {
        assert!(!codecs.is_empty(), "a version registry needs at least one codec");
        codecs.sort_by_key(Codec::build);
        Self { codecs }
    }

    /// The full set of builds this crate implements, in the derivation
    /// order laid out in `spec.md` §4.5.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(versions::all())
    }

    /// Looks up the codec for `build` per the four rules above.
    #[must_use]
    pub fn select(&self, build: u32) -> &Codec {
        if let Ok(idx) = self.codecs.binary_search_by_key(&build, Codec::build) {
            debug!(build, "version registry: exact match");
            return &self.codecs[idx];
        }
        let oldest = &self.codecs[0];
        if build < oldest.build() {
            debug!(build, clamped_to = oldest.build(), "version registry: below oldest, clamping");
            return oldest;
        }
        let newest = &self.codecs[self.codecs.len() - 1];
        if build > newest.build() {
            debug!(build, clamped_to = newest.build(), "version registry: above newest, clamping");
            return newest;
        }
        let idx = self.codecs.partition_point(|c| c.build() <= build);
        let chosen = &self.codecs[idx];
        debug!(build, chosen = chosen.build(), "version registry: rounding up to next registered build");
        chosen
    }

    /// Sets the negotiated protocol version on the codec selected for
    /// `build`. Idempotent: calling it twice with the same arguments
    /// leaves the codec in the same state (Testable Property 13).
    pub fn set_protocol_version(&self, build: u32, version: u8) {
        self.select(build).set_protocol_version(version);
    }

    /// Every registered build number, ascending.
    #[must_use]
    pub fn builds(&self) -> Vec<u32> {
        self.codecs.iter().map(Codec::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let reg = VersionRegistry::standard();
        assert_eq!(reg.select(282).build(), 282);
        assert_eq!(reg.select(20_140_528).build(), 20_140_528);
    }

    #[test]
    fn below_oldest_clamps_to_oldest() {
        let reg = VersionRegistry::standard();
        assert_eq!(reg.select(1).build(), 282);
    }

    #[test]
    fn above_newest_clamps_to_newest() {
        let reg = VersionRegistry::standard();
        assert_eq!(reg.select(99_999_999).build(), 20_140_528);
    }

    #[test]
    fn in_between_rounds_up() {
        let reg = VersionRegistry::standard();
        // 283 lies strictly between the registered 282 and 291: rounds up.
        assert_eq!(reg.select(283).build(), 291);
    }

    #[test]
    fn select_is_monotonic_in_build_number() {
        let reg = VersionRegistry::standard();
        let mut last = 0;
        for build in (282..=20_140_528).step_by(9973) {
            let chosen = reg.select(build).build();
            assert!(chosen >= last, "selection regressed: {chosen} < {last} at query {build}");
            last = chosen;
        }
    }

    #[test]
    fn set_protocol_version_is_idempotent() {
        let reg = VersionRegistry::standard();
        reg.set_protocol_version(20_140_528, 19);
        let first = reg.select(20_140_528).protocol_version();
        reg.set_protocol_version(20_140_528, 19);
        let second = reg.select(20_140_528).protocol_version();
        assert_eq!(first, second);
        assert_eq!(first, 19);
    }
}
