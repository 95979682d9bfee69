//! Aggregate play statistics for a user.

/// Ranking and score statistics, as shown on a user's profile card.
///
/// Field widths vary across builds on the wire (`rank` narrows to `u16` on
/// some mid-range builds, `accuracy` widens from `f32` to `f64` on the very
/// oldest, `pp` only exists from the newest builds onward); this type
/// carries the widest representation and per-version codecs narrow or
/// default on encode/decode.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Global rank, or 0 if unranked.
    pub rank: u32,
    /// Ranked score total.
    pub rscore: u64,
    /// Total score across all plays.
    pub tscore: u64,
    /// Accuracy percentage (0.0-100.0).
    pub accuracy: f64,
    /// Total play count.
    pub playcount: u32,
    /// Performance points. `None` on builds that predate pp.
    pub pp: Option<i16>,
}
