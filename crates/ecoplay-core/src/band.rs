//! Score banding.
//!
//! Every game ends by mapping its final score onto a tier through a fixed
//! list of thresholds. The mapping is total: any `i32` lands in exactly one
//! tier.

/// Returns the tier of the first threshold `score` reaches, or `floor`.
///
/// `bands` must be ordered by descending threshold.
#[must_use]
pub fn classify<T: Copy>(score: i32, bands: &[(i32, T)], floor: T) -> T {
    debug_assert!(
        bands.windows(2).all(|w| w[0].0 > w[1].0),
        "bands must be strictly descending"
    );
    bands
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or(floor, |(_, tier)| *tier)
}
