//! Consonance scoring
//!
//! Fitness is closeness to the target chord: the negated Euclidean distance
//! between a candidate's sorted pitches and the sorted target. Higher is
//! better; 0.0 is an exact pitch match. Colours never enter the score.

/// Euclidean distance between a candidate's pitch set and the sorted target
///
/// Both pitch sets are compared in sorted order, so voicing order does not
/// affect the distance. `target_sorted` must already be sorted.
pub fn distance_to_target(pitches: &[u8], target_sorted: &[u8]) -> f64 {
    debug_assert_eq!(pitches.len(), target_sorted.len());
    let mut sorted = pitches.to_vec();
    sorted.sort_unstable();

    let sum: f64 = sorted
        .iter()
        .zip(target_sorted)
        .map(|(&p, &t)| {
            let d = f64::from(p) - f64::from(t);
            d * d
        })
        .sum();
    sum.sqrt()
}

/// Fitness score of a pitch set against the sorted target (higher is better)
pub fn consonance_score(pitches: &[u8], target_sorted: &[u8]) -> f64 {
    -distance_to_target(pitches, target_sorted)
}
