//! Overall score aggregation.

use crate::model::WiscarScores;

pub const PSYCHOMETRIC_WEIGHT: f64 = 0.3;
pub const TECHNICAL_WEIGHT: f64 = 0.3;
pub const WISCAR_WEIGHT: f64 = 0.4;

/// Unweighted mean of the six (already rounded) dimension scores, rounded.
pub fn wiscar_average(scores: &WiscarScores) -> u32 {
    let sum: u32 = scores.iter().map(|(_, score)| score).sum();
    (sum as f64 / 6.0).round() as u32
}

/// `round(p * 0.3 + t * 0.3 + w * 0.4)`.
///
/// Terms are summed left to right; reordering can move a .5 tie.
pub fn overall_score(psychometric: u32, technical: u32, wiscar_average: u32) -> u32 {
    let overall = psychometric as f64 * PSYCHOMETRIC_WEIGHT
        + technical as f64 * TECHNICAL_WEIGHT
        + wiscar_average as f64 * WISCAR_WEIGHT;
    overall.round().clamp(0.0, 100.0) as u32
}
