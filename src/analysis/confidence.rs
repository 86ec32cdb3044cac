//! Probability -> confidence band classification

use crate::types::ConfidenceLevel;

/// Lower bounds, highest band first. Each bound is inclusive.
const BANDS: [(f64, ConfidenceLevel); 3] = [
    (0.80, ConfidenceLevel::VeryHigh),
    (0.70, ConfidenceLevel::High),
    (0.60, ConfidenceLevel::Medium),
];

/// Classify a probability estimate into a confidence band.
///
/// The probability is compared as given, without rounding. Anything below
/// the Medium bound (including NaN) is `Low`.
pub fn classify_confidence(probability: f64) -> ConfidenceLevel {
    BANDS
        .iter()
        .find(|(lower, _)| probability >= *lower)
        .map(|(_, level)| *level)
        .unwrap_or(ConfidenceLevel::Low)
}
