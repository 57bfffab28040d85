//! Confidence estimate for a classified point.

use sentio_core::{Emotion, EmotionalDimensions};

const STRENGTH_WEIGHT: f32 = 0.4;
const DISTANCE_WEIGHT: f32 = 0.4;
const CONSISTENCY_BONUS: f32 = 0.2;

/// `0.4 * mean |axis| + 0.4 * normalized distance + 0.2 if the label agrees
/// with the point`, clamped to [0, 1].
pub fn score_confidence(dimensions: &EmotionalDimensions, primary: Emotion) -> f32 {
    let bonus = if primary.is_consistent_with(dimensions) {
        CONSISTENCY_BONUS
    } else {
        0.0
    };
    let raw = STRENGTH_WEIGHT * dimensions.signal_strength()
        + DISTANCE_WEIGHT * dimensions.distance_from_neutral()
        + bonus;
    raw.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_origin_gets_only_the_bonus() {
        let c = score_confidence(&EmotionalDimensions::neutral(), Emotion::Neutral);
        assert!((c - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_inconsistent_label_loses_bonus() {
        let d = EmotionalDimensions::new(-0.6, 0.0, 0.0);
        let consistent = score_confidence(&d, Emotion::Sadness);
        let inconsistent = score_confidence(&d, Emotion::Joy);
        assert!((consistent - inconsistent - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_saturated_point_clamps_to_one() {
        let d = EmotionalDimensions::new(1.0, 1.0, 1.0);
        assert_eq!(score_confidence(&d, Emotion::Joy), 1.0);
    }

    #[test]
    fn test_formula() {
        let d = EmotionalDimensions::new(0.5, -0.5, 0.5);
        let expected = 0.4 * 0.5 + 0.4 * (0.75f32.sqrt() / 3f32.sqrt()) + 0.2;
        assert!((score_confidence(&d, Emotion::Pride) - expected).abs() < 1e-5);
    }
}
