//! Weighted fusion of the three stage estimates.

use sentio_core::{EmotionalDimensions, FusionWeights};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageEstimates {
    pub lexical: EmotionalDimensions,
    pub pattern: EmotionalDimensions,
    pub contextual: EmotionalDimensions,
}

pub fn fuse(stages: &StageEstimates, weights: &FusionWeights) -> EmotionalDimensions {
    let axis = |pick: fn(&EmotionalDimensions) -> f32| {
        pick(&stages.lexical) * weights.lexical
            + pick(&stages.pattern) * weights.pattern
            + pick(&stages.contextual) * weights.contextual
    };
    // new() re-clamps; a valid weight set never needs it
    EmotionalDimensions::new(
        axis(|d| d.valence),
        axis(|d| d.arousal),
        axis(|d| d.dominance),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let stages = StageEstimates {
            lexical: EmotionalDimensions::new(1.0, 0.0, -1.0),
            pattern: EmotionalDimensions::new(0.0, 1.0, 0.0),
            contextual: EmotionalDimensions::new(0.0, 0.0, 1.0),
        };
        let d = fuse(&stages, &FusionWeights::default());
        assert!((d.valence - 0.5).abs() < 1e-6);
        assert!((d.arousal - 0.3).abs() < 1e-6);
        assert!((d.dominance + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_saturated_inputs_stay_in_range() {
        let max = EmotionalDimensions::new(1.0, 1.0, 1.0);
        let stages = StageEstimates {
            lexical: max,
            pattern: max,
            contextual: max,
        };
        let skewed = FusionWeights {
            lexical: 0.9,
            pattern: 0.9,
            contextual: 0.9,
        };
        assert_eq!(fuse(&stages, &skewed), max);
    }
}
