//! Rule-based partition of the VAD cube into discrete labels.
//!
//! Two ordered decision lists. The primary list carves out regions with
//! ±0.3 / ±0.5 breakpoints; the first rule that matches wins and anything
//! left over is Neutral. The secondary list uses looser thresholds to pick up
//! an undertone, skipping any rule that would repeat the primary label.
//!
//! Rule order is the tie-break between overlapping regions. Do not reorder.

use sentio_core::{Emotion, EmotionalDimensions};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub primary: Emotion,
    pub secondary: Option<Emotion>,
}

type Rule = (fn(f32, f32, f32) -> bool, Emotion);

const HIGH: f32 = 0.5;
const MID: f32 = 0.3;

const PRIMARY_RULES: &[Rule] = &[
    // Positive valence
    (|v, a, d| v >= HIGH && a >= HIGH && d >= HIGH, Emotion::Joy),
    (|v, a, d| v >= HIGH && a >= HIGH && d <= -MID, Emotion::Excitement),
    (|v, a, d| v >= HIGH && a <= -MID && d >= MID, Emotion::Contentment),
    (|v, a, d| v >= HIGH && a <= -MID && d <= -MID, Emotion::Relaxation),
    (|v, a, d| v >= HIGH && a.abs() < MID && d >= HIGH, Emotion::Pride),
    (|v, a, d| v >= HIGH && a.abs() < MID && d <= -MID, Emotion::Gratitude),
    // Negative valence
    (|v, a, d| v <= -HIGH && a >= HIGH && d >= HIGH, Emotion::Anger),
    (|v, a, d| v <= -HIGH && a >= HIGH && d <= -MID, Emotion::Fear),
    (|v, a, d| v <= -HIGH && a <= -MID && d <= -MID, Emotion::Sadness),
    (|v, a, d| v <= -HIGH && a <= -MID && d >= MID, Emotion::Disappointment),
    (|v, a, d| v <= -HIGH && a.abs() < MID && d >= HIGH, Emotion::Contempt),
    (|v, a, d| v <= -HIGH && a.abs() < MID && d <= -MID, Emotion::Shame),
    // Near-neutral valence
    (|v, a, d| v.abs() < MID && a >= HIGH && d >= MID, Emotion::Surprise),
    (|v, a, d| v.abs() < MID && a >= HIGH && d <= -MID, Emotion::Anxiety),
    (|v, a, d| v.abs() < MID && a <= -MID && d >= MID, Emotion::Boredom),
    (|v, a, d| v.abs() < MID && a <= -MID && d <= -MID, Emotion::Fatigue),
];

const SECONDARY_RULES: &[Rule] = &[
    (|v, a, _| v > 0.3 && a > 0.3, Emotion::Joy),
    (|v, a, _| v > 0.3 && a < -0.1, Emotion::Contentment),
    (|v, a, _| v < -0.3 && a < -0.1, Emotion::Sadness),
    (|v, a, d| v < -0.3 && a > 0.3 && d > 0.1, Emotion::Anger),
    (|v, a, d| v < -0.3 && a > 0.3 && d < -0.1, Emotion::Fear),
    (|v, a, _| v.abs() < 0.4 && a > 0.4, Emotion::Surprise),
    (|v, _, d| v > 0.3 && d > 0.4, Emotion::Pride),
    (|v, _, d| v < -0.3 && d < -0.4, Emotion::Shame),
    // Subtler blends
    (|v, a, d| v > 0.1 && a > 0.1 && d > 0.1, Emotion::Interest),
    (|v, a, d| v < -0.1 && a > 0.1 && d < -0.1, Emotion::Confusion),
    (|v, a, _| v > 0.1 && a > 0.1, Emotion::Anticipation),
    (|v, a, _| v < -0.1 && a < -0.1, Emotion::Disappointment),
];

fn first_match(rules: &[Rule], d: &EmotionalDimensions, skip: Option<Emotion>) -> Option<Emotion> {
    rules
        .iter()
        .filter(|(_, label)| Some(*label) != skip)
        .find(|(rule, _)| rule(d.valence, d.arousal, d.dominance))
        .map(|(_, label)| *label)
}

pub fn classify_primary(d: &EmotionalDimensions) -> Emotion {
    first_match(PRIMARY_RULES, d, None).unwrap_or(Emotion::Neutral)
}

pub fn classify_secondary(d: &EmotionalDimensions, primary: Emotion) -> Option<Emotion> {
    first_match(SECONDARY_RULES, d, Some(primary))
}

pub fn classify(d: &EmotionalDimensions) -> Classification {
    let primary = classify_primary(d);
    Classification {
        primary,
        secondary: classify_secondary(d, primary),
    }
}
