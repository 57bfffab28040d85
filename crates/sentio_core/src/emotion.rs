//! Discrete emotion labels
//!
//! The dimensional model is the ground truth; labels are a coarse partition
//! of the VAD cube used for display, storage and trend summaries. Each label
//! also knows which pole of each axis it leans toward, which drives both the
//! lexical VAD conversion and the confidence consistency check.

use crate::dimensions::EmotionalDimensions;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Emotion {
    // Basic
    Joy,
    Sadness,
    Anger,
    Fear,
    Disgust,
    Surprise,

    // Complex
    Contentment,
    Excitement,
    Relaxation,
    Disappointment,
    Confusion,
    Interest,
    Anticipation,
    Boredom,
    Pride,
    Shame,
    Guilt,
    Envy,
    Gratitude,
    Anxiety,
    Contempt,
    Hope,
    Love,
    Fatigue,
    Frustration,
    Amusement,
    Trust,
    Neutral,
}

/// Which end of an axis a label leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pole {
    Positive,
    Negative,
}

impl Pole {
    pub fn sign(self) -> f32 {
        match self {
            Pole::Positive => 1.0,
            Pole::Negative => -1.0,
        }
    }
}

impl Emotion {
    pub const ALL: [Emotion; 28] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Surprise,
        Emotion::Contentment,
        Emotion::Excitement,
        Emotion::Relaxation,
        Emotion::Disappointment,
        Emotion::Confusion,
        Emotion::Interest,
        Emotion::Anticipation,
        Emotion::Boredom,
        Emotion::Pride,
        Emotion::Shame,
        Emotion::Guilt,
        Emotion::Envy,
        Emotion::Gratitude,
        Emotion::Anxiety,
        Emotion::Contempt,
        Emotion::Hope,
        Emotion::Love,
        Emotion::Fatigue,
        Emotion::Frustration,
        Emotion::Amusement,
        Emotion::Trust,
        Emotion::Neutral,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Emotion::Joy => "Joy",
            Emotion::Sadness => "Sadness",
            Emotion::Anger => "Anger",
            Emotion::Fear => "Fear",
            Emotion::Disgust => "Disgust",
            Emotion::Surprise => "Surprise",
            Emotion::Contentment => "Contentment",
            Emotion::Excitement => "Excitement",
            Emotion::Relaxation => "Relaxation",
            Emotion::Disappointment => "Disappointment",
            Emotion::Confusion => "Confusion",
            Emotion::Interest => "Interest",
            Emotion::Anticipation => "Anticipation",
            Emotion::Boredom => "Boredom",
            Emotion::Pride => "Pride",
            Emotion::Shame => "Shame",
            Emotion::Guilt => "Guilt",
            Emotion::Envy => "Envy",
            Emotion::Gratitude => "Gratitude",
            Emotion::Anxiety => "Anxiety",
            Emotion::Contempt => "Contempt",
            Emotion::Hope => "Hope",
            Emotion::Love => "Love",
            Emotion::Fatigue => "Fatigue",
            Emotion::Frustration => "Frustration",
            Emotion::Amusement => "Amusement",
            Emotion::Trust => "Trust",
            Emotion::Neutral => "Neutral",
        }
    }

    /// Storage key, e.g. `GRATITUDE`.
    pub fn key(&self) -> String {
        self.display_name().to_uppercase()
    }

    pub fn valence_pole(&self) -> Option<Pole> {
        use Emotion::*;
        match self {
            Joy | Contentment | Excitement | Relaxation | Pride | Gratitude | Interest
            | Anticipation | Hope | Love | Amusement | Trust => Some(Pole::Positive),
            Sadness | Anger | Fear | Disgust | Disappointment | Shame | Guilt | Envy | Anxiety
            | Contempt | Frustration => Some(Pole::Negative),
            _ => None,
        }
    }

    pub fn arousal_pole(&self) -> Option<Pole> {
        use Emotion::*;
        match self {
            Excitement | Anger | Fear | Surprise | Anxiety | Frustration | Joy | Amusement => {
                Some(Pole::Positive)
            }
            Contentment | Relaxation | Sadness | Boredom | Fatigue => Some(Pole::Negative),
            _ => None,
        }
    }

    pub fn dominance_pole(&self) -> Option<Pole> {
        use Emotion::*;
        match self {
            Pride | Anger | Contempt | Trust | Joy => Some(Pole::Positive),
            Fear | Shame | Guilt | Anxiety | Excitement | Sadness => Some(Pole::Negative),
            _ => None,
        }
    }

    /// Whether the label agrees with the sign of the fused dimensions.
    ///
    /// Groups are checked in order: valence first, then low arousal. Neutral,
    /// Confusion and Surprise are compatible with any point.
    pub fn is_consistent_with(&self, dimensions: &EmotionalDimensions) -> bool {
        use Emotion::*;
        match self {
            Neutral | Confusion | Surprise => true,
            _ => {
                if let Some(pole) = self.valence_pole() {
                    return pole.sign() * dimensions.valence > 0.0;
                }
                match self {
                    Boredom | Fatigue => dimensions.arousal < 0.0,
                    _ => true,
                }
            }
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
