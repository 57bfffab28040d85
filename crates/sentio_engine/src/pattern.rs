//! Pattern stage: surface markers in the raw text.
//!
//! Shouting, punctuation runs, trailing ellipses and emoji carry affect even
//! when no lexicon word matches. Works on the untokenized input so casing and
//! punctuation runs survive.

use sentio_core::EmotionalDimensions;

const POSITIVE_EMOJI: &[&str] = &[
    "😊", "😁", "😄", "🙂", "😃", "😍", "❤️", "💕", "👍", "🎉",
];

const NEGATIVE_EMOJI: &[&str] = &[
    "😢", "😭", "😞", "😔", "😠", "😡", "💔", "👎", "😒", "😩",
];

/// Substring-matched, so "so" also fires inside longer words.
const SURFACE_INTENSIFIERS: &[&str] = &[
    "very", "extremely", "really", "so", "totally", "absolutely", "completely",
];

const SHOUTING_RATIO: f32 = 0.5;
const MAX_COUNTED_MARKS: usize = 5;

pub fn analyze_patterns(text: &str) -> EmotionalDimensions {
    let mut valence = 0.0f32;
    let mut arousal = 0.0f32;
    let mut dominance = 0.0f32;

    // SHOUTING
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    if letters > 0 && upper as f32 / letters as f32 > SHOUTING_RATIO {
        arousal += 0.3;
        dominance += 0.2;
    }

    let exclamations = text.matches('!').count();
    arousal += 0.1 * exclamations.min(MAX_COUNTED_MARKS) as f32;
    if text.contains("!!!") {
        arousal += 0.3;
    }

    let questions = text.matches('?').count();
    if questions > 2 {
        dominance -= 0.1 * questions.min(MAX_COUNTED_MARKS) as f32;
    }

    if text.contains("...") || text.contains('…') {
        arousal -= 0.2;
        dominance -= 0.1;
    }

    for emoji in POSITIVE_EMOJI {
        if text.contains(emoji) {
            valence += 0.2;
        }
    }
    for emoji in NEGATIVE_EMOJI {
        if text.contains(emoji) {
            valence -= 0.2;
        }
    }

    let lower = text.to_lowercase();
    for word in SURFACE_INTENSIFIERS {
        if lower.contains(word) {
            arousal += 0.1;
        }
    }

    EmotionalDimensions::new(valence, arousal, dominance)
}
