//! Lexical stage: lexicon matching over the token stream.

use crate::lexicon::{Lexicon, Modifier, MAX_PHRASE_TOKENS};
use crate::tokenizer::tokenize;
use sentio_core::{EmotionalDimensions, Emotion};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One lexicon hit, after modifiers were applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalMatch {
    /// Matched text, space-joined for phrases.
    pub text: String,
    /// Index of the first matched token.
    pub position: usize,
    pub token_count: usize,
    pub modifier: Option<Modifier>,
    pub emotions: Vec<(Emotion, f32)>,
}

impl LexicalMatch {
    pub fn is_negated(&self) -> bool {
        self.modifier == Some(Modifier::Negation)
    }
}

/// Per-text breakdown; serializes for debugging output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexicalAnalysis {
    /// Accumulated intensity per label across the whole text.
    pub scores: BTreeMap<Emotion, f32>,
    pub matches: Vec<LexicalMatch>,
    pub dimensions: EmotionalDimensions,
}

pub struct LexicalAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl LexicalAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn analyze(&self, text: &str) -> LexicalAnalysis {
        let tokens = tokenize(text);
        self.analyze_tokens(&tokens)
    }

    pub fn analyze_tokens(&self, tokens: &[String]) -> LexicalAnalysis {
        let mut analysis = LexicalAnalysis::default();
        let mut i = 0;

        while i < tokens.len() {
            let Some((len, emotions)) = self.longest_match(tokens, i) else {
                i += 1;
                continue;
            };

            let modifier = self.lexicon.modifier_before(tokens, i);
            let factor = modifier.map_or(1.0, Modifier::factor);

            let emotions: Vec<(Emotion, f32)> =
                emotions.iter().map(|(e, s)| (*e, s * factor)).collect();
            for (emotion, score) in &emotions {
                *analysis.scores.entry(*emotion).or_insert(0.0) += score;
            }

            let m = LexicalMatch {
                text: tokens[i..i + len].join(" "),
                position: i,
                token_count: len,
                modifier,
                emotions,
            };
            tracing::trace!(text = %m.text, modifier = ?m.modifier, "Lexicon match");
            analysis.matches.push(m);
            i += len;
        }

        analysis.dimensions = scores_to_dimensions(&analysis.scores);
        analysis
    }

    /// Longest phrase (3, then 2 tokens) or single emotional word starting at `start`.
    fn longest_match<'a>(
        &'a self,
        tokens: &[String],
        start: usize,
    ) -> Option<(usize, &'a [(Emotion, f32)])> {
        for len in (2..=MAX_PHRASE_TOKENS).rev() {
            if start + len > tokens.len() {
                continue;
            }
            if let Some(entry) = self.lexicon.phrase(&tokens[start..start + len]) {
                if entry.is_emotional() {
                    return Some((len, entry.emotions.as_slice()));
                }
            }
        }
        self.lexicon
            .word(&tokens[start])
            .filter(|e| e.is_emotional())
            .map(|e| (1, e.emotions.as_slice()))
    }
}

/// Fold per-label scores into a VAD point.
///
/// Each label adds its (signed) score to every axis it leans on, positive or
/// negative according to the label's pole. Labels without a pole on an axis
/// leave that axis alone.
pub fn scores_to_dimensions(scores: &BTreeMap<Emotion, f32>) -> EmotionalDimensions {
    let (mut v, mut a, mut d) = (0.0f32, 0.0f32, 0.0f32);
    for (emotion, score) in scores {
        if let Some(pole) = emotion.valence_pole() {
            v += pole.sign() * score;
        }
        if let Some(pole) = emotion.arousal_pole() {
            a += pole.sign() * score;
        }
        if let Some(pole) = emotion.dominance_pole() {
            d += pole.sign() * score;
        }
    }
    EmotionalDimensions::new(v, a, d)
}
