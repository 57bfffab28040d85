//! Recognition results, trends and the storage record handed to recorders.

use crate::dimensions::EmotionalDimensions;
use crate::emotion::Emotion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const LOW_CONFIDENCE: f32 = 0.3;
pub const MEDIUM_CONFIDENCE: f32 = 0.6;
pub const HIGH_CONFIDENCE: f32 = 0.85;

/// Output of one analysis call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalRecognitionResult {
    pub dimensions: EmotionalDimensions,
    pub primary_emotion: Emotion,
    pub secondary_emotion: Option<Emotion>,
    /// Confidence in [0, 1]
    pub confidence_score: f32,
    pub timestamp: DateTime<Utc>,
}

impl EmotionalRecognitionResult {
    pub fn new(
        dimensions: EmotionalDimensions,
        primary_emotion: Emotion,
        secondary_emotion: Option<Emotion>,
        confidence_score: f32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let confidence_score = if confidence_score.is_finite() {
            confidence_score.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            dimensions,
            primary_emotion,
            secondary_emotion,
            confidence_score,
            timestamp,
        }
    }

    /// Result for input that carries no signal at all.
    pub fn neutral(timestamp: DateTime<Utc>) -> Self {
        Self::new(
            EmotionalDimensions::neutral(),
            Emotion::Neutral,
            None,
            0.0,
            timestamp,
        )
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn from_score(score: f32) -> Self {
        if score >= HIGH_CONFIDENCE {
            ConfidenceLevel::High
        } else if score >= LOW_CONFIDENCE {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Increasing,
    Stable,
    Decreasing,
}

/// Summary of recent history. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalTrend {
    pub dominant_emotion: Emotion,
    pub valence_direction: TrendDirection,
    pub arousal_direction: TrendDirection,
    pub dominance_direction: TrendDirection,
    pub confidence: f32,
}

impl EmotionalTrend {
    pub fn neutral() -> Self {
        Self {
            dominant_emotion: Emotion::Neutral,
            valence_direction: TrendDirection::Stable,
            arousal_direction: TrendDirection::Stable,
            dominance_direction: TrendDirection::Stable,
            confidence: 0.0,
        }
    }
}

impl Default for EmotionalTrend {
    fn default() -> Self {
        Self::neutral()
    }
}

pub const RECORD_CATEGORY: &str = "EMOTIONAL_STATE";

/// What a storage collaborator receives after each `recognize` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionRecord {
    pub content: String,
    pub category: String,
    pub text: String,
    pub primary_emotion: String,
    pub secondary_emotion: String,
    pub valence: f32,
    pub arousal: f32,
    pub dominance: f32,
    pub confidence: f32,
    pub timestamp: DateTime<Utc>,
}

impl EmotionRecord {
    pub fn from_result(result: &EmotionalRecognitionResult, text: &str) -> Self {
        Self {
            content: format!("Emotional state: {}", result.primary_emotion.display_name()),
            category: RECORD_CATEGORY.to_string(),
            text: text.to_string(),
            primary_emotion: result.primary_emotion.key(),
            secondary_emotion: result
                .secondary_emotion
                .map(|e| e.key())
                .unwrap_or_else(|| "NONE".to_string()),
            valence: result.dimensions.valence,
            arousal: result.dimensions.arousal,
            dominance: result.dimensions.dominance,
            confidence: result.confidence_score,
            timestamp: result.timestamp,
        }
    }
}
