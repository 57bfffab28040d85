//! The recognition engine
//!
//! `EmotionEngine` owns the pipeline and the only mutable state in the
//! system, the history buffer. Construct it once and share it by `Arc`:
//! - Runs lexical, pattern and contextual analysis on each input
//! - Fuses, classifies and scores the result
//! - Appends to history and hands a record to the recorder

use crate::classifier::classify;
use crate::confidence::score_confidence;
use crate::contextual::analyze_context;
use crate::fusion::{fuse, StageEstimates};
use crate::history::HistoryTracker;
use crate::lexical::LexicalAnalyzer;
use crate::lexicon::Lexicon;
use crate::pattern::analyze_patterns;
use crate::recorder::{EmotionRecorder, NoopRecorder};
use chrono::Utc;
use sentio_core::{
    ContextHints, EmotionRecord, EmotionalRecognitionResult, EmotionalTrend, EngineConfig,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub struct EmotionEngine {
    config: EngineConfig,
    lexical: LexicalAnalyzer,
    history: HistoryTracker,
    recorder: Arc<dyn EmotionRecorder>,
}

impl EmotionEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let history = HistoryTracker::with_config(&config.history);
        Self {
            config,
            lexical: LexicalAnalyzer::new(Lexicon::shared()),
            history,
            recorder: Arc::new(NoopRecorder),
        }
    }

    /// Swap in a different word table.
    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexical = LexicalAnalyzer::new(lexicon);
        self
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn EmotionRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the pipeline without touching history or the recorder.
    pub fn analyze(&self, text: &str, hints: &ContextHints) -> EmotionalRecognitionResult {
        let now = Utc::now();
        if text.trim().is_empty() {
            return EmotionalRecognitionResult::neutral(now);
        }

        let lexical = self.lexical.analyze(text);
        tracing::debug!(
            "Lexical: {:?} from {} matches",
            lexical.dimensions,
            lexical.matches.len()
        );

        let pattern = analyze_patterns(text);
        tracing::debug!("Pattern: {:?}", pattern);

        let recent = self.history.recent(self.config.history.context_window);
        let contextual = analyze_context(&recent, hints);
        tracing::debug!("Contextual: {:?} ({} recent states)", contextual, recent.len());

        let stages = StageEstimates {
            lexical: lexical.dimensions,
            pattern,
            contextual,
        };
        let dimensions = fuse(&stages, &self.config.fusion);
        let classification = classify(&dimensions);
        let confidence = score_confidence(&dimensions, classification.primary);

        tracing::debug!(
            "Fused {:?} -> {} / {:?} (confidence {:.2})",
            dimensions,
            classification.primary,
            classification.secondary,
            confidence
        );

        EmotionalRecognitionResult::new(
            dimensions,
            classification.primary,
            classification.secondary,
            confidence,
            now,
        )
    }

    /// Analyze, remember and record one utterance.
    pub fn recognize(&self, text: &str, hints: &ContextHints) -> EmotionalRecognitionResult {
        let result = self.analyze(text, hints);
        self.history.append(result.clone());

        let record = EmotionRecord::from_result(&result, text);
        if let Err(e) = self.recorder.record(&record) {
            tracing::warn!("Failed to record emotional state: {}", e);
        }

        result
    }

    /// `recognize` with hints read from a loose key-value map.
    pub fn recognize_with_map(
        &self,
        text: &str,
        context: &HashMap<String, Value>,
    ) -> EmotionalRecognitionResult {
        self.recognize(text, &ContextHints::from_map(context))
    }

    pub fn recent_states(&self, count: usize) -> Vec<EmotionalRecognitionResult> {
        self.history.recent(count)
    }

    pub fn dominant_trend(&self, window: Duration) -> EmotionalTrend {
        self.history.trend(window)
    }

    /// Trend over the configured default window (24h unless overridden).
    pub fn dominant_trend_default(&self) -> EmotionalTrend {
        self.dominant_trend(self.config.history.trend_window())
    }

    pub fn clear_history(&self) {
        self.history.clear();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for EmotionEngine {
    fn default() -> Self {
        Self::new()
    }
}
