//! History & trend tracking
//!
//! A bounded ring buffer of past recognition results. Appends evict the
//! oldest entry once the buffer is full; trend queries filter by time window
//! and fit a least-squares line per axis to decide whether it is rising,
//! falling or flat.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use sentio_core::{
    Emotion, EmotionalRecognitionResult, EmotionalTrend, HistoryConfig, TrendDirection,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Series shorter than this are always Stable.
pub const MIN_TREND_POINTS: usize = 3;

/// Sample size at which trend confidence stops growing.
const FULL_CONFIDENCE_SAMPLES: usize = 10;

/// Thread-safe history buffer. Writers are exclusive; readers share.
pub struct HistoryTracker {
    entries: RwLock<VecDeque<EmotionalRecognitionResult>>,
    capacity: usize,
    slope_threshold: f32,
}

impl HistoryTracker {
    pub fn new(capacity: usize) -> Self {
        Self::with_config(&HistoryConfig {
            capacity,
            ..HistoryConfig::default()
        })
    }

    pub fn with_config(config: &HistoryConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
            slope_threshold: config.slope_threshold,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn append(&self, result: EmotionalRecognitionResult) {
        let mut entries = self.entries.write();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(result);
    }

    /// The newest `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<EmotionalRecognitionResult> {
        let entries = self.entries.read();
        let skip = entries.len().saturating_sub(count);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn snapshot(&self) -> Vec<EmotionalRecognitionResult> {
        self.entries.read().iter().cloned().collect()
    }

    /// Entries stamped at or after `now - window`.
    pub fn in_window(&self, window: Duration, now: DateTime<Utc>) -> Vec<EmotionalRecognitionResult> {
        let cutoff = chrono::Duration::from_std(window)
            .ok()
            .and_then(|w| now.checked_sub_signed(w));
        self.entries
            .read()
            .iter()
            .filter(|r| cutoff.map_or(true, |c| r.timestamp >= c))
            .cloned()
            .collect()
    }

    pub fn trend(&self, window: Duration) -> EmotionalTrend {
        self.trend_at(window, Utc::now())
    }

    pub fn trend_at(&self, window: Duration, now: DateTime<Utc>) -> EmotionalTrend {
        let states = self.in_window(window, now);
        summarize_trend(&states, self.slope_threshold)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::with_config(&HistoryConfig::default())
    }
}

/// Dominant label plus per-axis direction over an ordered series of results.
pub fn summarize_trend(states: &[EmotionalRecognitionResult], slope_threshold: f32) -> EmotionalTrend {
    if states.is_empty() {
        return EmotionalTrend::neutral();
    }

    let (dominant_emotion, dominant_count) = dominant_emotion(states);

    let axis = |pick: fn(&EmotionalRecognitionResult) -> f32| {
        let values: Vec<f32> = states.iter().map(pick).collect();
        trend_direction(&values, slope_threshold)
    };

    let n = states.len();
    let confidence = (n.min(FULL_CONFIDENCE_SAMPLES) as f32 / FULL_CONFIDENCE_SAMPLES as f32)
        * (dominant_count as f32 / n as f32);

    EmotionalTrend {
        dominant_emotion,
        valence_direction: axis(|r| r.dimensions.valence),
        arousal_direction: axis(|r| r.dimensions.arousal),
        dominance_direction: axis(|r| r.dimensions.dominance),
        confidence,
    }
}

/// Most frequent primary label; ties go to the label seen first.
fn dominant_emotion(states: &[EmotionalRecognitionResult]) -> (Emotion, usize) {
    let mut counts: Vec<(Emotion, usize)> = Vec::new();
    for s in states {
        match counts.iter_mut().find(|(e, _)| *e == s.primary_emotion) {
            Some((_, c)) => *c += 1,
            None => counts.push((s.primary_emotion, 1)),
        }
    }
    let mut best = (Emotion::Neutral, 0);
    for (emotion, count) in counts {
        if count > best.1 {
            best = (emotion, count);
        }
    }
    best
}

/// Ordinary least-squares slope of `(index, value)` pairs.
pub fn regression_slope(values: &[f32]) -> f32 {
    let n = values.len() as f32;
    if values.len() < 2 {
        return 0.0;
    }
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0f32, 0.0f32, 0.0f32, 0.0f32);
    for (i, y) in values.iter().enumerate() {
        let x = i as f32;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denom
}

pub fn trend_direction(values: &[f32], slope_threshold: f32) -> TrendDirection {
    if values.len() < MIN_TREND_POINTS {
        return TrendDirection::Stable;
    }
    let slope = regression_slope(values);
    if slope > slope_threshold {
        TrendDirection::Increasing
    } else if slope < -slope_threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}
