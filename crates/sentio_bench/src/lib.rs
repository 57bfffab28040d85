//! sentio_bench: conversation trajectory tests for the recognition engine.
//!
//! Replays scripted conversations and checks the emergent trend behaviour:
//! - Worsening mood reads as falling valence
//! - Recovery after a bad stretch reads as rising valence
//! - Small talk stays flat
//! - Old sessions drop out of the trend window

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use sentio_core::{ContextHints, EmotionalRecognitionResult};
use sentio_engine::{EmotionEngine, HistoryTracker};

/// Feed every turn through `recognize`, returning the results in order.
fn converse(engine: &EmotionEngine, turns: &[&str]) -> Vec<EmotionalRecognitionResult> {
    turns
        .iter()
        .map(|t| engine.recognize(t, &ContextHints::none()))
        .collect()
}

/// Analyze turns and stamp them `spacing` apart, ending at `end`.
fn stamped(
    engine: &EmotionEngine,
    turns: &[&str],
    end: DateTime<Utc>,
    spacing: ChronoDuration,
) -> Vec<EmotionalRecognitionResult> {
    let n = turns.len() as i32;
    turns
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let mut r = engine.analyze(t, &ContextHints::none());
            r.timestamp = end - spacing * (n - 1 - i as i32);
            r
        })
        .collect()
}

const WORSENING: &[&str] = &[
    "Had a wonderful morning, feeling great!",
    "Lunch was nice",
    "meeting ran long, whatever",
    "honestly a bit frustrated now",
    "this is terrible, I'm so upset",
    "I feel miserable and exhausted...",
];

const RECOVERY: &[&str] = &[
    "I feel miserable",
    "still pretty sad",
    "it's okay I guess",
    "actually feeling a bit better",
    "I'm happy we sorted it out",
    "Thank you, this is wonderful! 😊",
];

#[cfg(test)]
mod tests {
    use super::*;
    use sentio_core::{Emotion, TrendDirection};
    use std::time::Duration;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_worsening_conversation() {
        let engine = EmotionEngine::new();
        let results = converse(&engine, WORSENING);

        assert!(results[0].dimensions.valence > 0.0);
        assert!(
            results.last().map_or(false, |r| r.dimensions.valence < 0.0),
            "last turn should read negative"
        );

        let trend = engine.dominant_trend(HOUR);
        assert_eq!(
            trend.valence_direction,
            TrendDirection::Decreasing,
            "valence series: {:?}",
            results.iter().map(|r| r.dimensions.valence).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_recovery_arc() {
        let engine = EmotionEngine::new();
        let results = converse(&engine, RECOVERY);
        let trend = engine.dominant_trend(HOUR);
        assert_eq!(
            trend.valence_direction,
            TrendDirection::Increasing,
            "valence series: {:?}",
            results.iter().map(|r| r.dimensions.valence).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_small_talk_stays_flat() {
        let engine = EmotionEngine::new();
        let turns = ["ok", "sure", "the train leaves at six", "see you then"];
        for _ in 0..3 {
            converse(&engine, &turns);
        }
        let trend = engine.dominant_trend(HOUR);
        assert_eq!(trend.dominant_emotion, Emotion::Neutral);
        assert_eq!(trend.valence_direction, TrendDirection::Stable);
        assert_eq!(trend.arousal_direction, TrendDirection::Stable);
        assert_eq!(trend.dominance_direction, TrendDirection::Stable);
        // 12 turns, all Neutral
        assert!((trend.confidence - 1.0).abs() < 1e-6);
    }

    /// Yesterday's bad evening must not color today's trend.
    #[test]
    fn test_old_session_leaves_window() {
        let engine = EmotionEngine::new();
        let tracker = HistoryTracker::default();
        let now = Utc::now();

        for r in stamped(&engine, WORSENING, now - ChronoDuration::hours(30), ChronoDuration::minutes(10)) {
            tracker.append(r);
        }
        for r in stamped(&engine, RECOVERY, now, ChronoDuration::minutes(10)) {
            tracker.append(r);
        }

        let today = tracker.trend_at(Duration::from_secs(24 * 3600), now);
        assert_eq!(today.valence_direction, TrendDirection::Increasing);
        assert_eq!(tracker.in_window(Duration::from_secs(24 * 3600), now).len(), RECOVERY.len());

        let both_days = tracker.in_window(Duration::from_secs(48 * 3600), now);
        assert_eq!(both_days.len(), WORSENING.len() + RECOVERY.len());
    }

    /// A flat remark inherits the tone of the conversation so far.
    #[test]
    fn test_momentum_carries_tone() {
        let upbeat = EmotionEngine::new();
        converse(&upbeat, &["I love this", "so happy", "wonderful day"]);
        let after_good = upbeat.recognize("the train leaves at six", &ContextHints::none());

        let gloomy = EmotionEngine::new();
        converse(&gloomy, &["I hate this", "so sad", "awful day"]);
        let after_bad = gloomy.recognize("the train leaves at six", &ContextHints::none());

        assert!(after_good.dimensions.valence > 0.0);
        assert!(after_bad.dimensions.valence < 0.0);
    }
}
