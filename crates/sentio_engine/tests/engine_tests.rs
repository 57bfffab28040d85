//! End-to-end behaviour of the recognition engine.

use sentio_core::{ContextHints, Emotion, EmotionRecord, EngineConfig, TrendDirection};
use sentio_engine::{ChannelRecorder, EmotionEngine, EmotionRecorder, RecordError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn none() -> ContextHints {
    ContextHints::none()
}

#[test]
fn test_empty_input_is_neutral() {
    let engine = EmotionEngine::new();
    let r = engine.recognize("", &none());
    assert_eq!(r.dimensions.valence, 0.0);
    assert_eq!(r.dimensions.arousal, 0.0);
    assert_eq!(r.dimensions.dominance, 0.0);
    assert_eq!(r.primary_emotion, Emotion::Neutral);
    assert_eq!(r.secondary_emotion, None);
}

#[test]
fn test_negation_lowers_valence() {
    let good = EmotionEngine::new().recognize("good", &none());
    let not_good = EmotionEngine::new().recognize("not good", &none());
    assert!(good.dimensions.valence > 0.0);
    assert!(not_good.dimensions.valence < good.dimensions.valence);
    assert!(not_good.dimensions.valence < 0.0);
}

#[test]
fn test_intensifier_amplifies() {
    let happy = EmotionEngine::new().recognize("happy", &none());
    let very_happy = EmotionEngine::new().recognize("very happy", &none());
    assert!(very_happy.dimensions.valence.abs() >= happy.dimensions.valence);
}

#[test]
fn test_excited_scenario() {
    let engine = EmotionEngine::new();
    let r = engine.recognize("I am SO excited!!!", &none());
    assert!(
        matches!(r.primary_emotion, Emotion::Excitement | Emotion::Joy),
        "got {}",
        r.primary_emotion
    );
    assert!(r.dimensions.arousal > 0.5, "arousal {}", r.dimensions.arousal);
    assert!(r.confidence_score > 0.5, "confidence {}", r.confidence_score);
}

#[test]
fn test_plain_joy_reads_as_joy() {
    for text in ["I am so happy", "so happy and joyful"] {
        let r = EmotionEngine::new().recognize(text, &none());
        assert_eq!(r.primary_emotion, Emotion::Joy, "{text}: {:?}", r.dimensions);
        assert!(r.dimensions.dominance > 0.0, "{text}");
    }
}

#[test]
fn test_excited_leans_submissive_not_joyful() {
    let r = EmotionEngine::new().recognize("I am SO excited!!!", &none());
    assert_eq!(r.primary_emotion, Emotion::Excitement, "{:?}", r.dimensions);
    assert_eq!(r.secondary_emotion, Some(Emotion::Joy));
}

#[test]
fn test_sad_text_is_negative() {
    let r = EmotionEngine::new().recognize("I feel so sad and miserable today", &none());
    assert!(r.dimensions.valence < 0.0);
    assert!(r.dimensions.arousal < 0.0);
}

#[test]
fn test_deterministic_for_same_state() {
    let inputs = [
        "I can't wait for the weekend!!",
        "ugh... not great",
        "WHY IS THIS BROKEN???",
        "feeling a bit worn out 😩",
    ];
    for text in inputs {
        let a = EmotionEngine::new().recognize(text, &none());
        let b = EmotionEngine::new().recognize(text, &none());
        assert_eq!(a.dimensions, b.dimensions, "{text}");
        assert_eq!(a.primary_emotion, b.primary_emotion);
        assert_eq!(a.secondary_emotion, b.secondary_emotion);
        assert_eq!(a.confidence_score.to_bits(), b.confidence_score.to_bits());
    }
}

#[test]
fn test_history_is_bounded() {
    let engine = EmotionEngine::new();
    for i in 0..60 {
        engine.recognize(&format!("message {i}"), &none());
    }
    assert_eq!(engine.history_len(), 50);
    assert_eq!(engine.recent_states(100).len(), 50);
}

#[test]
fn test_capacity_from_config() {
    let mut config = EngineConfig::default();
    config.history.capacity = 3;
    let engine = EmotionEngine::with_config(config);
    for _ in 0..5 {
        engine.recognize("fine", &none());
    }
    assert_eq!(engine.history_len(), 3);
}

#[test]
fn test_trend_follows_mood() {
    let engine = EmotionEngine::new();
    for text in [
        "I'm thrilled and delighted!",
        "pretty happy",
        "it's okay I guess",
        "feeling sad",
        "miserable and hopeless",
    ] {
        engine.recognize(text, &none());
    }
    let trend = engine.dominant_trend(Duration::from_secs(3600));
    assert_eq!(trend.valence_direction, TrendDirection::Decreasing);
    assert!(trend.confidence > 0.0);
}

#[test]
fn test_recent_states_oldest_first() {
    let engine = EmotionEngine::new();
    engine.recognize("sad", &none());
    engine.recognize("happy", &none());
    let recent = engine.recent_states(2);
    assert!(recent[0].dimensions.valence < 0.0);
    assert!(recent[1].dimensions.valence > 0.0);
    assert!(recent[0].timestamp <= recent[1].timestamp);
}

#[test]
fn test_concurrent_recognize() {
    let engine = Arc::new(EmotionEngine::new());
    std::thread::scope(|s| {
        for t in 0..8 {
            let engine = Arc::clone(&engine);
            s.spawn(move || {
                for i in 0..20 {
                    let r = engine.recognize(&format!("thread {t} is happy {i}"), &none());
                    assert!(r.dimensions.valence > 0.0);
                    engine.dominant_trend(Duration::from_secs(60));
                }
            });
        }
    });
    assert_eq!(engine.history_len(), 50);
}

struct FailingRecorder {
    calls: AtomicUsize,
}

impl EmotionRecorder for FailingRecorder {
    fn record(&self, _record: &EmotionRecord) -> Result<(), RecordError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RecordError::Backend("disk full".to_string()))
    }
}

#[test]
fn test_recorder_failure_does_not_fail_recognition() {
    let recorder = Arc::new(FailingRecorder {
        calls: AtomicUsize::new(0),
    });
    let engine = EmotionEngine::new().with_recorder(recorder.clone());
    let r = engine.recognize("great news", &none());
    assert!(r.dimensions.valence > 0.0);
    assert_eq!(engine.history_len(), 1);
    assert_eq!(recorder.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_channel_recorder_receives_records() {
    let (recorder, mut rx) = ChannelRecorder::channel(8);
    let engine = EmotionEngine::new().with_recorder(Arc::new(recorder));

    let r = engine.recognize("I am so happy", &none());
    let record = rx.recv().await.unwrap();
    assert_eq!(record.text, "I am so happy");
    assert_eq!(record.category, "EMOTIONAL_STATE");
    assert_eq!(record.primary_emotion, r.primary_emotion.key());
    assert_eq!(record.confidence, r.confidence_score);
}

#[tokio::test]
async fn test_closed_channel_is_swallowed() {
    let (recorder, rx) = ChannelRecorder::channel(1);
    drop(rx);
    let engine = EmotionEngine::new().with_recorder(Arc::new(recorder));
    let r = engine.recognize("happy", &none());
    assert!(r.dimensions.valence > 0.0);
    assert_eq!(engine.history_len(), 1);
}
