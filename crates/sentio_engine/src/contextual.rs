//! Contextual stage: emotional momentum from recent history plus host hints.

use sentio_core::{
    ContextHints, EmotionalDimensions, EmotionalRecognitionResult, TimeOfDay, UserActivity,
};

/// Share of the recent average carried into the current estimate.
pub const MOMENTUM_SHARE: f32 = 0.2;

pub fn analyze_context(
    recent: &[EmotionalRecognitionResult],
    hints: &ContextHints,
) -> EmotionalDimensions {
    let mut valence = 0.0f32;
    let mut arousal = 0.0f32;
    let mut dominance = 0.0f32;

    if !recent.is_empty() {
        let avg = EmotionalDimensions::mean(recent.iter().map(|r| &r.dimensions));
        valence += avg.valence * MOMENTUM_SHARE;
        arousal += avg.arousal * MOMENTUM_SHARE;
        dominance += avg.dominance * MOMENTUM_SHARE;
    }

    match hints.user_activity {
        Some(UserActivity::Working) => {
            arousal += 0.1;
            dominance += 0.1;
        }
        Some(UserActivity::Relaxing) => {
            arousal -= 0.2;
        }
        Some(UserActivity::Socializing) => {
            arousal += 0.1;
            valence += 0.1;
        }
        None => {}
    }

    match hints.time_of_day {
        Some(TimeOfDay::Morning) => arousal += 0.1,
        Some(TimeOfDay::Night) => arousal -= 0.1,
        None => {}
    }

    EmotionalDimensions::new(valence, arousal, dominance)
}
