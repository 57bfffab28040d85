//! # Sentio Core
//!
//! Shared vocabulary for the emotional recognition engine: the VAD point
//! type, the discrete emotion labels, recognition results and trends, the
//! context hints a host can pass in, and engine configuration.

pub mod config;
pub mod context;
pub mod dimensions;
pub mod emotion;
pub mod recognition;

pub use config::{EngineConfig, FusionWeights, HistoryConfig};
pub use context::{ContextHints, TimeOfDay, UserActivity};
pub use dimensions::{clamp_axis, EmotionalDimensions};
pub use emotion::{Emotion, Pole};
pub use recognition::{
    ConfidenceLevel, EmotionRecord, EmotionalRecognitionResult, EmotionalTrend, TrendDirection,
};
