//! # Sentio Engine
//!
//! Recognizes affect in free text and tracks how it moves over a
//! conversation. Every utterance is mapped to a point in
//! valence/arousal/dominance space, then labelled.
//!
//! ## Pipeline
//!
//! 1. **Lexical**: lexicon words and idioms, with negation, intensifiers
//!    and diminishers applied to the following term
//! 2. **Pattern**: shouting, punctuation runs, ellipses, emoji
//! 3. **Contextual**: momentum from recent states plus host hints
//!    (activity, time of day)
//! 4. **Fusion**: weighted sum of the three estimates (0.5 / 0.3 / 0.2)
//! 5. **Classification**: ordered rule lists for primary and secondary labels
//! 6. **Confidence**: signal strength, distance from neutral, and whether
//!    the label agrees with the point it came from
//!
//! Results land in a bounded history that answers trend queries. The engine
//! never fails; blank or unrecognized input degrades to Neutral.

pub mod classifier;
pub mod confidence;
pub mod contextual;
mod engine;
pub mod fusion;
pub mod history;
pub mod lexical;
pub mod lexicon;
pub mod pattern;
pub mod recorder;
pub mod tokenizer;

pub use engine::EmotionEngine;
pub use history::HistoryTracker;
pub use lexical::{LexicalAnalysis, LexicalAnalyzer, LexicalMatch};
pub use lexicon::{Lexicon, LexiconEntry, Modifier, Tag};
pub use recorder::{ChannelRecorder, EmotionRecorder, NoopRecorder, RecordError};
