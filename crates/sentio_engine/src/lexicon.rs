//! Emotion lexicon
//!
//! Static word and phrase tables mapping surface text to per-label
//! intensities, plus the modifier words (negations, intensifiers,
//! diminishers) that scale a neighbouring match. Built once, read-only
//! afterwards, and handed to the engine by `Arc`.

use once_cell::sync::Lazy;
use sentio_core::Emotion;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Longest phrase the matcher will try, in tokens.
pub const MAX_PHRASE_TOKENS: usize = 3;

pub const NEGATION_FACTOR: f32 = -0.7;
pub const INTENSIFIER_FACTOR: f32 = 1.5;
pub const DIMINISHER_FACTOR: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Positive,
    Negative,
    Neutral,
    Idiom,
    Negation,
    Intensifier,
    Diminisher,
}

/// A modifier applied to the match that directly follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Negation,
    Intensifier,
    Diminisher,
}

impl Modifier {
    pub fn factor(self) -> f32 {
        match self {
            Modifier::Negation => NEGATION_FACTOR,
            Modifier::Intensifier => INTENSIFIER_FACTOR,
            Modifier::Diminisher => DIMINISHER_FACTOR,
        }
    }

    pub fn tag(self) -> Tag {
        match self {
            Modifier::Negation => Tag::Negation,
            Modifier::Intensifier => Tag::Intensifier,
            Modifier::Diminisher => Tag::Diminisher,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub emotions: Vec<(Emotion, f32)>,
    pub tags: Vec<Tag>,
}

impl LexiconEntry {
    pub fn new(emotions: &[(Emotion, f32)], tags: &[Tag]) -> Self {
        let mut own_tags: Vec<Tag> = Vec::with_capacity(tags.len());
        for t in tags {
            if !own_tags.contains(t) {
                own_tags.push(*t);
            }
        }
        Self {
            emotions: emotions.to_vec(),
            tags: own_tags,
        }
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_emotional(&self) -> bool {
        !self.emotions.is_empty()
    }

    /// Negation wins over intensifier, intensifier over diminisher.
    pub fn modifier(&self) -> Option<Modifier> {
        if self.has_tag(Tag::Negation) {
            Some(Modifier::Negation)
        } else if self.has_tag(Tag::Intensifier) {
            Some(Modifier::Intensifier)
        } else if self.has_tag(Tag::Diminisher) {
            Some(Modifier::Diminisher)
        } else {
            None
        }
    }
}

/// Read-only word and phrase tables.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, LexiconEntry>,
    phrases: HashMap<String, LexiconEntry>,
}

static SHARED: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::builtin()));

impl Lexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the built-in English tables.
    pub fn builtin() -> Self {
        let mut lexicon = Self::empty();
        for (word, emotions, tags) in WORDS {
            lexicon.insert(word, LexiconEntry::new(emotions, tags));
        }
        for (phrase, emotions) in PHRASES {
            lexicon.insert(phrase, LexiconEntry::new(emotions, &[phrase_polarity(emotions), Tag::Idiom]));
        }
        for word in NEGATIONS {
            lexicon.insert(word, LexiconEntry::new(&[], &[Tag::Negation]));
        }
        for word in INTENSIFIERS {
            lexicon.insert(word, LexiconEntry::new(&[], &[Tag::Intensifier]));
        }
        for word in DIMINISHERS {
            lexicon.insert(word, LexiconEntry::new(&[], &[Tag::Diminisher]));
        }
        for phrase in DIMINISHER_PHRASES {
            lexicon.insert(phrase, LexiconEntry::new(&[], &[Tag::Diminisher]));
        }
        tracing::debug!(
            words = lexicon.words.len(),
            phrases = lexicon.phrases.len(),
            "Built emotion lexicon"
        );
        lexicon
    }

    /// Process-wide instance of [`Lexicon::builtin`], built on first use.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&SHARED)
    }

    /// Add or replace an entry. Keys containing spaces go to the phrase table.
    /// Modifier tags on an existing word entry are merged rather than dropped.
    pub fn insert(&mut self, key: &str, entry: LexiconEntry) {
        let key = key.trim().to_lowercase();
        if key.contains(' ') {
            self.phrases.insert(key, entry);
            return;
        }
        match self.words.get_mut(&key) {
            Some(existing) if !entry.is_emotional() => {
                for t in entry.tags {
                    if !existing.tags.contains(&t) {
                        existing.tags.push(t);
                    }
                }
            }
            _ => {
                self.words.insert(key, entry);
            }
        }
    }

    pub fn word(&self, token: &str) -> Option<&LexiconEntry> {
        self.words.get(token)
    }

    pub fn phrase(&self, tokens: &[String]) -> Option<&LexiconEntry> {
        if tokens.len() < 2 {
            return None;
        }
        self.phrases.get(&tokens.join(" "))
    }

    pub fn modifier(&self, token: &str) -> Option<Modifier> {
        self.words.get(token).and_then(LexiconEntry::modifier)
    }

    /// Modifier governing a match that starts at `start`: a two-token
    /// modifier phrase right before it, else the single preceding token.
    pub fn modifier_before(&self, tokens: &[String], start: usize) -> Option<Modifier> {
        start
            .checked_sub(2)
            .and_then(|p| self.phrase(&tokens[p..start]))
            .and_then(LexiconEntry::modifier)
            .or_else(|| {
                start
                    .checked_sub(1)
                    .and_then(|p| self.modifier(&tokens[p]))
            })
    }

    pub fn is_intensifier(&self, token: &str) -> bool {
        self.modifier(token) == Some(Modifier::Intensifier)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

fn phrase_polarity(emotions: &[(Emotion, f32)]) -> Tag {
    let lean: f32 = emotions
        .iter()
        .filter_map(|(e, s)| e.valence_pole().map(|p| p.sign() * s))
        .sum();
    if lean > 0.0 {
        Tag::Positive
    } else if lean < 0.0 {
        Tag::Negative
    } else {
        Tag::Neutral
    }
}

// ============================================================================
// Tables
// ============================================================================

use Emotion::*;
use Tag::{Negative as NEG, Neutral as NEU, Positive as POS};

type WordRow = (&'static str, &'static [(Emotion, f32)], &'static [Tag]);

const WORDS: &[WordRow] = &[
    // Joy
    ("happy", &[(Joy, 0.8)], &[POS]),
    ("joy", &[(Joy, 0.9)], &[POS]),
    ("joyful", &[(Joy, 0.9)], &[POS]),
    ("delight", &[(Joy, 0.7)], &[POS]),
    ("delighted", &[(Joy, 0.8)], &[POS]),
    ("pleasure", &[(Joy, 0.6)], &[POS]),
    ("cheerful", &[(Joy, 0.7)], &[POS]),
    ("glad", &[(Joy, 0.6)], &[POS]),
    ("good", &[(Joy, 0.5), (Contentment, 0.3)], &[POS]),
    ("nice", &[(Joy, 0.4), (Contentment, 0.3)], &[POS]),
    ("great", &[(Joy, 0.7), (Excitement, 0.2)], &[POS]),
    ("wonderful", &[(Joy, 0.8)], &[POS]),
    ("amazing", &[(Joy, 0.8), (Excitement, 0.5)], &[POS]),
    ("awesome", &[(Joy, 0.8), (Excitement, 0.5)], &[POS]),
    ("fantastic", &[(Joy, 0.9), (Excitement, 0.4)], &[POS]),
    // Excitement
    ("excited", &[(Excitement, 0.8), (Joy, 0.3)], &[POS]),
    ("thrilled", &[(Excitement, 0.9), (Joy, 0.5)], &[POS]),
    ("ecstatic", &[(Excitement, 1.0), (Joy, 0.6)], &[POS]),
    ("eager", &[(Anticipation, 0.6), (Excitement, 0.4)], &[POS]),
    // Contentment / relaxation
    ("content", &[(Contentment, 0.7)], &[POS]),
    ("peaceful", &[(Contentment, 0.8), (Relaxation, 0.4)], &[POS]),
    ("calm", &[(Contentment, 0.6), (Relaxation, 0.5)], &[POS]),
    ("relaxed", &[(Relaxation, 0.8), (Contentment, 0.4)], &[POS]),
    ("serene", &[(Contentment, 0.9), (Relaxation, 0.5)], &[POS]),
    ("comfortable", &[(Contentment, 0.5), (Relaxation, 0.3)], &[POS]),
    ("better", &[(Contentment, 0.4), (Hope, 0.2)], &[POS]),
    // Pride
    ("proud", &[(Pride, 0.8)], &[POS]),
    ("accomplished", &[(Pride, 0.7)], &[POS]),
    ("confident", &[(Pride, 0.6), (Trust, 0.3)], &[POS]),
    ("successful", &[(Pride, 0.7), (Joy, 0.3)], &[POS]),
    // Gratitude
    ("grateful", &[(Gratitude, 0.8)], &[POS]),
    ("thankful", &[(Gratitude, 0.7)], &[POS]),
    ("appreciative", &[(Gratitude, 0.6)], &[POS]),
    ("thanks", &[(Gratitude, 0.5)], &[POS]),
    // Sadness
    ("sad", &[(Sadness, 0.8)], &[NEG]),
    ("unhappy", &[(Sadness, 0.7)], &[NEG]),
    ("depressed", &[(Sadness, 0.9)], &[NEG]),
    ("melancholy", &[(Sadness, 0.6)], &[NEG]),
    ("gloomy", &[(Sadness, 0.5)], &[NEG]),
    ("miserable", &[(Sadness, 0.9)], &[NEG]),
    ("lonely", &[(Sadness, 0.7)], &[NEG]),
    ("heartbroken", &[(Sadness, 1.0)], &[NEG]),
    ("bad", &[(Sadness, 0.4), (Frustration, 0.2)], &[NEG]),
    ("terrible", &[(Sadness, 0.6), (Disgust, 0.3)], &[NEG]),
    ("awful", &[(Sadness, 0.6), (Disgust, 0.3)], &[NEG]),
    ("upset", &[(Sadness, 0.6), (Anger, 0.3)], &[NEG]),
    // Anger
    ("angry", &[(Anger, 0.8)], &[NEG]),
    ("mad", &[(Anger, 0.7)], &[NEG]),
    ("furious", &[(Anger, 0.9)], &[NEG]),
    ("irritated", &[(Anger, 0.5)], &[NEG]),
    ("annoyed", &[(Anger, 0.4)], &[NEG]),
    ("hate", &[(Anger, 0.7), (Disgust, 0.4)], &[NEG]),
    // Fear / anxiety
    ("afraid", &[(Fear, 0.8)], &[NEG]),
    ("scared", &[(Fear, 0.7)], &[NEG]),
    ("terrified", &[(Fear, 0.9)], &[NEG]),
    ("anxious", &[(Anxiety, 0.8), (Fear, 0.4)], &[NEG]),
    ("worried", &[(Anxiety, 0.7), (Fear, 0.3)], &[NEG]),
    ("nervous", &[(Anxiety, 0.6), (Fear, 0.3)], &[NEG]),
    ("stressed", &[(Anxiety, 0.7), (Frustration, 0.3)], &[NEG]),
    ("overwhelmed", &[(Anxiety, 0.7), (Fear, 0.4)], &[NEG]),
    // Disgust / contempt
    ("disgusted", &[(Disgust, 0.8)], &[NEG]),
    ("repulsed", &[(Disgust, 0.7)], &[NEG]),
    ("grossed", &[(Disgust, 0.6)], &[NEG]),
    ("contempt", &[(Contempt, 0.8)], &[NEG]),
    ("pathetic", &[(Contempt, 0.6), (Disgust, 0.3)], &[NEG]),
    // Complex
    ("hopeful", &[(Hope, 0.7), (Anticipation, 0.4)], &[POS]),
    ("optimistic", &[(Hope, 0.6)], &[POS]),
    ("pessimistic", &[(Sadness, 0.4), (Fear, 0.3)], &[NEG]),
    ("frustrated", &[(Frustration, 0.8), (Anger, 0.3)], &[NEG]),
    ("confused", &[(Confusion, 0.7)], &[NEU]),
    ("puzzled", &[(Confusion, 0.6)], &[NEU]),
    ("surprised", &[(Surprise, 0.8)], &[NEU]),
    ("shocked", &[(Surprise, 0.8), (Fear, 0.2)], &[NEU]),
    ("bored", &[(Boredom, 0.6)], &[NEG]),
    ("tired", &[(Fatigue, 0.7)], &[NEG]),
    ("exhausted", &[(Fatigue, 0.9)], &[NEG]),
    ("amused", &[(Amusement, 0.7), (Joy, 0.3)], &[POS]),
    ("funny", &[(Amusement, 0.6)], &[POS]),
    ("interested", &[(Interest, 0.6)], &[POS]),
    ("curious", &[(Interest, 0.6), (Anticipation, 0.2)], &[POS]),
    ("disappointed", &[(Disappointment, 0.8), (Sadness, 0.3)], &[NEG]),
    ("guilty", &[(Guilt, 0.7)], &[NEG]),
    ("ashamed", &[(Shame, 0.8)], &[NEG]),
    ("embarrassed", &[(Shame, 0.6)], &[NEG]),
    ("envious", &[(Envy, 0.6)], &[NEG]),
    ("jealous", &[(Envy, 0.7)], &[NEG]),
    ("love", &[(Love, 0.8)], &[POS]),
    ("loved", &[(Love, 0.9)], &[POS]),
    ("loving", &[(Love, 0.8)], &[POS]),
    ("trusted", &[(Trust, 0.7)], &[POS]),
    ("trusting", &[(Trust, 0.6)], &[POS]),
    ("safe", &[(Trust, 0.5), (Relaxation, 0.3)], &[POS]),
];

const PHRASES: &[(&str, &[(Emotion, f32)])] = &[
    // Positive
    ("on cloud nine", &[(Joy, 0.9), (Excitement, 0.5)]),
    ("over the moon", &[(Joy, 0.8), (Excitement, 0.4)]),
    ("head over heels", &[(Love, 0.8), (Joy, 0.4)]),
    ("walking on air", &[(Joy, 0.8)]),
    ("can't wait", &[(Anticipation, 0.8), (Excitement, 0.5)]),
    ("looking forward", &[(Anticipation, 0.7), (Hope, 0.3)]),
    ("thank you", &[(Gratitude, 0.7)]),
    ("at peace", &[(Contentment, 0.8), (Relaxation, 0.4)]),
    // Sadness
    ("in the dumps", &[(Sadness, 0.8)]),
    ("feeling blue", &[(Sadness, 0.7)]),
    ("broken hearted", &[(Sadness, 0.9)]),
    // Frustration / anger
    ("at wit's end", &[(Frustration, 0.8), (Anger, 0.3)]),
    ("at wits end", &[(Frustration, 0.8), (Anger, 0.3)]),
    ("fed up", &[(Frustration, 0.8), (Anger, 0.3)]),
    ("seeing red", &[(Anger, 0.9)]),
    ("under the collar", &[(Anger, 0.8)]),
    // Anxiety
    ("pins and needles", &[(Anxiety, 0.8), (Fear, 0.3)]),
    ("biting my nails", &[(Anxiety, 0.7)]),
    ("stressed out", &[(Anxiety, 0.8), (Frustration, 0.3)]),
    ("freaking out", &[(Anxiety, 0.8), (Fear, 0.4)]),
    // Fatigue
    ("worn out", &[(Fatigue, 0.8)]),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nowhere", "neither", "nor", "cannot", "can't",
    "won't", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "haven't",
    "hasn't", "hadn't",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "extremely", "incredibly", "absolutely", "totally", "completely",
    "utterly", "highly", "super", "amazingly", "awfully", "terribly", "especially",
];

const DIMINISHERS: &[&str] = &[
    "slightly", "somewhat", "fairly", "rather", "pretty", "quite", "bit", "little",
];

/// Two-token hedges. "kind" and "sort" only soften as part of these.
const DIMINISHER_PHRASES: &[&str] = &["kind of", "sort of", "a bit", "a little"];

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_builtin_tables_populated() {
        let lex = Lexicon::builtin();
        assert!(lex.word_count() > 100);
        assert!(lex.phrase_count() >= 15);
        assert!(lex.word("happy").is_some());
        assert!(lex.word("zyzzyva").is_none());
    }

    #[test]
    fn test_phrase_lookup() {
        let lex = Lexicon::builtin();
        let entry = lex.phrase(&toks("over the moon")).unwrap();
        assert!(entry.has_tag(Tag::Idiom));
        assert!(entry.has_tag(Tag::Positive));
        assert!(lex.phrase(&toks("seeing red")).unwrap().has_tag(Tag::Negative));
        assert!(lex.phrase(&toks("happy")).is_none());
    }

    #[test]
    fn test_modifiers() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.modifier("not"), Some(Modifier::Negation));
        assert_eq!(lex.modifier("don't"), Some(Modifier::Negation));
        assert_eq!(lex.modifier("very"), Some(Modifier::Intensifier));
        assert_eq!(lex.modifier("slightly"), Some(Modifier::Diminisher));
        assert_eq!(lex.modifier("happy"), None);
        assert!(lex.is_intensifier("so"));
    }

    #[test]
    fn test_hedge_phrases_diminish() {
        let lex = Lexicon::builtin();
        for hedge in ["kind of", "sort of", "a bit", "a little"] {
            let mut tokens = toks(hedge);
            tokens.push("sad".to_string());
            assert_eq!(lex.modifier_before(&tokens, 2), Some(Modifier::Diminisher), "{hedge}");
        }
        assert_eq!(lex.modifier("kind"), None);
        assert_eq!(lex.modifier("sort"), None);
        assert_eq!(lex.modifier_before(&toks("not sad"), 1), Some(Modifier::Negation));
        assert_eq!(lex.modifier_before(&toks("sad"), 0), None);
    }

    #[test]
    fn test_modifier_entries_carry_no_emotion() {
        let lex = Lexicon::builtin();
        assert!(!lex.word("never").unwrap().is_emotional());
    }

    #[test]
    fn test_insert_merges_modifier_tags() {
        let mut lex = Lexicon::empty();
        lex.insert("terribly", LexiconEntry::new(&[(Sadness, 0.2)], &[NEG]));
        lex.insert("terribly", LexiconEntry::new(&[], &[Tag::Intensifier]));
        let entry = lex.word("terribly").unwrap();
        assert!(entry.is_emotional());
        assert_eq!(entry.modifier(), Some(Modifier::Intensifier));
    }

    #[test]
    fn test_shared_is_single_instance() {
        let a = Lexicon::shared();
        let b = Lexicon::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_every_phrase_fits_window() {
        for (phrase, _) in PHRASES {
            let n = phrase.split(' ').count();
            assert!((2..=MAX_PHRASE_TOKENS).contains(&n), "{phrase}");
        }
    }
}
