mod classifier;
mod crisis;
pub mod lexicon;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use classifier::{classify, Classification};
pub use crisis::assess_crisis;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmotionType {
    Joy,
    Sadness,
    Anger,
    Fear,
    Anxiety,
    Calm,
    Excitement,
    Confusion,
    Hopelessness,
    Gratitude,
}

impl EmotionType {
    pub const ALL: [EmotionType; 10] = [
        EmotionType::Joy,
        EmotionType::Sadness,
        EmotionType::Anger,
        EmotionType::Fear,
        EmotionType::Anxiety,
        EmotionType::Calm,
        EmotionType::Excitement,
        EmotionType::Confusion,
        EmotionType::Hopelessness,
        EmotionType::Gratitude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmotionType::Joy => "joy",
            EmotionType::Sadness => "sadness",
            EmotionType::Anger => "anger",
            EmotionType::Fear => "fear",
            EmotionType::Anxiety => "anxiety",
            EmotionType::Calm => "calm",
            EmotionType::Excitement => "excitement",
            EmotionType::Confusion => "confusion",
            EmotionType::Hopelessness => "hopelessness",
            EmotionType::Gratitude => "gratitude",
        }
    }

    /// Emotions that count towards distress in valence-aware trending.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            EmotionType::Sadness
                | EmotionType::Anger
                | EmotionType::Fear
                | EmotionType::Anxiety
                | EmotionType::Confusion
                | EmotionType::Hopelessness
        )
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EmotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered severity: `None < Low < Medium < High < Critical`.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl CrisisLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CrisisLevel::None => "none",
            CrisisLevel::Low => "low",
            CrisisLevel::Medium => "medium",
            CrisisLevel::High => "high",
            CrisisLevel::Critical => "critical",
        }
    }

    /// High and critical states are the ones counted in the crisis pattern log.
    pub fn is_severe(self) -> bool {
        self >= CrisisLevel::High
    }
}

impl fmt::Display for CrisisLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated per-emotion scores for a single utterance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmotionScores([f64; 10]);

impl EmotionScores {
    pub fn get(&self, emotion: EmotionType) -> f64 {
        self.0[emotion.index()]
    }

    pub fn add(&mut self, emotion: EmotionType, amount: f64) {
        self.0[emotion.index()] += amount;
    }

    /// Lowers a score, flooring it at zero.
    pub fn reduce(&mut self, emotion: EmotionType, amount: f64) {
        let slot = &mut self.0[emotion.index()];
        *slot = (*slot - amount).max(0.0);
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateContext {
    pub word_count: usize,
    pub has_questions: bool,
    pub has_exclamations: bool,
    pub time_of_day: u32,
    pub crisis_detected: bool,
    pub medical_emergency: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmotionalState {
    #[serde(rename = "emotion")]
    pub primary_emotion: EmotionType,
    pub intensity: f64,
    pub confidence: f64,
    pub timestamp: DateTime<Local>,
    pub crisis_level: CrisisLevel,
    pub context: StateContext,
}

/// Keystroke behaviour captured by the chat surface. Absent fields apply no adjustment.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TypingMetadata {
    /// Characters per second.
    pub speed: Option<f64>,
    pub backspace_count: Option<u32>,
    pub pause_count: Option<u32>,
}

impl TypingMetadata {
    /// Lenient conversion from a loosely typed JSON object. Missing, non-numeric,
    /// negative or non-finite fields are treated as absent.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let speed = value
            .get("typing_speed")
            .or_else(|| value.get("speed"))
            .and_then(serde_json::Value::as_f64)
            .filter(|s| s.is_finite() && *s >= 0.0);
        let count = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
        };
        Self {
            speed,
            backspace_count: count("backspace_count"),
            pause_count: count("pause_count"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn crisis_levels_are_ordered() {
        assert!(CrisisLevel::None < CrisisLevel::Low);
        assert!(CrisisLevel::Low < CrisisLevel::Medium);
        assert!(CrisisLevel::Medium < CrisisLevel::High);
        assert!(CrisisLevel::High < CrisisLevel::Critical);
        assert!(CrisisLevel::High.is_severe());
        assert!(!CrisisLevel::Medium.is_severe());
    }

    #[test]
    fn scores_never_drop_below_zero() {
        let mut scores = EmotionScores::default();
        scores.add(EmotionType::Joy, 0.3);
        scores.reduce(EmotionType::Joy, 0.5);
        assert_eq!(scores.get(EmotionType::Joy), 0.0);
    }

    #[test]
    fn typing_metadata_ignores_malformed_fields() {
        let meta = TypingMetadata::from_json(&json!({
            "typing_speed": "fast",
            "backspace_count": -3,
            "pause_count": 4,
        }));
        assert_eq!(meta.speed, None);
        assert_eq!(meta.backspace_count, None);
        assert_eq!(meta.pause_count, Some(4));

        let meta = TypingMetadata::from_json(&json!({ "speed": 62.5 }));
        assert_eq!(meta.speed, Some(62.5));

        let meta = TypingMetadata::from_json(&json!("not an object"));
        assert_eq!(meta, TypingMetadata::default());
    }

    #[test]
    fn emotion_names_serialize_lowercase() {
        let v = serde_json::to_value(EmotionType::Hopelessness).expect("serialize");
        assert_eq!(v, json!("hopelessness"));
        let v = serde_json::to_value(CrisisLevel::Critical).expect("serialize");
        assert_eq!(v, json!("critical"));
    }
}
