use super::lexicon::{
    contains_any, count_matches, ACCIDENT_WORDS, CRISIS_PHRASES, EMOTION_LEXICONS,
    MEDICAL_EMERGENCY_PHRASES, NEGATION_WORDS, NEGATIVE_EXPERIENCE_WORDS, PAST_TENSE_WORDS,
    TIME_REFERENCES,
};
use super::{
    assess_crisis, EmotionScores, EmotionType, EmotionalState, StateContext, TypingMetadata,
};
use chrono::{DateTime, Local, Timelike};

/// Order in which scores compete for the primary emotion. On an exact tie the
/// earlier entry wins, so an utterance with no signal at all resolves to joy.
const PRIMARY_ORDER: [EmotionType; 10] = [
    EmotionType::Joy,
    EmotionType::Sadness,
    EmotionType::Anxiety,
    EmotionType::Fear,
    EmotionType::Anger,
    EmotionType::Hopelessness,
    EmotionType::Gratitude,
    EmotionType::Calm,
    EmotionType::Confusion,
    EmotionType::Excitement,
];

const SLOW_TYPING_CPS: f64 = 10.0;
const FAST_TYPING_CPS: f64 = 50.0;
const MANY_BACKSPACES: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub state: EmotionalState,
    pub scores: EmotionScores,
}

/// Scores `text` against the lexicons and heuristics and builds the resulting
/// state stamped at `now`. Pure; recording it is the engine's job.
pub fn classify(
    text: &str,
    typing: Option<&TypingMetadata>,
    now: DateTime<Local>,
) -> Classification {
    let lower = text.to_lowercase();
    let mut scores = EmotionScores::default();

    for lexicon in EMOTION_LEXICONS {
        let hits = count_matches(&lower, lexicon.words);
        for _ in 0..hits {
            scores.add(lexicon.emotion, lexicon.weight);
        }
    }

    if let Some(typing) = typing {
        apply_typing(&mut scores, typing);
    }
    apply_punctuation(&mut scores, text);
    apply_context(&mut scores, &lower);

    let crisis_detected = contains_any(&lower, CRISIS_PHRASES);
    let medical_emergency = contains_any(&lower, MEDICAL_EMERGENCY_PHRASES);

    let (primary_emotion, top) = primary(&scores);
    let intensity = top.min(1.0);
    let confidence = (intensity * 0.8 + 0.2).min(1.0);

    let state = EmotionalState {
        primary_emotion,
        intensity,
        confidence,
        timestamp: now,
        crisis_level: assess_crisis(&scores, crisis_detected),
        context: StateContext {
            word_count: text.split_whitespace().count(),
            has_questions: text.contains('?'),
            has_exclamations: text.contains('!'),
            time_of_day: now.hour(),
            crisis_detected,
            medical_emergency,
        },
    };

    Classification { state, scores }
}

fn apply_typing(scores: &mut EmotionScores, typing: &TypingMetadata) {
    if let Some(speed) = typing.speed.filter(|s| s.is_finite()) {
        if speed < SLOW_TYPING_CPS {
            scores.add(EmotionType::Sadness, 0.2);
        }
        if speed > FAST_TYPING_CPS {
            scores.add(EmotionType::Anxiety, 0.2);
        }
    }
    if typing.backspace_count.is_some_and(|n| n > MANY_BACKSPACES) {
        scores.add(EmotionType::Anxiety, 0.1);
    }
}

fn apply_punctuation(scores: &mut EmotionScores, text: &str) {
    if text.contains("!!!") {
        scores.add(EmotionType::Anxiety, 0.2);
    }
    if text.contains("...") {
        scores.add(EmotionType::Sadness, 0.1);
    }
    if text.matches('?').count() > 2 {
        scores.add(EmotionType::Confusion, 0.2);
    }
}

/// Accident vocabulary, negations and narrated past events. Users often describe
/// a bad experience in flat or upbeat words, so these shift weight away from joy.
fn apply_context(scores: &mut EmotionScores, lower: &str) {
    let has_accident = contains_any(lower, ACCIDENT_WORDS);
    if has_accident {
        scores.add(EmotionType::Fear, 0.3);
        scores.add(EmotionType::Sadness, 0.2);
        scores.add(EmotionType::Anxiety, 0.2);
    }

    if contains_any(lower, NEGATION_WORDS) {
        scores.reduce(EmotionType::Joy, 0.2);
    }

    let negative_experience = has_accident || contains_any(lower, NEGATIVE_EXPERIENCE_WORDS);
    if !negative_experience {
        return;
    }

    if contains_any(lower, PAST_TENSE_WORDS) {
        scores.add(EmotionType::Fear, 0.2);
        scores.add(EmotionType::Sadness, 0.2);
        scores.add(EmotionType::Anxiety, 0.1);
        scores.reduce(EmotionType::Joy, 0.4);
    }

    if contains_any(lower, TIME_REFERENCES) {
        scores.add(EmotionType::Sadness, 0.2);
        scores.add(EmotionType::Fear, 0.1);
        scores.reduce(EmotionType::Joy, 0.3);
    }
}

fn primary(scores: &EmotionScores) -> (EmotionType, f64) {
    let mut best = (PRIMARY_ORDER[0], scores.get(PRIMARY_ORDER[0]));
    for emotion in &PRIMARY_ORDER[1..] {
        let score = scores.get(*emotion);
        if score > best.1 {
            best = (*emotion, score);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::CrisisLevel;
    use chrono::TimeZone;

    const EPS: f64 = 1e-9;

    fn at_hour(hour: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 19, hour, 15, 0)
            .single()
            .expect("unambiguous local time")
    }

    fn run(text: &str) -> Classification {
        classify(text, None, at_hour(14))
    }

    #[test]
    fn empty_text_resolves_to_joy_with_zero_intensity() {
        let c = run("");
        assert_eq!(c.state.primary_emotion, EmotionType::Joy);
        assert_eq!(c.state.intensity, 0.0);
        assert!((c.state.confidence - 0.2).abs() < EPS);
        assert_eq!(c.state.crisis_level, CrisisLevel::None);
        assert_eq!(c.state.context.word_count, 0);
    }

    #[test]
    fn keyword_hits_add_category_weights() {
        let c = run("I feel sad and lonely");
        assert!((c.scores.get(EmotionType::Sadness) - 0.8).abs() < EPS);
        assert_eq!(c.state.primary_emotion, EmotionType::Sadness);
        assert!((c.state.intensity - 0.8).abs() < EPS);
        assert!((c.state.confidence - 0.84).abs() < EPS);
        assert_eq!(c.state.crisis_level, CrisisLevel::Low);
    }

    #[test]
    fn panic_attack_is_anxiety() {
        let c = run("I can't stop shaking, I think I'm having a panic attack!!!");
        assert_eq!(c.state.primary_emotion, EmotionType::Anxiety);
        assert!((c.scores.get(EmotionType::Anxiety) - 0.6).abs() < EPS);
        assert_eq!(c.state.crisis_level, CrisisLevel::Low);
        assert!(c.state.context.has_exclamations);
        assert!(!c.state.context.crisis_detected);
    }

    #[test]
    fn narrated_accident_boosts_fear_and_suppresses_joy() {
        let c = run("I got into a car accident last week and broke my arm");
        assert_eq!(c.state.primary_emotion, EmotionType::Fear);
        assert_eq!(c.state.intensity, 1.0);
        assert!((c.scores.get(EmotionType::Fear) - 1.1).abs() < EPS);
        assert!((c.scores.get(EmotionType::Sadness) - 0.6).abs() < EPS);
        assert!((c.scores.get(EmotionType::Anxiety) - 0.3).abs() < EPS);
        assert_eq!(c.scores.get(EmotionType::Joy), 0.0);
        assert_eq!(c.state.crisis_level, CrisisLevel::Medium);
        assert!(!c.state.context.medical_emergency);
    }

    #[test]
    fn negation_lowers_joy_without_going_negative() {
        let c = run("not happy");
        assert!((c.scores.get(EmotionType::Joy) - 0.1).abs() < EPS);

        let c = run("no");
        assert_eq!(c.scores.get(EmotionType::Joy), 0.0);
    }

    #[test]
    fn crisis_phrase_is_critical() {
        let c = run("Honestly I just want to die");
        assert!(c.state.context.crisis_detected);
        assert_eq!(c.state.crisis_level, CrisisLevel::Critical);
    }

    #[test]
    fn medical_emergency_is_flagged_independently() {
        let c = run("my dad has chest pain");
        assert!(c.state.context.medical_emergency);
        assert!(!c.state.context.crisis_detected);
    }

    #[test]
    fn typing_metadata_adjusts_scores() {
        let slow = TypingMetadata {
            speed: Some(4.0),
            ..Default::default()
        };
        let c = classify("hello", Some(&slow), at_hour(9));
        assert!((c.scores.get(EmotionType::Sadness) - 0.2).abs() < EPS);

        let frantic = TypingMetadata {
            speed: Some(75.0),
            backspace_count: Some(9),
            pause_count: Some(0),
        };
        let c = classify("hello", Some(&frantic), at_hour(9));
        assert!((c.scores.get(EmotionType::Anxiety) - 0.3).abs() < EPS);
        assert_eq!(c.state.primary_emotion, EmotionType::Anxiety);

        let c = classify("hello", Some(&TypingMetadata::default()), at_hour(9));
        assert_eq!(c.scores, EmotionScores::default());
    }

    #[test]
    fn punctuation_heuristics() {
        let c = run("what? why? how?");
        assert!((c.scores.get(EmotionType::Confusion) - 0.2).abs() < EPS);
        assert_eq!(c.state.primary_emotion, EmotionType::Confusion);
        assert!(c.state.context.has_questions);

        let c = run("well...");
        assert!((c.scores.get(EmotionType::Sadness) - 0.1).abs() < EPS);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        // 0.4 sadness ("sad") against 0.4 anger ("mad")
        let c = run("sad mad");
        assert_eq!(c.state.primary_emotion, EmotionType::Sadness);
    }

    #[test]
    fn context_records_hour_and_word_count() {
        let c = classify("one two three?", None, at_hour(22));
        assert_eq!(c.state.context.time_of_day, 22);
        assert_eq!(c.state.context.word_count, 3);
        assert_eq!(c.state.timestamp, at_hour(22));
    }

    #[test]
    fn intensity_and_confidence_stay_in_range() {
        let c = run("hopeless desperate helpless powerless defeated broken, nothing ever ends");
        assert!(c.state.intensity <= 1.0 && c.state.intensity >= 0.0);
        assert!(c.state.confidence <= 1.0 && c.state.confidence >= 0.2);
        assert_eq!(c.state.crisis_level, CrisisLevel::High);
    }
}
