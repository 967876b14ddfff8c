use super::{CrisisLevel, EmotionScores, EmotionType};

/// Maps per-emotion scores plus the explicit crisis-phrase flag to a severity.
/// Rules are evaluated top-down; the first match wins.
pub fn assess_crisis(scores: &EmotionScores, crisis_phrase_hit: bool) -> CrisisLevel {
    if crisis_phrase_hit {
        return CrisisLevel::Critical;
    }

    let hopelessness = scores.get(EmotionType::Hopelessness);
    let sadness = scores.get(EmotionType::Sadness);
    let anxiety = scores.get(EmotionType::Anxiety);
    let fear = scores.get(EmotionType::Fear);

    if hopelessness > 0.7 || sadness > 0.8 {
        CrisisLevel::High
    } else if anxiety > 0.8 || fear > 0.8 {
        CrisisLevel::Medium
    } else if sadness > 0.5 || anxiety > 0.5 || fear > 0.5 {
        CrisisLevel::Low
    } else {
        CrisisLevel::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(EmotionType, f64)]) -> EmotionScores {
        let mut s = EmotionScores::default();
        for (emotion, value) in entries {
            s.add(*emotion, *value);
        }
        s
    }

    #[test]
    fn explicit_phrase_is_always_critical() {
        assert_eq!(
            assess_crisis(&EmotionScores::default(), true),
            CrisisLevel::Critical
        );
    }

    #[test]
    fn rules_apply_in_order() {
        let s = scores(&[(EmotionType::Hopelessness, 1.0), (EmotionType::Anxiety, 2.0)]);
        assert_eq!(assess_crisis(&s, false), CrisisLevel::High);

        let s = scores(&[(EmotionType::Sadness, 0.9)]);
        assert_eq!(assess_crisis(&s, false), CrisisLevel::High);

        let s = scores(&[(EmotionType::Fear, 0.9), (EmotionType::Sadness, 0.6)]);
        assert_eq!(assess_crisis(&s, false), CrisisLevel::Medium);

        let s = scores(&[(EmotionType::Anxiety, 0.6)]);
        assert_eq!(assess_crisis(&s, false), CrisisLevel::Low);
    }

    #[test]
    fn thresholds_are_strict() {
        let s = scores(&[(EmotionType::Sadness, 0.5), (EmotionType::Hopelessness, 0.7)]);
        assert_eq!(assess_crisis(&s, false), CrisisLevel::None);

        let s = scores(&[(EmotionType::Anger, 3.0), (EmotionType::Joy, 3.0)]);
        assert_eq!(assess_crisis(&s, false), CrisisLevel::None);
    }
}
