mod templates;
mod wellness;

use crate::emotion::lexicon::{contains_any, RESPONSE_ACCIDENT_WORDS};
use crate::emotion::{CrisisLevel, EmotionType, EmotionalState};
use crate::profile::{CommunicationStyle, UserProfile};

pub use templates::{
    base_template, follow_up, validation, IntensityBucket, CRISIS_RESPONSE, GENERIC_PROMPT,
    HIGH_CRISIS_RESPONSE, MEDICAL_EMERGENCY_RESPONSE,
};
pub use wellness::{recommend, GENERAL_RECOMMENDATIONS, MAX_RECOMMENDATIONS};

use templates::{
    ACCIDENT_EMPATHY, ACCIDENT_JOY_CHECK_IN, DIRECT_PHRASE, GENTLE_REASSURANCE,
    INVITATIONAL_PHRASE,
};

const LOG_TARGET: &str = "respond";

/// Builds the reply for a classified utterance.
///
/// The safety scripts are guard clauses ahead of every template and profile
/// step: a medical emergency beats everything, then a critical crisis, then a
/// high crisis. Nothing a profile carries can reach those branches.
pub fn respond(state: &EmotionalState, raw_input: &str, profile: Option<&UserProfile>) -> String {
    if state.context.medical_emergency {
        tracing::warn!(target: LOG_TARGET, "medical emergency script returned");
        return MEDICAL_EMERGENCY_RESPONSE.to_owned();
    }
    match state.crisis_level {
        CrisisLevel::Critical => {
            tracing::warn!(target: LOG_TARGET, "crisis intervention script returned");
            return CRISIS_RESPONSE.to_owned();
        }
        CrisisLevel::High => {
            tracing::warn!(target: LOG_TARGET, "high crisis support script returned");
            return HIGH_CRISIS_RESPONSE.to_owned();
        }
        CrisisLevel::None | CrisisLevel::Low | CrisisLevel::Medium => {}
    }

    let emotion = state.primary_emotion;
    let bucket = IntensityBucket::from_intensity(state.intensity);
    let mut base = base_template(emotion, bucket)
        .unwrap_or(GENERIC_PROMPT)
        .to_owned();

    if contains_any(&raw_input.to_lowercase(), RESPONSE_ACCIDENT_WORDS) {
        match emotion {
            EmotionType::Fear | EmotionType::Sadness | EmotionType::Anxiety => {
                base = format!("{ACCIDENT_EMPATHY} {base}");
            }
            // Upbeat wording after an accident can be masking distress.
            EmotionType::Joy => base = ACCIDENT_JOY_CHECK_IN.to_owned(),
            _ => {}
        }
    }

    if let Some(profile) = profile {
        match profile.communication_style {
            CommunicationStyle::Direct => {
                base = base.replace(INVITATIONAL_PHRASE, DIRECT_PHRASE);
            }
            CommunicationStyle::Gentle => {
                base.push(' ');
                base.push_str(GENTLE_REASSURANCE);
            }
            CommunicationStyle::Compassionate | CommunicationStyle::Professional => {}
        }
    }

    let mut response = match validation(emotion) {
        Some(line) => format!("{line} {base}"),
        None => base,
    };
    if let Some(question) = follow_up(emotion) {
        response.push_str("\n\n");
        response.push_str(question);
    }

    tracing::debug!(target: LOG_TARGET, %emotion, bucket = ?bucket, "adaptive response built");
    response.trim().to_owned()
}
