use crate::emotion::{EmotionType, EmotionalState};

pub const MAX_RECOMMENDATIONS: usize = 5;

const HIGH_INTENSITY: f64 = 0.7;

pub const GENERAL_RECOMMENDATIONS: [&str; 3] = [
    "💧 Stay hydrated - dehydration can affect mood",
    "😴 Ensure you're getting enough sleep",
    "🍎 Eat regular, balanced meals",
];

const ANXIETY_HIGH: [&str; 3] = [
    "🫁 Try the 4-7-8 breathing technique: Inhale for 4, hold for 7, exhale for 8",
    "🧘 Progressive muscle relaxation: Tense and release each muscle group",
    "🌊 Grounding exercise: Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste",
];

const ANXIETY_LOW: [&str; 3] = [
    "📝 Write down your worries to get them out of your head",
    "🚶 Take a short walk to change your environment",
    "☕ Practice mindful breathing with a warm drink",
];

const SADNESS_HIGH: [&str; 3] = [
    "🫂 Reach out to someone you trust - you don't have to be alone",
    "🎵 Listen to music that matches your mood, then gradually shift to uplifting songs",
    "🌅 Get some natural light - even 10 minutes can help",
];

const SADNESS_LOW: [&str; 3] = [
    "📚 Read something that brings you comfort",
    "🎨 Express your feelings through art, writing, or music",
    "🐕 Spend time with a pet or loved one",
];

const ANGER_HIGH: [&str; 3] = [
    "🚪 Step away from the situation for a few minutes before you act",
    "🧊 Splash cold water on your face to bring the intensity down",
    "💨 Take 10 slow, deep breaths before responding",
];

const ANGER_LOW: [&str; 3] = [
    "💨 Take 10 deep breaths before responding",
    "🏃 Physical activity can help release built-up energy",
    "📝 Write a letter (don't send it) to express your feelings",
];

/// Emotion-specific suggestions first, then the general tail, capped at
/// [`MAX_RECOMMENDATIONS`] by dropping from the end.
pub fn recommend(state: &EmotionalState) -> Vec<&'static str> {
    let high = state.intensity > HIGH_INTENSITY;
    let specific: &[&str] = match (state.primary_emotion, high) {
        (EmotionType::Anxiety, true) => &ANXIETY_HIGH,
        (EmotionType::Anxiety, false) => &ANXIETY_LOW,
        (EmotionType::Sadness, true) => &SADNESS_HIGH,
        (EmotionType::Sadness, false) => &SADNESS_LOW,
        (EmotionType::Anger, true) => &ANGER_HIGH,
        (EmotionType::Anger, false) => &ANGER_LOW,
        _ => &[],
    };

    specific
        .iter()
        .chain(GENERAL_RECOMMENDATIONS.iter())
        .copied()
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
