use crate::emotion::EmotionType;

pub const MEDICAL_EMERGENCY_RESPONSE: &str = "🚨 MEDICAL EMERGENCY DETECTED

**IMMEDIATE ACTION REQUIRED:**
• **Call 911 or your local emergency number immediately**
• **Do not wait** - this requires professional medical attention

**While waiting for help:**
• Stay calm and follow emergency dispatcher instructions
• Keep the person comfortable and safe
• Do not give food, drink, or medication unless instructed

**Your safety is the top priority.** Please get medical help right away.

I'm here to support you, but this situation requires immediate professional medical attention.";

pub const CRISIS_RESPONSE: &str = "🚨 I'm very concerned about what you're sharing and I want to make sure you're safe.

**Immediate Support Available:**
• **Crisis Helpline**: 988 (Suicide & Crisis Lifeline)
• **Emergency**: 911
• **Crisis Text Line**: Text HOME to 741741

**You are not alone.** Your life has value and meaning, and there are people who want to help you.

Would you like me to help you connect with professional support, or would you prefer to talk with someone you trust right now?

**Remember**: This feeling won't last forever, and help is available 24/7.";

pub const HIGH_CRISIS_RESPONSE: &str = "⚠️ I can sense you're going through something really difficult right now.

**Your feelings are valid** and it's okay to not be okay. You don't have to face this alone.

**Support Options:**
• Talk to a trusted friend or family member
• Contact a mental health professional
• Call 988 for crisis support
• Text HOME to 741741 for crisis text support

Would you like to talk about what's happening, or would you prefer help finding professional support?

**You matter, and there are people who care about you.**";

pub const GENERIC_PROMPT: &str =
    "I'm here to listen and support you. Can you tell me more about what you're experiencing?";

pub const ACCIDENT_EMPATHY: &str =
    "I'm so sorry to hear about your accident. This must be really frightening and overwhelming.";

pub const ACCIDENT_JOY_CHECK_IN: &str = "I want to make sure you're okay. Even if you're trying to stay positive, it's completely normal to feel scared, sad, or anxious after an accident. How are you really feeling right now?";

pub const INVITATIONAL_PHRASE: &str = "Would you like to talk about";
pub const DIRECT_PHRASE: &str = "Tell me about";
pub const GENTLE_REASSURANCE: &str = "Take your time, I'm here to listen.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntensityBucket {
    Low,
    Medium,
    High,
}

impl IntensityBucket {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity < 0.3 {
            IntensityBucket::Low
        } else if intensity < 0.7 {
            IntensityBucket::Medium
        } else {
            IntensityBucket::High
        }
    }
}

/// Base reply for an emotion at a given intensity. `None` falls back to [`GENERIC_PROMPT`].
pub fn base_template(emotion: EmotionType, bucket: IntensityBucket) -> Option<&'static str> {
    use IntensityBucket::{High, Low, Medium};

    let [low, medium, high] = match emotion {
        EmotionType::Joy => [
            "I'm so glad you're feeling good! What's bringing you this joy?",
            "Your positive energy is wonderful! How can we build on this feeling?",
            "This is amazing! Your joy is contagious. What's making you feel so wonderful?",
        ],
        EmotionType::Sadness => [
            "I sense you're feeling a bit down. Would you like to talk about what's on your mind?",
            "I can feel the weight of your sadness. You don't have to carry this alone. What's happening?",
            "I'm here with you in this difficult moment. Your feelings are valid and important. Can you tell me more?",
        ],
        EmotionType::Anxiety => [
            "I notice you might be feeling a bit anxious. Let's take a moment to breathe together.",
            "Your anxiety is real and I'm here to help you through it. What's making you feel this way?",
            "I can see you're experiencing intense anxiety. Let's focus on getting you grounded. Can you tell me what you're feeling?",
        ],
        EmotionType::Fear => [
            "It's okay to feel afraid. What's making you feel this way?",
            "Fear can be overwhelming. I'm here to help you work through it. What's happening?",
            "I can sense your fear is intense right now. You're safe here. Let's work through this together.",
        ],
        EmotionType::Anger => [
            "I can see you're feeling frustrated. What's been bothering you?",
            "Your anger is understandable. It's okay to feel this way. What's been happening?",
            "I can feel the intensity of your anger. You have every right to feel this way. What triggered this?",
        ],
        EmotionType::Hopelessness => [
            "I hear you're feeling discouraged. Let's explore what's making you feel this way.",
            "I can feel the weight of your hopelessness. You're not alone in this. What's happening?",
            "I'm very concerned about how you're feeling. Your life has value and meaning. Can we talk about getting you some immediate support?",
        ],
        EmotionType::Calm => [
            "It's wonderful that you're feeling peaceful. How are you maintaining this sense of calm?",
            "Your calm energy is really grounding. What's helping you stay centered?",
            "This sense of peace you're experiencing is beautiful. How can we nurture this feeling?",
        ],
        EmotionType::Excitement => [
            "I can sense your enthusiasm! What's got you feeling excited?",
            "Your excitement is contagious! Tell me more about what's bringing you this energy!",
            "Wow, you're absolutely buzzing with excitement! I'd love to hear all about it!",
        ],
        EmotionType::Gratitude => [
            "It's beautiful that you're feeling grateful. What are you thankful for today?",
            "Your gratitude is inspiring! What's bringing you this sense of appreciation?",
            "Your gratitude is radiating! It's wonderful to see you recognizing the good in your life!",
        ],
        EmotionType::Confusion => return None,
    };

    Some(match bucket {
        Low => low,
        Medium => medium,
        High => high,
    })
}

pub fn validation(emotion: EmotionType) -> Option<&'static str> {
    match emotion {
        EmotionType::Sadness => {
            Some("It's completely normal to feel this way, and your feelings are valid.")
        }
        EmotionType::Anxiety => {
            Some("Anxiety can be really challenging, and it's okay to feel overwhelmed.")
        }
        EmotionType::Fear => Some("Fear is a natural response, and it's okay to feel afraid."),
        EmotionType::Anger => Some("Your anger is understandable, and it's okay to feel this way."),
        EmotionType::Hopelessness => {
            Some("I hear you, and your feelings matter. You're not alone in this.")
        }
        EmotionType::Joy
        | EmotionType::Calm
        | EmotionType::Excitement
        | EmotionType::Confusion
        | EmotionType::Gratitude => None,
    }
}

pub fn follow_up(emotion: EmotionType) -> Option<&'static str> {
    match emotion {
        EmotionType::Sadness => Some("What do you think might help you feel a bit better right now?"),
        EmotionType::Anxiety => Some("Can you identify what's making you feel most anxious?"),
        EmotionType::Fear => Some("What would make you feel safer in this moment?"),
        EmotionType::Anger => Some("What do you think triggered this feeling?"),
        EmotionType::Hopelessness => {
            Some("What would help you feel a little more hopeful right now?")
        }
        EmotionType::Joy
        | EmotionType::Calm
        | EmotionType::Excitement
        | EmotionType::Confusion
        | EmotionType::Gratitude => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_split_at_documented_thresholds() {
        assert_eq!(IntensityBucket::from_intensity(0.0), IntensityBucket::Low);
        assert_eq!(IntensityBucket::from_intensity(0.29), IntensityBucket::Low);
        assert_eq!(IntensityBucket::from_intensity(0.3), IntensityBucket::Medium);
        assert_eq!(IntensityBucket::from_intensity(0.69), IntensityBucket::Medium);
        assert_eq!(IntensityBucket::from_intensity(0.7), IntensityBucket::High);
    }

    #[test]
    fn confusion_has_no_template() {
        assert_eq!(base_template(EmotionType::Confusion, IntensityBucket::High), None);
        assert!(base_template(EmotionType::Gratitude, IntensityBucket::Low).is_some());
    }
}
