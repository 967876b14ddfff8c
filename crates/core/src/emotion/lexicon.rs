//! Static trigger vocabularies. Matching is lower-case substring containment,
//! so short entries such as `"end"` also fire inside longer words.

use super::EmotionType;

pub struct EmotionLexicon {
    pub emotion: EmotionType,
    /// Added to the emotion's score once per matching entry.
    pub weight: f64,
    pub words: &'static [&'static str],
}

pub const EMOTION_LEXICONS: &[EmotionLexicon] = &[
    EmotionLexicon {
        emotion: EmotionType::Joy,
        weight: 0.3,
        words: &[
            "happy",
            "excited",
            "great",
            "wonderful",
            "amazing",
            "blessed",
            "grateful",
            "joy",
            "smile",
            "laugh",
            "like",
            "love",
            "enjoy",
            "fun",
            "good",
            "awesome",
            "fantastic",
        ],
    },
    EmotionLexicon {
        emotion: EmotionType::Sadness,
        weight: 0.4,
        words: &[
            "sad",
            "depressed",
            "down",
            "blue",
            "miserable",
            "hopeless",
            "lonely",
            "empty",
            "worthless",
            "unhappy",
            "upset",
            "disappointed",
            "hurt",
            "pain",
            "suffering",
            "loss",
            "grief",
            "tears",
            "crying",
        ],
    },
    EmotionLexicon {
        emotion: EmotionType::Anxiety,
        weight: 0.4,
        words: &[
            "anxious",
            "worried",
            "nervous",
            "stressed",
            "overwhelmed",
            "panic",
            "fear",
            "scared",
            "terrified",
            "concerned",
            "uneasy",
            "restless",
            "tense",
            "jittery",
            "on edge",
        ],
    },
    EmotionLexicon {
        emotion: EmotionType::Fear,
        weight: 0.5,
        words: &[
            "afraid",
            "frightened",
            "terrified",
            "scared",
            "horrified",
            "alarmed",
            "startled",
            "shocked",
            "accident",
            "crash",
            "injury",
            "injured",
            "injuring",
            "hurt",
            "hurting",
            "pain",
            "painful",
            "emergency",
            "danger",
            "threat",
            "attack",
            "violence",
            "death",
            "dying",
        ],
    },
    EmotionLexicon {
        emotion: EmotionType::Anger,
        weight: 0.4,
        words: &[
            "angry",
            "mad",
            "furious",
            "rage",
            "irritated",
            "annoyed",
            "frustrated",
            "outraged",
            "hate",
            "disgusted",
            "bitter",
            "resentful",
            "hostile",
            "aggressive",
        ],
    },
    EmotionLexicon {
        emotion: EmotionType::Hopelessness,
        weight: 0.5,
        words: &[
            "hopeless",
            "desperate",
            "helpless",
            "powerless",
            "defeated",
            "broken",
            "destroyed",
            "ruined",
            "finished",
            "end",
            "give up",
            "can't",
            "impossible",
            "never",
            "always",
            "nothing",
            "everything",
        ],
    },
];

/// Self-harm and suicidal ideation language. Any hit forces a critical crisis level.
pub const CRISIS_PHRASES: &[&str] = &[
    "kill myself",
    "want to die",
    "end it all",
    "no point",
    "give up",
    "can't take it",
    "suicide",
    "self harm",
    "cut myself",
    "overdose",
    "end my life",
    "better off dead",
];

pub const MEDICAL_EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "heart attack",
    "stroke",
    "unconscious",
    "not breathing",
    "severe bleeding",
    "broken bone",
    "head injury",
    "concussion",
    "allergic reaction",
    "anaphylaxis",
    "seizure",
    "overdose",
    "suicide attempt",
    "self harm",
    "cut myself",
    "bleeding",
];

/// Accident and injury vocabulary used by the classifier's contextual boost.
pub const ACCIDENT_WORDS: &[&str] = &[
    "accident",
    "crash",
    "injury",
    "injured",
    "injuring",
    "hurt",
    "hurting",
    "pain",
    "painful",
    "emergency",
    "hospital",
    "doctor",
    "ambulance",
];

/// Narrower accident vocabulary the response generator checks in the raw input.
pub const RESPONSE_ACCIDENT_WORDS: &[&str] = &[
    "accident",
    "crash",
    "injury",
    "hurt",
    "pain",
    "emergency",
    "hospital",
    "doctor",
    "ambulance",
];

pub const NEGATION_WORDS: &[&str] = &[
    "not",
    "no",
    "never",
    "can't",
    "won't",
    "don't",
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disaster",
];

pub const PAST_TENSE_WORDS: &[&str] = &[
    "got",
    "had",
    "was",
    "were",
    "been",
    "did",
    "went",
    "came",
    "fell",
    "broke",
    "hurt",
    "injured",
    "accident",
    "crash",
];

pub const TIME_REFERENCES: &[&str] = &[
    "yesterday",
    "last week",
    "last month",
    "last year",
    "earlier",
    "before",
    "recently",
];

/// Negative-experience vocabulary on top of [`ACCIDENT_WORDS`].
pub const NEGATIVE_EXPERIENCE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disaster",
    "problem",
    "issue",
    "trouble",
];

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

pub fn count_matches(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|n| haystack.contains(*n)).count()
}
