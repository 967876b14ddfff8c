use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CULTURAL_BACKGROUND: &str = "general";

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    #[default]
    Compassionate,
    Direct,
    Gentle,
    Professional,
}

impl CommunicationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CommunicationStyle::Compassionate => "compassionate",
            CommunicationStyle::Direct => "direct",
            CommunicationStyle::Gentle => "gentle",
            CommunicationStyle::Professional => "professional",
        }
    }
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown communication style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for CommunicationStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compassionate" => Ok(CommunicationStyle::Compassionate),
            "direct" => Ok(CommunicationStyle::Direct),
            "gentle" => Ok(CommunicationStyle::Gentle),
            "professional" => Ok(CommunicationStyle::Professional),
            other => Err(UnknownStyle(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub communication_style: CommunicationStyle,
    pub cultural_background: String,
    pub emotional_triggers: Vec<String>,
    pub preferred_responses: BTreeMap<String, String>,
    pub crisis_contacts: Vec<String>,
    pub last_crisis_check: DateTime<Local>,
}

impl UserProfile {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            communication_style: CommunicationStyle::default(),
            cultural_background: DEFAULT_CULTURAL_BACKGROUND.to_owned(),
            emotional_triggers: Vec::new(),
            preferred_responses: BTreeMap::new(),
            crisis_contacts: Vec::new(),
            last_crisis_check: now,
        }
    }

    /// Overwrites only the fields present in `update`.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            communication_style,
            cultural_background,
            emotional_triggers,
            preferred_responses,
            crisis_contacts,
            last_crisis_check,
        } = update;

        if let Some(v) = communication_style {
            self.communication_style = v;
        }
        if let Some(v) = cultural_background {
            self.cultural_background = v;
        }
        if let Some(v) = emotional_triggers {
            self.emotional_triggers = v;
        }
        if let Some(v) = preferred_responses {
            self.preferred_responses = v;
        }
        if let Some(v) = crisis_contacts {
            self.crisis_contacts = v;
        }
        if let Some(v) = last_crisis_check {
            self.last_crisis_check = v;
        }
    }
}

/// Partial profile update. Unknown keys are ignored when deserialising.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileUpdate {
    pub communication_style: Option<CommunicationStyle>,
    pub cultural_background: Option<String>,
    pub emotional_triggers: Option<Vec<String>>,
    pub preferred_responses: Option<BTreeMap<String, String>>,
    pub crisis_contacts: Option<Vec<String>>,
    pub last_crisis_check: Option<DateTime<Local>>,
}

impl ProfileUpdate {
    pub fn style(mut self, style: CommunicationStyle) -> Self {
        self.communication_style = Some(style);
        self
    }

    pub fn cultural_background<S: Into<String>>(mut self, value: S) -> Self {
        self.cultural_background = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn new_profile_has_documented_defaults() {
        let p = UserProfile::new(noon());
        assert_eq!(p.communication_style, CommunicationStyle::Compassionate);
        assert_eq!(p.cultural_background, "general");
        assert!(p.emotional_triggers.is_empty());
        assert!(p.preferred_responses.is_empty());
        assert!(p.crisis_contacts.is_empty());
        assert_eq!(p.last_crisis_check, noon());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut p = UserProfile::new(noon());
        p.apply(ProfileUpdate::default().cultural_background("eastern"));
        p.apply(ProfileUpdate::default().style(CommunicationStyle::Direct));
        assert_eq!(p.cultural_background, "eastern");
        assert_eq!(p.communication_style, CommunicationStyle::Direct);
        assert_eq!(p.last_crisis_check, noon());
    }

    #[test]
    fn update_deserializes_leniently() {
        let update: ProfileUpdate = serde_json::from_value(serde_json::json!({
            "communication_style": "gentle",
            "crisis_contacts": ["Sam"],
            "favourite_colour": "green",
        }))
        .expect("valid update");
        assert_eq!(update.communication_style, Some(CommunicationStyle::Gentle));
        assert_eq!(update.crisis_contacts, Some(vec!["Sam".to_owned()]));
        assert_eq!(update.cultural_background, None);
    }

    #[test]
    fn style_parses_case_insensitively() {
        assert_eq!(
            "Direct".parse::<CommunicationStyle>(),
            Ok(CommunicationStyle::Direct)
        );
        assert!("blunt".parse::<CommunicationStyle>().is_err());
    }
}
