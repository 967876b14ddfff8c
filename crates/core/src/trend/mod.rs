use crate::emotion::{CrisisLevel, EmotionType, EmotionalState};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendError {
    #[error("no emotional data available")]
    NoHistory,
    #[error("no emotional data in the last {window_days} days")]
    NoData { window_days: u32 },
}

/// Signal behind the trend label.
///
/// `Intensity` averages intensity over every entry, so strong joy reads as
/// "concerning" just like strong despair. `ValenceAware` only counts the
/// intensity of negative emotions.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendMode {
    #[default]
    Intensity,
    ValenceAware,
}

impl FromStr for TrendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intensity" => Ok(TrendMode::Intensity),
            "valence" | "valence_aware" | "valence-aware" => Ok(TrendMode::ValenceAware),
            other => Err(other.to_owned()),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Improving,
    Stable,
    Concerning,
}

impl TrendLabel {
    fn from_mean(mean: f64) -> Self {
        if mean < 0.5 {
            TrendLabel::Improving
        } else if mean < 0.7 {
            TrendLabel::Stable
        } else {
            TrendLabel::Concerning
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrendLabel::Improving => "improving",
            TrendLabel::Stable => "stable",
            TrendLabel::Concerning => "concerning",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimePatterns {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
    pub night: usize,
}

impl TimePatterns {
    fn record(&mut self, hour: u32) {
        match hour {
            6..=11 => self.morning += 1,
            12..=17 => self.afternoon += 1,
            18..=23 => self.evening += 1,
            _ => self.night += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmotionFrequency {
    pub emotion: EmotionType,
    pub count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrendReport {
    pub total_emotions: usize,
    /// In order of first appearance within the window.
    pub emotion_distribution: Vec<EmotionFrequency>,
    /// Rounded to two decimals.
    pub average_intensity: f64,
    pub crisis_frequency: usize,
    pub time_patterns: TimePatterns,
    pub primary_emotion: EmotionType,
    pub trend: TrendLabel,
}

/// Aggregates the entries of `history` stamped within the last `window_days` of `now`.
pub fn analyze(
    history: &[EmotionalState],
    window_days: u32,
    now: DateTime<Local>,
    mode: TrendMode,
) -> Result<TrendReport, TrendError> {
    if history.is_empty() {
        return Err(TrendError::NoHistory);
    }

    // A window reaching past the representable range covers everything.
    let cutoff = now.checked_sub_signed(Duration::days(i64::from(window_days)));
    let recent: Vec<&EmotionalState> = history
        .iter()
        .filter(|s| cutoff.map_or(true, |c| s.timestamp > c))
        .collect();
    let Some(first) = recent.first() else {
        return Err(TrendError::NoData { window_days });
    };

    let mut distribution: Vec<EmotionFrequency> = Vec::new();
    let mut time_patterns = TimePatterns::default();
    let mut intensity_sum = 0.0;
    let mut distress_sum = 0.0;
    let mut crisis_frequency = 0;

    for state in &recent {
        match distribution
            .iter_mut()
            .find(|f| f.emotion == state.primary_emotion)
        {
            Some(f) => f.count += 1,
            None => distribution.push(EmotionFrequency {
                emotion: state.primary_emotion,
                count: 1,
            }),
        }
        // Hour as recorded when classified, not in the reader's zone.
        time_patterns.record(state.context.time_of_day);
        intensity_sum += state.intensity;
        if state.primary_emotion.is_negative() {
            distress_sum += state.intensity;
        }
        if state.crisis_level != CrisisLevel::None {
            crisis_frequency += 1;
        }
    }

    let total = recent.len() as f64;
    let mean_intensity = intensity_sum / total;
    let trend_signal = match mode {
        TrendMode::Intensity => mean_intensity,
        TrendMode::ValenceAware => distress_sum / total,
    };

    let mut primary = EmotionFrequency {
        emotion: first.primary_emotion,
        count: 0,
    };
    for f in &distribution {
        if f.count > primary.count {
            primary = *f;
        }
    }

    Ok(TrendReport {
        total_emotions: recent.len(),
        emotion_distribution: distribution,
        average_intensity: (mean_intensity * 100.0).round() / 100.0,
        crisis_frequency,
        time_patterns,
        primary_emotion: primary.emotion,
        trend: TrendLabel::from_mean(trend_signal),
    })
}
