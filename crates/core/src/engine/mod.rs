mod snapshot;

use crate::config::EngineConfig;
use crate::emotion::{classify, EmotionalState, TypingMetadata};
use crate::profile::{ProfileUpdate, UserProfile};
use crate::respond::{recommend, respond};
use crate::trend::{analyze, TrendError, TrendReport};
use crate::util::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use snapshot::{Snapshot, SnapshotError};

const LOG_TARGET: &str = "engine";
const CRISIS_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub total_states: usize,
    pub today_states: usize,
    pub latest: Option<EmotionalState>,
}

/// Per-session emotion engine. Holds an append-only history of classified
/// states, the daily crisis log and an optional communication profile.
///
/// Not internally synchronised: construct one per user session and keep
/// mutation on a single thread.
#[derive(Debug)]
pub struct EmotionEngine<C: Clock = SystemClock> {
    config: EngineConfig,
    clock: C,
    history: Vec<EmotionalState>,
    crisis_patterns: BTreeMap<String, u32>,
    profile: Option<UserProfile>,
}

impl EmotionEngine<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for EmotionEngine<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> EmotionEngine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            history: Vec::new(),
            crisis_patterns: BTreeMap::new(),
            profile: None,
        }
    }

    pub fn from_snapshot(snapshot: Snapshot, config: EngineConfig, clock: C) -> Self {
        tracing::debug!(
            target: LOG_TARGET,
            states = snapshot.history.len(),
            has_profile = snapshot.profile.is_some(),
            "engine restored from snapshot"
        );
        Self {
            config,
            clock,
            history: snapshot.history,
            crisis_patterns: snapshot.crisis_patterns,
            profile: snapshot.profile,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Classifies `text`, records the state and returns a copy of it.
    pub fn classify(&mut self, text: &str, typing: Option<&TypingMetadata>) -> EmotionalState {
        let classification = classify(text, typing, self.clock.now());
        let state = classification.state;

        tracing::debug!(
            target: LOG_TARGET,
            emotion = %state.primary_emotion,
            intensity = state.intensity,
            crisis_level = %state.crisis_level,
            "utterance classified"
        );
        if state.context.medical_emergency {
            tracing::warn!(target: LOG_TARGET, "medical emergency language detected");
        }

        if state.crisis_level.is_severe() {
            tracing::warn!(target: LOG_TARGET, crisis_level = %state.crisis_level, "crisis detected");
            let day = state.timestamp.format(CRISIS_DATE_FORMAT).to_string();
            *self.crisis_patterns.entry(day).or_insert(0) += 1;
        }

        self.history.push(state.clone());
        state
    }

    /// Reply for `state`, personalised with this session's profile.
    pub fn respond(&self, state: &EmotionalState, raw_input: &str) -> String {
        respond(state, raw_input, self.profile.as_ref())
    }

    pub fn recommend(&self, state: &EmotionalState) -> Vec<&'static str> {
        recommend(state)
    }

    pub fn analyze(&self, window_days: u32) -> Result<TrendReport, TrendError> {
        analyze(
            &self.history,
            window_days,
            self.clock.now(),
            self.config.trend_mode,
        )
    }

    /// [`Self::analyze`] over the configured default window.
    pub fn analyze_default(&self) -> Result<TrendReport, TrendError> {
        self.analyze(self.config.default_window_days)
    }

    /// Creates the profile with defaults on first use, then merges `update` into it.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        let now = self.clock.now();
        self.profile
            .get_or_insert_with(|| UserProfile::new(now))
            .apply(update);
        tracing::debug!(target: LOG_TARGET, "profile updated");
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn history(&self) -> &[EmotionalState] {
        &self.history
    }

    pub fn crisis_patterns(&self) -> &BTreeMap<String, u32> {
        &self.crisis_patterns
    }

    pub fn latest(&self) -> Option<&EmotionalState> {
        self.history.last()
    }

    pub fn summary(&self) -> SessionSummary {
        let today = self.clock.now().date_naive();
        SessionSummary {
            total_states: self.history.len(),
            today_states: self
                .history
                .iter()
                .filter(|s| s.timestamp.date_naive() == today)
                .count(),
            latest: self.latest().cloned(),
        }
    }

    pub fn export(&self) -> Snapshot {
        Snapshot {
            history: self.history.clone(),
            crisis_patterns: self.crisis_patterns.clone(),
            profile: self.profile.clone(),
            export_timestamp: self.clock.now(),
        }
    }
}
