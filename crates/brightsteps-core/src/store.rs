// Application state container
//
// One owned record holding everything the app knows. Components borrow the
// part they work on (`navigator()`, `tracker()`); nothing is global.

use brightsteps_common::{
    time_window::parse_time, AppSettings, ChildProfile, GameSession, LearningPlan, ProgressStats,
    Result, SurveyAnswers, SurveyKey, User,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    navigator::{NavigationState, Navigator},
    tracker::{Tracker, TrackerState},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub navigation: NavigationState,
    pub user: Option<User>,
    pub child_profile: Option<ChildProfile>,
    pub survey_answers: SurveyAnswers,
    pub learning_plan: Option<LearningPlan>,
    pub settings: AppSettings,
    pub tracker: TrackerState,
}

/// The subset of [`AppState`] that survives a restart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub user: Option<User>,
    pub child_profile: Option<ChildProfile>,
    pub survey_answers: SurveyAnswers,
    pub learning_plan: Option<LearningPlan>,
    pub settings: AppSettings,
    pub progress_stats: ProgressStats,
    pub game_sessions: Vec<GameSession>,
}

/// A single settings edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    ScreenTimeEnabled(bool),
    MaxMinutesPerDay(u32),
    /// Both ends as `HH:MM`, or `None` to allow any time of day.
    AllowedWindow(Option<(String, String)>),
    SoundEnabled(bool),
    VibrationEnabled(bool),
    ProgressNotifications(bool),
    WeeklyReport(bool),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigator(&mut self) -> Navigator<'_> {
        Navigator::new(&mut self.navigation)
    }

    pub fn tracker(&mut self) -> Tracker<'_> {
        Tracker::new(&mut self.tracker)
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub fn set_child_profile(&mut self, profile: Option<ChildProfile>) {
        self.child_profile = profile;
    }

    pub fn answer_survey(&mut self, key: SurveyKey, value: &str) -> Result<()> {
        self.survey_answers.answer(key, value)
    }

    pub fn set_learning_plan(&mut self, plan: Option<LearningPlan>) {
        self.learning_plan = plan;
    }

    pub fn update_setting(&mut self, change: SettingChange) -> Result<()> {
        let settings = &mut self.settings;
        match change {
            SettingChange::ScreenTimeEnabled(enabled) => settings.screen_time.enabled = enabled,
            SettingChange::MaxMinutesPerDay(minutes) => {
                settings.screen_time.set_max_minutes_per_day(minutes)
            }
            SettingChange::AllowedWindow(Some((start, end))) => {
                parse_time(&start)?;
                parse_time(&end)?;
                settings.screen_time.allowed_start_time = Some(start);
                settings.screen_time.allowed_end_time = Some(end);
            }
            SettingChange::AllowedWindow(None) => {
                settings.screen_time.allowed_start_time = None;
                settings.screen_time.allowed_end_time = None;
            }
            SettingChange::SoundEnabled(on) => settings.sound_enabled = on,
            SettingChange::VibrationEnabled(on) => settings.vibration_enabled = on,
            SettingChange::ProgressNotifications(on) => settings.progress_notifications = on,
            SettingChange::WeeklyReport(on) => settings.weekly_report = on,
        }
        Ok(())
    }

    /// Child's age on `today`, if a profile exists.
    pub fn child_age(&self, today: NaiveDate) -> Option<u32> {
        self.child_profile.as_ref().map(|p| p.age_on(today))
    }

    /// Wipes every field back to its default.
    pub fn reset(&mut self) {
        info!("Resetting application state");
        *self = Self::default();
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            user: self.user.clone(),
            child_profile: self.child_profile.clone(),
            survey_answers: self.survey_answers.clone(),
            learning_plan: self.learning_plan.clone(),
            settings: self.settings.clone(),
            progress_stats: self.tracker.progress_stats.clone(),
            game_sessions: self.tracker.game_sessions.clone(),
        }
    }

    /// Rebuilds state from a snapshot; transient fields start at defaults.
    pub fn from_persisted(mut persisted: PersistedState) -> Self {
        persisted.progress_stats.normalize_week();
        Self {
            navigation: NavigationState::default(),
            user: persisted.user,
            child_profile: persisted.child_profile,
            survey_answers: persisted.survey_answers,
            learning_plan: persisted.learning_plan,
            settings: persisted.settings,
            tracker: TrackerState {
                progress_stats: persisted.progress_stats,
                game_sessions: persisted.game_sessions,
                today_screen_time: 0,
            },
        }
    }
}
