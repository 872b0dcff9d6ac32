use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered parent account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), email: email.into(), created_at: Utc::now() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    PreferNotToSay,
}

impl std::str::FromStr for Gender {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "prefer_not_to_say" => Ok(Self::PreferNotToSay),
            other => Err(crate::Error::invalid(format!("unknown gender: {}", other))),
        }
    }
}

/// The child the learning plan is built for.
///
/// Age is never stored; it is derived from `birth_date` whenever needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProfile {
    pub id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ChildProfile {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, gender: Gender) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), birth_date, gender, avatar_url: None }
    }

    /// Whole years between the birth date and `today`, one less if this
    /// year's birthday has not happened yet. Never negative.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut age = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }

    pub fn age_today(&self) -> u32 {
        self.age_on(Utc::now().date_naive())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    Speech,
    Attention,
    Logic,
    Emotion,
}

impl GameCategory {
    pub const ALL: [GameCategory; 4] =
        [GameCategory::Speech, GameCategory::Attention, GameCategory::Logic, GameCategory::Emotion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Speech => "speech",
            Self::Attention => "attention",
            Self::Logic => "logic",
            Self::Emotion => "emotion",
        }
    }
}

impl std::fmt::Display for GameCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GameCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        GameCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::Error::invalid(format!("unknown game category: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Inclusive `[min, max]` pair used for age ranges and plan cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: u32,
    pub max: u32,
}

impl MinMax {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Static catalog entry for one mini-game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: GameCategory,
    pub age_range: MinMax,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub icon: String,
}

impl Game {
    pub fn suits_age(&self, age: u32) -> bool {
        self.age_range.contains(age)
    }
}

/// Recommendation bundle produced from a completed survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub recommended_games: Vec<Game>,
    pub session_duration: MinMax,
    pub sessions_per_week: MinMax,
    pub goals: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl LearningPlan {
    pub fn recommends(&self, game_id: &str) -> bool {
        self.recommended_games.iter().any(|g| g.id == game_id)
    }
}

/// One recorded playthrough. The session log is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: Uuid,
    pub game_id: String,
    pub child_id: Option<Uuid>,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub difficulty_level: u8,
}

impl GameSession {
    /// Share of correct answers in percent. Zero when no questions were asked.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.total_questions as f64 * 100.0
    }

    /// Accuracy rounded to a whole percent, as shown on the result screen.
    pub fn accuracy_percent(&self) -> u32 {
        self.accuracy().round() as u32
    }

    pub fn stars(&self) -> u8 {
        stars_for(self.accuracy_percent() as f64)
    }

    /// Elapsed minutes rounded up; an unfinished session is measured to `now`.
    pub fn duration_minutes(&self, now: DateTime<Utc>) -> u32 {
        let end = self.ended_at.unwrap_or(now);
        minutes_rounded_up(self.started_at, end)
    }
}

/// Star rating for an accuracy percentage.
pub fn stars_for(accuracy: f64) -> u8 {
    if accuracy >= 90.0 {
        3
    } else if accuracy >= 60.0 {
        2
    } else {
        1
    }
}

pub fn minutes_rounded_up(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let millis = (end - start).num_milliseconds().max(0);
    ((millis + 59_999) / 60_000) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SkillProgress {
    pub speech: f64,
    pub attention: f64,
    pub logic: f64,
    pub emotion: f64,
}

impl SkillProgress {
    pub fn get(&self, category: GameCategory) -> f64 {
        match category {
            GameCategory::Speech => self.speech,
            GameCategory::Attention => self.attention,
            GameCategory::Logic => self.logic,
            GameCategory::Emotion => self.emotion,
        }
    }

    /// Stores a percentage for one skill, clamped to 0..=100.
    pub fn set(&mut self, category: GameCategory, value: f64) {
        let value = value.clamp(0.0, 100.0);
        match category {
            GameCategory::Speech => self.speech = value,
            GameCategory::Attention => self.attention = value,
            GameCategory::Logic => self.logic = value,
            GameCategory::Emotion => self.emotion = value,
        }
    }
}

/// Completed games folded into each skill's running mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SkillGames {
    pub speech: u32,
    pub attention: u32,
    pub logic: u32,
    pub emotion: u32,
}

impl SkillGames {
    pub fn get(&self, category: GameCategory) -> u32 {
        match category {
            GameCategory::Speech => self.speech,
            GameCategory::Attention => self.attention,
            GameCategory::Logic => self.logic,
            GameCategory::Emotion => self.emotion,
        }
    }

    pub fn increment(&mut self, category: GameCategory) {
        let count = match category {
            GameCategory::Speech => &mut self.speech,
            GameCategory::Attention => &mut self.attention,
            GameCategory::Logic => &mut self.logic,
            GameCategory::Emotion => &mut self.emotion,
        };
        *count += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub day: Weekday,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_games_played: u32,
    pub total_time_minutes: u32,
    pub average_accuracy: f64,
    pub skill_progress: SkillProgress,
    #[serde(default)]
    pub skill_games: SkillGames,
    pub weekly_games: Vec<DayActivity>,
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl Default for ProgressStats {
    fn default() -> Self {
        Self {
            total_games_played: 0,
            total_time_minutes: 0,
            average_accuracy: 0.0,
            skill_progress: SkillProgress::default(),
            skill_games: SkillGames::default(),
            weekly_games: WEEK.into_iter().map(|day| DayActivity { day, count: 0 }).collect(),
        }
    }
}

impl ProgressStats {
    pub fn games_on(&self, day: Weekday) -> u32 {
        self.weekly_games.iter().find(|d| d.day == day).map(|d| d.count).unwrap_or(0)
    }

    /// Rebuilds the histogram as exactly one entry per day, Mon..Sun,
    /// keeping the counts of days already present.
    pub fn normalize_week(&mut self) {
        let counts: Vec<DayActivity> =
            WEEK.into_iter().map(|day| DayActivity { day, count: self.games_on(day) }).collect();
        self.weekly_games = counts;
    }

    /// Adds one game to the bucket for `day`.
    pub fn count_game_on(&mut self, day: Weekday) {
        if !self.weekly_games.iter().any(|d| d.day == day) {
            self.normalize_week();
        }
        if let Some(entry) = self.weekly_games.iter_mut().find(|d| d.day == day) {
            entry.count += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTimeSettings {
    pub enabled: bool,
    pub max_minutes_per_day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_end_time: Option<String>,
}

impl Default for ScreenTimeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_minutes_per_day: 20,
            allowed_start_time: None,
            allowed_end_time: None,
        }
    }
}

impl ScreenTimeSettings {
    pub const MIN_LIMIT_MINUTES: u32 = 5;
    pub const MAX_LIMIT_MINUTES: u32 = 60;
    pub const LIMIT_STEP_MINUTES: u32 = 5;

    /// Sets the daily cap, snapped to the 5..=60 minute slider in steps of 5.
    pub fn set_max_minutes_per_day(&mut self, minutes: u32) {
        let step = Self::LIMIT_STEP_MINUTES;
        let minutes = minutes.min(Self::MAX_LIMIT_MINUTES);
        let snapped = (minutes + step / 2) / step * step;
        self.max_minutes_per_day = snapped.clamp(Self::MIN_LIMIT_MINUTES, Self::MAX_LIMIT_MINUTES);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub screen_time: ScreenTimeSettings,
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
    pub progress_notifications: bool,
    pub weekly_report: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            screen_time: ScreenTimeSettings::default(),
            sound_enabled: false,
            vibration_enabled: true,
            progress_notifications: true,
            weekly_report: true,
        }
    }
}
