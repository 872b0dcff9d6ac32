use brightsteps_common::{minutes_rounded_up, stars_for, GameSession};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Questions asked in one playthrough.
pub const QUESTIONS_PER_GAME: u32 = 3;

/// An in-progress playthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRun {
    pub game_id: String,
    pub started_at: DateTime<Utc>,
    pub total_questions: u32,
    pub answered: u32,
    pub correct: u32,
    pub streak: u32,
}

impl GameRun {
    pub fn new(game_id: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            game_id: game_id.into(),
            started_at,
            total_questions: QUESTIONS_PER_GAME,
            answered: 0,
            correct: 0,
            streak: 0,
        }
    }

    /// Scores one answer. Answers past the last question are ignored.
    pub fn answer(&mut self, correct: bool) {
        if self.is_finished() {
            return;
        }
        self.answered += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.answered >= self.total_questions
    }

    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> u32 {
        minutes_rounded_up(self.started_at, now)
    }

    pub fn into_session(self, child_id: Option<Uuid>, ended_at: DateTime<Utc>) -> GameSession {
        GameSession {
            id: Uuid::new_v4(),
            game_id: self.game_id,
            child_id,
            started_at: self.started_at,
            ended_at: Some(ended_at),
            correct_answers: self.correct,
            total_questions: self.total_questions,
            difficulty_level: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Excellent,
    Great,
    Good,
    KeepTrying,
}

impl Feedback {
    pub fn for_accuracy(accuracy: u32) -> Self {
        match accuracy {
            90.. => Self::Excellent,
            70..=89 => Self::Great,
            50..=69 => Self::Good,
            _ => Self::KeepTrying,
        }
    }
}

/// What the result screen shows for a finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub game_id: String,
    pub accuracy: u32,
    pub stars: u8,
    pub feedback: Feedback,
    pub duration_minutes: u32,
    pub correct_answers: u32,
    pub total_questions: u32,
}

impl ResultSummary {
    pub fn from_session(session: &GameSession, now: DateTime<Utc>) -> Self {
        let accuracy = session.accuracy_percent();
        Self {
            game_id: session.game_id.clone(),
            accuracy,
            stars: stars_for(accuracy as f64),
            feedback: Feedback::for_accuracy(accuracy),
            duration_minutes: session.duration_minutes(now),
            correct_answers: session.correct_answers,
            total_questions: session.total_questions,
        }
    }
}
