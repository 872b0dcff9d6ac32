// Session and progress tracking
//
// Owns the append-only session log, the aggregate progress stats, and
// today's screen-time counter.

use brightsteps_common::{catalog, GameSession, ProgressStats, SkillProgress};
use chrono::{Datelike, Local};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerState {
    pub progress_stats: ProgressStats,
    pub game_sessions: Vec<GameSession>,
    /// Minutes played today. Transient; rolled over by an outside scheduler.
    pub today_screen_time: u32,
}

/// Field-by-field replacement for [`ProgressStats`]. `None` leaves a field
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressUpdate {
    pub total_games_played: Option<u32>,
    pub total_time_minutes: Option<u32>,
    pub average_accuracy: Option<f64>,
    pub skill_progress: Option<SkillProgress>,
}

pub struct Tracker<'a> {
    state: &'a mut TrackerState,
}

impl<'a> Tracker<'a> {
    pub fn new(state: &'a mut TrackerState) -> Self {
        Self { state }
    }

    pub fn stats(&self) -> &ProgressStats {
        &self.state.progress_stats
    }

    pub fn sessions(&self) -> &[GameSession] {
        &self.state.game_sessions
    }

    pub fn last_session(&self) -> Option<&GameSession> {
        self.state.game_sessions.last()
    }

    pub fn today_screen_time(&self) -> u32 {
        self.state.today_screen_time
    }

    /// Appends a session to the log as-is.
    pub fn record_session(&mut self, session: GameSession) {
        debug!(
            "Recording session {} for game {} ({}/{})",
            session.id, session.game_id, session.correct_answers, session.total_questions
        );
        self.state.game_sessions.push(session);
    }

    /// Replaces the provided fields. No aggregation happens here.
    pub fn update_progress(&mut self, update: ProgressUpdate) {
        let stats = &mut self.state.progress_stats;
        if let Some(total) = update.total_games_played {
            stats.total_games_played = total;
        }
        if let Some(minutes) = update.total_time_minutes {
            stats.total_time_minutes = minutes;
        }
        if let Some(accuracy) = update.average_accuracy {
            stats.average_accuracy = accuracy;
        }
        if let Some(skills) = update.skill_progress {
            stats.skill_progress = skills;
        }
    }

    /// Records a finished game and folds it into the aggregates: totals, the
    /// running mean accuracy, the weekday histogram, and the skill of the
    /// game's category. `duration_minutes` is the wall-clock length of the run.
    pub fn record_completed_game(&mut self, session: GameSession, duration_minutes: u32) {
        let accuracy = session.accuracy();
        let played_at = session.ended_at.unwrap_or(session.started_at);
        let category = catalog::category_of(&session.game_id);

        self.record_session(session);

        let stats = &self.state.progress_stats;
        let previous = stats.total_games_played;
        let average = running_mean(stats.average_accuracy, previous, accuracy);
        let total_time = stats.total_time_minutes + duration_minutes;

        let mut skills = stats.skill_progress;
        if let Some(category) = category {
            let folded = stats.skill_games.get(category);
            skills.set(category, running_mean(skills.get(category), folded, accuracy));
        }

        self.update_progress(ProgressUpdate {
            total_games_played: Some(previous + 1),
            total_time_minutes: Some(total_time),
            average_accuracy: Some(average),
            skill_progress: Some(skills),
        });

        let stats = &mut self.state.progress_stats;
        if let Some(category) = category {
            stats.skill_games.increment(category);
        }
        stats.count_game_on(played_at.with_timezone(&Local).weekday());

        info!(
            "Game recorded: {} played, average accuracy {:.1}%",
            self.state.progress_stats.total_games_played,
            self.state.progress_stats.average_accuracy
        );
    }

    pub fn add_screen_time(&mut self, minutes: u32) {
        self.state.today_screen_time += minutes;
        debug!("Screen time today: {} min", self.state.today_screen_time);
    }

    pub fn reset_daily_screen_time(&mut self) {
        info!("Resetting daily screen time (was {} min)", self.state.today_screen_time);
        self.state.today_screen_time = 0;
    }
}

/// `(old_avg * old_count + value) / (old_count + 1)`
pub fn running_mean(old_avg: f64, old_count: u32, value: f64) -> f64 {
    (old_avg * old_count as f64 + value) / (old_count as f64 + 1.0)
}
