// Application controller
//
// Owns the state container, the snapshot persistence and the screen timers,
// and exposes the user-facing flows. Every flow mutates the state, moves the
// navigator, and saves the snapshot. Nothing here returns an error for a
// failed save; the state stays in memory and the failure is logged.

use brightsteps_common::{
    catalog, ChildProfile, Error, Game, GameCategory, Gender, Result, ScreenTimeStatus, SurveyKey,
    TimeWindowEnforcer, User,
};
use chrono::{Local, NaiveDate, Utc};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    game_run::{GameRun, ResultSummary},
    navigator::Screen,
    persistence::{Persistence, SnapshotStore},
    plan::PlanGenerator,
    selection::games_for_selection,
    store::{AppState, SettingChange},
    timers::{ScreenTimers, TimerEvent, TimerKind},
};

pub struct App<S: SnapshotStore> {
    state: AppState,
    persistence: Persistence<S>,
    timers: ScreenTimers,
    events: UnboundedReceiver<TimerEvent>,
    config: AppConfig,
    catalog: &'static [Game],
    run: Option<GameRun>,
    /// Screen-time ticks credited while the current run was on screen.
    run_ticks: u32,
    last_result: Option<ResultSummary>,
}

impl<S: SnapshotStore> App<S> {
    /// Hydrates from the snapshot and enters the splash screen.
    pub fn start(config: AppConfig, store: S) -> Self {
        let persistence = Persistence::new(store, config.storage.snapshot_key.clone());
        let state = persistence.load();
        let (timers, events) = ScreenTimers::new(&config.timing);

        let mut app = Self {
            state,
            persistence,
            timers,
            events,
            config,
            catalog: catalog::games(),
            run: None,
            run_ticks: 0,
            last_result: None,
        };
        let screen = app.state.navigation.current_screen;
        app.timers.on_screen_entered(screen);
        info!("App started on {}", screen);
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn current_screen(&self) -> Screen {
        self.state.navigation.current_screen
    }

    pub fn current_run(&self) -> Option<&GameRun> {
        self.run.as_ref()
    }

    pub fn last_result(&self) -> Option<&ResultSummary> {
        self.last_result.as_ref()
    }

    pub fn timers(&self) -> &ScreenTimers {
        &self.timers
    }

    /// Moves to `screen`. Leaving a screen cancels its timer; entering one
    /// arms the timer it owns.
    pub fn go_to(&mut self, screen: Screen) {
        let from = self.state.navigator().set_screen(screen);
        if from != screen {
            self.timers.on_screen_entered(screen);
        }
    }

    /// Waits for the next timer event without applying it.
    pub async fn next_timer_event(&mut self) -> Option<TimerEvent> {
        self.events.recv().await
    }

    /// Waits for the next timer event and applies it.
    pub async fn process_next_timer(&mut self) -> Option<TimerEvent> {
        let event = self.next_timer_event().await?;
        self.handle_timer(event);
        Some(event)
    }

    /// Applies a timer event. Events from a screen that is no longer current
    /// are dropped; returns whether the event was applied.
    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        if event.screen != self.current_screen() {
            debug!("Dropping stale {:?} from {}", event.kind, event.screen);
            return false;
        }

        match event.kind {
            TimerKind::SplashElapsed => {
                let next =
                    if self.state.user.is_some() { Screen::ParentDashboard } else { Screen::Welcome };
                self.go_to(next);
            }
            TimerKind::PlanReady => {
                self.generate_plan();
                self.go_to(Screen::PlanResult);
            }
            TimerKind::ScreenTimeTick => {
                self.state.tracker().add_screen_time(1);
                if self.run.is_some() {
                    self.run_ticks += 1;
                }
            }
        }
        true
    }

    pub fn register(&mut self, email: &str) {
        info!("Registering {}", email);
        self.state.set_user(Some(User::new(email)));
        self.go_to(Screen::CreateChildProfile);
        self.persist();
    }

    pub fn login(&mut self, email: &str) {
        info!("Logging in {}", email);
        self.state.set_user(Some(User::new(email)));
        self.go_to(Screen::ParentDashboard);
        self.persist();
    }

    /// Creates the child profile with a birth date on the 1st of the given
    /// month and opens the survey at its first question.
    pub fn create_child_profile(
        &mut self,
        name: &str,
        birth_year: i32,
        birth_month: u32,
        gender: Gender,
    ) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid("child name must not be empty"));
        }
        let birth_date = NaiveDate::from_ymd_opt(birth_year, birth_month, 1).ok_or_else(|| {
            Error::invalid(format!("invalid birth month {}-{}", birth_year, birth_month))
        })?;

        info!("Creating child profile for {}", name);
        self.state.set_child_profile(Some(ChildProfile::new(name, birth_date, gender)));
        self.state.navigator().set_survey_step(0);
        self.go_to(Screen::Survey);
        self.persist();
        Ok(())
    }

    pub fn answer_survey(&mut self, key: SurveyKey, value: &str) -> Result<()> {
        self.state.answer_survey(key, value)?;
        self.persist();
        Ok(())
    }

    /// Advances the wizard, or leaves for plan generation after the last
    /// question.
    pub fn survey_next(&mut self) {
        let step = self.state.navigator().survey_step();
        if step + 1 < SurveyKey::COUNT {
            self.state.navigator().set_survey_step(step + 1);
        } else {
            self.go_to(Screen::LoadingPlan);
        }
    }

    pub fn survey_back(&mut self) {
        let step = self.state.navigator().survey_step();
        if step > 0 {
            self.state.navigator().set_survey_step(step - 1);
        } else {
            self.go_to(Screen::CreateChildProfile);
        }
    }

    pub fn restart_survey(&mut self) {
        self.state.navigator().set_survey_step(0);
        self.go_to(Screen::Survey);
    }

    /// Generates and stores a plan from the current answers and child age.
    pub fn generate_plan(&mut self) {
        let age = self.state.child_age(Local::now().date_naive());
        let plan = PlanGenerator::new(self.catalog).generate(
            &self.state.survey_answers,
            age,
            Utc::now(),
        );
        self.state.set_learning_plan(Some(plan));
        self.persist();
    }

    pub fn selection_games(&self, category: Option<GameCategory>) -> Vec<&'static Game> {
        let age = self.state.child_age(Local::now().date_naive());
        games_for_selection(self.catalog, age, category, self.state.learning_plan.as_ref())
    }

    pub fn start_game(&mut self, game_id: &str) -> Result<()> {
        let game = catalog::find_game(game_id)
            .ok_or_else(|| Error::invalid(format!("unknown game: {}", game_id)))?;

        info!("Starting game {}", game.id);
        self.run = Some(GameRun::new(game.id.clone(), Utc::now()));
        self.run_ticks = 0;
        self.go_to(Screen::GamePlay);
        Ok(())
    }

    /// Scores an answer in the current run. Returns whether the run has
    /// reached its last question.
    pub fn answer_question(&mut self, correct: bool) -> bool {
        match self.run.as_mut() {
            Some(run) => {
                run.answer(correct);
                run.is_finished()
            }
            None => {
                warn!("Answer given with no game in progress");
                false
            }
        }
    }

    /// Records the current run and shows its result.
    pub fn finish_game(&mut self) -> Option<ResultSummary> {
        let Some(run) = self.run.take() else {
            warn!("finish_game called with no game in progress");
            return None;
        };

        let now = Utc::now();
        let duration = run.elapsed_minutes(now);
        let child_id = self.state.child_profile.as_ref().map(|p| p.id);
        let session = run.into_session(child_id, now);

        let credited = if self.config.screen_time.deduplicate_final_minute {
            duration.saturating_sub(self.run_ticks)
        } else {
            duration
        };
        self.run_ticks = 0;

        let summary = ResultSummary::from_session(&session, now);
        let mut tracker = self.state.tracker();
        tracker.record_completed_game(session, duration);
        tracker.add_screen_time(credited);

        self.last_result = Some(summary.clone());
        self.go_to(Screen::GameResult);
        self.persist();
        Some(summary)
    }

    /// Leaves the current run without recording it.
    pub fn abandon_game(&mut self) {
        if let Some(run) = self.run.take() {
            info!("Abandoning game {} after {} answers", run.game_id, run.answered);
        }
        self.run_ticks = 0;
        self.go_to(Screen::GameSelection);
    }

    /// Starts the game of the last result again.
    pub fn play_again(&mut self) -> Result<()> {
        let game_id = self
            .last_result
            .as_ref()
            .map(|r| r.game_id.clone())
            .ok_or_else(|| Error::NotFound("no finished game to replay".to_string()))?;
        self.start_game(&game_id)
    }

    pub fn open_child_dashboard(&mut self) {
        self.state.navigator().set_child_mode(true);
        self.go_to(Screen::ChildDashboard);
    }

    pub fn leave_child_mode(&mut self) {
        self.state.navigator().set_child_mode(false);
        self.go_to(Screen::ParentDashboard);
    }

    pub fn update_setting(&mut self, change: SettingChange) -> Result<()> {
        debug!("Updating setting {:?}", change);
        self.state.update_setting(change)?;
        self.persist();
        Ok(())
    }

    pub fn screen_time_status(&self) -> ScreenTimeStatus {
        TimeWindowEnforcer::new(&self.state.settings.screen_time)
            .check(Local::now(), self.state.tracker.today_screen_time)
    }

    pub fn reset_daily_screen_time(&mut self) {
        self.state.tracker().reset_daily_screen_time();
    }

    /// Wipes all state and the snapshot, then returns to the welcome screen.
    pub fn reset_app(&mut self) {
        self.state.reset();
        self.run = None;
        self.run_ticks = 0;
        self.last_result = None;
        if let Err(e) = self.persistence.clear() {
            warn!("Failed to remove snapshot: {}", e);
        }
        self.go_to(Screen::Welcome);
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.state) {
            warn!("Failed to save snapshot: {}", e);
        }
    }
}
