use anyhow::Result;
use brightsteps_common::{config::DEFAULT_SNAPSHOT_KEY, LearningPlan};
use brightsteps_core::{
    game_run::ResultSummary, AppState, MemorySnapshotStore, Persistence, PlanGenerator,
};
use chrono::Utc;
use cucumber::World;

/// BDD World for learning-plan and progress scenarios
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct LearningWorld {
    /// State under test
    pub state: AppState,

    /// Child age used for plan generation; `None` when no birth date is known
    pub child_age: Option<u32>,

    /// Most recently generated plan
    pub plan: Option<LearningPlan>,

    /// Result of the last played game
    pub last_result: Option<ResultSummary>,

    /// Snapshot storage shared across save/reload
    pub store: MemorySnapshotStore,

    /// State rebuilt from the snapshot
    pub restored: Option<AppState>,
}

impl LearningWorld {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            child_age: None,
            plan: None,
            last_result: None,
            store: MemorySnapshotStore::new(),
            restored: None,
        }
    }

    pub fn generate_plan(&mut self) {
        let generator = PlanGenerator::default();
        self.plan = Some(generator.generate(&self.state.survey_answers, self.child_age, Utc::now()));
    }

    pub fn plan(&self) -> &LearningPlan {
        self.plan.as_ref().expect("no plan has been generated")
    }

    pub fn save_and_reload(&mut self) -> Result<()> {
        let persistence = Persistence::new(self.store.clone(), DEFAULT_SNAPSHOT_KEY);
        persistence.save(&self.state)?;
        self.restored = Some(persistence.load());
        Ok(())
    }
}

impl Default for LearningWorld {
    fn default() -> Self {
        Self::new()
    }
}
