use std::fs;

use brightsteps_common::{config::GeneralConfig, Gender, SurveyKey};
use brightsteps_core::{App, AppConfig, AppState, FileSnapshotStore, Persistence, Screen};
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> AppConfig {
    AppConfig {
        general: GeneralConfig {
            data_dir: Some(dir.to_string_lossy().into_owned()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_survives_restart_on_disk() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    {
        let mut app = App::start(config.clone(), config.snapshot_store());
        app.register("parent@example.com");
        app.create_child_profile("Ada", 2019, 6, Gender::Female).unwrap();
        app.answer_survey(SurveyKey::PreferredActivities, "drawing").unwrap();
        app.answer_survey(SurveyKey::PreferredActivities, "music").unwrap();
        app.generate_plan();
        app.start_game("attention-1").unwrap();
        app.answer_question(true);
        app.finish_game().unwrap();
    }

    let snapshot = dir.path().join("inclusive-learning-app.json");
    assert!(snapshot.exists());

    let app = App::start(config.clone(), config.snapshot_store());
    let state = app.state();
    assert_eq!(app.current_screen(), Screen::Splash);
    assert_eq!(state.child_profile.as_ref().unwrap().name, "Ada");
    assert_eq!(
        state.child_profile.as_ref().unwrap().birth_date.to_string(),
        "2019-06-01"
    );
    assert_eq!(state.survey_answers.preferred_activities.as_ref().unwrap().len(), 2);
    assert!(state.learning_plan.is_some());
    assert_eq!(state.tracker.game_sessions.len(), 1);
    assert_eq!(state.tracker.progress_stats.total_games_played, 1);
    assert_eq!(state.tracker.today_screen_time, 0);
    assert_eq!(state.navigation.survey_step, 0);
}

#[tokio::test(start_paused = true)]
async fn test_corrupt_snapshot_starts_fresh() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(dir.path().join("inclusive-learning-app.json"), "not json").unwrap();

    let app = App::start(config.clone(), config.snapshot_store());
    assert_eq!(*app.state(), AppState::default());
}

#[test]
fn test_custom_snapshot_key() {
    let dir = tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path());
    let persistence = Persistence::new(store.clone(), "profile-b");

    let mut state = AppState::new();
    state.answer_survey(SurveyKey::PrimaryGoal, "logic").unwrap();
    persistence.save(&state).unwrap();

    assert!(store.path_for("profile-b").exists());
    assert!(!store.path_for("inclusive-learning-app").exists());
    assert_eq!(persistence.load().survey_answers, state.survey_answers);
}
