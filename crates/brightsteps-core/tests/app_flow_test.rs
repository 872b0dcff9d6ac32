use brightsteps_common::{Gender, ScreenTimeStatus, SurveyKey};
use brightsteps_core::{
    App, AppConfig, MemorySnapshotStore, Screen, SettingChange, TimerEvent, TimerKind,
};
use chrono::{Datelike, Local};

fn start(store: &MemorySnapshotStore) -> App<MemorySnapshotStore> {
    App::start(AppConfig::default(), store.clone())
}

fn onboard(app: &mut App<MemorySnapshotStore>, age: i32) {
    app.register("parent@example.com");
    let year = Local::now().year() - age;
    app.create_child_profile("Sam", year, 1, Gender::PreferNotToSay).unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_fresh_start_goes_from_splash_to_welcome() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    assert_eq!(app.current_screen(), Screen::Splash);

    let event = app.process_next_timer().await.unwrap();
    assert_eq!(event.kind, TimerKind::SplashElapsed);
    assert_eq!(app.current_screen(), Screen::Welcome);
}

#[tokio::test(start_paused = true)]
async fn test_returning_user_lands_on_dashboard() {
    let store = MemorySnapshotStore::new();
    {
        let mut app = start(&store);
        app.login("parent@example.com");
    }

    let mut app = start(&store);
    assert!(app.state().user.is_some());
    assert_eq!(app.current_screen(), Screen::Splash);
    app.process_next_timer().await.unwrap();
    assert_eq!(app.current_screen(), Screen::ParentDashboard);
}

#[tokio::test(start_paused = true)]
async fn test_onboarding_generates_plan() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    onboard(&mut app, 5);
    assert_eq!(app.current_screen(), Screen::Survey);
    assert_eq!(app.state().navigation.survey_step, 0);

    app.answer_survey(SurveyKey::ConcentrationTime, "3_5min").unwrap();
    app.answer_survey(SurveyKey::PrimaryGoal, "attention").unwrap();

    for _ in 0..SurveyKey::COUNT - 1 {
        app.survey_next();
        assert_eq!(app.current_screen(), Screen::Survey);
    }
    app.survey_next();
    assert_eq!(app.current_screen(), Screen::LoadingPlan);

    let event = app.process_next_timer().await.unwrap();
    assert_eq!(event.kind, TimerKind::PlanReady);
    assert_eq!(app.current_screen(), Screen::PlanResult);

    let plan = app.state().learning_plan.as_ref().unwrap();
    let ids: Vec<&str> = plan.recommended_games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["attention-1", "attention-2", "attention-3", "speech-1", "speech-2"]);
    assert_eq!((plan.session_duration.min, plan.session_duration.max), (15, 25));
    assert_eq!((plan.sessions_per_week.min, plan.sessions_per_week.max), (3, 5));
}

#[tokio::test(start_paused = true)]
async fn test_survey_back_from_first_question_returns_to_profile() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    onboard(&mut app, 6);

    app.survey_next();
    app.survey_back();
    assert_eq!(app.state().navigation.survey_step, 0);
    app.survey_back();
    assert_eq!(app.current_screen(), Screen::CreateChildProfile);

    app.restart_survey();
    assert_eq!(app.current_screen(), Screen::Survey);
    assert_eq!(app.state().navigation.survey_step, 0);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_loading_plan_cancels_generation() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    app.go_to(Screen::LoadingPlan);
    app.go_to(Screen::Welcome);

    tokio::time::advance(std::time::Duration::from_secs(10)).await;
    assert!(!app.timers().is_armed());
    assert!(app.state().learning_plan.is_none());

    let stale = TimerEvent { screen: Screen::LoadingPlan, kind: TimerKind::PlanReady };
    assert!(!app.handle_timer(stale));
    assert!(app.state().learning_plan.is_none());
    assert_eq!(app.current_screen(), Screen::Welcome);
}

#[tokio::test(start_paused = true)]
async fn test_game_run_records_session_and_screen_time() {
    let store = MemorySnapshotStore::new();
    let mut config = AppConfig::default();
    config.screen_time.deduplicate_final_minute = true;
    let mut app = App::start(config, store.clone());
    onboard(&mut app, 7);

    app.start_game("logic-1").unwrap();
    assert_eq!(app.current_screen(), Screen::GamePlay);

    let tick = app.process_next_timer().await.unwrap();
    assert_eq!(tick.kind, TimerKind::ScreenTimeTick);
    assert_eq!(app.state().tracker.today_screen_time, 1);

    assert!(!app.answer_question(true));
    assert!(!app.answer_question(true));
    assert!(app.answer_question(false));

    let summary = app.finish_game().unwrap();
    assert_eq!(app.current_screen(), Screen::GameResult);
    assert_eq!(summary.accuracy, 67);
    assert_eq!(summary.stars, 2);

    let tracker = &app.state().tracker;
    assert_eq!(tracker.game_sessions.len(), 1);
    assert_eq!(tracker.progress_stats.total_games_played, 1);
    assert_eq!(tracker.game_sessions[0].difficulty_level, 1);
    assert_eq!(tracker.today_screen_time, 1);
    assert!(!app.timers().is_armed());

    assert!(store.get("inclusive-learning-app").unwrap().contains("logic-1"));
}

#[tokio::test(start_paused = true)]
async fn test_default_config_keeps_tick_and_final_minutes() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    assert!(!app.config().screen_time.deduplicate_final_minute);

    app.start_game("attention-2").unwrap();
    let tick = app.process_next_timer().await.unwrap();
    assert_eq!(tick.kind, TimerKind::ScreenTimeTick);

    for _ in 0..3 {
        app.answer_question(true);
    }
    let summary = app.finish_game().unwrap();

    let tracker = &app.state().tracker;
    assert_eq!(tracker.today_screen_time, 1 + summary.duration_minutes);
    assert_eq!(tracker.progress_stats.total_time_minutes, summary.duration_minutes);
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_game_is_not_recorded() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    app.start_game("emotion-1").unwrap();
    app.answer_question(true);
    app.abandon_game();

    assert_eq!(app.current_screen(), Screen::GameSelection);
    assert!(app.state().tracker.game_sessions.is_empty());
    assert!(app.finish_game().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_play_again_restarts_same_game() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    assert!(app.play_again().is_err());
    assert!(app.start_game("no-such-game").is_err());

    app.start_game("speech-2").unwrap();
    app.finish_game().unwrap();
    app.play_again().unwrap();

    assert_eq!(app.current_screen(), Screen::GamePlay);
    assert_eq!(app.current_run().unwrap().game_id, "speech-2");
}

#[tokio::test(start_paused = true)]
async fn test_child_mode_round_trip() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    app.open_child_dashboard();
    assert!(app.state().navigation.child_mode);
    assert_eq!(app.current_screen(), Screen::ChildDashboard);

    app.leave_child_mode();
    assert!(!app.state().navigation.child_mode);
    assert_eq!(app.current_screen(), Screen::ParentDashboard);
}

#[tokio::test(start_paused = true)]
async fn test_screen_time_status_follows_settings() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    assert_eq!(app.screen_time_status(), ScreenTimeStatus::Allowed { remaining_minutes: 20 });

    app.update_setting(SettingChange::MaxMinutesPerDay(33)).unwrap();
    assert_eq!(app.state().settings.screen_time.max_minutes_per_day, 35);

    app.update_setting(SettingChange::ScreenTimeEnabled(false)).unwrap();
    assert_eq!(app.screen_time_status(), ScreenTimeStatus::Disabled);
}

#[tokio::test(start_paused = true)]
async fn test_reset_wipes_state_and_snapshot() {
    let store = MemorySnapshotStore::new();
    let mut app = start(&store);
    onboard(&mut app, 4);
    assert!(store.get("inclusive-learning-app").is_some());

    app.reset_app();
    assert_eq!(app.current_screen(), Screen::Welcome);
    assert!(app.state().user.is_none());
    assert!(app.state().child_profile.is_none());
    assert!(store.get("inclusive-learning-app").is_none());
}
