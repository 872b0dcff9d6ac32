// Step definitions for the learning-plan acceptance scenarios

use brightsteps_common::{catalog, ChildProfile, GameCategory, Gender, SurveyKey};
use brightsteps_core::{
    game_run::{GameRun, ResultSummary},
    plan::{ATTENTION_GOAL, LOGIC_GOAL, MAX_RECOMMENDED_GAMES, SOCIAL_GOAL, SPEECH_GOAL},
    Screen, Tracker,
};
use chrono::{Duration, NaiveDate, Utc};
use cucumber::{given, then, when};

use crate::LearningWorld;

#[given(expr = "a child aged {int}")]
async fn child_aged(world: &mut LearningWorld, age: u32) {
    world.child_age = Some(age);
}

#[given("a child with no known age")]
async fn child_without_age(world: &mut LearningWorld) {
    world.child_age = None;
}

#[given(expr = "the survey answer {word} is {word}")]
async fn survey_answer(world: &mut LearningWorld, key: String, value: String) {
    let key: SurveyKey = key.parse().expect("unknown survey key");
    world.state.answer_survey(key, &value).expect("invalid survey value");
}

#[when("the learning plan is generated")]
async fn plan_generated(world: &mut LearningWorld) {
    world.generate_plan();
}

#[then("the plan recommends at most the maximum number of games")]
async fn plan_size_bounded(world: &mut LearningWorld) {
    assert!(world.plan().recommended_games.len() <= MAX_RECOMMENDED_GAMES);
}

#[then(expr = "the plan recommends {int} games")]
async fn plan_size(world: &mut LearningWorld, count: usize) {
    assert_eq!(world.plan().recommended_games.len(), count);
}

#[then("every recommended game suits the child's age")]
async fn plan_fits_age(world: &mut LearningWorld) {
    let age = world.child_age.expect("scenario needs a child age");
    for game in &world.plan().recommended_games {
        assert!(game.suits_age(age), "{} does not suit age {}", game.id, age);
    }
}

#[then(expr = "sessions last {int} to {int} minutes")]
async fn session_duration(world: &mut LearningWorld, min: u32, max: u32) {
    let duration = world.plan().session_duration;
    assert_eq!((duration.min, duration.max), (min, max));
}

#[then(expr = "there are {int} to {int} sessions per week")]
async fn sessions_per_week(world: &mut LearningWorld, min: u32, max: u32) {
    let cadence = world.plan().sessions_per_week;
    assert_eq!((cadence.min, cadence.max), (min, max));
}

#[then(expr = "the first {int} recommended game(s) are {word} games")]
async fn plan_leads_with(world: &mut LearningWorld, count: usize, category: String) {
    let category: GameCategory = category.parse().expect("unknown category");
    let games = &world.plan().recommended_games;
    assert!(games.len() >= count);
    for game in &games[..count] {
        assert_eq!(game.category, category, "{} is not a {} game", game.id, category);
    }
}

#[then(expr = "the first recommended game is a {word} game")]
async fn plan_first_game(world: &mut LearningWorld, category: String) {
    plan_leads_with(world, 1, category).await;
}

#[then(expr = "the plan lists {int} goal(s)")]
async fn goal_count(world: &mut LearningWorld, count: usize) {
    assert_eq!(world.plan().goals.len(), count);
}

#[then(expr = "the plan goals include the {word} goal")]
async fn goal_included(world: &mut LearningWorld, goal: String) {
    let expected = match goal.as_str() {
        "speech" => SPEECH_GOAL,
        "attention" => ATTENTION_GOAL,
        "social" => SOCIAL_GOAL,
        "logic" => LOGIC_GOAL,
        other => panic!("no goal text for {}", other),
    };
    let goals = &world.plan().goals;
    assert!(goals.iter().any(|g| g == expected), "goals were {:?}", goals);
}

#[when(expr = "a game is played with {int} correct answer(s)")]
async fn game_played(world: &mut LearningWorld, correct: u32) {
    let started = Utc::now() - Duration::seconds(90);
    let mut run = GameRun::new("attention-1", started);
    for question in 0..run.total_questions {
        run.answer(question < correct);
    }
    let now = Utc::now();
    let session = run.into_session(None, now);
    let summary = ResultSummary::from_session(&session, now);

    Tracker::new(&mut world.state.tracker).record_completed_game(session, summary.duration_minutes);
    world.last_result = Some(summary);
}

#[then(expr = "the accuracy is {int} percent")]
async fn accuracy_is(world: &mut LearningWorld, accuracy: u32) {
    let result = world.last_result.as_ref().expect("no game was played");
    assert_eq!(result.accuracy, accuracy);
}

#[then(expr = "the game earns {int} star(s)")]
async fn stars_are(world: &mut LearningWorld, stars: u8) {
    let result = world.last_result.as_ref().expect("no game was played");
    assert_eq!(result.stars, stars);
}

#[then(expr = "the average accuracy is {float}")]
async fn average_accuracy(world: &mut LearningWorld, expected: f64) {
    let actual = world.state.tracker.progress_stats.average_accuracy;
    assert!((actual - expected).abs() < 1e-9, "average accuracy was {}", actual);
}

#[then(expr = "{int} game(s) has/have been played")]
async fn games_played(world: &mut LearningWorld, count: u32) {
    assert_eq!(world.state.tracker.progress_stats.total_games_played, count);
    assert_eq!(world.state.tracker.game_sessions.len() as u32, count);
}

#[given(expr = "a child profile named {word} born on {word}")]
async fn child_profile(world: &mut LearningWorld, name: String, birth_date: String) {
    let birth_date =
        NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d").expect("birth date must be YYYY-MM-DD");
    world.state.set_child_profile(Some(ChildProfile::new(name, birth_date, Gender::Female)));
}

#[given(expr = "the daily screen-time limit is {int} minutes")]
async fn daily_limit(world: &mut LearningWorld, minutes: u32) {
    world.state.settings.screen_time.set_max_minutes_per_day(minutes);
}

#[when("the state is saved and reloaded")]
async fn save_and_reload(world: &mut LearningWorld) {
    world.save_and_reload().expect("snapshot save failed");
}

#[then(expr = "the restored birth date is {word}")]
async fn restored_birth_date(world: &mut LearningWorld, expected: String) {
    let restored = world.restored.as_ref().expect("state was not reloaded");
    let profile = restored.child_profile.as_ref().expect("child profile was not restored");
    assert_eq!(profile.birth_date.format("%Y-%m-%d").to_string(), expected);
}

#[then("the restored progress matches the saved progress")]
async fn restored_progress(world: &mut LearningWorld) {
    let restored = world.restored.as_ref().expect("state was not reloaded");
    assert_eq!(restored.tracker.progress_stats, world.state.tracker.progress_stats);
    assert_eq!(restored.tracker.game_sessions, world.state.tracker.game_sessions);
}

#[when("the app is reset")]
async fn app_reset(world: &mut LearningWorld) {
    world.state.reset();
}

#[then("every value is back to its default")]
async fn defaults_restored(world: &mut LearningWorld) {
    let state = &world.state;
    assert_eq!(state.navigation.current_screen, Screen::Splash);
    assert_eq!(state.navigation.survey_step, 0);
    assert!(state.user.is_none());
    assert!(state.child_profile.is_none());
    assert!(state.learning_plan.is_none());
    assert_eq!(state.tracker.progress_stats.total_games_played, 0);
    assert_eq!(state.tracker.today_screen_time, 0);
    assert_eq!(state.settings.screen_time.max_minutes_per_day, 20);
    assert!(state.survey_answers.primary_goal.is_none());
}

#[then(expr = "the catalog has {int} games")]
async fn catalog_size(_world: &mut LearningWorld, count: usize) {
    assert_eq!(catalog::games().len(), count);
}
