use brightsteps_common::ScreenTimeStatus;
use brightsteps_core::{App, FileSnapshotStore};

pub fn show(app: &App<FileSnapshotStore>) {
    let state = app.state();

    println!("BrightSteps Status");
    println!("==================");
    println!();
    println!("Data directory: {}", app.config().data_dir().display());
    println!("Parent:         {}", state.user.as_ref().map_or("not registered", |u| u.email.as_str()));
    println!(
        "Child:          {}",
        state.child_profile.as_ref().map_or("no profile", |p| p.name.as_str())
    );
    println!(
        "Survey:         {}",
        if state.survey_answers.is_complete() { "complete" } else { "incomplete" }
    );
    println!("Plan:           {}", if state.learning_plan.is_some() { "ready" } else { "none" });
    println!("Games played:   {}", state.tracker.progress_stats.total_games_played);
    println!();

    let line = match app.screen_time_status() {
        ScreenTimeStatus::Disabled => "limits off".to_string(),
        ScreenTimeStatus::Allowed { remaining_minutes } => {
            format!("{} minutes left today", remaining_minutes)
        }
        ScreenTimeStatus::LimitReached => "daily limit reached".to_string(),
        ScreenTimeStatus::OutsideWindow { next_window: Some(next) } => {
            format!("outside allowed hours, next window at {}", next)
        }
        ScreenTimeStatus::OutsideWindow { next_window: None } => {
            "outside allowed hours until tomorrow".to_string()
        }
    };
    println!("Screen time:    {}", line);
}
