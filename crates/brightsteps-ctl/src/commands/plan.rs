use anyhow::{anyhow, Result};
use brightsteps_common::LearningPlan;
use brightsteps_core::{App, FileSnapshotStore};

pub fn generate(app: &mut App<FileSnapshotStore>) -> Result<()> {
    if !app.state().survey_answers.is_complete() {
        println!("Survey is incomplete; unanswered questions fall back to defaults.");
    }

    app.generate_plan();
    let plan = app
        .state()
        .learning_plan
        .as_ref()
        .ok_or_else(|| anyhow!("No plan was generated"))?;
    print_plan(plan);

    Ok(())
}

pub fn show(app: &App<FileSnapshotStore>) -> Result<()> {
    let plan = app
        .state()
        .learning_plan
        .as_ref()
        .ok_or_else(|| anyhow!("No learning plan yet; run `brightsteps-ctl plan generate`"))?;
    print_plan(plan);

    Ok(())
}

fn print_plan(plan: &LearningPlan) {
    println!("Learning plan ({})", plan.created_at.format("%Y-%m-%d %H:%M"));
    println!("=============");
    println!(
        "Sessions: {}-{} minutes, {}-{} times a week",
        plan.session_duration.min,
        plan.session_duration.max,
        plan.sessions_per_week.min,
        plan.sessions_per_week.max
    );
    println!();
    println!("Goals:");
    for goal in &plan.goals {
        println!("  - {}", goal);
    }
    println!();
    println!("Recommended games:");
    for game in &plan.recommended_games {
        println!("  {} {} [{}] {} min", game.icon, game.title, game.id, game.duration_minutes);
    }
}
