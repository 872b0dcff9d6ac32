use anyhow::Result;
use brightsteps_common::GameCategory;
use brightsteps_core::{App, FileSnapshotStore};

pub fn show(app: &App<FileSnapshotStore>) -> Result<()> {
    let stats = &app.state().tracker.progress_stats;

    println!("Progress");
    println!("========");
    println!("Games played:     {}", stats.total_games_played);
    println!("Time played:      {} min", stats.total_time_minutes);
    println!("Average accuracy: {:.0}%", stats.average_accuracy);
    println!();

    println!("Skills:");
    for category in GameCategory::ALL {
        println!("  {:<10} {:>3.0}%", category.as_str(), stats.skill_progress.get(category));
    }
    println!();

    println!("This week:");
    for day in &stats.weekly_games {
        println!("  {:<4} {}", day.day, "#".repeat(day.count as usize));
    }

    tracing::debug!("Progress stats: {}", serde_json::to_string(stats)?);
    Ok(())
}
