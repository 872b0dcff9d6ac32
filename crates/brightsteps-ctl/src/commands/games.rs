use anyhow::Result;
use brightsteps_common::GameCategory;
use brightsteps_core::{App, FileSnapshotStore};

pub fn list(app: &App<FileSnapshotStore>, category: Option<&str>) -> Result<()> {
    let category = category.map(str::parse::<GameCategory>).transpose()?;
    let plan = app.state().learning_plan.as_ref();

    let games = app.selection_games(category);
    if games.is_empty() {
        println!("No games match.");
        return Ok(());
    }

    for game in games {
        let marker = if plan.is_some_and(|p| p.recommends(&game.id)) { "*" } else { " " };
        println!(
            "{} {:<12} {} {:<18} ages {}-{}, {} min",
            marker,
            game.id,
            game.icon,
            game.title,
            game.age_range.min,
            game.age_range.max,
            game.duration_minutes
        );
    }
    if plan.is_some() {
        println!();
        println!("* recommended by the current plan");
    }

    Ok(())
}
