use anyhow::{bail, Result};
use brightsteps_core::{game_run::QUESTIONS_PER_GAME, App, FileSnapshotStore};
use chrono::Local;

/// Plays a game run with `correct` right answers and records it.
pub fn record(app: &mut App<FileSnapshotStore>, game_id: &str, correct: u32) -> Result<()> {
    if correct > QUESTIONS_PER_GAME {
        bail!("A game has {} questions, got {} correct answers", QUESTIONS_PER_GAME, correct);
    }

    app.start_game(game_id)?;
    for question in 0..QUESTIONS_PER_GAME {
        app.answer_question(question < correct);
    }

    let Some(summary) = app.finish_game() else {
        bail!("Game {} did not finish", game_id);
    };

    println!(
        "Recorded {}: {}/{} correct, {}% accuracy, {} star(s), {:?}",
        summary.game_id,
        summary.correct_answers,
        summary.total_questions,
        summary.accuracy,
        summary.stars,
        summary.feedback
    );

    Ok(())
}

pub fn list(app: &App<FileSnapshotStore>) {
    let sessions = &app.state().tracker.game_sessions;
    if sessions.is_empty() {
        println!("No sessions recorded yet.");
        return;
    }

    println!("{} session(s):", sessions.len());
    for session in sessions {
        let played = session.ended_at.unwrap_or(session.started_at).with_timezone(&Local);
        println!(
            "  {} {:<12} {}/{} ({}%), {} star(s)",
            played.format("%Y-%m-%d %H:%M"),
            session.game_id,
            session.correct_answers,
            session.total_questions,
            session.accuracy_percent(),
            session.stars()
        );
    }
}
