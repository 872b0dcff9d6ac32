use anyhow::Result;
use brightsteps_common::SurveyKey;
use brightsteps_core::{App, FileSnapshotStore};

pub fn answer(app: &mut App<FileSnapshotStore>, key: &str, value: &str) -> Result<()> {
    let key: SurveyKey = key.parse()?;
    app.answer_survey(key, value)?;

    let current = app.state().survey_answers.display_value(key).unwrap_or_default();
    if key.is_multi_select() {
        println!("{} is now [{}]", key.as_str(), current);
    } else {
        println!("{} = {}", key.as_str(), current);
    }

    if app.state().survey_answers.is_complete() {
        println!("Survey complete. Run `brightsteps-ctl plan generate` to build a plan.");
    }

    Ok(())
}

pub fn show(app: &App<FileSnapshotStore>) {
    let answers = &app.state().survey_answers;

    println!("Survey answers");
    println!("==============");
    for (step, key) in SurveyKey::ORDER.iter().enumerate() {
        let value = answers.display_value(*key).unwrap_or_else(|| "-".to_string());
        println!("{}. {:<24} {}", step + 1, key.as_str(), value);
    }
    println!();
    println!("Complete: {}", if answers.is_complete() { "yes" } else { "no" });
}

pub fn questions() {
    for (step, key) in SurveyKey::ORDER.iter().enumerate() {
        let kind = if key.is_multi_select() { " (multiple)" } else { "" };
        println!("{}. {}{}", step + 1, key.as_str(), kind);
        println!("   options: {}", key.options().join(", "));
    }
}
