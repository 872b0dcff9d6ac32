use anyhow::Result;
use brightsteps_common::Gender;
use brightsteps_core::{App, FileSnapshotStore};

pub fn create(
    app: &mut App<FileSnapshotStore>,
    name: &str,
    birth_year: i32,
    birth_month: u32,
    gender: &str,
    email: Option<&str>,
) -> Result<()> {
    let gender: Gender = gender.parse()?;

    if let Some(email) = email {
        app.register(email);
        println!("Registered parent account {}", email);
    } else if app.state().user.is_none() {
        println!("No parent account yet; pass --email to register one.");
    }

    app.create_child_profile(name, birth_year, birth_month, gender)?;

    if let Some(profile) = &app.state().child_profile {
        println!(
            "Created profile '{}' (born {}, age {}) with ID: {}",
            profile.name,
            profile.birth_date.format("%Y-%m"),
            profile.age_today(),
            profile.id
        );
    }
    println!("Next: answer the survey with `brightsteps-ctl survey answer <key> <value>`");

    Ok(())
}

pub fn show(app: &App<FileSnapshotStore>) {
    let state = app.state();

    match &state.user {
        Some(user) => println!("Parent: {} (since {})", user.email, user.created_at.format("%Y-%m-%d")),
        None => println!("Parent: not registered"),
    }

    match &state.child_profile {
        Some(profile) => {
            println!("Child:  {}", profile.name);
            println!("  Birth date: {}", profile.birth_date);
            println!("  Age:        {}", profile.age_today());
            println!("  Gender:     {}", gender_label(profile.gender));
            println!("  ID:         {}", profile.id);
        }
        None => println!("Child:  no profile"),
    }
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
        Gender::PreferNotToSay => "prefer not to say",
    }
}
