use anyhow::{bail, Result};
use brightsteps_core::{App, FileSnapshotStore};

pub fn run(app: &mut App<FileSnapshotStore>, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("This deletes the profile, plan and all progress. Re-run with --yes to confirm.");
    }

    app.reset_app();
    println!("All data removed.");
    Ok(())
}
