use std::path::PathBuf;

use anyhow::{Context, Result};
use brightsteps_core::{App, AppConfig, FileSnapshotStore};
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;

#[derive(Parser)]
#[command(name = "brightsteps-ctl")]
#[command(about = "BrightSteps learning companion control tool", long_about = None)]
struct Cli {
    #[arg(short, long, global = true, help = "Path to the TOML configuration file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    Survey {
        #[command(subcommand)]
        action: SurveyAction,
    },

    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    Games {
        #[command(subcommand)]
        action: GamesAction,
    },

    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    Progress,

    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    Status,

    Reset {
        #[arg(long, help = "Confirm wiping all saved data")]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    Create {
        name: String,
        birth_year: i32,
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        birth_month: u32,
        #[arg(short, long, default_value = "prefer_not_to_say")]
        gender: String,
        #[arg(short, long, help = "Parent account email, registered if given")]
        email: Option<String>,
    },
    Show,
}

#[derive(Subcommand)]
enum SurveyAction {
    Answer {
        key: String,
        value: String,
    },
    Show,
    Questions,
}

#[derive(Subcommand)]
enum PlanAction {
    Generate,
    Show,
}

#[derive(Subcommand)]
enum GamesAction {
    List {
        #[arg(short, long, help = "Only games of this category")]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    Record {
        game_id: String,
        #[arg(short, long, help = "Number of questions answered correctly")]
        correct: u32,
    },
    List,
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    Set { name: String, value: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => AppConfig::load().context("Failed to load default configuration")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .with_target(false)
        .with_line_number(true)
        .init();

    debug!("Using data directory {:?}", config.data_dir());
    let store = config.snapshot_store();
    let mut app: App<FileSnapshotStore> = App::start(config, store);

    match cli.command {
        Commands::Profile { action } => match action {
            ProfileAction::Create { name, birth_year, birth_month, gender, email } => {
                commands::profile::create(
                    &mut app,
                    &name,
                    birth_year,
                    birth_month,
                    &gender,
                    email.as_deref(),
                )?
            }
            ProfileAction::Show => commands::profile::show(&app),
        },
        Commands::Survey { action } => match action {
            SurveyAction::Answer { key, value } => commands::survey::answer(&mut app, &key, &value)?,
            SurveyAction::Show => commands::survey::show(&app),
            SurveyAction::Questions => commands::survey::questions(),
        },
        Commands::Plan { action } => match action {
            PlanAction::Generate => commands::plan::generate(&mut app)?,
            PlanAction::Show => commands::plan::show(&app)?,
        },
        Commands::Games { action } => match action {
            GamesAction::List { category } => commands::games::list(&app, category.as_deref())?,
        },
        Commands::Session { action } => match action {
            SessionAction::Record { game_id, correct } => {
                commands::session::record(&mut app, &game_id, correct)?
            }
            SessionAction::List => commands::session::list(&app),
        },
        Commands::Progress => commands::progress::show(&app)?,
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&app),
            SettingsAction::Set { name, value } => commands::settings::set(&mut app, &name, &value)?,
        },
        Commands::Status => commands::status::show(&app),
        Commands::Reset { yes } => commands::reset::run(&mut app, yes)?,
    }

    Ok(())
}
