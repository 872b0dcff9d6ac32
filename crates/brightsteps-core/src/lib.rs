pub mod app;
pub mod config;
pub mod game_run;
pub mod navigator;
pub mod persistence;
pub mod plan;
pub mod selection;
pub mod store;
pub mod timers;
pub mod tracker;

pub use app::App;
pub use config::AppConfig;
pub use navigator::{NavigationState, Navigator, Screen};
pub use persistence::{FileSnapshotStore, MemorySnapshotStore, Persistence, SnapshotStore};
pub use plan::PlanGenerator;
pub use store::{AppState, PersistedState, SettingChange};
pub use timers::{ScreenTimers, TimerEvent, TimerKind};
pub use tracker::{ProgressUpdate, Tracker, TrackerState};
