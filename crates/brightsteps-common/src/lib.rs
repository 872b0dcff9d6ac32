pub mod catalog;
pub mod config;
pub mod error;
pub mod survey;
pub mod time_window;
pub mod types;

pub use error::{Error, Result};
pub use survey::*;
pub use time_window::{ScreenTimeStatus, TimeWindowEnforcer};
pub use types::*;
