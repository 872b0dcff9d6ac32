pub mod games;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod reset;
pub mod session;
pub mod settings;
pub mod status;
pub mod survey;
