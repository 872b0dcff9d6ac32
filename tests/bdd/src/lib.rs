// BDD test support library for BrightSteps
//
// World state and step definitions for the learning-plan, progress and
// persistence acceptance scenarios.

pub mod steps;
pub mod world;

pub use world::LearningWorld;
