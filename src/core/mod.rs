//! Core goal-tracking engine

pub mod error;
pub mod manager;
pub mod models;
pub mod scoring;
pub mod storage;

pub use error::{GoalError, Result};
pub use manager::GoalManager;
pub use models::{Goal, GoalKind, GoalRequest};
pub use scoring::ScoringPolicy;
