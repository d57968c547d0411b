//! Data models for `EternalQuest`

pub mod checklist_goal;
pub mod eternal_goal;
pub mod goal;
pub mod simple_goal;

pub use checklist_goal::ChecklistGoal;
pub use eternal_goal::EternalGoal;
pub use goal::{EventOutcome, Goal, GoalKind, GoalRequest};
pub use simple_goal::SimpleGoal;
