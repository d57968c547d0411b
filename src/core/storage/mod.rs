//! Persistence of goals to flat text files

pub mod goal_file;

pub use goal_file::{load_goal_file, parse_goals, save_goal_file};
