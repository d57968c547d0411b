//! Shared library for `EternalQuest`
//! Goal tracking with points: simple, eternal and checklist goals, a running
//! score, and a plain-text save file. The `quest` binary is a thin CLI over it.

pub mod core;
pub mod logger;
pub mod shared;

pub use shared::*;
