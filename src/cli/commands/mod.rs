//! CLI command handlers for `EternalQuest`.
//!
//! Each subcommand family lives in its own submodule.

pub mod config;
pub mod goals;
pub mod menu;
