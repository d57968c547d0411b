//! Command-line interface entry point for `EternalQuest`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use eternal_quest::config::Config;
use eternal_quest::logger::{self, Level};
use eternal_quest::{debug, info};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply the --config-* overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Per-run flags only ever reach this copy, which is never saved
    let run_config = args.run_config(&config);

    let verbose = init_logging(&args, &run_config);
    debug!("Using scoring policy {}", run_config.scoring.policy);

    let result = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::New { goal } => commands::goals::run_new(goal.into(), &run_config),
        Command::Record { number } => commands::goals::run_record(number, &run_config),
        Command::List => commands::goals::run_list(&run_config),
        Command::Score => commands::goals::run_score(&run_config),
        Command::Menu => run_menu(&run_config, verbose),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Configure the logger from CLI flags and config; returns whether verbose output is on
fn init_logging(args: &Cli, config: &Config) -> bool {
    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        logger::enable_debug();
    }
    logger::set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        logger::enable_verbose();
    }

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = Some(config.logging.file.as_str())
        .filter(|file| !file.is_empty())
        .map(PathBuf::from);

    if let Some(log_path) = args.log_file.clone().or(config_log_path) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if logger::init_file_logging(&log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!(
                "✗ Failed to initialize file logging at: {}",
                log_path.display()
            );
        }
    }

    verbose
}

fn run_menu(config: &Config, verbose: bool) -> Result<(), String> {
    let path = commands::goals::goals_path(config)?;
    let mut manager = commands::goals::open_manager(&path, config)?;
    if verbose {
        println!(
            "✓ {} goals loaded from {} (scoring: {})",
            manager.len(),
            path.display(),
            manager.policy()
        );
    }
    commands::menu::run(&mut manager, &path).map_err(|e| format!("✗ Terminal error: {e}"))
}
