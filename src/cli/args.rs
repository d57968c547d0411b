//! CLI argument definitions for `EternalQuest`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use eternal_quest::config::{Config, ConfigOverrides};
use eternal_quest::core::{GoalRequest, ScoringPolicy};
use eternal_quest::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

/// CLI scoring policy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ScoringArg {
    /// Checklist goals pay points and bonus only when completed
    OnCompletion,
    /// Checklist goals pay points for every recorded event, bonus on completion
    PerEvent,
}

impl From<ScoringArg> for ScoringPolicy {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::OnCompletion => Self::OnCompletion,
            ScoringArg::PerEvent => Self::PerEvent,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `goals_file`, `policy`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Goal type to create
#[derive(Debug, Subcommand)]
pub enum NewGoal {
    /// A goal completed once (e.g. "Run a marathon").
    Simple {
        /// Goal name
        #[arg(value_name = "NAME")]
        name: String,
        /// Points awarded on completion
        #[arg(value_name = "POINTS")]
        points: u32,
    },
    /// A goal that never completes; every event earns points.
    Eternal {
        /// Goal name
        #[arg(value_name = "NAME")]
        name: String,
        /// Points awarded per event
        #[arg(value_name = "POINTS")]
        points: u32,
    },
    /// A goal repeated a number of times, with a bonus on completion.
    Checklist {
        /// Goal name
        #[arg(value_name = "NAME")]
        name: String,
        /// Base points
        #[arg(value_name = "POINTS")]
        points: u32,
        /// Number of completions required
        #[arg(short, long, value_name = "COUNT")]
        required: u32,
        /// Bonus points awarded on completion
        #[arg(short, long, value_name = "POINTS", default_value_t = 0)]
        bonus: u32,
    },
}

impl From<NewGoal> for GoalRequest {
    fn from(goal: NewGoal) -> Self {
        match goal {
            NewGoal::Simple { name, points } => Self::Simple { name, points },
            NewGoal::Eternal { name, points } => Self::Eternal { name, points },
            NewGoal::Checklist {
                name,
                points,
                required,
                bonus,
            } => Self::Checklist {
                name,
                points,
                required_count: required,
                bonus_points: bonus,
            },
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Create a new goal and save it.
    New {
        #[command(subcommand)]
        goal: NewGoal,
    },
    /// Record an event for a goal.
    Record {
        /// Goal number as shown by `list` (starting at 1)
        #[arg(value_name = "NUMBER")]
        number: usize,
    },
    /// Show all goals with their status.
    List,
    /// Show the total score.
    Score,
    /// Run the interactive menu.
    Menu,
}

#[derive(Parser, Debug)]
#[command(
    name = "quest",
    about = "Eternal Quest goal tracker",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this goals file for this run instead of the configured one
    #[arg(short = 'f', long = "goals-file", value_name = "PATH")]
    pub goals_file: Option<PathBuf>,

    /// Use this scoring policy for this run
    #[arg(long, value_enum)]
    pub scoring: Option<ScoringArg>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config goals file path
    #[arg(long = "config-goals-file", value_name = "PATH")]
    pub config_goals_file: Option<PathBuf>,

    /// Override config scoring policy
    #[arg(long = "config-scoring", value_enum)]
    pub config_scoring: Option<ScoringArg>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert the `--config-*` flags into config overrides
    ///
    /// These may be saved by `config set` / `config unset`.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| Level::from(lvl).to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            goals_file: self
                .config_goals_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            policy: self.config_scoring.map(Into::into),
        }
    }

    /// Convert the per-run flags (`--goals-file`, `--scoring`) into overrides
    pub fn to_run_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            goals_file: self
                .goals_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            policy: self.scoring.map(Into::into),
            ..ConfigOverrides::default()
        }
    }

    /// Configuration for this run: `config` with the per-run flags on top
    ///
    /// The result is never saved, so per-run flags take precedence over the
    /// `--config-*` flags without leaking into the config file.
    pub fn run_config(&self, config: &Config) -> Config {
        let mut run_config = config.clone();
        run_config.apply_overrides(&self.to_run_overrides());
        run_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            goals_file: None,
            scoring: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_goals_file: None,
            config_scoring: None,
            command,
        }
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::List).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.goals_file.is_none());
        assert!(overrides.policy.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Score);
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/quest.log"));
        cli.config_verbose = Some(true);
        cli.config_goals_file = Some(PathBuf::from("/tmp/goals.txt"));
        cli.config_scoring = Some(ScoringArg::PerEvent);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/quest.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.goals_file, Some("/tmp/goals.txt".to_string()));
        assert_eq!(overrides.policy, Some(ScoringPolicy::PerEvent));
    }

    #[test]
    fn test_run_flags_are_not_config_overrides() {
        let mut cli = bare_cli(Command::List);
        cli.goals_file = Some(PathBuf::from("short.txt"));
        cli.scoring = Some(ScoringArg::PerEvent);

        let overrides = cli.to_config_overrides();
        assert!(overrides.goals_file.is_none());
        assert!(overrides.policy.is_none());

        let run = cli.to_run_overrides();
        assert_eq!(run.goals_file, Some("short.txt".to_string()));
        assert_eq!(run.policy, Some(ScoringPolicy::PerEvent));
        assert!(run.level.is_none());
    }

    #[test]
    fn test_run_flags_take_precedence_over_config_flags() {
        let mut cli = bare_cli(Command::List);
        cli.goals_file = Some(PathBuf::from("short.txt"));
        cli.config_goals_file = Some(PathBuf::from("long.txt"));
        cli.scoring = Some(ScoringArg::OnCompletion);
        cli.config_scoring = Some(ScoringArg::PerEvent);

        let mut config = Config::default();
        config.apply_overrides(&cli.to_config_overrides());
        let run_config = cli.run_config(&config);

        assert_eq!(config.paths.goals_file, "long.txt");
        assert_eq!(config.scoring.policy, ScoringPolicy::PerEvent);
        assert_eq!(run_config.paths.goals_file, "short.txt");
        assert_eq!(run_config.scoring.policy, ScoringPolicy::OnCompletion);
    }

    #[test]
    fn test_parse_new_checklist() {
        let cli = Cli::try_parse_from([
            "quest",
            "new",
            "checklist",
            "Attend temple",
            "50",
            "--required",
            "10",
            "--bonus",
            "100",
        ])
        .unwrap();

        let Command::New { goal } = cli.command else {
            panic!("expected new command");
        };
        assert_eq!(
            GoalRequest::from(goal),
            GoalRequest::Checklist {
                name: "Attend temple".to_string(),
                points: 50,
                required_count: 10,
                bonus_points: 100,
            }
        );
    }

    #[test]
    fn test_parse_rejects_negative_points() {
        let result = Cli::try_parse_from(["quest", "new", "simple", "Read", "-5"]);
        assert!(result.is_err());
    }
}
