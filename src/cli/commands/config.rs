//! Config command handler

use crate::args::ConfigSubcommand;
use eternal_quest::config::Config;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message if a key is unknown, a value is invalid, or the
/// config file cannot be written
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            save(config)?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            save(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    let Some(key) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nConfig file: {}", Config::get_config_file_path().display());
        return Ok(());
    };
    let value = config
        .get(key)
        .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
    println!("{value}");
    Ok(())
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn reset<R: BufRead>(input: &mut R) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if !confirmed(input) {
        println!("✗ Reset cancelled");
        return Ok(());
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

/// Read one answer line; only `y`/`yes` (any case) confirms
fn confirmed<R: BufRead>(input: &mut R) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Cli;
    use clap::Parser;
    use eternal_quest::core::ScoringPolicy;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_confirmed_answers() {
        assert!(confirmed(&mut Cursor::new("y\n")));
        assert!(confirmed(&mut Cursor::new("YES\n")));
        assert!(!confirmed(&mut Cursor::new("n\n")));
        assert!(!confirmed(&mut Cursor::new("")));
    }

    #[test]
    fn test_show_unknown_key() {
        let config = Config::from_defaults();
        assert!(show(&config, Some("policy")).is_ok());
        assert!(show(&config, Some("colour")).is_err());
    }

    #[test]
    fn test_set_does_not_save_run_flags() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("config.toml");
        let defaults = Config::from_defaults();

        let cli = Cli::try_parse_from([
            "quest",
            "-f",
            "/tmp/oneoff.txt",
            "--scoring",
            "per-event",
            "config",
            "set",
            "level",
            "info",
        ])
        .unwrap();

        let mut config = defaults.clone();
        config.apply_overrides(&cli.to_config_overrides());
        let run_config = cli.run_config(&config);
        assert_eq!(run_config.paths.goals_file, "/tmp/oneoff.txt");
        assert_eq!(run_config.scoring.policy, ScoringPolicy::PerEvent);

        config.set("level", "info").unwrap();
        config.save_to(&config_file).unwrap();

        let saved = Config::from_toml(&fs::read_to_string(&config_file).unwrap()).unwrap();
        assert_eq!(saved.logging.level, "info");
        assert_eq!(saved.paths.goals_file, defaults.paths.goals_file);
        assert_eq!(saved.scoring.policy, defaults.scoring.policy);
    }

    #[test]
    fn test_config_flags_are_saved() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("config.toml");

        let cli = Cli::try_parse_from([
            "quest",
            "--config-scoring",
            "per-event",
            "config",
            "set",
            "verbose",
            "true",
        ])
        .unwrap();

        let mut config = Config::from_defaults();
        config.apply_overrides(&cli.to_config_overrides());
        config.set("verbose", "true").unwrap();
        config.save_to(&config_file).unwrap();

        let saved = Config::from_toml(&fs::read_to_string(&config_file).unwrap()).unwrap();
        assert!(saved.logging.verbose);
        assert_eq!(saved.scoring.policy, ScoringPolicy::PerEvent);
    }
}
