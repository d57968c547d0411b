//! Goal command handlers: new, record, list, score

use eternal_quest::config::Config;
use eternal_quest::core::{GoalManager, GoalRequest};
use eternal_quest::{info, verbose};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the goals file from config
///
/// # Errors
/// Returns an error if no goals file is configured
pub fn goals_path(config: &Config) -> Result<PathBuf, String> {
    if config.paths.goals_file.trim().is_empty() {
        return Err(
            "✗ No goals file configured. Use --goals-file or `quest config set goals_file PATH`."
                .to_string(),
        );
    }
    Ok(PathBuf::from(&config.paths.goals_file))
}

/// Load the manager from `path`, or start empty if the file does not exist yet
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed
pub fn open_manager(path: &Path, config: &Config) -> Result<GoalManager, String> {
    let mut manager = GoalManager::new(config.scoring.policy);
    if path.exists() {
        manager
            .load_goals(path)
            .map_err(|e| format!("✗ Failed to load goals: {e}"))?;
    } else {
        info!("No goals file at {}, starting fresh", path.display());
    }
    Ok(manager)
}

/// Save the manager to `path`, creating parent directories as needed
///
/// # Errors
/// Returns an error if the directory or file cannot be written
pub fn persist(manager: &GoalManager, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("✗ Failed to create directory {}: {e}", parent.display()))?;
    }
    manager
        .save_goals(path)
        .map_err(|e| format!("✗ Failed to save goals: {e}"))
}

/// Create a goal and append it to the goals file
///
/// # Errors
/// Returns an error if the goal is invalid or the file cannot be loaded or saved
pub fn run_new(request: GoalRequest, config: &Config) -> Result<(), String> {
    let path = goals_path(config)?;
    let mut manager = open_manager(&path, config)?;

    let goal = request.build().map_err(|e| format!("✗ {e}"))?;
    let kind = goal.kind();
    let name = goal.name().to_string();
    manager.add_goal(goal);
    persist(&manager, &path)?;

    println!("✓ Added {} #{}: {name}", kind.label(), manager.len());
    Ok(())
}

/// Record an event for the goal with the given 1-based number
///
/// # Errors
/// Returns an error if the number does not match a goal or the file cannot be
/// loaded or saved
pub fn run_record(number: usize, config: &Config) -> Result<(), String> {
    let path = goals_path(config)?;
    let mut manager = open_manager(&path, config)?;

    if number == 0 || number > manager.len() {
        return Err(format!(
            "✗ No goal #{number}; there are {} goals. Use `quest list` to see them.",
            manager.len()
        ));
    }

    let index = number - 1;
    let awarded = manager.record_event(index);
    persist(&manager, &path)?;

    let goal = &manager.goals()[index];
    if awarded > 0 {
        println!("✓ {}: earned {awarded} points!", goal.name());
    } else {
        println!("✓ {}: recorded, no points this time", goal.name());
    }
    verbose!("{}", goal.status());
    println!("Total Score: {}", manager.show_score());
    Ok(())
}

/// Print every goal with its number and status
///
/// # Errors
/// Returns an error if the goals file cannot be loaded
pub fn run_list(config: &Config) -> Result<(), String> {
    let path = goals_path(config)?;
    let manager = open_manager(&path, config)?;

    if manager.is_empty() {
        println!("No goals yet. Create one with `quest new`.");
        return Ok(());
    }
    for line in manager.show_goals() {
        println!("{line}");
    }
    Ok(())
}

/// Print the total score
///
/// # Errors
/// Returns an error if the goals file cannot be loaded
pub fn run_score(config: &Config) -> Result<(), String> {
    let path = goals_path(config)?;
    let manager = open_manager(&path, config)?;
    println!("Total Score: {}", manager.show_score());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eternal_quest::core::ScoringPolicy;
    use tempfile::TempDir;

    fn config_for(path: &Path, policy: ScoringPolicy) -> Config {
        let mut config = Config::default();
        config.paths.goals_file = path.to_string_lossy().to_string();
        config.scoring.policy = policy;
        config
    }

    #[test]
    fn test_goals_path_requires_config() {
        assert!(goals_path(&Config::default()).is_err());
    }

    #[test]
    fn test_new_and_record_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("goals.txt");
        let config = config_for(&path, ScoringPolicy::OnCompletion);

        run_new(
            GoalRequest::Simple {
                name: "Run a marathon".to_string(),
                points: 1000,
            },
            &config,
        )
        .unwrap();
        run_record(1, &config).unwrap();

        let manager = open_manager(&path, &config).unwrap();
        assert_eq!(manager.show_score(), 1000);
        assert_eq!(manager.show_goals(), ["1. [X] Run a marathon"]);
    }

    #[test]
    fn test_record_out_of_range_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goals.txt");
        let config = config_for(&path, ScoringPolicy::OnCompletion);

        run_new(
            GoalRequest::Eternal {
                name: "Pray".to_string(),
                points: 10,
            },
            &config,
        )
        .unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(run_record(0, &config).is_err());
        assert!(run_record(2, &config).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_new_rejects_invalid_goal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goals.txt");
        let config = config_for(&path, ScoringPolicy::OnCompletion);

        let result = run_new(
            GoalRequest::Checklist {
                name: "Attend temple".to_string(),
                points: 50,
                required_count: 0,
                bonus_points: 100,
            },
            &config,
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_manager_reports_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goals.txt");
        fs::write(&path, "not a score\n").unwrap();
        let config = config_for(&path, ScoringPolicy::OnCompletion);

        let err = open_manager(&path, &config).unwrap_err();
        assert!(err.contains("Line 1"));
    }
}
