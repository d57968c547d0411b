//! Interactive menu, one numbered option per manager operation

use eternal_quest::core::{GoalKind, GoalManager, GoalRequest};
use eternal_quest::debug;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const MENU: &str = "\
Menu Options:
  1. Create New Goal
  2. Record Event
  3. List Goals
  4. Show Score
  5. Save Goals
  6. Load Goals
  7. Quit";

/// Interactive session over any line-based input and output
pub struct Menu<'m, R, W> {
    manager: &'m mut GoalManager,
    default_path: PathBuf,
    input: R,
    output: W,
}

impl<'m, R: BufRead, W: Write> Menu<'m, R, W> {
    /// Create a session; `default_path` is used when a save/load prompt is left blank
    pub fn new(manager: &'m mut GoalManager, default_path: PathBuf, input: R, output: W) -> Self {
        Self {
            manager,
            default_path,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    ///
    /// # Errors
    /// Returns an error only if reading input or writing output fails
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nYou have {} points.\n", self.manager.show_score())?;
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Select a choice from the menu: ")? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => self.create_goal()?,
                "2" => self.record_event()?,
                "3" => self.list_goals()?,
                "4" => writeln!(self.output, "Total Score: {}", self.manager.show_score())?,
                "5" => self.save_goals()?,
                "6" => self.load_goals()?,
                "7" => return Ok(()),
                other => writeln!(self.output, "Invalid choice '{other}'. Please try again.")?,
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for a non-negative integer; `None` on EOF or invalid input (already reported)
    fn prompt_number(&mut self, label: &str, field: &str) -> io::Result<Option<u32>> {
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };
        match answer.trim().parse::<u32>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid input for {field}.")?;
                Ok(None)
            }
        }
    }

    fn create_goal(&mut self) -> io::Result<()> {
        writeln!(self.output, "The types of Goals are:")?;
        for (idx, kind) in GoalKind::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", idx + 1, kind.label())?;
        }
        let Some(kind_choice) = self.prompt("Which type of goal would you like to create? ")? else {
            return Ok(());
        };
        let Some(kind) = kind_choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| GoalKind::ALL.get(idx).copied())
        else {
            return writeln!(self.output, "Invalid goal type.");
        };

        let Some(name) = self.prompt("What is the name of your goal? ")? else {
            return Ok(());
        };
        let Some(points) =
            self.prompt_number("What is the amount of points associated with this goal? ", "points")?
        else {
            return Ok(());
        };

        let request = match kind {
            GoalKind::Simple => GoalRequest::Simple { name, points },
            GoalKind::Eternal => GoalRequest::Eternal { name, points },
            GoalKind::Checklist => {
                let Some(required_count) = self.prompt_number(
                    "How many times does this goal need to be accomplished for a bonus? ",
                    "required count",
                )?
                else {
                    return Ok(());
                };
                let Some(bonus_points) = self.prompt_number(
                    "What is the bonus for accomplishing it that many times? ",
                    "bonus points",
                )?
                else {
                    return Ok(());
                };
                GoalRequest::Checklist {
                    name,
                    points,
                    required_count,
                    bonus_points,
                }
            }
        };

        match request.build() {
            Ok(goal) => {
                self.manager.add_goal(goal);
                writeln!(self.output, "Goal added.")
            }
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn list_goals(&mut self) -> io::Result<()> {
        if self.manager.is_empty() {
            return writeln!(self.output, "No goals yet.");
        }
        writeln!(self.output, "The goals are:")?;
        for line in self.manager.show_goals() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn record_event(&mut self) -> io::Result<()> {
        self.list_goals()?;
        if self.manager.is_empty() {
            return Ok(());
        }
        let Some(answer) = self.prompt("Which goal did you accomplish? ")? else {
            return Ok(());
        };
        let Some(index) = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&idx| idx < self.manager.len())
        else {
            return writeln!(self.output, "Invalid input for goal number.");
        };

        let awarded = self.manager.record_event(index);
        debug!("Menu recorded goal {} for {awarded} points", index + 1);
        if awarded > 0 {
            writeln!(self.output, "Congratulations! You have earned {awarded} points!")
        } else {
            writeln!(self.output, "Event recorded. No points earned this time.")
        }
    }

    fn file_prompt(&mut self, verb: &str) -> io::Result<Option<PathBuf>> {
        let label = format!(
            "Enter filename to {verb} goals [{}]: ",
            self.default_path.display()
        );
        Ok(self.prompt(&label)?.map(|answer| {
            let trimmed = answer.trim();
            if trimmed.is_empty() {
                self.default_path.clone()
            } else {
                PathBuf::from(trimmed)
            }
        }))
    }

    fn save_goals(&mut self) -> io::Result<()> {
        let Some(path) = self.file_prompt("save")? else {
            return Ok(());
        };
        match self.manager.save_goals(&path) {
            Ok(()) => writeln!(self.output, "Goals saved to {}.", path.display()),
            Err(e) => writeln!(self.output, "✗ {e}"),
        }
    }

    fn load_goals(&mut self) -> io::Result<()> {
        let Some(path) = self.file_prompt("load")? else {
            return Ok(());
        };
        match self.manager.load_goals(&path) {
            Ok(()) => writeln!(
                self.output,
                "Loaded {} goals from {}.",
                self.manager.len(),
                path.display()
            ),
            Err(e) => writeln!(self.output, "✗ {e}"),
        }
    }
}

/// Run the interactive menu on stdin/stdout
///
/// # Errors
/// Returns an error if the terminal cannot be read or written
pub fn run(manager: &mut GoalManager, default_path: &Path) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(manager, default_path.to_path_buf(), stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eternal_quest::core::ScoringPolicy;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(manager: &mut GoalManager, default_path: &Path, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(
            manager,
            default_path.to_path_buf(),
            Cursor::new(script.as_bytes()),
            &mut output,
        )
        .run()
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_create_record_save_load_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("goals.txt");
        let mut manager = GoalManager::new(ScoringPolicy::OnCompletion);

        let script = "1\n1\nRun a marathon\n1000\n\
                      1\n3\nAttend temple\n50\n2\n100\n\
                      2\n1\n2\n2\n2\n2\n\
                      4\n5\n\n7\n";
        let output = run_script(&mut manager, &path, script);

        assert!(output.contains("Congratulations! You have earned 1000 points!"));
        assert!(output.contains("Congratulations! You have earned 150 points!"));
        assert!(output.contains("Total Score: 1150"));
        assert!(path.exists());

        let mut reloaded = GoalManager::new(ScoringPolicy::OnCompletion);
        let output = run_script(&mut reloaded, &path, "6\n\n3\n7\n");
        assert!(output.contains("Loaded 2 goals"));
        assert!(output.contains("1. [X] Run a marathon"));
        assert!(output.contains("2. [X] Attend temple (Completed 2/2 times)"));
        assert_eq!(reloaded.show_score(), 1150);
    }

    #[test]
    fn test_invalid_input_keeps_looping() {
        let dir = TempDir::new().unwrap();
        let mut manager = GoalManager::default();
        let output = run_script(
            &mut manager,
            &dir.path().join("goals.txt"),
            "9\nabc\n1\n4\n1\n1\nName\nten\n7\n",
        );

        assert!(output.contains("Invalid choice '9'"));
        assert!(output.contains("Invalid choice 'abc'"));
        assert!(output.contains("Invalid goal type."));
        assert!(output.contains("Invalid input for points."));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_record_out_of_range_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut manager = GoalManager::default();
        let output = run_script(
            &mut manager,
            &dir.path().join("goals.txt"),
            "1\n2\nPray\n10\n2\n5\n7\n",
        );

        assert!(output.contains("Invalid input for goal number."));
        assert_eq!(manager.show_score(), 0);
    }

    #[test]
    fn test_load_missing_file_keeps_state() {
        let dir = TempDir::new().unwrap();
        let mut manager = GoalManager::default();
        let missing = dir.path().join("missing.txt");
        let output = run_script(&mut manager, &missing, "1\n2\nPray\n10\n6\n\n7\n");

        assert!(output.contains("✗ Failed to access goal file"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_eof_ends_session() {
        let dir = TempDir::new().unwrap();
        let mut manager = GoalManager::default();
        let output = run_script(&mut manager, &dir.path().join("goals.txt"), "1\n3\n");
        assert!(output.contains("Which type of goal"));
    }
}
