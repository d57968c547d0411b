//! Goal manager: ordered goals plus the running score

use crate::core::error::Result;
use crate::core::models::Goal;
use crate::core::scoring::ScoringPolicy;
use crate::core::storage::{load_goal_file, save_goal_file};
use crate::{debug, info};
use std::path::Path;

/// Owns the goal list and the total score
///
/// Goals keep insertion order, which is also display order and the basis for
/// every index. The total score is an accumulator: it only grows as events
/// are recorded and is never recomputed from goal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalManager {
    goals: Vec<Goal>,
    total_score: u64,
    policy: ScoringPolicy,
}

impl GoalManager {
    /// Create an empty manager using the given scoring policy
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self {
            goals: Vec::new(),
            total_score: 0,
            policy,
        }
    }

    /// Append a goal; the score is unaffected
    pub fn add_goal(&mut self, goal: Goal) {
        debug!("Adding {} '{}'", goal.kind(), goal.name());
        self.goals.push(goal);
    }

    /// Record an event for the goal at the 0-based `index`
    ///
    /// Out-of-range indices are ignored. Returns the points added to the
    /// total score, which is 0 when the index was ignored or the event earned
    /// nothing.
    pub fn record_event(&mut self, index: usize) -> u64 {
        let count = self.goals.len();
        let Some(goal) = self.goals.get_mut(index) else {
            debug!("Ignoring event for goal index {index} ({count} goals)");
            return 0;
        };

        let outcome = goal.record_event();
        let awarded = self.policy.award(goal, outcome);
        self.total_score = self.total_score.saturating_add(awarded);

        if outcome.completed_now {
            info!("Goal completed: {}", goal.name());
        }
        debug!(
            "Recorded event for '{}': +{awarded} (total {})",
            goal.name(),
            self.total_score
        );
        awarded
    }

    /// Status lines numbered from 1, e.g. `1. [ ] Run a marathon`
    #[must_use]
    pub fn show_goals(&self) -> Vec<String> {
        self.goals
            .iter()
            .enumerate()
            .map(|(idx, goal)| format!("{}. {}", idx + 1, goal.status()))
            .collect()
    }

    /// Current total score
    #[must_use]
    pub const fn show_score(&self) -> u64 {
        self.total_score
    }

    /// Goals in display order
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Number of goals
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether there are no goals
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Active scoring policy
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Write the score and all goals to `path`, replacing its contents
    ///
    /// # Errors
    /// Returns `GoalError::File` if the file cannot be created or written
    pub fn save_goals(&self, path: &Path) -> Result<()> {
        save_goal_file(path, self.total_score, &self.goals)?;
        info!("Saved {} goals to {}", self.goals.len(), path.display());
        Ok(())
    }

    /// Replace the goals and score with the contents of `path`
    ///
    /// The file is parsed completely before anything is replaced, so on error
    /// the manager is left unchanged.
    ///
    /// # Errors
    /// Returns `GoalError::File` if the file cannot be read, or a parse error
    /// if its contents are malformed
    pub fn load_goals(&mut self, path: &Path) -> Result<()> {
        let (total_score, goals) = load_goal_file(path)?;
        info!("Loaded {} goals from {}", goals.len(), path.display());
        self.goals = goals;
        self.total_score = total_score;
        Ok(())
    }
}
