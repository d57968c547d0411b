//! Checklist goal model

use super::EventOutcome;
use crate::core::error::{GoalError, Result};
use serde::Serialize;

/// A goal that must be repeated a fixed number of times
///
/// Completion is derived from the counter: the goal is complete exactly when
/// `current_count == required_count`. The counter never passes the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistGoal {
    name: String,
    points: u32,
    required_count: u32,
    current_count: u32,
    bonus_points: u32,
}

impl ChecklistGoal {
    /// Create a new checklist goal with no progress
    ///
    /// # Arguments
    /// * `name` - Goal label
    /// * `points` - Base points for the goal
    /// * `required_count` - Number of events needed to complete (at least 1)
    /// * `bonus_points` - One-time bonus paid on completion
    ///
    /// # Errors
    /// Returns `GoalError::InvalidGoal` if `required_count` is zero
    pub(crate) fn new(name: String, points: u32, required_count: u32, bonus_points: u32) -> Result<Self> {
        Self::with_progress(name, points, required_count, 0, bonus_points)
    }

    /// Restore a checklist goal with existing progress
    ///
    /// # Errors
    /// Returns `GoalError::InvalidGoal` if `required_count` is zero or
    /// `current_count` exceeds it
    pub(crate) fn with_progress(
        name: String,
        points: u32,
        required_count: u32,
        current_count: u32,
        bonus_points: u32,
    ) -> Result<Self> {
        if required_count == 0 {
            return Err(GoalError::InvalidGoal(format!(
                "checklist goal '{name}' must require at least one completion"
            )));
        }
        if current_count > required_count {
            return Err(GoalError::InvalidGoal(format!(
                "checklist goal '{name}' has {current_count} of {required_count} completions"
            )));
        }
        Ok(Self {
            name,
            points,
            required_count,
            current_count,
            bonus_points,
        })
    }

    /// Goal label
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base points
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Number of events needed to complete
    #[must_use]
    pub const fn required_count(&self) -> u32 {
        self.required_count
    }

    /// Number of events recorded so far
    #[must_use]
    pub const fn current_count(&self) -> u32 {
        self.current_count
    }

    /// One-time completion bonus
    #[must_use]
    pub const fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    /// Whether the target count has been reached
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current_count >= self.required_count
    }

    /// Advance the counter by one; a no-op once complete
    pub fn record_event(&mut self) -> EventOutcome {
        if self.is_complete() {
            return EventOutcome::IGNORED;
        }
        self.current_count += 1;
        EventOutcome {
            applied: true,
            completed_now: self.is_complete(),
        }
    }

    /// Status line, e.g. `[ ] Attend temple (Completed 3/10 times)`
    #[must_use]
    pub fn status(&self) -> String {
        let mark = if self.is_complete() { 'X' } else { ' ' };
        format!(
            "[{mark}] {} (Completed {}/{} times)",
            self.name, self.current_count, self.required_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temple() -> ChecklistGoal {
        ChecklistGoal::new("Attend temple".to_string(), 50, 10, 100).unwrap()
    }

    #[test]
    fn test_checklist_creation() {
        let goal = temple();
        assert_eq!(goal.current_count(), 0);
        assert_eq!(goal.required_count(), 10);
        assert_eq!(goal.bonus_points(), 100);
        assert!(!goal.is_complete());
        assert_eq!(goal.status(), "[ ] Attend temple (Completed 0/10 times)");
    }

    #[test]
    fn test_completes_on_nth_event() {
        let mut goal = temple();
        for _ in 0..9 {
            let outcome = goal.record_event();
            assert!(outcome.applied);
            assert!(!outcome.completed_now);
        }
        assert!(!goal.is_complete());
        assert!(goal.status().contains("(Completed 9/10 times)"));

        let outcome = goal.record_event();
        assert!(outcome.completed_now);
        assert!(goal.is_complete());
        assert_eq!(goal.status(), "[X] Attend temple (Completed 10/10 times)");
    }

    #[test]
    fn test_events_after_completion_do_not_count() {
        let mut goal = ChecklistGoal::new("Journal".to_string(), 5, 2, 20).unwrap();
        goal.record_event();
        goal.record_event();

        let outcome = goal.record_event();
        assert_eq!(outcome, EventOutcome::IGNORED);
        assert_eq!(goal.current_count(), 2);
    }

    #[test]
    fn test_zero_required_count_rejected() {
        let result = ChecklistGoal::new("Nothing".to_string(), 5, 0, 20);
        assert!(matches!(result, Err(GoalError::InvalidGoal(_))));
    }

    #[test]
    fn test_progress_beyond_target_rejected() {
        let result = ChecklistGoal::with_progress("Journal".to_string(), 5, 3, 4, 20);
        assert!(result.is_err());

        let restored = ChecklistGoal::with_progress("Journal".to_string(), 5, 3, 3, 20).unwrap();
        assert!(restored.is_complete());
    }
}
