//! Eternal goal model

use super::EventOutcome;
use serde::Serialize;

/// A goal that is never finished; every recorded event counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EternalGoal {
    name: String,
    points: u32,
}

impl EternalGoal {
    /// Create a new eternal goal
    #[must_use]
    pub(crate) const fn new(name: String, points: u32) -> Self {
        Self { name, points }
    }

    /// Goal label
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points awarded per recorded event
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Record an occurrence; state never changes
    #[must_use]
    pub const fn record_event(&self) -> EventOutcome {
        EventOutcome {
            applied: true,
            completed_now: false,
        }
    }

    /// Status line, e.g. `[∞] Pray daily`
    #[must_use]
    pub fn status(&self) -> String {
        format!("[∞] {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eternal_goal_never_completes() {
        let goal = EternalGoal::new("Pray daily".to_string(), 10);
        for _ in 0..25 {
            let outcome = goal.record_event();
            assert!(outcome.applied);
            assert!(!outcome.completed_now);
        }
        assert_eq!(goal.status(), "[∞] Pray daily");
    }
}
