//! Simple goal model

use super::EventOutcome;
use serde::Serialize;

/// A one-off goal that completes the first time an event is recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleGoal {
    name: String,
    points: u32,
    is_complete: bool,
}

impl SimpleGoal {
    /// Create a new, incomplete simple goal
    ///
    /// # Arguments
    /// * `name` - Goal label (e.g., "Run a marathon")
    /// * `points` - Points awarded on completion
    #[must_use]
    pub(crate) const fn new(name: String, points: u32) -> Self {
        Self {
            name,
            points,
            is_complete: false,
        }
    }

    /// Restore a simple goal with a known completion state
    #[must_use]
    pub(crate) const fn with_state(name: String, points: u32, is_complete: bool) -> Self {
        Self {
            name,
            points,
            is_complete,
        }
    }

    /// Goal label
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points awarded on completion
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Whether the goal has been completed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Mark the goal complete; a no-op once complete
    pub fn record_event(&mut self) -> EventOutcome {
        if self.is_complete {
            return EventOutcome::IGNORED;
        }
        self.is_complete = true;
        EventOutcome {
            applied: true,
            completed_now: true,
        }
    }

    /// Status line, e.g. `[X] Run a marathon`
    #[must_use]
    pub fn status(&self) -> String {
        let mark = if self.is_complete { 'X' } else { ' ' };
        format!("[{mark}] {}", self.name)
    }
}
