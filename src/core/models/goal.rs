//! Goal sum type and the factory used to create goals

use super::{ChecklistGoal, EternalGoal, SimpleGoal};
use crate::core::error::{GoalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single recorded event did to a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The event changed (or, for eternal goals, counted toward) the goal
    pub applied: bool,
    /// This event moved the goal from incomplete to complete
    pub completed_now: bool,
}

impl EventOutcome {
    /// Outcome of an event on an already-complete goal
    pub const IGNORED: Self = Self {
        applied: false,
        completed_now: false,
    };
}

/// Goal variant discriminant, also the type tag in the save file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    /// Completes once
    Simple,
    /// Never completes
    Eternal,
    /// Completes after a fixed number of repetitions
    Checklist,
}

impl GoalKind {
    /// All variants, in menu order
    pub const ALL: [Self; 3] = [Self::Simple, Self::Eternal, Self::Checklist];

    /// Type tag written at the start of each saved record
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Simple => "SimpleGoal",
            Self::Eternal => "EternalGoal",
            Self::Checklist => "ChecklistGoal",
        }
    }

    /// Look up a variant by its save-file tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple Goal",
            Self::Eternal => "Eternal Goal",
            Self::Checklist => "Checklist Goal",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A trackable goal of any variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Goal {
    /// One-off goal
    Simple(SimpleGoal),
    /// Never-ending goal
    Eternal(EternalGoal),
    /// Repeated goal with a completion bonus
    Checklist(ChecklistGoal),
}

impl Goal {
    /// Variant of this goal
    #[must_use]
    pub const fn kind(&self) -> GoalKind {
        match self {
            Self::Simple(_) => GoalKind::Simple,
            Self::Eternal(_) => GoalKind::Eternal,
            Self::Checklist(_) => GoalKind::Checklist,
        }
    }

    /// Goal label
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Simple(g) => g.name(),
            Self::Eternal(g) => g.name(),
            Self::Checklist(g) => g.name(),
        }
    }

    /// Base points
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self {
            Self::Simple(g) => g.points(),
            Self::Eternal(g) => g.points(),
            Self::Checklist(g) => g.points(),
        }
    }

    /// Completion state; always false for eternal goals
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        match self {
            Self::Simple(g) => g.is_complete(),
            Self::Eternal(_) => false,
            Self::Checklist(g) => g.is_complete(),
        }
    }

    /// Apply one occurrence of the goal
    pub fn record_event(&mut self) -> EventOutcome {
        match self {
            Self::Simple(g) => g.record_event(),
            Self::Eternal(g) => g.record_event(),
            Self::Checklist(g) => g.record_event(),
        }
    }

    /// Single-line status rendering
    #[must_use]
    pub fn status(&self) -> String {
        match self {
            Self::Simple(g) => g.status(),
            Self::Eternal(g) => g.status(),
            Self::Checklist(g) => g.status(),
        }
    }
}

impl From<SimpleGoal> for Goal {
    fn from(goal: SimpleGoal) -> Self {
        Self::Simple(goal)
    }
}

impl From<EternalGoal> for Goal {
    fn from(goal: EternalGoal) -> Self {
        Self::Eternal(goal)
    }
}

impl From<ChecklistGoal> for Goal {
    fn from(goal: ChecklistGoal) -> Self {
        Self::Checklist(goal)
    }
}

/// Parameters for creating a new goal, as collected from the user
///
/// [`GoalRequest::build`] is the only public way to create a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalRequest {
    /// Create a simple goal
    Simple {
        /// Goal label
        name: String,
        /// Points on completion
        points: u32,
    },
    /// Create an eternal goal
    Eternal {
        /// Goal label
        name: String,
        /// Points per event
        points: u32,
    },
    /// Create a checklist goal
    Checklist {
        /// Goal label
        name: String,
        /// Base points
        points: u32,
        /// Repetitions needed
        required_count: u32,
        /// Bonus on completion
        bonus_points: u32,
    },
}

impl GoalRequest {
    /// Validate the request and build the goal
    ///
    /// The name is trimmed; it must be non-empty and fit on a single line
    /// because the save format stores one field per line.
    ///
    /// # Errors
    /// Returns `GoalError::InvalidGoal` for an unusable name or a checklist
    /// that requires zero completions
    pub fn build(self) -> Result<Goal> {
        match self {
            Self::Simple { name, points } => {
                Ok(SimpleGoal::new(validate_name(&name)?, points).into())
            }
            Self::Eternal { name, points } => {
                Ok(EternalGoal::new(validate_name(&name)?, points).into())
            }
            Self::Checklist {
                name,
                points,
                required_count,
                bonus_points,
            } => Ok(ChecklistGoal::new(
                validate_name(&name)?,
                points,
                required_count,
                bonus_points,
            )?
            .into()),
        }
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GoalError::InvalidGoal("goal name cannot be empty".to_string()));
    }
    if trimmed.contains(['\n', '\r']) {
        return Err(GoalError::InvalidGoal(
            "goal name must fit on a single line".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in GoalKind::ALL {
            assert_eq!(GoalKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(GoalKind::from_tag("NegativeGoal"), None);
        assert_eq!(GoalKind::from_tag("simplegoal"), None);
    }

    #[test]
    fn test_build_trims_name() {
        let goal = GoalRequest::Simple {
            name: "  Run a marathon ".to_string(),
            points: 1000,
        }
        .build()
        .unwrap();
        assert_eq!(goal.name(), "Run a marathon");
        assert_eq!(goal.kind(), GoalKind::Simple);
    }

    #[test]
    fn test_build_rejects_bad_names() {
        let empty = GoalRequest::Eternal {
            name: "   ".to_string(),
            points: 5,
        };
        assert!(matches!(empty.build(), Err(GoalError::InvalidGoal(_))));

        let multiline = GoalRequest::Eternal {
            name: "Pray\nDaily".to_string(),
            points: 5,
        };
        assert!(matches!(multiline.build(), Err(GoalError::InvalidGoal(_))));
    }

    #[test]
    fn test_build_checklist() {
        let goal = GoalRequest::Checklist {
            name: "Attend temple".to_string(),
            points: 50,
            required_count: 10,
            bonus_points: 100,
        }
        .build()
        .unwrap();
        assert_eq!(goal.kind(), GoalKind::Checklist);
        assert_eq!(goal.points(), 50);
        assert!(!goal.is_complete());

        let zero = GoalRequest::Checklist {
            name: "Attend temple".to_string(),
            points: 50,
            required_count: 0,
            bonus_points: 100,
        };
        assert!(zero.build().is_err());
    }

    #[test]
    fn test_eternal_is_never_complete() {
        let mut goal: Goal = EternalGoal::new("Pray".to_string(), 10).into();
        assert!(!goal.is_complete());
        for _ in 0..5 {
            goal.record_event();
        }
        assert!(!goal.is_complete());
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let mut goal: Goal = SimpleGoal::new("Read".to_string(), 20).into();
        assert_eq!(goal.status(), "[ ] Read");
        assert!(goal.record_event().completed_now);
        assert_eq!(goal.status(), "[X] Read");
    }
}
