//! Scoring policies that price a recorded event

use crate::core::models::{EventOutcome, Goal};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How points are awarded when an event is recorded
///
/// Both policies pay eternal goals on every event and simple goals on
/// completion. They differ only for checklist goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    /// Checklist goals pay `points + bonus_points` on the completing event only
    #[default]
    OnCompletion,
    /// Checklist goals pay `points` for every counted event plus the bonus on completion
    PerEvent,
}

impl ScoringPolicy {
    /// Points earned by `goal` for an event that produced `outcome`
    ///
    /// `goal` is the state after the event was applied.
    #[must_use]
    pub fn award(self, goal: &Goal, outcome: EventOutcome) -> u64 {
        if !outcome.applied {
            return 0;
        }
        match goal {
            Goal::Eternal(g) => u64::from(g.points()),
            Goal::Simple(g) => {
                if outcome.completed_now {
                    u64::from(g.points())
                } else {
                    0
                }
            }
            Goal::Checklist(g) => {
                let bonus = if outcome.completed_now {
                    u64::from(g.bonus_points())
                } else {
                    0
                };
                match self {
                    Self::OnCompletion if outcome.completed_now => u64::from(g.points()) + bonus,
                    Self::OnCompletion => 0,
                    Self::PerEvent => u64::from(g.points()) + bonus,
                }
            }
        }
    }

    /// Config/CLI spelling of the policy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnCompletion => "on-completion",
            Self::PerEvent => "per-event",
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "on-completion" | "completion" => Ok(Self::OnCompletion),
            "per-event" | "event" => Ok(Self::PerEvent),
            _ => Err(format!(
                "Invalid scoring policy '{s}' (expected 'on-completion' or 'per-event')"
            )),
        }
    }
}
