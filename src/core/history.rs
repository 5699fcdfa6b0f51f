//! Phase transition history.
//!
//! Keeps an ordered, optionally bounded record of phase changes so a host
//! can show "what just happened" or correlate log lines with rounds.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use region_explorer::core::StateTransition;
/// use region_explorer::views::TriviaPhase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: TriviaPhase::Idle,
///     to: TriviaPhase::Running,
///     timestamp: Utc::now(),
///     round: 0,
/// };
/// assert_eq!(transition.round, 0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Phase being left
    pub from: S,
    /// Phase being entered
    pub to: S,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
    /// Catalog position the change applied to (question index for trivia)
    pub round: usize,
}

/// Ordered history of phase changes.
///
/// `record` is pure and returns a new history. A bounded history drops its
/// oldest entries once the limit is reached.
///
/// # Example
///
/// ```rust
/// use region_explorer::core::{StateHistory, StateTransition};
/// use region_explorer::views::TriviaPhase;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: TriviaPhase::Idle,
///         to: TriviaPhase::Running,
///         timestamp: Utc::now(),
///         round: 0,
///     })
///     .record(StateTransition {
///         from: TriviaPhase::Running,
///         to: TriviaPhase::Revealed,
///         timestamp: Utc::now(),
///         round: 0,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Idle -> Running -> Revealed
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` transitions.
    ///
    /// A limit of zero is treated as one.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit.max(1)),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// ```rust
    /// use region_explorer::core::{StateHistory, StateTransition};
    /// use region_explorer::views::TriviaPhase;
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let next = history.record(StateTransition {
    ///     from: TriviaPhase::Idle,
    ///     to: TriviaPhase::Running,
    ///     timestamp: Utc::now(),
    ///     round: 0,
    /// });
    /// assert_eq!(next.len(), 1);
    /// assert_eq!(history.len(), 0); // original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while transitions.len() > limit {
                transitions.pop_front();
            }
        }
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Phases traversed: the first retained `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last retained transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent transition, if any.
    pub fn latest(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
