//! Guard predicates for controlling phase transitions.
//!
//! A guard is a pure boolean function over a phase. Views consult guards
//! before applying an operation.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate that decides whether an operation may run from a phase.
///
/// # Example
///
/// ```rust
/// use region_explorer::core::Guard;
/// use region_explorer::views::TriviaPhase;
///
/// let can_arm = Guard::new(|p: &TriviaPhase| !matches!(p, TriviaPhase::Running));
///
/// assert!(can_arm.check(&TriviaPhase::Idle));
/// assert!(can_arm.check(&TriviaPhase::Revealed));
/// assert!(!can_arm.check(&TriviaPhase::Running));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that passes only for the listed phases.
    pub fn one_of(allowed: Vec<S>) -> Self
    where
        S: 'static,
    {
        Self::new(move |state: &S| allowed.contains(state))
    }

    /// Evaluate the predicate.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
