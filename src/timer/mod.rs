//! Scheduled ticks for the trivia countdown.
//!
//! A `TickSource` delivers `tick_round` calls to a shared session on a
//! fixed period. `TimedTrivia` owns exactly one source per session and
//! re-arms it (cancel, then start) every time a round begins, so at most one
//! source is ever live and no tick outlives the round that armed it.

mod driver;
mod interval;

pub use driver::TimedTrivia;
pub use interval::IntervalTicker;

use crate::views::{TriviaError, TriviaSession};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Session handle shared between the view and its tick task.
pub type SharedSession = Arc<Mutex<TriviaSession>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error(transparent)]
    Trivia(#[from] TriviaError),

    #[error("no async runtime is available to drive the trivia timer")]
    NoRuntime,
}

/// Something that can drive a session's countdown.
pub trait TickSource: Send {
    /// Begin ticking `session`. Any previous schedule is cancelled first.
    fn start(&mut self, session: SharedSession) -> Result<(), TimerError>;

    /// Stop delivering ticks. Safe to call when idle.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

/// Lock a shared session. A tick task never panics while holding the
/// lock, so a poisoned lock still guards consistent state.
pub(crate) fn lock(session: &SharedSession) -> MutexGuard<'_, TriviaSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
