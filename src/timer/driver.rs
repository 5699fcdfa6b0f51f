//! Trivia session paired with its tick source.

use super::{lock, IntervalTicker, SharedSession, TickSource, TimerError};
use crate::views::{TriviaSession, TriviaView};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A trivia session whose countdown runs by itself.
///
/// Every operation that starts a round cancels the previous tick source
/// before arming a new one. Dropping the driver cancels its ticker.
#[derive(Debug)]
pub struct TimedTrivia<T: TickSource = IntervalTicker> {
    session: SharedSession,
    ticker: T,
}

impl TimedTrivia<IntervalTicker> {
    pub fn new(session: TriviaSession, period: Duration) -> Self {
        Self::with_ticker(session, IntervalTicker::new(period))
    }
}

impl<T: TickSource> TimedTrivia<T> {
    pub fn with_ticker(session: TriviaSession, ticker: T) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            ticker,
        }
    }

    /// Start the current question's countdown. Rejected while one is running,
    /// in which case the live ticker is left alone.
    pub fn start_timer(&mut self) -> Result<(), TimerError> {
        {
            let mut session = lock(&self.session);
            session.start_timer()?;
            self.ticker.cancel();
        }
        self.rearm()
    }

    /// Move to the next question and start its countdown.
    pub fn next_question(&mut self) -> Result<(), TimerError> {
        {
            let mut session = lock(&self.session);
            session.next_question();
            self.ticker.cancel();
        }
        self.rearm()
    }

    pub fn snapshot(&self) -> TriviaView {
        lock(&self.session).view()
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Tear the view down: stop ticking and return to the mount state.
    pub fn unmount(&mut self) {
        self.ticker.cancel();
        lock(&self.session).reset();
    }

    /// A round that cannot be ticked must not look like it is running.
    fn rearm(&mut self) -> Result<(), TimerError> {
        let result = self.ticker.start(Arc::clone(&self.session));
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Trivia ticker failed to start");
            lock(&self.session).halt();
        }
        result
    }
}
