//! Tokio-backed periodic tick source.

use super::{lock, SharedSession, TickSource, TimerError};
use crate::views::TriviaPhase;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Ticks a session once per `period` on a background task.
///
/// The first tick lands one full period after `start`. The task ends on its
/// own when the round stops running, and is aborted on `cancel` or drop.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl IntervalTicker {
    /// A zero period is raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self, session: SharedSession) -> Result<(), TimerError> {
        self.cancel();

        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        let token = lock(&session).round_token();
        let period = self.period;

        self.task = Some(runtime.spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let phase = lock(&session).tick_round(token);
                if phase != TriviaPhase::Running {
                    break;
                }
            }
            tracing::trace!(token, "Trivia ticker finished");
        }));
        tracing::debug!(token, period_ms = period.as_millis() as u64, "Trivia ticker started");
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("Trivia ticker cancelled");
            }
            task.abort();
        }
    }

    fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
