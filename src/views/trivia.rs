//! Timed trivia rounds.
//!
//! The session itself is a pure state machine: it never schedules anything.
//! Time enters only through `tick`, which the `timer` module calls once per
//! period while a round is running.

use super::ViewId;
use crate::catalog::{Catalog, Difficulty, TriviaQuestion};
use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::state_enum;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

/// Countdown length used when no configuration overrides it.
pub const DEFAULT_ROUND_SECONDS: u32 = 15;

const HISTORY_LIMIT: usize = 64;

state_enum! {
    /// Where the current round is.
    pub enum TriviaPhase {
        /// Mounted, no countdown yet.
        Idle,
        /// Countdown running, answer hidden.
        Running,
        /// Countdown expired, answer shown.
        Revealed,
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TriviaError {
    #[error("a trivia round is already running")]
    TimerAlreadyRunning,
}

/// Snapshot of the quiz panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TriviaView {
    pub phase: TriviaPhase,
    pub question: String,
    pub difficulty: Difficulty,
    /// One-based position for "Question 2 of 5".
    pub number: usize,
    pub total: usize,
    pub seconds_remaining: u32,
    pub progress: f64,
    pub timer_active: bool,
    /// Present only once the round has been revealed.
    pub answer: Option<String>,
}

/// Cyclic question/answer session with a per-round countdown.
///
/// `answer_revealed` and `timer_active` are never both true, and
/// `seconds_remaining` stays within `[0, round_seconds]`.
#[derive(Debug)]
pub struct TriviaSession {
    view_id: ViewId,
    questions: Catalog<TriviaQuestion>,
    round_seconds: u32,
    question_index: usize,
    seconds_remaining: u32,
    timer_active: bool,
    answer_revealed: bool,
    round_token: u64,
    history: StateHistory<TriviaPhase>,
    can_arm: Guard<TriviaPhase>,
    can_tick: Guard<TriviaPhase>,
}

impl TriviaSession {
    /// Mount an idle session on the first question.
    ///
    /// Trivia catalogs are non-empty by construction. A zero round length is
    /// raised to one tick.
    pub fn new(questions: Catalog<TriviaQuestion>, round_seconds: u32) -> Self {
        let round_seconds = round_seconds.max(1);
        let view_id = ViewId::new();
        tracing::debug!(
            view = %view_id,
            questions = questions.len(),
            round_seconds,
            "Trivia session mounted"
        );
        Self {
            view_id,
            questions,
            round_seconds,
            question_index: 0,
            seconds_remaining: round_seconds,
            timer_active: false,
            answer_revealed: false,
            round_token: 0,
            history: StateHistory::bounded(HISTORY_LIMIT),
            can_arm: Guard::one_of(vec![TriviaPhase::Idle, TriviaPhase::Revealed]),
            can_tick: Guard::one_of(vec![TriviaPhase::Running]),
        }
    }

    pub fn with_default_round(questions: Catalog<TriviaQuestion>) -> Self {
        Self::new(questions, DEFAULT_ROUND_SECONDS)
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn phase(&self) -> TriviaPhase {
        if self.timer_active {
            TriviaPhase::Running
        } else if self.answer_revealed {
            TriviaPhase::Revealed
        } else {
            TriviaPhase::Idle
        }
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &TriviaQuestion {
        &self.questions.records()[self.question_index]
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn round_seconds(&self) -> u32 {
        self.round_seconds
    }

    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Identifies the current countdown. Changes every time a round is
    /// armed, so a tick source can tell whether it is still the live one.
    pub fn round_token(&self) -> u64 {
        self.round_token
    }

    pub fn history(&self) -> &StateHistory<TriviaPhase> {
        &self.history
    }

    /// Start the countdown for the current question.
    ///
    /// Allowed from `Idle` and `Revealed` only.
    pub fn start_timer(&mut self) -> Result<(), TriviaError> {
        let phase = self.phase();
        if !self.can_arm.check(&phase) {
            tracing::debug!(view = %self.view_id, phase = phase.name(), "Trivia start rejected");
            return Err(TriviaError::TimerAlreadyRunning);
        }
        self.arm();
        Ok(())
    }

    /// Advance to the next question (wrapping after the last) and start its
    /// countdown. Callable from any phase.
    pub fn next_question(&mut self) {
        self.question_index = (self.question_index + 1) % self.questions.len();
        self.arm();
    }

    /// One elapsed period. Ignored unless a round is running.
    pub fn tick(&mut self) -> TriviaPhase {
        let phase = self.phase();
        if !self.can_tick.check(&phase) {
            return phase;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        tracing::trace!(
            view = %self.view_id,
            remaining = self.seconds_remaining,
            "Trivia tick"
        );
        if self.seconds_remaining == 0 {
            self.timer_active = false;
            self.answer_revealed = true;
            self.record(phase, TriviaPhase::Revealed);
        }
        self.phase()
    }

    /// Tick only if `token` still names the live countdown.
    pub fn tick_round(&mut self, token: u64) -> TriviaPhase {
        if token != self.round_token {
            return self.phase();
        }
        self.tick()
    }

    /// Remaining share of the countdown bar, in `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.seconds_remaining) / f64::from(self.round_seconds)
    }

    pub fn view(&self) -> TriviaView {
        let question = self.current_question();
        TriviaView {
            phase: self.phase(),
            question: question.question.clone(),
            difficulty: question.difficulty.clone(),
            number: self.question_index + 1,
            total: self.questions.len(),
            seconds_remaining: self.seconds_remaining,
            progress: self.progress_fraction(),
            timer_active: self.timer_active,
            answer: self
                .answer_revealed
                .then(|| question.answer.clone()),
        }
    }

    /// Stop the countdown without revealing, leaving the session idle on the
    /// current question.
    pub fn halt(&mut self) {
        let from = self.phase();
        self.timer_active = false;
        self.answer_revealed = false;
        self.seconds_remaining = self.round_seconds;
        self.round_token = self.round_token.wrapping_add(1);
        if from != TriviaPhase::Idle {
            self.record(from, TriviaPhase::Idle);
        }
    }

    /// Back to the mount-time state: first question, idle, full bar.
    pub fn reset(&mut self) {
        self.question_index = 0;
        self.seconds_remaining = self.round_seconds;
        self.timer_active = false;
        self.answer_revealed = false;
        self.round_token = self.round_token.wrapping_add(1);
        self.history = StateHistory::bounded(HISTORY_LIMIT);
    }

    fn arm(&mut self) {
        let from = self.phase();
        self.answer_revealed = false;
        self.seconds_remaining = self.round_seconds;
        self.timer_active = true;
        self.round_token = self.round_token.wrapping_add(1);
        self.record(from, TriviaPhase::Running);
    }

    fn record(&mut self, from: TriviaPhase, to: TriviaPhase) {
        tracing::debug!(
            view = %self.view_id,
            from = from.name(),
            to = to.name(),
            question = self.question_index,
            "Trivia phase changed"
        );
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            round: self.question_index,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> TriviaSession {
        TriviaSession::with_default_round(Catalog::default_trivia())
    }

    fn run_out(session: &mut TriviaSession) {
        for _ in 0..session.round_seconds() {
            session.tick();
        }
    }

    #[test]
    fn mounts_idle_on_first_question() {
        let session = session();
        assert_eq!(session.phase(), TriviaPhase::Idle);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.seconds_remaining(), 15);
        assert!(!session.timer_active());
        assert!(!session.answer_revealed());
        assert!(session.view().answer.is_none());
    }

    #[test]
    fn start_timer_arms_full_round() {
        let mut session = session();
        session.start_timer().unwrap();

        assert_eq!(session.phase(), TriviaPhase::Running);
        assert_eq!(session.seconds_remaining(), 15);
        assert!(session.timer_active());
        assert_eq!(session.progress_fraction(), 1.0);
    }

    #[test]
    fn fifteen_ticks_reveal_the_answer() {
        let mut session = session();
        session.start_timer().unwrap();

        for expected in (1..15).rev() {
            assert_eq!(session.tick(), TriviaPhase::Running);
            assert_eq!(session.seconds_remaining(), expected);
        }
        assert_eq!(session.tick(), TriviaPhase::Revealed);

        assert_eq!(session.seconds_remaining(), 0);
        assert!(session.answer_revealed());
        assert!(!session.timer_active());
        assert_eq!(session.progress_fraction(), 0.0);
        assert_eq!(session.view().answer.as_deref(), Some("Victoria"));
    }

    #[test]
    fn ticks_after_reveal_change_nothing() {
        let mut session = session();
        session.start_timer().unwrap();
        run_out(&mut session);

        for _ in 0..5 {
            assert_eq!(session.tick(), TriviaPhase::Revealed);
        }
        assert_eq!(session.seconds_remaining(), 0);
    }

    #[test]
    fn ticks_while_idle_are_ignored() {
        let mut session = session();
        session.tick();
        assert_eq!(session.seconds_remaining(), 15);
        assert_eq!(session.phase(), TriviaPhase::Idle);
    }

    #[test]
    fn start_while_running_is_rejected() {
        let mut session = session();
        session.start_timer().unwrap();
        session.tick();

        assert_eq!(session.start_timer(), Err(TriviaError::TimerAlreadyRunning));
        assert_eq!(session.seconds_remaining(), 14);
    }

    #[test]
    fn restart_from_revealed_hides_answer() {
        let mut session = session();
        session.start_timer().unwrap();
        run_out(&mut session);

        session.start_timer().unwrap();
        assert_eq!(session.phase(), TriviaPhase::Running);
        assert!(!session.answer_revealed());
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn next_question_wraps_and_rearms() {
        let mut session = session();
        let count = session.question_count();

        for _ in 0..count - 1 {
            session.next_question();
        }
        assert_eq!(session.question_index(), count - 1);

        session.tick();
        session.next_question();
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.seconds_remaining(), 15);
        assert_eq!(session.phase(), TriviaPhase::Running);
    }

    #[test]
    fn stale_round_token_is_ignored() {
        let mut session = session();
        session.start_timer().unwrap();
        let stale = session.round_token();
        session.next_question();

        session.tick_round(stale);
        assert_eq!(session.seconds_remaining(), 15);

        session.tick_round(session.round_token());
        assert_eq!(session.seconds_remaining(), 14);
    }

    #[test]
    fn history_records_round_lifecycle() {
        let mut session = session();
        session.start_timer().unwrap();
        run_out(&mut session);
        session.next_question();

        let path: Vec<TriviaPhase> = session.history().get_path().into_iter().copied().collect();
        assert_eq!(
            path,
            vec![
                TriviaPhase::Idle,
                TriviaPhase::Running,
                TriviaPhase::Revealed,
                TriviaPhase::Running,
            ]
        );
        assert_eq!(session.history().latest().map(|t| t.round), Some(1));
    }

    #[test]
    fn custom_round_length_scales_progress() {
        let mut session = TriviaSession::new(Catalog::default_trivia(), 4);
        session.start_timer().unwrap();
        session.tick();
        assert!((session.progress_fraction() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn halt_stops_round_without_revealing() {
        let mut session = session();
        session.next_question();
        let token = session.round_token();
        session.halt();

        assert_eq!(session.phase(), TriviaPhase::Idle);
        assert_eq!(session.question_index(), 1);
        assert!(session.view().answer.is_none());
        session.tick_round(token);
        assert_eq!(session.seconds_remaining(), 15);
    }

    #[test]
    fn reset_returns_to_mount_state() {
        let mut session = session();
        session.next_question();
        session.tick();
        session.reset();

        assert_eq!(session.phase(), TriviaPhase::Idle);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.seconds_remaining(), 15);
        assert!(session.history().is_empty());
    }
}
