//! Countdown behaviour against tokio's paused clock.

use region_explorer::catalog::Catalog;
use region_explorer::timer::{TickSource, TimedTrivia};
use region_explorer::views::{TriviaPhase, TriviaSession};
use std::time::Duration;
use tokio::time::sleep;

fn trivia() -> TimedTrivia {
    TimedTrivia::new(
        TriviaSession::with_default_round(Catalog::default_trivia()),
        Duration::from_secs(1),
    )
}

#[tokio::test(start_paused = true)]
async fn counts_down_once_per_second() {
    let mut trivia = trivia();
    trivia.start_timer().unwrap();

    sleep(Duration::from_millis(5_500)).await;

    let view = trivia.snapshot();
    assert_eq!(view.phase, TriviaPhase::Running);
    assert_eq!(view.seconds_remaining, 10);
    assert!(view.answer.is_none());
}

#[tokio::test(start_paused = true)]
async fn reveals_when_round_expires() {
    let mut trivia = trivia();
    trivia.start_timer().unwrap();

    sleep(Duration::from_millis(15_500)).await;

    let view = trivia.snapshot();
    assert_eq!(view.phase, TriviaPhase::Revealed);
    assert_eq!(view.seconds_remaining, 0);
    assert!(!view.timer_active);
    assert_eq!(view.answer.as_deref(), Some("Victoria"));

    tokio::task::yield_now().await;
    assert!(!trivia.ticker().is_active());
}

#[tokio::test(start_paused = true)]
async fn nothing_changes_after_reveal() {
    let mut trivia = trivia();
    trivia.start_timer().unwrap();
    sleep(Duration::from_millis(15_500)).await;
    let revealed = trivia.snapshot();

    sleep(Duration::from_secs(20)).await;

    assert_eq!(trivia.snapshot(), revealed);
}

#[tokio::test(start_paused = true)]
async fn next_question_restarts_the_countdown() {
    let mut trivia = trivia();
    trivia.start_timer().unwrap();
    sleep(Duration::from_millis(5_500)).await;

    trivia.next_question().unwrap();
    sleep(Duration::from_millis(1_200)).await;

    // One tick from the new round only; the old schedule is gone.
    let view = trivia.snapshot();
    assert_eq!(view.number, 2);
    assert_eq!(view.seconds_remaining, 14);
}

#[tokio::test(start_paused = true)]
async fn restart_after_reveal_runs_a_full_round() {
    let mut trivia = trivia();
    trivia.start_timer().unwrap();
    sleep(Duration::from_millis(15_500)).await;

    trivia.start_timer().unwrap();
    let view = trivia.snapshot();
    assert_eq!(view.phase, TriviaPhase::Running);
    assert_eq!(view.seconds_remaining, 15);
    assert!(view.answer.is_none());

    sleep(Duration::from_millis(3_500)).await;
    assert_eq!(trivia.snapshot().seconds_remaining, 12);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_ticks() {
    let mut trivia = trivia();
    trivia.start_timer().unwrap();
    sleep(Duration::from_millis(2_500)).await;

    trivia.unmount();
    sleep(Duration::from_secs(30)).await;

    let view = trivia.snapshot();
    assert_eq!(view.phase, TriviaPhase::Idle);
    assert_eq!(view.seconds_remaining, 15);
    assert!(!trivia.ticker().is_active());
}
