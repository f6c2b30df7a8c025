//! Integration tests for `delay` and `throttle`.
//!
//! Runtime tests use a paused tokio clock so every assertion about timing
//! is deterministic. The synchronous tests at the end run on the scheduler's
//! fallback runtime.

#![cfg(feature = "timer")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::time::Duration;

use rstest::rstest;
use underbar::decorator::{Throttle, Throttled, delay, throttle};

fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value| {
        if let Ok(mut values) = sink.lock() {
            values.push(value);
        }
    })
}

fn snapshot<T: Clone>(seen: &Mutex<Vec<T>>) -> Vec<T> {
    seen.lock().map(|values| values.clone()).unwrap_or_default()
}

// =============================================================================
// delay
// =============================================================================

#[tokio::test(start_paused = true)]
async fn delay_passes_arguments_after_wait() {
    let (seen, record) = recorder();
    let handle = delay(
        move |(left, right): (i32, i32)| record(left + right),
        Duration::from_millis(50),
        (20, 22),
    );

    tokio::time::sleep(Duration::from_millis(49)).await;
    assert!(snapshot(&seen).is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(snapshot(&seen), vec![42]);
    assert!(handle.has_fired());
}

#[tokio::test(start_paused = true)]
async fn delay_cancel_before_fire_prevents_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handle = delay(
        move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_millis(100),
        (),
    );

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(handle.cancel());
    assert!(!handle.cancel());
    assert!(handle.is_cancelled());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn delay_does_not_block_caller() {
    let (seen, record) = recorder();
    let record = Arc::new(record);
    let later = Arc::clone(&record);
    delay(move |()| later("deferred"), Duration::from_millis(5), ());
    record("immediate");

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(snapshot(&seen), vec!["immediate", "deferred"]);
}

// =============================================================================
// throttle
// =============================================================================

#[tokio::test(start_paused = true)]
async fn throttle_burst_invokes_leading_and_trailing_with_latest_arguments() {
    let (seen, record) = recorder();
    let throttled = throttle(record, Duration::from_millis(100));

    let outcomes: Vec<Throttled> = (1..=5).map(&throttled).collect();
    assert_eq!(outcomes[0], Throttled::Invoked);
    assert!(outcomes[1..].iter().all(|outcome| *outcome == Throttled::Deferred));
    assert_eq!(snapshot(&seen), vec![1]);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(snapshot(&seen), vec![1, 5]);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(snapshot(&seen), vec![1, 5]);
}

#[tokio::test(start_paused = true)]
async fn throttle_never_runs_twice_within_one_window() {
    let wait = Duration::from_millis(100);
    let (seen, record) = recorder();
    let throttled = Throttle::new(
        move |step: u32| record((step, tokio::time::Instant::now())),
        wait,
    );
    let start = tokio::time::Instant::now();

    // Calls land at 0ms, then 5ms, 15ms, ..., 295ms: never on a window edge.
    throttled.call(0);
    tokio::time::sleep(Duration::from_millis(5)).await;
    for step in 1..=30 {
        throttled.call(step);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    tokio::time::sleep(Duration::from_millis(200)).await;

    let runs = snapshot(&seen);
    let steps: Vec<u32> = runs.iter().map(|(step, _)| *step).collect();
    let offsets: Vec<Duration> = runs.iter().map(|(_, at)| *at - start).collect();

    assert_eq!(steps, vec![0, 10, 20, 30]);
    assert!(
        runs.windows(2).all(|pair| pair[1].1 - pair[0].1 >= wait),
        "runs closer than {wait:?}: {offsets:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn throttle_trailing_call_opens_new_window() {
    let (seen, record) = recorder();
    let throttled = Throttle::new(record, Duration::from_millis(100));

    throttled.call("lead");
    throttled.call("trail");
    tokio::time::sleep(Duration::from_millis(101)).await;
    assert_eq!(snapshot(&seen), vec!["lead", "trail"]);

    assert_eq!(throttled.call("early"), Throttled::Deferred);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(snapshot(&seen), vec!["lead", "trail", "early"]);
}

// =============================================================================
// Fallback runtime
// =============================================================================

#[rstest]
fn delay_from_synchronous_code_runs_on_fallback_runtime() {
    let (sender, receiver) = mpsc::channel();
    let handle = delay(
        move |message: &'static str| {
            sender.send(message).ok();
        },
        Duration::from_millis(5),
        "done",
    );
    assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).ok(), Some("done"));
    assert!(handle.has_fired());
}

#[rstest]
fn throttle_from_synchronous_code_fires_trailing_call() {
    let (sender, receiver) = mpsc::channel();
    let throttled = throttle(
        move |value: u8| {
            sender.send(value).ok();
        },
        Duration::from_millis(20),
    );
    throttled(1);
    throttled(2);
    throttled(3);

    assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).ok(), Some(1));
    assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).ok(), Some(3));
}
