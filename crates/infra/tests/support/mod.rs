//! Shared test helpers for `lotclock-infra` integration tests.
//!
//! Provides a channel-backed tick sink and a clock anchored to tokio's paused
//! time so countdown tests can assert exact tick sequences.

#![allow(dead_code)]

use lotclock_common::time::RuntimeClock;
use lotclock_domain::RemainingBreakdown;
use tokio::sync::mpsc;

/// Wall-clock reading every countdown test starts from.
pub const BASE_MS: i64 = 1_000_000_000_000;

/// Sink that forwards every breakdown to a channel.
pub fn channel_sink(
) -> (impl Fn(RemainingBreakdown) + Send + Sync + 'static, mpsc::UnboundedReceiver<RemainingBreakdown>)
{
    let (tx, rx) = mpsc::unbounded_channel();
    let sink = move |breakdown: RemainingBreakdown| {
        let _ = tx.send(breakdown);
    };
    (sink, rx)
}

/// Everything delivered so far, without waiting.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<RemainingBreakdown>) -> Vec<RemainingBreakdown> {
    let mut seen = Vec::new();
    while let Ok(breakdown) = rx.try_recv() {
        seen.push(breakdown);
    }
    seen
}

/// Whole seconds remaining in each breakdown, for compact assertions.
pub fn remaining_seconds(seen: &[RemainingBreakdown]) -> Vec<u64> {
    seen.iter().map(RemainingBreakdown::total_seconds).collect()
}

/// Clock reading [`BASE_MS`] now and following tokio's (paused) timer.
pub fn runtime_clock() -> RuntimeClock {
    RuntimeClock::anchored_at(BASE_MS)
}
