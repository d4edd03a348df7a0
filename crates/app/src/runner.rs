//! Drives one countdown to a writer until it expires or is interrupted.

use std::future::Future;
use std::io::Write;

use anyhow::anyhow;
use lotclock_common::time::{Clock, SystemClock};
use lotclock_core::{format_remaining, DeadlineResolver};
use lotclock_domain::{CountdownConfig, CountdownState, RawDeadline, RemainingBreakdown};
use lotclock_infra::start_countdown_with_clock;
use tokio::sync::mpsc;
use tracing::info;

/// Printed when the deadline value cannot be resolved.
pub const NO_COUNTDOWN: &str = "no countdown";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The deadline value did not resolve; nothing was scheduled.
    NoCountdown,
    Expired,
    /// `shutdown` completed first and the countdown was stopped.
    Interrupted,
}

/// Counts down against the system clock.
pub async fn run_countdown<W, F>(
    raw: RawDeadline,
    config: &CountdownConfig,
    out: &mut W,
    shutdown: F,
) -> anyhow::Result<RunOutcome>
where
    W: Write,
    F: Future<Output = ()>,
{
    run_countdown_with_clock(raw, config, out, shutdown, SystemClock).await
}

/// Resolves `raw`, then writes one formatted line per tick to `out`.
///
/// Ticks travel over a channel so the sink stays `Send + Sync` while `out`
/// is only borrowed by this future. When `shutdown` resolves the countdown
/// is stopped and any lines already delivered are still written.
pub async fn run_countdown_with_clock<W, F, C>(
    raw: RawDeadline,
    config: &CountdownConfig,
    out: &mut W,
    shutdown: F,
    clock: C,
) -> anyhow::Result<RunOutcome>
where
    W: Write,
    F: Future<Output = ()>,
    C: Clock + Clone + 'static,
{
    let resolver = DeadlineResolver::new(clock.clone());
    let Some(instant) = resolver.resolve_now(&raw) else {
        writeln!(out, "{NO_COUNTDOWN}")?;
        return Ok(RunOutcome::NoCountdown);
    };
    info!(%instant, interval_ms = config.tick_interval_ms, "Counting down");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let format = config.format;
    let sink = move |breakdown: RemainingBreakdown| {
        let _ = tx.send(format_remaining(&breakdown, format));
    };
    let handle = start_countdown_with_clock(Some(instant), sink, config.tick_interval(), clock)?;

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            line = rx.recv() => match line {
                Some(line) => writeln!(out, "{line}")?,
                // The sink is dropped once the tick task finishes.
                None => return finished_outcome(handle.state()),
            },
            () = &mut shutdown => {
                handle.stop();
                info!(ticks = handle.tick_count(), "Countdown interrupted");
                while let Ok(line) = rx.try_recv() {
                    writeln!(out, "{line}")?;
                }
                return Ok(RunOutcome::Interrupted);
            }
        }
    }
}

/// Outcome once the tick task has finished on its own.
///
/// Only expiry ends the task cleanly; any other state means it died early.
fn finished_outcome(state: CountdownState) -> anyhow::Result<RunOutcome> {
    if state == CountdownState::Expired {
        Ok(RunOutcome::Expired)
    } else {
        Err(anyhow!("countdown task ended before expiry (state: {state})"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lotclock_common::time::RuntimeClock;
    use lotclock_domain::CountdownFormat;

    use super::*;

    const BASE_MS: i64 = 1_000_000_000_000;

    async fn run(
        raw: RawDeadline,
        config: &CountdownConfig,
        shutdown: Duration,
    ) -> (RunOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_countdown_with_clock(
            raw,
            config,
            &mut out,
            tokio::time::sleep(shutdown),
            RuntimeClock::anchored_at(BASE_MS),
        )
        .await
        .expect("run succeeds");
        (outcome, String::from_utf8(out).expect("utf-8 output"))
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_relative_deadline_to_expiry() {
        let (outcome, out) =
            run(RawDeadline::from(3), &CountdownConfig::default(), Duration::from_secs(60)).await;

        assert_eq!(outcome, RunOutcome::Expired);
        assert_eq!(out, "00:00:03\n00:00:02\n00:00:01\nExpired\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unresolvable_deadline_prints_no_countdown() {
        let (outcome, out) =
            run(RawDeadline::from("soon"), &CountdownConfig::default(), Duration::from_secs(1))
                .await;

        assert_eq!(outcome, RunOutcome::NoCountdown);
        assert_eq!(out, "no countdown\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_countdown() {
        let (outcome, out) =
            run(RawDeadline::from(100), &CountdownConfig::default(), Duration::from_millis(1_500))
                .await;

        assert_eq!(outcome, RunOutcome::Interrupted);
        assert_eq!(out, "00:01:40\n00:01:39\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_past_deadline_prints_expired_once() {
        let raw = RawDeadline::from("2001-01-01T00:00:00Z");

        let (outcome, out) = run(raw, &CountdownConfig::default(), Duration::from_secs(60)).await;

        assert_eq!(outcome, RunOutcome::Expired);
        assert_eq!(out, "Expired\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_units_format_and_interval_follow_config() {
        let config = CountdownConfig {
            tick_interval_ms: 2_000,
            format: CountdownFormat::Units,
            ..CountdownConfig::default()
        };

        let (outcome, out) = run(RawDeadline::from(4), &config, Duration::from_secs(60)).await;

        assert_eq!(outcome, RunOutcome::Expired);
        assert_eq!(out, "00h 00m 04s\n00h 00m 02s\nExpired\n");
    }

    #[test]
    fn test_task_ending_before_expiry_is_an_error() {
        assert_eq!(finished_outcome(CountdownState::Expired).ok(), Some(RunOutcome::Expired));

        for state in [CountdownState::Running, CountdownState::Stopped, CountdownState::Idle] {
            let err = finished_outcome(state).expect_err("not a clean expiry");
            assert!(err.to_string().contains(state.as_label()));
        }
    }
}
