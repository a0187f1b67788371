//! # Cancellable Delay
//!
//! An async sleep that completes after a duration unless a
//! [`CancellationSignal`] fires first.

use crate::utils::CancellationSignal;
use log::debug;
use std::fmt;
use std::time::Duration;
use tokio::sync::oneshot;

/// Error returned when a delay does not run to completion.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayError {
    /// The cancellation signal fired before the duration elapsed
    #[error("Cancelled")]
    Cancelled,
}

/// Result type for delay operations.
pub type DelayResult<T> = Result<T, DelayError>;

/// Lifecycle of a single delay invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayState {
    /// Timer scheduled, signal not yet fired
    Pending,
    /// Duration elapsed without cancellation
    Completed,
    /// Signal fired first
    Cancelled,
}

impl DelayState {
    /// Returns true for `Completed` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, DelayState::Pending)
    }
}

impl fmt::Display for DelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DelayState::Pending => "pending",
            DelayState::Completed => "completed",
            DelayState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

impl From<DelayResult<()>> for DelayState {
    fn from(result: DelayResult<()>) -> Self {
        match result {
            Ok(()) => DelayState::Completed,
            Err(DelayError::Cancelled) => DelayState::Cancelled,
        }
    }
}

/// Waits for `duration`, failing with [`DelayError::Cancelled`] if `signal`
/// is already cancelled or gets cancelled before the duration elapses.
///
/// Exactly one subscription is registered on `signal` while the delay is
/// pending. It is revoked on every exit path, including when the returned
/// future is dropped early. If the timer and the signal become ready in the
/// same poll, cancellation wins.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tilegrid::{sleep, CancellationSignal, DelayError};
///
/// # tokio_test::block_on(async {
/// let signal = CancellationSignal::new();
/// assert_eq!(sleep(Duration::from_millis(1), &signal).await, Ok(()));
///
/// signal.cancel();
/// let err = sleep(Duration::from_secs(60), &signal).await.unwrap_err();
/// assert_eq!(err, DelayError::Cancelled);
/// assert_eq!(err.to_string(), "Cancelled");
/// # });
/// ```
pub async fn sleep(duration: Duration, signal: &CancellationSignal) -> DelayResult<()> {
    if signal.is_cancelled() {
        debug!("delay of {:?} cancelled before scheduling", duration);
        return Err(DelayError::Cancelled);
    }

    let (tx, rx) = oneshot::channel::<()>();
    let _subscription = signal.subscribe(move || {
        // Receiver is gone once the delay resolved; nothing to notify then.
        let _ = tx.send(());
    });
    debug!("delay of {:?} {}", duration, DelayState::Pending);

    let result = tokio::select! {
        biased;
        _ = rx => Err(DelayError::Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    };

    debug!("delay of {:?} {}", duration, DelayState::from(result));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_completes_after_duration() {
        let signal = CancellationSignal::new();
        let start = Instant::now();

        let result = sleep(Duration::from_millis(100), &signal).await;

        assert_eq!(result, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_completes() {
        let signal = CancellationSignal::new();
        assert_eq!(sleep(Duration::ZERO, &signal).await, Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_cancelled_fails_immediately() {
        let signal = CancellationSignal::new();
        signal.cancel();
        let start = Instant::now();

        let result = sleep(Duration::from_millis(100), &signal).await;

        assert_eq!(result, Err(DelayError::Cancelled));
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_wait() {
        let signal = CancellationSignal::new();
        let canceller = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            canceller.cancel();
        });
        let start = Instant::now();

        let result = sleep(Duration::from_millis(100), &signal).await;

        assert_eq!(result, Err(DelayError::Cancelled));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(30));
        assert!(elapsed < Duration::from_millis(100));
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_future_releases_subscription() {
        let signal = CancellationSignal::new();
        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), sleep(Duration::from_secs(5), &signal))
                .await;

        assert!(timed_out.is_err());
        assert_eq!(signal.subscriber_count(), 0);
        signal.cancel();
    }

    #[test]
    fn test_cancelled_message() {
        assert_eq!(DelayError::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_state_from_result() {
        assert_eq!(DelayState::from(Ok(())), DelayState::Completed);
        assert_eq!(
            DelayState::from(Err(DelayError::Cancelled)),
            DelayState::Cancelled
        );
        assert!(!DelayState::Pending.is_terminal());
        assert!(DelayState::Completed.is_terminal());
        assert!(DelayState::Cancelled.is_terminal());
    }
}
