//! Quiet-period timer for search and sort refetches.

use std::future;
use std::time::Duration;

use tokio::time::Instant;
use tokio::time::sleep_until;

/// A single restartable deadline.
///
/// One instance lives as long as its view. Every [`trigger`](Self::trigger)
/// pushes the deadline out by the full quiet period, so only the last
/// trigger in a burst ever fires.
#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Starts or restarts the quiet period from now.
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.quiet_period);
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Completes once the pending deadline passes, then disarms.
    ///
    /// Never completes while nothing is pending. Cancel safe: dropping the
    /// future leaves the deadline armed.
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => future::pending::<()>().await,
        }
    }
}
