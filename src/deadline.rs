use std::{future::Future, time::Duration};
use tokio::time::{error::Elapsed, timeout_at, Instant};

/// An absolute point in time after which an operation is abandoned.
///
/// Deadlines nest: a child never expires later than its parent, so an
/// upstream call or a store write can never outlive the request that
/// triggered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Deadline {
        Deadline {
            at: Instant::now() + budget,
        }
    }

    pub fn child(&self, budget: Duration) -> Deadline {
        Deadline {
            at: self.at.min(Instant::now() + budget),
        }
    }

    /// Time left before expiry, `None` once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.at
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_none()
    }

    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output, Elapsed> {
        timeout_at(self.at, fut).await
    }
}
