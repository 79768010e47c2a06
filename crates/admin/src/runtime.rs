//! Latency and clock ports.
//!
//! Repositories simulate network round-trips with fixed per-operation
//! delays and stamp new records with today's date. Both are injected so
//! tests run instantly and deterministically.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};

/// How simulated latency is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// Sleep for the operation's fixed delay.
    #[default]
    Simulated,
    /// Return immediately.
    Instant,
}

impl Latency {
    /// Wait for `millis` milliseconds, or not at all for [`Latency::Instant`].
    ///
    /// Always resolves; there is no timeout or cancellation.
    pub async fn wait(self, millis: u64) {
        if self == Self::Simulated {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shared clock handle.
pub type SharedClock = Arc<dyn Clock>;
