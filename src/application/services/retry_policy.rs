//! Fixed-delay retry budgets.

use std::time::Duration;

/// How many attempts an operation gets and how long to wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Default attempts for a cover lookup.
    pub const QUERY_ATTEMPTS: u32 = 3;
    /// Default wait between cover lookups.
    pub const QUERY_DELAY: Duration = Duration::from_secs(2);
    /// Default attempts per download candidate.
    pub const DOWNLOAD_ATTEMPTS: u32 = 5;

    /// Creates a policy. At least one attempt is always made.
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Policy used by the cover resolver when nothing is configured.
    #[must_use]
    pub fn query_default() -> Self {
        Self::new(Self::QUERY_ATTEMPTS, Self::QUERY_DELAY)
    }

    /// Policy used per download candidate when nothing is configured.
    #[must_use]
    pub fn download_default() -> Self {
        Self::new(Self::DOWNLOAD_ATTEMPTS, Duration::ZERO)
    }

    /// Policy with no delay, for tests and local endpoints.
    #[must_use]
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    /// Returns the total number of attempts.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the wait between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns true if `attempt` (1-based) is not the last one.
    #[must_use]
    pub const fn has_next(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Waits the configured delay, if any.
    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
