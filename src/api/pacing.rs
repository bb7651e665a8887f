use std::time::Duration;
use tracing::debug;

/// Minimum interval between consecutive requests of a batch, to stay under
/// the provider's rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPacing {
    interval: Duration,
}

impl RequestPacing {
    /// Interval the provider allows between requests
    pub const PROVIDER_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// No delay at all, for tests and local mirrors
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait before the request at `index` of a batch; the first goes out
    /// immediately.
    pub async fn before_request(&self, index: usize) {
        if index == 0 || self.interval.is_zero() {
            return;
        }
        debug!(interval_ms = self.interval.as_millis() as u64, "pacing request");
        tokio::time::sleep(self.interval).await;
    }
}

impl Default for RequestPacing {
    fn default() -> Self {
        Self::new(Self::PROVIDER_INTERVAL)
    }
}
