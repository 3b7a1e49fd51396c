//! Simulated "thinking" latency before a response is shown.
//!
//! The delay is cosmetic: it never changes what a command resolves to.
//! Tests inject [`NoDelay`]; the terminal uses [`FixedDelay`] from config.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// A non-blocking pause applied before each resolution.
#[async_trait]
pub trait ProcessingDelay: Send + Sync {
    async fn wait(&self);

    /// The nominal duration, for status output.
    fn duration(&self) -> Duration;
}

/// Resolve immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl ProcessingDelay for NoDelay {
    async fn wait(&self) {}

    fn duration(&self) -> Duration {
        Duration::ZERO
    }
}

/// Sleep on the tokio timer for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl ProcessingDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }

    fn duration(&self) -> Duration {
        self.0
    }
}

/// Pick a delay strategy from a millisecond setting (0 disables it).
pub fn from_millis(ms: u64) -> Arc<dyn ProcessingDelay> {
    if ms == 0 {
        Arc::new(NoDelay)
    } else {
        Arc::new(FixedDelay(Duration::from_millis(ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_millis_means_no_delay() {
        assert_eq!(from_millis(0).duration(), Duration::ZERO);
        assert_eq!(from_millis(300).duration(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_waits_on_the_tokio_clock() {
        let start = tokio::time::Instant::now();
        FixedDelay(Duration::from_millis(300)).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn no_delay_returns_immediately() {
        NoDelay.wait().await;
    }
}
