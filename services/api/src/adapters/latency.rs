//! services/api/src/adapters/latency.rs
//!
//! Artificial network latency. Every store operation resolves through
//! `Latency::simulate`, so callers always observe an asynchronous boundary.

use rand::Rng;
use std::time::Duration;

/// A randomized delay of `base + random() * jitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    base: Duration,
    jitter: Duration,
}

impl Latency {
    pub const DEFAULT_BASE_MS: u64 = 400;
    pub const DEFAULT_JITTER_MS: u64 = 200;

    pub fn from_millis(base_ms: u64, jitter_ms: u64) -> Self {
        Self {
            base: Duration::from_millis(base_ms),
            jitter: Duration::from_millis(jitter_ms),
        }
    }

    /// Resolves immediately. Used by tests and tooling.
    pub fn none() -> Self {
        Self::from_millis(0, 0)
    }

    /// Draws one delay from `[base, base + jitter)`.
    pub fn sample(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.base;
        }
        let factor: f64 = rand::thread_rng().gen();
        self.base + self.jitter.mul_f64(factor)
    }

    /// Hands `result` back after a sampled delay.
    ///
    /// Errors are delayed exactly like successes, so a failed lookup takes as
    /// long as a successful one.
    pub async fn simulate<T>(&self, result: T) -> T {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_millis(Self::DEFAULT_BASE_MS, Self::DEFAULT_JITTER_MS)
    }
}
