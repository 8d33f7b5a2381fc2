use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// Sliding-window call budget, tracked per named API channel.
///
/// Timestamps live only in memory. The check and the record are separate
/// operations, so two callers racing on the last slot may both pass.
pub struct RateLimiter {
    max_calls: usize,
    window: Duration,
    calls: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub const WINDOW: Duration = Duration::from_secs(60);

    pub fn new(max_calls_per_minute: usize) -> Self {
        Self::with_window(max_calls_per_minute, Self::WINDOW)
    }

    pub fn with_window(max_calls: usize, window: Duration) -> Self {
        Self {
            max_calls,
            window,
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Drop timestamps that left the window, then report whether the channel
    /// is still under budget.
    pub fn can_make_call(&self, channel: &str) -> bool {
        let now = Instant::now();
        let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        let recent = calls.entry(channel.to_string()).or_default();

        while let Some(&oldest) = recent.front() {
            if now.saturating_duration_since(oldest) < self.window {
                break;
            }
            recent.pop_front();
        }

        recent.len() < self.max_calls
    }

    pub fn record_call(&self, channel: &str) {
        let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        calls
            .entry(channel.to_string())
            .or_default()
            .push_back(Instant::now());
    }

    /// Number of recorded calls still inside the window, as of the last prune
    pub fn recorded(&self, channel: &str) -> usize {
        let calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        calls.get(channel).map_or(0, VecDeque::len)
    }
}
