//! Sliding-window request limiter: at most `max_requests` acquisitions per rolling
//! `window`. Single-process, no fairness guarantees beyond timestamp order.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Gate for outbound provider calls. `acquire` suspends until admitting the caller
/// keeps the rolling window at or under `max_requests`.
#[derive(Debug)]
pub struct RequestWindowLimiter {
    max_requests: usize,
    window: Duration,
    history: Mutex<VecDeque<Instant>>,
}

impl RequestWindowLimiter {
    /// Creates a limiter admitting `max_requests` per rolling `window`.
    pub fn new(max_requests: usize, window: Duration) -> Self {
        assert!(max_requests > 0, "max_requests must be positive");
        Self {
            max_requests,
            window,
            history: Mutex::new(VecDeque::new()),
        }
    }

    /// Waits until a permit is available, then records the acquisition.
    /// The lock is only held to inspect and update the timestamp queue, never across an await.
    pub async fn acquire(&self) {
        loop {
            let wait_until = {
                let mut history = self.history.lock().expect("limiter lock poisoned");
                let now = Instant::now();
                while let Some(front) = history.front() {
                    if now.duration_since(*front) >= self.window {
                        history.pop_front();
                    } else {
                        break;
                    }
                }
                if history.len() < self.max_requests {
                    history.push_back(now);
                    return;
                }
                *history.front().expect("full history has a front") + self.window
            };
            tokio::time::sleep_until(wait_until).await;
        }
    }
}
