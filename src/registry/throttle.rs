//! Pacing between registry queries.

use std::time::Duration;

/// Gate called before dispatching the queries for each identifier.
pub trait RateGate {
    fn wait(&mut self);
}

/// Sleeps a fixed delay between identifiers, never before the first one.
#[derive(Debug)]
pub struct FixedDelay {
    delay: Duration,
    started: bool,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        FixedDelay {
            delay,
            started: false,
        }
    }

    /// Whether the next call to [`RateGate::wait`] would sleep.
    pub fn would_sleep(&self) -> bool {
        self.started && !self.delay.is_zero()
    }
}

impl RateGate for FixedDelay {
    fn wait(&mut self) {
        if self.would_sleep() {
            log::debug!("throttle: sleep {:?}", self.delay);
            std::thread::sleep(self.delay);
        }
        self.started = true;
    }
}
