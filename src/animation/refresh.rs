use crate::foundation::error::{GlowError, GlowResult};
use std::time::{Duration, Instant};

/// Blocks until the next display refresh.
pub trait RefreshDriver {
    /// Wait for the next refresh slot.
    fn wait_for_refresh(&mut self);
}

/// Offline driver: every refresh is immediately due.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unpaced;

impl RefreshDriver for Unpaced {
    fn wait_for_refresh(&mut self) {}
}

/// Paces refreshes to a fixed rate by sleeping the calling thread.
///
/// A late refresh is not made up for; the schedule restarts from the moment it was observed.
#[derive(Clone, Debug)]
pub struct FixedRefresh {
    interval: Duration,
    next_due: Option<Instant>,
}

impl FixedRefresh {
    /// Driver ticking `hz` times per second.
    pub fn new(hz: f64) -> GlowResult<Self> {
        Ok(Self {
            interval: refresh_interval(hz)?,
            next_due: None,
        })
    }

    /// Time between refreshes.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Time between refreshes at `hz`; rates too slow for a `Duration` are rejected.
pub(crate) fn refresh_interval(hz: f64) -> GlowResult<Duration> {
    if !(hz.is_finite() && hz > 0.0) {
        return Err(GlowError::validation("refresh rate must be > 0"));
    }
    Duration::try_from_secs_f64(1.0 / hz)
        .map_err(|_| GlowError::validation(format!("refresh rate {hz} Hz is too slow")))
}

impl RefreshDriver for FixedRefresh {
    fn wait_for_refresh(&mut self) {
        let now = Instant::now();
        let due = match self.next_due {
            Some(due) if due > now => {
                std::thread::sleep(due - now);
                due
            }
            _ => now,
        };
        self.next_due = Some(due + self.interval);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/refresh.rs"]
mod tests;
