//! Fixed-period tick source for the game loop.
//!
//! The scheduler is either armed (one interval ticking every `period`) or
//! disarmed (no pending tick at all). Arming always drops the previous
//! interval first, so restarting a session can never leave two tick streams
//! running side by side.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

pub struct TickScheduler {
    period: Duration,
    timer: Option<Interval>,
    generation: u64,
}

impl TickScheduler {
    /// A disarmed scheduler
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
            generation: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Number of times the scheduler has been armed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancel any pending tick and arm a fresh interval.
    ///
    /// The first tick fires one full period from now. Must be called from
    /// within a tokio runtime.
    pub fn arm(&mut self) {
        self.disarm();
        let mut timer = interval_at(Instant::now() + self.period, self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.timer = Some(timer);
        self.generation += 1;
        debug!(generation = self.generation, period = ?self.period, "tick scheduler armed");
    }

    /// Cancel the pending tick, if any
    pub fn disarm(&mut self) {
        if self.timer.take().is_some() {
            debug!(generation = self.generation, "tick scheduler disarmed");
        }
    }

    /// Wait for the next tick.
    ///
    /// Never resolves while disarmed, which keeps a `tokio::select!` branch
    /// on it inert between sessions.
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
