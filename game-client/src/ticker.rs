use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Periodic tick with an explicit start/stop lifecycle.
/// While stopped, `next_tick` never resolves.
#[derive(Debug)]
pub struct TickSource {
    period: Duration,
    interval: Option<Interval>,
    last_tick: Instant,
}

impl TickSource {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
            last_tick: Instant::now(),
        }
    }

    /// (Re)start ticking; the first tick arrives one period from now
    pub fn start(&mut self) {
        let now = Instant::now();
        let mut interval = time::interval_at(now + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.interval = Some(interval);
        self.last_tick = now;
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick and return the real seconds since the previous one
    pub async fn next_tick(&mut self) -> f64 {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
                let now = Instant::now();
                let elapsed = now.duration_since(self.last_tick);
                self.last_tick = now;
                elapsed.as_secs_f64()
            }
            None => std::future::pending().await,
        }
    }
}
