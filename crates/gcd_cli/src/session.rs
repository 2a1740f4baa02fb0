use std::time::Duration;

/// Running totals for one CLI session. Owned by the caller and passed down
/// by reference; the algorithms themselves never see it.
#[derive(Clone, Debug, Default)]
pub struct Session {
    executions: u64,
    total_time: Duration,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.record_many(1, elapsed);
    }

    /// Adds `count` executions that took `elapsed` in total.
    pub fn record_many(&mut self, count: u64, elapsed: Duration) {
        self.executions += count;
        self.total_time += elapsed;
    }

    pub fn executions(&self) -> u64 {
        self.executions
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    pub fn average_time(&self) -> Option<Duration> {
        if self.executions == 0 {
            return None;
        }
        Some(self.total_time.div_f64(self.executions as f64))
    }
}
