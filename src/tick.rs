use std::time::{Duration, Instant};

/// Converts the continuous frame clock into fixed-interval logic ticks.
///
/// Each session owns its own gate, so independent games never share a
/// last-fire timestamp.
#[derive(Debug, Clone, Copy)]
pub struct TickGate {
    last_fire: Instant,
}

impl TickGate {
    /// Creates a gate whose first tick fires one interval after `start`.
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self { last_fire: start }
    }

    /// Returns true and rearms the gate when at least `interval` has passed
    /// since the last fire. Otherwise leaves the gate untouched.
    pub fn should_tick(&mut self, interval: Duration, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fire) >= interval {
            self.last_fire = now;
            return true;
        }

        false
    }

    #[must_use]
    pub fn last_fire(&self) -> Instant {
        self.last_fire
    }
}
