//! Time management for the sampling loop
//!
//! Provides a clock abstraction so the engine can run against:
//! - System clock (when available)
//! - Fixed or stepped clocks (for deterministic tests and simulation)
//!
//! The publish gate is wall-clock aligned, so whether a source provides
//! wall-clock time matters to callers wiring up a scheduler.

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Source of time for the engine
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&mut self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&mut self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Create a clock pinned at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Pin the clock to a new timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedClock {
    fn now(&mut self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Stepped time source for simulation
///
/// Advances by a fixed increment on every `now()` call, so a scheduler that
/// reads the clock once per tick sees perfectly regular ticks. Used to
/// replay multi-minute scenarios in microseconds.
#[derive(Debug, Clone)]
pub struct StepClock {
    next: Timestamp,
    step_ms: u64,
}

impl StepClock {
    /// Create a clock that returns `start`, `start + step_ms`, ... on
    /// successive calls
    pub fn new(start: Timestamp, step_ms: u64) -> Self {
        Self { next: start, step_ms }
    }
}

impl TimeSource for StepClock {
    fn now(&mut self) -> Timestamp {
        let current = self.next;
        self.next += self.step_ms;
        current
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances() {
        let mut clock = FixedClock::new(1000);
        assert_eq!(clock.now(), 1000);

        clock.advance(500);
        assert_eq!(clock.now(), 1500);
    }

    #[test]
    fn step_clock_ticks_regularly() {
        let mut clock = StepClock::new(0, 1000);
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.now(), 1000);
        assert_eq!(clock.now(), 2000);
    }
}
