use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond source driving every wizard timer.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Virtual clock that only moves when told to. Used by scripted runs and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, delta_ms: u64) -> u64 {
        let next = self.now.get().saturating_add(delta_ms);
        self.now.set(next);
        next
    }

    pub fn set(&self, now_ms: u64) {
        if now_ms > self.now.get() {
            self.now.set(now_ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_never_moves_backwards() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.advance(50), 150);
        clock.set(120);
        assert_eq!(clock.now_ms(), 150);
        clock.set(400);
        assert_eq!(clock.now_ms(), 400);
    }
}
