//! Generation-counter debounce for deferred work on the UI loop.
//!
//! Each trigger bumps the generation and schedules its work after the delay;
//! when the delay elapses the work only runs if no newer trigger happened in
//! the meantime. Superseded timers are left to fire and do nothing.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    /// Register a trigger and return the ticket its deferred work must hold.
    pub fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Invalidate any scheduled work without scheduling new work.
    pub fn cancel(&mut self) {
        self.bump();
    }

    /// Whether work holding `ticket` is still the latest trigger.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}
