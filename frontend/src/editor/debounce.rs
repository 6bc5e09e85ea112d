//! Cancel-and-reschedule debounce for the auto-save trigger.
//!
//! Each call to [`Debouncer::schedule`] supersedes the previous one: a
//! generation counter is bumped on every arm and on cancel, and a timer that
//! wakes up to find its generation stale does nothing. The timer itself is
//! `gloo_timers::future::TimeoutFuture` driven by `spawn_local`.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

pub struct Debouncer {
    generation: Rc<Cell<u64>>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: Rc::new(Cell::new(0)),
            delay_ms,
        }
    }

    /// Bumps the generation, invalidating any pending timer, and returns the
    /// new generation for the next timer to hold.
    fn arm(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    #[cfg(test)]
    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Invalidates any pending timer without scheduling a new one.
    pub fn cancel(&self) {
        self.arm();
    }

    /// Schedules `callback` to run after the configured delay unless a later
    /// `schedule` or `cancel` supersedes it first.
    pub fn schedule<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let armed = self.arm();
        let generation = Rc::clone(&self.generation);
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.get() == armed {
                callback();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescheduling_supersedes_the_previous_timer() {
        let debouncer = Debouncer::new(2000);
        let first = debouncer.arm();
        let second = debouncer.arm();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn cancel_invalidates_the_pending_timer() {
        let debouncer = Debouncer::new(2000);
        let armed = debouncer.arm();
        debouncer.cancel();
        assert!(!debouncer.is_current(armed));
    }
}
