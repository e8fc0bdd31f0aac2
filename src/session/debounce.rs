use std::time::{Duration, Instant};

/// Trailing-edge debouncer: only the latest scheduled value fires, once
/// `delay` has passed without a newer one.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    #[inline] pub fn delay(&self) -> Duration { self.delay }

    /// Replace any pending value and restart the wait.
    pub fn schedule(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|(deadline, _)| now >= *deadline);
        if due { self.pending.take().map(|(_, value)| value) } else { None }
    }

    #[inline] pub fn pending(&self) -> bool { self.pending.is_some() }

    pub fn deadline(&self) -> Option<Instant> { self.pending.as_ref().map(|(deadline, _)| *deadline) }

    pub fn cancel(&mut self) { self.pending = None }
}
