//! Trailing-edge debounce for search input.
//!
//! The debouncer does not own a timer. Callers report each input with the
//! current time and poll it later; a value is released once no newer input
//! arrived for the whole delay. This keeps it usable from the browser event
//! loop and from plain tests alike.

/// Holds the most recent value until the input goes quiet.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due_at: u64,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Record an input at `now_ms`, replacing any pending value and
    /// restarting the quiet period.
    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            value,
            due_at: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// Release the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.due_at => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// When the pending value becomes due, if any.
    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_after_quiet_period() {
        let mut d = Debouncer::new(300);
        d.call("iph", 1_000);

        assert_eq!(d.poll(1_299), None);
        assert_eq!(d.poll(1_300), Some("iph"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(2_000), None);
    }

    #[test]
    fn test_new_input_restarts_the_timer() {
        let mut d = Debouncer::new(300);
        d.call("i", 0);
        d.call("ip", 200);
        d.call("iph", 400);

        assert_eq!(d.poll(500), None);
        assert_eq!(d.due_at(), Some(700));
        assert_eq!(d.poll(700), Some("iph"));
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::new(10);
        d.call(1, 0);
        d.cancel();
        assert_eq!(d.poll(100), None);
    }

    #[test]
    fn test_zero_delay_is_immediate() {
        let mut d = Debouncer::new(0);
        d.call('x', 5);
        assert_eq!(d.poll(5), Some('x'));
    }
}
