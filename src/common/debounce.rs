use std::time::{Duration, Instant};

/// Reset-and-reschedule debounce: every poke pushes the deadline out by the
/// full delay, so a burst of triggers collapses into one evaluation once the
/// input goes quiet. Polled from the tick handler rather than owning a timer.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True exactly once per scheduled evaluation, after the delay has fully
    /// elapsed since the last poke.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_pokes_coalesce_into_one_evaluation() {
        let mut debounce = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        // three keystrokes inside 100ms
        debounce.poke(start);
        debounce.poke(start + Duration::from_millis(50));
        debounce.poke(start + Duration::from_millis(100));

        // nothing fires before the window closes
        assert!(!debounce.ready(start + Duration::from_millis(400)));
        assert!(!debounce.ready(start + Duration::from_millis(599)));

        // one evaluation, at least 500ms after the last keystroke
        assert!(debounce.ready(start + Duration::from_millis(600)));
        assert!(!debounce.ready(start + Duration::from_millis(601)));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debounce = Debouncer::new(Duration::from_millis(500));
        assert!(!debounce.pending());
        assert!(!debounce.ready(Instant::now() + Duration::from_secs(5)));
    }
}
