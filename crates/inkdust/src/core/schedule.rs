//! Deferred events keyed to the caller's monotonic clock.
//!
//! Nothing fires on its own: the owner polls [`Scheduler::take_due`] once per
//! tick with the current time. Tests drive time by passing timestamps.

#[derive(Debug, Clone)]
struct Entry<E> {
    due: f64,
    event: E,
}

/// Queue of events waiting for their due time.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    entries: Vec<Entry<E>>,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `event` to become due at `due` (milliseconds).
    pub fn schedule(&mut self, due: f64, event: E) {
        self.entries.push(Entry { due, event });
    }

    /// Remove and return every event due at or before `now`,
    /// earliest first; ties keep scheduling order.
    pub fn take_due(&mut self, now: f64) -> Vec<E> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].due <= now {
                due.push(self.entries.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|e| e.event).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
