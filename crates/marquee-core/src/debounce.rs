//! Quiet-period debouncing on top of generation tickets.

use std::time::Duration;

use crate::ticket::{Ticket, TicketCounter};

/// Quiet period after the last keystroke before the query is resolved.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(250);

/// Tracks the single pending resolution for a stream of edits.
///
/// The host owns the actual timer: it sleeps for [`Debouncer::interval`]
/// after each [`Debouncer::schedule`] and hands the ticket back to
/// [`Debouncer::fire`]. Only the last scheduled ticket fires, and only once.
#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    tickets: TicketCounter,
    pending: bool,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            tickets: TicketCounter::new(),
            pending: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Restart the quiet period. Earlier tickets can no longer fire.
    pub fn schedule(&mut self) -> Ticket {
        self.pending = true;
        self.tickets.issue()
    }

    /// Returns `true` when `ticket` is the live pending one; consumes it.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && self.tickets.is_current(ticket) {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_schedule_wins() {
        let mut d = Debouncer::default();
        let a = d.schedule();
        let b = d.schedule();
        let c = d.schedule();
        assert!(!d.fire(a));
        assert!(!d.fire(b));
        assert!(d.fire(c));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_fires_once() {
        let mut d = Debouncer::default();
        let a = d.schedule();
        assert!(d.fire(a));
        assert!(!d.fire(a));
    }

    #[test]
    fn test_default_interval() {
        assert_eq!(Debouncer::default().interval(), Duration::from_millis(250));
    }
}
