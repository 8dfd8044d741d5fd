//! Generation tickets for suppressing stale async results.
//!
//! Every timer or request captures a [`Ticket`] when it is issued. Before a
//! completion may touch shared state it is checked against the counter that
//! issued it; only the most recently issued ticket is current.

/// Opaque generation number captured by one async operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic ticket issuer.
#[derive(Debug, Default)]
pub struct TicketCounter {
    current: u64,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, invalidating every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}
