//! In-memory ticket store
//!
//! Holds every ticket submitted during the session, newest first. Insertion
//! is the only mutation; order reflects call order rather than `created_at`.

use std::collections::VecDeque;

use crate::types::Ticket;

#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: VecDeque<Ticket>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a ticket at the front of the list
    pub fn add(&mut self, ticket: Ticket) {
        tracing::debug!(id = %ticket.id, "adding ticket to store");
        self.tickets.push_front(ticket);
    }

    /// All tickets, newest first
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Ticket> + '_ {
        self.tickets.iter()
    }

    /// Ticket at a zero-based position in newest-first order
    pub fn get(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    pub fn count(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
