//! Latest-wins guard for overlapping refreshes.
//!
//! Each refresh takes a ticket when it starts. A slow earlier refresh that
//! finishes after a newer one has started finds its ticket stale and must not
//! touch the charts or the table.

use std::cell::Cell;
use std::rc::Rc;

/// Identifies one started refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Shared generation counter. Clones observe the same counter.
#[derive(Debug, Clone, Default)]
pub struct RefreshGate {
    generation: Rc<Cell<u64>>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, invalidating every earlier ticket.
    pub fn begin(&self) -> RefreshTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RefreshTicket(next)
    }

    /// True while no newer refresh has started.
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.generation.get() == ticket.0
    }
}
