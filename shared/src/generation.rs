//! Discarding results of loads that were superseded while in flight.

use std::{cell::Cell, rc::Rc};

/// Counter shared by a view and the loads it starts.
///
/// Every [`LoadGeneration::begin`] or [`LoadGeneration::invalidate`] makes
/// all earlier tickets stale, so a slow response for an old key can no
/// longer overwrite the state of the current one.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration {
    current: Rc<Cell<u64>>,
}

/// Handle carried by one in-flight load.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding every earlier one.
    pub fn begin(&self) -> LoadTicket {
        self.invalidate();
        LoadTicket {
            generation: self.current.get(),
            current: Rc::clone(&self.current),
        }
    }

    /// Mark every outstanding ticket stale, e.g. when the view goes away.
    pub fn invalidate(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }
}

impl LoadTicket {
    /// Whether no newer load has started since this one.
    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slower_older_load_is_discarded() {
        let loads = LoadGeneration::new();
        let mut shown = None;

        // Navigate to A, then to B before A's response arrives.
        let for_a = loads.begin();
        let for_b = loads.begin();

        for (ticket, article) in [(&for_b, "B"), (&for_a, "A")] {
            if ticket.is_current() {
                shown = Some(article);
            }
        }
        assert_eq!(shown, Some("B"));
    }

    #[test]
    fn invalidate_drops_the_outstanding_load() {
        let loads = LoadGeneration::new();
        let ticket = loads.begin();
        assert!(ticket.is_current());

        loads.clone().invalidate();
        assert!(!ticket.is_current());
        assert!(loads.begin().is_current());
    }
}
