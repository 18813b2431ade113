//! The output slot a host displays conversions in.
//!
//! Conversions may overlap when the host starts a new run before the previous one settles. Each
//! run takes a [`RunTicket`] when it starts and hands its result to [`OutputSlot::settle`], which
//! applies the configured [`RunOrdering`].

use crate::config::RunOrdering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunTicket(u64);

impl RunTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct OutputSlot {
    ordering: RunOrdering,
    issued: u64,
    shown: Option<(RunTicket, String)>,
}

impl OutputSlot {
    pub fn new(ordering: RunOrdering) -> Self {
        Self {
            ordering,
            issued: 0,
            shown: None,
        }
    }

    /// Starts a run.
    pub fn begin(&mut self) -> RunTicket {
        self.issued += 1;
        RunTicket(self.issued)
    }

    /// Offers the result of the run holding `ticket`. Returns whether it replaced the displayed
    /// document.
    pub fn settle(&mut self, ticket: RunTicket, svg: String) -> bool {
        if self.ordering == RunOrdering::Sequenced {
            if let Some((shown, _)) = &self.shown {
                if ticket <= *shown {
                    tracing::debug!(
                        run = ticket.0,
                        shown = shown.0,
                        "dropping result of superseded run"
                    );
                    return false;
                }
            }
        }
        self.shown = Some((ticket, svg));
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.shown.as_ref().map(|(_, svg)| svg.as_str())
    }

    /// Ticket of the run whose result is on display.
    pub fn current_ticket(&self) -> Option<RunTicket> {
        self.shown.as_ref().map(|(ticket, _)| *ticket)
    }
}

impl Default for OutputSlot {
    fn default() -> Self {
        Self::new(RunOrdering::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_settled_wins_by_default() {
        let mut slot = OutputSlot::default();
        let first = slot.begin();
        let second = slot.begin();
        assert!(slot.settle(second, "second".to_string()));
        assert!(slot.settle(first, "first".to_string()));
        assert_eq!(slot.current(), Some("first"));
        assert_eq!(slot.current_ticket(), Some(first));
    }

    #[test]
    fn sequenced_drops_stale_results() {
        let mut slot = OutputSlot::new(RunOrdering::Sequenced);
        let first = slot.begin();
        let second = slot.begin();
        assert!(slot.settle(second, "second".to_string()));
        assert!(!slot.settle(first, "first".to_string()));
        assert_eq!(slot.current(), Some("second"));

        let third = slot.begin();
        assert!(slot.settle(third, "third".to_string()));
        assert_eq!(slot.current(), Some("third"));
        assert!(third.sequence() > second.sequence());
    }

    #[test]
    fn sequenced_still_shows_interim_results() {
        let mut slot = OutputSlot::new(RunOrdering::Sequenced);
        let first = slot.begin();
        let second = slot.begin();
        assert!(slot.settle(first, "first".to_string()));
        assert!(slot.settle(second, "second".to_string()));
        assert_eq!(slot.current(), Some("second"));
    }
}
