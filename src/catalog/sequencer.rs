//! Request Sequencer
//!
//! Hands out monotonic tickets so a slow, superseded fetch cannot overwrite
//! the result of a newer one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    issued: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; supersedes every earlier ticket
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no newer request has been issued since `ticket`
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Issue a ticket now and run `fut`; yields `None` if a newer request
    /// was issued before it finished
    pub fn latest<F: Future>(&self, fut: F) -> impl Future<Output = Option<F::Output>> {
        let ticket = self.issue();
        let sequencer = self.clone();
        async move {
            let output = fut.await;
            if sequencer.is_current(ticket) {
                Some(output)
            } else {
                log::debug!("[Sequencer] dropping stale response {:?}", ticket);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_slow_earlier_fetch_is_dropped() {
        let seq = RequestSequencer::new();
        let earlier = seq.latest(async { "old" });
        let later = seq.latest(async { "new" });

        // The later request lands first, the earlier one afterwards
        assert_eq!(block_on(later), Some("new"));
        assert_eq!(block_on(earlier), None);
    }

    #[test]
    fn test_lone_fetch_is_kept() {
        let seq = RequestSequencer::new();
        assert_eq!(block_on(seq.latest(async { 7 })), Some(7));
    }

    #[test]
    fn test_clones_share_counter() {
        let seq = RequestSequencer::new();
        let other = seq.clone();
        let ticket = seq.issue();
        other.issue();
        assert!(!seq.is_current(ticket));
    }
}
