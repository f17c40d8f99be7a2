use std::collections::HashMap;

use super::state::Key;

/// Proof that a request was issued for `op`; a response is applied only
/// while its ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket<Op: Key> {
    op: Op,
    seq: u64,
    generation: u64,
}

impl<Op: Key> RequestTicket<Op> {
    pub fn op(&self) -> Op {
        self.op
    }
}

/// Race fencing for overlapping requests.
///
/// Each named operation carries a monotonically increasing sequence
/// number; issuing a new request makes every earlier ticket for the same
/// operation stale, so a late response from a superseded request is
/// discarded instead of overwriting fresher data. Tickets for *different*
/// operations never interfere.
///
/// The controller-wide generation implements unmount cancellation:
/// [`FetchGuard::retire`] makes every outstanding ticket stale at once.
#[derive(Debug, Clone)]
pub struct FetchGuard<Op: Key> {
    seqs: HashMap<Op, u64>,
    generation: u64,
}

impl<Op: Key> FetchGuard<Op> {
    pub fn new() -> Self {
        Self {
            seqs: HashMap::new(),
            generation: 0,
        }
    }

    pub fn begin(&mut self, op: Op) -> RequestTicket<Op> {
        let seq = self.seqs.entry(op).or_insert(0);
        *seq += 1;
        RequestTicket {
            op,
            seq: *seq,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket<Op>) -> bool {
        ticket.generation == self.generation
            && self.seqs.get(&ticket.op).copied() == Some(ticket.seq)
    }

    /// Invalidate every outstanding ticket. Called on page unmount.
    pub fn retire(&mut self) {
        self.generation += 1;
    }
}

impl<Op: Key> Default for FetchGuard<Op> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Op {
        List,
        Detail,
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut g = FetchGuard::new();
        let first = g.begin(Op::List);
        let second = g.begin(Op::List);
        assert!(!g.is_current(&first));
        assert!(g.is_current(&second));
    }

    #[test]
    fn test_operations_do_not_interfere() {
        let mut g = FetchGuard::new();
        let list = g.begin(Op::List);
        let detail = g.begin(Op::Detail);
        assert!(g.is_current(&list));
        assert!(g.is_current(&detail));
    }

    #[test]
    fn test_out_of_order_resolutions_keep_latest_page() {
        use super::super::state::{ListAction, ListState, NoKey};
        use crate::shared::load_state::LoadState;
        use contracts::shared::pagination::PaginationDescriptor;

        let mut g = FetchGuard::new();
        let mut s: ListState<Op, NoKey, NoKey, NoKey, u32> = ListState::new(10);

        let page2 = g.begin(Op::List);
        let page3 = g.begin(Op::List);

        // page 3 arrives first and is current, so it lands
        assert!(g.is_current(&page3));
        s.reduce(ListAction::SetTable {
            rows: Some(vec![31, 32]),
            pagination: Some(PaginationDescriptor::compute(3, 10, 25).into()),
        });
        s.reduce(ListAction::SetApi {
            op: page3.op(),
            state: LoadState::Ok,
        });

        // the late page-2 resolution presents a stale ticket and is dropped
        assert!(!g.is_current(&page2));
        assert_eq!(s.page(), 3);
        assert_eq!(s.rows(), &[31, 32]);
    }

    #[test]
    fn test_retire_invalidates_everything() {
        let mut g = FetchGuard::new();
        let list = g.begin(Op::List);
        let detail = g.begin(Op::Detail);
        g.retire();
        assert!(!g.is_current(&list));
        assert!(!g.is_current(&detail));
        // a request issued after retirement is current again
        let fresh = g.begin(Op::List);
        assert!(g.is_current(&fresh));
    }
}
