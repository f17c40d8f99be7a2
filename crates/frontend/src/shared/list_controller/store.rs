use leptos::prelude::*;

use super::guard::{FetchGuard, RequestTicket};
use super::state::{Key, ListAction, ListState};
use crate::shared::load_state::LoadState;

/// Reactive wrapper owning one [`ListState`] plus its fetch guard.
///
/// `Copy`, so event handlers and spawned futures capture it freely, the
/// same way pages pass `RwSignal` state around.
pub struct ListStore<Op, Md, Bt, Sl, Row>
where
    Op: Key + Send + Sync,
    Md: Key + Send + Sync,
    Bt: Key + Send + Sync,
    Sl: Key + Send + Sync,
    Row: Clone + Send + Sync + 'static,
{
    state: RwSignal<ListState<Op, Md, Bt, Sl, Row>>,
    guard: StoredValue<FetchGuard<Op>>,
}

impl<Op, Md, Bt, Sl, Row> Clone for ListStore<Op, Md, Bt, Sl, Row>
where
    Op: Key + Send + Sync,
    Md: Key + Send + Sync,
    Bt: Key + Send + Sync,
    Sl: Key + Send + Sync,
    Row: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op, Md, Bt, Sl, Row> Copy for ListStore<Op, Md, Bt, Sl, Row>
where
    Op: Key + Send + Sync,
    Md: Key + Send + Sync,
    Bt: Key + Send + Sync,
    Sl: Key + Send + Sync,
    Row: Clone + Send + Sync + 'static,
{
}

impl<Op, Md, Bt, Sl, Row> ListStore<Op, Md, Bt, Sl, Row>
where
    Op: Key + Send + Sync,
    Md: Key + Send + Sync,
    Bt: Key + Send + Sync,
    Sl: Key + Send + Sync,
    Row: Clone + Send + Sync + 'static,
{
    pub fn new(per_page: usize) -> Self {
        Self {
            state: RwSignal::new(ListState::new(per_page)),
            guard: StoredValue::new(FetchGuard::new()),
        }
    }

    /// Invalidate every outstanding request when the owning page unmounts.
    pub fn retire_on_cleanup(&self) {
        let store = *self;
        on_cleanup(move || store.retire());
    }

    /// The underlying signal, for view closures.
    pub fn state(&self) -> RwSignal<ListState<Op, Md, Bt, Sl, Row>> {
        self.state
    }

    pub fn dispatch(&self, action: ListAction<Op, Md, Bt, Sl, Row>) {
        self.state.update(|s| s.reduce(action));
    }

    /// Record that a request for `op` was issued: flips the operation to
    /// `Loading` and returns the ticket the response must present.
    pub fn begin(&self, op: Op) -> RequestTicket<Op> {
        let ticket = self.guard.try_update_value(|g| g.begin(op));
        self.dispatch(ListAction::SetApi {
            op,
            state: LoadState::Loading,
        });
        ticket.expect("fetch guard disposed while its page is live")
    }

    /// Whether a resolved request is still the latest for its operation.
    /// Stale and retired tickets are to be discarded silently.
    pub fn accept(&self, ticket: &RequestTicket<Op>) -> bool {
        self.guard
            .try_with_value(|g| g.is_current(ticket))
            .unwrap_or(false)
    }

    /// Apply the outcome of a request if its ticket is still current.
    /// Returns whether the outcome was applied.
    pub fn settle(&self, ticket: &RequestTicket<Op>, state: LoadState) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.dispatch(ListAction::SetApi {
            op: ticket.op(),
            state,
        });
        true
    }

    pub fn retire(&self) {
        self.guard.try_update_value(|g| g.retire());
    }
}
