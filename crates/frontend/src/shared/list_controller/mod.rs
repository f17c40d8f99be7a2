//! The list controller: the one state machine every "list + filter + CRUD
//! modal" page instantiates.
//!
//! A page declares its key sets as small `Copy` enums (operations, modals,
//! buttons, selection slots), picks a row type, and gets a strongly-typed
//! [`ListState`] mutated exclusively through [`ListAction`]s. The reducer is
//! pure; all I/O stays in the page, which records outcomes by dispatching
//! actions through a [`store::ListStore`] guarded by request tickets.

mod guard;
mod page_window;
mod state;
mod store;

pub use guard::{FetchGuard, RequestTicket};
pub use page_window::page_window;
pub use state::{Key, ListAction, ListState, NoKey};
pub use store::ListStore;
