use std::collections::HashMap;
use std::hash::Hash;

use contracts::shared::pagination::{Paginated, PaginationDescriptor, PaginationPatch};

use crate::shared::load_state::LoadState;

/// Marker bound for the page-supplied key enums. Key sets are fixed at
/// compile time, so an unknown key is a type error, not a runtime one.
pub trait Key: Copy + Eq + Hash + std::fmt::Debug + 'static {}

impl<T: Copy + Eq + Hash + std::fmt::Debug + 'static> Key for T {}

/// Uninhabited key set for controllers that have no modals, buttons or
/// selections (read-only dashboards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoKey {}

/// Aggregate state of one list page.
///
/// `Op` — named async operations, `Md` — modal ids, `Bt` — button busy
/// flags, `Sl` — selection slots, `Row` — the row type of the collection.
///
/// The open modal is a single `Option<Md>` rather than a map of booleans:
/// the UI has exactly one overlay surface, so mutual exclusion holds by
/// construction. For the same reason the load status of "the modal" is one
/// scalar shared by whichever dialog is currently open.
#[derive(Debug, Clone)]
pub struct ListState<Op: Key, Md: Key, Bt: Key, Sl: Key, Row: Clone> {
    apis: HashMap<Op, LoadState>,
    open_modal: Option<Md>,
    modal: LoadState,
    buttons: HashMap<Bt, bool>,
    selections: HashMap<Sl, Row>,
    table: Paginated<Row>,
}

/// One transition of the controller. All variants are total: they cannot
/// fail and perform no I/O.
#[derive(Debug, Clone)]
pub enum ListAction<Op: Key, Md: Key, Bt: Key, Sl: Key, Row: Clone> {
    /// Replace the load state of one named operation.
    SetApi { op: Op, state: LoadState },
    /// Open one modal (closing any sibling by construction) or close all.
    /// `load` overrides the shared modal load state; it defaults to `Ok`
    /// when opening and `Idle` when closing.
    SetModal {
        open: Option<Md>,
        load: Option<LoadState>,
    },
    /// Flag one button's action as in flight.
    SetButton { button: Bt, busy: bool },
    /// Set or clear the row targeted by a pending modal action.
    SetSelection { slot: Sl, row: Option<Row> },
    /// Replace the rows wholesale and/or shallow-merge a pagination patch.
    /// A failed fetch dispatches neither, leaving the table untouched.
    SetTable {
        rows: Option<Vec<Row>>,
        pagination: Option<PaginationPatch>,
    },
}

impl<Op: Key, Md: Key, Bt: Key, Sl: Key, Row: Clone> ListState<Op, Md, Bt, Sl, Row> {
    /// Fresh controller: every operation `Idle`, modal closed, selections
    /// empty, an empty collection at page 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            apis: HashMap::new(),
            open_modal: None,
            modal: LoadState::Idle,
            buttons: HashMap::new(),
            selections: HashMap::new(),
            table: Paginated::empty(per_page),
        }
    }

    pub fn reduce(&mut self, action: ListAction<Op, Md, Bt, Sl, Row>) {
        match action {
            ListAction::SetApi { op, state } => {
                self.apis.insert(op, state);
            }
            ListAction::SetModal { open, load } => {
                self.modal = load.unwrap_or(if open.is_some() {
                    LoadState::Ok
                } else {
                    LoadState::Idle
                });
                self.open_modal = open;
            }
            ListAction::SetButton { button, busy } => {
                self.buttons.insert(button, busy);
            }
            ListAction::SetSelection { slot, row } => match row {
                Some(row) => {
                    self.selections.insert(slot, row);
                }
                None => {
                    self.selections.remove(&slot);
                }
            },
            ListAction::SetTable { rows, pagination } => {
                if let Some(rows) = rows {
                    self.table.data = rows;
                }
                if let Some(patch) = pagination {
                    patch.apply_to(&mut self.table.pagination);
                }
            }
        }
    }

    pub fn api(&self, op: Op) -> LoadState {
        self.apis.get(&op).copied().unwrap_or_default()
    }

    pub fn open_modal(&self) -> Option<Md> {
        self.open_modal
    }

    pub fn is_open(&self, modal: Md) -> bool {
        self.open_modal == Some(modal)
    }

    /// Load state of whichever modal is currently open.
    pub fn modal(&self) -> LoadState {
        self.modal
    }

    pub fn busy(&self, button: Bt) -> bool {
        self.buttons.get(&button).copied().unwrap_or(false)
    }

    pub fn selection(&self, slot: Sl) -> Option<&Row> {
        self.selections.get(&slot)
    }

    pub fn rows(&self) -> &[Row] {
        &self.table.data
    }

    pub fn pagination(&self) -> &PaginationDescriptor {
        &self.table.pagination
    }

    pub fn page(&self) -> usize {
        self.table.pagination.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Op {
        List,
        Detail,
        Upsert,
        Delete,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Md {
        Upsert,
        Delete,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Bt {
        Submit,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Sl {
        Edit,
        Delete,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
    }

    type State = ListState<Op, Md, Bt, Sl, Row>;

    fn fresh() -> State {
        State::new(10)
    }

    #[test]
    fn test_fresh_controller_lifecycle_defaults() {
        let s = fresh();
        assert_eq!(s.api(Op::List), LoadState::Idle);
        assert_eq!(s.api(Op::Upsert), LoadState::Idle);
        assert_eq!(s.open_modal(), None);
        assert!(!s.busy(Bt::Submit));
        assert!(s.selection(Sl::Edit).is_none());
        assert!(s.rows().is_empty());
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn test_at_most_one_modal_open() {
        // P1: opening one modal closes every sibling.
        let mut s = fresh();
        s.reduce(ListAction::SetModal {
            open: Some(Md::Upsert),
            load: None,
        });
        assert!(s.is_open(Md::Upsert));
        s.reduce(ListAction::SetModal {
            open: Some(Md::Delete),
            load: None,
        });
        assert!(s.is_open(Md::Delete));
        assert!(!s.is_open(Md::Upsert));
        s.reduce(ListAction::SetModal {
            open: None,
            load: None,
        });
        assert_eq!(s.open_modal(), None);
    }

    #[test]
    fn test_modal_load_defaults() {
        let mut s = fresh();
        s.reduce(ListAction::SetModal {
            open: Some(Md::Upsert),
            load: None,
        });
        assert_eq!(s.modal(), LoadState::Ok);
        s.reduce(ListAction::SetModal {
            open: Some(Md::Upsert),
            load: Some(LoadState::Loading),
        });
        assert_eq!(s.modal(), LoadState::Loading);
        s.reduce(ListAction::SetModal {
            open: None,
            load: None,
        });
        assert_eq!(s.modal(), LoadState::Idle);
    }

    #[test]
    fn test_selection_clear_is_idempotent() {
        // P3
        let mut s = fresh();
        s.reduce(ListAction::SetSelection {
            slot: Sl::Edit,
            row: Some(Row { id: "42" }),
        });
        s.reduce(ListAction::SetSelection {
            slot: Sl::Edit,
            row: None,
        });
        let once = s.clone();
        s.reduce(ListAction::SetSelection {
            slot: Sl::Edit,
            row: None,
        });
        assert_eq!(once.selection(Sl::Edit), s.selection(Sl::Edit));
        assert!(s.selection(Sl::Edit).is_none());
    }

    #[test]
    fn test_set_table_merge_semantics() {
        // P4: a page-only patch leaves every other pagination field alone.
        let mut s = fresh();
        s.reduce(ListAction::SetTable {
            rows: Some(vec![Row { id: "a" }]),
            pagination: Some(PaginationDescriptor::compute(1, 10, 35).into()),
        });
        s.reduce(ListAction::SetTable {
            rows: None,
            pagination: Some(PaginationPatch::page(3)),
        });
        let p = s.pagination();
        assert_eq!(p.page, 3);
        assert_eq!(p.per_page, 10);
        assert_eq!(p.total_items, 35);
        assert_eq!(p.total_pages, 4);
        assert!(p.has_next);
        assert!(p.has_prev);
        // rows untouched by a pagination-only patch
        assert_eq!(s.rows().len(), 1);
    }

    #[test]
    fn test_scenario_single_page_fetch() {
        // Scenario A: 5 rows on one page, no pagination controls needed.
        let mut s = fresh();
        s.reduce(ListAction::SetApi {
            op: Op::List,
            state: LoadState::Loading,
        });
        let rows: Vec<Row> = ["1", "2", "3", "4", "5"]
            .iter()
            .map(|id| Row { id })
            .collect();
        s.reduce(ListAction::SetTable {
            rows: Some(rows),
            pagination: Some(PaginationDescriptor::compute(1, 10, 5).into()),
        });
        s.reduce(ListAction::SetApi {
            op: Op::List,
            state: LoadState::Ok,
        });
        assert_eq!(s.rows().len(), 5);
        assert_eq!(s.pagination().total_pages, 1);
        assert!(!s.pagination().has_next);
        assert!(!s.pagination().has_prev);
    }

    #[test]
    fn test_failed_fetch_leaves_table_untouched() {
        // Scenario B: the error transition dispatches no table update.
        let mut s = fresh();
        s.reduce(ListAction::SetTable {
            rows: Some(vec![Row { id: "kept" }]),
            pagination: Some(PaginationDescriptor::compute(2, 10, 30).into()),
        });
        s.reduce(ListAction::SetApi {
            op: Op::List,
            state: LoadState::Loading,
        });
        s.reduce(ListAction::SetApi {
            op: Op::List,
            state: LoadState::Error,
        });
        assert_eq!(s.api(Op::List), LoadState::Error);
        assert_eq!(s.rows().len(), 1);
        assert_eq!(s.page(), 2);
    }

    #[test]
    fn test_scenario_edit_modal_flow() {
        // Scenario C: select → open at Loading → detail Ok → submit → closed.
        let mut s = fresh();
        let row = Row { id: "42" };
        s.reduce(ListAction::SetSelection {
            slot: Sl::Edit,
            row: Some(row.clone()),
        });
        s.reduce(ListAction::SetModal {
            open: Some(Md::Upsert),
            load: Some(LoadState::Loading),
        });
        assert_eq!(s.selection(Sl::Edit), Some(&row));
        assert!(s.is_open(Md::Upsert));
        assert_eq!(s.modal(), LoadState::Loading);

        s.reduce(ListAction::SetModal {
            open: Some(Md::Upsert),
            load: Some(LoadState::Ok),
        });
        assert_eq!(s.modal(), LoadState::Ok);

        // successful submit
        s.reduce(ListAction::SetModal {
            open: None,
            load: None,
        });
        s.reduce(ListAction::SetSelection {
            slot: Sl::Edit,
            row: None,
        });
        assert_eq!(s.open_modal(), None);
        assert!(s.selection(Sl::Edit).is_none());
    }

    #[test]
    fn test_scenario_delete_slot_reflects_latest_row() {
        // Scenario D: opening the confirmation for B replaces A.
        let mut s = fresh();
        s.reduce(ListAction::SetSelection {
            slot: Sl::Delete,
            row: Some(Row { id: "a" }),
        });
        s.reduce(ListAction::SetModal {
            open: Some(Md::Delete),
            load: None,
        });
        s.reduce(ListAction::SetSelection {
            slot: Sl::Delete,
            row: Some(Row { id: "b" }),
        });
        assert_eq!(s.selection(Sl::Delete).unwrap().id, "b");
    }

    #[test]
    fn test_delete_slot_does_not_clobber_edit_slot() {
        let mut s = fresh();
        s.reduce(ListAction::SetSelection {
            slot: Sl::Edit,
            row: Some(Row { id: "editing" }),
        });
        s.reduce(ListAction::SetSelection {
            slot: Sl::Delete,
            row: Some(Row { id: "doomed" }),
        });
        assert_eq!(s.selection(Sl::Edit).unwrap().id, "editing");
        assert_eq!(s.selection(Sl::Delete).unwrap().id, "doomed");
    }

    #[test]
    fn test_button_flags_are_independent() {
        let mut s = fresh();
        s.reduce(ListAction::SetButton {
            button: Bt::Submit,
            busy: true,
        });
        assert!(s.busy(Bt::Submit));
        assert_eq!(s.api(Op::Upsert), LoadState::Idle);
        s.reduce(ListAction::SetButton {
            button: Bt::Submit,
            busy: false,
        });
        assert!(!s.busy(Bt::Submit));
    }
}
