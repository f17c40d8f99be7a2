use contracts::domain::c002_brand::{Brand, BrandDraft, BrandFilter};
use contracts::domain::common::ListRow;
use contracts::shared::envelope::FieldError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::list_view::ListView;
use crate::shared::components::modal::Modal;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListAction, ListStore};
use crate::shared::load_state::LoadState;
use crate::shared::notifier::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::prefs::{load_pref, save_pref};

const PAGE_SIZE: usize = 20;
const FILTER_PREF_KEY: &str = "c002_brand.filter_expanded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BrandOp {
    Pagination,
    Upsert,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BrandModal {
    Upsert,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BrandButton {
    Submit,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BrandSlot {
    Edit,
    Delete,
}

type Store = ListStore<BrandOp, BrandModal, BrandButton, BrandSlot, Brand>;

/// Brand list page. The compact variant of the list pattern: rows carry
/// every editable field, so the edit dialog opens from the row without a
/// detail fetch.
#[component]
pub fn BrandList() -> impl IntoView {
    let store: Store = ListStore::new(PAGE_SIZE);
    store.retire_on_cleanup();
    let state = store.state();
    let notifier = use_notifier();

    let filter_draft = RwSignal::new(BrandFilter::default());
    let submitted = RwSignal::new(BrandFilter::default());
    let filter_expanded = RwSignal::new(load_pref::<bool>(FILTER_PREF_KEY).unwrap_or(false));
    Effect::new(move |_| {
        save_pref(FILTER_PREF_KEY, &filter_expanded.get());
    });

    let form = RwSignal::new(BrandDraft::default());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());

    let load_page = move |page: usize| {
        let filters = submitted.get_untracked();
        let ticket = store.begin(BrandOp::Pagination);
        spawn_local(async move {
            match api::fetch_page(&filters, page, PAGE_SIZE).await {
                Ok(result) => {
                    if store.accept(&ticket) {
                        store.dispatch(ListAction::SetTable {
                            rows: Some(result.data),
                            pagination: Some(result.pagination.into()),
                        });
                        store.settle(&ticket, LoadState::Ok);
                    }
                }
                Err(e) => {
                    if store.settle(&ticket, LoadState::Error) {
                        notifier.error(e.to_string());
                    }
                }
            }
        });
    };

    spawn_local(async move {
        load_page(1);
    });

    let apply_filters = move || {
        submitted.set(filter_draft.get_untracked());
        load_page(1);
    };

    let clear_filters = move || {
        filter_draft.set(BrandFilter::default());
        submitted.set(BrandFilter::default());
        load_page(1);
    };

    let open_create = move || {
        store.dispatch(ListAction::SetSelection {
            slot: BrandSlot::Edit,
            row: None,
        });
        form.set(BrandDraft::default());
        field_errors.set(Vec::new());
        store.dispatch(ListAction::SetModal {
            open: Some(BrandModal::Upsert),
            load: None,
        });
    };

    let open_edit = move |row: Brand| {
        if !row.is_editable() {
            notifier.info(format!("\"{}\" cannot be edited", row.name));
            return;
        }
        form.set(BrandDraft::from(&row));
        field_errors.set(Vec::new());
        store.dispatch(ListAction::SetSelection {
            slot: BrandSlot::Edit,
            row: Some(row),
        });
        store.dispatch(ListAction::SetModal {
            open: Some(BrandModal::Upsert),
            load: None,
        });
    };

    let close_upsert = move || {
        store.dispatch(ListAction::SetModal {
            open: None,
            load: None,
        });
        store.dispatch(ListAction::SetSelection {
            slot: BrandSlot::Edit,
            row: None,
        });
        form.set(BrandDraft::default());
        field_errors.set(Vec::new());
    };

    let submit = move || {
        if state.with_untracked(|s| s.busy(BrandButton::Submit)) {
            return;
        }
        store.dispatch(ListAction::SetButton {
            button: BrandButton::Submit,
            busy: true,
        });
        let ticket = store.begin(BrandOp::Upsert);
        let draft = form.get_untracked();
        spawn_local(async move {
            let result = api::save(&draft).await;
            if !store.accept(&ticket) {
                return;
            }
            store.dispatch(ListAction::SetButton {
                button: BrandButton::Submit,
                busy: false,
            });
            match result {
                Ok(ack) => {
                    store.settle(&ticket, LoadState::Ok);
                    close_upsert();
                    let message = if ack.message.is_empty() {
                        "Brand saved".to_string()
                    } else {
                        ack.message
                    };
                    notifier.success(message);
                    load_page(state.with_untracked(|s| s.page()));
                }
                Err(e) => {
                    store.settle(&ticket, LoadState::Error);
                    if e.has_field_errors() {
                        field_errors.set(e.field_errors);
                    } else {
                        notifier.error(e.to_string());
                    }
                }
            }
        });
    };

    let request_delete = move |row: Brand| {
        if !row.is_deletable() {
            notifier.info(format!(
                "\"{}\" is referenced by {} product(s) and cannot be deleted",
                row.name, row.product_count
            ));
            return;
        }
        store.dispatch(ListAction::SetSelection {
            slot: BrandSlot::Delete,
            row: Some(row),
        });
        store.dispatch(ListAction::SetModal {
            open: Some(BrandModal::Delete),
            load: None,
        });
    };

    let close_delete = move || {
        store.dispatch(ListAction::SetModal {
            open: None,
            load: None,
        });
        store.dispatch(ListAction::SetSelection {
            slot: BrandSlot::Delete,
            row: None,
        });
    };

    let confirm_delete = move || {
        if state.with_untracked(|s| s.busy(BrandButton::ConfirmDelete)) {
            return;
        }
        let Some(row) = state.with_untracked(|s| s.selection(BrandSlot::Delete).cloned()) else {
            return;
        };
        store.dispatch(ListAction::SetButton {
            button: BrandButton::ConfirmDelete,
            busy: true,
        });
        let ticket = store.begin(BrandOp::Delete);
        spawn_local(async move {
            let result = api::remove(row.id()).await;
            if !store.accept(&ticket) {
                return;
            }
            store.dispatch(ListAction::SetButton {
                button: BrandButton::ConfirmDelete,
                busy: false,
            });
            match result {
                Ok(ack) => {
                    store.settle(&ticket, LoadState::Ok);
                    close_delete();
                    let message = if ack.message.is_empty() {
                        "Brand deleted".to_string()
                    } else {
                        ack.message
                    };
                    notifier.success(message);
                    load_page(state.with_untracked(|s| s.page()));
                }
                Err(e) => {
                    store.settle(&ticket, LoadState::Error);
                    notifier.error(e.to_string());
                }
            }
        });
    };

    let active_count = Signal::derive(move || submitted.with(|f| f.active_count()));
    let list_load = Signal::derive(move || state.with(|s| s.api(BrandOp::Pagination)));
    let row_count = Signal::derive(move || state.with(|s| s.rows().len()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination().clone()));

    let upsert_title = Signal::derive(move || {
        if state.with(|s| s.selection(BrandSlot::Edit).is_some()) {
            "Edit brand".to_string()
        } else {
            "New brand".to_string()
        }
    });

    let error_for = move |field: &'static str| {
        field_errors.with(|errors| {
            errors
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message.clone())
        })
    };

    view! {
        <PageFrame page_id="c002_brand--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h1 class="page-header__title">"Brands"</h1>
                <button class="button button--primary" on:click=move |_| open_create()>
                    {icon("plus")}
                    "New brand"
                </button>
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                header_actions=move || view! {
                    <button
                        class="button button--icon"
                        title="Refresh"
                        on:click=move |_| load_page(state.with_untracked(|s| s.page()))
                    >
                        {icon("refresh")}
                    </button>
                }
                filter_content=move || view! {
                    <div class="filter-form">
                        <input
                            type="text"
                            class="filter-form__input"
                            placeholder="Search by name…"
                            prop:value=move || filter_draft.with(|f| f.q.clone())
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                filter_draft.update(|f| f.q = val);
                            }
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    apply_filters();
                                }
                            }
                        />
                        <button class="button button--primary" on:click=move |_| apply_filters()>
                            "Apply"
                        </button>
                        <button class="button button--secondary" on:click=move |_| clear_filters()>
                            "Clear"
                        </button>
                    </div>
                }
                filter_tags=ViewFn::from(move || view! {
                    {move || {
                        let f = submitted.get();
                        (!f.q.is_empty()).then(|| view! {
                            <FilterTag
                                label=format!("Search: {}", f.q)
                                on_remove=Callback::new(move |_| {
                                    filter_draft.update(|f| f.q.clear());
                                    submitted.update(|f| f.q.clear());
                                    load_page(1);
                                })
                            />
                        })
                    }}
                })
            />

            <ListView
                load=list_load
                row_count=row_count
                pagination=pagination
                on_retry=Callback::new(move |_| load_page(state.with_untracked(|s| s.page())))
                on_page_change=Callback::new(move |page| load_page(page))
                empty_text="No brands match the current filters"
                empty_action_label="New brand".to_string()
                on_empty_action=Callback::new(move |_| open_create())
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th class="data-table__num">"Products"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.rows().to_vec()).into_iter().map(|b| {
                            let edit_row = b.clone();
                            let delete_row = b.clone();
                            view! {
                                <tr>
                                    <td class="data-table__code">{b.code.clone().unwrap_or_default()}</td>
                                    <td>{b.name.clone()}</td>
                                    <td>{b.description.clone()}</td>
                                    <td class="data-table__num">{b.product_count}</td>
                                    <td class="data-table__actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| open_edit(edit_row.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class=if b.is_deletable() {
                                                "button button--icon"
                                            } else {
                                                "button button--icon button--disabled"
                                            }
                                            title="Delete"
                                            on:click=move |_| request_delete(delete_row.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </ListView>

            {move || state.with(|s| s.is_open(BrandModal::Upsert)).then(|| view! {
                <Modal
                    title=upsert_title
                    on_close=Callback::new(move |_| close_upsert())
                    action_buttons=ViewFn::from(move || view! {
                        <button class="button button--secondary" on:click=move |_| close_upsert()>
                            "Cancel"
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || state.with(|s| s.busy(BrandButton::Submit))
                            on:click=move |_| submit()
                        >
                            {move || if state.with(|s| s.busy(BrandButton::Submit)) {
                                "Saving…"
                            } else {
                                "Save"
                            }}
                        </button>
                    })
                >
                    <form class="form" on:submit=move |ev| ev.prevent_default()>
                        <div class="form-field">
                            <label class="form-field__label">"Name"</label>
                            <input
                                type="text"
                                class="form-field__input"
                                prop:value=move || form.with(|d| d.name.clone())
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    form.update(|d| d.name = val);
                                }
                            />
                            {move || error_for("name").map(|msg| view! {
                                <span class="form-field__error">{msg}</span>
                            })}
                        </div>
                        <div class="form-field">
                            <label class="form-field__label">"Description"</label>
                            <textarea
                                class="form-field__input"
                                prop:value=move || form.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let val = event_target_value(&ev);
                                    form.update(|d| d.description = val);
                                }
                            ></textarea>
                            {move || error_for("description").map(|msg| view! {
                                <span class="form-field__error">{msg}</span>
                            })}
                        </div>
                    </form>
                </Modal>
            })}

            {move || state.with(|s| s.is_open(BrandModal::Delete)).then(|| view! {
                <Modal
                    title="Delete brand".to_string()
                    on_close=Callback::new(move |_| close_delete())
                    action_buttons=ViewFn::from(move || view! {
                        <button class="button button--secondary" on:click=move |_| close_delete()>
                            "Cancel"
                        </button>
                        <button
                            class="button button--danger"
                            disabled=move || state.with(|s| s.busy(BrandButton::ConfirmDelete))
                            on:click=move |_| confirm_delete()
                        >
                            {move || if state.with(|s| s.busy(BrandButton::ConfirmDelete)) {
                                "Deleting…"
                            } else {
                                "Delete"
                            }}
                        </button>
                    })
                >
                    <p class="modal__confirm-text">
                        {move || state.with(|s| {
                            s.selection(BrandSlot::Delete)
                                .map(|r| format!("Delete \"{}\"? This cannot be undone.", r.name))
                                .unwrap_or_default()
                        })}
                    </p>
                </Modal>
            })}
        </PageFrame>
    }
}
