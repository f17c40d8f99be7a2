use contracts::domain::c001_product::{Product, ProductDraft, ProductFilter};
use contracts::domain::common::{EntityId, ListRow};
use contracts::shared::envelope::FieldError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::api;
use super::details::ProductForm;
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
const FILTER_PREF_KEY: &str = "c001_product.filter_expanded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ProductOp {
    Pagination,
    Detail,
    Upsert,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ProductModal {
    Upsert,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ProductButton {
    Submit,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ProductSlot {
    Edit,
    Delete,
}

type Store = ListStore<ProductOp, ProductModal, ProductButton, ProductSlot, Product>;

#[component]
pub fn ProductList() -> impl IntoView {
    let store: Store = ListStore::new(PAGE_SIZE);
    store.retire_on_cleanup();
    let state = store.state();
    let notifier = use_notifier();

    // Filter values being typed vs. the values the list was fetched with.
    let filter_draft = RwSignal::new(ProductFilter::default());
    let submitted = RwSignal::new(ProductFilter::default());
    let filter_expanded = RwSignal::new(load_pref::<bool>(FILTER_PREF_KEY).unwrap_or(false));
    Effect::new(move |_| {
        save_pref(FILTER_PREF_KEY, &filter_expanded.get());
    });

    let form = RwSignal::new(ProductDraft::default());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());

    let load_page = move |page: usize| {
        let filters = submitted.get_untracked();
        let ticket = store.begin(ProductOp::Pagination);
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

    // Initial fetch, after the component is wired up
    spawn_local(async move {
        load_page(1);
    });

    let apply_filters = move || {
        submitted.set(filter_draft.get_untracked());
        load_page(1);
    };

    let clear_filters = move || {
        filter_draft.set(ProductFilter::default());
        submitted.set(ProductFilter::default());
        load_page(1);
    };

    let fetch_into_form = move |id: EntityId| {
        store.dispatch(ListAction::SetModal {
            open: Some(ProductModal::Upsert),
            load: Some(LoadState::Loading),
        });
        let ticket = store.begin(ProductOp::Detail);
        spawn_local(async move {
            let result = api::fetch_by_id(id).await;
            if !store.accept(&ticket) {
                return;
            }
            // The dialog may have been dismissed while the fetch was in
            // flight; its outcome no longer has a surface to land on.
            if !state.with_untracked(|s| s.is_open(ProductModal::Upsert)) {
                return;
            }
            match result {
                Ok(product) => {
                    form.set(ProductDraft::from(&product));
                    store.settle(&ticket, LoadState::Ok);
                    store.dispatch(ListAction::SetModal {
                        open: Some(ProductModal::Upsert),
                        load: Some(LoadState::Ok),
                    });
                }
                Err(e) => {
                    store.settle(&ticket, LoadState::Error);
                    store.dispatch(ListAction::SetModal {
                        open: Some(ProductModal::Upsert),
                        load: Some(LoadState::Error),
                    });
                    notifier.error(e.to_string());
                }
            }
        });
    };

    let open_create = move || {
        store.dispatch(ListAction::SetSelection {
            slot: ProductSlot::Edit,
            row: None,
        });
        form.set(ProductDraft::default());
        field_errors.set(Vec::new());
        store.dispatch(ListAction::SetModal {
            open: Some(ProductModal::Upsert),
            load: None,
        });
    };

    let open_edit = move |row: Product| {
        if !row.is_editable() {
            notifier.info(format!("\"{}\" cannot be edited", row.name));
            return;
        }
        let id = row.id();
        field_errors.set(Vec::new());
        store.dispatch(ListAction::SetSelection {
            slot: ProductSlot::Edit,
            row: Some(row),
        });
        fetch_into_form(id);
    };

    let retry_detail = move || {
        let Some(row) = state.with_untracked(|s| s.selection(ProductSlot::Edit).cloned()) else {
            return;
        };
        fetch_into_form(row.id());
    };

    let close_upsert = move || {
        store.dispatch(ListAction::SetModal {
            open: None,
            load: None,
        });
        store.dispatch(ListAction::SetSelection {
            slot: ProductSlot::Edit,
            row: None,
        });
        form.set(ProductDraft::default());
        field_errors.set(Vec::new());
    };

    let submit = move || {
        if state.with_untracked(|s| s.busy(ProductButton::Submit)) {
            return;
        }
        store.dispatch(ListAction::SetButton {
            button: ProductButton::Submit,
            busy: true,
        });
        let ticket = store.begin(ProductOp::Upsert);
        let draft = form.get_untracked();
        spawn_local(async move {
            let result = api::save(&draft).await;
            if !store.accept(&ticket) {
                return;
            }
            store.dispatch(ListAction::SetButton {
                button: ProductButton::Submit,
                busy: false,
            });
            match result {
                Ok(ack) => {
                    store.settle(&ticket, LoadState::Ok);
                    close_upsert();
                    let message = if ack.message.is_empty() {
                        "Product saved".to_string()
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

    let request_delete = move |row: Product| {
        if !row.is_deletable() {
            notifier.info(format!("\"{}\" cannot be deleted", row.name));
            return;
        }
        store.dispatch(ListAction::SetSelection {
            slot: ProductSlot::Delete,
            row: Some(row),
        });
        store.dispatch(ListAction::SetModal {
            open: Some(ProductModal::Delete),
            load: None,
        });
    };

    let close_delete = move || {
        store.dispatch(ListAction::SetModal {
            open: None,
            load: None,
        });
        store.dispatch(ListAction::SetSelection {
            slot: ProductSlot::Delete,
            row: None,
        });
    };

    let confirm_delete = move || {
        if state.with_untracked(|s| s.busy(ProductButton::ConfirmDelete)) {
            return;
        }
        let Some(row) = state.with_untracked(|s| s.selection(ProductSlot::Delete).cloned()) else {
            return;
        };
        store.dispatch(ListAction::SetButton {
            button: ProductButton::ConfirmDelete,
            busy: true,
        });
        let ticket = store.begin(ProductOp::Delete);
        spawn_local(async move {
            let result = api::remove(row.id()).await;
            if !store.accept(&ticket) {
                return;
            }
            store.dispatch(ListAction::SetButton {
                button: ProductButton::ConfirmDelete,
                busy: false,
            });
            match result {
                Ok(ack) => {
                    store.settle(&ticket, LoadState::Ok);
                    close_delete();
                    let message = if ack.message.is_empty() {
                        "Product deleted".to_string()
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
    let list_load = Signal::derive(move || state.with(|s| s.api(ProductOp::Pagination)));
    let row_count = Signal::derive(move || state.with(|s| s.rows().len()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination().clone()));
    let modal_load = Signal::derive(move || state.with(|s| s.modal()));

    let upsert_title = Signal::derive(move || {
        if state.with(|s| s.selection(ProductSlot::Edit).is_some()) {
            "Edit product".to_string()
        } else {
            "New product".to_string()
        }
    });

    view! {
        <PageFrame page_id="c001_product--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h1 class="page-header__title">"Products"</h1>
                <button class="button button--primary" on:click=move |_| open_create()>
                    {icon("plus")}
                    "New product"
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
                            placeholder="Search by name or code…"
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
                        <input
                            type="text"
                            class="filter-form__input"
                            placeholder="Brand"
                            prop:value=move || filter_draft.with(|f| f.brand.clone())
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                filter_draft.update(|f| f.brand = val);
                            }
                        />
                        <input
                            type="text"
                            class="filter-form__input"
                            placeholder="Category"
                            prop:value=move || filter_draft.with(|f| f.category.clone())
                            on:input=move |ev| {
                                let val = event_target_value(&ev);
                                filter_draft.update(|f| f.category = val);
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
                        let mut tags = Vec::new();
                        if !f.q.is_empty() {
                            tags.push(view! {
                                <FilterTag
                                    label=format!("Search: {}", f.q)
                                    on_remove=Callback::new(move |_| {
                                        filter_draft.update(|f| f.q.clear());
                                        submitted.update(|f| f.q.clear());
                                        load_page(1);
                                    })
                                />
                            });
                        }
                        if !f.brand.is_empty() {
                            tags.push(view! {
                                <FilterTag
                                    label=format!("Brand: {}", f.brand)
                                    on_remove=Callback::new(move |_| {
                                        filter_draft.update(|f| f.brand.clear());
                                        submitted.update(|f| f.brand.clear());
                                        load_page(1);
                                    })
                                />
                            });
                        }
                        if !f.category.is_empty() {
                            tags.push(view! {
                                <FilterTag
                                    label=format!("Category: {}", f.category)
                                    on_remove=Callback::new(move |_| {
                                        filter_draft.update(|f| f.category.clear());
                                        submitted.update(|f| f.category.clear());
                                        load_page(1);
                                    })
                                />
                            });
                        }
                        tags.collect_view()
                    }}
                })
            />

            <ListView
                load=list_load
                row_count=row_count
                pagination=pagination
                on_retry=Callback::new(move |_| load_page(state.with_untracked(|s| s.page())))
                on_page_change=Callback::new(move |page| load_page(page))
                empty_text="No products match the current filters"
                empty_action_label="New product".to_string()
                on_empty_action=Callback::new(move |_| open_create())
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Name"</th>
                            <th>"Brand"</th>
                            <th>"Category"</th>
                            <th>"Unit"</th>
                            <th class="data-table__num">"Price"</th>
                            <th class="data-table__num">"Stock"</th>
                            <th>"Updated"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.rows().to_vec()).into_iter().map(|p| {
                            let edit_row = p.clone();
                            let delete_row = p.clone();
                            let updated = p
                                .updated_at
                                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td class="data-table__code">{p.code.clone().unwrap_or_default()}</td>
                                    <td>{p.name.clone()}</td>
                                    <td>{p.brand.clone()}</td>
                                    <td>{p.category.clone()}</td>
                                    <td>{p.unit.clone()}</td>
                                    <td class="data-table__num">{format!("{:.2}", p.price)}</td>
                                    <td class="data-table__num">{p.stock_qty}</td>
                                    <td>{updated}</td>
                                    <td class="data-table__actions">
                                        <button
                                            class=if p.is_editable() {
                                                "button button--icon"
                                            } else {
                                                "button button--icon button--disabled"
                                            }
                                            title="Edit"
                                            on:click=move |_| open_edit(edit_row.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class=if p.is_deletable() {
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

            {move || state.with(|s| s.is_open(ProductModal::Upsert)).then(|| view! {
                <Modal
                    title=upsert_title
                    on_close=Callback::new(move |_| close_upsert())
                    load=modal_load
                    on_retry=Callback::new(move |_| retry_detail())
                    action_buttons=ViewFn::from(move || view! {
                        <button class="button button--secondary" on:click=move |_| close_upsert()>
                            "Cancel"
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || state.with(|s| s.busy(ProductButton::Submit))
                            on:click=move |_| submit()
                        >
                            {move || if state.with(|s| s.busy(ProductButton::Submit)) {
                                "Saving…"
                            } else {
                                "Save"
                            }}
                        </button>
                    })
                >
                    <ProductForm draft=form field_errors=field_errors />
                </Modal>
            })}

            {move || state.with(|s| s.is_open(ProductModal::Delete)).then(|| view! {
                <Modal
                    title="Delete product".to_string()
                    on_close=Callback::new(move |_| close_delete())
                    action_buttons=ViewFn::from(move || view! {
                        <button class="button button--secondary" on:click=move |_| close_delete()>
                            "Cancel"
                        </button>
                        <button
                            class="button button--danger"
                            disabled=move || state.with(|s| s.busy(ProductButton::ConfirmDelete))
                            on:click=move |_| confirm_delete()
                        >
                            {move || if state.with(|s| s.busy(ProductButton::ConfirmDelete)) {
                                "Deleting…"
                            } else {
                                "Delete"
                            }}
                        </button>
                    })
                >
                    <p class="modal__confirm-text">
                        {move || state.with(|s| {
                            s.selection(ProductSlot::Delete)
                                .map(|r| format!("Delete \"{}\"? This cannot be undone.", r.name))
                                .unwrap_or_default()
                        })}
                    </p>
                </Modal>
            })}
        </PageFrame>
    }
}
