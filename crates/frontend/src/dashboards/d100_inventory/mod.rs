//! Inventory dashboard: a read-only stock summary list with an optional
//! polling refresh. No modals, no buttons, no selections, so every key set
//! except the operations is `NoKey`.

use contracts::domain::d100_inventory::{InventoryFilter, StockSummary};
use contracts::shared::envelope::ApiError;
use contracts::shared::pagination::Paginated;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::shared::api_client;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::list_view::ListView;
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListAction, ListStore, NoKey};
use crate::shared::load_state::LoadState;
use crate::shared::notifier::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::prefs::{load_pref, save_pref};

const PAGE_SIZE: usize = 50;
const RESOURCE: &str = "inventory/stock-summary";
const POLL_PREF_KEY: &str = "d100_inventory.poll_interval";
const FILTER_PREF_KEY: &str = "d100_inventory.filter_expanded";

async fn fetch_page(
    filters: &InventoryFilter,
    page: usize,
    per_page: usize,
) -> Result<Paginated<StockSummary>, ApiError> {
    api_client::fetch_list(RESOURCE, filters, page, per_page).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum InventoryOp {
    Pagination,
}

/// Auto-refresh period. Persisted per browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PollInterval {
    #[default]
    Off,
    S5,
    S30,
    M1,
    M5,
    M10,
}

impl PollInterval {
    pub const ALL: &'static [PollInterval] = &[
        Self::Off,
        Self::S5,
        Self::S30,
        Self::M1,
        Self::M5,
        Self::M10,
    ];

    pub fn ms(self) -> Option<u32> {
        match self {
            Self::Off => None,
            Self::S5 => Some(5_000),
            Self::S30 => Some(30_000),
            Self::M1 => Some(60_000),
            Self::M5 => Some(300_000),
            Self::M10 => Some(600_000),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::S5 => "5s",
            Self::S30 => "30s",
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M10 => "10m",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::S5 => "5s",
            Self::S30 => "30s",
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M10 => "10m",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }
}

type Store = ListStore<InventoryOp, NoKey, NoKey, NoKey, StockSummary>;

#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let store: Store = ListStore::new(PAGE_SIZE);
    store.retire_on_cleanup();
    let state = store.state();
    let notifier = use_notifier();

    let filter_draft = RwSignal::new(InventoryFilter::default());
    let submitted = RwSignal::new(InventoryFilter::default());
    let filter_expanded = RwSignal::new(load_pref::<bool>(FILTER_PREF_KEY).unwrap_or(false));
    Effect::new(move |_| {
        save_pref(FILTER_PREF_KEY, &filter_expanded.get());
    });

    let interval = RwSignal::new(load_pref::<PollInterval>(POLL_PREF_KEY).unwrap_or_default());

    let load_page = move |page: usize| {
        let filters = submitted.get_untracked();
        let ticket = store.begin(InventoryOp::Pagination);
        spawn_local(async move {
            match fetch_page(&filters, page, PAGE_SIZE).await {
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

    // Each (re)schedule bumps the epoch, orphaning any previous timer loop.
    // Disposal of the StoredValue on unmount orphans the loop the same way.
    let poll_epoch = StoredValue::new(0u64);
    let schedule_polling = move || {
        let epoch = poll_epoch
            .try_update_value(|e| {
                *e += 1;
                *e
            })
            .unwrap_or(0);
        let Some(ms) = interval.get_untracked().ms() else {
            return;
        };
        spawn_local(async move {
            loop {
                TimeoutFuture::new(ms).await;
                if poll_epoch.try_get_value() != Some(epoch) {
                    break;
                }
                load_page(state.with_untracked(|s| s.page()));
            }
        });
    };

    let set_interval = move |value: PollInterval| {
        interval.set(value);
        save_pref(POLL_PREF_KEY, &value);
        schedule_polling();
    };

    spawn_local(async move {
        load_page(1);
    });
    schedule_polling();

    let apply_filters = move || {
        submitted.set(filter_draft.get_untracked());
        load_page(1);
    };

    let clear_filters = move || {
        filter_draft.set(InventoryFilter::default());
        submitted.set(InventoryFilter::default());
        load_page(1);
    };

    let active_count = Signal::derive(move || submitted.with(|f| f.active_count()));
    let list_load = Signal::derive(move || state.with(|s| s.api(InventoryOp::Pagination)));
    let row_count = Signal::derive(move || state.with(|s| s.rows().len()));
    let pagination = Signal::derive(move || state.with(|s| s.pagination().clone()));

    view! {
        <PageFrame page_id="d100_inventory--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page-header">
                <h1 class="page-header__title">"Inventory"</h1>
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
                    <label class="poll-select">
                        <span class="poll-select__label">"Auto-refresh"</span>
                        <select
                            prop:value=move || interval.get().key()
                            on:change=move |ev| {
                                if let Some(value) = PollInterval::from_key(&event_target_value(&ev)) {
                                    set_interval(value);
                                }
                            }
                        >
                            {PollInterval::ALL.iter().copied().map(|p| view! {
                                <option value=p.key() selected=move || interval.get() == p>
                                    {p.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                }
                filter_content=move || view! {
                    <div class="filter-form">
                        <input
                            type="text"
                            class="filter-form__input"
                            placeholder="Search by product or warehouse…"
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
                        <label class="filter-form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || filter_draft.with(|f| f.only_low_stock)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    filter_draft.update(|f| f.only_low_stock = checked);
                                }
                            />
                            "Low stock only"
                        </label>
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
                        if f.only_low_stock {
                            tags.push(view! {
                                <FilterTag
                                    label="Low stock only".to_string()
                                    on_remove=Callback::new(move |_| {
                                        filter_draft.update(|f| f.only_low_stock = false);
                                        submitted.update(|f| f.only_low_stock = false);
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
                empty_text="No stock records match the current filters"
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"Warehouse"</th>
                            <th class="data-table__num">"On hand"</th>
                            <th class="data-table__num">"Reserved"</th>
                            <th class="data-table__num">"Available"</th>
                            <th>"Status"</th>
                            <th>"Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.rows().to_vec()).into_iter().map(|row| {
                            let updated = row
                                .updated_at
                                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                                .unwrap_or_default();
                            view! {
                                <tr class=if row.low_stock { "data-table__row--warning" } else { "" }>
                                    <td>{row.product_name.clone()}</td>
                                    <td>{row.warehouse.clone()}</td>
                                    <td class="data-table__num">{row.on_hand}</td>
                                    <td class="data-table__num">{row.reserved}</td>
                                    <td class="data-table__num">{row.available}</td>
                                    <td>
                                        {row.low_stock.then(|| view! {
                                            <span class="badge badge--warning">
                                                {icon("alert")}
                                                "Low stock"
                                            </span>
                                        })}
                                    </td>
                                    <td>{updated}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </ListView>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_keys_round_trip() {
        for p in PollInterval::ALL.iter().copied() {
            assert_eq!(PollInterval::from_key(p.key()), Some(p));
        }
        assert_eq!(PollInterval::from_key("bogus"), None);
    }

    #[test]
    fn test_poll_interval_off_has_no_period() {
        assert_eq!(PollInterval::Off.ms(), None);
        assert_eq!(PollInterval::S5.ms(), Some(5_000));
        assert_eq!(PollInterval::M10.ms(), Some(600_000));
    }
}
