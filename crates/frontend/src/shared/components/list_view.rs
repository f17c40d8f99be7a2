use contracts::shared::pagination::PaginationDescriptor;
use leptos::prelude::*;

use super::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;

/// ListView — the rendering contract every list page follows.
///
/// Given `(load, row_count, pagination)`:
///   - `Idle` / `Loading` → loading placeholder, pagination hidden
///   - `Error`            → error placeholder with a Retry action
///   - `Ok` + no rows     → empty-state placeholder with a primary CTA
///   - `Ok` + rows        → children (the populated table) + pagination
///                          controls, rendered only when `total_pages > 1`
#[component]
pub fn ListView(
    #[prop(into)] load: Signal<LoadState>,

    #[prop(into)] row_count: Signal<usize>,

    #[prop(into)] pagination: Signal<PaginationDescriptor>,

    /// Re-issues the identical fetch that failed
    on_retry: Callback<()>,

    on_page_change: Callback<usize>,

    /// Empty-state text
    #[prop(into)]
    empty_text: String,

    /// Label of the empty-state call-to-action, e.g. "New product"
    #[prop(optional, into)]
    empty_action_label: Option<String>,

    #[prop(optional, into)] on_empty_action: Option<Callback<()>>,

    /// The populated table
    children: ChildrenFn,
) -> impl IntoView {
    let empty_text = StoredValue::new(empty_text);
    let empty_action_label = StoredValue::new(empty_action_label);

    view! {
        <div class="list-view">
            {move || match load.get() {
                LoadState::Idle | LoadState::Loading => view! {
                    <div class="list-view__placeholder list-view__placeholder--loading">
                        <div class="spinner"></div>
                        <span>"Loading…"</span>
                    </div>
                }.into_any(),
                LoadState::Error => view! {
                    <div class="list-view__placeholder list-view__placeholder--error">
                        {icon("alert")}
                        <span>"Failed to load data"</span>
                        <button class="button button--secondary" on:click=move |_| on_retry.run(())>
                            {icon("refresh")}
                            "Retry"
                        </button>
                    </div>
                }.into_any(),
                LoadState::Ok if row_count.get() == 0 => view! {
                    <div class="list-view__placeholder list-view__placeholder--empty">
                        {icon("inbox")}
                        <span>{empty_text.get_value()}</span>
                        {match (empty_action_label.get_value(), on_empty_action) {
                            (Some(label), Some(action)) => view! {
                                <button class="button button--primary" on:click=move |_| action.run(())>
                                    {icon("plus")}
                                    {label}
                                </button>
                            }.into_any(),
                            _ => view! { <></> }.into_any(),
                        }}
                    </div>
                }.into_any(),
                LoadState::Ok => view! {
                    <div class="list-view__table">
                        {children()}
                    </div>
                    {(pagination.get().total_pages > 1).then(|| view! {
                        <PaginationControls
                            pagination=pagination
                            on_page_change=on_page_change
                        />
                    })}
                }.into_any(),
            }}
        </div>
    }
}
