use contracts::shared::pagination::PaginationDescriptor;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::list_controller::page_window;

/// PaginationControls component - reusable pagination controls
///
/// Renders Prev / a 3-wide window of page buttons / Next. Prev and Next
/// are disabled exactly when `has_prev` / `has_next` is false. Callers are
/// expected to render this only when `total_pages > 1`.
#[component]
pub fn PaginationControls(
    /// Current pagination descriptor (1-indexed page)
    #[prop(into)]
    pagination: Signal<PaginationDescriptor>,

    /// Callback when a page is requested
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_prev {
                        on_page_change.run(p.page - 1);
                    }
                }
                disabled=move || !pagination.get().has_prev
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let p = pagination.get();
                page_window(p.page, p.total_pages)
                    .into_iter()
                    .map(|n| {
                        let current = n == p.page;
                        view! {
                            <button
                                class=if current { "pagination-btn pagination-btn--current" } else { "pagination-btn" }
                                disabled=current
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=move || !pagination.get().has_next
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("{} / {} ({})", p.page, p.total_pages.max(1), p.total_items)
                }}
            </span>
        </div>
    }
}
