use leptos::prelude::*;

use super::global_context::{AppGlobalContext, AppPage};
use crate::dashboards::d100_inventory::InventoryDashboard;
use crate::domain::c001_product::ui::list::ProductList;
use crate::domain::c002_brand::ui::list::BrandList;
use crate::shared::icons::icon;
use crate::shared::notifier::ToastHost;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="app-header__brand">"Backoffice"</span>
                <nav class="app-header__nav">
                    {AppPage::ALL.iter().copied().map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if ctx.active.get() == page {
                                        "nav-btn nav-btn--active"
                                    } else {
                                        "nav-btn"
                                    }
                                }
                                on:click=move |_| ctx.active.set(page)
                            >
                                {icon(page.icon_name())}
                                {page.title()}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </header>
            <main class="app-content">
                // Keying by the active page drops the previous page's
                // subtree, which retires its controller's requests.
                {move || match ctx.active.get() {
                    AppPage::Products => view! { <ProductList /> }.into_any(),
                    AppPage::Brands => view! { <BrandList /> }.into_any(),
                    AppPage::Inventory => view! { <InventoryDashboard /> }.into_any(),
                }}
            </main>
            <ToastHost />
        </div>
    }
}
