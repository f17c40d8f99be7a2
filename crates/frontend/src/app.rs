use crate::layout::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notifier::Notifier;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Provide the Notifier for centralized toast rendering.
    provide_context(Notifier::new());

    ctx.init_url_sync();

    view! {
        <AppShell />
    }
}
