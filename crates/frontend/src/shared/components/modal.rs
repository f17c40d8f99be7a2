use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;

/// Whether a keydown should dismiss the dialog.
fn dismisses(key: &str, dismissable: bool) -> bool {
    dismissable && key == "Escape"
}

/// Modal dialog driven by `(open-ness, load)`.
///
/// The component is mounted only while its page's modal is open, so
/// open-ness itself is the caller's `move || state.is_open(..)` guard.
///
/// Content switch on `load`:
///   - no `load` prop → always render content (confirmation dialogs)
///   - `Idle`    → the `idle` slot if supplied, else nothing
///   - `Loading` → centered loading indicator
///   - `Error`   → centered error + "Retry" (omitted without `on_retry`)
///   - `Ok`      → content
///
/// Escape and overlay clicks invoke `on_close` unless `dismissable` is
/// false. Clearing the bound selection and resetting the bound form is the
/// caller's job, not the dialog's.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Load state of the modal's async prerequisite, if it has one
    #[prop(optional, into)]
    load: Option<Signal<LoadState>>,
    /// Re-issues the failed prerequisite fetch
    #[prop(optional, into)]
    on_retry: Option<Callback<()>>,
    /// Rendered while `load` is `Idle`
    #[prop(optional, into)]
    idle: Option<ViewFn>,
    /// Optional action buttons (Save, Cancel, etc.) to display in footer
    #[prop(optional, into)]
    action_buttons: Option<ViewFn>,
    /// Whether Escape / overlay click dismiss the dialog
    #[prop(default = true)]
    dismissable: bool,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    // Escape closes the dialog. The listener is owner-scoped: it is
    // removed when the dialog unmounts, so it can never outlive (or
    // accumulate alongside) the `on_close` callback it captures.
    let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if dismisses(&ev.key(), dismissable) {
            on_close.run(());
        }
    });

    let handle_overlay_click = move |_| {
        if dismissable {
            on_close.run(());
        }
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let body = move || match load {
        None => children().into_any(),
        Some(load) => match load.get() {
            LoadState::Idle => idle
                .as_ref()
                .map(|idle| idle.run())
                .unwrap_or_else(|| view! { <></> }.into_any()),
            LoadState::Loading => view! {
                <div class="modal__placeholder modal__placeholder--loading">
                    <div class="spinner"></div>
                    <span>"Loading…"</span>
                </div>
            }
            .into_any(),
            LoadState::Error => view! {
                <div class="modal__placeholder modal__placeholder--error">
                    {icon("alert")}
                    <span>"Failed to load"</span>
                    {on_retry.map(|retry| view! {
                        <button class="button button--secondary" on:click=move |_| retry.run(())>
                            {icon("refresh")}
                            "Retry"
                        </button>
                    })}
                </div>
            }
            .into_any(),
            LoadState::Ok => children().into_any(),
        },
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {body}
                </div>
                {action_buttons.map(|buttons| view! {
                    <div class="modal-footer">
                        {buttons.run()}
                    </div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dismisses_only_when_dismissable() {
        assert!(dismisses("Escape", true));
        assert!(!dismisses("Escape", false));
        assert!(!dismisses("Enter", true));
        assert!(!dismisses("a", true));
    }
}
