use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Centralized toast notifications, provided app-wide via context.
///
/// The list controller only flips load states and busy flags; *how* a
/// failure is shown is decided here, so the state machine stays reusable
/// across presentation styles.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let notifier = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            notifier.dismiss(id);
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context")
}

/// Fixed-position toast stack, mounted once in the app shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts;

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Info => "toast toast--info",
                    };
                    let toast_icon = match toast.kind {
                        ToastKind::Success => "check",
                        ToastKind::Error => "alert",
                        ToastKind::Info => "alert",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class>
                            {icon(toast_icon)}
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="button button--icon toast__dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
