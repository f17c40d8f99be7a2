use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages of the application. Each page owns its list controller; the
/// controller dies with the page, so switching pages is also what retires
/// outstanding requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Products,
    Brands,
    Inventory,
}

impl AppPage {
    pub const ALL: &'static [AppPage] = &[Self::Products, Self::Brands, Self::Inventory];

    pub fn key(self) -> &'static str {
        match self {
            Self::Products => "c001_product",
            Self::Brands => "c002_brand",
            Self::Inventory => "d100_inventory",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::Brands => "Brands",
            Self::Inventory => "Inventory",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Brands => "brands",
            Self::Inventory => "inventory",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::default()),
        }
    }

    /// Restore the active page from `?active=` and keep the URL in sync
    /// so a reload lands on the same page.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("active").and_then(|k| AppPage::from_key(k)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Use untracked to avoid creating unnecessary reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
