pub mod api_client;
pub mod components;
pub mod icons;
pub mod list_controller;
pub mod load_state;
pub mod notifier;
pub mod page_frame;
pub mod page_standard;
pub mod prefs;
