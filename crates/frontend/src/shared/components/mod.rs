pub mod filter_panel;
pub mod list_view;
pub mod modal;
pub mod pagination_controls;
