pub mod app_shell;
pub mod global_context;
