pub mod envelope;
pub mod pagination;
