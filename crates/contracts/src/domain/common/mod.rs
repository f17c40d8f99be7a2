mod entity_id;

pub use entity_id::EntityId;

/// Behaviour every row rendered by a list page shares: a stable identity
/// plus the server-computed permission flags used for pre-flight checks
/// (a disabled action explains itself instead of issuing a doomed call).
pub trait ListRow: Clone {
    fn id(&self) -> EntityId;

    fn is_editable(&self) -> bool {
        true
    }

    fn is_deletable(&self) -> bool {
        true
    }
}
