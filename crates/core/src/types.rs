/// All entity identifiers are opaque v4 UUIDs assigned by the store.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Offset into the source video, in whole seconds.
pub type VideoSeconds = i64;

/// Generate a fresh entity identifier.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4()
}
