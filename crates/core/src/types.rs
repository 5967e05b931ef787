/// Review sessions are keyed by generated UUIDs, never by wall-clock time.
pub type SessionId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
