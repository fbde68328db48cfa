/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Version stamp of the stored configuration document. Bumped on every save.
pub type ConfigVersion = i64;
