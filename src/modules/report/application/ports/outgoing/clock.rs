use chrono::{DateTime, Utc};

/// Source of the receive timestamp used for labels and the index.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
