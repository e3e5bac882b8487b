use chrono::{DateTime, FixedOffset};

/// Source of the current instant, in the store's local offset.
///
/// The live window is evaluated against local wall-clock time, so adapters
/// must return the instant already shifted to the store's offset.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
