//! The per-request storage unit.

use chrono::{DateTime, Utc};
use std::fmt;

/// Holds at most one value for a single request, plus the instant the slot was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSlot {
    value: Option<String>,
    created_at: DateTime<Utc>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::with_timestamp(Utc::now())
    }

    pub fn with_timestamp(created_at: DateTime<Utc>) -> Self {
        Self {
            value: None,
            created_at,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Replaces any previous value; last write wins.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn take_value(&mut self) -> Option<String> {
        self.value.take()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }

    /// Human-readable form, `Data: <value>, Created at: <epoch-millis>`.
    ///
    /// An unset value renders as an empty string; check [`Self::has_value`] first.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Default for RequestSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data: {}, Created at: {}",
            self.value().unwrap_or_default(),
            self.timestamp_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_slot_is_empty() {
        let slot = RequestSlot::new();
        assert!(!slot.has_value());
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn set_value_overwrites() {
        let mut slot = RequestSlot::new();
        slot.set_value("first");
        slot.set_value("second");
        assert_eq!(slot.value(), Some("second"));
    }

    #[test]
    fn take_value_empties_slot() {
        let mut slot = RequestSlot::new();
        slot.set_value("v");
        assert_eq!(slot.take_value().as_deref(), Some("v"));
        assert!(!slot.has_value());
    }

    #[test]
    fn describe_uses_epoch_millis() {
        let created = Utc.timestamp_millis_opt(1_234_567_890).unwrap();
        let mut slot = RequestSlot::with_timestamp(created);
        slot.set_value("test-value");
        assert_eq!(slot.describe(), "Data: test-value, Created at: 1234567890");
    }

    #[test]
    fn timestamp_is_captured_at_creation() {
        let before = Utc::now().timestamp_millis();
        let slot = RequestSlot::new();
        let after = Utc::now().timestamp_millis();
        assert!(slot.timestamp_millis() >= before);
        assert!(slot.timestamp_millis() <= after);
    }
}
