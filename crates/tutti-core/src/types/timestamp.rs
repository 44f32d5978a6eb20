use crate::{traits::FieldValue, value::Value};
use derive_more::{Add, AddAssign, Display};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// Timestamp
/// (in seconds)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms / 1_000)
    }

    #[allow(clippy::cast_sign_loss)]
    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt =
            OffsetDateTime::parse(s, &Rfc3339).map_err(|e| format!("timestamp parse error: {e}"))?;
        let ts = dt.unix_timestamp();
        if ts < 0 {
            return Err("timestamp before epoch".to_string());
        }

        Ok(Self(ts as u64))
    }

    /// Current wall-clock timestamp in seconds.
    #[must_use]
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());

        Self(secs)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FieldValue for Timestamp {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<u64> for Timestamp {
    fn from(u: u64) -> Self {
        Self(u)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seconds() {
        let t = Timestamp::from_seconds(42);
        assert_eq!(t.get(), 42);
        assert_eq!(Timestamp::from(42_u64), t);
        assert_eq!(Timestamp::EPOCH.get(), 0);
    }

    #[test]
    fn test_from_millis_truncates() {
        let t = Timestamp::from_millis(1234);
        assert_eq!(t.get(), 1);
    }

    #[test]
    fn test_parse_rfc3339_manual() {
        let parsed = Timestamp::parse_rfc3339("2024-03-09T19:45:30Z").unwrap();

        // Verified UNIX time for that timestamp.
        assert_eq!(parsed.get(), 1_710_013_530);
    }

    #[test]
    fn test_parse_rfc3339_rejects_pre_epoch() {
        let result = Timestamp::parse_rfc3339("1969-12-31T23:59:59Z");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        let result = Timestamp::parse_rfc3339("not-a-timestamp");
        assert!(result.is_err());
    }

    #[test]
    fn test_now_is_nonzero() {
        let t = Timestamp::now();
        assert!(t.get() > 0);
    }

    #[test]
    fn test_add() {
        let a = Timestamp::from_seconds(10);
        let b = Timestamp::from_seconds(3);
        assert_eq!((a + b).get(), 13);
    }

    #[test]
    fn test_field_value() {
        let t = Timestamp::from_seconds(77);
        let v = t.to_value();
        assert_eq!(v, Value::Timestamp(t));
        assert_eq!(Timestamp::from_value(&v), Some(t));
        assert_eq!(Timestamp::from_value(&Value::Null), None);
    }
}
