//! Raw deadline values
//!
//! Listing feeds are inconsistent about how they encode a deadline: some send
//! an ISO timestamp, some epoch seconds, some epoch milliseconds, some a short
//! number of seconds from now, sometimes as a JSON number and sometimes as a
//! string. [`RawDeadline`] captures the value as received; interpreting it is
//! the resolver's job.

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::LISTING_DEADLINE_FIELDS;

/// A deadline exactly as a producer supplied it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum RawDeadline {
    /// Absent, `null`, or otherwise empty.
    #[default]
    Missing,
    /// Already an absolute point in time.
    Instant(DateTime<Utc>),
    /// A bare number whose meaning depends on its magnitude.
    Number(f64),
    /// Text: numeric-looking or a calendar date.
    Text(String),
    /// A value of a kind no rule can interpret (the JSON type name).
    Unsupported(String),
}

impl RawDeadline {
    /// True for [`RawDeadline::Missing`].
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<DateTime<Utc>> for RawDeadline {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<SystemTime> for RawDeadline {
    fn from(value: SystemTime) -> Self {
        Self::Instant(DateTime::<Utc>::from(value))
    }
}

impl From<f64> for RawDeadline {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),+) => {
        $(impl From<$int> for RawDeadline {
            #[allow(clippy::cast_precision_loss)]
            fn from(value: $int) -> Self {
                Self::Number(value as f64)
            }
        })+
    };
}

impl_from_integer!(i32, i64, u32, u64);

impl From<&str> for RawDeadline {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawDeadline {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawDeadline>> From<Option<T>> for RawDeadline {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<Value> for RawDeadline {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Number(number) => number.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(text) => Self::Text(text),
            Value::Bool(_) => Self::Unsupported("boolean".into()),
            Value::Array(_) => Self::Unsupported("array".into()),
            Value::Object(_) => Self::Unsupported("object".into()),
        }
    }
}

/// The deadline-bearing fields of a listing record.
///
/// Feeds disagree on the field name, so the first present, non-null of
/// `deadline`, `expiryDate` and `expiry_date` wins. Every other field of the
/// record is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingDeadline {
    #[serde(default)]
    pub deadline: Option<Value>,
    #[serde(default, rename = "expiryDate")]
    pub expiry_date_camel: Option<Value>,
    #[serde(default)]
    pub expiry_date: Option<Value>,
}

impl ListingDeadline {
    /// Extract the deadline fields from an arbitrary JSON record.
    ///
    /// Non-object records have no deadline.
    pub fn from_record(record: &Value) -> Self {
        let [primary, camel, snake] = LISTING_DEADLINE_FIELDS;
        let field = |name: &str| record.get(name).filter(|value| !value.is_null()).cloned();

        Self {
            deadline: field(primary),
            expiry_date_camel: field(camel),
            expiry_date: field(snake),
        }
    }

    /// The winning deadline value, or [`RawDeadline::Missing`].
    pub fn into_raw(self) -> RawDeadline {
        self.deadline
            .or(self.expiry_date_camel)
            .or(self.expiry_date)
            .map_or(RawDeadline::Missing, RawDeadline::from)
    }
}

impl From<ListingDeadline> for RawDeadline {
    fn from(value: ListingDeadline) -> Self {
        value.into_raw()
    }
}
