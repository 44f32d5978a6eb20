#[cfg(test)]
mod tests;

use crate::types::{Date, Timestamp};
use serde::{Deserialize, Serialize};

///
/// Value
///
/// The dynamically-typed cell exchanged through an array view.
///
/// Null → the field's value is `Option::None` (i.e. SQL NULL); this is
///        the absent sentinel, distinct from every legal field value.
/// List → ordered many-cardinality transport; order is preserved.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Date(Date),
    Int(i64),
    List(Vec<Self>),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
}

impl Value {
    /// True when this value is the absent sentinel.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable variant label used in diagnostics.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::Int(_) => "Int",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::Text(_) => "Text",
            Self::Timestamp(_) => "Timestamp",
            Self::Uint(_) => "Uint",
        }
    }

    /// Borrow the inner text, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Copy out the inner unsigned integer, if this is a `Uint` value.
    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Copy out the inner boolean, if this is a `Bool` value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
