//! Parent-reference parsing, including the root sentinel.
//!
//! The wire format accepts the root sentinel as an absent field, `null`,
//! the number `0`, or the strings `""` and `"0"`. Anything else is kept
//! verbatim: values that parse as identifiers become [`ParentRef::Id`],
//! the rest become [`ParentRef::Literal`] so listings can miss leniently
//! instead of erroring.

use serde_json::Value;

use filebox_core::types::FileId;

/// A caller-supplied parent reference, normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParentRef {
    #[default]
    /// The root sentinel — no parent, top level.
    Root,
    /// A well-formed record identifier (existence not yet checked).
    Id(FileId),
    /// A value that is neither the sentinel nor a parseable identifier.
    Literal(String),
}

impl ParentRef {
    /// Normalize a JSON body field.
    pub fn from_body(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Root,
            Some(Value::Number(n)) if n.as_u64() == Some(0) => Self::Root,
            Some(Value::String(s)) => Self::from_raw(s),
            Some(other) => Self::Literal(other.to_string()),
        }
    }

    /// Normalize a query-string parameter.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None => Self::Root,
            Some(s) => Self::from_raw(s),
        }
    }

    fn from_raw(s: &str) -> Self {
        if s.is_empty() || s == "0" {
            return Self::Root;
        }
        match s.parse::<FileId>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Literal(s.to_string()),
        }
    }

    /// The parent id to store or filter by, if this reference is usable.
    pub fn as_id(&self) -> Option<FileId> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }
}
