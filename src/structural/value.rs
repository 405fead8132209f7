// ============================================================================
// Structural Value
// The sum type traversal, paths, and flattening operate on
// ============================================================================

use super::pattern::Pattern;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Insertion-ordered string-keyed mapping of structural values.
pub type Map = IndexMap<String, Value>;

/// A structural value: scalars, instants, patterns, and containers of more
/// values.
///
/// Containers own their children outright, so a value is always a tree.
/// Reference cycles are unrepresentable and traversal needs no visited-set
/// bookkeeping.
///
/// Mappings preserve insertion order; iterating or re-emitting a mapping
/// yields keys in the order they were inserted.
#[derive(Debug)]
pub enum Value {
    /// The explicit null value
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Numeric scalar (IEEE 754 double)
    Number(f64),
    /// Text scalar
    Text(String),
    /// A point in time with millisecond precision, always UTC
    Instant(DateTime<Utc>),
    /// A compiled regular expression, identified by its source text
    Pattern(Pattern),
    /// Ordered sequence of values
    Sequence(Vec<Value>),
    /// Insertion-ordered mapping from string keys to values
    Mapping(Map),
}

/// The variant tag of a [`Value`], used for diagnostics and for ordering
/// values of different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Instant,
    Pattern,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Lowercase name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Instant => "instant",
            ValueKind::Pattern => "pattern",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Value {
    /// The variant tag of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Instant(_) => ValueKind::Instant,
            Value::Pattern(_) => ValueKind::Pattern,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value is a sequence or a mapping.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Instant(instant) => Some(*instant),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Value::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Map> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Number(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::Text("x".to_string()).kind(), ValueKind::Text);
        assert_eq!(Value::Sequence(vec![]).kind(), ValueKind::Sequence);
        assert_eq!(Value::Mapping(Map::new()).kind(), ValueKind::Mapping);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Null.name(), "null");
        assert_eq!(ValueKind::Instant.name(), "instant");
        assert_eq!(ValueKind::Mapping.name(), "mapping");
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Text("hi".to_string()).as_text(), Some("hi"));
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::Bool(true).as_number(), None);
    }

    #[test]
    fn test_container_checks() {
        assert!(Value::Sequence(vec![]).is_container());
        assert!(Value::Mapping(Map::new()).is_container());
        assert!(!Value::Number(0.0).is_container());
        assert!(!Value::Null.is_container());
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_kind_ordering_is_declaration_order() {
        assert!(ValueKind::Null < ValueKind::Bool);
        assert!(ValueKind::Number < ValueKind::Text);
        assert!(ValueKind::Sequence < ValueKind::Mapping);
    }
}
