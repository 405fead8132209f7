// ============================================================================
// Dotted Paths
// Parse dotted path strings and read/write values at the addressed slot
// ============================================================================

use super::value::{Map, Value};
use smallvec::SmallVec;

// ============================================================================
// Path Parsing
// ============================================================================

/// A dotted path split into its segments.
///
/// Segments borrow from the source string; typical paths stay on the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    segments: SmallVec<[&'a str; 8]>,
}

impl<'a> Path<'a> {
    /// Split a dotted path into segments. The empty string parses to an
    /// empty path, which addresses nothing.
    pub fn parse(path: &'a str) -> Self {
        if path.is_empty() {
            return Self {
                segments: SmallVec::new(),
            };
        }
        Self {
            segments: path.split('.').collect(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }
}

/// The canonical sequence index a segment addresses, if any.
///
/// Only the canonical decimal rendering of a non-negative integer counts:
/// `"0"` and `"12"` are indexes, while `"007"`, `"+5"`, `"-1"`, and `""`
/// are plain mapping keys.
pub fn sequence_index(segment: &str) -> Option<usize> {
    let index: usize = segment.parse().ok()?;
    if index.to_string() == segment {
        Some(index)
    } else {
        None
    }
}

// ============================================================================
// Path Reads
// ============================================================================

impl Value {
    /// Resolve a dotted path to a reference into this value.
    ///
    /// Mappings are indexed by segment text, sequences by canonical integer
    /// segments. Returns `None` when any step is missing, when a sequence is
    /// addressed by a non-index segment, when a scalar is addressed at all,
    /// or when the path is empty.
    ///
    /// A stored `Value::Null` is *found*: the result is `Some(&Value::Null)`,
    /// distinct from `None` for an absent slot.
    ///
    /// # Example
    /// ```ignore
    /// let name = config.get_path("servers.0.host");
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let parsed = Path::parse(path);
        if parsed.is_empty() {
            return None;
        }

        let mut current = self;
        for segment in parsed.segments() {
            current = match current {
                Value::Mapping(entries) => entries.get(*segment)?,
                Value::Sequence(items) => items.get(sequence_index(segment)?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Resolve a dotted path, falling back to `default` when the slot is
    /// absent.
    pub fn get_path_or<'v>(&'v self, path: &str, default: &'v Value) -> &'v Value {
        self.get_path(path).unwrap_or(default)
    }
}

// ============================================================================
// Path Writes
// ============================================================================

impl Value {
    /// Write `value` at a dotted path, creating intermediate containers as
    /// needed.
    ///
    /// An existing mapping is keyed by segment text even when the segment
    /// looks numeric, mirroring [`get_path`](Value::get_path), so writes
    /// never discard mapping entries. Where a container must be created
    /// (the slot is missing, null, or a scalar), a canonical-integer
    /// segment creates a sequence and any other segment creates a mapping.
    /// Writing past the end of a sequence pads the gap with `Value::Null`;
    /// a sequence addressed by a non-index segment is replaced by a fresh
    /// mapping.
    ///
    /// An empty path writes nothing.
    ///
    /// # Example
    /// ```ignore
    /// let mut root = Value::Mapping(Map::new());
    /// root.set_path("servers.0.host", Value::Text("localhost".into()));
    /// ```
    pub fn set_path(&mut self, path: &str, value: Value) {
        let parsed = Path::parse(path);
        let segments = parsed.segments();
        let Some((&last, intermediate)) = segments.split_last() else {
            return;
        };

        let mut current = self;
        for (position, &segment) in intermediate.iter().enumerate() {
            current = current.step_into(segment, segments[position + 1]);
        }
        current.place_child(last, value);
    }

    /// Consuming companion to [`set_path`](Value::set_path) for building
    /// values in expression position.
    #[must_use]
    pub fn with_path(mut self, path: &str, value: Value) -> Value {
        self.set_path(path, value);
        self
    }

    /// Descend one intermediate segment, creating or reshaping containers
    /// so the walk can continue. An existing mapping absorbs the segment
    /// as a plain key; the index interpretation only applies elsewhere.
    fn step_into(&mut self, segment: &str, next_segment: &str) -> &mut Value {
        if !matches!(self, Value::Mapping(_)) {
            if let Some(index) = sequence_index(segment) {
                let items = self.force_sequence();
                if items.len() <= index {
                    items.resize(index + 1, Value::Null);
                }
                return ensure_container(&mut items[index], next_segment);
            }
        }
        let child = self
            .force_mapping()
            .entry(segment.to_string())
            .or_insert(Value::Null);
        ensure_container(child, next_segment)
    }

    /// Write the final segment into this container. An existing mapping
    /// takes the segment as a key; otherwise an index segment writes into
    /// a sequence, reshaping the slot if needed.
    fn place_child(&mut self, segment: &str, value: Value) {
        if !matches!(self, Value::Mapping(_)) {
            if let Some(index) = sequence_index(segment) {
                let items = self.force_sequence();
                if items.len() <= index {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = value;
                return;
            }
        }
        self.force_mapping().insert(segment.to_string(), value);
    }

    /// Reshape this value into a sequence if it is not one already.
    fn force_sequence(&mut self) -> &mut Vec<Value> {
        if !matches!(self, Value::Sequence(_)) {
            *self = Value::Sequence(Vec::new());
        }
        match self {
            Value::Sequence(items) => items,
            _ => unreachable!("sequence installed above"),
        }
    }

    /// Reshape this value into a mapping if it is not one already.
    fn force_mapping(&mut self) -> &mut Map {
        if !matches!(self, Value::Mapping(_)) {
            *self = Value::Mapping(Map::new());
        }
        match self {
            Value::Mapping(entries) => entries,
            _ => unreachable!("mapping installed above"),
        }
    }
}

/// Replace anything that is not already a container with a fresh container
/// shaped for the segment that will index it next.
fn ensure_container<'v>(child: &'v mut Value, next_segment: &str) -> &'v mut Value {
    if !child.is_container() {
        *child = if sequence_index(next_segment).is_some() {
            Value::Sequence(Vec::new())
        } else {
            Value::Mapping(Map::new())
        };
    }
    child
}

// ============================================================================
// Tests
// ============================================================================
