// ============================================================================
// Deep Traversal
// Recursive copy and recursive equality over structural values
// ============================================================================

use super::value::Value;

impl Value {
    /// Recursively copy this value so that no mutable state is shared with
    /// the original.
    ///
    /// Scalars are copied by value. Instants are copied by their epoch
    /// offset into a fresh instance. Patterns share their compiled program,
    /// which is immutable and therefore equivalent to a reconstruction from
    /// the same source. Sequences and mappings are rebuilt element by
    /// element, and mapping insertion order is preserved.
    ///
    /// Containers own their children, so the input is always a finite tree
    /// and recursion terminates without cycle tracking.
    ///
    /// # Example
    /// ```ignore
    /// let mut copy = original.deep_clone();
    /// copy.set_path("a.b", Value::Number(1.0));
    /// // `original` is untouched.
    /// ```
    pub fn deep_clone(&self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Bool(flag) => Value::Bool(*flag),
            Value::Number(number) => Value::Number(*number),
            Value::Text(text) => Value::Text(text.clone()),
            Value::Instant(instant) => Value::Instant(*instant),
            Value::Pattern(pattern) => Value::Pattern(pattern.clone()),
            Value::Sequence(items) => {
                Value::Sequence(items.iter().map(Value::deep_clone).collect())
            },
            Value::Mapping(entries) => Value::Mapping(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.deep_clone()))
                    .collect(),
            ),
        }
    }

    /// Recursively compare two values for structural equality.
    ///
    /// Values of different kinds are never equal. Numbers compare by IEEE
    /// equality, so NaN is not equal to anything, including itself.
    /// Instants compare by their epoch offset and patterns by their source
    /// text. Sequences must match element by element in order; mappings
    /// must have the same key set with recursively equal values, regardless
    /// of insertion order.
    pub fn deep_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Instant(a), Value::Instant(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.deep_equal(y))
            },
            (Value::Mapping(a), Value::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.get(key).is_some_and(|counterpart| value.deep_equal(counterpart))
                    })
            },
            _ => false,
        }
    }
}

// ============================================================================
// Standard Trait Wiring
// ============================================================================

/// `Clone` is a deep clone: containers never share children.
impl Clone for Value {
    fn clone(&self) -> Value {
        self.deep_clone()
    }
}

/// `PartialEq` is deep equality. No `Eq` impl: NaN makes number equality
/// non-reflexive, exactly as with `f64` itself.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.deep_equal(other)
    }
}
