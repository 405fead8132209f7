// ============================================================================
// Flattening
// Collapse nested mappings into a single level with dotted keys
// ============================================================================

use super::value::{Map, Value};

impl Value {
    /// Flatten nested mappings into a single-level mapping whose keys are
    /// dotted paths.
    ///
    /// Only mappings are descended into. Sequences, instants, patterns, and
    /// scalars are leaves and are deep-cloned into the result as-is. An
    /// empty nested mapping contributes no entries. Key order follows the
    /// depth-first traversal of the input.
    ///
    /// The produced keys resolve through [`get_path`](Value::get_path) back
    /// to equal values, as long as no original key itself contains a dot.
    ///
    /// # Example
    /// ```ignore
    /// // {"a": {"b": 1, "c": {"d": 2}}, "e": 3}
    /// // flattens to {"a.b": 1, "a.c.d": 2, "e": 3}
    /// let flat = value.flatten();
    /// ```
    pub fn flatten(&self) -> Map {
        let mut flat = Map::new();
        collect_flat(self, None, &mut flat);
        flat
    }

    /// Flatten with every produced key prefixed by `prefix` and a dot.
    ///
    /// An empty prefix behaves like [`flatten`](Value::flatten). With a
    /// prefix, a non-mapping input contributes the single entry
    /// `{prefix: value}`.
    pub fn flatten_with_prefix(&self, prefix: &str) -> Map {
        let mut flat = Map::new();
        let root = if prefix.is_empty() { None } else { Some(prefix) };
        collect_flat(self, root, &mut flat);
        flat
    }
}

fn collect_flat(value: &Value, prefix: Option<&str>, flat: &mut Map) {
    match value {
        Value::Mapping(entries) => {
            for (key, child) in entries {
                let joined = match prefix {
                    Some(prefix) if !prefix.is_empty() => format!("{}.{}", prefix, key),
                    _ => key.clone(),
                };
                collect_flat(child, Some(&joined), flat);
            }
        },
        leaf => {
            if let Some(key) = prefix {
                flat.insert(key.to_string(), leaf.deep_clone());
            }
        },
    }
}
