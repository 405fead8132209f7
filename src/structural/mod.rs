// ============================================================================
// Structural Module
// The Value tree and the traversal operations over it
// ============================================================================
//
// This module provides:
// - Value/ValueKind: the structural sum type (scalars, instants, patterns,
//   sequences, insertion-ordered mappings)
// - deep_clone/deep_equal: recursive copy and recursive equality
// - get_path/set_path/flatten: dotted-path access and mapping flattening
// - Pattern: compiled regex with source-text identity
// - Conversions to and from serde_json::Value
//
// Design principles:
// - Containers own their children; cycles are unrepresentable
// - Reads distinguish a stored null from an absent slot
// - Writes create intermediate containers, shaped by the next path segment

mod convert;
mod flatten;
mod path;
mod pattern;
mod traverse;
mod value;

pub use path::{sequence_index, Path};
pub use pattern::Pattern;
pub use value::{Map, Value, ValueKind};
