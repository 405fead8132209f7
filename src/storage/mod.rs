// ============================================================================
// Storage Module
// JSON persistence over an abstract key-value text store
// ============================================================================
//
// This module provides:
// - StringStore: the store contract (get/set/remove over text)
// - MemoryStore: in-memory implementation with an optional byte quota
// - safe_parse_json / get_item / set_item: typed, failure-swallowing JSON
// - get_value / set_value: the same for structural values
//
// Design principles:
// - Storage failures never panic or propagate; reads fall back to
//   defaults and writes report a bool
// - Parse failures are logged at debug level and swallowed

mod json;
mod store;

pub use json::{get_item, get_value, safe_parse_json, set_item, set_value};
pub use store::{MemoryStore, StringStore};
