// ============================================================================
// Collection Module
// Path-driven operations over slices of values
// ============================================================================
//
// This module provides:
// - sort_by_path / compare_values: stable sorting with a cross-kind order
// - group_by_path / unique_values / unique_by_path: grouping and dedup
// - remove_matching / remove_equal: filtered copies
// - number_range: inclusive numeric ranges
//
// Design principles:
// - Inputs are never mutated; results are deep-cloned copies
// - Slots that resolve to nothing sort as greatest and group under "null"

mod ops;

pub use ops::{
    compare_values, group_by_path, number_range, remove_equal, remove_matching, sort_by_path,
    unique_by_path, unique_values, SortOrder,
};
