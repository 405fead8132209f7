// ============================================================================
// Collection Operations
// Sorting, grouping, deduplication, and filtering over value slices
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use crate::structural::Value;
use chrono::SecondsFormat;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Sort direction for [`sort_by_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

// ============================================================================
// Ordering
// ============================================================================

/// Total order over values of any kind.
///
/// Values of the same kind compare naturally: numbers numerically (NaN
/// sorts above every other number), text and patterns lexicographically,
/// instants chronologically, false before true, and containers
/// lexicographically element by element. Values of different kinds compare
/// by kind rank: null, bool, number, text, instant, pattern, sequence,
/// mapping.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.total_cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Instant(x), Value::Instant(y)) => x.cmp(y),
        (Value::Pattern(x), Value::Pattern(y)) => x.as_str().cmp(y.as_str()),
        (Value::Sequence(x), Value::Sequence(y)) => {
            for (left, right) in x.iter().zip(y) {
                let ordering = compare_values(left, right);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            x.len().cmp(&y.len())
        },
        (Value::Mapping(x), Value::Mapping(y)) => {
            for ((left_key, left), (right_key, right)) in x.iter().zip(y) {
                let by_key = left_key.cmp(right_key);
                if by_key != Ordering::Equal {
                    return by_key;
                }
                let by_value = compare_values(left, right);
                if by_value != Ordering::Equal {
                    return by_value;
                }
            }
            x.len().cmp(&y.len())
        },
        _ => a.kind().cmp(&b.kind()),
    }
}

/// Sort values by the slot at a dotted path.
///
/// The sort is stable. Values where the path resolves to nothing sort as
/// greatest: last in ascending order and first in descending order.
///
/// # Example
/// ```ignore
/// let by_age = sort_by_path(&people, "profile.age", SortOrder::Ascending);
/// ```
pub fn sort_by_path(values: &[Value], path: &str, order: SortOrder) -> Vec<Value> {
    let mut sorted: Vec<Value> = values.iter().map(Value::deep_clone).collect();
    sorted.sort_by(|a, b| {
        let ordering = compare_at_path(a, b, path);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_at_path(a: &Value, b: &Value, path: &str) -> Ordering {
    match (a.get_path(path), b.get_path(path)) {
        (Some(left), Some(right)) => compare_values(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// Grouping and Deduplication
// ============================================================================

/// Group values by the rendered text of the slot at a dotted path.
///
/// Scalars render with their natural text, instants as RFC 3339, patterns
/// as their source, and containers as JSON. Both a stored null and an
/// absent slot group under `"null"`. Groups appear in first-encounter
/// order and keep their members in input order.
pub fn group_by_path(values: &[Value], path: &str) -> IndexMap<String, Vec<Value>> {
    let mut groups: IndexMap<String, Vec<Value>> = IndexMap::new();
    for value in values {
        let key = render_key(value.get_path(path));
        groups.entry(key).or_default().push(value.deep_clone());
    }
    groups
}

/// Rendered text of a resolved slot, used as a group or dedup key.
fn render_key(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Text(text)) => text.clone(),
        Some(Value::Instant(instant)) => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        Some(Value::Pattern(pattern)) => pattern.as_str().to_string(),
        Some(container) => serde_json::Value::from(container.deep_clone()).to_string(),
    }
}

/// Keep the first occurrence of each structurally distinct value.
///
/// Distinctness is structural deep equality, with two exceptions to plain
/// `deep_equal`: NaN deduplicates against NaN, and negative zero
/// deduplicates against zero.
pub fn unique_values(values: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for value in values {
        if seen.insert(identity_key(value)) {
            unique.push(value.deep_clone());
        }
    }
    unique
}

/// Keep the first value for each distinct rendered key at a dotted path.
pub fn unique_by_path(values: &[Value], path: &str) -> Vec<Value> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|value| seen.insert(render_key(value.get_path(path))))
        .map(Value::deep_clone)
        .collect()
}

/// Kind-tagged canonical text for whole-value deduplication.
fn identity_key(value: &Value) -> String {
    match value {
        Value::Number(number) => {
            let normalized = if *number == 0.0 { 0.0 } else { *number };
            format!("number:{}", normalized)
        },
        Value::Text(text) => format!("text:{}", text),
        Value::Instant(instant) => format!("instant:{}", instant.timestamp_millis()),
        Value::Pattern(pattern) => format!("pattern:{}", pattern.as_str()),
        other => format!("json:{}", serde_json::Value::from(other.deep_clone())),
    }
}

// ============================================================================
// Filtering and Ranges
// ============================================================================

/// Copy of `values` without the elements the predicate selects.
///
/// The predicate receives each value and its index in the input.
pub fn remove_matching<F>(values: &[Value], mut predicate: F) -> Vec<Value>
where
    F: FnMut(&Value, usize) -> bool,
{
    values
        .iter()
        .enumerate()
        .filter(|(index, value)| !predicate(value, *index))
        .map(|(_, value)| value.deep_clone())
        .collect()
}

/// Copy of `values` without every element deep-equal to `target`.
pub fn remove_equal(values: &[Value], target: &Value) -> Vec<Value> {
    values
        .iter()
        .filter(|value| !value.deep_equal(target))
        .map(Value::deep_clone)
        .collect()
}

/// Inclusive numeric range from `start` toward `end` in steps of `step`.
///
/// The direction comes from the bounds; a step pointing the other way
/// yields an empty range. The walk accumulates in floating point, so a
/// fractional step can stop short of `end` by representation error.
///
/// # Errors
/// Returns `InvalidOperand` when `step` is zero or any argument is
/// non-finite.
pub fn number_range(start: f64, end: f64, step: f64) -> NumericResult<Vec<f64>> {
    if step == 0.0 || !start.is_finite() || !end.is_finite() || !step.is_finite() {
        return Err(NumericError::InvalidOperand);
    }

    let ascending = start <= end;
    if (ascending && step < 0.0) || (!ascending && step > 0.0) {
        return Ok(Vec::new());
    }

    let mut result = Vec::new();
    let mut current = start;
    loop {
        let in_range = if ascending { current <= end } else { current >= end };
        if !in_range {
            break;
        }
        result.push(current);
        current += step;
    }
    Ok(result)
}

// ============================================================================
// Tests
// ============================================================================
