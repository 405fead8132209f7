// ============================================================================
// Datakit Library
// Structural value traversal, precise decimal math, and formatting helpers
// ============================================================================

//! # Datakit
//!
//! Utilities for working with structured data: deep traversal, dotted-path
//! access, decimal-exact arithmetic over `f64`, and the formatting helpers
//! that usually grow around them.
//!
//! ## Features
//!
//! - **Structural values**: a sum type over scalars, instants, patterns,
//!   sequences, and insertion-ordered mappings, with deep clone and deep
//!   equality
//! - **Dotted paths**: `get_path`/`set_path`/`flatten` with automatic
//!   container creation (integer segments create sequences)
//! - **Precise decimals**: add/subtract/multiply/divide/round without
//!   binary representation error, so `0.1 + 0.2` is exactly `0.3`
//! - **Formatting**: thousands grouping, currency, uppercase Chinese
//!   amounts, compact abbreviation, case conversion, masking, and
//!   token-based instant rendering
//! - **Safe storage**: JSON persistence over a pluggable key-value store
//!   that swallows failures instead of panicking
//!
//! ## Example
//!
//! ```rust
//! use datakit::prelude::*;
//!
//! // Build a structural value and address it by dotted paths
//! let mut profile = Value::Mapping(Map::new());
//! profile.set_path("user.name", Value::from("ada"));
//! profile.set_path("user.scores.0", Value::from(97.5));
//!
//! assert_eq!(
//!     profile.get_path("user.name").and_then(Value::as_text),
//!     Some("ada")
//! );
//!
//! // Flatten nested mappings to dotted keys
//! let flat = profile.flatten();
//! assert!(flat.contains_key("user.name"));
//!
//! // Decimal-exact arithmetic over f64
//! let total = precise::add(0.1, 0.2).unwrap();
//! assert_eq!(total, 0.3);
//!
//! // Formatting built on the same pieces
//! assert_eq!(format_number(1234567.891, &NumberFormat::default()), "1,234,567.89");
//! ```

pub mod collection;
pub mod datetime;
pub mod numeric;
pub mod storage;
pub mod structural;
pub mod text;

// Re-exports for convenience
pub mod prelude {
    pub use crate::collection::{
        compare_values, group_by_path, number_range, remove_equal, remove_matching, sort_by_path,
        unique_by_path, unique_values, SortOrder,
    };
    pub use crate::datetime::{
        add_time, difference_in_days, end_of_day, format_instant, instant_from_millis, is_in_range,
        is_weekday, parse_instant, relative_description, start_of_day, TimeUnit,
    };
    pub use crate::numeric::{
        abbreviate_number, clamp, format_currency, format_number, number_to_chinese, precise,
        CurrencyFormat, NumberFormat, NumericError, NumericResult, SymbolPosition,
    };
    pub use crate::storage::{
        get_item, get_value, safe_parse_json, set_item, set_value, MemoryStore, StringStore,
    };
    pub use crate::structural::{sequence_index, Map, Path, Pattern, Value, ValueKind};
    pub use crate::text::{
        capitalize, char_count, display_width, is_blank, mask, strip_html, to_camel_case,
        to_kebab_case, to_pascal_case, to_snake_case, truncate,
    };
}
