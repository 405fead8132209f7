// ============================================================================
// Text Module
// Case conversion and string shaping helpers
// ============================================================================
//
// This module provides:
// - capitalize / to_camel_case / to_pascal_case / to_snake_case /
//   to_kebab_case: case rewriting between naming conventions
// - truncate / mask / strip_html: shaping of user-facing strings
// - char_count / display_width / is_blank: measurement and emptiness
//
// Design principles:
// - Lengths and offsets count characters, never bytes
// - Pure string-in string-out functions; no allocation is reused

mod casing;
mod shaping;

pub use casing::{capitalize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
pub use shaping::{char_count, display_width, is_blank, mask, strip_html, truncate};
