// ============================================================================
// Numeric Module
// Precise decimal arithmetic and number formatting
// ============================================================================
//
// This module provides:
// - precise: add/subtract/multiply/divide/round without binary
//   representation error
// - NumericError: Error types for arithmetic operations
// - NumberFormat/CurrencyFormat: locale-style rendering of numbers
//
// Design principles:
// - Arithmetic happens on decimal mantissas, not raw floats
// - All fallible operations return Result (no panics)
// - Formatting never fails; degenerate inputs render as "0"

mod errors;
mod format;
pub mod precise;

pub use errors::{NumericError, NumericResult};
pub use format::{
    abbreviate_number, clamp, format_currency, format_number, number_to_chinese, CurrencyFormat,
    NumberFormat, SymbolPosition,
};
