// ============================================================================
// Datetime Module
// Instant formatting, parsing, and calendar arithmetic
// ============================================================================
//
// This module provides:
// - format_instant / parse_instant / instant_from_millis: token-based
//   rendering and lenient parsing
// - start_of_day / end_of_day / difference_in_days / add_time: calendar
//   arithmetic with month-end clamping
// - is_in_range / is_weekday / relative_description: predicates and
//   human-readable ages
//
// Design principles:
// - Everything is UTC; zone handling stays at the application boundary
// - Calendar steps clamp rather than roll over (Jan 31 + 1 month is the
//   end of February)
// - Fallible arithmetic returns Option instead of panicking

mod calendar;
mod format;

pub use calendar::{
    add_time, difference_in_days, end_of_day, is_in_range, is_weekday, relative_description,
    start_of_day, TimeUnit,
};
pub use format::{format_instant, instant_from_millis, parse_instant};
