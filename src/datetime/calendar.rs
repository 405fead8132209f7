// ============================================================================
// Calendar Arithmetic
// Day bounds, differences, unit addition, and relative descriptions
// ============================================================================

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveTime, Utc, Weekday};

/// Calendar and clock units accepted by [`add_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// The first millisecond of the instant's UTC day (00:00:00.000).
pub fn start_of_day(instant: &DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// The last millisecond of the instant's UTC day (23:59:59.999).
pub fn end_of_day(instant: &DateTime<Utc>) -> DateTime<Utc> {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid wall clock time");
    instant.date_naive().and_time(last_milli).and_utc()
}

/// Whole days between two instants, ignoring direction.
///
/// Partial days truncate: 47 hours apart is 1 day.
pub fn difference_in_days(a: &DateTime<Utc>, b: &DateTime<Utc>) -> i64 {
    a.signed_duration_since(*b).num_days().abs()
}

/// Add (or with a negative amount, subtract) a number of units.
///
/// Year and month steps are calendar-aware and clamp to the end of shorter
/// months: January 31 plus one month is February 29 in a leap year and
/// February 28 otherwise. Day and clock steps are exact durations.
///
/// Returns `None` when the result would leave the representable range.
pub fn add_time(instant: &DateTime<Utc>, amount: i64, unit: TimeUnit) -> Option<DateTime<Utc>> {
    match unit {
        TimeUnit::Years => add_months_signed(instant, amount.checked_mul(12)?),
        TimeUnit::Months => add_months_signed(instant, amount),
        TimeUnit::Days => {
            if amount >= 0 {
                instant.checked_add_days(Days::new(amount as u64))
            } else {
                instant.checked_sub_days(Days::new(amount.unsigned_abs()))
            }
        },
        TimeUnit::Hours => instant.checked_add_signed(Duration::try_hours(amount)?),
        TimeUnit::Minutes => instant.checked_add_signed(Duration::try_minutes(amount)?),
        TimeUnit::Seconds => instant.checked_add_signed(Duration::try_seconds(amount)?),
    }
}

fn add_months_signed(instant: &DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        instant.checked_add_months(Months::new(magnitude))
    } else {
        instant.checked_sub_months(Months::new(magnitude))
    }
}

/// Whether `instant` lies in `[start, end]`, bounds included.
#[inline]
pub fn is_in_range(instant: &DateTime<Utc>, start: &DateTime<Utc>, end: &DateTime<Utc>) -> bool {
    *instant >= *start && *instant <= *end
}

/// Whether the instant's UTC day is Monday through Friday.
#[inline]
pub fn is_weekday(instant: &DateTime<Utc>) -> bool {
    !matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Human-readable age of `instant` as seen from `base`.
///
/// Buckets: under a minute is `"just now"`, then whole minutes, hours,
/// days, 30-day months, and 12-month years, each with `" ago"` appended.
/// Instants in the future of `base` also read `"just now"`.
///
/// # Example
/// ```ignore
/// let text = relative_description(&event, &Utc::now());
/// // "5 minutes ago"
/// ```
pub fn relative_description(instant: &DateTime<Utc>, base: &DateTime<Utc>) -> String {
    let seconds = base.signed_duration_since(*instant).num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return pluralize(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return pluralize(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return pluralize(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return pluralize(months, "month");
    }

    pluralize(months / 12, "year")
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::parse_instant;

    fn at(text: &str) -> DateTime<Utc> {
        parse_instant(text).unwrap()
    }

    #[test]
    fn test_start_and_end_of_day() {
        let instant = at("2024-03-01 12:30:45");
        assert_eq!(start_of_day(&instant), at("2024-03-01 00:00:00"));

        let end = end_of_day(&instant);
        assert_eq!(end.timestamp_millis() % 1000, 999);
        assert_eq!(end.date_naive(), instant.date_naive());
    }

    #[test]
    fn test_difference_in_days_truncates() {
        let a = at("2024-03-01 12:00:00");
        let b = at("2024-03-03 11:00:00");
        assert_eq!(difference_in_days(&a, &b), 1);
        assert_eq!(difference_in_days(&b, &a), 1);
        assert_eq!(difference_in_days(&a, &a), 0);
    }

    #[test]
    fn test_add_time_clock_units() {
        let instant = at("2024-03-01 12:00:00");
        assert_eq!(
            add_time(&instant, 3, TimeUnit::Hours),
            Some(at("2024-03-01 15:00:00"))
        );
        assert_eq!(
            add_time(&instant, -30, TimeUnit::Minutes),
            Some(at("2024-03-01 11:30:00"))
        );
        assert_eq!(
            add_time(&instant, 90, TimeUnit::Seconds),
            Some(at("2024-03-01 12:01:30"))
        );
        assert_eq!(
            add_time(&instant, 2, TimeUnit::Days),
            Some(at("2024-03-03 12:00:00"))
        );
    }

    #[test]
    fn test_add_time_months_clamp_to_month_end() {
        let end_of_january = at("2024-01-31 10:00:00");
        assert_eq!(
            add_time(&end_of_january, 1, TimeUnit::Months),
            Some(at("2024-02-29 10:00:00"))
        );
        assert_eq!(
            add_time(&at("2023-01-31 10:00:00"), 1, TimeUnit::Months),
            Some(at("2023-02-28 10:00:00"))
        );
    }

    #[test]
    fn test_add_time_years_respect_leap_days() {
        let leap_day = at("2024-02-29 08:00:00");
        assert_eq!(
            add_time(&leap_day, 1, TimeUnit::Years),
            Some(at("2025-02-28 08:00:00"))
        );
        assert_eq!(
            add_time(&leap_day, -1, TimeUnit::Years),
            Some(at("2023-02-28 08:00:00"))
        );
    }

    #[test]
    fn test_is_in_range_includes_bounds() {
        let start = at("2024-03-01 00:00:00");
        let end = at("2024-03-31 00:00:00");
        assert!(is_in_range(&start, &start, &end));
        assert!(is_in_range(&end, &start, &end));
        assert!(is_in_range(&at("2024-03-15 12:00:00"), &start, &end));
        assert!(!is_in_range(&at("2024-04-01 00:00:00"), &start, &end));
    }

    #[test]
    fn test_is_weekday() {
        assert!(is_weekday(&at("2024-03-01 12:00:00"))); // Friday
        assert!(!is_weekday(&at("2024-03-02 12:00:00"))); // Saturday
        assert!(!is_weekday(&at("2024-03-03 12:00:00"))); // Sunday
        assert!(is_weekday(&at("2024-03-04 12:00:00"))); // Monday
    }

    #[test]
    fn test_relative_description_buckets() {
        let base = at("2024-03-01 12:00:00");
        let described = |text: &str| relative_description(&at(text), &base);

        assert_eq!(described("2024-03-01 11:59:30"), "just now");
        assert_eq!(described("2024-03-01 11:55:00"), "5 minutes ago");
        assert_eq!(described("2024-03-01 11:59:00"), "1 minute ago");
        assert_eq!(described("2024-03-01 09:00:00"), "3 hours ago");
        assert_eq!(described("2024-02-27 12:00:00"), "3 days ago");
        assert_eq!(described("2023-12-15 12:00:00"), "2 months ago");
        assert_eq!(described("2021-03-01 12:00:00"), "3 years ago");
    }

    #[test]
    fn test_relative_description_future_is_just_now() {
        let base = at("2024-03-01 12:00:00");
        assert_eq!(
            relative_description(&at("2024-03-02 12:00:00"), &base),
            "just now"
        );
    }
}
