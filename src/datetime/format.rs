// ============================================================================
// Instant Formatting
// Token-based rendering and lenient parsing of instants
// ============================================================================

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// Render an instant using a token pattern.
///
/// Recognized tokens: `YYYY` `MM` `DD` `HH` `mm` `ss` `SSS`, all
/// zero-padded. Any other character is copied through verbatim.
///
/// # Example
/// ```ignore
/// let text = format_instant(&instant, "YYYY-MM-DD HH:mm:ss");
/// // "2024-03-01 12:30:45"
/// ```
pub fn format_instant(instant: &DateTime<Utc>, pattern: &str) -> String {
    const TOKENS: [&str; 7] = ["YYYY", "MM", "DD", "HH", "mm", "ss", "SSS"];

    let mut result = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        for token in TOKENS {
            if let Some(remainder) = rest.strip_prefix(token) {
                result.push_str(&render_token(instant, token));
                rest = remainder;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            result.push(ch);
        }
        rest = chars.as_str();
    }
    result
}

fn render_token(instant: &DateTime<Utc>, token: &str) -> String {
    match token {
        "YYYY" => format!("{:04}", instant.year()),
        "MM" => format!("{:02}", instant.month()),
        "DD" => format!("{:02}", instant.day()),
        "HH" => format!("{:02}", instant.hour()),
        "mm" => format!("{:02}", instant.minute()),
        "ss" => format!("{:02}", instant.second()),
        "SSS" => format!("{:03}", instant.timestamp_subsec_millis()),
        _ => token.to_string(),
    }
}

/// Parse an instant from common textual forms.
///
/// Accepted, tried in order: RFC 3339 (offset converted to UTC),
/// `YYYY-MM-DD HH:MM:SS` read as UTC, and a bare `YYYY-MM-DD` read as
/// midnight UTC. Returns `None` for anything else.
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }
    None
}

/// Build an instant from a Unix epoch offset in milliseconds.
///
/// Returns `None` when the offset is outside the representable range.
pub fn instant_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instant() -> DateTime<Utc> {
        instant_from_millis(1_709_296_245_123).unwrap() // 2024-03-01T12:30:45.123Z
    }

    #[test]
    fn test_format_date_tokens() {
        let instant = sample_instant();
        assert_eq!(format_instant(&instant, "YYYY-MM-DD"), "2024-03-01");
        assert_eq!(
            format_instant(&instant, "YYYY-MM-DD HH:mm:ss"),
            "2024-03-01 12:30:45"
        );
        assert_eq!(format_instant(&instant, "HH:mm:ss.SSS"), "12:30:45.123");
    }

    #[test]
    fn test_format_copies_literals_verbatim() {
        let instant = sample_instant();
        assert_eq!(format_instant(&instant, "DD/MM/YYYY"), "01/03/2024");
        assert_eq!(format_instant(&instant, "at HH o'clock"), "at 12 o'clock");
        assert_eq!(format_instant(&instant, ""), "");
    }

    #[test]
    fn test_format_pads_small_fields() {
        let instant = parse_instant("2024-01-05 03:07:09").unwrap();
        assert_eq!(
            format_instant(&instant, "YYYY-MM-DD HH:mm:ss.SSS"),
            "2024-01-05 03:07:09.000"
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_instant("2024-03-01T12:30:45.123Z").unwrap();
        assert_eq!(parsed, sample_instant());

        // Offsets are normalized to UTC.
        let offset = parse_instant("2024-03-01T14:30:45.123+02:00").unwrap();
        assert_eq!(offset, sample_instant());
    }

    #[test]
    fn test_parse_space_separated_and_bare_date() {
        let full = parse_instant("2024-03-01 12:30:45").unwrap();
        assert_eq!(format_instant(&full, "YYYY-MM-DD HH:mm:ss"), "2024-03-01 12:30:45");

        let bare = parse_instant("2024-03-01").unwrap();
        assert_eq!(format_instant(&bare, "HH:mm:ss"), "00:00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_instant("not a date").is_none());
        assert!(parse_instant("2024-13-40").is_none());
        assert!(parse_instant("").is_none());
    }

    #[test]
    fn test_round_trip_through_text() {
        let instant = parse_instant("2024-06-15 08:00:00").unwrap();
        let text = format_instant(&instant, "YYYY-MM-DD HH:mm:ss");
        assert_eq!(parse_instant(&text), Some(instant));
    }
}
