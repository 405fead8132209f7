// ============================================================================
// Number Formatting
// Thousands grouping, currency and uppercase-Chinese rendering, and
// compact abbreviation
// ============================================================================

// ============================================================================
// Format Options
// ============================================================================

/// Options for [`format_number`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Digits after the decimal separator (the value is rounded to fit)
    pub decimal_places: usize,
    /// Separator between the integer and fractional part
    pub decimal_separator: char,
    /// Separator between three-digit groups of the integer part
    pub thousands_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            decimal_separator: '.',
            thousands_separator: ',',
        }
    }
}

impl NumberFormat {
    /// Create options with the defaults (2 places, `.` decimal, `,` grouping).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }
}

/// Placement of the currency symbol relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

/// Options for [`format_currency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub position: SymbolPosition,
    pub decimal_places: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            position: SymbolPosition::Before,
            decimal_places: 2,
        }
    }
}

impl CurrencyFormat {
    /// Create options with the defaults (`$` before the amount, 2 places).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_position(mut self, position: SymbolPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }
}

// ============================================================================
// Formatting Operations
// ============================================================================

/// Format a number with thousands grouping and a fixed number of decimal
/// places.
///
/// An all-zero fractional part is dropped entirely, so `1234.0` renders as
/// `"1,234"` rather than `"1,234.00"`. NaN renders as `"0"`.
///
/// # Example
/// ```ignore
/// let text = format_number(1234567.891, &NumberFormat::default());
/// assert_eq!(text, "1,234,567.89");
/// ```
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if value.is_nan() {
        return "0".to_string();
    }

    let fixed = format!("{:.*}", format.decimal_places, value);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let grouped = group_thousands(integer, format.thousands_separator);
    match fraction {
        Some(fraction) if fraction.bytes().any(|digit| digit != b'0') => {
            format!("{}{}{}", grouped, format.decimal_separator, fraction)
        },
        _ => grouped,
    }
}

/// Insert `separator` between three-digit groups, counting from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(magnitude.len() + magnitude.len() / 3 + 1);
    grouped.push_str(sign);
    for (position, digit) in magnitude.bytes().enumerate() {
        if position > 0 && (magnitude.len() - position) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit as char);
    }
    grouped
}

/// Format an amount as currency.
///
/// Grouping always uses the default separators; only the symbol, its
/// position, and the decimal places vary.
///
/// # Example
/// ```ignore
/// let eur = CurrencyFormat::new().with_symbol("€").with_position(SymbolPosition::After);
/// assert_eq!(format_currency(1234.5, &eur), "1,234.50€");
/// ```
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let number = format_number(
        amount,
        &NumberFormat::default().with_decimal_places(format.decimal_places),
    );
    match format.position {
        SymbolPosition::Before => format!("{}{}", format.symbol, number),
        SymbolPosition::After => format!("{}{}", number, format.symbol),
    }
}

/// Render an amount in uppercase Chinese financial numerals (大写金额).
///
/// The integer part reads in units of 元 with 拾/佰/仟/万/亿/兆 place
/// markers, the fractional part in 角 and 分 (rounded to the fen), and a
/// whole amount closes with 整. A zero run inside the integer part
/// collapses to a single 零; no 零 is inserted between 元 and a lone 分.
/// Negative amounts carry a 负 prefix, amounts rounding to zero render as
/// `"零元整"`, and non-finite input renders as the empty string.
///
/// # Example
/// ```ignore
/// assert_eq!(number_to_chinese(1234.56), "壹仟贰佰叁拾肆元伍角陆分");
/// assert_eq!(number_to_chinese(10000.0), "壹万元整");
/// ```
pub fn number_to_chinese(value: f64) -> String {
    const DIGITS: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];
    const PLACES: [&str; 13] = [
        "", "拾", "佰", "仟", "万", "拾", "佰", "仟", "亿", "拾", "佰", "仟", "兆",
    ];

    if !value.is_finite() {
        return String::new();
    }
    if value == 0.0 {
        return "零元整".to_string();
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let mut integer = magnitude.trunc() as u64;
    let mut cents = (magnitude.fract() * 100.0).round() as u64;
    if cents == 100 {
        // Fen rounding spilled into the next whole yuan.
        integer += 1;
        cents = 0;
    }

    let mut rendered = String::new();
    if integer > 0 {
        let digits = integer.to_string();
        let bytes = digits.as_bytes();
        for (position, &byte) in bytes.iter().enumerate() {
            let digit = (byte - b'0') as usize;
            if digit != 0 {
                rendered.push_str(DIGITS[digit]);
                let place = bytes.len() - 1 - position;
                rendered.push_str(PLACES.get(place).copied().unwrap_or(""));
            } else if position + 1 < bytes.len() && bytes[position + 1] != b'0' {
                rendered.push_str(DIGITS[0]);
            }
        }
        rendered.push_str("元");
    }
    if cents > 0 {
        let jiao = (cents / 10) as usize;
        let fen = (cents % 10) as usize;
        if jiao > 0 {
            rendered.push_str(DIGITS[jiao]);
            rendered.push_str("角");
        }
        if fen > 0 {
            rendered.push_str(DIGITS[fen]);
            rendered.push_str("分");
        }
    }

    if integer == 0 && cents == 0 {
        rendered = "零元整".to_string();
    }
    if integer > 0 && cents == 0 {
        rendered.push_str("整");
    }

    if negative {
        format!("负{}", rendered)
    } else {
        rendered
    }
}

/// Abbreviate a large number with a thousands-power unit suffix.
///
/// Magnitudes below 1000 are returned unabbreviated. Units run K, M, B, T,
/// P, E; magnitudes beyond 1000^6 stay capped at E. NaN renders as `"0"`.
///
/// # Example
/// ```ignore
/// assert_eq!(abbreviate_number(1500.0, 1), "1.5K");
/// assert_eq!(abbreviate_number(-2_500_000.0, 2), "-2.50M");
/// ```
pub fn abbreviate_number(value: f64, digits: usize) -> String {
    const UNITS: [&str; 7] = ["", "K", "M", "B", "T", "P", "E"];

    if value.is_nan() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if magnitude < 1000.0 {
        return format!("{}{}", sign, magnitude);
    }

    let mut exponent = 0;
    let mut scaled = magnitude;
    while scaled >= 1000.0 && exponent < UNITS.len() - 1 {
        scaled /= 1000.0;
        exponent += 1;
    }
    format!("{}{:.*}{}", sign, digits, scaled, UNITS[exponent])
}

/// Clamp `value` into `[min, max]`.
///
/// The upper bound wins when the bounds are inverted, matching
/// `value.max(min).min(max)`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_defaults() {
        let format = NumberFormat::default();
        assert_eq!(format_number(1234567.891, &format), "1,234,567.89");
        assert_eq!(format_number(999.0, &format), "999");
        assert_eq!(format_number(1000.0, &format), "1,000");
        assert_eq!(format_number(0.5, &format), "0.50");
    }

    #[test]
    fn test_format_number_drops_zero_fraction() {
        let format = NumberFormat::default();
        assert_eq!(format_number(1234.0, &format), "1,234");
        assert_eq!(format_number(1234.004, &format), "1,234");
        assert_eq!(format_number(0.0, &format), "0");
    }

    #[test]
    fn test_format_number_custom_separators() {
        let format = NumberFormat::new()
            .with_decimal_separator(',')
            .with_thousands_separator('.');
        assert_eq!(format_number(1234567.891, &format), "1.234.567,89");
    }

    #[test]
    fn test_format_number_zero_places() {
        let format = NumberFormat::new().with_decimal_places(0);
        assert_eq!(format_number(1234.56, &format), "1,235");
    }

    #[test]
    fn test_format_number_negative() {
        let format = NumberFormat::default();
        assert_eq!(format_number(-1234567.891, &format), "-1,234,567.89");
        assert_eq!(format_number(-12.0, &format), "-12");
    }

    #[test]
    fn test_format_number_nan() {
        assert_eq!(format_number(f64::NAN, &NumberFormat::default()), "0");
    }

    #[test]
    fn test_format_currency_before_and_after() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_currency(1234.5, &usd), "$1,234.50");

        let eur = CurrencyFormat::new()
            .with_symbol("€")
            .with_position(SymbolPosition::After);
        assert_eq!(format_currency(1234.5, &eur), "1,234.50€");
    }

    #[test]
    fn test_format_currency_whole_amount_drops_fraction() {
        assert_eq!(format_currency(1000.0, &CurrencyFormat::default()), "$1,000");
    }

    #[test]
    fn test_number_to_chinese_whole_amounts() {
        assert_eq!(number_to_chinese(0.0), "零元整");
        assert_eq!(number_to_chinese(7.0), "柒元整");
        assert_eq!(number_to_chinese(1234.0), "壹仟贰佰叁拾肆元整");
        assert_eq!(number_to_chinese(10000.0), "壹万元整");
    }

    #[test]
    fn test_number_to_chinese_collapses_zero_runs() {
        assert_eq!(number_to_chinese(1000.0), "壹仟元整");
        assert_eq!(number_to_chinese(1001.0), "壹仟零壹元整");
        assert_eq!(number_to_chinese(250_000.0), "贰拾伍万元整");
    }

    #[test]
    fn test_number_to_chinese_fractional_amounts() {
        assert_eq!(number_to_chinese(1234.56), "壹仟贰佰叁拾肆元伍角陆分");
        assert_eq!(number_to_chinese(0.56), "伍角陆分");
        assert_eq!(number_to_chinese(0.5), "伍角");
        assert_eq!(number_to_chinese(0.05), "伍分");
        // No 零 between 元 and a lone 分.
        assert_eq!(number_to_chinese(3.07), "叁元柒分");
        // Fen rounding carries into the yuan part.
        assert_eq!(number_to_chinese(1.999), "贰元整");
    }

    #[test]
    fn test_number_to_chinese_sign_and_edge_inputs() {
        assert_eq!(number_to_chinese(-42.0), "负肆拾贰元整");
        assert_eq!(number_to_chinese(0.004), "零元整");
        assert_eq!(number_to_chinese(f64::NAN), "");
    }

    #[test]
    fn test_abbreviate_number() {
        assert_eq!(abbreviate_number(999.0, 1), "999");
        assert_eq!(abbreviate_number(1500.0, 1), "1.5K");
        assert_eq!(abbreviate_number(1_000_000.0, 1), "1.0M");
        assert_eq!(abbreviate_number(2_500_000_000.0, 2), "2.50B");
        assert_eq!(abbreviate_number(-1500.0, 1), "-1.5K");
        assert_eq!(abbreviate_number(f64::NAN, 1), "0");
    }

    #[test]
    fn test_abbreviate_number_caps_at_largest_unit() {
        assert_eq!(abbreviate_number(1.0e21, 0), "1000E");
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        // Inverted bounds: upper bound wins.
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }
}
