// ============================================================================
// Precise Decimal Arithmetic
// Exact add/subtract/multiply/divide/round over f64 by decimal rescaling
// ============================================================================
//
// Binary floating point cannot represent most decimal fractions, so naive
// arithmetic accumulates visible error: 0.1 + 0.2 is 0.30000000000000004 and
// 1.1 * 1.1 is 1.2100000000000002.
//
// The operations here recover the decimal each operand displays as (the
// shortest round-tripping rendering), rescale both operands to integers, do
// integer arithmetic, and scale back down. The result is the f64 nearest to
// the exact decimal answer, so add(0.1, 0.2) is exactly 0.3.
//
// When the rescaled integers do not fit in an i128 (magnitudes around 1e38,
// or operands whose decimal lengths differ by dozens of digits) the
// operations fall back to scaling in float space.

use super::errors::{NumericError, NumericResult};

// ============================================================================
// Decimal Decomposition
// ============================================================================

/// Number of digits after the decimal point in the shortest decimal
/// rendering of `value`.
///
/// This is the precision the value *displays* with, not the precision of the
/// underlying binary representation: `decimal_places(0.1)` is 1 even though
/// 0.1 is not exactly representable.
///
/// Non-finite values have no decimal rendering and report 0.
#[inline]
pub fn decimal_places(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    match value.to_string().split_once('.') {
        Some((_, fraction)) => fraction.len() as u32,
        None => 0,
    }
}

/// Decompose a finite `value` into `(mantissa, places)` such that
/// `value == mantissa / 10^places` in exact decimal arithmetic.
///
/// Returns `None` when the digit string does not fit in an `i128`.
fn decompose(value: f64) -> Option<(i128, u32)> {
    let text = value.to_string();
    match text.split_once('.') {
        Some((integer, fraction)) => {
            let digits = format!("{}{}", integer, fraction);
            Some((digits.parse().ok()?, fraction.len() as u32))
        },
        None => Some((text.parse().ok()?, 0)),
    }
}

/// 10^exponent as an i128, `None` once it overflows (exponent > 38).
#[inline]
fn pow10_int(exponent: u32) -> Option<i128> {
    10_i128.checked_pow(exponent)
}

/// 10^exponent as an f64. Overflows to infinity for very large exponents;
/// callers guard against a non-finite scale.
#[inline]
fn pow10_float(exponent: u32) -> f64 {
    10_f64.powi(exponent.min(i32::MAX as u32) as i32)
}

#[inline]
fn ensure_finite(value: f64) -> NumericResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericError::InvalidOperand)
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

/// Add two numbers without binary representation error.
///
/// # Errors
/// Returns `InvalidOperand` if either operand is NaN or infinite.
///
/// # Example
/// ```ignore
/// assert_eq!(precise::add(0.1, 0.2)?, 0.3);
/// ```
pub fn add(a: f64, b: f64) -> NumericResult<f64> {
    ensure_finite(a)?;
    ensure_finite(b)?;

    if let Some(sum) = exact_add(a, b) {
        return Ok(sum);
    }

    let scale = pow10_float(decimal_places(a).max(decimal_places(b)));
    if scale.is_finite() {
        Ok((a * scale + b * scale).round() / scale)
    } else {
        Ok(a + b)
    }
}

fn exact_add(a: f64, b: f64) -> Option<f64> {
    let (mantissa_a, places_a) = decompose(a)?;
    let (mantissa_b, places_b) = decompose(b)?;
    let places = places_a.max(places_b);

    let scaled_a = mantissa_a.checked_mul(pow10_int(places - places_a)?)?;
    let scaled_b = mantissa_b.checked_mul(pow10_int(places - places_b)?)?;
    let sum = scaled_a.checked_add(scaled_b)?;

    Some(sum as f64 / pow10_float(places))
}

/// Subtract `b` from `a` without binary representation error.
///
/// Defined as `add(a, -b)`, so `subtract(0.3, 0.1)` is exactly `0.2` rather
/// than `0.19999999999999998`.
///
/// # Errors
/// Returns `InvalidOperand` if either operand is NaN or infinite.
#[inline]
pub fn subtract(a: f64, b: f64) -> NumericResult<f64> {
    add(a, -b)
}

/// Multiply two numbers without binary representation error.
///
/// # Errors
/// Returns `InvalidOperand` if either operand is NaN or infinite.
///
/// # Example
/// ```ignore
/// assert_eq!(precise::multiply(1.1, 1.1)?, 1.21);
/// ```
pub fn multiply(a: f64, b: f64) -> NumericResult<f64> {
    ensure_finite(a)?;
    ensure_finite(b)?;

    if let Some(product) = exact_multiply(a, b) {
        return Ok(product);
    }

    let places = decimal_places(a) + decimal_places(b);
    let scale = pow10_float(places);
    let rescale = pow10_float(places.saturating_mul(2));
    if scale.is_finite() && rescale.is_finite() {
        Ok(((a * scale).round() * (b * scale).round()) / rescale)
    } else {
        Ok(a * b)
    }
}

fn exact_multiply(a: f64, b: f64) -> Option<f64> {
    let (mantissa_a, places_a) = decompose(a)?;
    let (mantissa_b, places_b) = decompose(b)?;
    let product = mantissa_a.checked_mul(mantissa_b)?;
    Some(product as f64 / pow10_float(places_a + places_b))
}

/// Divide `a` by `b` without binary representation error.
///
/// Both operands are rescaled to integers at a common decimal exponent, so
/// `divide(0.3, 0.1)` is exactly `3.0`.
///
/// # Errors
/// - `InvalidOperand` if either operand is NaN or infinite
/// - `DivisionByZero` if `b` is zero (checked before any rescaling)
pub fn divide(a: f64, b: f64) -> NumericResult<f64> {
    ensure_finite(a)?;
    ensure_finite(b)?;
    if b == 0.0 {
        return Err(NumericError::DivisionByZero);
    }

    if let Some(quotient) = exact_divide(a, b) {
        return Ok(quotient);
    }
    Ok(a / b)
}

fn exact_divide(a: f64, b: f64) -> Option<f64> {
    let (mantissa_a, places_a) = decompose(a)?;
    let (mantissa_b, places_b) = decompose(b)?;
    // Cross-scale so both mantissas sit at the same decimal exponent.
    let scaled_a = mantissa_a.checked_mul(pow10_int(places_b)?)?;
    let scaled_b = mantissa_b.checked_mul(pow10_int(places_a)?)?;
    Some(scaled_a as f64 / scaled_b as f64)
}

/// Round to `decimals` decimal places, with ties rounding away from zero.
///
/// Rounding happens in decimal space, so `round(2.345, 2)` is `2.35` even
/// though the binary value of 2.345 sits fractionally below the midpoint.
///
/// # Errors
/// Returns `InvalidOperand` if `value` is NaN or infinite.
pub fn round(value: f64, decimals: u32) -> NumericResult<f64> {
    ensure_finite(value)?;

    if let Some(rounded) = exact_round(value, decimals) {
        return Ok(rounded);
    }

    let scale = pow10_float(decimals);
    if scale.is_finite() {
        Ok((value * scale).round() / scale)
    } else {
        Ok(value)
    }
}

fn exact_round(value: f64, decimals: u32) -> Option<f64> {
    let (mantissa, places) = decompose(value)?;
    if places <= decimals {
        return Some(value);
    }

    let divisor = pow10_int(places - decimals)?;
    let quotient = mantissa / divisor;
    let remainder = mantissa % divisor;
    let rounded = if remainder.unsigned_abs() * 2 >= divisor.unsigned_abs() {
        quotient + mantissa.signum()
    } else {
        quotient
    };

    Some(rounded as f64 / pow10_float(decimals))
}

// ============================================================================
// Tests
// ============================================================================
