//! Millime rounding.
//!
//! Amounts are rounded half away from zero at the third decimal, i.e. to
//! the nearest millime. Ties are judged on the exact value of the amount,
//! not on its product with 1000, which may itself round onto a tie.

/// Millimes per currency unit.
pub const MILLIMES_PER_UNIT: f64 = 1000.0;

/// Rounds an amount to three decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use taxi_fare::rounding::round3;
///
/// assert_eq!(round3(5.4999999999), 5.5);
/// assert_eq!(round3(0.0005), 0.001);
/// assert_eq!(round3(-0.0005), -0.001);
/// ```
pub fn round3(value: f64) -> f64 {
    millime_count(value) / MILLIMES_PER_UNIT
}

/// Converts an amount to whole millimes, rounding half away from zero.
pub fn to_millimes(value: f64) -> i64 {
    millime_count(value) as i64
}

fn millime_count(value: f64) -> f64 {
    let scaled = value * MILLIMES_PER_UNIT;
    let rounded = scaled.round();
    if (scaled - rounded).abs() != 0.5 {
        return rounded;
    }
    // `scaled` is a tie; the exact product is `scaled + residual`.
    let residual = value.mul_add(MILLIMES_PER_UNIT, -scaled);
    if residual == 0.0 || residual.signum() == scaled.signum() {
        rounded
    } else {
        scaled.trunc()
    }
}
