//! Lenient decimal parsing for form text.

/// Parses the leading decimal number of `text`.
///
/// Leading whitespace is skipped and anything after the longest numeric
/// prefix (`[+-]digits[.digits][e[+-]digits]`) is ignored, so `"3 km"`
/// reads as `3`. Returns `None` if no digits are found. Spellings such as
/// `inf` or `NaN` are not numbers here.
///
/// # Examples
///
/// ```
/// use taxi_fare::form::parse_number;
///
/// assert_eq!(parse_number(" 7.9"), Some(7.9));
/// assert_eq!(parse_number("12km"), Some(12.0));
/// assert_eq!(parse_number(".5"), Some(0.5));
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
