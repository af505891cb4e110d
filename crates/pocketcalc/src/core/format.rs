//! Number <-> text conversions for the display and the expression line
//!
//! The calculator shows numbers the way a browser prints them: the
//! shortest decimal that round-trips, switching to exponent form for very
//! large and very small magnitudes, and `NaN` / `Infinity` for non-finite
//! results. Long values in the expression line are shortened to a fixed
//! number of significant digits.

/// Exact decimal expansion length; every finite `f64` fits.
const EXACT_DIGITS: usize = 800;

/// Upper bound on significant digits accepted by [`to_precision`].
pub const MAX_PRECISION: usize = 100;

/// Splits a finite, positive `f64` into its shortest round-trip digits and
/// decimal exponent, so that `x = 0.d1d2d3... * 10^(exp + 1)`.
///
/// Among the candidates of that length the one nearest the exact value
/// wins, ties going to an even last digit.
fn shortest_digits(x: f64) -> (String, i32) {
    let (digits, exp) = split_exponential(&format!("{x:e}"));
    let (nearest, nearest_exp) = round_digits(x, digits.len(), Tie::Even);
    let (nearest, nearest_exp) = split_exponential(&format!(
        "{}e{nearest_exp}",
        with_point(&nearest)
    ));
    if nearest.len() == digits.len() && parse_digits(&nearest, nearest_exp) == Some(x) {
        (nearest, nearest_exp)
    } else {
        (digits, exp)
    }
}

fn with_point(digits: &str) -> String {
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        lead.to_string()
    } else {
        format!("{lead}.{rest}")
    }
}

fn parse_digits(digits: &str, exp: i32) -> Option<f64> {
    format!("{}e{exp}", with_point(digits)).parse().ok()
}

/// Splits a finite, positive `f64` into its exact decimal digits.
fn exact_digits(x: f64) -> (String, i32) {
    split_exponential(&format!("{:.*e}", EXACT_DIGITS, x))
}

fn split_exponential(formatted: &str) -> (String, i32) {
    let (mantissa, exp) = formatted.split_once('e').unwrap_or((formatted, "0"));
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exp = exp.parse::<i32>().unwrap_or(0);
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    (digits, exp)
}

fn non_finite(n: f64) -> Option<&'static str> {
    if n.is_nan() {
        Some("NaN")
    } else if n == f64::INFINITY {
        Some("Infinity")
    } else if n == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn exponent_suffix(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{sign}{}", exp.unsigned_abs())
}

/// Renders `n` as the shortest decimal string that parses back to `n`.
///
/// Plain notation is used while the decimal point sits within 21 digits
/// left of / 6 zeros right of the first significant digit; outside that
/// range the result is `d.ddde+x` / `d.ddde-x`. Negative zero renders as
/// `0`.
///
/// ```rust
/// use pocketcalc::core::format::stringify;
///
/// assert_eq!(stringify(8.0), "8");
/// assert_eq!(stringify(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(stringify(1e21), "1e+21");
/// assert_eq!(stringify(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn stringify(n: f64) -> String {
    if let Some(s) = non_finite(n) {
        return s.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let (digits, exp) = shortest_digits(n.abs());
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        let mut s = digits;
        s.push_str(&"0".repeat((point - k) as usize));
        s
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}{}", exponent_suffix(exp))
        } else {
            format!("{lead}.{rest}{}", exponent_suffix(exp))
        }
    };

    if n < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Renders `n` with exactly `precision` significant digits.
///
/// Rounding is half away from zero on the exact binary value. Fixed
/// notation is used when the decimal exponent lies in `-6..precision`,
/// exponent notation otherwise. Trailing zeros are kept. `precision` is
/// clamped to `1..=MAX_PRECISION`.
#[must_use]
pub fn to_precision(n: f64, precision: usize) -> String {
    if let Some(s) = non_finite(n) {
        return s.to_string();
    }
    let p = precision.clamp(1, MAX_PRECISION);

    let (digits, exp) = if n == 0.0 {
        ("0".repeat(p), 0)
    } else {
        round_half_up(n.abs(), p)
    };

    let body = if exp < -6 || exp >= p as i32 {
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}{}", exponent_suffix(exp))
        } else {
            format!("{lead}.{rest}{}", exponent_suffix(exp))
        }
    } else if exp == p as i32 - 1 {
        digits
    } else if exp >= 0 {
        let (int, frac) = digits.split_at(exp as usize + 1);
        format!("{int}.{frac}")
    } else {
        format!("0.{}{digits}", "0".repeat((-(exp + 1)) as usize))
    };

    if n < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// How an exact halfway digit string is rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tie {
    /// Away from zero
    Up,
    /// Towards an even last digit
    Even,
}

/// Rounds the exact expansion of `x` to `p` digits, ties away from zero.
fn round_half_up(x: f64, p: usize) -> (String, i32) {
    round_digits(x, p, Tie::Up)
}

/// Rounds the exact expansion of `x` to `p` digits.
fn round_digits(x: f64, p: usize, tie: Tie) -> (String, i32) {
    let (exact, mut exp) = exact_digits(x);
    let mut digits: Vec<u8> = exact.bytes().collect();
    let halfway = digits.len() == p + 1 && digits[p] == b'5';
    digits.resize(digits.len().max(p + 1), b'0');

    let round_up = match tie {
        Tie::Even if halfway => p > 0 && (digits[p - 1] - b'0') % 2 == 1,
        _ => digits[p] >= b'5',
    };
    digits.truncate(p);

    if round_up {
        let mut i = p;
        loop {
            if i == 0 {
                // Carried out of every digit: 99..9 -> 100..0
                digits.insert(0, b'1');
                digits.truncate(p);
                exp += 1;
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    (String::from_utf8_lossy(&digits).into_owned(), exp)
}

/// Renders `n` for the expression line.
///
/// Uses [`stringify`] unless that is longer than `max_len` characters, in
/// which case the [`to_precision`] form with `precision` digits is used.
#[must_use]
pub fn trim_for_expr(n: f64, max_len: usize, precision: usize) -> String {
    let s = stringify(n);
    if s.chars().count() > max_len {
        to_precision(n, precision)
    } else {
        s
    }
}

/// Cuts `text` to at most `width` characters.
#[must_use]
pub fn truncate_display(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign followed by
/// either `Infinity` or a decimal literal with optional fraction and
/// exponent. Returns NaN when no prefix is numeric.
///
/// ```rust
/// use pocketcalc::core::format::parse_number;
///
/// assert_eq!(parse_number("12"), 12.0);
/// assert_eq!(parse_number("0."), 0.0);
/// assert_eq!(parse_number("1e+21"), 1e21);
/// assert!(parse_number("NaN").is_nan());
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if mantissa_digits > 0 || j > frac_start {
            mantissa_digits += j - frac_start;
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}
