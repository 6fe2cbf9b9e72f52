//! Implicit type conversions of the analyzed language.
//!
//! Three different string-to-number readings exist and the operators do not agree on which one
//! they use:
//!
//! - arithmetic and comparison read the longest numeric prefix, including a `0x` hexadecimal form
//!   ([`str_to_number`]),
//! - bitwise operators and modulo read a base-10 integer like C `strtol` ([`str_to_int`]), so
//!   `"0x1A"` is `0` there,
//! - "is this string numeric" ([`is_numeric_str`]) requires the whole string to be a number.
//!
//! ```
//! use php_binop::convert::{str_to_int, str_to_number, Number};
//!
//! assert_eq!(str_to_number("0x1A"), Number::Int(26));
//! assert_eq!(str_to_int("0x1A"), 0);
//! assert_eq!(str_to_number(" 12abc"), Number::Int(12));
//! assert_eq!(str_to_number("1e3"), Number::Float(1000.0));
//! ```

use crate::context::EvaluationContext;
use crate::value::{AnyKind, Interval, Value};

/// Whitespace skipped before a number.
const WHITESPACE: &[u8] = b" \t\n\r\x0b\x0c";

/// Number read from a string.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    Int(i32),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Number::Int(v) => Value::Int(v),
            Number::Float(v) => Value::float(v),
        }
    }
}

/// Result of scanning a string for a leading number.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NumericPrefix {
    /// The number read, `0` when there are no digits.
    pub number: Number,
    /// At least one digit was read.
    pub has_digits: bool,
    /// Nothing follows the number.
    pub is_whole: bool,
    /// The number was written in hexadecimal.
    pub is_hex: bool,
}

fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| WHITESPACE.contains(b)).count()
}

fn scan_digits(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn scan_hex(bytes: &[u8], from: usize) -> Option<NumericPrefix> {
    let digits = bytes[from..].iter().take_while(|b| b.is_ascii_hexdigit()).count();
    if digits == 0 {
        return None;
    }
    let mut int_value: i64 = 0;
    let mut float_value: f64 = 0.0;
    for &b in &bytes[from..from + digits] {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        };
        float_value = float_value * 16.0 + digit as f64;
        if int_value <= i32::MAX as i64 {
            int_value = int_value * 16 + digit as i64;
        }
    }
    let number = if int_value <= i32::MAX as i64 {
        Number::Int(int_value as i32)
    } else {
        Number::Float(float_value)
    };
    Some(NumericPrefix {
        number,
        has_digits: true,
        is_whole: from + digits == bytes.len(),
        is_hex: true,
    })
}

/// Scans the longest numeric prefix of `s`.
///
/// Leading whitespace is skipped. The accepted forms are an optional sign, digits, an optional
/// fraction and an optional exponent, or, when `allow_hex` is set, `0x` followed by hexadecimal
/// digits. Integers that do not fit `i32` are read as floats.
pub fn scan_number(s: &str, allow_hex: bool) -> NumericPrefix {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let start = skip_whitespace(bytes);

    if allow_hex && start + 1 < len && bytes[start] == b'0' && (bytes[start + 1] | 0x20) == b'x' {
        if let Some(prefix) = scan_hex(bytes, start + 2) {
            return prefix;
        }
    }

    let mut end = start;
    if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_digits = scan_digits(bytes, end);
    end += int_digits;

    let mut is_float = false;
    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        frac_digits = scan_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            is_float = true;
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return NumericPrefix {
            number: Number::Int(0),
            has_digits: false,
            is_whole: false,
            is_hex: false,
        };
    }

    if end < len && (bytes[end] | 0x20) == b'e' {
        let mut exp = end + 1;
        if exp < len && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_digits = scan_digits(bytes, exp);
        if exp_digits > 0 {
            is_float = true;
            end = exp + exp_digits;
        }
    }

    let text = &s[start..end];
    let number = if is_float {
        Number::Float(text.parse::<f64>().unwrap_or(0.0))
    } else {
        match text.parse::<i32>() {
            Ok(v) => Number::Int(v),
            Err(_) => Number::Float(text.parse::<f64>().unwrap_or(0.0)),
        }
    };
    NumericPrefix {
        number,
        has_digits: true,
        is_whole: end == len,
        is_hex: false,
    }
}

/// Converts a string to a number the way arithmetic and comparison do.
pub fn str_to_number(s: &str) -> Number {
    scan_number(s, true).number
}

/// Checks whether the whole string is a number.
pub fn is_numeric_str(s: &str) -> bool {
    let prefix = scan_number(s, true);
    prefix.has_digits && prefix.is_whole
}

/// Converts a string to an integer the way bitwise operators and modulo do: base 10, saturating.
pub fn str_to_int(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let mut i = skip_whitespace(bytes);
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let mut magnitude: i64 = 0;
    for &b in &bytes[i..i + scan_digits(bytes, i)] {
        magnitude = (magnitude * 10 + (b - b'0') as i64).min(i32::MAX as i64 + 1);
    }
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

pub fn str_to_bool(s: &str) -> bool {
    !(s.is_empty() || s == "0")
}

pub fn float_to_bool(f: f64) -> bool {
    f != 0.0
}

pub fn bool_to_int(b: bool) -> i32 {
    i32::from(b)
}

/// Converts a float to an integer: truncation, NaN and infinities give `0`, and values outside
/// the `i32` range wrap modulo 2^32.
pub fn float_to_int(f: f64) -> i32 {
    if !f.is_finite() {
        return 0;
    }
    let t = f.trunc();
    if t >= i32::MIN as f64 && t <= i32::MAX as f64 {
        t as i32
    } else {
        t.rem_euclid(4_294_967_296.0) as u32 as i32
    }
}

/// Converts a float range to the range of integers its members convert to.
///
/// Truncation is monotone inside the `i32` range. Anything reaching outside may wrap and gives
/// the whole domain.
pub fn float_range_to_int(lo: f64, hi: f64) -> Interval<i32> {
    let in_range = |f: f64| f.is_finite() && f.trunc() >= i32::MIN as f64 && f.trunc() <= i32::MAX as f64;
    if in_range(lo) && in_range(hi) {
        Interval::new(lo.trunc() as i32, hi.trunc() as i32)
    } else {
        Interval::FULL
    }
}

/// Native boolean projection, or `None` when undetermined.
pub fn to_truth(ctx: &dyn EvaluationContext, value: &Value) -> Option<bool> {
    match value {
        Value::Null => Some(false),
        Value::Bool(b) => Some(*b),
        Value::Int(v) => Some(*v != 0),
        Value::Long(v) => Some(*v != 0),
        Value::Float(f) => Some(float_to_bool(f.0)),
        Value::String(s) => Some(str_to_bool(s)),
        Value::IntInterval(i) => range_truth(i.contains(0), i.is_point()),
        Value::LongInterval(i) => range_truth(i.contains(0), i.is_point()),
        Value::FloatInterval(i) => range_truth(i.start().0 <= 0.0 && 0.0 <= i.end().0, i.is_point()),
        Value::Array(array) => ctx.array_truth(*array),
        Value::Object(_) | Value::Resource(_) => Some(true),
        Value::Any(AnyKind::Object) | Value::Any(AnyKind::Resource) => Some(true),
        Value::Any(_) => None,
    }
}

fn range_truth(contains_zero: bool, is_point: bool) -> Option<bool> {
    match (contains_zero, is_point) {
        (false, _) => Some(true),
        (true, true) => Some(false),
        (true, false) => None,
    }
}

/// Integer projection used by bitwise operators and modulo.
///
/// Objects have no integer projection: the caller reports the conversion and treats them as an
/// unknown integer.
pub fn to_int_range(ctx: &dyn EvaluationContext, value: &Value) -> Interval<i32> {
    match value {
        Value::Null => Interval::point(0),
        Value::Bool(b) => Interval::point(bool_to_int(*b)),
        Value::Int(v) => Interval::point(*v),
        Value::Float(f) => Interval::point(float_to_int(f.0)),
        Value::String(s) => Interval::point(str_to_int(s)),
        Value::IntInterval(i) => *i,
        Value::FloatInterval(i) => float_range_to_int(i.start().0, i.end().0),
        Value::Array(array) => match ctx.array_to_int(*array) {
            Some(v) => Interval::point(v),
            None => Interval::new(0, 1),
        },
        Value::Any(AnyKind::Bool) | Value::Any(AnyKind::Array) => Interval::new(0, 1),
        Value::Resource(_) | Value::Any(AnyKind::Resource) => Interval::new(1, i32::MAX),
        _ => Interval::FULL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::context::Snapshot;

    #[test]
    fn test_scan_decimal() {
        assert_eq!(scan_number("42", false).number, Number::Int(42));
        assert_eq!(scan_number("  -7", false).number, Number::Int(-7));
        assert_eq!(scan_number("+3", false).number, Number::Int(3));
        assert_eq!(scan_number("1.5", false).number, Number::Float(1.5));
        assert_eq!(scan_number(".5", false).number, Number::Float(0.5));
        assert_eq!(scan_number("5.", false).number, Number::Float(5.0));
        assert_eq!(scan_number("2e3", false).number, Number::Float(2000.0));
        assert_eq!(scan_number("2e", false).number, Number::Int(2));
        assert_eq!(scan_number("3000000000", false).number, Number::Float(3e9));
    }

    #[test]
    fn test_scan_flags() {
        let whole = scan_number("12", true);
        assert!(whole.has_digits && whole.is_whole && !whole.is_hex);
        let prefix = scan_number("12abc", true);
        assert!(prefix.has_digits && !prefix.is_whole);
        let none = scan_number("abc", true);
        assert!(!none.has_digits);
        assert_eq!(none.number, Number::Int(0));
        let sign_only = scan_number("-", true);
        assert!(!sign_only.has_digits);
        let dot_only = scan_number(".", true);
        assert!(!dot_only.has_digits);
    }

    #[test]
    fn test_scan_hex() {
        let hex = scan_number("0x1A", true);
        assert_eq!(hex.number, Number::Int(26));
        assert!(hex.is_hex && hex.is_whole);
        assert_eq!(scan_number("0XfF", true).number, Number::Int(255));
        assert_eq!(scan_number("0xFFFFFFFF", true).number, Number::Float(4294967295.0));
        // Without hex support the `x` ends the number.
        let plain = scan_number("0x1A", false);
        assert_eq!(plain.number, Number::Int(0));
        assert!(!plain.is_whole);
        // `0x` without digits is a zero followed by garbage.
        let bare = scan_number("0x", true);
        assert_eq!(bare.number, Number::Int(0));
        assert!(!bare.is_hex);
    }

    #[test]
    fn test_is_numeric_str() {
        assert!(is_numeric_str("10"));
        assert!(is_numeric_str(" 1e1"));
        assert!(is_numeric_str("0x0A"));
        assert!(!is_numeric_str("10 "));
        assert!(!is_numeric_str(""));
        assert!(!is_numeric_str("abc"));
    }

    #[test]
    fn test_str_to_int() {
        assert_eq!(str_to_int("123"), 123);
        assert_eq!(str_to_int("  -45xyz"), -45);
        assert_eq!(str_to_int("1e3"), 1);
        assert_eq!(str_to_int("1.9"), 1);
        assert_eq!(str_to_int("abc"), 0);
        assert_eq!(str_to_int("99999999999"), i32::MAX);
        assert_eq!(str_to_int("-99999999999"), i32::MIN);
        assert_eq!(str_to_int("-2147483648"), i32::MIN);
    }

    #[test]
    fn test_bool_conversions() {
        assert!(!str_to_bool(""));
        assert!(!str_to_bool("0"));
        assert!(str_to_bool("0.0"));
        assert!(str_to_bool(" "));
        assert!(!float_to_bool(0.0));
        assert!(!float_to_bool(-0.0));
        assert!(float_to_bool(f64::NAN));
    }

    #[test]
    fn test_float_to_int() {
        assert_eq!(float_to_int(3.9), 3);
        assert_eq!(float_to_int(-3.9), -3);
        assert_eq!(float_to_int(f64::NAN), 0);
        assert_eq!(float_to_int(f64::INFINITY), 0);
        assert_eq!(float_to_int(4294967296.0 + 5.0), 5);
        assert_eq!(float_to_int(2147483648.0), i32::MIN);
    }

    #[test]
    fn test_float_range_to_int() {
        assert_eq!(float_range_to_int(-1.5, 2.5), Interval::new(-1, 2));
        assert_eq!(float_range_to_int(0.0, 1e20), Interval::FULL);
    }

    #[test]
    fn test_truth() {
        let mut snapshot = Snapshot::new();
        let empty = snapshot.new_array(0);
        let full = snapshot.new_array(2);
        let object = snapshot.new_object();
        assert_eq!(to_truth(&snapshot, &Value::Null), Some(false));
        assert_eq!(to_truth(&snapshot, &Value::string("0")), Some(false));
        assert_eq!(to_truth(&snapshot, &Value::int_interval(1, 5)), Some(true));
        assert_eq!(to_truth(&snapshot, &Value::int_interval(-1, 5)), None);
        assert_eq!(to_truth(&snapshot, &Value::float_interval(0.5, 1.0)), Some(true));
        assert_eq!(to_truth(&snapshot, &empty), Some(false));
        assert_eq!(to_truth(&snapshot, &full), Some(true));
        assert_eq!(to_truth(&snapshot, &object), Some(true));
        assert_eq!(to_truth(&snapshot, &Value::ANY_INT), None);
    }

    #[test]
    fn test_int_range() {
        let snapshot = Snapshot::new();
        assert_eq!(to_int_range(&snapshot, &Value::Bool(true)), Interval::point(1));
        assert_eq!(to_int_range(&snapshot, &Value::string("0x1A")), Interval::point(0));
        assert_eq!(to_int_range(&snapshot, &Value::float(-2.7)), Interval::point(-2));
        assert_eq!(to_int_range(&snapshot, &Value::ANY_BOOL), Interval::new(0, 1));
        assert_eq!(to_int_range(&snapshot, &Value::ANY_STRING), Interval::FULL);
    }
}
