use crate::interpreter::value::core::Value;

/// The decimal separator used on input and output.
pub const DECIMAL_SEPARATOR: char = ',';

/// Renders a value the way the calculator displays it.
///
/// # Example
/// ```
/// use commacalc::interpreter::{formatter::format_value, value::core::Value};
///
/// assert_eq!(format_value(&Value::Integer(-4)), "-4");
/// assert_eq!(format_value(&Value::Real(2.5)), "2,5");
/// assert_eq!(format_value(&Value::Real(2.0)), "2,0");
/// ```
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Real(r) => format_real(*r),
    }
}

/// Renders a real number with a decimal comma.
///
/// Finite values use the shortest text that reads back to the same `f64`
/// and always carry a fractional part or an exponent (`1,0`, `0,1`,
/// `1e+20`). Values below `1e-4` or from `1e16` up switch to scientific
/// notation with a signed exponent of at least two digits. Non-finite values
/// print as `inf`, `-inf` and `nan`.
///
/// # Example
/// ```
/// use commacalc::interpreter::formatter::format_real;
///
/// assert_eq!(format_real(0.1), "0,1");
/// assert_eq!(format_real(-1.0), "-1,0");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// assert_eq!(format_real(f64::NAN), "nan");
/// assert_eq!(format_real(1e-5), "1e-05");
/// assert_eq!(format_real(2f64.powi(60)), "1,152921504606847e+18");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = format!("{value:?}");
    let text = match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent.strip_prefix('-')
                                         .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => text,
    };

    text.replace('.', &DECIMAL_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponents_are_signed_and_padded() {
        assert_eq!(format_real(1e16), "1e+16");
        assert_eq!(format_real(1e100), "1e+100");
        assert_eq!(format_real(-2.5e-7), "-2,5e-07");
        assert_eq!(format_real(1e-4), "0,0001");
        assert_eq!(format_real(1e15), "1000000000000000,0");
    }
}
