/// A value that can present itself as a number, as text, or both.
///
/// Numeric directives (`d`, `x`, `f`, ...) ask for [`as_number`] first and
/// fall back to parsing [`as_text`]; the `s` directive asks for [`as_text`]
/// first and falls back to rendering [`as_number`]. A value exposing both
/// representations therefore renders each directive family from its
/// preferred one, even when the two disagree.
///
/// # Example
///
/// ```ignore
/// use hostkit_core::{Coercible, Value, format};
///
/// #[derive(Debug)]
/// struct Port(u16);
///
/// impl Coercible for Port {
///     fn as_number(&self) -> Option<f64> { Some(self.0.into()) }
///     fn as_text(&self) -> Option<String> { Some(format!("port {}", self.0)) }
/// }
///
/// let port = Value::custom(Port(8080));
/// assert_eq!(format("%d / %s", &[port.clone(), port])?, "8080 / port 8080");
/// ```
///
/// [`as_number`]: Coercible::as_number
/// [`as_text`]: Coercible::as_text
pub trait Coercible {
    /// The numeric representation, if the value has one.
    fn as_number(&self) -> Option<f64>;

    /// The textual representation, if the value has one.
    fn as_text(&self) -> Option<String>;

    /// Numeric-first coercion.
    ///
    /// A value with neither representation coerces to NaN.
    fn to_number(&self) -> f64 {
        match self.as_number() {
            Some(number) => number,
            None => self.as_text().map_or(f64::NAN, |text| parse_number(&text)),
        }
    }

    /// Text-first coercion.
    ///
    /// A value with neither representation coerces to the empty string.
    fn to_text(&self) -> String {
        match self.as_text() {
            Some(text) => text,
            None => self.as_number().map(number_to_text).unwrap_or_default(),
        }
    }
}

/// Parses text the way a script runtime converts a string to a number.
///
/// Surrounding whitespace is ignored, empty text is zero, `0x`/`0o`/`0b`
/// prefixes select a radix, and `Infinity` is accepted with an optional sign.
/// Anything else that is not a plain decimal literal is NaN.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `f64::from_str` also takes "inf" and "nan", which are not numbers here.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }

    text.parse().unwrap_or(f64::NAN)
}

/// Renders a number the way a script runtime prints it.
///
/// Integral values print without a fraction, very large or very small
/// magnitudes switch to exponent form with an explicit exponent sign, and
/// non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn number_to_text(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if number == 0.0 {
        return "0".to_owned();
    }

    let magnitude = number.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", number);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }

    format!("{}", number)
}
