//! Conversion of a single bound value according to its directive.

use super::{Conversion, FormatSpec};
use crate::traits::Coercible;
use crate::{FormatConfig, Value};

/// A rendered value split so that zero padding can go between the sign or
/// prefix and the digits.
struct Field {
    sign: &'static str,
    prefix: &'static str,
    body: String,
    zero_fill: bool,
}

impl Field {
    fn text(body: String) -> Self {
        Self {
            sign: "",
            prefix: "",
            body,
            zero_fill: false,
        }
    }

    fn pad(self, spec: &FormatSpec) -> String {
        let len = self.sign.len() + self.prefix.len() + self.body.chars().count();
        let fill = spec.width.unwrap_or(0).saturating_sub(len);

        let mut out = String::with_capacity(len + fill);
        if spec.flags.left_justify {
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.push_str(&self.body);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if spec.flags.zero_pad && self.zero_fill {
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(&self.body);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.push_str(&self.body);
        }
        out
    }
}

/// Renders `value` as `spec` directs, padding included.
pub(crate) fn directive(spec: &FormatSpec, value: &Value, config: &FormatConfig) -> String {
    let field = match spec.conversion {
        c if c.is_integer() => integer(spec, value.to_number()),
        c if c.is_float() => float(spec, value.to_number(), config),
        Conversion::String => Field::text(truncate(value.to_text(), spec.precision)),
        _ => Field::text(truncate(value.to_json(), spec.precision)),
    };
    field.pad(spec)
}

fn truncate(mut text: String, precision: Option<usize>) -> String {
    let cut = precision.and_then(|limit| text.char_indices().nth(limit).map(|(at, _)| at));
    if let Some(cut) = cut {
        text.truncate(cut);
    }
    text
}

fn sign(negative: bool, spec: &FormatSpec) -> &'static str {
    if negative {
        "-"
    } else if spec.flags.plus_sign {
        "+"
    } else if spec.flags.space_sign {
        " "
    } else {
        ""
    }
}

/// Wraps a number into 32 bits: truncate toward zero, then reduce modulo
/// 2^32. NaN and the infinities become zero.
fn to_uint32(number: f64) -> u32 {
    if !number.is_finite() {
        return 0;
    }
    number.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// `d i o x X`: `d`/`i` read the value as a wrapped `i32`, the rest as a
/// wrapped `u32`.
fn integer(spec: &FormatSpec, number: f64) -> Field {
    let bits = to_uint32(number);
    let alternate = spec.flags.alternate;

    let (sign, prefix, mut digits) = match spec.conversion {
        Conversion::Octal => ("", "", format!("{:o}", bits)),
        Conversion::HexLower => {
            let prefix = if alternate && bits != 0 { "0x" } else { "" };
            ("", prefix, format!("{:x}", bits))
        }
        Conversion::HexUpper => {
            let prefix = if alternate && bits != 0 { "0X" } else { "" };
            ("", prefix, format!("{:X}", bits))
        }
        _ => {
            let signed = bits as i32;
            (sign(signed < 0, spec), "", signed.unsigned_abs().to_string())
        }
    };

    if let Some(precision) = spec.precision {
        if precision == 0 && bits == 0 {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }

    let prefix = if spec.conversion == Conversion::Octal && alternate && !digits.starts_with('0') {
        "0"
    } else {
        prefix
    };

    Field {
        sign,
        prefix,
        body: digits,
        zero_fill: spec.precision.is_none(),
    }
}

/// `f F e E g G`.
fn float(spec: &FormatSpec, number: f64, config: &FormatConfig) -> Field {
    let upper = matches!(
        spec.conversion,
        Conversion::FixedUpper | Conversion::ExponentUpper | Conversion::GeneralUpper
    );
    let sign = sign(number.is_sign_negative() && !number.is_nan(), spec);
    let magnitude = number.abs();

    if !magnitude.is_finite() {
        let body = match (magnitude.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        return Field {
            sign,
            prefix: "",
            body: body.to_owned(),
            zero_fill: false,
        };
    }

    let precision = spec.precision.unwrap_or(config.default_precision);
    let alternate = spec.flags.alternate;
    let body = match spec.conversion {
        Conversion::Fixed | Conversion::FixedUpper => fixed(magnitude, precision, alternate),
        Conversion::Exponent | Conversion::ExponentUpper => {
            exponent(magnitude, precision, alternate)
        }
        _ => general(magnitude, precision, alternate),
    };

    Field {
        sign,
        prefix: "",
        body: if upper { body.to_ascii_uppercase() } else { body },
        zero_fill: true,
    }
}

fn fixed(magnitude: f64, precision: usize, alternate: bool) -> String {
    let mut out = format!("{:.*}", precision, magnitude);
    if alternate && precision == 0 {
        out.push('.');
    }
    out
}

/// Splits Rust's `1.23e3` exponent form into mantissa and exponent.
fn split_exponent(text: &str) -> (&str, i32) {
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

fn exponent(magnitude: f64, precision: usize, alternate: bool) -> String {
    let text = format!("{:.*e}", precision, magnitude);
    let (mantissa, exp) = split_exponent(&text);

    let mut out = String::with_capacity(mantissa.len() + 5);
    out.push_str(mantissa);
    if alternate && precision == 0 {
        out.push('.');
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exp.unsigned_abs()));
    out
}

/// C `%g`: scientific when the exponent is below -4 or at least the
/// precision, fixed otherwise; trailing zeros dropped unless `#`.
fn general(magnitude: f64, precision: usize, alternate: bool) -> String {
    let significant = precision.max(1);
    let exp = if magnitude == 0.0 {
        0
    } else {
        split_exponent(&format!("{:.*e}", significant - 1, magnitude)).1
    };

    let use_exponent = exp < -4 || exp >= significant as i32;
    let out = if use_exponent {
        exponent(magnitude, significant - 1, alternate)
    } else {
        let decimals = (significant as i32 - 1 - exp).max(0) as usize;
        fixed(magnitude, decimals, alternate)
    };

    if alternate {
        return out;
    }

    match out.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
        None => trim_fraction(&out).to_owned(),
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
