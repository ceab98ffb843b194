//! End-to-end behavior of `format` across conversions, binding and coercion.
use hostkit::{
    ArgumentError, Bytes, Coercible, FormatError, Object, SyntaxError, Template, Value, format,
};
use test_case::test_case;

fn fmt(template: &str, args: &[Value]) -> String {
    match format(template, args) {
        Ok(out) => out,
        Err(err) => panic!("format({template:?}) failed: {err}"),
    }
}

#[test_case("%d", "1337"; "bare")]
#[test_case("[%d", "[1337"; "leading literal")]
#[test_case("%d]", "1337]"; "trailing literal")]
#[test_case("[%d]", "[1337]"; "surrounded")]
#[test_case("[%6d]", "[  1337]"; "width")]
#[test_case("[%-6d]", "[1337  ]"; "left justified")]
#[test_case("[%06d]", "[001337]"; "zero padded")]
#[test_case("%i", "1337"; "i alias")]
#[test_case("%+d", "+1337"; "forced sign")]
#[test_case("% d", " 1337"; "space sign")]
fn test_decimal(template: &str, expected: &str) {
    assert_eq!(fmt(template, &[1337.into()]), expected);
}

#[test_case("%x", 65535, "ffff"; "hex lower")]
#[test_case("%X", 65535, "FFFF"; "hex upper")]
#[test_case("%#x", 255, "0xff"; "hex alternate")]
#[test_case("%#08X", 255, "0X0000FF"; "zero pad after prefix")]
#[test_case("%o", 8, "10"; "octal")]
#[test_case("%#o", 8, "010"; "octal alternate")]
#[test_case("%.3d", 7, "007"; "precision minimum digits")]
#[test_case("%05d", -42, "-0042"; "zero pad after sign")]
#[test_case("%08.3d", 7, "     007"; "precision disables zero pad")]
#[test_case("%x", -1, "ffffffff"; "negative hex wraps to u32")]
#[test_case("%o", -1, "37777777777"; "negative octal wraps to u32")]
#[test_case("%d", 2147483648, "-2147483648"; "decimal wraps to i32")]
#[test_case("%d", 4294967301, "5"; "decimal wraps modulo two to the thirty two")]
fn test_integer_variants(template: &str, value: i64, expected: &str) {
    assert_eq!(fmt(template, &[value.into()]), expected);
}

#[test_case("%.2f", 1.23, "1.23"; "fixed")]
#[test_case("%.2e", 1.23, "1.23e+00"; "exponent")]
#[test_case("%.2e", 1234.0, "1.23e+03"; "exponent rounds")]
#[test_case("%.3g", 1.23, "1.23"; "general")]
#[test_case("%f", 1.5, "1.500000"; "default precision")]
#[test_case("%E", 0.000123, "1.230000E-04"; "exponent upper")]
#[test_case("%G", 1e-10, "1E-10"; "general upper")]
#[test_case("%+.1f", 2.31, "+2.3"; "signed fixed")]
#[test_case("%08.2f", -3.5, "-0003.50"; "zero padded float")]
fn test_float(template: &str, value: f64, expected: &str) {
    assert_eq!(fmt(template, &[value.into()]), expected);
}

#[test]
fn test_non_finite_floats() {
    assert_eq!(fmt("%f", &[f64::NAN.into()]), "nan");
    assert_eq!(fmt("%F", &[f64::INFINITY.into()]), "INF");
    assert_eq!(fmt("%05f", &[f64::NEG_INFINITY.into()]), " -inf");
}

#[test_case("%s", "foo"; "bare")]
#[test_case("[%s", "[foo"; "leading literal")]
#[test_case("%s]", "foo]"; "trailing literal")]
#[test_case("[%s]", "[foo]"; "surrounded")]
#[test_case("[%6s]", "[   foo]"; "width")]
#[test_case("[%-6s]", "[foo   ]"; "left justified")]
#[test_case("%.2s", "fo"; "precision truncates")]
#[test_case("[%06s]", "[   foo]"; "zero flag ignored for text")]
fn test_string(template: &str, expected: &str) {
    assert_eq!(fmt(template, &["foo".into()]), expected);
}

#[test]
fn test_string_width_counts_chars() {
    assert_eq!(fmt("[%5s]", &["日本".into()]), "[   日本]");
}

#[test]
fn test_numeric_coercion_of_strings() {
    assert_eq!(fmt("%d", &["1337".into()]), "1337");
    assert_eq!(fmt("%d", &["0xffff".into()]), "65535");
    assert_eq!(fmt("%d", &["  42  ".into()]), "42");
    assert_eq!(fmt("%d", &["".into()]), "0");
    assert_eq!(fmt("%f", &["abc".into()]), "nan");
}

#[test]
fn test_textual_coercion_of_numbers() {
    assert_eq!(fmt("%s", &[1337.into()]), "1337");
    assert_eq!(fmt("%s", &[0xffff.into()]), "65535");
    assert_eq!(fmt("%s", &[1.5.into()]), "1.5");
    assert_eq!(fmt("%s", &[f64::INFINITY.into()]), "Infinity");
    assert_eq!(fmt("%s %s", &[true.into(), Value::Null]), "true null");
}

/// Reports different numbers and text, like a host object overriding both
/// conversions.
struct Split {
    number: Option<f64>,
    text: Option<&'static str>,
}

impl Coercible for Split {
    fn as_number(&self) -> Option<f64> {
        self.number
    }

    fn as_text(&self) -> Option<String> {
        self.text.map(str::to_owned)
    }
}

#[test]
fn test_custom_numeric_conversion_prefers_number() {
    let value = Value::custom(Split {
        number: Some(1337.0),
        text: Some("17"),
    });
    assert_eq!(fmt("%d", &[value]), "1337");
}

#[test]
fn test_custom_textual_conversion_prefers_text() {
    let value = Value::custom(Split {
        number: None,
        text: Some("right"),
    });
    assert_eq!(fmt("%s", &[value]), "right");
}

#[test]
fn test_custom_falls_back_to_other_representation() {
    let only_text = Value::custom(Split {
        number: None,
        text: Some("0x10"),
    });
    let only_number = Value::custom(Split {
        number: Some(2.5),
        text: None,
    });
    assert_eq!(fmt("%d|%s", &[only_text, only_number]), "16|2.5");
}

fn point() -> Value {
    Object::new().with("x", 1337).with("f", "foo").into()
}

#[test]
fn test_named_binding() {
    assert_eq!(fmt("%(x)d", &[point()]), "1337");
    assert_eq!(fmt("%d,%(x)d", &[17.into(), point()]), "17,1337");
    assert_eq!(fmt("%(x)d,%d", &[point(), 17.into()]), "1337,17");
    assert_eq!(fmt("%d,%(x)d,%(f)s", &[17.into(), point()]), "17,1337,foo");
    assert_eq!(fmt("%(x)d,%(f)s,%d", &[point(), 17.into()]), "1337,foo,17");
    assert_eq!(
        fmt("%d,%(x)d,%(f)s,%s", &[17.into(), point(), "bar".into()]),
        "17,1337,foo,bar"
    );
}

#[test]
fn test_named_after_precision() {
    assert_eq!(fmt("[%-8.2(f)s]", &[point()]), "[fo      ]");
}

#[test]
fn test_named_lookup_uses_first_object() {
    let other: Value = Object::new().with("x", 1).into();
    assert_eq!(fmt("%(x)d %s", &[point(), other]), r#"1337 {"x":1}"#);
}

#[test]
fn test_json() {
    assert_eq!(fmt("%r", &[1337.into()]), "1337");
    assert_eq!(fmt("%r", &["foo".into()]), r#""foo""#);
    assert_eq!(
        fmt("%r", &[Object::new().with("x", 17).with("y", 1337).into()]),
        r#"{"x":17,"y":1337}"#
    );
    assert_eq!(fmt("[%6r]", &[1337.into()]), "[  1337]");
    assert_eq!(fmt("[%6r]", &["foo".into()]), r#"[ "foo"]"#);
    assert_eq!(fmt("%r", &[Bytes::encode("bytes").into()]), r#""bytes""#);
}

#[test]
fn test_json_nested_values() {
    let value: Value = Object::new()
        .with("name", "host")
        .with("ports", vec![80, 443])
        .with("ratio", 0.5)
        .with("missing", Value::Null)
        .with("nan", f64::NAN)
        .into();
    insta::assert_snapshot!(
        fmt("%r", &[value]),
        @r#"{"name":"host","ports":[80,443],"ratio":0.5,"missing":null,"nan":null}"#
    );
}

#[test]
fn test_json_escapes() {
    insta::assert_snapshot!(
        fmt("%r", &["quote \" tab \t newline \n".into()]),
        @r#""quote \" tab \t newline \n""#
    );
}

#[test]
fn test_percent_escape() {
    assert_eq!(fmt("[%%]", &[]), "[%]");
    assert_eq!(fmt("%d%%", &[50.into()]), "50%");
}

#[test]
fn test_mixed_template_snapshot() {
    let args: [Value; 5] = [
        "listener".into(),
        8080.into(),
        8080.into(),
        0.375.into(),
        Object::new().with("tls", true).into(),
    ];
    insta::assert_snapshot!(
        fmt("%-10s|%6d|%#x|%5.1f%%|%r", &args),
        @r#"listener  |  8080|0x1f90|  0.4%|{"tls":true}"#
    );
}

#[test_case("%", SyntaxError::Incomplete { offset: 0 }; "lone percent")]
#[test_case("abc %-5", SyntaxError::Incomplete { offset: 4 }; "cut off after width")]
#[test_case("%(x", SyntaxError::Incomplete { offset: 0 }; "unterminated name")]
#[test_case("50%!", SyntaxError::Malformed { offset: 2 }; "stray percent")]
#[test_case("%()d", SyntaxError::EmptyName { offset: 0 }; "empty name")]
#[test_case("%(a).2(b)f", SyntaxError::DuplicateName { offset: 0 }; "named twice")]
#[test_case("%q", SyntaxError::Unsupported { conversion: 'q', offset: 0 }; "unknown conversion")]
fn test_syntax_errors(template: &str, expected: SyntaxError) {
    assert_eq!(format(template, &[]), Err(FormatError::Syntax(expected)));
}

#[test]
fn test_argument_errors() {
    assert_eq!(
        format("%d %d", &[1.into()]),
        Err(FormatError::Argument(ArgumentError::MissingPositional { index: 1 }))
    );
    assert_eq!(
        format("%(x)d", &[]),
        Err(FormatError::Argument(ArgumentError::MissingObject { name: "x".into() }))
    );
    assert_eq!(
        format("%(z)d", &[point()]),
        Err(FormatError::Argument(ArgumentError::MissingProperty { name: "z".into() }))
    );
}

#[test]
fn test_error_messages() {
    let err = format("%d", &[]).unwrap_err();
    insta::assert_snapshot!(err, @"too few parameters for format: no argument at position 0");

    let err = format("%q", &[]).unwrap_err();
    insta::assert_snapshot!(err, @"unsupported formatting directive '%q' at offset 0");
}

#[test]
fn test_extra_arguments_are_ignored() {
    assert_eq!(fmt("%d", &[1.into(), 2.into(), 3.into()]), "1");
}

#[test]
fn test_template_reuse() {
    let template = Template::parse("%s=%d").unwrap();
    let lines: Vec<_> = [("a", 1), ("b", 2)]
        .into_iter()
        .map(|(k, v)| template.render(&[k.into(), v.into()]).unwrap())
        .collect();
    assert_eq!(lines, ["a=1", "b=2"]);
}
