#![no_main]

use arbitrary::Arbitrary;
use hostkit::{FormatConfig, Template, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Arg {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<Arg> for Value {
    fn from(arg: Arg) -> Self {
        match arg {
            Arg::Null => Value::Null,
            Arg::Bool(flag) => flag.into(),
            Arg::Number(number) => number.into(),
            Arg::Text(text) => text.into(),
            Arg::Bytes(bytes) => hostkit::Bytes::from(bytes).into(),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    template: String,
    args: Vec<Arg>,
}

// Keep renders small; the limits are checked before anything is padded.
const CONFIG: FormatConfig = FormatConfig::DEFAULT
    .with_max_width(256)
    .with_max_precision(64);

fuzz_target!(|input: Input| {
    let Ok(template) = Template::parse(&input.template) else {
        return;
    };
    let args: Vec<Value> = input.args.into_iter().map(Value::from).collect();
    if let Ok(out) = template.render_with(&args, &CONFIG) {
        // Every literal byte of the template survives rendering.
        let literal: usize = template
            .segments()
            .iter()
            .map(|segment| match segment {
                hostkit::Segment::Literal(text) => text.len(),
                _ => 0,
            })
            .sum();
        assert!(out.len() >= literal);
    }
});
