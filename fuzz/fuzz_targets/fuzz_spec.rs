#![no_main]

use arbitrary::Arbitrary;
use hostkit::{Binding, Conversion, Flags, FormatSpec};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    flags: Flags,
    width: Option<u16>,
    precision: Option<u16>,
    name: Option<String>,
    conversion: Conversion,
}

fuzz_target!(|input: Input| {
    let binding = match input.name {
        Some(name) if !name.is_empty() && !name.contains(')') => Binding::Named(name),
        _ => Binding::Positional,
    };
    let spec = FormatSpec {
        flags: input.flags,
        // A zero width prints as the `0` flag.
        width: input.width.filter(|w| *w > 0).map(usize::from),
        precision: input.precision.map(usize::from),
        binding,
        conversion: input.conversion,
        offset: 0,
    };

    let text = spec.to_string();
    let parsed = FormatSpec::parse(&text, 0).expect("canonical directive parses");
    assert_eq!(parsed, spec, "{text}");
});
