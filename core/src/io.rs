//! Formatted output built-ins.
//!
//! [`write`] and [`writeln`] format a template and send it to any
//! [`std::io::Write`] sink, flushing afterwards. Called with no arguments the
//! template is written as-is, so `write(out, "100%", &[])` is not a syntax
//! error.

use std::io::Write;

use crate::{Value, WriteError, format};

/// Writes `template` formatted with `args`, or verbatim if `args` is empty.
pub fn write<W: Write + ?Sized>(out: &mut W, template: &str, args: &[Value]) -> Result<(), WriteError> {
    if args.is_empty() {
        out.write_all(template.as_bytes())?;
    } else {
        out.write_all(format(template, args)?.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// [`write`] followed by a newline. With no template only the newline is
/// written.
pub fn writeln<W: Write + ?Sized>(
    out: &mut W,
    template: Option<&str>,
    args: &[Value],
) -> Result<(), WriteError> {
    if let Some(template) = template {
        write(out, template, args)?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
