//! printf-style template formatting.
//!
//! A template is literal text interleaved with directives:
//!
//! ```text
//! directive := '%' ('(' name ')')? flags? width? ('.' precision?)? ('(' name ')')? conv
//!            | '%%'
//! flags     := ('-' | '0' | '+' | ' ' | '#')+
//! conv      := d | i | o | x | X | f | F | e | E | g | G | s | r
//! ```
//!
//! Templates are lexed with `logos` and each directive is parsed into a
//! [`FormatSpec`]. Parsing is separate from rendering, so a [`Template`] can
//! be validated once and rendered against many argument lists.
//!
//! # Example
//!
//! ```ignore
//! use hostkit_core::{Object, format};
//!
//! let point = Object::new().with("x", 17).with("y", 1337);
//! assert_eq!(format("[%06d]", &[1337.into()])?, "[001337]");
//! assert_eq!(format("%(x)d,%d", &[point.clone().into(), 5.into()])?, "17,5");
//! assert_eq!(format("%r", &[point.into()])?, r#"{"x":17,"y":1337}"#);
//! ```

mod args;
mod lexer;
mod render;
mod spec;

pub use spec::{Binding, Conversion, Flags, FormatSpec};

use crate::{FormatConfig, FormatError, Value};
use args::Arguments;

/// Renders `template` against `args` with the default configuration.
pub fn format(template: &str, args: &[Value]) -> Result<String, FormatError> {
    format_with(template, args, &FormatConfig::DEFAULT)
}

/// Renders `template` against `args` with an explicit configuration.
pub fn format_with(
    template: &str,
    args: &[Value],
    config: &FormatConfig,
) -> Result<String, FormatError> {
    Template::parse(template)?.render_with(args, config)
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through verbatim.
    Literal(&'a str),
    /// The `%%` escape, rendered as a single `%`.
    Percent,
    Directive(FormatSpec),
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Result<Self, FormatError> {
        let segments = lexer::segments(source)?;
        let template = Self { source, segments };
        tracing::trace!(
            directives = template.directives().count(),
            named = template.has_named(),
            "parsed format template"
        );
        Ok(template)
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn directives(&self) -> impl Iterator<Item = &FormatSpec> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Directive(spec) => Some(spec),
            _ => None,
        })
    }

    /// Number of arguments the positional directives consume.
    pub fn positional_count(&self) -> usize {
        self.directives().filter(|spec| !spec.is_named()).count()
    }

    /// Whether any directive is bound by name.
    pub fn has_named(&self) -> bool {
        self.directives().any(FormatSpec::is_named)
    }

    #[inline]
    pub fn render(&self, args: &[Value]) -> Result<String, FormatError> {
        self.render_with(args, &FormatConfig::DEFAULT)
    }

    pub fn render_with(&self, args: &[Value], config: &FormatConfig) -> Result<String, FormatError> {
        let mut arguments = Arguments::new(args, self.has_named());
        let mut out = String::with_capacity(self.source.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Percent => out.push('%'),
                Segment::Directive(spec) => {
                    config.check(spec)?;
                    let value = match &spec.binding {
                        Binding::Positional => arguments.next_positional()?,
                        Binding::Named(name) => arguments.named(name)?,
                    };
                    out.push_str(&render::directive(spec, value, config));
                }
            }
        }

        if arguments.remaining() > 0 {
            tracing::debug!(
                unused = arguments.remaining(),
                "format arguments left unconsumed"
            );
        }
        Ok(out)
    }
}
