#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Procedural macros for hostkit.
//!
//! - [`hformat!`]: formats with a template that is checked at compile time
//!
//! # Quick Start
//!
//! ```ignore
//! use hostkit::hformat;
//!
//! let line = hformat!("[%6d] %s", 1337, "ok")?;
//! assert_eq!(line, "[  1337] ok");
//! ```
use proc_macro::TokenStream;
use syn::parse_macro_input;

mod hformat;

/// Formats its arguments with a template validated during compilation.
///
/// # Syntax
///
/// ```ignore
/// hformat!("template", arg, arg, ...)
/// ```
///
/// Each argument is converted with `hostkit::Value::from`. The call expands
/// to `hostkit::format(...)` and still returns a `Result`, since named
/// directives and argument coercion are only checked at run time.
///
/// # Compile-time Checks
///
/// - The template must parse: unknown conversions, stray `%` and empty
///   names are reported at the template literal.
/// - A template without named directives must be given at least as many
///   arguments as it has directives.
///
/// # Example
///
/// ```ignore
/// let point = hostkit::Object::new().with("x", 17);
/// assert_eq!(hformat!("%(x)d,%d", point, 5)?, "17,5");
///
/// // error: unsupported formatting directive '%q' at offset 0
/// // hformat!("%q", 1);
/// ```
#[proc_macro]
pub fn hformat(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as hformat::FormatInput);
    hformat::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
