#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Foundational host built-ins: a printf-style formatter and a scoped
//! resource runner.
//!
//! - [`format`] renders a `%`-directive template against a list of [`Value`]s.
//! - [`scoped`] runs a callback against a [`Release`] resource and releases it
//!   exactly once, whatever the callback does.
//! - [`io::write`] / [`io::writeln`] emit formatted text to a sink.

pub mod config;
mod error;
pub mod format;
pub mod io;
pub mod scope;
pub mod traits;
mod value;

pub use config::FormatConfig;
pub use error::{
    ArgumentError, FormatError, ScopeError, ScopeTypeError, SyntaxError, WriteError,
};
pub use format::{
    Binding, Conversion, Flags, FormatSpec, Segment, Template, format, format_with,
};
pub use scope::{scoped, scoped_with, try_scoped};
pub use traits::{Coercible, Release};
pub use value::{Bytes, Object, Value};
