#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Host built-ins for embedding runtimes.
//!
//! Re-exports [`hostkit_core`] together with the compile-time checked
//! [`hformat!`] macro.
//!
//! ```ignore
//! use hostkit::{Object, format, hformat};
//!
//! assert_eq!(format("[%-6s]", &["foo".into()])?, "[foo   ]");
//! assert_eq!(hformat!("%(x)d,%d", Object::new().with("x", 1337), 17)?, "1337,17");
//! ```
pub use hostkit_core::*;
pub use hostkit_macros::*;
