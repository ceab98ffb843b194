//! Capability traits at the boundary between host values and the built-ins.
//!
//! The built-ins never inspect what a value *is*; they ask what it can do.
//!
//! ```text
//! Coercible (format arguments)
//!     ├── as_number()  preferred by d, i, o, x, X, f, e, g
//!     └── as_text()    preferred by s
//!
//! Release (scoped resources)
//!     └── release()    run exactly once per scope
//! ```
//!
//! # Blanket Implementations
//!
//! - `Release` for `&mut T`, `Box<T>` and `Option<T>`
//! - `Release` for `BufWriter`, `TcpStream` and `Child`

mod coercible;
mod release;

pub use coercible::{Coercible, number_to_text, parse_number};
pub use release::Release;
