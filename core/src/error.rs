//! Error types for formatting, scoped execution and output.
//!
//! Formatting failures split into two families, mirroring where they are
//! detected: [`SyntaxError`] for problems with the template itself and
//! [`ArgumentError`] for problems binding arguments to directives. Both are
//! wrapped by [`FormatError`].

use core::fmt;

use thiserror::Error;

/// A malformed or unsupported directive in a format template.
///
/// Every variant carries the byte offset of the offending `%` in the
/// template source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("incomplete formatting directive at end of format (offset {offset})")]
    Incomplete { offset: usize },

    #[error("malformed formatting directive at offset {offset}")]
    Malformed { offset: usize },

    #[error("invalid named formatting directive at offset {offset}, empty name")]
    EmptyName { offset: usize },

    #[error("formatting directive at offset {offset} is named twice")]
    DuplicateName { offset: usize },

    #[error("unsupported formatting directive '%{conversion}' at offset {offset}")]
    Unsupported { conversion: char, offset: usize },

    #[error("field width {width} at offset {offset} exceeds limit {limit}")]
    WidthLimitExceeded {
        offset: usize,
        width: usize,
        limit: usize,
    },

    #[error("precision {precision} at offset {offset} exceeds limit {limit}")]
    PrecisionLimitExceeded {
        offset: usize,
        precision: usize,
        limit: usize,
    },
}

impl SyntaxError {
    /// Byte offset of the directive that failed.
    pub fn offset(&self) -> usize {
        match self {
            SyntaxError::Incomplete { offset }
            | SyntaxError::Malformed { offset }
            | SyntaxError::EmptyName { offset }
            | SyntaxError::DuplicateName { offset }
            | SyntaxError::Unsupported { offset, .. }
            | SyntaxError::WidthLimitExceeded { offset, .. }
            | SyntaxError::PrecisionLimitExceeded { offset, .. } => *offset,
        }
    }
}

/// A directive whose argument could not be found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A positional directive ran past the end of the argument list.
    #[error("too few parameters for format: no argument at position {index}")]
    MissingPositional { index: usize },

    /// A named directive was used but no object argument was supplied.
    #[error("invalid parameters for format, expected object for '%({name})'")]
    MissingObject { name: String },

    #[error("property '{name}' named by formatting directive missing from parameter object")]
    MissingProperty { name: String },
}

/// Any failure of [`format`](crate::format()).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

impl FormatError {
    #[inline]
    pub fn is_syntax(&self) -> bool {
        matches!(self, FormatError::Syntax(_))
    }

    #[inline]
    pub fn is_argument(&self) -> bool {
        matches!(self, FormatError::Argument(_))
    }
}

/// Invalid input to [`try_scoped`](crate::try_scoped), detected before the
/// callback runs or the resource is released.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeTypeError {
    #[error("cannot use null as a scoped resource")]
    NullResource,

    #[error("value is not callable")]
    NotCallable,
}

/// Outcome of a failed scoped call.
///
/// `E` is the callback's error type and `R` the resource's release error
/// type. When both the callback and the release fail, the release error is
/// reported and the callback error is kept in `masked`.
#[derive(Debug)]
pub enum ScopeError<E, R> {
    /// The resource or callback was rejected before anything ran.
    Type(ScopeTypeError),

    /// The callback failed and the resource was released cleanly.
    Callback(E),

    /// Releasing the resource failed.
    Release {
        /// The release failure.
        error: R,
        /// The callback failure it superseded, if any.
        masked: Option<E>,
    },
}

impl<E, R> ScopeError<E, R> {
    #[inline]
    pub fn is_release(&self) -> bool {
        matches!(self, ScopeError::Release { .. })
    }

    /// The callback error hidden behind a release failure.
    #[inline]
    pub fn masked(&self) -> Option<&E> {
        match self {
            ScopeError::Release { masked, .. } => masked.as_ref(),
            _ => None,
        }
    }

    /// Returns the callback error if it is the reported error.
    pub fn into_callback(self) -> Option<E> {
        match self {
            ScopeError::Callback(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the release error if it is the reported error.
    pub fn into_release(self) -> Option<R> {
        match self {
            ScopeError::Release { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl<E, R> From<ScopeTypeError> for ScopeError<E, R> {
    fn from(err: ScopeTypeError) -> Self {
        ScopeError::Type(err)
    }
}

impl<E: fmt::Display, R: fmt::Display> fmt::Display for ScopeError<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::Type(err) => write!(f, "{}", err),
            ScopeError::Callback(err) => write!(f, "{}", err),
            ScopeError::Release { error, .. } => write!(f, "{}", error),
        }
    }
}

impl<E, R> std::error::Error for ScopeError<E, R>
where
    E: std::error::Error + 'static,
    R: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScopeError::Type(err) => err.source(),
            ScopeError::Callback(err) => err.source(),
            ScopeError::Release { error, .. } => error.source(),
        }
    }
}

/// Failure of [`io::write`](crate::io::write) or
/// [`io::writeln`](crate::io::writeln).
#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
