//! Formatter configuration for defaults and resource limits.
//!
//! [`FormatConfig`] controls the precision used when a float directive has
//! none, and caps the width and precision a template may request so that a
//! directive like `%999999999d` cannot force a huge allocation.
//!
//! # Example
//!
//! ```ignore
//! use hostkit_core::{FormatConfig, format_with};
//!
//! let config = FormatConfig::new().with_default_precision(2);
//! assert_eq!(format_with("%f", &[1.5.into()], &config)?, "1.50");
//! ```

use serde::{Deserialize, Serialize};

use crate::SyntaxError;
use crate::format::FormatSpec;

/// Configuration for template rendering.
///
/// # Default Values
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `default_precision` | 6 | C `printf` default for `f`, `e` and `g` |
/// | `max_width` | 65536 | Bounds padding allocation |
/// | `max_precision` | 1024 | Bounds digit expansion of floats |
///
/// Hosts may load this from their own configuration files; every field is
/// optional and falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Digits after the point (`f`, `e`) or significant digits (`g`) when a
    /// directive gives no precision.
    pub default_precision: usize,

    /// Largest field width a directive may request.
    pub max_width: usize,

    /// Largest precision a directive may request.
    pub max_precision: usize,
}

impl Default for FormatConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FormatConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        default_precision: 6,
        max_width: 1 << 16,
        max_precision: 1 << 10,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_default_precision(mut self, precision: usize) -> Self {
        self.default_precision = precision;
        self
    }

    #[inline]
    pub const fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    #[inline]
    pub const fn with_max_precision(mut self, precision: usize) -> Self {
        self.max_precision = precision;
        self
    }

    /// Rejects a directive whose width or precision exceeds the limits.
    pub fn check(&self, spec: &FormatSpec) -> Result<(), SyntaxError> {
        match (spec.width, spec.precision) {
            (Some(width), _) if width > self.max_width => Err(SyntaxError::WidthLimitExceeded {
                offset: spec.offset,
                width,
                limit: self.max_width,
            }),
            (_, Some(precision)) if precision > self.max_precision => {
                Err(SyntaxError::PrecisionLimitExceeded {
                    offset: spec.offset,
                    precision,
                    limit: self.max_precision,
                })
            }
            _ => Ok(()),
        }
    }
}
