use core::fmt;

use crate::SyntaxError;

/// Directive flags.
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// `-`: pad on the right.
    pub left_justify: bool,
    /// `0`: pad numbers with zeros after the sign.
    pub zero_pad: bool,
    /// `+`: always print a sign on signed conversions.
    pub plus_sign: bool,
    /// ` `: print a space where a `+` would go.
    pub space_sign: bool,
    /// `#`: alternate form (`0x` prefix, kept decimal point).
    pub alternate: bool,
}

impl Flags {
    /// Sets the flag for `c`, returning `false` if `c` is not a flag.
    fn set(&mut self, c: char) -> bool {
        match c {
            '-' => self.left_justify = true,
            '0' => self.zero_pad = true,
            '+' => self.plus_sign = true,
            ' ' => self.space_sign = true,
            '#' => self.alternate = true,
            _ => return false,
        }
        true
    }
}

/// Where a directive takes its value from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Binding {
    /// The next unclaimed positional argument.
    Positional,
    /// A property of the object argument.
    Named(String),
}

/// The conversion letter ending a directive.
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `d`
    Decimal,
    /// `i`
    Integer,
    /// `o`
    Octal,
    /// `x`
    HexLower,
    /// `X`
    HexUpper,
    /// `f`
    Fixed,
    /// `F`
    FixedUpper,
    /// `e`
    Exponent,
    /// `E`
    ExponentUpper,
    /// `g`
    General,
    /// `G`
    GeneralUpper,
    /// `s`
    String,
    /// `r`
    Repr,
}

impl Conversion {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => Conversion::Decimal,
            'i' => Conversion::Integer,
            'o' => Conversion::Octal,
            'x' => Conversion::HexLower,
            'X' => Conversion::HexUpper,
            'f' => Conversion::Fixed,
            'F' => Conversion::FixedUpper,
            'e' => Conversion::Exponent,
            'E' => Conversion::ExponentUpper,
            'g' => Conversion::General,
            'G' => Conversion::GeneralUpper,
            's' => Conversion::String,
            'r' => Conversion::Repr,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            Conversion::Decimal => 'd',
            Conversion::Integer => 'i',
            Conversion::Octal => 'o',
            Conversion::HexLower => 'x',
            Conversion::HexUpper => 'X',
            Conversion::Fixed => 'f',
            Conversion::FixedUpper => 'F',
            Conversion::Exponent => 'e',
            Conversion::ExponentUpper => 'E',
            Conversion::General => 'g',
            Conversion::GeneralUpper => 'G',
            Conversion::String => 's',
            Conversion::Repr => 'r',
        }
    }

    /// Integer conversions: `d i o x X`.
    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Conversion::Decimal
                | Conversion::Integer
                | Conversion::Octal
                | Conversion::HexLower
                | Conversion::HexUpper
        )
    }

    /// Float conversions: `f F e E g G`.
    #[inline]
    pub fn is_float(self) -> bool {
        matches!(
            self,
            Conversion::Fixed
                | Conversion::FixedUpper
                | Conversion::Exponent
                | Conversion::ExponentUpper
                | Conversion::General
                | Conversion::GeneralUpper
        )
    }

    /// Conversions that coerce their argument numeric-first.
    #[inline]
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }
}

/// One parsed `%` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub binding: Binding,
    pub conversion: Conversion,
    /// Byte offset of the `%` in the template.
    pub offset: usize,
}

impl FormatSpec {
    /// Parses the text of a single directive, `%` included.
    ///
    /// The name may appear directly after the `%` (`%(x)5d`) or just before
    /// the conversion (`%5(x)d`), but not in both places.
    pub fn parse(text: &str, offset: usize) -> Result<Self, SyntaxError> {
        let mut rest = text.strip_prefix('%').ok_or(SyntaxError::Malformed { offset })?;

        let mut name = take_name(&mut rest, offset)?;

        let mut flags = Flags::default();
        while let Some(c) = rest.chars().next() {
            if !flags.set(c) {
                break;
            }
            rest = &rest[c.len_utf8()..];
        }

        let width = take_digits(&mut rest, offset)?;

        let precision = match rest.strip_prefix('.') {
            Some(after) => {
                rest = after;
                Some(take_digits(&mut rest, offset)?.unwrap_or(0))
            }
            None => None,
        };

        if let Some(late) = take_name(&mut rest, offset)? {
            if name.is_some() {
                return Err(SyntaxError::DuplicateName { offset });
            }
            name = Some(late);
        }

        let mut chars = rest.chars();
        let conversion = match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Conversion::from_char(c).ok_or(SyntaxError::Unsupported { conversion: c, offset })?
            }
            (None, _) => return Err(SyntaxError::Incomplete { offset }),
            (Some(_), Some(_)) => return Err(SyntaxError::Malformed { offset }),
        };

        Ok(FormatSpec {
            flags,
            width,
            precision,
            binding: name.map_or(Binding::Positional, Binding::Named),
            conversion,
            offset,
        })
    }

    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self.binding, Binding::Named(_))
    }
}

fn take_name(rest: &mut &str, offset: usize) -> Result<Option<String>, SyntaxError> {
    let Some(inner) = rest.strip_prefix('(') else {
        return Ok(None);
    };
    let end = inner.find(')').ok_or(SyntaxError::Incomplete { offset })?;
    if end == 0 {
        return Err(SyntaxError::EmptyName { offset });
    }
    let name = inner[..end].to_owned();
    *rest = &inner[end + 1..];
    Ok(Some(name))
}

fn take_digits(rest: &mut &str, offset: usize) -> Result<Option<usize>, SyntaxError> {
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return Ok(None);
    }
    let value = rest[..end]
        .parse()
        .map_err(|_| SyntaxError::Malformed { offset })?;
    *rest = &rest[end..];
    Ok(Some(value))
}

/// Writes the directive back out in canonical form: name first, then flags
/// in `-0+ #` order, width, precision and conversion.
impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if let Binding::Named(name) = &self.binding {
            write!(f, "({})", name)?;
        }
        let flags = [
            (self.flags.left_justify, '-'),
            (self.flags.zero_pad, '0'),
            (self.flags.plus_sign, '+'),
            (self.flags.space_sign, ' '),
            (self.flags.alternate, '#'),
        ];
        for (set, c) in flags {
            if set {
                write!(f, "{}", c)?;
            }
        }
        if let Some(width) = self.width {
            write!(f, "{}", width)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{}", precision)?;
        }
        write!(f, "{}", self.conversion.as_char())
    }
}
