use logos::Logos;

use super::{FormatSpec, Segment};
use crate::SyntaxError;

/// Template tokens. Anything starting with `%` that is neither `%%` nor a
/// well-formed directive is a lexing error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    #[token("%%")]
    Percent,

    #[regex(r"%(\([^)]*\))?[-+ #0]*[0-9]*(\.[0-9]*)?(\([^)]*\))?[A-Za-z]")]
    Directive,

    #[regex(r"[^%]+")]
    Literal,
}

/// Splits `source` into segments, parsing each directive.
pub(crate) fn segments(source: &str) -> Result<Vec<Segment<'_>>, SyntaxError> {
    let mut segments = Vec::new();
    for (token, span) in Token::lexer(source).spanned() {
        let text = &source[span.clone()];
        match token {
            Ok(Token::Literal) => segments.push(Segment::Literal(text)),
            Ok(Token::Percent) => segments.push(Segment::Percent),
            Ok(Token::Directive) => {
                segments.push(Segment::Directive(FormatSpec::parse(text, span.start)?))
            }
            Err(()) => return Err(classify(source, span.start)),
        }
    }
    Ok(segments)
}

/// Decides whether a directive that failed to lex at `offset` was cut off by
/// the end of the template or is malformed.
fn classify(source: &str, offset: usize) -> SyntaxError {
    const PREFIX: &[char] = &['-', '+', ' ', '#', '.', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

    let mut rest = source.get(offset + 1..).unwrap_or_default();
    for _ in 0..2 {
        rest = rest.trim_start_matches(PREFIX);
        if let Some(group) = rest.strip_prefix('(') {
            match group.find(')') {
                Some(end) => rest = &group[end + 1..],
                None => return SyntaxError::Incomplete { offset },
            }
        }
    }
    rest = rest.trim_start_matches(PREFIX);

    if rest.is_empty() {
        SyntaxError::Incomplete { offset }
    } else {
        SyntaxError::Malformed { offset }
    }
}
