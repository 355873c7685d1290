pub mod token;

use logos::Logos;
use std::ops::Range;
use thiserror::Error;
use token::Token;

/// Byte range of a token in the source text.
pub type Span = Range<usize>;

/// A character sequence that matches no token.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unexpected character sequence '{fragment}'")]
pub struct LexError {
    pub span: Span,
    pub fragment: String,
}

/// Tokenize a source string keeping byte spans.
///
/// Every unrecognized fragment is reported, not just the first one.
pub fn lex_spanned(source: &str) -> Result<Vec<(Token, Span)>, Vec<LexError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => errors.push(LexError {
                fragment: source.get(span.clone()).unwrap_or_default().to_string(),
                span,
            }),
        }
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests;
