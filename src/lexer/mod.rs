// License: MIT

mod scanner;
mod tokenizer;

/// Character/token classification.
///
/// `Whitespace`, `Quotation` and `Comment` never reach the token stream:
/// the tokenizer consumes them and forces the next character to start a new
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Whitespace,
    Str,
    Quotation,
    Section,
    SectionBegin,
    SectionEnd,
    Comment,
    Int,
    Float,
    ListBegin,
    ListEnd,
    Assign,
}

impl TokenKind {
    /// Kinds emitted as single-character tokens, never merged with a
    /// same-kind neighbor.
    pub(crate) fn is_atom(self) -> bool {
        matches!(self, TokenKind::ListBegin | TokenKind::ListEnd | TokenKind::Assign)
    }

    /// Kinds consumed without producing a token.
    pub(crate) fn is_skipped(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Quotation | TokenKind::Comment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[cfg(test)]
    pub(crate) fn new(kind: TokenKind, text: &str) -> Self {
        Token { kind, text: text.into() }
    }
}

/// Scanner mode carried between characters: whether the scanner currently
/// sits inside a quoted string, a bracketed section name, or a comment.
///
/// The mode is threaded explicitly through the classifier rather than held
/// in shared state, so independent `tokenize` calls never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Str,
    Section,
    Comment,
}

/// Tokenize the full document text into an ordered token sequence.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenizer::tokenize(source)
}

#[cfg(test)]
mod tests;
