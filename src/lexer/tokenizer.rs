use super::scanner;
use super::{Mode, Token, TokenKind};

/// Accumulate classified characters into tokens.
///
/// Adjacent characters of the same kind merge into one token, except the
/// single-character atoms `(`, `)` and `=`. A digit run and a dot merge
/// into a single float token regardless of which came first; that merge is
/// the only way a float token is produced. Skipped kinds (whitespace,
/// quotation marks, comments) emit nothing but force the next character to
/// start a fresh token.
pub(super) fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut mode = Mode::default();
    let mut split = true;

    for c in source.chars() {
        let (next_mode, kind) = scanner::classify(mode, c);
        mode = next_mode;

        if kind.is_skipped() {
            split = true;
            continue;
        }

        if !split {
            if let Some(last) = tokens.last_mut() {
                if last.kind == kind && !kind.is_atom() {
                    last.text.push(c);
                    continue;
                }
                if (last.kind == TokenKind::Int && kind == TokenKind::Float)
                    || (last.kind == TokenKind::Float && kind == TokenKind::Int)
                {
                    last.kind = TokenKind::Float;
                    last.text.push(c);
                    continue;
                }
            }
        }

        tokens.push(Token {
            kind,
            text: c.to_string(),
        });
        split = false;
    }

    tokens
}
