use crate::ast::{List, Value};
use crate::lexer::{Token, TokenKind};
use crate::utils::{fnv1a_64, FALSE_HASH, TRUE_HASH};

/// Resolve the token at `*cursor` into a value.
///
/// Scalars leave the cursor where it is; a list advances it past the
/// matching `ListEnd` (or to the end of the stream when the list is never
/// closed). Anything that is not a value resolves to the default `Int(0)`
/// with no diagnostic.
pub(super) fn resolve(tokens: &[Token], cursor: &mut usize) -> Value {
    let Some(token) = tokens.get(*cursor) else {
        return Value::default();
    };

    match token.kind {
        TokenKind::Str => Value::Str(token.text.clone()),
        TokenKind::Int => Value::Int(parse_int(&token.text)),
        TokenKind::Float => Value::Float(parse_float(&token.text)),
        TokenKind::Identifier => {
            let hash = fnv1a_64(&token.text);
            if hash == *TRUE_HASH && token.text == "true" {
                Value::Bool(true)
            } else if hash == *FALSE_HASH && token.text == "false" {
                Value::Bool(false)
            } else {
                Value::default()
            }
        }
        TokenKind::ListBegin => {
            let mut list = List::new();
            while *cursor + 1 < tokens.len() {
                *cursor += 1;
                if tokens[*cursor].kind == TokenKind::ListEnd {
                    break;
                }
                let element = resolve(tokens, cursor);
                let index = list.len();
                list.add(element, index);
            }
            Value::List(list)
        }
        _ => Value::default(),
    }
}

/// Decimal parse in the spirit of `atoi`: the longest leading `-?digits`
/// prefix, zero when there is none or it overflows.
fn parse_int(text: &str) -> i32 {
    let end = text
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && c == '-'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    text[..end].parse().unwrap_or(0)
}

/// Decimal parse in the spirit of `atof`, stopping at the second dot:
/// `"1.2.3"` resolves to `1.2`.
fn parse_float(text: &str) -> f64 {
    let mut seen_dot = false;
    let mut end = 0;
    for (i, c) in text.char_indices() {
        match c {
            '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    text[..end].parse().unwrap_or(0.0)
}
