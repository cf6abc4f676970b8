use super::{Mode, TokenKind};

/// Classify one character under the current scanner mode.
///
/// Pure function of `(mode, char)`: the returned mode must be fed into the
/// next call. Inside a string every character is string text until the
/// closing quote; inside brackets everything (spaces included) belongs to
/// the section name until `]`; a comment swallows the rest of the line.
pub(super) fn classify(mode: Mode, c: char) -> (Mode, TokenKind) {
    match mode {
        Mode::Str => {
            if c == '"' {
                (Mode::Normal, TokenKind::Quotation)
            } else {
                (Mode::Str, TokenKind::Str)
            }
        }
        Mode::Section => {
            if c == ']' {
                (Mode::Normal, TokenKind::SectionEnd)
            } else {
                (Mode::Section, TokenKind::Section)
            }
        }
        Mode::Comment => {
            if c == '\n' {
                (Mode::Normal, TokenKind::Whitespace)
            } else {
                (Mode::Comment, TokenKind::Comment)
            }
        }
        Mode::Normal => {
            if c <= ' ' {
                return (Mode::Normal, TokenKind::Whitespace);
            }
            if c.is_ascii_digit() || c == '-' {
                return (Mode::Normal, TokenKind::Int);
            }
            match c {
                '"' => (Mode::Str, TokenKind::Quotation),
                '[' => (Mode::Section, TokenKind::SectionBegin),
                '#' => (Mode::Comment, TokenKind::Comment),
                '.' => (Mode::Normal, TokenKind::Float),
                '(' => (Mode::Normal, TokenKind::ListBegin),
                ')' => (Mode::Normal, TokenKind::ListEnd),
                '=' => (Mode::Normal, TokenKind::Assign),
                // everything not recognized is an identifier, stray ']' included
                _ => (Mode::Normal, TokenKind::Identifier),
            }
        }
    }
}
