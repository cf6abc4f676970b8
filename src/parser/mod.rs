// License: MIT

use crate::ast::Document;
use crate::lexer::{self, TokenKind};

mod value;

/// Parse document text into a [`Document`].
///
/// Parsing is best-effort and never fails: malformed, truncated or
/// out-of-place input yields a partial or default-valued tree instead of an
/// error. An assignment outside any section opens an anonymous section;
/// empty brackets `[]` do the same explicitly.
pub fn parse(source: &str) -> Document {
    let tokens = lexer::tokenize(source);
    let mut doc = Document::new();
    let mut current: Option<usize> = None;

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::Section => {
                let index = doc.sections.len();
                doc.add_section(Some(&tokens[i].text), index);
                current = Some(index);
            }
            TokenKind::SectionEnd => {
                // empty brackets open an anonymous section
                if i > 0 && tokens[i - 1].kind == TokenKind::SectionBegin {
                    let index = doc.sections.len();
                    doc.add_section(None, index);
                    current = Some(index);
                }
            }
            TokenKind::Assign => {
                let section = match current {
                    Some(index) => index,
                    None => {
                        let index = doc.sections.len();
                        doc.add_section(None, index);
                        current = Some(index);
                        index
                    }
                };

                // The variable is named by the token right before `=`, but
                // only if that token is an identifier.
                let name = match i.checked_sub(1).map(|p| &tokens[p]) {
                    Some(prev) if prev.kind == TokenKind::Identifier => Some(prev.text.as_str()),
                    _ => None,
                };

                let mut cursor = i + 1;
                let resolved = value::resolve(&tokens, &mut cursor);

                let section = &mut doc.sections[section];
                let count = section.variables.len();
                section.add_variable(name, resolved, count);

                // Continue past whatever the value resolution consumed.
                i = cursor;
            }
            _ => {}
        }
        i += 1;
    }

    doc
}
