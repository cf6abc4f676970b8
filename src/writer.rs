// License: MIT

use std::fmt::{self, Write};

use crate::ast::{Document, Value};

/// Serialize a document back to text.
///
/// Sections are walked in stored order, one `[name]` header each, one
/// `name = <value>` line per variable, and a blank line after every section.
/// Parsing the result yields a structurally equal tree, except that float
/// text is renormalized to six fractional digits.
pub fn write_document(doc: &Document) -> String {
    doc.to_string()
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for variable in &section.variables {
                writeln!(f, "{} = {}", variable.name, variable.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:.6}", x),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(list) => {
                f.write_char('(')?;
                for (i, value) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_char(')')
            }
        }
    }
}
