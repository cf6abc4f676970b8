// License: MIT

use serde::{Deserialize, Serialize};

use crate::utils::fnv1a_64;

/// A single typed value: integer, float, string, boolean, or nested list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i32),
    Float(f64),
    Str(String),
    Bool(bool),
    List(List),
}

impl Default for Value {
    /// The zero value produced for unresolvable input.
    fn default() -> Self {
        Value::Int(0)
    }
}

impl Value {
    pub fn as_int(&self) -> Option<i32> {
        if let Value::Int(n) = self { Some(*n) } else { None }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(x) = self { Some(*x) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(s) = self { Some(s) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_list(&self) -> Option<&List> {
        if let Value::List(list) = self { Some(list) } else { None }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        if let Value::List(list) = self { Some(list) } else { None }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
        }
    }
}

/// An ordered, nestable sequence of values.
///
/// Lists are built from a linear token stream, so cycles are impossible;
/// dropping a list releases every nested payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct List {
    pub values: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Insert `value` at `index`, clamping the index into `[0, len]`.
    ///
    /// Returns a reference to the inserted slot, valid until the next
    /// mutating call on this list.
    pub fn add(&mut self, value: Value, index: usize) -> &mut Value {
        let index = index.min(self.values.len());
        self.values.insert(index, value);
        &mut self.values[index]
    }

    /// Remove the value at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.values.len() {
            self.values.remove(index);
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A named, single-valued entry within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

/// A named grouping of variables, analogous to an INI section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub variables: Vec<Variable>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            variables: Vec::new(),
        }
    }

    /// Insert a variable at `index` (clamped into `[0, len]`).
    ///
    /// A `None` name auto-names the variable `var<N>` where N is the 1-based
    /// variable count after insertion.
    pub fn add_variable(&mut self, name: Option<&str>, value: Value, index: usize) -> &mut Variable {
        let index = index.min(self.variables.len());
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("var{}", self.variables.len() + 1),
        };
        self.variables.insert(index, Variable { name, value });
        &mut self.variables[index]
    }

    /// Find a variable by name. First match in stored order wins.
    ///
    /// Candidates are compared by FNV-1a hash, with a full string comparison
    /// confirming the match.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        let hash = fnv1a_64(name);
        self.variables
            .iter()
            .find(|v| fnv1a_64(&v.name) == hash && v.name == name)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        let hash = fnv1a_64(name);
        self.variables
            .iter_mut()
            .find(|v| fnv1a_64(&v.name) == hash && v.name == name)
    }

    /// Index of the first variable with the given name, if any.
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        let hash = fnv1a_64(name);
        self.variables
            .iter()
            .position(|v| fnv1a_64(&v.name) == hash && v.name == name)
    }

    /// Remove the variable at `index`, releasing its value. Out of range is
    /// a no-op.
    pub fn remove_variable(&mut self, index: usize) {
        if index < self.variables.len() {
            self.variables.remove(index);
        }
    }
}

/// The full in-memory tree of sections parsed from, or destined for, one
/// configuration text.
///
/// Sections keep insertion order and names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse document text. Never fails; see [`crate::parser::parse`].
    pub fn parse(source: &str) -> Self {
        crate::parser::parse(source)
    }

    /// Insert a section at `index` (clamped into `[0, len]`).
    ///
    /// A `None` name auto-names the section `section<N>` where N is the
    /// 1-based section count after insertion.
    pub fn add_section(&mut self, name: Option<&str>, index: usize) -> &mut Section {
        let index = index.min(self.sections.len());
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("section{}", self.sections.len() + 1),
        };
        self.sections.insert(index, Section::new(name));
        &mut self.sections[index]
    }

    /// Find a section by name. First match in stored order wins.
    pub fn section(&self, name: &str) -> Option<&Section> {
        let hash = fnv1a_64(name);
        self.sections
            .iter()
            .find(|s| fnv1a_64(&s.name) == hash && s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        let hash = fnv1a_64(name);
        self.sections
            .iter_mut()
            .find(|s| fnv1a_64(&s.name) == hash && s.name == name)
    }

    /// Index of the first section with the given name, if any.
    pub fn section_index(&self, name: &str) -> Option<usize> {
        let hash = fnv1a_64(name);
        self.sections
            .iter()
            .position(|s| fnv1a_64(&s.name) == hash && s.name == name)
    }

    /// Remove the section at `index` and everything it owns. Out of range is
    /// a no-op.
    pub fn remove_section(&mut self, index: usize) {
        if index < self.sections.len() {
            self.sections.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_section_clamps_index() {
        let mut doc = Document::new();
        doc.add_section(Some("a"), 99);
        doc.add_section(Some("b"), 99);
        assert_eq!(doc.sections[0].name, "a");
        assert_eq!(doc.sections[1].name, "b");

        // Past-the-end behaves exactly like append.
        let mut appended = Document::new();
        appended.add_section(Some("a"), 0);
        appended.add_section(Some("b"), 1);
        assert_eq!(doc, appended);
    }

    #[test]
    fn test_add_section_at_front_shifts() {
        let mut doc = Document::new();
        doc.add_section(Some("last"), 0);
        doc.add_section(Some("first"), 0);
        let names: Vec<_> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "last"]);
    }

    #[test]
    fn test_anonymous_sections_are_numbered() {
        let mut doc = Document::new();
        for _ in 0..3 {
            let index = doc.sections.len();
            doc.add_section(None, index);
        }
        let names: Vec<_> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["section1", "section2", "section3"]);
    }

    #[test]
    fn test_anonymous_variables_are_numbered() {
        let mut section = Section::new("s");
        section.add_variable(None, Value::Int(1), 0);
        section.add_variable(None, Value::Int(2), 1);
        assert_eq!(section.variables[0].name, "var1");
        assert_eq!(section.variables[1].name, "var2");
    }

    #[test]
    fn test_lookup_after_add() {
        let mut section = Section::new("s");
        section.add_variable(Some("x"), Value::Int(5), 0);
        section.add_variable(Some("y"), Value::Str("hi".into()), 1);

        assert_eq!(section.variable("x").map(|v| &v.value), Some(&Value::Int(5)));
        assert_eq!(section.variable_index("y"), Some(1));
        assert!(section.variable("z").is_none());
        assert_eq!(section.variable_index("z"), None);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let mut doc = Document::new();
        doc.add_section(Some("dup"), 0)
            .add_variable(Some("x"), Value::Int(1), 0);
        doc.add_section(Some("dup"), 1)
            .add_variable(Some("x"), Value::Int(2), 0);

        assert_eq!(doc.section_index("dup"), Some(0));
        let first = doc.section("dup").unwrap();
        assert_eq!(first.variable("x").unwrap().value, Value::Int(1));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut doc = Document::new();
        doc.add_section(Some("only"), 0);
        doc.remove_section(5);
        assert_eq!(doc.sections.len(), 1);

        let mut list = List::new();
        list.add(Value::Int(1), 0);
        list.remove(1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut section = Section::new("s");
        for (i, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
            section.add_variable(Some(name), Value::Int(i as i32), i);
        }
        section.remove_variable(1);
        let names: Vec<_> = section.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);

        section.add_variable(Some("b"), Value::Int(1), 1);
        let names: Vec<_> = section.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_list_insert_clamps_and_shifts() {
        let mut list = List::new();
        list.add(Value::Int(1), 100);
        list.add(Value::Int(3), 100);
        list.add(Value::Int(2), 1);
        let values: Vec<_> = list.iter().cloned().collect();
        assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_nested_list_ownership() {
        let mut inner = List::new();
        inner.add(Value::Str("deep".into()), 0);
        let mut outer = List::new();
        outer.add(Value::List(inner), 0);
        outer.add(Value::Int(7), 1);

        let nested = outer.get(0).and_then(|v| v.as_list()).unwrap();
        assert_eq!(nested.get(0).and_then(|v| v.as_str()), Some("deep"));

        // Removing the nested list drops every payload it owns.
        outer.remove(0);
        assert_eq!(outer.get(0).and_then(|v| v.as_int()), Some(7));
    }

    #[test]
    fn test_default_value_is_zero_int() {
        assert_eq!(Value::default(), Value::Int(0));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Int(0).type_name(), "int");
        assert_eq!(Value::List(List::new()).type_name(), "list");
    }
}
