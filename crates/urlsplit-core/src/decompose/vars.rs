//! Ordered, string-valued variable collection.

use std::collections::BTreeMap;

/// A named URL component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    pub name: String,
    pub value: String,
}

/// Variables in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarSet {
    vars: Vec<Var>,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vars: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.push(Var {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Value of the first variable named exactly `name` (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Var> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Name → value view for template contexts. A later duplicate name overwrites an earlier one.
    pub fn to_map(&self) -> BTreeMap<&str, &str> {
        self.vars
            .iter()
            .map(|v| (v.name.as_str(), v.value.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = &'a Var;
    type IntoIter = std::slice::Iter<'a, Var>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
