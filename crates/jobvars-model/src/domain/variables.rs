use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Variable;

/// Ordered list of job variables.
///
/// Insertion order is preserved and duplicate keys are allowed.
/// Serialized as a transparent array of [`Variable`] objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(Vec<Variable>);

impl Variables {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.0.iter()
    }

    /// Append a variable. Existing entries with the same key are kept.
    pub fn push(&mut self, variable: Variable) {
        self.0.push(variable);
    }

    /// Get the value of the first variable with the given key.
    ///
    /// Returns an empty string when no variable matches.
    /// Note that expansion resolves duplicates the other way round (last entry wins).
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|v| v.key() == key)
            .map(|v| v.value())
            .unwrap_or("")
    }

    /// Variables that are public or internal, in their original order.
    pub fn visible(&self) -> Variables {
        self.0.iter().filter(|v| v.is_visible()).cloned().collect()
    }

    /// Render every variable as `key=value`, one string per entry.
    pub fn render_all(&self) -> Vec<String> {
        self.0.iter().map(Variable::render).collect()
    }

    /// `(key, value)` pairs in order, ready for `Command::envs`.
    pub fn env_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|v| (v.key(), v.value()))
    }

    /// Map each key to the value of its last occurrence.
    pub(crate) fn resolution_table(&self) -> HashMap<String, String> {
        // later inserts overwrite earlier ones
        self.0
            .iter()
            .map(|v| (v.key().to_string(), v.value().to_string()))
            .collect()
    }
}

impl From<Vec<Variable>> for Variables {
    fn from(v: Vec<Variable>) -> Self {
        Self(v)
    }
}

impl FromIterator<Variable> for Variables {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Variable> for Variables {
    fn extend<I: IntoIterator<Item = Variable>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Variables {
    type Item = Variable;
    type IntoIter = std::vec::IntoIter<Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
