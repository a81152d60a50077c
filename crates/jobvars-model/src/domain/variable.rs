use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::wire::UntrustedVariable;
use crate::error::{ModelError, ModelResult};

/// A single job variable: a key, its raw value and three independent flags.
///
/// Values built with [`Variable::new`] come from trusted code and may carry the
/// `internal` flag. Values decoded through serde come from an untrusted source
/// and always have `internal == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UntrustedVariable")]
pub struct Variable {
    /// Name of the variable.
    key: String,
    /// Raw value, possibly containing `$NAME` / `${NAME}` placeholders.
    value: String,
    /// Safe to expose in job logs and other less-trusted contexts.
    public: bool,
    /// Generated by the engine itself.
    internal: bool,
    /// The consumer should materialize the value as a file.
    file: bool,
}

impl Variable {
    /// Create a trusted variable with all flags disabled.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
            public: false,
            internal: false,
            file: false,
        }
    }

    /// Parse a `KEY=VALUE` definition.
    ///
    /// Only the first `=` is a delimiter; everything after it is the value verbatim.
    /// All flags are disabled on the result.
    ///
    /// # Examples
    /// ```
    /// use jobvars_model::Variable;
    ///
    /// let v = Variable::parse("key=value=value2").unwrap();
    /// assert_eq!(v.key(), "key");
    /// assert_eq!(v.value(), "value=value2");
    /// ```
    pub fn parse(text: &str) -> ModelResult<Self> {
        match text.split_once('=') {
            Some((key, value)) => Ok(Self::new(key, value)),
            None => {
                debug!(len = text.len(), "rejected variable without '=' delimiter");
                Err(ModelError::MalformedVariable(text.to_string()))
            }
        }
    }

    /// Mark the variable as public.
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Mark the variable as internal.
    ///
    /// Only reachable from trusted code; the serde decode path never sets it.
    pub fn with_internal(mut self, internal: bool) -> Self {
        self.internal = internal;
        self
    }

    /// Mark the variable as file-backed.
    pub fn with_file(mut self, file: bool) -> Self {
        self.file = file;
        self
    }

    /// Same key and flags, different value.
    pub(crate) fn with_value(&self, value: String) -> Self {
        Self {
            key: self.key.clone(),
            value,
            public: self.public,
            internal: self.internal,
            file: self.file,
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    pub fn is_internal(&self) -> bool {
        self.internal
    }

    pub fn is_file(&self) -> bool {
        self.file
    }

    /// Whether the variable may be surfaced to less-trusted contexts.
    pub fn is_visible(&self) -> bool {
        self.public || self.internal
    }

    /// Render as `key=value`, ignoring all flags.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl FromStr for Variable {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::parse(s)
    }
}

impl From<UntrustedVariable> for Variable {
    fn from(wire: UntrustedVariable) -> Self {
        Self {
            key: wire.key,
            value: wire.value,
            public: wire.public,
            internal: false,
            file: wire.file,
        }
    }
}
