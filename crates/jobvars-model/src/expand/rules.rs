use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ModelResult;
use crate::expand::Expander;

/// Single-character names recognised after `$` by default.
pub const DEFAULT_SPECIAL: &str = "*#@!?-";

/// What happens to a `$` that is not followed by anything it can reference.
///
/// - `Drop`: the `$` disappears, the following character is kept (`$/dsa` → `/dsa`).
/// - `Keep`: the `$` stays as literal text (`$/dsa` → `$/dsa`).
///
/// A `$` at the very end of the input is always kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DanglingDollar {
    #[default]
    Drop,
    Keep,
}

impl FromStr for DanglingDollar {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "keep" => Ok(Self::Keep),
            other => Err(format!("unknown dangling-dollar mode: {other} (expected: drop|keep)")),
        }
    }
}

impl fmt::Display for DanglingDollar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DanglingDollar::Drop => "drop",
            DanglingDollar::Keep => "keep",
        };
        f.write_str(s)
    }
}

impl Serialize for DanglingDollar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DanglingDollar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Tunable parts of the placeholder grammar.
///
/// The grammar compiled from these rules is, in regex form:
///
/// ```text
/// \$(?: \{ (?P<braced>[^}]*) \}      ${BODY}, BODY up to the first '}'
///     | (?P<open>\{)                 '${' with no closing brace
///     | (?P<special>[$ + special])   '$$' escape or a special single-char name
///     | (?P<name>[A-Za-z0-9_]*) )    $NAME, possibly empty
/// ```
///
/// `$$` is always the escape for a literal `$`. Special names other than `$`
/// resolve to an empty string. An empty `name` match is a dangling `$`,
/// handled according to [`DanglingDollar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpansionRules {
    /// Characters that form a one-character name directly after `$`.
    ///
    /// Letters, digits, `_`, `{` and `$` are ignored here: they already have a
    /// fixed meaning in the grammar.
    pub special: String,
    /// Treatment of a `$` followed by a character that cannot start a name.
    pub dangling_dollar: DanglingDollar,
}

impl Default for ExpansionRules {
    fn default() -> Self {
        Self {
            special: DEFAULT_SPECIAL.to_string(),
            dangling_dollar: DanglingDollar::default(),
        }
    }
}

impl ExpansionRules {
    /// Special characters that actually take part in matching.
    pub fn special_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.special
            .chars()
            .filter(|c| !(c.is_ascii_alphanumeric() || matches!(*c, '_' | '{' | '$')))
    }

    /// Regex source for these rules.
    pub fn pattern(&self) -> String {
        let special: String = self
            .special_chars()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();

        let mut pattern = String::from(r"\$(?:\{(?P<braced>[^}]*)\}|(?P<open>\{)|(?P<special>[\$");
        pattern.push_str(&special);
        pattern.push_str(r"])|(?P<name>[A-Za-z0-9_]*))");
        pattern
    }

    /// Compile into an [`Expander`].
    pub fn compile(&self) -> ModelResult<Expander> {
        Expander::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let rules = ExpansionRules::default();
        assert_eq!(rules.special, "*#@!?-");
        assert_eq!(rules.dangling_dollar, DanglingDollar::Drop);
    }

    #[test]
    fn special_chars_skip_reserved_characters() {
        let rules = ExpansionRules {
            special: "a1_{$@/".into(),
            ..Default::default()
        };
        let chars: Vec<char> = rules.special_chars().collect();
        assert_eq!(chars, ['@', '/']);
    }

    #[test]
    fn pattern_escapes_special_characters() {
        let pattern = ExpansionRules::default().pattern();
        assert!(pattern.contains(r"\*"));
        assert!(pattern.contains(r"\-"));
        assert!(regex::Regex::new(&pattern).is_ok());
    }

    #[test]
    fn empty_special_set_still_compiles() {
        let rules = ExpansionRules {
            special: String::new(),
            ..Default::default()
        };
        assert!(regex::Regex::new(&rules.pattern()).is_ok());
    }

    #[test]
    fn dangling_dollar_parses_case_insensitive() {
        assert_eq!("drop".parse::<DanglingDollar>().unwrap(), DanglingDollar::Drop);
        assert_eq!(" KEEP ".parse::<DanglingDollar>().unwrap(), DanglingDollar::Keep);
        assert!("strip".parse::<DanglingDollar>().is_err());
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let rules: ExpansionRules = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, ExpansionRules::default());

        let rules: ExpansionRules = serde_json::from_str(r#"{"danglingDollar": "keep"}"#).unwrap();
        assert_eq!(rules.dangling_dollar, DanglingDollar::Keep);
        assert_eq!(rules.special, DEFAULT_SPECIAL);
    }

    #[test]
    fn serde_rejects_unknown_mode() {
        let res = serde_json::from_str::<ExpansionRules>(r#"{"danglingDollar": "eat"}"#);
        assert!(res.is_err());
    }
}
