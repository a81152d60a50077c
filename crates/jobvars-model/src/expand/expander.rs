use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{ModelError, ModelResult};
use crate::expand::{DanglingDollar, ExpansionRules};

/// Expander built from the default rules, compiled once per process.
static SHARED: Lazy<Expander> = Lazy::new(|| {
    Expander::new(&ExpansionRules::default()).expect("default expansion rules always compile")
});

/// One matched placeholder, classified.
enum Token<'t> {
    /// `$$` or `${$}`.
    Escape,
    /// A special single-character name such as `$@`, or the empty `${}`.
    Special,
    /// `$NAME` or `${NAME}`.
    Name(&'t str),
    /// A `$` that references nothing.
    Dangling { at_end: bool },
    /// `${` without a closing brace.
    Unclosed,
}

/// Compiled placeholder matcher.
///
/// Substitution is single pass: replacement text is never scanned again,
/// so self-referencing or cyclic values cannot loop.
#[derive(Debug, Clone)]
pub struct Expander {
    pattern: Regex,
    special: Vec<char>,
    dangling: DanglingDollar,
}

impl Expander {
    /// Compile an expander for the given rules.
    ///
    /// Fails when the pattern built from `rules` is rejected by the regex
    /// engine, e.g. a special set large enough to exceed its size limit.
    pub fn new(rules: &ExpansionRules) -> ModelResult<Self> {
        let pattern =
            Regex::new(&rules.pattern()).map_err(|e| ModelError::InvalidRules(e.to_string()))?;

        Ok(Self {
            pattern,
            special: rules.special_chars().collect(),
            dangling: rules.dangling_dollar,
        })
    }

    /// Expander for the default rules.
    pub fn shared() -> &'static Expander {
        &SHARED
    }

    /// Replace every placeholder in `text` with its value from `table`.
    ///
    /// Unknown names resolve to an empty string.
    ///
    /// # Examples
    /// ```
    /// use std::collections::HashMap;
    /// use jobvars_model::Expander;
    ///
    /// let table = HashMap::from([("NAME".to_string(), "world".to_string())]);
    /// let out = Expander::shared().expand_str("hello $NAME, ${MISSING}$$", &table);
    /// assert_eq!(out, "hello world, $");
    /// ```
    pub fn expand_str(&self, text: &str, table: &HashMap<String, String>) -> String {
        self.expand_lookup(text, |name| table.get(name).map(String::as_str))
    }

    /// Replace every placeholder in `text` with the value returned by `lookup`.
    ///
    /// `lookup` is called once per referenced name; `None` resolves to an
    /// empty string. Escapes and special names never reach it.
    ///
    /// # Examples
    /// ```
    /// use jobvars_model::Expander;
    ///
    /// let out = Expander::shared().expand_lookup("$A-${B}", |name| match name {
    ///     "A" => Some("a"),
    ///     _ => None,
    /// });
    /// assert_eq!(out, "a-");
    /// ```
    pub fn expand_lookup<'v, F>(&self, text: &str, lookup: F) -> String
    where
        F: FnMut(&str) -> Option<&'v str>,
    {
        self.substitute(text, lookup).0
    }

    /// Same as [`Expander::expand_lookup`], also counting names `lookup` did not know.
    pub(crate) fn substitute<'v, F>(&self, text: &str, mut lookup: F) -> (String, usize)
    where
        F: FnMut(&str) -> Option<&'v str>,
    {
        let mut unresolved = 0;

        let out = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            match self.classify(caps, text.len()) {
                Token::Escape => "$".to_string(),
                Token::Special => String::new(),
                Token::Name(name) => match lookup(name) {
                    Some(value) => value.to_string(),
                    None => {
                        unresolved += 1;
                        String::new()
                    }
                },
                Token::Dangling { at_end: true } => "$".to_string(),
                Token::Dangling { at_end: false } => match self.dangling {
                    DanglingDollar::Drop => String::new(),
                    DanglingDollar::Keep => "$".to_string(),
                },
                Token::Unclosed => match self.dangling {
                    DanglingDollar::Drop => String::new(),
                    DanglingDollar::Keep => "${".to_string(),
                },
            }
        });

        (out.into_owned(), unresolved)
    }

    fn classify<'t>(&self, caps: &Captures<'t>, len: usize) -> Token<'t> {
        if let Some(body) = caps.name("braced") {
            if body.as_str().is_empty() {
                // `${}` names nothing, not the empty key
                return Token::Special;
            }
            return self.classify_name(body.as_str());
        }
        if caps.name("open").is_some() {
            return Token::Unclosed;
        }
        if let Some(special) = caps.name("special") {
            return self.classify_name(special.as_str());
        }
        match caps.name("name") {
            Some(name) if !name.as_str().is_empty() => Token::Name(name.as_str()),
            // only the bare `$` matched
            _ => Token::Dangling {
                at_end: caps.get(0).is_some_and(|m| m.end() == len),
            },
        }
    }

    fn classify_name<'t>(&self, name: &'t str) -> Token<'t> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some('$'), None) => Token::Escape,
            (Some(c), None) if self.special.contains(&c) => Token::Special,
            _ => Token::Name(name),
        }
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::shared().clone()
    }
}
