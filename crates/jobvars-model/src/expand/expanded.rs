use std::{collections::HashMap, ops::Deref};

use tracing::trace;

use crate::{Variables, expand::Expander};

impl Variables {
    /// Expand placeholders in every value using the default rules.
    ///
    /// See [`Variables::expand_with`].
    pub fn expand(&self) -> ExpandedVariables {
        self.expand_with(Expander::shared())
    }

    /// Expand placeholders in every value.
    ///
    /// References resolve against the *raw* value of the last variable carrying
    /// the referenced key, whether it appears before or after the referencing
    /// variable. Each value is substituted exactly once; `$NAME` text brought in
    /// by a substitution is left as is.
    ///
    /// The result keeps length, order, keys and flags of `self`.
    ///
    /// # Examples
    /// ```
    /// use jobvars_model::{Variable, Variables};
    ///
    /// let vars = Variables::from(vec![
    ///     Variable::new("GREETING", "hello $NAME"),
    ///     Variable::new("NAME", "world"),
    /// ]);
    ///
    /// let expanded = vars.expand();
    /// assert_eq!(expanded.get("GREETING"), "hello world");
    /// assert_eq!(expanded.expand_value("${GREETING}!"), "hello world!");
    /// ```
    pub fn expand_with(&self, expander: &Expander) -> ExpandedVariables {
        trace!(variables = self.len(), "expanding variables");

        let raw = self.resolution_table();
        let mut unresolved = 0;

        let variables: Variables = self
            .iter()
            .map(|v| {
                let (value, missing) = expander.substitute(v.value(), |k| raw.get(k).map(String::as_str));
                unresolved += missing;
                v.with_value(value)
            })
            .collect();

        trace!(
            variables = variables.len(),
            keys = raw.len(),
            unresolved,
            "variables expanded"
        );

        let resolved = variables.resolution_table();
        ExpandedVariables {
            variables,
            resolved,
            expander: expander.clone(),
        }
    }
}

/// Result of [`Variables::expand`].
///
/// Derefs to the expanded [`Variables`], so all collection operations are
/// available. Additionally keeps the key → expanded value table (last entry
/// wins) so further strings can be interpolated with [`ExpandedVariables::expand_value`].
///
/// `get` keeps its first-match semantics here. When a key is defined more than
/// once, the value that other variables were expanded against is the last one;
/// read it with [`ExpandedVariables::resolved`].
#[derive(Debug, Clone, Default)]
pub struct ExpandedVariables {
    variables: Variables,
    resolved: HashMap<String, String>,
    expander: Expander,
}

impl ExpandedVariables {
    /// Interpolate already expanded values into `template`.
    ///
    /// Uses the same placeholder rules as the expansion that produced `self`.
    /// On an empty expansion every reference resolves to an empty string.
    pub fn expand_value(&self, template: &str) -> String {
        self.expander.expand_str(template, &self.resolved)
    }

    /// Expanded value of the last variable with the given key.
    pub fn resolved(&self, key: &str) -> Option<&str> {
        self.resolved.get(key).map(String::as_str)
    }

    /// Drop the lookup table and return the plain collection.
    pub fn into_variables(self) -> Variables {
        self.variables
    }
}

impl Deref for ExpandedVariables {
    type Target = Variables;

    fn deref(&self) -> &Variables {
        &self.variables
    }
}

impl From<ExpandedVariables> for Variables {
    fn from(expanded: ExpandedVariables) -> Self {
        expanded.variables
    }
}

#[cfg(test)]
mod tests {
    use super::ExpandedVariables;
    use crate::{DanglingDollar, ExpansionRules, Variable, Variables};

    fn shadowed() -> Variables {
        Variables::from(vec![
            Variable::new("key", "value_of_$public"),
            Variable::new("public", "some_value").with_public(true),
            Variable::new("private", "value_of_${public}"),
            Variable::new("public", "value_of_$undefined").with_public(true),
        ])
    }

    #[test]
    fn expansion_uses_last_raw_value() {
        let expanded = shadowed().expand();
        let values: Vec<_> = expanded.iter().map(|v| v.value()).collect();

        assert_eq!(expanded.len(), 4);
        assert_eq!(
            values,
            [
                "value_of_value_of_$undefined",
                "some_value",
                "value_of_value_of_$undefined",
                "value_of_",
            ]
        );
        assert_eq!(expanded.resolved("key"), Some("value_of_value_of_$undefined"));
        assert_eq!(expanded.resolved("public"), Some("value_of_"));
        assert_eq!(expanded.resolved("private"), Some("value_of_value_of_$undefined"));
    }

    #[test]
    fn get_on_expanded_still_returns_first_match() {
        let expanded = shadowed().expand();
        assert_eq!(expanded.get("public"), "some_value");
        assert_eq!(expanded.get("key"), "value_of_value_of_$undefined");
    }

    #[test]
    fn expand_value_uses_expanded_table() {
        let expanded = shadowed().expand();
        assert_eq!(
            expanded.expand_value("${public} ${private}"),
            "value_of_ value_of_value_of_$undefined"
        );
    }

    #[test]
    fn expansion_keeps_keys_and_flags() {
        let vars = Variables::from(vec![
            Variable::new("A", "$B").with_public(true),
            Variable::new("B", "b").with_internal(true).with_file(true),
        ]);

        let expanded = vars.expand();
        for (before, after) in vars.iter().zip(expanded.iter()) {
            assert_eq!(before.key(), after.key());
            assert_eq!(before.is_public(), after.is_public());
            assert_eq!(before.is_internal(), after.is_internal());
            assert_eq!(before.is_file(), after.is_file());
        }
        assert_eq!(expanded.get("A"), "b");
    }

    #[test]
    fn special_values() {
        let vars = Variables::from(vec![
            Variable::new("key", "$$"),
            Variable::new("key2", "$/dsa").with_public(true),
            Variable::new("key3", "aa$@bb"),
            Variable::new("key4", "aa${@}bb"),
        ]);

        let expanded = vars.expand();
        assert_eq!(expanded.len(), 4);
        assert_eq!(expanded.get("key"), "$");
        assert_eq!(expanded.get("key2"), "/dsa");
        assert_eq!(expanded.get("key3"), "aabb");
        assert_eq!(expanded.get("key4"), "aabb");
    }

    #[test]
    fn empty_key_is_not_reachable_through_empty_braces() {
        let vars = Variables::from(vec![
            Variable::parse("=secret").unwrap(),
            Variable::new("A", "x${}y"),
        ]);

        let expanded = vars.expand();
        assert_eq!(expanded.get("A"), "xy");
        assert_eq!(expanded.expand_value("${}"), "");
    }

    #[test]
    fn cyclic_references_terminate() {
        let vars = Variables::from(vec![
            Variable::new("A", "x$B"),
            Variable::new("B", "y$A"),
        ]);

        let expanded = vars.expand();
        assert_eq!(expanded.get("A"), "xy$A");
        assert_eq!(expanded.get("B"), "yx$B");
    }

    #[test]
    fn empty_expansion_resolves_nothing() {
        let empty = ExpandedVariables::default();
        assert!(empty.is_empty());
        assert_eq!(empty.expand_value("a${X}b$Y$$"), "ab$");

        let from_empty = Variables::new().expand();
        assert_eq!(from_empty.expand_value("$HOME"), "");
    }

    #[test]
    fn expand_with_custom_rules_carries_rules_forward() {
        let rules = ExpansionRules {
            dangling_dollar: DanglingDollar::Keep,
            ..Default::default()
        };
        let vars = Variables::from(vec![Variable::new("P", "$/tmp")]);

        let expanded = vars.expand_with(&rules.compile().unwrap());
        assert_eq!(expanded.get("P"), "$/tmp");
        assert_eq!(expanded.expand_value("${P} $%"), "$/tmp $%");
    }

    #[test]
    fn into_variables_returns_plain_collection() {
        let expanded = shadowed().expand();
        let plain: Variables = expanded.clone().into_variables();
        assert_eq!(plain.render_all(), expanded.render_all());
    }
}
