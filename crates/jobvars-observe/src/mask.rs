use std::fmt;

use jobvars_model::Variable;

/// Placeholder printed instead of a private value.
pub const MASK: &str = "[MASKED]";

/// Display adapter that prints `key=value` for visible variables and
/// `key=[MASKED]` for everything else.
///
/// Use it whenever a variable ends up in a log record:
///
/// ```
/// use jobvars_model::Variable;
/// use jobvars_observe::Masked;
///
/// let token = Variable::new("TOKEN", "s3cr3t");
/// assert_eq!(Masked(&token).to_string(), "TOKEN=[MASKED]");
///
/// let name = Variable::new("NAME", "demo").with_public(true);
/// assert_eq!(Masked(&name).to_string(), "NAME=demo");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Masked<'a>(pub &'a Variable);

impl fmt::Display for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_visible() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}={}", self.0.key(), MASK)
        }
    }
}
