mod domain;
pub use domain::{Variable, Variables};

mod error;
pub use error::{ModelError, ModelResult};

mod expand;
pub use expand::{DEFAULT_SPECIAL, DanglingDollar, ExpandedVariables, Expander, ExpansionRules};
