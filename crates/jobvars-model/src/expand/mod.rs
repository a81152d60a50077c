mod rules;
pub use rules::{DEFAULT_SPECIAL, DanglingDollar, ExpansionRules};

mod expander;
pub use expander::Expander;

mod expanded;
pub use expanded::ExpandedVariables;
