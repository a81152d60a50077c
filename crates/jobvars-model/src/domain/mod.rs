mod variable;
pub use variable::Variable;

mod variables;
pub use variables::Variables;

mod wire;
