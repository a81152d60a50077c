mod logger;
pub use logger::*;

mod mask;
pub use mask::{MASK, Masked};
