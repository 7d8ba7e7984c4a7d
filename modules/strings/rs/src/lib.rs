pub use infix::{string_id, Infix, Symbols};
pub use infix_set::{InfixSet, Iter};

pub mod infix;
pub mod infix_set;
