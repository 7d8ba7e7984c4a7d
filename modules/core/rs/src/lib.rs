pub use error::InfixError;

pub mod coords;
mod error;
pub mod num;
pub mod parallelism;
pub mod seq;
