pub use arity::{Arity, Dim2, Dim3, Dim4};
pub use coordinate::{AnchoredCoordinate, Coordinate};
pub use infix_coord::{InfixCoord, SetInfixCoord};
pub use source::{from_fn, CoordinateSource, FromFn};

mod arity;
mod coordinate;
mod infix_coord;
mod source;
