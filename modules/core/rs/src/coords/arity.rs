/// Compile-time number of components in a coordinate tuple.
///
/// Markers are never instantiated, they only steer trait resolution: two components describe an
/// infix of a single sequence, three or four components additionally carry the id of the owner
/// sequence inside a sequence set.
pub trait Arity: 'static {
    const DIM: usize;
}

/// (begin, end)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dim2 {}

/// (begin, end, string id)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dim3 {}

/// (begin, end, string id, reserved)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dim4 {}

impl Arity for Dim2 {
    const DIM: usize = 2;
}

impl Arity for Dim3 {
    const DIM: usize = 3;
}

impl Arity for Dim4 {
    const DIM: usize = 4;
}
