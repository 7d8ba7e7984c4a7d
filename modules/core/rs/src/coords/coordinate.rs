use std::fmt::Debug;

use super::arity::{Arity, Dim2, Dim3, Dim4};
use crate::error::InfixError;
use crate::num::Position;

/// Fixed-arity tuple locating a half-open infix [begin, end) inside its parent sequence.
///
/// Coordinates are plain values: they are produced in bulk by an external pass (seed
/// extraction, k-mer enumeration, etc.) and never validated on construction. The invariant
/// `begin <= end` is a caller obligation, see [`Coordinate::validate`] for the checked path.
pub trait Coordinate: Copy + Debug {
    /// Numeric type of individual components.
    type Idx: Position;
    /// Number of components, resolved at compile time.
    type Arity: Arity;

    /// Start of the infix (inclusive).
    fn begin(&self) -> Self::Idx;

    /// End of the infix (exclusive).
    fn end(&self) -> Self::Idx;

    /// Length of the infix, `end - begin`.
    #[inline(always)]
    fn len(&self) -> usize {
        self.end().as_usize() - self.begin().as_usize()
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    /// Check that the coordinate describes a valid infix of a parent with `parent_len` symbols.
    fn validate(&self, parent_len: usize) -> Result<(), InfixError> {
        InfixError::check_range(self.begin().as_usize(), self.end().as_usize(), parent_len)
    }
}

/// Coordinate of an infix anchored in a sequence set: the third component selects the owner.
pub trait AnchoredCoordinate: Coordinate {
    /// Index of the owner sequence inside the sequence set.
    fn string_id(&self) -> Self::Idx;
}

macro_rules! impl_tuple_coordinate {
    ($arity:ty, ($($name:ident),+)) => {
        impl<T: Position> Coordinate for ($($name,)+) {
            type Idx = T;
            type Arity = $arity;

            #[inline(always)]
            fn begin(&self) -> T {
                self.0
            }

            #[inline(always)]
            fn end(&self) -> T {
                self.1
            }
        }
    };
}

impl_tuple_coordinate!(Dim2, (T, T));
impl_tuple_coordinate!(Dim3, (T, T, T));
impl_tuple_coordinate!(Dim4, (T, T, T, T));

impl<T: Position> AnchoredCoordinate for (T, T, T) {
    #[inline(always)]
    fn string_id(&self) -> T {
        self.2
    }
}

impl<T: Position> AnchoredCoordinate for (T, T, T, T) {
    #[inline(always)]
    fn string_id(&self) -> T {
        self.2
    }
}

macro_rules! impl_array_coordinate {
    ($arity:ty, $n:literal) => {
        impl<T: Position> Coordinate for [T; $n] {
            type Idx = T;
            type Arity = $arity;

            #[inline(always)]
            fn begin(&self) -> T {
                self[0]
            }

            #[inline(always)]
            fn end(&self) -> T {
                self[1]
            }
        }
    };
}

impl_array_coordinate!(Dim2, 2);
impl_array_coordinate!(Dim3, 3);
impl_array_coordinate!(Dim4, 4);

impl<T: Position> AnchoredCoordinate for [T; 3] {
    #[inline(always)]
    fn string_id(&self) -> T {
        self[2]
    }
}

impl<T: Position> AnchoredCoordinate for [T; 4] {
    #[inline(always)]
    fn string_id(&self) -> T {
        self[2]
    }
}
