use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use std::sync::Arc;

use impl_tools::autoimpl;

use super::coordinate::Coordinate;
use crate::error::InfixError;

/// Randomly indexable supply of infix coordinates.
///
/// Stored arrays are the usual source, but coordinates can also be computed on demand, e.g. from
/// seed positions, without materializing them first. See [`from_fn`].
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>, Rc<T>, Arc<T>)]
pub trait CoordinateSource {
    type Coord: Coordinate;

    /// Number of available coordinates.
    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate with the given index, `i` must be less than [`CoordinateSource::len`].
    fn at(&self, i: usize) -> Self::Coord;

    /// Coordinate with the given index or [`InfixError::OutOfRange`].
    #[inline]
    fn try_at(&self, i: usize) -> Result<Self::Coord, InfixError> {
        InfixError::check_index(i, self.len())?;
        Ok(self.at(i))
    }
}

macro_rules! impl_stored {
    ($([$($generics:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> CoordinateSource for $ty {
                type Coord = C;

                #[inline(always)]
                fn len(&self) -> usize {
                    <[C]>::len(self)
                }

                #[inline(always)]
                fn at(&self, i: usize) -> C {
                    self[i]
                }
            }
        )+
    };
}

impl_stored!(
    [C: Coordinate] [C],
    [C: Coordinate] Vec<C>,
    [C: Coordinate, const N: usize] [C; N],
);

/// Coordinates computed by a closure from their index.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    len: usize,
    f: F,
}

/// Source of `len` coordinates, where the `i`-th coordinate is `f(i)`.
///
/// The closure is called on every access and should be cheap.
pub fn from_fn<C: Coordinate, F: Fn(usize) -> C>(len: usize, f: F) -> FromFn<F> {
    FromFn { len, f }
}

impl<C: Coordinate, F: Fn(usize) -> C> CoordinateSource for FromFn<F> {
    type Coord = C;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn at(&self, i: usize) -> C {
        debug_assert!(i < self.len, "Index {i} is out of range for {} coordinates", self.len);
        (self.f)(i)
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
