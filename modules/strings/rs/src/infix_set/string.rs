use std::fmt::{Debug, Formatter};

use seqview_core_rs::coords::CoordinateSource;
use seqview_core_rs::seq::Sequence;
use seqview_core_rs::InfixError;

use super::dispatch::{InfixOf, InfixSetCore};
use crate::infix::Infix;

/// Set of infixes of a single sequence.
pub struct StringInfixes<'a, S: ?Sized, I: ?Sized> {
    size: usize,
    string: &'a S,
    infixes: &'a I,
}

impl<'a, S: Sequence + ?Sized, I: CoordinateSource + ?Sized> StringInfixes<'a, S, I> {
    pub fn new(string: &'a S, infixes: &'a I) -> Self {
        Self::with_size(infixes.len(), string, infixes)
    }

    pub fn with_size(size: usize, string: &'a S, infixes: &'a I) -> Self {
        debug_assert!(
            size <= infixes.len(),
            "Requested {size} infixes, but only {} coordinates are available",
            infixes.len()
        );
        Self {
            size,
            string,
            infixes,
        }
    }
}

impl<'a, S: Sequence + ?Sized, I: CoordinateSource + ?Sized> InfixSetCore<'a>
    for StringInfixes<'a, S, I>
{
    type Parent = S;
    type String = S;
    type Source = I;

    #[inline(always)]
    fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn parent(&self) -> &'a S {
        self.string
    }

    #[inline(always)]
    fn infixes(&self) -> &'a I {
        self.infixes
    }

    #[inline(always)]
    fn at(&self, i: usize) -> InfixOf<'a, Self> {
        debug_assert!(i < self.size, "Index {i} is out of range for {} infixes", self.size);
        Infix::new(self.string, self.infixes.at(i))
    }

    fn try_get(&self, i: usize) -> Result<InfixOf<'a, Self>, InfixError> {
        InfixError::check_index(i, self.size)?;
        Infix::try_new(self.string, self.infixes.try_at(i)?)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> InfixOf<'a, Self> {
        Infix::new(self.string, self.infixes.at(i))
    }
}

impl<S: ?Sized, I: ?Sized> Clone for StringInfixes<'_, S, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, I: ?Sized> Copy for StringInfixes<'_, S, I> {}

impl<S: ?Sized, I: ?Sized> Debug for StringInfixes<'_, S, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInfixes")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
