use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;
use std::ops::Range;

use eyre::{Result, WrapErr};
use seqview_core_rs::coords::CoordinateSource;
use seqview_core_rs::InfixError;

pub use dispatch::{ArityOf, CoordOf, InfixOf, InfixSetCore, SelectCore};
pub use string::StringInfixes;
pub use string_set::StringSetInfixes;

mod dispatch;
mod string;
mod string_set;

/// Collection core selected for the parent `S` and coordinates supplied by `I`.
pub type CoreOf<'a, S, I> = <ArityOf<I> as SelectCore<'a, S, I>>::Core;

/// Infix produced by an [`InfixSet`] over the parent `S` with coordinates supplied by `I`.
pub type InfixSetItem<'a, S, I> = InfixOf<'a, CoreOf<'a, S, I>>;

/// Set of infixes of a sequence or of a sequence set. An infix set behaves like a set of strings:
/// it has a length and hands out an [`Infix`](crate::Infix) view per index.
///
/// The underlying core is picked at compile time from the coordinate arity:
/// - `(begin, end)` coordinates produce infixes of the single parent sequence;
/// - `(begin, end, string id[, reserved])` coordinates produce infixes of the sequence-set member
///   with the given id.
///
/// Coordinates come from any [`CoordinateSource`]: a stored array or a closure computing them on
/// demand. Neither the parent nor the coordinates are owned or copied.
pub struct InfixSet<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    core: CoreOf<'a, S, I>,
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> InfixSet<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    /// Infix set with one infix per coordinate.
    pub fn new(sequence: &'a S, infixes: &'a I) -> Self {
        Self::with_size(infixes.len(), sequence, infixes)
    }

    /// Infix set over the first `size` coordinates.
    pub fn with_size(size: usize, sequence: &'a S, infixes: &'a I) -> Self {
        Self {
            core: <ArityOf<I> as SelectCore<'a, S, I>>::select(size, sequence, infixes),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.core.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    /// Parent sequence or sequence set.
    #[inline(always)]
    pub fn sequence(&self) -> &'a S {
        self.core.parent()
    }

    #[inline(always)]
    pub fn infixes(&self) -> &'a I {
        self.core.infixes()
    }

    /// Infix at the given index.
    ///
    /// This is the fast path: the index and the stored coordinates are trusted and only checked
    /// by debug assertions.
    #[inline(always)]
    pub fn at(&self, i: usize) -> InfixSetItem<'a, S, I> {
        self.core.at(i)
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> Option<InfixSetItem<'a, S, I>> {
        self.core.get(i)
    }

    pub fn try_get(&self, i: usize) -> Result<InfixSetItem<'a, S, I>, InfixError> {
        self.core.try_get(i)
    }

    /// # Safety
    ///
    /// The index must be less than [`InfixSet::len`] and the stored coordinates must be valid
    /// for the parent.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, i: usize) -> InfixSetItem<'a, S, I> {
        self.core.get_unchecked(i)
    }

    pub fn iter(&self) -> Iter<'a, S, I> {
        Iter {
            core: self.core,
            range: 0..self.core.len(),
        }
    }

    /// Check that every infix in the set is addressable.
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.len() {
            self.core
                .try_get(i)
                .wrap_err_with(|| format!("Infix #{i} is invalid"))?;
        }
        log::debug!("Validated {} infixes", self.len());
        Ok(())
    }
}

#[cfg(feature = "rayon")]
impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> InfixSet<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
    CoreOf<'a, S, I>: Send + Sync,
    InfixSetItem<'a, S, I>: Send,
{
    /// Parallel counterpart of [`InfixSet::iter`], producing identical views.
    pub fn par_iter(
        &self,
    ) -> impl rayon::iter::IndexedParallelIterator<Item = InfixSetItem<'a, S, I>> + 'a {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};

        let core = self.core;
        (0..core.len()).into_par_iter().map(move |i| core.at(i))
    }
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> Clone for InfixSet<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> Copy for InfixSet<'a, S, I> where
    ArityOf<I>: SelectCore<'a, S, I>
{
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> Debug for InfixSet<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfixSet")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> IntoIterator for InfixSet<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    type Item = InfixSetItem<'a, S, I>;
    type IntoIter = Iter<'a, S, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> IntoIterator for &InfixSet<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    type Item = InfixSetItem<'a, S, I>;
    type IntoIter = Iter<'a, S, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over infixes of an [`InfixSet`].
pub struct Iter<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    core: CoreOf<'a, S, I>,
    range: Range<usize>,
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> Iterator for Iter<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    type Item = InfixSetItem<'a, S, I>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let core = self.core;
        self.range.next().map(|i| core.at(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let core = self.core;
        self.range.nth(n).map(|i| core.at(i))
    }
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> DoubleEndedIterator for Iter<'a, S, I>
where
    ArityOf<I>: SelectCore<'a, S, I>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let core = self.core;
        self.range.next_back().map(|i| core.at(i))
    }
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> ExactSizeIterator for Iter<'a, S, I> where
    ArityOf<I>: SelectCore<'a, S, I>
{
}

impl<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> FusedIterator for Iter<'a, S, I> where
    ArityOf<I>: SelectCore<'a, S, I>
{
}
