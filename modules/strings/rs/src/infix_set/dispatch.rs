use seqview_core_rs::coords::{AnchoredCoordinate, Coordinate, CoordinateSource, Dim2, Dim3, Dim4};
use seqview_core_rs::seq::{Sequence, SequenceSet};
use seqview_core_rs::InfixError;

use super::string::StringInfixes;
use super::string_set::StringSetInfixes;
use crate::infix::Infix;

/// Coordinate type supplied by a collection core.
pub type CoordOf<'a, T> = <<T as InfixSetCore<'a>>::Source as CoordinateSource>::Coord;

/// Infix produced by a collection core.
pub type InfixOf<'a, T> = Infix<&'a <T as InfixSetCore<'a>>::String, CoordOf<'a, T>>;

/// Compile-time arity of the coordinates supplied by `I`.
pub type ArityOf<I> = <<I as CoordinateSource>::Coord as Coordinate>::Arity;

/// Shared surface of the collection cores: a borrowed parent, a borrowed source of coordinates
/// and a number of infixes. Infix views are materialized on every access.
pub trait InfixSetCore<'a>: Copy {
    /// Sequence or sequence set the infixes were taken from.
    type Parent: ?Sized + 'a;
    /// Sequence referenced by each produced infix.
    type String: Sequence + ?Sized + 'a;
    type Source: CoordinateSource + ?Sized + 'a;

    fn len(&self) -> usize;

    fn parent(&self) -> &'a Self::Parent;

    fn infixes(&self) -> &'a Self::Source;

    /// Infix at the given index. The index must be less than [`InfixSetCore::len`] and the
    /// coordinates must be valid for the parent, which is only asserted in debug builds.
    fn at(&self, i: usize) -> InfixOf<'a, Self>;

    /// Infix at the given index or `None` if the index or the stored coordinates are invalid.
    fn get(&self, i: usize) -> Option<InfixOf<'a, Self>> {
        self.try_get(i).ok()
    }

    fn try_get(&self, i: usize) -> Result<InfixOf<'a, Self>, InfixError>;

    /// # Safety
    ///
    /// The index must be less than [`InfixSetCore::len`] and the stored coordinates must be
    /// valid for the parent.
    unsafe fn get_unchecked(&self, i: usize) -> InfixOf<'a, Self>;
}

/// Compile-time selection of a collection core based on the coordinate arity.
///
/// Implemented by the arity markers: pairs address infixes of the parent taken as a single
/// sequence, triples and quadruples address infixes of sequence-set members.
///
/// Pairs resolve for any parent implementing [`Sequence`]. A set of `Copy` members (e.g.
/// `[&str]`) is such a parent as well: pairs over it select a range of whole members, each member
/// being one symbol. Anchored coordinates over a parent that isn't a [`SequenceSet`] don't
/// resolve.
pub trait SelectCore<'a, S: ?Sized + 'a, I: CoordinateSource + ?Sized + 'a> {
    type Core: InfixSetCore<'a, Parent = S, Source = I>;

    fn select(size: usize, parent: &'a S, infixes: &'a I) -> Self::Core;
}

impl<'a, S, I> SelectCore<'a, S, I> for Dim2
where
    S: Sequence + ?Sized + 'a,
    I: CoordinateSource + ?Sized + 'a,
    I::Coord: Coordinate<Arity = Dim2>,
{
    type Core = StringInfixes<'a, S, I>;

    #[inline(always)]
    fn select(size: usize, parent: &'a S, infixes: &'a I) -> Self::Core {
        StringInfixes::with_size(size, parent, infixes)
    }
}

impl<'a, S, I> SelectCore<'a, S, I> for Dim3
where
    S: SequenceSet + ?Sized + 'a,
    I: CoordinateSource + ?Sized + 'a,
    I::Coord: AnchoredCoordinate<Arity = Dim3>,
{
    type Core = StringSetInfixes<'a, S, I>;

    #[inline(always)]
    fn select(size: usize, parent: &'a S, infixes: &'a I) -> Self::Core {
        StringSetInfixes::with_size(size, parent, infixes)
    }
}

impl<'a, S, I> SelectCore<'a, S, I> for Dim4
where
    S: SequenceSet + ?Sized + 'a,
    I: CoordinateSource + ?Sized + 'a,
    I::Coord: AnchoredCoordinate<Arity = Dim4>,
{
    type Core = StringSetInfixes<'a, S, I>;

    #[inline(always)]
    fn select(size: usize, parent: &'a S, infixes: &'a I) -> Self::Core {
        StringSetInfixes::with_size(size, parent, infixes)
    }
}
