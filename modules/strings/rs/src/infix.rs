use std::iter::FusedIterator;
use std::ops::{Index, IndexMut, Range};

use derive_getters::Dissolve;
use seqview_core_rs::coords::{AnchoredCoordinate, Coordinate};
use seqview_core_rs::num::Position;
use seqview_core_rs::seq::{ContiguousSequence, Sequence, SequenceMut};
use seqview_core_rs::InfixError;

/// Arbitrarily placed substring of a parent sequence, i.e. `parent[begin..end]`.
///
/// The infix is a view: it stores a handle to the parent (usually a reference) and the
/// coordinates, never a copy of the symbols. Mutable handles (`&mut [T]`, `&mut Vec<T>`, ...)
/// allow editing the parent in place through the infix.
///
/// Plain indexing follows the parent's contract and doesn't check that the position falls
/// inside the infix in release builds. Use [`Infix::get`]/[`Infix::try_get`] for checked access.
#[derive(Clone, Copy, Debug, Default, Dissolve)]
pub struct Infix<S, C> {
    string: S,
    coords: C,
}

impl<S: Sequence, C: Coordinate> Infix<S, C> {
    /// Create a new infix view. Coordinates must lie inside the parent, which is only
    /// asserted in debug builds.
    #[inline(always)]
    pub fn new(string: S, coords: C) -> Self {
        debug_assert!(
            coords.validate(string.len()).is_ok(),
            "Infix coordinates {coords:?} are outside of the parent sequence"
        );
        Self { string, coords }
    }

    /// Create a new infix view, checking that coordinates describe a valid range of the parent.
    pub fn try_new(string: S, coords: C) -> Result<Self, InfixError> {
        coords.validate(string.len())?;
        Ok(Self { string, coords })
    }

    /// Number of symbols in the infix.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.coords.len()
    }

    #[inline(always)]
    pub fn length(&self) -> usize {
        self.size()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Infix range packed as `(end, begin)`.
    ///
    /// The order is reversed relative to [`Infix::coords`], downstream consumers rely on it.
    #[inline(always)]
    pub fn range(&self) -> (C::Idx, C::Idx) {
        (self.coords.end(), self.coords.begin())
    }

    /// Coordinates used to construct the infix.
    #[inline(always)]
    pub fn coords(&self) -> C {
        self.coords
    }

    /// Handle to the parent sequence.
    #[inline(always)]
    pub fn string(&self) -> &S {
        &self.string
    }

    /// Symbol at the given position, which must be less than [`Infix::size`].
    #[inline(always)]
    pub fn at(&self, pos: usize) -> S::Symbol {
        self.string.at(self.offset(pos))
    }

    /// Symbol at the given position or `None` if the position (or the infix itself) is
    /// outside of the parent.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<S::Symbol> {
        self.try_get(pos).ok()
    }

    pub fn try_get(&self, pos: usize) -> Result<S::Symbol, InfixError> {
        self.coords.validate(self.string.len())?;
        InfixError::check_index(pos, self.size())?;
        Ok(self.string.at(self.offset(pos)))
    }

    pub fn iter(&self) -> Symbols<'_, S, C> {
        Symbols {
            infix: self,
            range: 0..self.size(),
        }
    }

    #[inline(always)]
    fn offset(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.size(),
            "Position {pos} is outside of the infix of size {}",
            self.size()
        );
        self.coords.begin().as_usize() + pos
    }
}

impl<S: ContiguousSequence, C: Coordinate> Infix<S, C> {
    #[inline(always)]
    pub fn as_slice(&self) -> &[S::Symbol] {
        &self.string.as_slice()[self.coords.begin().as_usize()..self.coords.end().as_usize()]
    }

    /// # Safety
    ///
    /// `pos` must be less than [`Infix::size`] and the infix must lie inside its parent.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &S::Symbol {
        self.string.as_slice().get_unchecked(self.offset(pos))
    }
}

impl<S: SequenceMut, C: Coordinate> Infix<S, C> {
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [S::Symbol] {
        let (begin, end) = (self.coords.begin().as_usize(), self.coords.end().as_usize());
        &mut self.string.as_mut_slice()[begin..end]
    }

    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut S::Symbol> {
        let (begin, end) = (self.coords.begin().as_usize(), self.coords.end().as_usize());
        self.string.as_mut_slice().get_mut(begin..end)?.get_mut(pos)
    }

    pub fn try_get_mut(&mut self, pos: usize) -> Result<&mut S::Symbol, InfixError> {
        self.coords.validate(self.string.len())?;
        InfixError::check_index(pos, self.size())?;
        let offset = self.offset(pos);
        Ok(&mut self.string.as_mut_slice()[offset])
    }

    /// # Safety
    ///
    /// `pos` must be less than [`Infix::size`] and the infix must lie inside its parent.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut S::Symbol {
        let offset = self.offset(pos);
        self.string.as_mut_slice().get_unchecked_mut(offset)
    }
}

impl<S, C: AnchoredCoordinate> Infix<S, C> {
    /// Id of the sequence-set member this infix belongs to.
    #[inline(always)]
    pub fn string_id(&self) -> C::Idx {
        self.coords.string_id()
    }
}

/// Return the id of the sequence-set member the infix was taken from.
///
/// ```
/// use seqview_strings_rs::{string_id, Infix};
///
/// let infix = Infix::new("CCCCCC", (1u32, 4u32, 1u32, 0u32));
/// assert_eq!(string_id(&infix), 1);
/// ```
///
/// Only defined for anchored coordinates, infixes of a single sequence have no owner id:
///
/// ```compile_fail
/// use seqview_strings_rs::{string_id, Infix};
///
/// let infix = Infix::new("ACGT", (0u32, 2u32));
/// string_id(&infix);
/// ```
#[inline(always)]
pub fn string_id<S, C: AnchoredCoordinate>(infix: &Infix<S, C>) -> C::Idx {
    infix.coords.string_id()
}

impl<S: ContiguousSequence, C: Coordinate> Index<usize> for Infix<S, C> {
    type Output = S::Symbol;

    #[inline(always)]
    fn index(&self, pos: usize) -> &Self::Output {
        &self.string.as_slice()[self.offset(pos)]
    }
}

impl<S: SequenceMut, C: Coordinate> IndexMut<usize> for Infix<S, C> {
    #[inline(always)]
    fn index_mut(&mut self, pos: usize) -> &mut Self::Output {
        let offset = self.offset(pos);
        &mut self.string.as_mut_slice()[offset]
    }
}

// Infixes are sequences themselves and can be nested
impl<S: Sequence, C: Coordinate> Sequence for Infix<S, C> {
    type Symbol = S::Symbol;

    #[inline(always)]
    fn len(&self) -> usize {
        self.size()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> Self::Symbol {
        Infix::at(self, pos)
    }
}

impl<S: ContiguousSequence, C: Coordinate> ContiguousSequence for Infix<S, C> {
    #[inline(always)]
    fn as_slice(&self) -> &[Self::Symbol] {
        Infix::as_slice(self)
    }
}

impl<S: SequenceMut, C: Coordinate> SequenceMut for Infix<S, C> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [Self::Symbol] {
        Infix::as_mut_slice(self)
    }
}

/// Iterator over symbols of an [`Infix`].
#[derive(Clone, Debug)]
pub struct Symbols<'i, S, C> {
    infix: &'i Infix<S, C>,
    range: Range<usize>,
}

impl<S: Sequence, C: Coordinate> Iterator for Symbols<'_, S, C> {
    type Item = S::Symbol;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|pos| self.infix.at(pos))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<S: Sequence, C: Coordinate> DoubleEndedIterator for Symbols<'_, S, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|pos| self.infix.at(pos))
    }
}

impl<S: Sequence, C: Coordinate> ExactSizeIterator for Symbols<'_, S, C> {}

impl<S: Sequence, C: Coordinate> FusedIterator for Symbols<'_, S, C> {}

impl<'i, S: Sequence, C: Coordinate> IntoIterator for &'i Infix<S, C> {
    type Item = S::Symbol;
    type IntoIter = Symbols<'i, S, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Sequence, C: Coordinate, T> PartialEq<[T]> for Infix<S, C>
where
    S::Symbol: PartialEq<T>,
{
    fn eq(&self, other: &[T]) -> bool {
        self.size() == other.len() && self.iter().zip(other).all(|(a, b)| a == *b)
    }
}

impl<S: Sequence, C: Coordinate, T, const N: usize> PartialEq<[T; N]> for Infix<S, C>
where
    S::Symbol: PartialEq<T>,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENCE: &str = "ACGTACGT";

    #[test]
    fn test_basic() {
        let infix = Infix::new(SEQUENCE, (2u32, 5u32));
        assert_eq!(infix.size(), 3);
        assert_eq!(infix.length(), 3);
        assert!(!infix.is_empty());
        assert_eq!(infix.as_slice(), b"GTA");
        assert_eq!((infix[0], infix[1], infix[2]), (b'G', b'T', b'A'));
        assert_eq!(infix.coords(), (2, 5));
        assert_eq!(infix.string(), &SEQUENCE);
        assert_eq!(infix, *b"GTA");
    }

    #[test]
    fn test_range_is_reversed() {
        let infix = Infix::new(SEQUENCE, (2u32, 5u32));
        assert_eq!(infix.range(), (5, 2));

        let infix = Infix::new(SEQUENCE, [0u64, 8]);
        assert_eq!(infix.range(), (8, 0));
    }

    #[test]
    fn test_empty() {
        let infix = Infix::new(SEQUENCE, (4usize, 4usize));
        assert_eq!(infix.size(), 0);
        assert!(infix.is_empty());
        assert!(infix.as_slice().is_empty());
        assert_eq!(infix.get(0), None);
        assert_eq!(
            infix.try_get(0),
            Err(InfixError::OutOfRange { index: 0, len: 0 })
        );

        let default = Infix::<&[u8], (u32, u32)>::default();
        assert!(default.is_empty());
    }

    #[test]
    fn test_checked_access() {
        let infix = Infix::new(SEQUENCE, (2u32, 5u32));
        assert_eq!(infix.at(1), b'T');
        assert_eq!(infix.get(2), Some(b'A'));
        assert_eq!(infix.get(3), None);
        assert_eq!(infix.try_get(1), Ok(b'T'));
        assert_eq!(
            infix.try_get(3),
            Err(InfixError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(unsafe { *infix.get_unchecked(0) }, b'G');
    }

    #[test]
    fn test_try_new() {
        assert!(Infix::try_new(SEQUENCE, (0u32, 8u32)).is_ok());
        assert_eq!(
            Infix::try_new(SEQUENCE, (5u32, 2u32)).err(),
            Some(InfixError::InvalidRange { begin: 5, end: 2, len: 8 })
        );
        assert_eq!(
            Infix::try_new(SEQUENCE, (6u32, 9u32)).err(),
            Some(InfixError::InvalidRange { begin: 6, end: 9, len: 8 })
        );
    }

    #[test]
    fn test_mutable_parent() {
        let mut parent = b"ACGTACGT".to_vec();
        {
            let mut infix = Infix::new(parent.as_mut_slice(), (4u32, 8u32));
            infix[0] = b'T';
            *infix.get_mut(1).unwrap() = b'T';
            assert!(infix.get_mut(4).is_none());
            *infix.try_get_mut(2).unwrap() = b'T';
            unsafe { *infix.get_unchecked_mut(3) = b'T' };
            assert_eq!(infix.as_slice(), b"TTTT");
        }
        assert_eq!(parent, b"ACGTTTTT");

        let mut infix = Infix::new(&mut parent, (0u32, 2u32));
        infix.as_mut_slice().copy_from_slice(b"GG");
        assert_eq!(parent, b"GGGTTTTT");
    }

    #[test]
    fn test_anchored() {
        let set = ["AAAA", "CCCCCC"];
        let coords = (1u32, 4u32, 1u32, 0u32);
        let infix = Infix::new(set[1], coords);
        assert_eq!(infix.as_slice(), b"CCC");
        assert_eq!(string_id(&infix), 1);
        assert_eq!(infix.string_id(), 1);
        assert_eq!(infix.range(), (4, 1));
    }

    #[test]
    fn test_nested() {
        let outer = Infix::new(SEQUENCE, (1u32, 7u32));
        let inner = Infix::new(outer, (1u32, 4u32));
        assert_eq!(inner.as_slice(), b"GTA");
        assert_eq!(inner[0], b'G');
        assert_eq!(inner.iter().collect::<Vec<_>>(), b"GTA".to_vec());
        assert_eq!(inner.iter().rev().collect::<Vec<_>>(), b"ATG".to_vec());
        assert_eq!((&inner).into_iter().len(), 3);
    }

    /// Periodic sequence whose symbols are never stored.
    #[derive(Debug)]
    struct Repeat {
        motif: &'static [u8],
        len: usize,
    }

    impl Sequence for Repeat {
        type Symbol = u8;

        fn len(&self) -> usize {
            self.len
        }

        fn at(&self, pos: usize) -> u8 {
            self.motif[pos % self.motif.len()]
        }
    }

    #[test]
    fn test_computed_parent() {
        let parent = Repeat {
            motif: b"ACG",
            len: 1_000_000,
        };
        let infix = Infix::new(&parent, (999_995u32, 1_000_000u32));
        assert_eq!(infix.size(), 5);
        assert_eq!(infix.at(0), b'G');
        assert_eq!(infix.iter().collect::<Vec<_>>(), b"GACGA");
        assert_eq!(infix, *b"GACGA");
        assert_eq!(infix.get(5), None);
        assert_eq!(
            Infix::try_new(&parent, (0u32, 1_000_001u32)).err(),
            Some(InfixError::InvalidRange { begin: 0, end: 1_000_001, len: 1_000_000 })
        );

        let nested = Infix::new(infix, (1u32, 3u32));
        assert_eq!(nested.try_get(1), Ok(b'C'));
        assert_eq!(nested, *b"AC");
    }
}
