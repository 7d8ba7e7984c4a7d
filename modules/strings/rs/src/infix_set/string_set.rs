use std::fmt::{Debug, Formatter};

use seqview_core_rs::coords::{AnchoredCoordinate, CoordinateSource};
use seqview_core_rs::num::Position;
use seqview_core_rs::seq::SequenceSet;
use seqview_core_rs::InfixError;

use super::dispatch::{InfixOf, InfixSetCore};
use crate::infix::Infix;

/// Set of infixes of a sequence set. Each coordinate carries the id of its owner sequence,
/// which is resolved on access.
pub struct StringSetInfixes<'a, S: ?Sized, I: ?Sized> {
    size: usize,
    strings: &'a S,
    infixes: &'a I,
}

impl<'a, S, I> StringSetInfixes<'a, S, I>
where
    S: SequenceSet + ?Sized,
    I: CoordinateSource + ?Sized,
    I::Coord: AnchoredCoordinate,
{
    pub fn new(strings: &'a S, infixes: &'a I) -> Self {
        Self::with_size(infixes.len(), strings, infixes)
    }

    pub fn with_size(size: usize, strings: &'a S, infixes: &'a I) -> Self {
        debug_assert!(
            size <= infixes.len(),
            "Requested {size} infixes, but only {} coordinates are available",
            infixes.len()
        );
        Self {
            size,
            strings,
            infixes,
        }
    }
}

impl<'a, S, I> InfixSetCore<'a> for StringSetInfixes<'a, S, I>
where
    S: SequenceSet + ?Sized,
    I: CoordinateSource + ?Sized,
    I::Coord: AnchoredCoordinate,
{
    type Parent = S;
    type String = S::Member;
    type Source = I;

    #[inline(always)]
    fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn parent(&self) -> &'a S {
        self.strings
    }

    #[inline(always)]
    fn infixes(&self) -> &'a I {
        self.infixes
    }

    #[inline(always)]
    fn at(&self, i: usize) -> InfixOf<'a, Self> {
        debug_assert!(i < self.size, "Index {i} is out of range for {} infixes", self.size);
        let coords = self.infixes.at(i);
        let string = &self.strings.members()[coords.string_id().as_usize()];
        Infix::new(string, coords)
    }

    fn try_get(&self, i: usize) -> Result<InfixOf<'a, Self>, InfixError> {
        InfixError::check_index(i, self.size)?;
        let coords = self.infixes.try_at(i)?;
        let string = self.strings.try_member(coords.string_id().as_usize())?;
        Infix::try_new(string, coords)
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> InfixOf<'a, Self> {
        let coords = self.infixes.at(i);
        let string = self
            .strings
            .members()
            .get_unchecked(coords.string_id().as_usize());
        Infix::new(string, coords)
    }
}

impl<S: ?Sized, I: ?Sized> Clone for StringSetInfixes<'_, S, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, I: ?Sized> Copy for StringSetInfixes<'_, S, I> {}

impl<S: ?Sized, I: ?Sized> Debug for StringSetInfixes<'_, S, I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringSetInfixes")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infix::string_id;
    use seqview_core_rs::coords::from_fn;

    #[test]
    fn test_string_set_infixes() {
        let strings = vec!["AAAA".to_string(), "CCCCCC".to_string()];
        let coords = [(1u32, 4u32, 1u32, 0u32), (0, 2, 0, 0), (2, 6, 1, 0)];
        let core = StringSetInfixes::new(&strings, &coords);

        assert_eq!(core.len(), 3);

        let infix = core.at(0);
        assert_eq!(infix.as_slice(), b"CCC");
        assert_eq!(string_id(&infix), 1);
        assert_eq!(infix.coords(), (1, 4, 1, 0));
        assert!(std::ptr::eq(*infix.string(), &strings[1]));

        assert_eq!(core.at(1).as_slice(), b"AA");
        assert_eq!(string_id(&core.at(1)), 0);
        assert_eq!(core.at(2).size(), 4);
    }

    #[test]
    fn test_triples() {
        let strings: [&[u8]; 3] = [b"ACGT", b"", b"GGGCCC"];
        let coords = [[0u16, 2, 2], [0, 0, 1], [1, 4, 0]];
        let core = StringSetInfixes::new(&strings, &coords);

        assert_eq!(core.at(0).as_slice(), b"GG");
        assert!(core.at(1).is_empty());
        assert_eq!(core.at(2).as_slice(), b"CGT");
        assert_eq!(core.at(2).string_id(), 0);
    }

    #[test]
    fn test_checked_access() {
        let strings = ["AAAA", "CCCCCC"];
        let coords = [(1u32, 4u32, 2u32, 0u32), (3, 9, 0, 0), (0, 1, 0, 0)];
        let core = StringSetInfixes::new(&strings, &coords);

        assert_eq!(
            core.try_get(0).err(),
            Some(InfixError::InvalidOwnerId { id: 2, len: 2 })
        );
        assert_eq!(
            core.try_get(1).err(),
            Some(InfixError::InvalidRange { begin: 3, end: 9, len: 4 })
        );
        assert_eq!(
            core.try_get(3).err(),
            Some(InfixError::OutOfRange { index: 3, len: 3 })
        );
        assert!(core.get(0).is_none());
        assert_eq!(core.get(2).map(|x| x[0]), Some(b'A'));
        assert_eq!(unsafe { core.get_unchecked(2) }.as_slice(), b"A");
    }

    #[test]
    fn test_computed_coordinates() {
        let strings = ["ACGTACGT", "TTTT"];
        // Every other infix is taken from the second member
        let coords = from_fn(8, |i| {
            let id = (i % 2) as u16;
            (id, id + 2, id, 0u16)
        });
        let core = StringSetInfixes::new(&strings, &coords);

        assert_eq!(core.len(), 8);
        assert_eq!(core.at(0).as_slice(), b"AC");
        assert_eq!(core.at(1).as_slice(), b"TT");
        assert_eq!(string_id(&core.at(7)), 1);
        assert!(std::ptr::eq(*core.at(6).string(), &strings[0]));
    }
}
