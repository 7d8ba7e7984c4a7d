use std::rc::Rc;
use std::sync::Arc;

use impl_tools::autoimpl;

use super::sequence::Sequence;
use crate::error::InfixError;

/// Indexed set of independent sequences of arbitrary lengths.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>, Rc<T>, Arc<T>)]
pub trait SequenceSet {
    type Member: Sequence;

    /// All member sequences, addressed by their string id.
    fn members(&self) -> &[Self::Member];

    /// Number of member sequences.
    #[inline(always)]
    fn len(&self) -> usize {
        self.members().len()
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Member sequence with the given id. Panics if `id` is out of range.
    #[inline(always)]
    fn member(&self, id: usize) -> &Self::Member {
        &self.members()[id]
    }

    #[inline(always)]
    fn get(&self, id: usize) -> Option<&Self::Member> {
        self.members().get(id)
    }

    fn try_member(&self, id: usize) -> Result<&Self::Member, InfixError> {
        let members = self.members();
        members.get(id).ok_or(InfixError::InvalidOwnerId {
            id,
            len: members.len(),
        })
    }
}

impl<S: Sequence> SequenceSet for [S] {
    type Member = S;

    #[inline(always)]
    fn members(&self) -> &[S] {
        self
    }
}

impl<S: Sequence> SequenceSet for Vec<S> {
    type Member = S;

    #[inline(always)]
    fn members(&self) -> &[S] {
        self
    }
}

impl<S: Sequence, const N: usize> SequenceSet for [S; N] {
    type Member = S;

    #[inline(always)]
    fn members(&self) -> &[S] {
        self
    }
}
