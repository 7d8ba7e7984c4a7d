use derive_more::{Display, Error};

/// Errors reported by the checked access paths of infix views.
///
/// The fast paths (`Index`, `at`, `get_unchecked`) never produce these: violating their
/// preconditions is a caller bug.
#[derive(Display, Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InfixError {
    /// Index is outside of a view or a collection of views.
    #[display("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Coordinates are reversed (begin > end) or run past the end of the parent sequence.
    #[display("invalid infix [{begin}, {end}) for a parent of length {len}")]
    InvalidRange { begin: usize, end: usize, len: usize },
    /// Owner id doesn't point to a member of the sequence set.
    #[display("string id {id} is out of range for a sequence set of size {len}")]
    InvalidOwnerId { id: usize, len: usize },
}

impl InfixError {
    /// Checks that `index` addresses one of `len` elements.
    #[inline(always)]
    pub fn check_index(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::OutOfRange { index, len })
        }
    }

    /// Checks that `[begin, end)` is a well-formed range inside a parent of length `len`.
    #[inline(always)]
    pub fn check_range(begin: usize, end: usize, len: usize) -> Result<(), Self> {
        if begin <= end && end <= len {
            Ok(())
        } else {
            Err(Self::InvalidRange { begin, end, len })
        }
    }
}
