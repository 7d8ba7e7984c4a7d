// Instead of making a custom trait here I must support Rust builtin traits for containers
// once they are ready: https://internals.rust-lang.org/t/traits-that-should-be-in-std-but-arent/3002

use std::rc::Rc;
use std::sync::Arc;

use impl_tools::autoimpl;

/// Fixed-length, randomly indexable storage of symbols.
///
/// Symbols are returned by value, so the storage is free to pack them (e.g. 2 bits per
/// nucleotide) or to compute them on the fly.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>, Rc<T>, Arc<T>)]
pub trait Sequence {
    /// The type of individual symbols.
    type Symbol: Copy;

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no symbols.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the symbol at the given position, `pos` must be less than [`Sequence::len`].
    fn at(&self, pos: usize) -> Self::Symbol;
}

/// Sequence whose symbols are laid out contiguously in memory.
///
/// Allows views to hand out plain slices and references to individual symbols.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>, Rc<T>, Arc<T>)]
pub trait ContiguousSequence: Sequence {
    /// All symbols of the sequence.
    fn as_slice(&self) -> &[Self::Symbol];
}

/// Sequence that allows in-place edits of its symbols.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box<T>)]
pub trait SequenceMut: ContiguousSequence {
    fn as_mut_slice(&mut self) -> &mut [Self::Symbol];
}

macro_rules! impl_slice_like {
    ($([$($generics:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> Sequence for $ty {
                type Symbol = T;

                #[inline(always)]
                fn len(&self) -> usize {
                    <[T]>::len(self)
                }

                #[inline(always)]
                fn at(&self, pos: usize) -> T {
                    self[pos]
                }
            }

            impl<$($generics)*> ContiguousSequence for $ty {
                #[inline(always)]
                fn as_slice(&self) -> &[T] {
                    self
                }
            }

            impl<$($generics)*> SequenceMut for $ty {
                #[inline(always)]
                fn as_mut_slice(&mut self) -> &mut [T] {
                    self
                }
            }
        )+
    };
}

impl_slice_like!(
    [T: Copy] [T],
    [T: Copy] Vec<T>,
    [T: Copy, const N: usize] [T; N],
);

macro_rules! impl_text {
    ($($ty:ty),+) => {
        $(
            impl Sequence for $ty {
                type Symbol = u8;

                #[inline(always)]
                fn len(&self) -> usize {
                    self.as_bytes().len()
                }

                #[inline(always)]
                fn at(&self, pos: usize) -> u8 {
                    self.as_bytes()[pos]
                }
            }

            impl ContiguousSequence for $ty {
                #[inline(always)]
                fn as_slice(&self) -> &[u8] {
                    self.as_bytes()
                }
            }
        )+
    };
}

impl_text!(str, String);
