use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// Unsigned integers that can address symbols inside a sequence.
///
/// The conversion is a plain `as` cast: coordinates are assumed to fit the platform's `usize`,
/// and no range checks are made on the hot path.
pub trait Position: PrimUInt + Send + Sync + 'static {
    fn as_usize(self) -> usize;
}

macro_rules! impl_position {
    ($($t:ty),*) => {
        $(
            impl Position for $t {
                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_position!(u8, u16, u32, u64, usize);
