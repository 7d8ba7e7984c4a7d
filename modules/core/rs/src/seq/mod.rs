pub use sequence::{ContiguousSequence, Sequence, SequenceMut};
pub use sequence_set::SequenceSet;

mod sequence;
mod sequence_set;
