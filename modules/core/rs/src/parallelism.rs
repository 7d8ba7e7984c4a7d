use std::ops::Range;
use std::thread::available_parallelism;

use eyre::Result;

/// Resolve the requested number of threads against `max` available ones.
/// Positive values are capped at `max`, negative values mean "all but N" (at least one thread),
/// and zero falls back to a single thread.
fn resolve(requested: isize, max: isize) -> usize {
    if requested > 0 {
        requested.min(max) as usize
    } else if requested < 0 {
        (max + 1 + requested).max(1) as usize
    } else {
        1
    }
}

/// Number of worker threads to use for the requested value, see [`resolve`] for the rules.
pub fn available(requested: isize) -> Result<usize> {
    let max = available_parallelism()?.get() as isize;
    Ok(resolve(requested, max))
}

/// Split `0..len` into at most `parts` contiguous, non-empty ranges of near-equal length.
/// Used to hand out disjoint slices of an infix collection to independent workers.
pub fn partition(len: usize, parts: usize) -> impl ExactSizeIterator<Item = Range<usize>> {
    let parts = parts.clamp(1, len.max(1));
    let (step, rem) = (len / parts, len % parts);
    (0..parts).map(move |i| {
        let start = i * step + i.min(rem);
        let end = start + step + usize::from(i < rem);
        start..end
    })
}
