//! Merge based intersection of ascending postings lists.

pub mod merge;
pub mod svs;

pub use {
    merge::*,
    svs::*,
};

use crate::visitor::Visitor;

/// Two-set intersection writing into `out`, returning the result length.
/// `OUT = false` only counts.
pub type TwoSetAlgorithmFnGeneric<T> = fn((&[T], &[T]), &mut [T]) -> usize;

/// Intersects any number of ascending sets with [svs] over [zipper].
///
/// No sets intersect to the empty set.
pub fn run_svs<T, S>(sets: &[S], visitor: &mut dyn Visitor<T>)
where
    T: Ord + Copy + Default,
    S: AsRef<[T]>,
{
    let Some(first) = sets.first() else {
        return;
    };

    let refs: Vec<&[T]> = sets.iter().map(|s| s.as_ref()).collect();
    let capacity = first.as_ref().len();
    let mut out = vec![T::default(); capacity];
    let mut buf = vec![T::default(); capacity];

    let count = svs(zipper::<T, true>, &refs, &mut out, &mut buf);

    for &value in &out[..count] {
        visitor.visit(value);
    }
}
