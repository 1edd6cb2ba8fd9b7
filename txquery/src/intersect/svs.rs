use super::TwoSetAlgorithmFnGeneric;

/// Pairwise sequential intersection of k ascending sets.
///
/// The running result starts as `sets[0]` and is intersected with each
/// following set in turn using `twoset_fn`. Once the running result is empty
/// the remaining sets are skipped. A single set is its own intersection and
/// no sets intersect to nothing.
///
/// `out` and `buf` must each hold at least `sets[0].len()` elements. The
/// result is left in `out` and its length returned.
pub fn svs<T: Ord + Copy>(
    twoset_fn: TwoSetAlgorithmFnGeneric<T>,
    sets: &[&[T]],
    out: &mut [T],
    buf: &mut [T]) -> usize
{
    let Some(first) = sets.first() else {
        return 0;
    };

    let mut count = first.len();
    out[..count].copy_from_slice(first);

    for &set in sets.iter().skip(1) {
        if count == 0 {
            break;
        }
        count = twoset_fn((&out[..count], set), buf);
        out[..count].copy_from_slice(&buf[..count]);
    }

    count
}
