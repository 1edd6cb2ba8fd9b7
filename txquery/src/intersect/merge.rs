use std::cmp::Ordering;

/// Two-pointer intersection of two ascending, duplicate free arrays.
///
/// Advances the cursor holding the smaller value; on equality the value is
/// emitted and both cursors advance. Cost is linear in the elements actually
/// scanned, and the scan stops as soon as either input is exhausted.
///
/// # Generic Parameters
/// * `OUT` - Whether the function should write the intersection to `out`,
/// otherwise it only calculates the size of the intersection.
///
/// `out` must hold at least `min(sets.0.len(), sets.1.len())` elements when
/// `OUT` is set.
pub fn zipper<T: Ord + Copy, const OUT: bool>(sets: (&[T], &[T]), out: &mut [T]) -> usize {
    let mut idx_0 = 0;
    let mut idx_1 = 0;
    let mut count = 0;

    while idx_0 < sets.0.len() && idx_1 < sets.1.len() {
        let value_0 = sets.0[idx_0];
        let value_1 = sets.1[idx_1];

        match value_0.cmp(&value_1) {
            Ordering::Less => idx_0 += 1,

            Ordering::Greater => idx_1 += 1,

            Ordering::Equal => {
                if OUT {
                    out[count] = value_0;
                }
                count += 1;
                idx_0 += 1;
                idx_1 += 1;
            }
        }
    }

    count
}
