use crate::primitives::is_sorted;

sort_impl!("bubble_sort_stable");

/// Sorts the slice in ascending order.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) in every case,
/// including already sorted input.
///
/// # Current implementation
///
/// Each pass walks the unsorted prefix `v[..=i]` and swaps every adjacent pair that is out of
/// order, which carries the largest element of the prefix to position `i`. The boundary `i`
/// shrinks from `len - 1` to `1`. Passes never stop early.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    tracing::trace!(len = v.len(), "bubble sort");

    bubble_sort(v);
}

fn bubble_sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();

    for i in (1..len).rev() {
        for j in 0..i {
            // Only a strict inversion swaps, equal neighbours keep their order.
            if !is_sorted(&v[j..=j + 1]) {
                v.swap(j, j + 1);
            }
        }
    }
}
