use std::mem::size_of;
use std::ptr;

use crate::primitives::check_range;
use crate::SortError;

sort_impl!("merge_sort_stable");

/// Sorts the slice in ascending order.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Top-down recursive merge sort. Every merge allocates scratch space for the range it merges
/// and frees it before returning, so at most *O*(*n*) auxiliary memory is live at any time.
/// Recursion depth is *O*(log(*n*)).
///
/// If `Ord::cmp` panics, `v` still holds exactly the elements it was called with, in
/// unspecified order.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    tracing::trace!(len, "merge sort");

    if len < 2 {
        return;
    }

    merge_sort(v, 0, len - 1);
}

/// Sorts the inclusive range `v[lo..=hi]`, leaving every other position untouched.
///
/// Fails with [`SortError::InvalidRange`] if `lo > hi`, and with [`SortError::IndexOutOfRange`]
/// if `hi` is not a position in `v`. Nothing is mutated on failure.
pub fn sort_range<T>(v: &mut [T], lo: usize, hi: usize) -> Result<(), SortError>
where
    T: Ord,
{
    check_range(v.len(), lo, hi)?;
    tracing::trace!(lo, hi, "merge sort range");

    if size_of::<T>() != 0 {
        merge_sort(v, lo, hi);
    }

    Ok(())
}

/// Sorts `v[lo..=hi]`. Requires `lo <= hi < v.len()`.
fn merge_sort<T>(v: &mut [T], lo: usize, hi: usize)
where
    T: Ord,
{
    if lo == hi {
        return;
    }

    // Rounds down, for odd lengths the left run takes the extra element.
    let mid = lo + (hi - lo) / 2;

    merge_sort(v, lo, mid);
    merge_sort(v, mid + 1, hi);

    merge(v, lo, mid, hi);
}

/// Merges the sorted runs `v[lo..=mid]` and `v[mid + 1..=hi]` into one sorted run.
fn merge<T>(v: &mut [T], lo: usize, mid: usize, hi: usize)
where
    T: Ord,
{
    let run = &mut v[lo..=hi];
    let len = run.len();
    let left_end = mid - lo + 1;

    // The buffer keeps length 0. It only ever holds shallow copies of elements still owned by
    // `run`, so if a comparison panics the copies are simply forgotten and `run` is unchanged.
    let mut buf: Vec<T> = Vec::with_capacity(len);

    // SAFETY: `left` stays within `0..=left_end` and `right` within `left_end..=len`, so every
    // read is in bounds of `run`, and the one-past-the-end pointers are only used for zero-length
    // copies. Each position of `run` is copied into `buf` exactly once, which makes the first
    // `len` slots of `buf` a permutation of `run`. Writing them back moves every element exactly
    // once. `buf` is a separate allocation, so the copies never overlap.
    unsafe {
        let base = run.as_mut_ptr();
        let out = buf.as_mut_ptr();

        let mut left = 0;
        let mut right = left_end;
        let mut written = 0;

        while left < left_end && right < len {
            // Ties take from the left run.
            let src = if *base.add(left) <= *base.add(right) {
                left += 1;
                base.add(left - 1)
            } else {
                right += 1;
                base.add(right - 1)
            };

            ptr::copy_nonoverlapping(src, out.add(written), 1);
            written += 1;
        }

        // At most one run has elements left. Both drains go up to and including its last element.
        let left_rest = left_end - left;
        ptr::copy_nonoverlapping(base.add(left), out.add(written), left_rest);
        written += left_rest;

        let right_rest = len - right;
        ptr::copy_nonoverlapping(base.add(right), out.add(written), right_rest);
        written += right_rest;

        debug_assert_eq!(written, len);

        // `buf[k]` goes back to `run[k]`.
        ptr::copy_nonoverlapping(out, base, len);
    }
}
