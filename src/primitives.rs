use tracing::debug;

use crate::SortError;

/// Returns `true` if `v` is in ascending order.
///
/// Empty and one-element slices are sorted.
#[inline]
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    // Stops at the first inversion.
    v.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Returns `true` if the inclusive range `v[lo..=hi]` is in ascending order.
///
/// `lo == hi` is always sorted. Fails with [`SortError::InvalidRange`] if `lo > hi`, and with
/// [`SortError::IndexOutOfRange`] if `hi` is not a position in `v`.
pub fn is_sorted_range<T>(v: &[T], lo: usize, hi: usize) -> Result<bool, SortError>
where
    T: Ord,
{
    check_range(v.len(), lo, hi)?;

    Ok(is_sorted(&v[lo..=hi]))
}

/// Exchanges `v[i]` and `v[j]`.
///
/// Fails with [`SortError::IndexOutOfRange`] before touching `v` if either index is out of
/// bounds. `i == j` is a no-op.
pub fn swap<T>(v: &mut [T], i: usize, j: usize) -> Result<(), SortError> {
    let len = v.len();
    check_index(len, i)?;
    check_index(len, j)?;

    v.swap(i, j);
    Ok(())
}

/// Validates the inclusive range `[lo, hi]` against a sequence of length `len`.
pub(crate) fn check_range(len: usize, lo: usize, hi: usize) -> Result<(), SortError> {
    if lo > hi {
        debug!(lo, hi, "rejected inverted range");
        return Err(SortError::InvalidRange { lo, hi });
    }

    check_index(len, hi)
}

fn check_index(len: usize, index: usize) -> Result<(), SortError> {
    if index >= len {
        debug!(index, len, "rejected out of range index");
        return Err(SortError::IndexOutOfRange { index, len });
    }

    Ok(())
}
