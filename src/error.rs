use thiserror::Error;

/// Contract violations reported by the checked entry points.
///
/// All checks run before the slice is touched, so an `Err` always leaves the input as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid range: start index {lo} is greater than end index {hi}")]
    InvalidRange { lo: usize, hi: usize },
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
