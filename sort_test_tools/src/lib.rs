pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;
}

pub mod patterns;
pub mod tests;

// Re-exported so that `instantiate_sort_tests!` expands in crates that do not depend on paste.
#[doc(hidden)]
pub use paste;
