/// Declares a `SortImpl` for the module it is invoked in, forwarding to the module's `sort`.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }
        }
    };
}

pub mod error;
pub mod keyed;
pub mod primitives;
pub mod stable;
pub mod total;

pub use error::SortError;
pub use keyed::{IdGenerator, Keyed};
pub use primitives::{is_sorted, is_sorted_range, swap};
pub use total::{F32Total, F64Total};
