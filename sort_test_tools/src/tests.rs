use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
const TEST_SIZES: [usize; 22] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100,
];

#[cfg(feature = "large_test_sizes")]
const TEST_SIZES: [usize; 27] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 777,
    1_000, 2_048,
];

/// Element types the typed tests are instantiated with.
pub trait TestValue: Ord + Clone + Debug {
    fn from_i32(val: i32) -> Self;
}

impl TestValue for i32 {
    fn from_i32(val: i32) -> Self {
        val
    }
}

impl TestValue for u64 {
    fn from_i32(val: i32) -> Self {
        // Keeps the relative order of the inputs.
        (val as i64 - i32::MIN as i64) as u64
    }
}

impl TestValue for String {
    fn from_i32(val: i32) -> Self {
        format!("{val}")
    }
}

fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();

    let is_small_test = v.len() <= 100;
    let original_clone = v.to_vec();

    let mut stdlib_sorted_vec = v.to_vec();
    stdlib_sorted_vec.sort();

    S::sort(v);

    if is_small_test {
        assert_eq!(
            v,
            stdlib_sorted_vec,
            "{} failed. Original: {original_clone:?}, seed: {seed}",
            S::name()
        );
    } else if v != stdlib_sorted_vec {
        panic!(
            "{} failed for len {}. Seed: {seed}",
            S::name(),
            original_clone.len()
        );
    }
}

fn test_impl<T, S>(pattern_fn: impl Fn(usize) -> Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<T, S>(test_data.as_mut_slice());
    }
}

// --- TESTS ---

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<(), S>(&mut [(), (), ()]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

pub fn fixed_cases<S: Sort>() {
    let mut v = [5, 3, 1, 4, 2];
    S::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);

    let mut v = [2, 2, 1];
    S::sort(&mut v);
    assert_eq!(v, [1, 2, 2]);

    let mut v = [i32::MAX, i32::MIN, 0, -1, 1];
    S::sort(&mut v);
    assert_eq!(v, [i32::MIN, -1, 0, 1, i32::MAX]);

    let mut v = ["pear", "apple", "fig", "apple"];
    S::sort(&mut v);
    assert_eq!(v, ["apple", "apple", "fig", "pear"]);
}

pub fn random<S: Sort, T: TestValue>() {
    test_impl::<T, S>(|test_size| {
        patterns::random(test_size)
            .into_iter()
            .map(T::from_i32)
            .collect()
    });
}

pub fn random_d2<S: Sort>() {
    test_impl::<i32, S>(|test_size| patterns::random_uniform(test_size, 0..2));
}

pub fn random_d20<S: Sort>() {
    test_impl::<i32, S>(|test_size| patterns::random_uniform(test_size, 0..20));
}

pub fn random_zipf<S: Sort>() {
    test_impl::<i32, S>(|test_size| patterns::random_zipf(test_size, 1.0));
}

pub fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

pub fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

pub fn saw_ascending<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_ascending(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn sorted_idempotent<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut v = patterns::random_uniform(test_size, -50..50);
        S::sort(&mut v);
        let once = v.clone();
        S::sort(&mut v);
        assert_eq!(v, once, "{} is not idempotent, len {test_size}", S::name());
    }
}

/// Orders by `key` only, `pos` records where the element started.
#[derive(Debug, Clone)]
struct StabilityProbe {
    key: i32,
    pos: usize,
}

impl PartialEq for StabilityProbe {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for StabilityProbe {}

impl PartialOrd for StabilityProbe {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StabilityProbe {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

pub fn stability<S: Sort>() {
    for test_size in TEST_SIZES {
        // Few distinct keys, so most elements have equal neighbours after sorting.
        let mut v: Vec<StabilityProbe> = patterns::random_uniform(test_size, 0..8)
            .into_iter()
            .enumerate()
            .map(|(pos, key)| StabilityProbe { key, pos })
            .collect();

        // slice::sort is stable.
        let mut expected = v.clone();
        expected.sort();

        S::sort(&mut v);

        let positions: Vec<usize> = v.iter().map(|probe| probe.pos).collect();
        let expected_positions: Vec<usize> = expected.iter().map(|probe| probe.pos).collect();
        assert_eq!(
            positions,
            expected_positions,
            "{} reordered equal elements, seed: {}",
            S::name(),
            patterns::random_init_seed()
        );
    }
}

thread_local! {
    static COMPARISONS_LEFT: Cell<usize> = Cell::new(usize::MAX);
}

/// Panics once the thread's comparison budget runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PanicAfter<T>(T);

impl<T: Ord> PartialOrd for PanicAfter<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for PanicAfter<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        COMPARISONS_LEFT.with(|left| {
            let remaining = left.get();
            if remaining == 0 {
                panic!("comparison budget exhausted");
            }
            left.set(remaining - 1);
        });

        self.0.cmp(&other.0)
    }
}

pub fn panic_retain_original_set<S: Sort, T: TestValue>() {
    for test_size in TEST_SIZES.into_iter().filter(|len| *len >= 2) {
        let original: Vec<T> = patterns::random(test_size)
            .into_iter()
            .map(T::from_i32)
            .collect();
        let mut v: Vec<PanicAfter<T>> = original.iter().cloned().map(PanicAfter).collect();

        // Any sort of len >= 2 needs at least len - 1 comparisons.
        COMPARISONS_LEFT.with(|left| left.set((test_size - 1) / 2));
        let res = panic::catch_unwind(AssertUnwindSafe(|| S::sort(&mut v)));
        COMPARISONS_LEFT.with(|left| left.set(usize::MAX));

        assert!(res.is_err(), "{} did not call cmp enough", S::name());

        let mut remaining: Vec<T> = v.into_iter().map(|val| val.0).collect();
        remaining.sort();
        let mut expected = original;
        expected.sort();
        assert_eq!(
            remaining,
            expected,
            "{} lost or duplicated elements after a panic in cmp",
            S::name()
        );
    }
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
}

#[macro_export]
macro_rules! instantiate_typed_sort_test {
    ($sort_impl:ty, $test_fn_name:ident, $($type_name:ident => $type:ty),+) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<$test_fn_name _ $type_name>]() {
                    $crate::tests::$test_fn_name::<$sort_impl, $type>();
                }
            }
        )+
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_cases);
        $crate::instantiate_typed_sort_test!(
            $sort_impl,
            random,
            i32 => i32,
            u64 => u64,
            string => String
        );
        $crate::instantiate_sort_test_inner!($sort_impl, random_d2);
        $crate::instantiate_sort_test_inner!($sort_impl, random_d20);
        $crate::instantiate_sort_test_inner!($sort_impl, random_zipf);
        $crate::instantiate_sort_test_inner!($sort_impl, ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, descending);
        $crate::instantiate_sort_test_inner!($sort_impl, all_equal);
        $crate::instantiate_sort_test_inner!($sort_impl, saw_ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, sorted_idempotent);
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
        $crate::instantiate_typed_sort_test!(
            $sort_impl,
            panic_retain_original_set,
            i32 => i32,
            string => String
        );
    };
}
