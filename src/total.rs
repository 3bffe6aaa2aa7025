use std::cmp::Ordering;
use std::fmt;

// Floats only implement `PartialOrd`. These wrappers order by IEEE 754 `totalOrder`, which puts
// -0.0 before +0.0 and sorts NaNs by sign to either end.
macro_rules! total_float {
    ($name:ident, $float:ty) => {
        #[derive(Debug, Clone, Copy, Default)]
        #[repr(transparent)]
        pub struct $name(pub $float);

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl From<$float> for $name {
            fn from(val: $float) -> Self {
                Self(val)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

total_float!(F32Total, f32);
total_float!(F64Total, f64);
