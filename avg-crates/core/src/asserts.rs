//! Leveled internal assertions. Checks at or below [`AVG_ASSERT_LEVEL_DEFINITION`] are active;
//! the level is raised in tests and with the `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const AVG_ASSERT_LEVEL_DEFINITION: u8 = AVG_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const AVG_ASSERT_LEVEL_DEFINITION: u8 = AVG_ASSERT_MODERATE;

pub const AVG_ASSERT_SIMPLE: u8 = 1;
pub const AVG_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! avg_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::AVG_ASSERT_LEVEL_DEFINITION >= $crate::asserts::AVG_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! avg_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::AVG_ASSERT_LEVEL_DEFINITION >= $crate::asserts::AVG_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
