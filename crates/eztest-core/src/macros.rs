//! Assertion helpers for predicates returning [`TestOutcome`](crate::TestOutcome).
//!
//! Each macro returns early from the enclosing function with a failure
//! outcome, so predicates read top to bottom and end with [`pass!`].

/// Explicit passing outcome.
#[macro_export]
macro_rules! pass {
    () => {
        $crate::TestOutcome::Pass
    };
}

/// Fail the enclosing predicate unless `cond` holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            return $crate::TestOutcome::fail(concat!("condition failed: ", stringify!($cond)));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return $crate::TestOutcome::fail(format!($($arg)+));
        }
    };
}

/// Fail the enclosing predicate unless `left == right`.
#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return $crate::TestOutcome::fail(format!(
                        "{} != {}: {:?} vs {:?}",
                        stringify!($left),
                        stringify!($right),
                        left,
                        right
                    ));
                }
            }
        }
    };
}

/// Fail the enclosing predicate unless `left` and `right` agree after both
/// are rounded to `places` decimal places.
#[macro_export]
macro_rules! ensure_approx_eq {
    ($left:expr, $right:expr, $places:expr $(,)?) => {
        match ($left, $right) {
            (left, right) => {
                let l = $crate::macros::round_to(left, $places);
                let r = $crate::macros::round_to(right, $places);
                if l != r {
                    return $crate::TestOutcome::fail(format!(
                        "{} != {} at {} places: {} vs {}",
                        stringify!($left),
                        stringify!($right),
                        $places,
                        l,
                        r
                    ));
                }
            }
        }
    };
}

/// Round `value` to `places` decimal places.
///
/// Values at or above 2^52 in magnitude have no fractional digits and are
/// returned unchanged, as is any value whose scaled form is not finite.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() || value.abs() >= 2f64.powi(52) {
        return value;
    }
    let scale = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
