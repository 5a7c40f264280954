//! l2math smoke suite: angle conversion and trigonometric identities.
//!
//! Values are compared after rounding to a fixed number of decimal places,
//! matching how the bindings smoke test has always checked them.

use eztest_core::{TestOutcome, ensure, ensure_approx_eq, pass};

use super::SuiteCase;

/// 30 degrees in radians, to 10 places.
pub const THIRTY_DEGREES: f64 = 0.523_598_775_6;
/// 60 degrees in radians, to 10 places.
pub const SIXTY_DEGREES: f64 = 1.047_197_551_2;

const PLACES: u32 = 10;

/// Suite table, in registration order.
pub const CASES: &[SuiteCase] = &[
    ("deg2rad_thirty", deg2rad_thirty),
    ("deg2rad_sixty", deg2rad_sixty),
    ("sin_thirty_equals_cos_sixty", sin_thirty_equals_cos_sixty),
    ("rad2deg_round_trip", rad2deg_round_trip),
    ("pythagorean_identity", pythagorean_identity),
];

#[must_use]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[must_use]
pub fn rad2deg(radians: f64) -> f64 {
    radians.to_degrees()
}

fn deg2rad_thirty() -> TestOutcome {
    ensure_approx_eq!(deg2rad(30.0), THIRTY_DEGREES, PLACES);
    pass!()
}

fn deg2rad_sixty() -> TestOutcome {
    ensure_approx_eq!(deg2rad(60.0), SIXTY_DEGREES, PLACES);
    pass!()
}

fn sin_thirty_equals_cos_sixty() -> TestOutcome {
    let thirty = deg2rad(30.0);
    let sixty = deg2rad(60.0);
    ensure_approx_eq!(thirty.sin(), sixty.cos(), PLACES);
    pass!()
}

fn rad2deg_round_trip() -> TestOutcome {
    for degrees in [-270.0, -45.0, 0.0, 30.0, 90.0, 180.0, 359.5] {
        ensure_approx_eq!(rad2deg(deg2rad(degrees)), degrees, PLACES);
    }
    pass!()
}

fn pythagorean_identity() -> TestOutcome {
    for step in 0..=72_i32 {
        let theta = deg2rad(f64::from(step) * 5.0);
        let sum = theta.sin().powi(2) + theta.cos().powi(2);
        ensure!(
            (sum - 1.0).abs() < 1e-12,
            "sin^2 + cos^2 = {sum} at {} degrees",
            step * 5
        );
    }
    pass!()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_case_passes() {
        for (name, predicate) in CASES {
            assert_eq!(predicate(), TestOutcome::Pass, "{name}");
        }
    }

    #[test]
    fn conversions_are_inverse() {
        assert!((deg2rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((rad2deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }
}
