use std::sync::Once;
use env_logger::Env;
use tinyrand::StdRand;

use crate::rand::uniform_f64;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
            .is_test(true) // Ensure it's suitable for test environment
            .init();
    });
}

/// Deterministic `(x, y)` samples for property style checks.
pub fn sample_axes(seed: u64, count: usize, min: f64, max: f64) -> Vec<(f64, f64)> {
    let mut rng: StdRand = crate::seeded_rng(seed);

    (0..count)
        .map(|_| (uniform_f64(&mut rng, min, max), uniform_f64(&mut rng, min, max)))
        .collect()
}

/// Like [`sample_axes`] but every axis is a whole number, which both
/// precisions store exactly.
pub fn sample_whole_axes(seed: u64, count: usize, min: f64, max: f64) -> Vec<(f64, f64)> {
    sample_axes(seed, count, min, max)
        .into_iter()
        .map(|(x, y)| (x.floor(), y.floor()))
        .collect()
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right, tolerance): (f64, f64, f64) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "assert_close failed: {} vs {} (tolerance {})",
            left,
            right,
            tolerance
        );
    }};
}

/// Expands to a `contract` test module running the shared vector suite
/// against one representation.
///
/// `$ctor` builds the representation from `(x, y)`; `$tolerance` is the
/// allowed absolute error for inputs the storage can't hold exactly.
#[macro_export]
macro_rules! vector_contract_tests {
    ($ctor:expr, $tolerance:expr) => {
        mod contract {
            use super::*;
            use core::f64::consts::PI;
            use $crate::math::vector2d::Vector2D;
            use $crate::math::{Axes, Vector};
            use $crate::test_common::{sample_axes, sample_whole_axes};
            use $crate::assert_close;

            const TOLERANCE: f64 = $tolerance;

            fn new(x: f64, y: f64) -> impl Vector + core::fmt::Debug + core::fmt::Display {
                ($ctor)(x, y)
            }

            #[test]
            fn creates_with_axes() {
                let v = new(1.0, 2.0);
                assert_eq!(v.x(), 1.0);
                assert_eq!(v.y(), 2.0);

                let v = new(0.0, 23.0);
                assert_eq!(v.x(), 0.0);
                assert_eq!(v.y(), 23.0);
            }

            #[test]
            fn set_axes_and_single_axis() {
                let mut v = new(1.0, 2.0);

                v.set_axes(33.0, 57.0);
                assert_eq!(v.to_array(), [33.0, 57.0]);

                v.set_x(10.0);
                assert_eq!(v.x(), 10.0);

                v.set_y(47.0);
                assert_eq!(v.y(), 47.0);

                v.set_x(1.0).set_y(2.0).add(&Vector2D { x: 1.0, y: 1.0 });
                assert_eq!(v.to_array(), [2.0, 3.0]);
            }

            #[test]
            fn formats_as_string() {
                let v = new(10.9, 20.3);

                assert_eq!(v.to_string(), format!("({}, {})", v.x(), v.y()));
                assert_eq!(v.to_string_rounded(), "(11, 20)");
                assert_eq!(new(645.0, -2.0).to_string(), "(645, -2)");
            }

            #[test]
            fn converts_to_array_and_object() {
                let v = new(645.0, 234.0);

                assert_eq!(v.to_array(), [645.0, 234.0]);
                assert_eq!(v.to_object(), Vector2D { x: 645.0, y: 234.0 });
            }

            #[test]
            fn add_mutates_receiver_only() {
                let mut v1 = new(2.0, 4.0);
                let v2 = new(3.0, 34.0);

                v1.add(&v2);
                assert_eq!(v1.to_array(), [5.0, 38.0]);
                assert_eq!(v2.to_array(), [3.0, 34.0]);
            }

            #[test]
            fn subtract_mutates_receiver_only() {
                let mut v1 = new(2.0, 4.0);
                let v2 = new(3.0, 34.0);

                v1.subtract(&v2);
                assert_eq!(v1.to_array(), [-1.0, -30.0]);
                assert_eq!(v2.to_array(), [3.0, 34.0]);
            }

            #[test]
            fn add_own_copy_doubles() {
                let mut v = new(2.5, -4.0);
                let copy = v.clone();

                v.add(&copy);
                assert_eq!(v.to_array(), [5.0, -8.0]);

                let copy = v.clone();
                v.multiply_by_vector(&copy);
                assert_eq!(v.to_array(), [25.0, 64.0]);
            }

            #[test]
            fn equals_before_and_not_after_change() {
                let mut v1 = new(3.0, 34.0);
                let v2 = new(3.0, 34.0);

                assert!(v1.equals(&v2));
                assert!(v2.equals(&v1));

                v1.add(&v2);
                assert!(!v1.equals(&v2));
                assert!(!v2.equals(&v1));
            }

            #[test]
            fn multiply_by_vector() {
                let mut v1 = new(5.0, 3.0);
                let v2 = new(3.0, 10.0);

                v1.mul_v(&v2);
                assert_eq!(v1.to_array(), [15.0, 30.0]);
                assert_eq!(v2.to_array(), [3.0, 10.0]);
            }

            #[test]
            fn divide_by_vector() {
                let mut v1 = new(10.0, 20.0);
                let v2 = new(2.0, 10.0);

                v1.div_v(&v2);
                assert_eq!(v1.to_array(), [5.0, 2.0]);
                assert_eq!(v2.to_array(), [2.0, 10.0]);
            }

            #[test]
            fn divide_by_zero_axis_is_not_trapped() {
                let mut v = new(1.0, 0.0);

                v.divide_by_vector(&new(0.0, 0.0));
                assert_eq!(v.x(), f64::INFINITY);
                assert!(v.y().is_nan());
            }

            #[test]
            fn multiply_and_divide_by_scalar() {
                let mut v = new(5.0, 3.0);
                v.mul_s(3.0);
                assert_eq!(v.to_array(), [15.0, 9.0]);

                let mut v = new(6.0, 9.0);
                v.div_s(3.0);
                assert_eq!(v.to_array(), [2.0, 3.0]);
            }

            #[test]
            fn magnitude_and_length() {
                let v = new(6.0, 9.0);
                let len = (v.x() * v.x() + v.y() * v.y()).sqrt();

                assert_eq!(v.magnitude(), len);
                assert_eq!(v.length(), len);
                assert_eq!(v.length_sq(), 117.0);
                assert_eq!(new(3.0, 4.0).magnitude(), 5.0);
            }

            #[test]
            fn normalise_and_aliases_match_manual_division() {
                for alias in 0..3 {
                    let mut v1 = new(6.0, 9.0);
                    let len = v1.magnitude();
                    let mut v2 = new(v1.x() / len, v1.y() / len);

                    match alias {
                        0 => v1.normalise(),
                        1 => v1.normalize(),
                        _ => v1.unit(),
                    };
                    v1.round(2);
                    v2.round(2);

                    assert!(v1.equals(&v2), "{} != {}", v1, v2);
                }
            }

            #[test]
            fn normalise_yields_unit_length() {
                for (x, y) in sample_axes(11, 64, -500.0, 500.0) {
                    let mut v = new(x, y);
                    if v.magnitude() == 0.0 {
                        continue;
                    }

                    v.normalise();
                    assert_close!(v.magnitude(), 1.0, 1e-5);
                }
            }

            #[test]
            fn normalise_zero_vector_is_nan() {
                let mut v = new(0.0, 0.0);

                v.normalise();
                assert!(v.x().is_nan());
                assert!(v.y().is_nan());
            }

            #[test]
            fn dot_product() {
                let v1 = new(6.0, 9.0);
                let v2 = new(10.0, 9.0);

                assert_eq!(v1.dot(&v2), 6.0 * 10.0 + 9.0 * 9.0);
            }

            #[test]
            fn dot_self_is_length_sq_and_cross_self_is_zero() {
                for (x, y) in sample_axes(5, 64, -1000.0, 1000.0) {
                    let v = new(x, y);

                    assert_eq!(v.dot(&v), v.length_sq());
                    assert_eq!(v.cross(&v), 0.0);
                }
            }

            #[test]
            fn cross_product() {
                let v1 = new(12.0, 32.0);
                let v2 = new(2.0, 56.0);

                assert_eq!(v1.cross(&v2), 608.0);
                assert_eq!(v1.to_array(), [12.0, 32.0]);
                assert_eq!(v2.to_array(), [2.0, 56.0]);
            }

            #[test]
            fn reverse_twice_restores() {
                let mut v = new(6.0, 9.0);

                v.reverse();
                assert_eq!(v.to_array(), [-6.0, -9.0]);

                v.reverse();
                assert_eq!(v.to_array(), [6.0, 9.0]);
            }

            #[test]
            fn distance_between_vectors() {
                let v1 = new(3.0, 6.0);
                let v2 = new(6.0, 9.0);

                assert_eq!(v1.distance(&v2), 4.242640687119285);
                assert_eq!(v1.to_array(), [3.0, 6.0]);
                assert_eq!(v2.to_array(), [6.0, 9.0]);
            }

            #[test]
            fn zero_clears_axes() {
                let mut v = new(6.0, 9.0);

                v.zero();
                assert_eq!(v.to_array(), [0.0, 0.0]);
            }

            #[test]
            fn round_to_two_places() {
                let mut v = new(5.222, 0.592);

                v.round(2);
                assert_close!(v.x(), 5.22, TOLERANCE);
                assert_close!(v.y(), 0.59, TOLERANCE);
            }

            #[test]
            fn round_fast_matches_round_for_positive_axes() {
                let mut a = new(5.222, 0.592);
                let mut b = a.clone();

                a.round(2);
                b.round_fast(2);
                assert!(a.equals(&b), "{} != {}", a, b);
            }

            #[test]
            fn round_fast_truncates_negative_axes_towards_zero() {
                let mut a = new(-5.227, -0.5);
                let mut b = a.clone();

                a.round(2);
                b.round_fast(2);
                assert_close!(a.x(), -5.23, TOLERANCE);
                assert_close!(b.x(), -5.22, TOLERANCE);
                assert_eq!(a.y(), -0.5);
                assert_close!(b.y(), -0.49, TOLERANCE);
            }

            #[test]
            fn abs_makes_axes_positive() {
                let mut v = new(-1.43, -8.3);

                v.abs();
                assert_close!(v.x(), 1.43, TOLERANCE);
                assert_close!(v.y(), 8.3, TOLERANCE);
            }

            #[test]
            fn clone_is_independent_copy() {
                let v1 = new(47.0, 345.0);
                let mut copy = v1.clone();

                assert!(copy.equals(&v1));

                copy.add(&Vector2D { x: 1.0, y: 1.0 });
                assert_eq!(v1.to_array(), [47.0, 345.0]);
                assert_eq!(copy.to_array(), [48.0, 346.0]);
            }

            #[test]
            fn add_then_subtract_restores() {
                for (x, y) in sample_whole_axes(3, 64, -10000.0, 10000.0) {
                    let mut v = new(x, y);
                    let w = new(y, x);

                    v.add(&w).subtract(&w);
                    assert_close!(v.x(), x, TOLERANCE);
                    assert_close!(v.y(), y, TOLERANCE);
                }
            }

            #[test]
            fn rotate_zero_is_identity() {
                for (x, y) in sample_axes(9, 64, -100.0, 100.0) {
                    let mut v = new(x, y);
                    let before = v.clone();

                    v.rotate(0.0);
                    assert!(v.equals(&before));
                }
            }

            #[test]
            fn rotate_reads_both_axes_before_writing() {
                let mut v = new(1.0, 0.0);
                v.rotate(PI / 2.0);
                assert_close!(v.x(), 0.0, 1e-6);
                assert_close!(v.y(), 1.0, 1e-6);

                let mut v = new(3.0, 4.0);
                v.rotate(PI);
                assert_close!(v.x(), -3.0, 1e-6);
                assert_close!(v.y(), -4.0, 1e-6);
            }

            #[test]
            fn chained_operations() {
                let mut v = new(1.0, 2.0);

                v.mul_s(4.0).add(&new(1.0, 1.0)).reverse().abs().div_s(5.0);
                assert_eq!(v.x(), 1.0);
                assert_close!(v.y(), 1.8, TOLERANCE);
            }

            #[test]
            fn same_operand_on_both_sides() {
                use $crate::factory::{add, cross, dot, multiply_vector_by_vector, subtract};

                let v = new(1.5, -2.0);

                assert_eq!(add(&v, &v).to_array(), [3.0, -4.0]);
                assert_eq!(subtract(&v, &v).to_array(), [0.0, 0.0]);
                assert_eq!(multiply_vector_by_vector(&v, &v).to_array(), [2.25, 4.0]);
                assert_eq!(cross(&v, &v), 0.0);
                assert_eq!(dot(&v, &v), v.length_sq());
                assert_eq!(v.to_array(), [1.5, -2.0]);

                let mut w = new(1.5, -2.0);
                let copy = w.clone();
                w.add(&copy).mul_v(&copy);
                assert_eq!(w.to_array(), [4.5, 8.0]);
            }
        }
    };
}
