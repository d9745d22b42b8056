use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use thiserror::Error;

use rootscan_core::{from_fn, try_from_fn};

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved};

#[test]
fn finds_square_root() {
    let function = from_fn(|x| x * x - 9.0);

    let solution =
        solve_unobserved(&function, [0.0, 10.0], &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    let root = solution.root.expect("root");
    assert_relative_eq!(root, 3.0, epsilon = 1e-8);
    assert!((root * root - 9.0).abs() < 1e-8);
}

#[test]
fn accepts_lower_bound_within_tolerance() {
    let function = from_fn(|x| x - 1e-10);

    let solution =
        solve_unobserved(&function, [0.0, 1.0], &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::LowerBound);
    assert_eq!(solution.root, Some(0.0));
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.to_string(), "Root found at lower bound.");
}

#[test]
fn accepts_upper_bound_within_tolerance() {
    let function = from_fn(|x| x - 2.0);

    let solution =
        solve_unobserved(&function, [-1.0, 2.0], &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::UpperBound);
    assert_eq!(solution.root, Some(2.0));
    assert_eq!(solution.iters, 0);
}

#[test]
fn lower_bound_wins_when_both_endpoints_are_roots() {
    let function = from_fn(|x: f64| x * (x - 1.0));

    let solution =
        solve_unobserved(&function, [0.0, 1.0], &Config::default()).expect("should solve");

    assert_eq!(solution.status, Status::LowerBound);
    assert_eq!(solution.root, Some(0.0));
}

#[test]
fn reports_no_sign_change() {
    let function = from_fn(|x| x * x + 1.0);

    let solution =
        solve_unobserved(&function, [-2.0, 3.0], &Config::default()).expect("should finish");

    assert_eq!(solution.status, Status::NoSignChange);
    assert_eq!(solution.root, None);
    assert_eq!(solution.iters, 0);
}

#[test]
fn errors_on_reversed_bracket() {
    let function = from_fn(|x| x);

    let result = solve_unobserved(&function, [1.0, -1.0], &Config::default());

    let Err(err) = result else {
        panic!("reversed bracket should be rejected");
    };
    assert!(err.to_string().contains("must be less than"));
    let Error::InvalidBracket { lower, upper } = err else {
        panic!("expected InvalidBracket, got {err:?}");
    };
    assert_relative_eq!(lower, 1.0);
    assert_relative_eq!(upper, -1.0);
}

#[test]
fn errors_on_zero_width_bracket() {
    let function = from_fn(|x| x);

    let result = solve_unobserved(&function, [0.5, 0.5], &Config::default());

    assert!(matches!(result, Err(Error::InvalidBracket { .. })));
}

#[test]
fn bracket_is_checked_before_tolerance() {
    let function = from_fn(|x| x);
    let config = Config {
        tol: -1.0,
        ..Config::default()
    };

    let result = solve_unobserved(&function, [1.0, -1.0], &config);
    assert!(matches!(result, Err(Error::InvalidBracket { .. })));

    let result = solve_unobserved(&function, [-1.0, 1.0], &config);
    assert!(matches!(result, Err(Error::InvalidTolerance { .. })));
}

#[test]
fn errors_on_non_finite_bracket() {
    let function = from_fn(|x| x);

    let result = solve_unobserved(&function, [0.0, f64::INFINITY], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));
}

#[derive(Debug, Error)]
#[error("undefined at {0}")]
struct Undefined(f64);

#[test]
fn propagates_function_errors() {
    let function = try_from_fn(|x: f64| if x > 0.4 { Err(Undefined(x)) } else { Ok(x - 1.0) });

    let result = solve_unobserved(&function, [0.0, 1.0], &Config::default());

    let Err(Error::Function { x, source }) = result else {
        panic!("function error should propagate");
    };
    assert_relative_eq!(x, 1.0);
    assert_eq!(source.to_string(), "undefined at 1");
}

#[test]
fn max_iters_returns_last_midpoint() {
    let function = from_fn(|x| x - 1.0 / 3.0);
    let config = Config {
        tol: 1e-300,
        max_iters: 4,
    };

    let solution = solve_unobserved(&function, [0.0, 1.0], &config).expect("should finish");

    // Midpoints: 0.5, 0.25, 0.375, 0.3125.
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.root, Some(0.3125));
    assert_eq!(solution.to_string(), "Maximum iterations reached");
}

#[test]
fn bracket_width_halves_each_iteration() {
    let function = from_fn(|x| x - 1.0 / 3.0);
    let config = Config {
        tol: 1e-300,
        max_iters: 30,
    };

    let mut widths = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        widths.push(event.width());
        None
    };

    solve(&function, [0.0, 1.0], &config, observer).expect("should finish");

    assert_eq!(widths.len(), 30);
    for (k, width) in widths.iter().enumerate() {
        assert_eq!(*width, 0.5_f64.powi(i32::try_from(k).unwrap()));
    }
}

#[test]
fn root_stays_within_initial_bracket() {
    let cases: [(fn(f64) -> f64, [f64; 2]); 4] = [
        (|x| x.powi(3) - 2.0, [0.0, 2.0]),
        (f64::cos, [0.0, 3.0]),
        (|x| x.exp() - 5.0, [-1.0, 4.0]),
        (|x| (x - 0.7).signum(), [0.0, 1.0]),
    ];

    for (f, bracket) in cases {
        for max_iters in [1, 5, 200] {
            let config = Config {
                tol: 1e-12,
                max_iters,
            };
            let solution = solve_unobserved(&from_fn(f), bracket, &config).expect("valid");
            let root = solution.root.expect("sign change guarantees a root");
            assert!(bracket[0] <= root && root <= bracket[1]);
        }
    }
}

#[test]
fn converged_root_is_within_tolerance() {
    let function = from_fn(f64::sin);
    let config = Config {
        tol: 1e-10,
        max_iters: 200,
    };

    let solution = solve_unobserved(&function, [3.0, 4.0], &config).expect("should solve");

    assert!(solution.status.is_converged());
    let root = solution.root.expect("root");
    assert!(root.sin().abs() < config.tol);
    assert_abs_diff_eq!(root, PI, epsilon = 1e-9);
}

#[test]
fn underflowing_product_keeps_upper_half() {
    // fa * fc underflows to -0.0, which is not strictly negative, so the
    // solver moves the lower bound past the root.
    let function = from_fn(|x| (x - 0.3) * 1e-200);
    let config = Config {
        tol: 1e-300,
        max_iters: 2,
    };

    let mut brackets = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        brackets.push(event.bracket);
        None
    };

    solve(&function, [0.0, 1.0], &config, observer).expect("should finish");

    assert_eq!(brackets, vec![[0.0, 1.0], [0.5, 1.0]]);
}

#[test]
fn observer_can_stop_iteration() {
    let function = from_fn(|x| x * x - 2.0);

    let mut calls = 0usize;
    let observer = |event: &Event| {
        calls += 1;
        (event.iter >= 3).then_some(Action::StopEarly)
    };

    let solution =
        solve(&function, [0.0, 2.0], &Config::default(), observer).expect("should stop cleanly");

    // Midpoints: 1.0, 1.5, 1.25.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.root, Some(1.25));
    assert_eq!(calls, 3);
}
