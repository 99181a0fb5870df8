use approx::assert_abs_diff_eq;
use odegrid::prelude::*;

mod common;
use common::{growth, growth_exact, init_logging, linear, linear_exact};

#[test]
fn trajectory_starts_at_y0() {
    init_logging();
    for method in Method::ALL {
        for (x0, xn, y0) in [(0.0, 1.0, 1.0), (-2.0, 0.5, -0.3), (1.0, 3.0, 1e-3)] {
            let options = Options::builder()
                .method(method)
                .n(3)
                .eps(1e-4)
                .exact(&linear_exact)
                .build();
            let sol = solve_ode(&linear, x0, xn, y0, options).unwrap();
            assert_eq!(sol.y[0], y0, "{method}");
            assert_eq!(sol.x[0], x0, "{method}");
            assert_eq!(sol.x.len(), sol.y.len(), "{method}");
            assert_eq!(sol.x.len(), sol.n + 1, "{method}");
        }
    }
}

#[test]
fn exponential_growth_single_step_methods() {
    init_logging();
    let eps = 1e-6;
    for method in [Method::ImprovedEuler, Method::RK4] {
        let options = Options::builder().method(method).n(10).eps(eps).build();
        let sol = solve_ode(&growth, 0.0, 1.0, 1.0, options).unwrap();

        assert!(sol.converged(), "{method}");
        assert!(sol.error <= eps, "{method}: error {}", sol.error);
        assert_eq!(sol.error_rule, ErrorRule::Runge { order: method.runge_order().unwrap() });

        let (x_last, y_last) = sol.last().unwrap();
        assert_eq!(x_last, 1.0);
        assert_abs_diff_eq!(y_last, std::f64::consts::E as Float, epsilon = eps);
    }
}

#[test]
fn linear_scenario_rk4() {
    init_logging();
    let options = Options::builder()
        .method(Method::RK4)
        .n(4)
        .eps(1e-5)
        .exact(&linear_exact)
        .build();
    let sol = solve_ode(&linear, 0.0, 1.0, 1.0, options).unwrap();

    assert!(sol.converged());
    assert!(sol.error < 1e-5);
    assert!(sol.iterations >= 1);
    assert_eq!(sol.n, 4 << sol.iterations);
    assert!((sol.n / 4).is_power_of_two());
    assert_abs_diff_eq!(sol.h, 1.0 / sol.n as Float, epsilon = 1e-15);
    assert_eq!(sol.nfev, 4 * sol.n);

    let y_exact = sol.y_exact.as_ref().unwrap();
    for ((x, y), ye) in sol.iter().zip(y_exact) {
        assert_eq!(*ye, linear_exact(x, 0.0, 1.0));
        assert_abs_diff_eq!(y, *ye, epsilon = 1e-5);
    }
}

#[test]
fn runge_estimate_shrinks_under_doubling() {
    let f = |x: Float, y: Float| x.sin() - y;
    for (method, max_doublings) in [(Method::ImprovedEuler, 5), (Method::RK4, 3)] {
        let errors: Vec<Float> = (1..=max_doublings)
            .map(|k| {
                let options = Options::builder()
                    .method(method)
                    .n(8)
                    .eps(1e-15)
                    .max_iterations(k)
                    .build();
                solve_ode(&f, 0.0, 2.0, 1.0, options).unwrap().error
            })
            .collect();
        for pair in errors.windows(2) {
            assert!(pair[1] < pair[0], "{method}: {errors:?}");
        }
    }
}

#[test]
fn exhaustion_is_reported_not_fatal() {
    init_logging();
    let options = Options::builder()
        .method(Method::ImprovedEuler)
        .n(5)
        .eps(1e-14)
        .max_iterations(3)
        .build();
    let sol = solve_ode(&growth, 0.0, 1.0, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::Exhausted);
    assert!(!sol.converged());
    assert_eq!(sol.iterations, 3);
    assert_eq!(sol.n, 40);
    assert_eq!(sol.y.len(), 41);
    assert!(sol.error.is_finite() && sol.error > 1e-14);
    assert!(sol.y_exact.is_none());
}

#[test]
fn default_ceiling_bounds_the_refinements() {
    init_logging();
    let f = |x: Float, _y: Float| x.exp();
    let options = Options::builder()
        .method(Method::ImprovedEuler)
        .n(2)
        .eps(Float::MIN_POSITIVE)
        .build();
    let sol = solve_ode(&f, 0.0, 1.0, 1.0, options).unwrap();

    assert_eq!(sol.status, Status::Exhausted);
    assert_eq!(sol.iterations, 20);
    assert_eq!(sol.n, 2 << 20);
    assert_eq!(sol.x.last(), Some(&1.0));
    assert!(sol.error.is_finite() && sol.error > 0.0);
}

#[test]
fn solving_twice_gives_identical_results() {
    for method in Method::ALL {
        let options = Options::builder()
            .method(method)
            .n(6)
            .eps(1e-6)
            .exact(&growth_exact)
            .build();
        let first = solve_ode(&growth, 0.0, 2.0, 0.5, options).unwrap();
        let second = solve_ode(&growth, 0.0, 2.0, 0.5, options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn solve_all_runs_every_method_in_order() {
    let options = Options::builder()
        .n(10)
        .eps(1e-4)
        .exact(&linear_exact)
        .build();
    let sols = solve_all(&linear, 0.0, 1.0, 1.0, options).unwrap();
    let methods: Vec<Method> = sols.iter().map(|s| s.method).collect();
    assert_eq!(methods, Method::ALL);
    assert!(sols.iter().all(|s| s.converged()));
    assert_eq!(sols[2].error_rule, ErrorRule::ExactDeviation);
}

#[test]
fn invalid_configuration_is_rejected() {
    let options = Options::builder().n(10).eps(-1.0).build();
    let errors = solve_ode(&growth, 1.0, 0.0, 1.0, options).unwrap_err();
    assert_eq!(
        errors,
        vec![
            odegrid::Error::InvalidInterval { x0: 1.0, xn: 0.0 },
            odegrid::Error::InvalidTolerance(-1.0),
        ]
    );
    assert!(errors[0].to_string().contains("xn must be greater than x0"));

    let options = Options::builder().corrector_maxiter(0).build();
    let errors = solve_ode(&growth, 0.0, 1.0, 1.0, options).unwrap_err();
    assert_eq!(errors, vec![odegrid::Error::CorrectorMaxIterMustBePositive(0)]);
}
