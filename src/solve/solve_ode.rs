//! Adaptive step-doubling driver

use log::{debug, info, warn};

use crate::{
    Float,
    core::{grid::Grid, ode::ODE, status::Status},
    error::Error,
    methods::{Method, adams::BOOTSTRAP_POINTS, settings::Settings},
};

use super::{estimate::Estimator, options::Options, solution::OdeSolution};

/// Solve `y' = f(x, y)`, `y(x0) = y0` on `[x0, xn]` to the tolerance `options.eps`.
///
/// The chosen method first runs on a uniform grid of `options.n`
/// subintervals. The grid is then doubled and the method rerun, comparing each
/// new trajectory with the previous one (Runge extrapolation for Improved
/// Euler and RK4) or with the closed-form solution (Adams), until the estimate
/// is at most `eps` or `options.max_iterations` doublings were spent.
/// Running out of doublings is not an error: the solution carries
/// [`Status::Exhausted`] together with the finest trajectory and its error.
///
/// Returns every violated precondition if the interval, step count or
/// tolerances are invalid.
///
/// # Example
///
/// ```
/// use odegrid::prelude::*;
///
/// let f = |x: Float, y: Float| x + y;
/// let options = Options::builder().method(Method::RK4).n(4).eps(1e-5).build();
/// let sol = solve_ode(&f, 0.0, 1.0, 1.0, options).unwrap();
/// assert!(sol.converged());
/// assert_eq!(sol.y[0], 1.0);
/// ```
pub fn solve_ode<F>(
    f: &F,
    x0: Float,
    xn: Float,
    y0: Float,
    options: Options,
) -> Result<OdeSolution, Vec<Error>>
where
    F: ODE,
{
    // --- Input Validation ---
    validate(x0, xn, y0, &options)?;

    // --- Declarations ---
    let method = options.method;
    let eps = options.eps;
    let settings = Settings::builder()
        .corrector_tol(eps)
        .corrector_maxiter(options.corrector_maxiter)
        .build();
    let estimator = Estimator::select(method, options.exact);

    if method.requires_bootstrap() && options.n + 1 <= BOOTSTRAP_POINTS {
        debug!(
            "{} starts on {} nodes, no more than its {} bootstrap values",
            method,
            options.n + 1,
            BOOTSTRAP_POINTS
        );
    }

    // --- Initializations ---
    let mut n = options.n;
    let mut grid = Grid::uniform(x0, xn, n);
    let mut current = method.integrate(f, &grid, y0, &settings);
    let mut iterations = 0;
    let mut error = Float::INFINITY;

    // --- Refinement loop ---
    let status = loop {
        if error <= eps && current.stalls == 0 {
            info!(
                "{} converged after {} refinements: n = {}, h = {}, error = {:e}",
                method,
                iterations,
                n,
                grid.h(),
                error
            );
            break Status::Converged;
        }

        if iterations >= options.max_iterations {
            warn!(
                "{} did not reach eps = {:e} within {} refinements (error = {:e})",
                method, eps, iterations, error
            );
            break Status::Exhausted;
        }

        n = match n.checked_mul(2) {
            Some(n) => n,
            None => {
                warn!("{} cannot refine past n = {}", method, n);
                break Status::Exhausted;
            }
        };

        let refined = Grid::uniform(x0, xn, n);
        let next = method.integrate(f, &refined, y0, &settings);
        error = estimator.estimate(&current.y, &next.y, &refined, y0);
        iterations += 1;

        debug!(
            "{} refinement {}: n = {}, h = {}, error = {:e}, corrector stalls = {}",
            method,
            iterations,
            n,
            refined.h(),
            error,
            next.stalls
        );

        grid = refined;
        current = next;
    };

    let y_exact = options.exact.map(|exact| {
        grid.nodes()
            .iter()
            .map(|&x| exact.exact(x, x0, y0))
            .collect()
    });

    Ok(OdeSolution {
        method,
        h: grid.h(),
        x: grid.into_nodes(),
        y: current.y,
        y_exact,
        n,
        iterations,
        error,
        error_rule: estimator.rule(),
        nfev: current.nfev,
        corrector_stalls: current.stalls,
        status,
    })
}

/// Run every [`Method`] with the same problem and options, in [`Method::ALL`] order.
///
/// `options.method` is ignored.
pub fn solve_all<F>(
    f: &F,
    x0: Float,
    xn: Float,
    y0: Float,
    options: Options,
) -> Result<Vec<OdeSolution>, Vec<Error>>
where
    F: ODE,
{
    Method::ALL
        .iter()
        .map(|&method| solve_ode(f, x0, xn, y0, Options { method, ..options }))
        .collect()
}

fn validate(x0: Float, xn: Float, y0: Float, options: &Options) -> Result<(), Vec<Error>> {
    let mut errors = Vec::new();

    // Interval, also rejects NaN bounds
    if !(x0.is_finite() && xn.is_finite() && xn > x0) {
        errors.push(Error::InvalidInterval { x0, xn });
    }

    if !y0.is_finite() {
        errors.push(Error::NonFiniteInitialValue(y0));
    }

    if options.n <= 1 {
        errors.push(Error::TooFewSubintervals(options.n));
    }

    if !(options.eps > 0.0 && options.eps.is_finite()) {
        errors.push(Error::InvalidTolerance(options.eps));
    }

    if options.max_iterations == 0 {
        errors.push(Error::MaxIterationsMustBePositive(options.max_iterations));
    }

    if options.corrector_maxiter == 0 {
        errors.push(Error::CorrectorMaxIterMustBePositive(options.corrector_maxiter));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_collects_every_violation() {
        let f = |_x: Float, y: Float| y;
        let options = Options::builder().n(1).eps(0.0).max_iterations(0).build();
        let errors = solve_ode(&f, 1.0, 1.0, Float::INFINITY, options).unwrap_err();
        assert_eq!(
            errors,
            vec![
                Error::InvalidInterval { x0: 1.0, xn: 1.0 },
                Error::NonFiniteInitialValue(Float::INFINITY),
                Error::TooFewSubintervals(1),
                Error::InvalidTolerance(0.0),
                Error::MaxIterationsMustBePositive(0),
            ]
        );
    }
}
