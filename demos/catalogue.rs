//! # Example: Equation catalogue
//!
//! Solve every predefined equation with Improved Euler, RK4 and Adams and
//! print the diagnostics of each run next to the closed-form values.
//!
//! Run with `RUST_LOG=debug` to follow every grid doubling.
//!

use odegrid::prelude::*;

fn main() {
    env_logger::init();

    let eps = 1e-4;
    for eq in Equation::ALL {
        // y / x is singular at the origin, start it at 1
        let (x0, xn, y0) = match eq {
            Equation::Ratio => (1.0, 2.0, 1.0),
            Equation::Riccati => (0.0, 1.0, -1.0),
            _ => (0.0, 1.0, 1.0),
        };
        let f = eq.rhs();
        let exact = eq.exact();
        let options = Options::builder()
            .n(4)
            .eps(eps)
            .exact(&exact)
            .build();

        println!("y' = {eq}, y({x0}) = {y0} on [{x0}, {xn}]");
        match solve_all(&f, x0, xn, y0, options) {
            Ok(sols) => {
                for sol in sols {
                    report(&sol, eps);
                }
            }
            Err(errors) => {
                for e in errors {
                    eprintln!("  invalid input: {e}");
                }
            }
        }
        println!("{}", "-".repeat(30));
    }
}

fn report(sol: &OdeSolution, eps: Float) {
    println!("  {}:", sol.method);
    if !sol.converged() {
        println!("    accuracy not reached within {} refinements", sol.iterations);
    }
    println!(
        "    eps = {eps}: n = {}, h = {:.6}, refinements = {}, nfev = {}",
        sol.n, sol.h, sol.iterations, sol.nfev
    );

    if sol.x.len() <= 20 {
        let ys: Vec<String> = sol.y.iter().map(|y| format!("{y:.5}")).collect();
        println!("    y:       [{}]", ys.join(" "));
        if let Some(y_exact) = &sol.y_exact {
            let ys: Vec<String> = y_exact.iter().map(|y| format!("{y:.5}")).collect();
            println!("    y_exact: [{}]", ys.join(" "));
        }
    } else if let Some((x, y)) = sol.last() {
        println!("    y({x}) = {y:.8}");
    }

    match sol.error_rule {
        ErrorRule::Runge { order } => println!("    error (Runge, p = {order}): {:e}", sol.error),
        ErrorRule::ExactDeviation => println!("    error (max |y_exact - y|): {:e}", sol.error),
        ErrorRule::PreviousGrid => println!("    error (previous grid): {:e}", sol.error),
    }
}
