//! # Example: Exponential Growth
//!
//! Equation:
//! dy/dx = y
//!
//! Initial condition: y(0) = 1.0, exact solution y = e^x.
//!

use odegrid::prelude::*;

struct Growth;

impl ODE for Growth {
    fn ode(&self, _x: Float, y: Float) -> Float {
        y
    }
}

fn main() {
    env_logger::init();

    let exact = |x: Float, x0: Float, y0: Float| y0 * (x - x0).exp();

    for method in Method::ALL {
        let options = Options::builder()
            .method(method)
            .n(10)
            .eps(1e-6)
            .exact(&exact)
            .build();

        match solve_ode(&Growth, 0.0, 1.0, 1.0, options) {
            Ok(sol) => {
                println!("{}", sol.method);
                println!("  Final status: {:?}", sol.status);
                if let Some((x, y)) = sol.last() {
                    println!(
                        "  Final state: x = {:.5}, y = {:.10} (exact {:.10})",
                        x,
                        y,
                        exact(x, 0.0, 1.0)
                    );
                }
                println!("  Subintervals: {}", sol.n);
                println!("  Refinements: {}", sol.iterations);
                println!("  Error estimate: {:e}", sol.error);
                println!("  Function evaluations on the final grid: {}", sol.nfev);
            }
            Err(e) => eprintln!("Integration failed: {:?}", e),
        }
    }
}
