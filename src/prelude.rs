//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odegrid::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Exact`, `Grid`, `Status`, `Float`.
//! - High-level API: `solve_ode`, `solve_all`, `Options`, `OdeSolution`, `ErrorRule` and `Method`.
//! - The predefined `Equation` catalogue.
//!

pub use crate::Float;
pub use crate::core::{exact::Exact, grid::Grid, ode::ODE, status::Status};
pub use crate::equation::Equation;
pub use crate::methods::Method;
pub use crate::solve::{ErrorRule, OdeSolution, Options, solve_all, solve_ode};
