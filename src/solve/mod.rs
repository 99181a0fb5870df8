//! High-level solve module: adaptive driver, options and rich solution.

pub mod estimate;
pub mod options;
pub mod solution;
pub mod solve_ode;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use estimate::ErrorRule;
pub use options::Options;
pub use solution::OdeSolution;
pub use solve_ode::{solve_all, solve_ode};
