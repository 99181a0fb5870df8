//! Linear multi-step integrators

mod abm4;

pub use abm4::{BOOTSTRAP_POINTS, abm4};
