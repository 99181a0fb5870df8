//! A struct representing the outputted result of a single pass over a grid.

use crate::Float;

/// The output of one integrator run over one grid
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationResult {
    /// Ordinates aligned index-for-index with the grid nodes
    pub y: Vec<Float>,
    /// The number of function evaluations
    pub nfev: usize,
    /// The number of steps whose corrector hit its iteration cap
    pub stalls: usize,
}

impl IntegrationResult {
    pub fn new(y: Vec<Float>, nfev: usize, stalls: usize) -> Self {
        Self { y, nfev, stalls }
    }
}
