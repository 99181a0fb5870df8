//! Uniform grids over the integration interval

use crate::Float;

/// Uniform partition of `[x0, xn]` into `n` subintervals.
///
/// Holds the `n + 1` nodes `x_i = x0 + i * h` with `h = (xn - x0) / n`. The
/// last node is pinned to `xn` so that the value at the interval end does
/// not drift with rounding as the grid is refined.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    x: Vec<Float>,
    h: Float,
}

impl Grid {
    /// Builds the grid. The caller guarantees `n >= 1` and `x0 < xn`.
    pub fn uniform(x0: Float, xn: Float, n: usize) -> Self {
        debug_assert!(n >= 1, "a grid needs at least one subinterval");
        let h = (xn - x0) / n as Float;
        let mut x: Vec<Float> = (0..n).map(|i| x0 + i as Float * h).collect();
        x.push(xn);
        Self { x, h }
    }

    /// Step size between neighbouring nodes.
    pub fn h(&self) -> Float {
        self.h
    }

    /// Number of subintervals.
    pub fn n(&self) -> usize {
        self.x.len() - 1
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn nodes(&self) -> &[Float] {
        &self.x
    }

    pub fn into_nodes(self) -> Vec<Float> {
        self.x
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.x[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn nodes_cover_both_endpoints() {
        let grid = Grid::uniform(0.0, 1.0, 4);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid.n(), 4);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[4], 1.0);
        assert_abs_diff_eq!(grid.h(), 0.25);
        assert_abs_diff_eq!(grid[2], 0.5);
    }

    #[test]
    fn doubling_keeps_coarse_nodes() {
        let coarse = Grid::uniform(-1.0, 2.0, 6);
        let fine = Grid::uniform(-1.0, 2.0, 12);
        for (i, &x) in coarse.nodes().iter().enumerate() {
            assert_abs_diff_eq!(fine[2 * i], x, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_subinterval() {
        let grid = Grid::uniform(2.0, 3.0, 1);
        assert_eq!(grid.nodes(), &[2.0, 3.0]);
        assert_eq!(grid.h(), 1.0);
    }
}
