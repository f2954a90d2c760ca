//! Bohachevsky3 test function

use crate::error::Result;
use crate::function2d::{TestFunction2D, map_points};
use crate::info::{Capabilities, FunctionInfo};
use ndarray::{ArrayD, ArrayViewD};
use std::f64::consts::PI;

static INFO: FunctionInfo = FunctionInfo {
    name: "Bohachevsky No. 3 Function",
    category: "Bowl-Shaped",
    latex_cost: r"\[ f(x, y) = x^2 + 2y^2 - 0.3\cos(3\pi x + 4\pi y) + 0.3 \]",
    description: "Bowl-shaped function with ripples along a single coupled cosine. \
                  The global minimum sits at the origin.",
    minimum_location: [0.0, 0.0],
    minimum_value: 0.0,
    domain: [[f64::NEG_INFINITY, f64::INFINITY], [f64::NEG_INFINITY, f64::INFINITY]],
    smooth: true,
    capabilities: Capabilities::COST,
};

/// Bohachevsky function 3 - 2D multimodal
/// Global minimum: f(x) = 0 at x = (0, 0)
pub fn bohachevsky3(x: f64, y: f64) -> f64 {
    x.powi(2) + 2.0 * y.powi(2) - 0.3 * (3.0 * PI * x + 4.0 * PI * y).cos() + 0.3
}

/// Bohachevsky No. 3 as a [`TestFunction2D`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bohachevsky3;

impl TestFunction2D for Bohachevsky3 {
    fn info(&self) -> &'static FunctionInfo {
        &INFO
    }

    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        map_points(points, bohachevsky3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bohachevsky3_known_values() {
        let f = Bohachevsky3;
        assert_abs_diff_eq!(f.cost_at([0.0, 0.0]).unwrap(), 0.0, epsilon = 1e-12);
        // cos(7pi) = -1
        assert_abs_diff_eq!(f.cost_at([1.0, 1.0]).unwrap(), 3.6, epsilon = 1e-12);
        // cos(3pi) = -1
        assert_abs_diff_eq!(f.cost_at([1.0, 0.0]).unwrap(), 1.6, epsilon = 1e-12);
    }

    #[test]
    fn test_bohachevsky3_coupled_cosine() {
        // cos(1.5pi + 2pi) = 0
        assert_abs_diff_eq!(bohachevsky3(0.5, 0.5), 1.05, epsilon = 1e-12);
        // not separable, unlike Bohachevsky No. 2
        let v2 = crate::functions::bohachevsky2(0.25, 0.1);
        assert!((bohachevsky3(0.25, 0.1) - v2).abs() > 1e-3);
    }
}
