//! Bohachevsky2 test function

use crate::error::Result;
use crate::function2d::{TestFunction2D, map_points};
use crate::info::{Capabilities, FunctionInfo};
use ndarray::{ArrayD, ArrayViewD};
use std::f64::consts::PI;

static INFO: FunctionInfo = FunctionInfo {
    name: "Bohachevsky No. 2 Function",
    category: "Bowl-Shaped",
    latex_cost: r"\[ f(x, y) = x^2 + 2y^2 - 0.3\cos(3\pi x)\cos(4\pi y) + 0.3 \]",
    description: "Bowl-shaped function whose surface is rippled by the product of two cosines. \
                  The global minimum sits at the origin.",
    minimum_location: [0.0, 0.0],
    minimum_value: 0.0,
    domain: [[f64::NEG_INFINITY, f64::INFINITY], [f64::NEG_INFINITY, f64::INFINITY]],
    smooth: true,
    capabilities: Capabilities::COST,
};

/// Bohachevsky function 2 - 2D multimodal
/// Global minimum: f(x) = 0 at x = (0, 0)
pub fn bohachevsky2(x: f64, y: f64) -> f64 {
    x.powi(2) + 2.0 * y.powi(2) - 0.3 * (3.0 * PI * x).cos() * (4.0 * PI * y).cos() + 0.3
}

/// Bohachevsky No. 2 as a [`TestFunction2D`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bohachevsky2;

impl TestFunction2D for Bohachevsky2 {
    fn info(&self) -> &'static FunctionInfo {
        &INFO
    }

    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        map_points(points, bohachevsky2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bohachevsky2_known_values() {
        let f = Bohachevsky2;
        assert_abs_diff_eq!(f.cost_at([0.0, 0.0]).unwrap(), 0.0, epsilon = 1e-12);
        // cos(3pi) cos(4pi) = -1
        assert_abs_diff_eq!(f.cost_at([1.0, 1.0]).unwrap(), 3.6, epsilon = 1e-12);
        // cos(1.5pi) = 0
        assert_abs_diff_eq!(f.cost_at([0.5, 0.0]).unwrap(), 0.55, epsilon = 1e-12);
    }

    #[test]
    fn test_bohachevsky2_is_even() {
        for &(x, y) in &[(0.3, -0.7), (1.2, 2.5), (-4.0, 0.1)] {
            let v = bohachevsky2(x, y);
            assert_abs_diff_eq!(bohachevsky2(-x, y), v, epsilon = 1e-12);
            assert_abs_diff_eq!(bohachevsky2(x, -y), v, epsilon = 1e-12);
        }
    }
}
