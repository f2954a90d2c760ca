//! Power Sum test function

use crate::error::Result;
use crate::function2d::{TestFunction2D, map_points};
use crate::info::{Capabilities, FunctionInfo};
use ndarray::{ArrayD, ArrayViewD};

/// Targets `b_i` for the power sums of order `i = 1, 2`
pub const POWER_SUM_TARGETS: [f64; 2] = [1.0, 2.0];

// x + y = 1 and x^2 + y^2 = 2 give x = (1 + sqrt 3) / 2, y = (1 - sqrt 3) / 2
const SQRT_3: f64 = 1.732_050_807_568_877_2;

static INFO: FunctionInfo = FunctionInfo {
    name: "Power Sum Function",
    category: "Plate-Shaped",
    latex_cost: r"\[ f(\mathbf{x}) = \sum_{i=1}^{2} \left[ \left( \sum_{j=0}^{1} x_j^i \right) - b_i \right]^2, \quad \mathbf{b} = (1, 2) \]",
    description: "Multi-dimensional plate-like function. ",
    minimum_location: [(1.0 + SQRT_3) / 2.0, (1.0 - SQRT_3) / 2.0],
    minimum_value: 0.0,
    domain: [[-1.0, 2.0], [-1.0, 2.0]],
    smooth: true,
    capabilities: Capabilities::COST,
};

/// Power Sum Function - 2D plate-shaped
/// Global minimum: f(x) = 0 on x + y = 1, x^2 + y^2 = 2
pub fn power_sum(x: f64, y: f64) -> f64 {
    POWER_SUM_TARGETS
        .iter()
        .zip(1..)
        .map(|(&b, i)| (x.powi(i) + y.powi(i) - b).powi(2))
        .sum()
}

/// Power Sum as a [`TestFunction2D`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerSum;

impl TestFunction2D for PowerSum {
    fn info(&self) -> &'static FunctionInfo {
        &INFO
    }

    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        map_points(points, power_sum)
    }
}
