//! Trid test function, in its two-dimensional form

use crate::error::Result;
use crate::function2d::{TestFunction2D, map_points};
use crate::info::{Capabilities, FunctionInfo};
use ndarray::{ArrayD, ArrayViewD};

static INFO: FunctionInfo = FunctionInfo {
    name: "Trid Function",
    category: "Bowl-Shaped",
    latex_cost: r"\[ f(x, y) = (x - 1)^2 + (y - 1)^2 - xy \]",
    description: "The Trid function has no local minimum except the global one. \
                  It is shown here in its two-dimensional form. ",
    minimum_location: [2.0, 2.0],
    minimum_value: -2.0,
    domain: [[-4.0, 4.0], [-4.0, 4.0]],
    smooth: true,
    capabilities: Capabilities::COST,
};

/// Trid function - 2D bowl
/// Global minimum: f(x) = -2 at x = (2, 2)
/// Bounds: x_i in [-4, 4]
pub fn trid(x: f64, y: f64) -> f64 {
    (x - 1.0).powi(2) + (y - 1.0).powi(2) - x * y
}

/// Trid as a [`TestFunction2D`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trid;

impl TestFunction2D for Trid {
    fn info(&self) -> &'static FunctionInfo {
        &INFO
    }

    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        map_points(points, trid)
    }
}
