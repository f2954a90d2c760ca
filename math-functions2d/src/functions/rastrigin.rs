//! Rastrigin test function

use crate::error::Result;
use crate::function2d::{TestFunction2D, map_points};
use crate::info::{Capabilities, FunctionInfo};
use ndarray::{ArrayD, ArrayViewD};
use std::f64::consts::PI;

static INFO: FunctionInfo = FunctionInfo {
    name: "Rastrigin Function",
    category: "Many Local Minima",
    latex_cost: r"\[ f(x, y) = 20 + \left( x^2 - 10\cos(2\pi x) \right) + \left( y^2 - 10\cos(2\pi y) \right) \]",
    description: "The Rastrigin function has several local minima. It is highly multimodal, \
                  but locations of the minima are regularly distributed.",
    minimum_location: [0.0, 0.0],
    minimum_value: 0.0,
    domain: [[-5.12, 5.12], [-5.12, 5.12]],
    smooth: true,
    capabilities: Capabilities::COST,
};

/// Rastrigin function - 2D multimodal
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: f64, y: f64) -> f64 {
    20.0 + (x.powi(2) - 10.0 * (2.0 * PI * x).cos()) + (y.powi(2) - 10.0 * (2.0 * PI * y).cos())
}

/// Rastrigin as a [`TestFunction2D`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rastrigin;

impl TestFunction2D for Rastrigin {
    fn info(&self) -> &'static FunctionInfo {
        &INFO
    }

    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        map_points(points, rastrigin)
    }
}
