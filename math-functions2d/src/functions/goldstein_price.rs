//! Goldstein-Price test function, with analytic gradient and Hessian.
//!
//! The surface is the product `F * G` of two quartic factors
//!
//! ```text
//! F = (2x - 3y)^2 * P + 30,   P = 12x^2 - 36xy - 32x + 27y^2 + 48y + 18
//! G = (x + y + 1)^2 * Q + 1,  Q = 3x^2 + 6xy - 14x + 3y^2 - 14y + 19
//! ```
//!
//! and the derivatives below are written in terms of `F`, `G` and their
//! partials. `G` depends on `x` and `y` only through symmetric terms, so
//! `G_x == G_y` and its three second partials coincide.

use crate::error::Result;
use crate::function2d::{TestFunction2D, gradient_field, hessian_field, map_points};
use crate::info::{Capabilities, FunctionInfo};
use ndarray::{ArrayD, ArrayViewD};

static INFO: FunctionInfo = FunctionInfo {
    name: "Goldstein-Price",
    category: "Other",
    latex_cost: r"\[ f(\mathbf{x}) = [(2x_0 - 3x_1)^2(12x_0^2 - 36x_0x_1 - 32x_0 + 27x_1^2 + 48x_1 + 18) + 30] \times [(x_0 + x_1 + 1)^2(3x_0^2 + 6x_0x_1 - 14x_0 + 3x_1^2 - 14x_1 + 19) + 1] \]",
    description: "The Goldstein-Price function has several local minima. ",
    minimum_location: [0.0, -1.0],
    minimum_value: 3.0,
    domain: [[-2.0, 2.0], [-2.0, 2.0]],
    smooth: true,
    capabilities: Capabilities::SECOND_ORDER,
};

/// Both factors and their first and second partial derivatives at one point
struct Factors {
    f: f64,
    f_x: f64,
    f_y: f64,
    f_xx: f64,
    f_xy: f64,
    f_yy: f64,
    g: f64,
    g_1: f64,
    g_2: f64,
}

impl Factors {
    fn at(x: f64, y: f64) -> Self {
        let a = 2.0 * x - 3.0 * y;
        let p = 12.0 * x.powi(2) - 36.0 * x * y - 32.0 * x + 27.0 * y.powi(2) + 48.0 * y + 18.0;
        let p_x = 24.0 * x - 36.0 * y - 32.0;
        let p_y = -36.0 * x + 54.0 * y + 48.0;

        let b = x + y + 1.0;
        let q = 3.0 * x.powi(2) + 6.0 * x * y - 14.0 * x + 3.0 * y.powi(2) - 14.0 * y + 19.0;
        // q_x == q_y
        let q_1 = 6.0 * x + 6.0 * y - 14.0;

        Self {
            f: a.powi(2) * p + 30.0,
            f_x: 4.0 * a * p + a.powi(2) * p_x,
            f_y: -6.0 * a * p + a.powi(2) * p_y,
            f_xx: 8.0 * p + 8.0 * a * p_x + 24.0 * a.powi(2),
            f_xy: -12.0 * p - 6.0 * a * p_x + 4.0 * a * p_y - 36.0 * a.powi(2),
            f_yy: 18.0 * p - 12.0 * a * p_y + 54.0 * a.powi(2),
            g: b.powi(2) * q + 1.0,
            g_1: 2.0 * b * q + b.powi(2) * q_1,
            g_2: 2.0 * q + 4.0 * b * q_1 + 6.0 * b.powi(2),
        }
    }
}

/// Goldstein-Price function - 2D multimodal
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
pub fn goldstein_price(x: f64, y: f64) -> f64 {
    let t = Factors::at(x, y);
    t.f * t.g
}

/// Analytic gradient `[df/dx, df/dy]`
pub fn goldstein_price_grad(x: f64, y: f64) -> [f64; 2] {
    let t = Factors::at(x, y);
    [t.f_x * t.g + t.f * t.g_1, t.f_y * t.g + t.f * t.g_1]
}

/// Analytic Hessian, symmetric by construction
pub fn goldstein_price_hess(x: f64, y: f64) -> [[f64; 2]; 2] {
    let t = Factors::at(x, y);
    let h_xx = t.f_xx * t.g + 2.0 * t.f_x * t.g_1 + t.f * t.g_2;
    let h_xy = t.f_xy * t.g + (t.f_x + t.f_y) * t.g_1 + t.f * t.g_2;
    let h_yy = t.f_yy * t.g + 2.0 * t.f_y * t.g_1 + t.f * t.g_2;
    [[h_xx, h_xy], [h_xy, h_yy]]
}

/// Goldstein-Price as a [`TestFunction2D`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoldsteinPrice;

impl TestFunction2D for GoldsteinPrice {
    fn info(&self) -> &'static FunctionInfo {
        &INFO
    }

    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        map_points(points, goldstein_price)
    }

    fn grad(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        gradient_field(points, goldstein_price_grad)
    }

    fn hess(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        hessian_field(points, goldstein_price_hess)
    }
}
