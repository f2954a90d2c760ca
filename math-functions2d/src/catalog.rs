//! Closed set of the available test functions.
//!
//! [`Function2D`] dispatches statically over every function in the crate.
//! Generic code that only needs the contract can take
//! `&dyn TestFunction2D` through [`Function2D::function`].

use crate::error::Result;
use crate::function2d::TestFunction2D;
use crate::functions::{Bohachevsky2, Bohachevsky3, GoldsteinPrice, PowerSum, Rastrigin, Trid};
use crate::info::FunctionInfo;
use ndarray::{ArrayD, ArrayViewD};

/// One case per test function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function2D {
    Bohachevsky2(Bohachevsky2),
    Bohachevsky3(Bohachevsky3),
    GoldsteinPrice(GoldsteinPrice),
    PowerSum(PowerSum),
    Rastrigin(Rastrigin),
    Trid(Trid),
}

impl Function2D {
    /// Every function, in alphabetical order
    pub const ALL: [Function2D; 6] = [
        Function2D::Bohachevsky2(Bohachevsky2),
        Function2D::Bohachevsky3(Bohachevsky3),
        Function2D::GoldsteinPrice(GoldsteinPrice),
        Function2D::PowerSum(PowerSum),
        Function2D::Rastrigin(Rastrigin),
        Function2D::Trid(Trid),
    ];

    /// The wrapped function as a trait object
    pub fn function(&self) -> &dyn TestFunction2D {
        match self {
            Function2D::Bohachevsky2(f) => f,
            Function2D::Bohachevsky3(f) => f,
            Function2D::GoldsteinPrice(f) => f,
            Function2D::PowerSum(f) => f,
            Function2D::Rastrigin(f) => f,
            Function2D::Trid(f) => f,
        }
    }
}

impl TestFunction2D for Function2D {
    fn info(&self) -> &'static FunctionInfo {
        self.function().info()
    }

    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        self.function().cost(points)
    }

    fn grad(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        self.function().grad(points)
    }

    fn hess(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        self.function().hess(points)
    }
}
