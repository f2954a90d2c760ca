//! Metadata records describing each test function

use serde::Serialize;

/// Which evaluation routines a function provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Scalar cost is available
    pub cost: bool,
    /// Analytic gradient is available
    pub gradient: bool,
    /// Analytic Hessian is available
    pub hessian: bool,
}

impl Capabilities {
    /// Cost only
    pub const COST: Self = Self {
        cost: true,
        gradient: false,
        hessian: false,
    };

    /// Cost, gradient and Hessian
    pub const SECOND_ORDER: Self = Self {
        cost: true,
        gradient: true,
        hessian: true,
    };

    /// `hessian => gradient => cost`
    pub fn is_consistent(&self) -> bool {
        (!self.hessian || self.gradient) && (!self.gradient || self.cost)
    }
}

/// Constant description of a test function.
///
/// One record exists per function, built at compile time. `domain[i]` is
/// the `[low, high]` range advised for sampling or plotting dimension `i`;
/// evaluation never checks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FunctionInfo {
    /// Display name
    pub name: &'static str,
    /// Landscape category (e.g. "Bowl-Shaped")
    pub category: &'static str,
    /// LaTeX rendering of the cost formula
    pub latex_cost: &'static str,
    /// Prose description
    pub description: &'static str,
    /// Location of the global minimum
    pub minimum_location: [f64; 2],
    /// Cost at the global minimum
    pub minimum_value: f64,
    /// Per-dimension `[low, high]` bounds, possibly infinite
    pub domain: [[f64; 2]; 2],
    /// Whether the surface is everywhere differentiable
    pub smooth: bool,
    /// Available evaluation routines
    pub capabilities: Capabilities,
}

impl FunctionInfo {
    /// Whether every finite bound encloses the global minimum
    pub fn minimum_in_domain(&self) -> bool {
        self.domain
            .iter()
            .zip(self.minimum_location.iter())
            .all(|(&[low, high], &m)| low <= m && m <= high)
    }

    /// Whether both dimensions have finite bounds
    pub fn is_bounded(&self) -> bool {
        self.domain.iter().flatten().all(|b| b.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: FunctionInfo = FunctionInfo {
        name: "Sample",
        category: "Bowl-Shaped",
        latex_cost: r"\[ f(x, y) = x^2 + y^2 \]",
        description: "Sample bowl.",
        minimum_location: [0.0, 0.0],
        minimum_value: 0.0,
        domain: [[-1.0, 1.0], [-1.0, 1.0]],
        smooth: true,
        capabilities: Capabilities::COST,
    };

    #[test]
    fn test_capabilities_consistency() {
        assert!(Capabilities::COST.is_consistent());
        assert!(Capabilities::SECOND_ORDER.is_consistent());

        let broken = Capabilities {
            cost: true,
            gradient: false,
            hessian: true,
        };
        assert!(!broken.is_consistent());
    }

    #[test]
    fn test_minimum_in_domain() {
        assert!(SAMPLE.minimum_in_domain());
        assert!(SAMPLE.is_bounded());

        let outside = FunctionInfo {
            minimum_location: [2.0, 0.0],
            ..SAMPLE
        };
        assert!(!outside.minimum_in_domain());

        let unbounded = FunctionInfo {
            domain: [[f64::NEG_INFINITY, f64::INFINITY]; 2],
            ..SAMPLE
        };
        assert!(unbounded.minimum_in_domain());
        assert!(!unbounded.is_bounded());
    }
}
