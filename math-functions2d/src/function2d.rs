//! The evaluation contract shared by every two-dimensional test function.
//!
//! Points are passed as a single array whose leading axis selects the
//! coordinate (`points[0]` is x, `points[1]` is y). Any trailing axes form a
//! batch: an array of shape `[2]` is one point, `[2, n]` is `n` points and
//! `[2, m, n]` is an `m x n` grid. Results keep the batch shape, with
//! derivative axes prepended:
//!
//! | routine | input       | output          |
//! |---------|-------------|-----------------|
//! | cost    | `[2, b...]` | `[b...]`        |
//! | grad    | `[2, b...]` | `[2, b...]`     |
//! | hess    | `[2, b...]` | `[2, 2, b...]`  |
//!
//! Each function only writes its formula for a single `(x, y)` pair; the
//! helpers in this module lift it elementwise over the batch.

use crate::error::{FunctionError, Operation, Result};
use crate::info::{Capabilities, FunctionInfo};
use ndarray::{ArrayD, ArrayView1, ArrayViewD, Axis, IxDyn, Zip};

/// A benchmark cost surface over two real variables.
///
/// Implementors provide [`info`](TestFunction2D::info) and
/// [`cost`](TestFunction2D::cost); `grad` and `hess` are overridden only by
/// functions whose [`Capabilities`] advertise them. The advertised domain
/// is never enforced: any finite point can be evaluated.
pub trait TestFunction2D: Send + Sync {
    /// Constant metadata record
    fn info(&self) -> &'static FunctionInfo;

    /// Display name
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Known global minimum input
    fn minimum_location(&self) -> [f64; 2] {
        self.info().minimum_location
    }

    /// Cost at [`minimum_location`](TestFunction2D::minimum_location)
    fn minimum_value(&self) -> f64 {
        self.info().minimum_value
    }

    /// Per-dimension `[low, high]` bounds
    fn domain(&self) -> [[f64; 2]; 2] {
        self.info().domain
    }

    fn is_smooth(&self) -> bool {
        self.info().smooth
    }

    fn capabilities(&self) -> Capabilities {
        self.info().capabilities
    }

    /// Evaluate the cost at every point of the batch.
    ///
    /// # Errors
    /// [`FunctionError::ShapeMismatch`] if `points` has no leading axis of
    /// length 2.
    fn cost(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>>;

    /// Evaluate the gradient at every point of the batch.
    ///
    /// # Errors
    /// [`FunctionError::NotImplemented`] unless the function has an analytic
    /// gradient, otherwise as [`cost`](TestFunction2D::cost).
    fn grad(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        let _ = points;
        Err(unsupported(self.info(), Operation::Gradient))
    }

    /// Evaluate the Hessian at every point of the batch.
    ///
    /// # Errors
    /// [`FunctionError::NotImplemented`] unless the function has an analytic
    /// Hessian, otherwise as [`cost`](TestFunction2D::cost).
    fn hess(&self, points: ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
        let _ = points;
        Err(unsupported(self.info(), Operation::Hessian))
    }

    /// Cost at a single point
    fn cost_at(&self, point: [f64; 2]) -> Result<f64> {
        let values = self.cost(ArrayView1::from(&point).into_dyn())?;
        Ok(values[IxDyn(&[])])
    }

    /// Gradient at a single point
    fn grad_at(&self, point: [f64; 2]) -> Result<[f64; 2]> {
        let g = self.grad(ArrayView1::from(&point).into_dyn())?;
        Ok([g[IxDyn(&[0])], g[IxDyn(&[1])]])
    }

    /// Hessian at a single point
    fn hess_at(&self, point: [f64; 2]) -> Result<[[f64; 2]; 2]> {
        let h = self.hess(ArrayView1::from(&point).into_dyn())?;
        Ok([
            [h[IxDyn(&[0, 0])], h[IxDyn(&[0, 1])]],
            [h[IxDyn(&[1, 0])], h[IxDyn(&[1, 1])]],
        ])
    }
}

pub(crate) fn unsupported(info: &FunctionInfo, operation: Operation) -> FunctionError {
    log::debug!("{} requested from {}, which does not provide it", operation, info.name);
    FunctionError::NotImplemented {
        function: info.name,
        operation,
    }
}

/// Split a point array into its x and y coordinate arrays.
pub(crate) fn coordinates(
    points: ArrayViewD<'_, f64>,
) -> Result<(ArrayViewD<'_, f64>, ArrayViewD<'_, f64>)> {
    if points.ndim() == 0 || points.len_of(Axis(0)) != 2 {
        log::debug!("rejecting point array of shape {:?}", points.shape());
        return Err(FunctionError::ShapeMismatch {
            shape: points.shape().to_vec(),
        });
    }
    let x = points.clone().index_axis_move(Axis(0), 0);
    let y = points.index_axis_move(Axis(0), 1);
    Ok((x, y))
}

/// Apply a per-point formula over the whole batch.
pub(crate) fn map_points<T, F>(points: ArrayViewD<'_, f64>, f: F) -> Result<ArrayD<T>>
where
    F: Fn(f64, f64) -> T,
{
    let (x, y) = coordinates(points)?;
    log::trace!("evaluating batch of shape {:?}", x.shape());
    Ok(Zip::from(&x).and(&y).map_collect(|&x, &y| f(x, y)))
}

/// Apply a per-point gradient formula and lay the result out as `[2, b...]`.
pub(crate) fn gradient_field<F>(points: ArrayViewD<'_, f64>, f: F) -> Result<ArrayD<f64>>
where
    F: Fn(f64, f64) -> [f64; 2],
{
    let per_point = map_points(points, f)?;
    let mut out = ArrayD::zeros(prepend_axes(&[2], per_point.shape()));
    for i in 0..2 {
        out.index_axis_mut(Axis(0), i).assign(&per_point.mapv(|g| g[i]));
    }
    Ok(out)
}

/// Apply a per-point Hessian formula and lay the result out as `[2, 2, b...]`.
pub(crate) fn hessian_field<F>(points: ArrayViewD<'_, f64>, f: F) -> Result<ArrayD<f64>>
where
    F: Fn(f64, f64) -> [[f64; 2]; 2],
{
    let per_point = map_points(points, f)?;
    let mut out = ArrayD::zeros(prepend_axes(&[2, 2], per_point.shape()));
    for i in 0..2 {
        for j in 0..2 {
            out.index_axis_mut(Axis(0), i)
                .index_axis_move(Axis(0), j)
                .assign(&per_point.mapv(|h| h[i][j]));
        }
    }
    Ok(out)
}

fn prepend_axes(leading: &[usize], batch: &[usize]) -> IxDyn {
    let shape: Vec<usize> = leading.iter().chain(batch).copied().collect();
    IxDyn(&shape)
}
