use crate::error::Result;
use crate::function2d::TestFunction2D;
use ndarray::{ArrayD, ArrayViewD};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Parallel evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
    /// Below this many batches evaluation stays sequential
    pub min_batches: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_batches: 4,
        }
    }
}

/// Evaluate the cost of several independent point arrays
///
/// # Arguments
/// * `function` - Function to evaluate
/// * `batches` - Point arrays, each with a leading axis of length 2
/// * `config` - Parallel configuration
///
/// # Returns
/// One cost array per batch, in input order, or an error if any batch is rejected
pub fn evaluate_batches<F>(
    function: &F,
    batches: &[ArrayViewD<'_, f64>],
    config: &ParallelConfig,
) -> Result<Vec<ArrayD<f64>>>
where
    F: TestFunction2D + ?Sized,
{
    if !config.enabled || batches.len() < config.min_batches {
        log::debug!(
            "evaluating {} batch(es) of {} sequentially",
            batches.len(),
            function.name()
        );
        return batches.iter().map(|b| function.cost(b.clone())).collect();
    }

    log::debug!(
        "evaluating {} batches of {} on the rayon pool",
        batches.len(),
        function.name()
    );
    batches
        .par_iter()
        .map(|b| function.cost(b.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Function2D;
    use ndarray::{Array, Array1, IxDyn};

    fn grids(count: usize) -> Vec<ArrayD<f64>> {
        (0..count)
            .map(|k| {
                let offset = k as f64 * 0.25;
                Array::from_shape_fn(IxDyn(&[2, 8, 8]), |idx| {
                    offset + idx[1] as f64 * 0.5 - idx[2] as f64 * 0.3 * (idx[0] as f64 + 1.0)
                })
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let owned = grids(12);
        let views: Vec<_> = owned.iter().map(|g| g.view()).collect();
        let sequential = ParallelConfig {
            enabled: false,
            ..ParallelConfig::default()
        };

        for f in Function2D::ALL {
            let a = evaluate_batches(&f, &views, &ParallelConfig::default()).unwrap();
            let b = evaluate_batches(&f, &views, &sequential).unwrap();
            assert_eq!(a, b, "{}", f.name());
        }
    }

    #[test]
    fn test_parallel_reports_shape_errors() {
        let mut owned = grids(5);
        owned.push(Array1::zeros(3).into_dyn());
        let views: Vec<_> = owned.iter().map(|g| g.view()).collect();

        let f = Function2D::ALL[0];
        let err = evaluate_batches(f.function(), &views, &ParallelConfig::default()).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: ParallelConfig = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.min_batches, 4);
    }
}
