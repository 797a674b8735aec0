use std::sync::Arc;

use crate::backend::ComputeBackend;
use crate::config::EngineConfig;
use crate::cpu::CpuBackend;
use crate::error::{Result, TensorError};
use crate::matrix::Matrix;

/// Computes Kronecker products of bounded integer matrices.
///
/// The engine borrows both operands for the duration of a call and returns
/// the output as an owned matrix once every worker has finished. Operands
/// larger than `max_dim` in either dimension are rejected before the output
/// buffer is allocated.
#[derive(Debug, Clone)]
pub struct TensorProductEngine {
    config: EngineConfig,
    backend: Arc<dyn ComputeBackend>,
}

impl TensorProductEngine {
    /// An engine running on a [`CpuBackend`] with `config.workers` threads.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let backend = Arc::new(CpuBackend::with_workers(config.workers));
        Self::with_backend(config, backend)
    }

    /// An engine running on a caller-supplied backend.
    pub fn with_backend(config: EngineConfig, backend: Arc<dyn ComputeBackend>) -> Result<Self> {
        config.validate()?;
        Ok(TensorProductEngine { config, backend })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn backend(&self) -> &dyn ComputeBackend {
        self.backend.as_ref()
    }

    /// Reject an operand that exceeds the configured maximum dimension.
    pub fn check_bounds(&self, operand: &'static str, matrix: &Matrix) -> Result<()> {
        if matrix.shape().fits_within(self.config.max_dim) {
            Ok(())
        } else {
            Err(TensorError::DimensionExceeded {
                operand,
                rows: matrix.rows(),
                cols: matrix.cols(),
                max_dim: self.config.max_dim,
            })
        }
    }

    /// Kronecker product `lhs ⊗ rhs`.
    pub fn product(&self, lhs: &Matrix, rhs: &Matrix) -> Result<Matrix> {
        self.check_bounds("left operand", lhs)?;
        self.check_bounds("right operand", rhs)?;

        tracing::info!(
            lhs = %lhs.shape(),
            rhs = %rhs.shape(),
            workers = self.config.workers,
            backend = self.backend.name(),
            "computing kronecker product"
        );
        let out = lhs.kron(rhs, self.backend.as_ref())?;
        tracing::debug!(output = %out.shape(), "kronecker product complete");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn m(rows: Vec<Vec<i32>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn engine() -> TensorProductEngine {
        TensorProductEngine::new(EngineConfig::default()).unwrap()
    }

    fn random_matrix(rng: &mut StdRng, max_side: usize) -> Matrix {
        let rows = rng.gen_range(1..=max_side);
        let cols = rng.gen_range(1..=max_side);
        let data = (0..rows * cols).map(|_| rng.gen_range(-50..=50)).collect();
        Matrix::new(data, Shape::new(rows, cols))
    }

    #[test]
    fn test_end_to_end_2x2() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![0, 5], vec![6, 7]]);
        let c = engine().product(&a, &b).unwrap();
        assert_eq!(
            c,
            m(vec![
                vec![0, 5, 0, 10],
                vec![6, 7, 12, 14],
                vec![0, 15, 0, 20],
                vec![18, 21, 24, 28],
            ])
        );
    }

    #[test]
    fn test_scalar_left_operand_scales() {
        let a = m(vec![vec![2]]);
        let b = m(vec![vec![1, 2], vec![3, 4]]);
        let c = engine().product(&a, &b).unwrap();
        assert_eq!(c, m(vec![vec![2, 4], vec![6, 8]]));
    }

    #[test]
    fn test_definition_holds_for_random_operands() {
        let mut rng = StdRng::seed_from_u64(7);
        let engine = engine();
        for _ in 0..50 {
            let a = random_matrix(&mut rng, 6);
            let b = random_matrix(&mut rng, 6);
            let c = engine.product(&a, &b).unwrap();
            assert_eq!(c.rows(), a.rows() * b.rows());
            assert_eq!(c.cols(), a.cols() * b.cols());
            for i in 0..a.rows() {
                for j in 0..a.cols() {
                    for k in 0..b.rows() {
                        for l in 0..b.cols() {
                            assert_eq!(
                                c.get(i * b.rows() + k, j * b.cols() + l),
                                Some(a.row(i)[j] * b.row(k)[l])
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_identity_scaling() {
        let mut rng = StdRng::seed_from_u64(11);
        for v in [-3, 0, 1, 9] {
            let b = random_matrix(&mut rng, 5);
            let c = engine().product(&m(vec![vec![v]]), &b).unwrap();
            let expected: Vec<i32> = b.data().iter().map(|x| x * v).collect();
            assert_eq!(c.shape(), b.shape());
            assert_eq!(c.data(), expected.as_slice());
        }
    }

    #[test]
    fn test_zero_element_zeroes_block_and_stripe() {
        let a = m(vec![vec![1, 0], vec![2, 3]]);
        let b = m(vec![vec![4, 5, 6], vec![0, 0, 0]]);
        let c = engine().product(&a, &b).unwrap();

        // Block (0, 1) comes from a[0][1] == 0.
        for k in 0..2 {
            for l in 0..3 {
                assert_eq!(c.get(k, 3 + l), Some(0));
            }
        }
        // Row 1 of b is zero, so every output row 2*i + 1 is zero.
        assert!(c.row(1).iter().all(|&v| v == 0));
        assert!(c.row(3).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_result_independent_of_worker_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = random_matrix(&mut rng, 7);
        let b = random_matrix(&mut rng, 4);
        let reference = TensorProductEngine::new(EngineConfig::new(1, 16))
            .unwrap()
            .product(&a, &b)
            .unwrap();
        for workers in 2..=8 {
            let engine = TensorProductEngine::new(EngineConfig::new(workers, 16)).unwrap();
            assert_eq!(engine.product(&a, &b).unwrap(), reference, "workers={}", workers);
        }
    }

    #[test]
    fn test_bounds_are_enforced() {
        let engine = TensorProductEngine::new(EngineConfig::new(3, 2)).unwrap();
        let ok = m(vec![vec![1, 2], vec![3, 4]]);
        let wide = m(vec![vec![1, 2, 3]]);

        let err = engine.product(&wide, &ok).unwrap_err();
        assert!(matches!(
            err,
            TensorError::DimensionExceeded { operand: "left operand", rows: 1, cols: 3, max_dim: 2 }
        ));
        let err = engine.product(&ok, &wide).unwrap_err();
        assert!(matches!(err, TensorError::DimensionExceeded { operand: "right operand", .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(TensorProductEngine::new(EngineConfig::new(0, 10)).is_err());
        assert!(TensorProductEngine::new(EngineConfig::new(1, 0)).is_err());
    }

    #[test]
    fn test_overflow_is_an_error() {
        let a = m(vec![vec![i32::MAX]]);
        let b = m(vec![vec![2]]);
        assert!(matches!(
            engine().product(&a, &b),
            Err(TensorError::Overflow { .. })
        ));
    }
}
