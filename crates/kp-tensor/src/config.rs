use crate::error::{Result, TensorError};

/// Worker count used when none is configured.
pub const DEFAULT_WORKERS: usize = 3;

/// Largest row or column count accepted for either operand by default.
pub const DEFAULT_MAX_DIM: usize = 1000;

/// Configuration for a [`crate::engine::TensorProductEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of worker threads the product is split across.
    pub workers: usize,
    /// Maximum number of rows, and of columns, of each operand.
    pub max_dim: usize,
}

impl EngineConfig {
    pub fn new(workers: usize, max_dim: usize) -> Self {
        EngineConfig { workers, max_dim }
    }

    /// Check that the configuration can drive a computation.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(TensorError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.max_dim == 0 {
            return Err(TensorError::InvalidConfig(
                "maximum dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            workers: DEFAULT_WORKERS,
            max_dim: DEFAULT_MAX_DIM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = EngineConfig::default();
        assert_eq!(config.workers, 3);
        assert_eq!(config.max_dim, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(EngineConfig::new(0, 10).validate().is_err());
        assert!(EngineConfig::new(2, 0).validate().is_err());
    }
}
