//! `kp-tensor` - Parallel Kronecker product engine for integer matrices.
//!
//! This crate provides:
//! - A row-major `Matrix` of `i32` and its `Shape`
//! - The block addressing scheme (`BlockLayout`) and a block-major output
//!   arena (`BlockArena`) that hands each worker an exclusive region
//! - Static partitioning of the work into contiguous `WorkRange`s
//! - A `ComputeBackend` trait and a threaded `CpuBackend`
//! - `TensorProductEngine`, which enforces the configured bounds

pub mod backend;
pub mod config;
pub mod cpu;
pub mod engine;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod partition;
pub mod shape;
pub mod storage;

// Re-export primary types at the crate root for convenience.
pub use backend::ComputeBackend;
pub use config::{EngineConfig, DEFAULT_MAX_DIM, DEFAULT_WORKERS};
pub use cpu::CpuBackend;
pub use engine::TensorProductEngine;
pub use error::{Result, TensorError};
pub use layout::BlockLayout;
pub use matrix::Matrix;
pub use partition::{partition, WorkRange};
pub use shape::Shape;
pub use storage::{BlockArena, BlockRegion};
