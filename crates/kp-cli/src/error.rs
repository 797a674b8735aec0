use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] kp_io::MatrixIoError),
    #[error(transparent)]
    Tensor(#[from] kp_tensor::TensorError),
    #[error("failed to write to stdout: {0}")]
    Stdout(#[from] std::io::Error),
}
