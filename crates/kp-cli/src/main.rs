mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kp_io::Layout;
use kp_tensor::{EngineConfig, TensorProductEngine, DEFAULT_MAX_DIM, DEFAULT_WORKERS};

use crate::error::CliError;

const DEFAULT_OUTPUT: &str = "tensor.out";

#[derive(Parser, Debug)]
#[command(
    name = "kron",
    about = "Kronecker product of two integer matrices",
    long_about = "Reads two whitespace-delimited integer matrices, computes their Kronecker\n\
                  product across a fixed pool of worker threads, and writes the result with\n\
                  every column right-aligned.",
    version
)]
struct Cli {
    /// File holding the left operand
    matrix1: PathBuf,
    /// File holding the right operand
    matrix2: PathBuf,
    /// Where to write the product
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Number of worker threads
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,
    /// Largest row or column count accepted for either input
    #[arg(long, default_value_t = DEFAULT_MAX_DIM)]
    max_dim: usize,
    /// Echo both inputs to stdout before computing
    #[arg(long)]
    print_inputs: bool,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.workers, self.max_dim)
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--print-inputs` output stays clean. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.engine_config();
    let engine = TensorProductEngine::new(config)?;

    let lhs = kp_io::load_matrix(&cli.matrix1, config.max_dim)?;
    let rhs = kp_io::load_matrix(&cli.matrix2, config.max_dim)?;

    if cli.print_inputs {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        kp_io::write_matrix(&mut out, &lhs, Layout::Uniform)?;
        out.write_all(b"\n")?;
        kp_io::write_matrix(&mut out, &rhs, Layout::Uniform)?;
        out.flush()?;
    }

    let product = engine.product(&lhs, &rhs)?;
    kp_io::write_matrix_file(&cli.output, &product)?;

    tracing::info!(
        output = %cli.output.display(),
        shape = %product.shape(),
        "wrote kronecker product"
    );
    Ok(())
}
