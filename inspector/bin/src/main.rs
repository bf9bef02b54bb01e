mod di;

use crate::di::create_inspector_module;
use clap::{CommandFactory, Parser};
use inspector_application::{InspectError, InspectOptions, InspectionService};
use shaku::HasComponent;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Quick Parquet file inspector.
///
/// Prints the schema, file and row group metadata, per-column statistics, a
/// data preview and a JUnit test template for the given file.
#[derive(Parser, Debug)]
#[command(name = "parquet-inspect")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Parquet file
    parquet_file: Option<PathBuf>,

    /// Maximum number of rows to show in the data preview
    #[arg(default_value = "20")]
    max_rows: NonZeroUsize,

    /// Also print column chunk details of the first row group
    #[arg(long)]
    chunks: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let Some(path) = cli.parquet_file else {
        // Help output failing to print leaves nothing else to report.
        let _ = Cli::command().print_long_help();
        return ExitCode::FAILURE;
    };

    let options = InspectOptions {
        max_rows: cli.max_rows.get(),
        show_chunks: cli.chunks,
    };
    debug!("Inspecting {} with {:?}", path.display(), options);

    let module = create_inspector_module();
    let service: Arc<dyn InspectionService> = module.resolve();
    let mut out = io::stdout().lock();

    match service.inspect(&path, &options, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&path, err);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(path: &Path, err: InspectError) {
    match err {
        InspectError::NotFound(_) => {
            println!("Error: File not found: {}", path.display());
        }
        other => {
            println!("Error inspecting file: {}", other);
            let trace = anyhow::Error::new(other)
                .context(format!("failed to inspect {}", path.display()));
            eprintln!("{:?}", trace);
        }
    }
}
