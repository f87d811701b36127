use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use moxie_cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(error) => {
            tracing::error!("cannot determine the working directory: {error}");
            return ExitCode::FAILURE;
        }
    };

    match moxie_cli::run(&args, &dir) {
        Ok(summary) => {
            tracing::debug!(
                files = summary.files,
                skipped = summary.skipped_files,
                failed = summary.failed_interfaces,
                "generated {} mock files",
                summary.generated.len()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
