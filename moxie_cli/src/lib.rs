//! The `moxie` command.
//!
//! Every file is extracted and every mockable trait in it is written to
//! `<out-dir>/<lower-cased trait name>_mock.rs`. Unreadable files and
//! traits that cannot be mocked are logged and skipped; only bad
//! arguments stop the run.

mod args;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use moxie_gen::Generator;
use thiserror::Error;

pub use args::Args;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("only .rs files are supported, got {}", .0.display())]
    NotRust(PathBuf),
    #[error("failed to list {}: {source}", .dir.display())]
    Discover {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a run did
#[derive(Debug, Default)]
pub struct Summary {
    pub files: usize,
    pub generated: Vec<PathBuf>,
    /// Files that could not be read or parsed
    pub skipped_files: usize,
    /// Traits that were rejected or failed to render or write
    pub failed_interfaces: usize,
}

/// Runs `moxie` with `dir` as the working directory.
///
/// Relative paths in `args` are resolved against the process' working
/// directory, not `dir`; `dir` is only listed when no files are given.
pub fn run(args: &Args, dir: &Path) -> Result<Summary, CliError> {
    let files = source_files(&args.files, dir)?;
    let generator = Generator::new(&args.out_dir);
    let mut summary = Summary {
        files: files.len(),
        ..Summary::default()
    };

    for file in &files {
        tracing::debug!("extracting {}", file.display());
        let source = match moxie_gen::extract_file(file) {
            Ok(source) => source,
            Err(error) => {
                tracing::error!("skipping {}: {error}", file.display());
                summary.skipped_files += 1;
                continue;
            }
        };

        for rejection in &source.rejected {
            tracing::error!(
                interface = %rejection.interface,
                "{}:{}:{}: {}",
                file.display(),
                rejection.line,
                rejection.column,
                rejection.message
            );
        }
        summary.failed_interfaces += distinct_interfaces(&source.rejected);

        let report = generator.generate(&source.interfaces);
        summary.failed_interfaces += report.failed.len();
        summary.generated.extend(report.generated);
    }

    Ok(summary)
}

/// Files to process: `files` when any are given, otherwise every `.rs`
/// file in `dir` sorted by name.
pub fn source_files(files: &[PathBuf], dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !files.is_empty() {
        return match files.iter().find(|file| !is_rust(file)) {
            Some(file) => Err(CliError::NotRust(file.clone())),
            None => Ok(files.to_vec()),
        };
    }

    let discover = |source| CliError::Discover {
        dir: dir.to_owned(),
        source,
    };

    let mut found = vec![];
    for entry in fs::read_dir(dir).map_err(discover)? {
        let entry = entry.map_err(discover)?;
        let path = entry.path();
        if is_rust(&path) && entry.file_type().map_err(discover)?.is_file() {
            found.push(path);
        }
    }
    found.sort();

    tracing::debug!("found {} source files in {}", found.len(), dir.display());
    Ok(found)
}

fn is_rust(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "rs")
}

// one trait can be rejected for several reasons
fn distinct_interfaces(rejected: &[moxie_gen::Rejection]) -> usize {
    let mut names: Vec<_> = rejected.iter().map(|r| r.interface.as_str()).collect();
    names.dedup();
    names.len()
}
