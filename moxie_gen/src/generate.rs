mod template;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::InterfaceDeclaration;

pub use template::mock_file;

/// First line of every generated file
pub const HEADER: &str = "// @generated by moxie. Do not edit.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("`{text}` is not a valid {kind}: {source}")]
    Syntax {
        kind: &'static str,
        text: String,
        #[source]
        source: syn::Error,
    },
    #[error("the error return of method `{method}` is not its last return")]
    MisplacedError { method: String },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders the source of the mock for `interface`.
///
/// The output only depends on `interface` so rendering the same
/// declaration twice yields the same bytes.
pub fn render(interface: &InterfaceDeclaration) -> Result<String, GenerateError> {
    let file = mock_file(interface)?;
    Ok(format!("{HEADER}\n\n{}", prettyplease::unparse(&file)))
}

/// Writes mock files into a directory
#[derive(Debug, Clone)]
pub struct Generator {
    out_dir: PathBuf,
}

/// Outcome of [`Generator::generate`]
#[derive(Debug, Default)]
pub struct Report {
    /// Paths of the written files, in the order of the declarations
    pub generated: Vec<PathBuf>,
    pub failed: Vec<Failure>,
}

#[derive(Debug)]
pub struct Failure {
    pub interface: String,
    pub error: GenerateError,
}

impl Generator {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Generator {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Renders and writes one mock file per declaration.
    ///
    /// A declaration that fails to render or write is recorded in the
    /// report and the remaining ones are still generated. Existing
    /// files are overwritten.
    pub fn generate(&self, interfaces: &[InterfaceDeclaration]) -> Report {
        let mut report = Report::default();

        for interface in interfaces {
            match self.generate_one(interface) {
                Ok(path) => {
                    tracing::info!("generated mock file {}", path.display());
                    report.generated.push(path);
                }
                Err(error) => {
                    tracing::error!(interface = %interface.name, "failed to generate mock: {error}");
                    report.failed.push(Failure {
                        interface: interface.name.clone(),
                        error,
                    });
                }
            }
        }

        report
    }

    fn generate_one(&self, interface: &InterfaceDeclaration) -> Result<PathBuf, GenerateError> {
        let code = render(interface)?;
        let path = self.out_dir.join(interface.file_name());
        match fs::write(&path, code) {
            Ok(()) => Ok(path),
            Err(source) => Err(GenerateError::Write { path, source }),
        }
    }
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
