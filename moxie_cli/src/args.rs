use std::path::PathBuf;

use clap::Parser;

/// Generates mock implementations of the traits in Rust source files
#[derive(Parser, Debug, Clone)]
#[command(name = "moxie", version, long_about = None)]
pub struct Args {
    /// Source files to generate mocks for [default: every `.rs` file in
    /// the working directory]
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory the mock files are written to
    #[arg(short, long, value_name = "DIR", env = "MOXIE_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Log more (-v for debug, -vv for trace); `RUST_LOG` takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Filter used when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["moxie"]).unwrap();
        assert!(args.files.is_empty());
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn files_and_flags() {
        let args =
            Args::try_parse_from(["moxie", "-vv", "-o", "mocks", "a.rs", "b.rs"]).unwrap();
        assert_eq!(args.files, vec![PathBuf::from("a.rs"), PathBuf::from("b.rs")]);
        assert_eq!(args.out_dir, PathBuf::from("mocks"));
        assert_eq!(args.log_level(), "trace");
    }

    #[test]
    fn version_is_handled_by_clap() {
        let error = Args::try_parse_from(["moxie", "--version"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn command_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
