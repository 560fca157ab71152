pub mod list;
pub mod protocol;
pub mod scenarios;

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, ValueEnum};
use zkgas::Mode;

/// Report format written to stdout or `--output`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Proof-size parameters shared by every pricing command.
#[derive(Args, Clone, Debug)]
pub struct SizeArgs {
    /// Bit-width of each range-proven value (vector length n)
    #[arg(short = 'n', long = "bits", env = "ZKGAS_N", default_value_t = 64)]
    pub n: u32,
    /// Number of aggregated values (m)
    #[arg(short = 'm', long = "values", env = "ZKGAS_M", default_value_t = 4)]
    pub m: u32,
    /// Reject aggregation sizes that would produce negative operation counts
    #[arg(long)]
    pub strict: bool,
}

impl SizeArgs {
    pub fn mode(&self) -> Mode {
        if self.strict {
            Mode::Strict
        } else {
            Mode::Permissive
        }
    }
}

impl Default for SizeArgs {
    fn default() -> Self {
        Self {
            n: 64,
            m: 4,
            strict: false,
        }
    }
}

/// Rendering options shared by every pricing command.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// List every term under its operation kind (text format)
    #[arg(short, long)]
    pub verbose: bool,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print `error: <msg>` and exit with status 1.
pub fn fail(msg: impl Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

/// Write `report` to `output`, or to stdout when no path is given.
pub fn write_output(report: &str, output: Option<&Path>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, report)?;
            eprintln!("Wrote report -> {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}

/// [`write_output`], exiting on I/O failure.
pub fn emit(report: &str, output: Option<&Path>) {
    if let Err(e) = write_output(report, output) {
        let target = output.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
        fail(format!("cannot write '{}': {}", target, e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_output("TOTAL: 12,150\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "TOTAL: 12,150\n");
    }

    #[test]
    fn test_write_output_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        assert!(write_output("x", Some(&path)).is_err());
    }

    #[test]
    fn test_size_args_mode() {
        let mut size = SizeArgs::default();
        assert_eq!(size.mode(), Mode::Permissive);
        size.strict = true;
        assert_eq!(size.mode(), Mode::Strict);
    }
}
