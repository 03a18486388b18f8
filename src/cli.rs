use std::path::PathBuf;

use clap::Parser;

use crate::ops::{DiffAlgorithm, Granularity};

#[derive(Parser)]
#[command(name = "diffprint")]
#[command(version)]
#[command(about = "Render colorized, line-numbered diffs in the terminal")]
#[command(
    long_about = "diffprint compares two files and renders the differences as a colorized, line-numbered terminal diff. Changed regions are shown with surrounding context; regions far apart are separated visually. Rendering options can also be read from a TOML configuration file."
)]
pub struct Cli {
    /// Old version of the file
    #[arg(value_name = "OLD", help = "Path to the old version")]
    pub old: PathBuf,

    /// New version of the file
    #[arg(value_name = "NEW", help = "Path to the new version")]
    pub new: PathBuf,

    /// Name shown in the diff header
    #[arg(short, long, help = "Diff name in the header (defaults to the new path)")]
    pub name: Option<String>,

    /// Unchanged lines shown around each change
    #[arg(long, help = "Number of context lines around each change")]
    pub context: Option<usize>,

    /// Header label for the old version
    #[arg(long, help = "Header label for the old version")]
    pub before: Option<String>,

    /// Header label for the new version
    #[arg(long, help = "Header label for the new version")]
    pub after: Option<String>,

    /// Diff algorithm
    #[arg(long, value_enum, help = "Diff algorithm")]
    pub algorithm: Option<DiffAlgorithm>,

    /// Token size to diff at
    #[arg(long, value_enum, help = "Token size to diff at")]
    pub granularity: Option<Granularity>,

    /// Disable colors in output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    /// Configuration file with default options
    #[arg(long, value_name = "FILE", help = "TOML file with default options")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    pub fn diff_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.new.display().to_string())
    }

    pub fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn validate(&self) -> Result<(), String> {
        for path in [&self.old, &self.new] {
            if !path.exists() {
                return Err(format!("Path does not exist: {}", path.display()));
            }

            if !path.is_file() {
                return Err(format!("Path is not a file: {}", path.display()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_name_defaults_to_new_path() {
        let cli = Cli::parse_from(["diffprint", "a.txt", "b.txt"]);

        assert_eq!(cli.diff_name(), "b.txt");
    }

    #[test]
    fn test_explicit_name_wins() {
        let cli = Cli::parse_from(["diffprint", "a.txt", "b.txt", "--name", "widget"]);

        assert_eq!(cli.diff_name(), "widget");
    }

    #[test]
    fn test_validate_rejects_missing_files() {
        let cli = Cli::parse_from(["diffprint", "/no/such/old.txt", "/no/such/new.txt"]);

        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_value_enums_parse() {
        let cli = Cli::parse_from([
            "diffprint",
            "a.txt",
            "b.txt",
            "--algorithm",
            "patience",
            "--granularity",
            "word",
        ]);

        assert_eq!(cli.algorithm, Some(DiffAlgorithm::Patience));
        assert_eq!(cli.granularity, Some(Granularity::Word));
    }
}
