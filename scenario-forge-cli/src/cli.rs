//! Command-line interface definitions for `scenario-forge`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use serde::Serialize;

/// Where the generated document goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Write `<out_dir>/<file_name>`.
    File,
    /// Print the document to standard output.
    Stdout,
}

/// Parsed CLI arguments for `scenario-forge`.
#[derive(Debug, Parser)]
#[command(name = "scenario-forge")]
#[command(about = "Generate Quickmail FERPA feature files")]
#[command(version)]
pub struct Args {
    /// Settings file (TOML). Defaults to `scenario-forge.toml` when present.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Output directory for the feature file.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Feature file name.
    #[arg(long, value_name = "name")]
    pub file_name: Option<String>,
    /// Feature title.
    #[arg(long)]
    pub title: Option<String>,
    /// Tag to add (repeat for multiple tags; replaces configured tags).
    #[arg(long = "tag", value_name = "tag")]
    pub tags: Vec<String>,
    /// Number given to the first generated scenario.
    #[arg(long, value_name = "n", default_value_t = 0)]
    pub first_scenario: u64,
    /// Output destination.
    #[arg(long, value_enum, default_value_t = OutputMode::File)]
    pub output: OutputMode,
}

/// Values given explicitly on the command line, layered last.
#[derive(Debug, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl Args {
    /// The settings layer contributed by explicit flags.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            out_dir: self.out_dir.clone(),
            file_name: self.file_name.clone(),
            title: self.title.clone(),
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Args, OutputMode};
    use clap::Parser;

    #[test]
    fn defaults_write_a_file() {
        let args = Args::try_parse_from(["scenario-forge"]).expect("no flags parse");
        assert_eq!(args.output, OutputMode::File);
        assert_eq!(args.first_scenario, 0);
        assert!(args.tags.is_empty());
    }

    #[test]
    fn repeated_tags_accumulate() {
        let args = Args::try_parse_from([
            "scenario-forge",
            "--tag",
            "block_quickmail",
            "--tag",
            "javascript",
            "--output",
            "stdout",
        ])
        .expect("flags parse");
        assert_eq!(args.tags, ["block_quickmail", "javascript"]);
        assert_eq!(args.output, OutputMode::Stdout);
    }
}
