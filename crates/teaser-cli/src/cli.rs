//! CLI argument parsing.

use crate::error::{CliError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Teaser - anonymized investment teasers from private company documents.
#[derive(Debug, Parser)]
#[command(name = "teaser")]
#[command(version, about, long_about = None)]
#[command(group = clap::ArgGroup::new("input").required(true).args(["file", "folder"]))]
pub struct Cli {
    /// Process a single source file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Process every supported file in a folder (.md, .pdf, .docx, .xlsx)
    #[arg(short = 'F', long)]
    pub folder: Option<PathBuf>,

    /// Directory for generated decks and citation reports
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Extensions picked up from a batch folder.
pub const BATCH_EXTENSIONS: [&str; 4] = ["md", "pdf", "docx", "xlsx"];

impl Cli {
    /// Resolve the input list: one explicit file, or every supported file in
    /// the batch folder, in name order.
    pub fn gather_inputs(&self) -> Result<Vec<PathBuf>> {
        if let Some(file) = &self.file {
            return Ok(vec![file.clone()]);
        }
        let folder = self.folder.as_ref().expect("clap guarantees one input mode");

        let mut inputs: Vec<PathBuf> = std::fs::read_dir(folder)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| BATCH_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                    .unwrap_or(false)
            })
            .collect();
        inputs.sort();

        if inputs.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "no supported files in {}",
                folder.display()
            )));
        }
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_mode() {
        let cli = Cli::parse_from(["teaser", "--file", "Acme-OnePager.md"]);
        assert_eq!(cli.file, Some(PathBuf::from("Acme-OnePager.md")));
        assert!(cli.folder.is_none());
    }

    #[test]
    fn test_folder_mode() {
        let cli = Cli::parse_from(["teaser", "--folder", "inbox", "--out-dir", "out"]);
        assert_eq!(cli.folder, Some(PathBuf::from("inbox")));
        assert_eq!(cli.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["teaser"]).is_err());
    }

    #[test]
    fn test_file_and_folder_conflict() {
        assert!(Cli::try_parse_from(["teaser", "--file", "a.md", "--folder", "b"]).is_err());
    }

    #[test]
    fn test_gather_inputs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.md", "ignore.png", "c.XLSX", "notes"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }
        let cli = Cli::parse_from(["teaser", "--folder", dir.path().to_str().unwrap()]);

        let inputs = cli.gather_inputs().unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.md", "b.pdf", "c.XLSX"]);
    }

    #[test]
    fn test_gather_inputs_empty_folder_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from(["teaser", "--folder", dir.path().to_str().unwrap()]);
        assert!(cli.gather_inputs().is_err());
    }

    #[test]
    fn test_gather_inputs_single_file_passthrough() {
        let cli = Cli::parse_from(["teaser", "--file", "Acme-OnePager.md"]);
        let inputs = cli.gather_inputs().unwrap();
        assert_eq!(inputs, vec![PathBuf::from("Acme-OnePager.md")]);
    }
}
