//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command line configuration for docrefs.
#[derive(Debug, Clone, Parser)]
#[command(name = "docrefs", version, about, long_about = None)]
pub struct Config {
    /// Enable debug logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operation to run.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate and print documentation references from a YAML collection
    Refs {
        /// YAML file with one entity or a list of entities
        input: PathBuf,
    },

    /// Render a markdown file to HTML
    Render {
        /// Markdown file
        input: PathBuf,

        /// Write a preview page here instead of printing the HTML fragment
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview page title (defaults to the input file name)
        #[arg(long)]
        title: Option<String>,

        /// Do not open the preview page in a browser
        #[arg(long)]
        no_open: bool,
    },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns input file of the selected command.
    pub fn input(&self) -> &Path {
        match &self.command {
            Command::Refs { input } | Command::Render { input, .. } => input,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if input file does not exist or is a directory.
    pub fn validate(&self) -> Result<()> {
        let input = self.input();
        if !input.exists() {
            bail!("Input file does not exist: {}", input.display());
        }
        if input.is_dir() {
            bail!("Input path is a directory: {}", input.display());
        }

        Ok(())
    }

    /// Returns preview page title from configuration or input file name.
    pub fn page_title(&self) -> String {
        if let Command::Render {
            title: Some(title), ..
        } = &self.command
        {
            return title.clone();
        }

        self.input()
            .file_stem()
            .and_then(|n| n.to_str())
            .map(String::from)
            .unwrap_or_else(|| "Preview".to_string())
    }
}
