use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "toctree")]
#[command(about = "Heading-tree table of contents generator for static sites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a table of contents from a document
    #[command(alias = "g")]
    Generate {
        /// Rendered HTML document to scan for headings
        #[arg(short, long, value_name = "FILE", conflicts_with = "headings")]
        input: Option<PathBuf>,

        /// JSON heading list produced by the build pipeline
        #[arg(long, value_name = "FILE")]
        headings: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Minimum heading depth to include
        #[arg(long, value_name = "DEPTH")]
        from_heading: Option<usize>,

        /// Maximum heading depth to include
        #[arg(long, value_name = "DEPTH")]
        to_heading: Option<usize>,

        /// Indentation depth control (accepted for config compatibility)
        #[arg(long, value_name = "DEPTH")]
        indent_depth: Option<usize>,

        /// Exclude headings matching this pattern (repeatable)
        #[arg(short, long, value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Wrap the list in a collapsible, default-open container
        #[arg(short = 'd', long, default_value_t = false)]
        disclosure: bool,
    },

    /// Extract headings from a rendered document as JSON
    #[command(alias = "x")]
    Headings {
        /// Rendered HTML document to scan
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long, default_value_t = false)]
        pretty: bool,
    },
}
