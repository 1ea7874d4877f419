//! CLI interface for the resume scanner

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-scan")]
#[command(about = "Upload a resume to the analysis service and review its feedback")]
#[command(long_about = "Validate a PDF resume, send it with an optional job description to the resume analysis service, and show the score and feedback")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the service base URL (e.g. http://localhost:8000)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume, optionally against a job description
    Analyze {
        /// Path to the resume (PDF, max 5MB)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a job description text file (max 1000 characters)
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline (max 1000 characters)
        #[arg(long)]
        job_text: Option<String>,

        /// Show the feedback item at this position in full
        #[arg(short, long)]
        expand: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save resume-analysis-report.txt, optionally into this directory
        #[arg(long, num_args = 0..=1, value_name = "DIR")]
        report: Option<Option<PathBuf>>,
    },

    /// Check whether the analysis service is up
    Health,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
