//! Command line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain text report
    #[default]
    Text,
    /// HTML fragment
    Html,
    /// Raw result JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "healthaccess")]
#[command(version, about = "Health self-assessments: take, score, and keep results")]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding the results log
    #[arg(long, value_name = "DIR", env = "HEALTHACCESS_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available questionnaires
    List,

    /// Show a questionnaire's questions and options
    Show {
        /// Questionnaire id, e.g. general-health
        id: String,
    },

    /// Take an assessment interactively
    Take {
        id: String,

        /// Save the result to the results log
        #[arg(long)]
        save: bool,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Score a JSON array of answers (null for unanswered)
    Score {
        id: String,

        #[arg(long, value_name = "FILE")]
        answers: PathBuf,

        #[arg(long)]
        save: bool,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Saved results, most recent first
    History {
        /// Show one saved result in full
        #[arg(long)]
        id: Option<i64>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write a JSON backup of the saved results
    Export {
        /// Destination file (default: healthaccess-data-<date>.json)
        file: Option<PathBuf>,
    },

    /// Delete all saved results
    Clear,

    /// Show or change settings
    Config {
        /// How many results to keep
        #[arg(long)]
        max_saved_results: Option<usize>,

        #[arg(long, value_enum)]
        default_format: Option<OutputFormat>,
    },
}
