use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lclip")]
#[command(about = "Persistent, labeled clipboard for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Clipboard file to use instead of ~/.lclip.json
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the payload stored under LABEL
    #[command(alias = "g")]
    Get {
        /// Label to look up
        label: String,
    },

    /// Store the contents of FILEs (or stdin) under LABEL
    #[command(alias = "s")]
    Set {
        /// Label to bind
        label: String,

        /// Input files, concatenated in order; stdin when omitted
        #[arg(required = false)]
        files: Vec<PathBuf>,
    },

    /// List all labels
    #[command(alias = "ls")]
    Labels,

    /// Delete one or more labels
    #[command(alias = "rm")]
    Delete {
        /// Labels to remove
        #[arg(required = true, num_args = 1..)]
        labels: Vec<String>,
    },

    /// Print the clipboard file in use
    Path,
}
