use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "basec-cmd")]
#[command(about = "Command-line utility for basec string and array operations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the byte offset of a needle in a text
    Find {
        /// Text to search
        text: String,

        /// Byte sequence to look for
        needle: String,

        /// Report every non-overlapping occurrence instead of the first
        #[arg(short, long)]
        all: bool,
    },

    /// Replace every occurrence of a pattern and print the result
    Replace {
        /// Source text
        text: String,

        /// Pattern to replace
        find: String,

        /// Replacement text (may be empty)
        replacement: String,
    },

    /// Split a text on a delimiter and print one segment per line
    Split {
        /// Source text
        text: String,

        /// Delimiter between segments
        delimiter: String,
    },

    /// Run the build, replace and split walkthrough
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find { text, needle, all } => commands::find::run(text, needle, all),
        Commands::Replace {
            text,
            find,
            replacement,
        } => commands::replace::run(text, find, replacement),
        Commands::Split { text, delimiter } => commands::split::run(text, delimiter),
        Commands::Demo => commands::demo::run(),
    }
}
