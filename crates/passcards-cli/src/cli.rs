use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "passcards")]
#[command(about = "Manage password cards from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the password-card service (overrides PASSCARDS_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all cards
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search cards by name (case-insensitive)
    Search {
        /// Text to look for in card names; empty lists every card
        #[arg(default_value = "")]
        term: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one card
    Show {
        /// Card ID or unique ID prefix
        id: String,
        /// Print the password in plain text
        #[arg(long)]
        reveal: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy a card's password to the clipboard
    Copy {
        /// Card ID or unique ID prefix
        id: String,
    },
    /// Create a new card
    #[command(alias = "new")]
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Edit an existing card
    Edit {
        /// Card ID or unique ID prefix
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a card
    #[command(alias = "rm")]
    Delete {
        /// Card ID or unique ID prefix
        id: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
