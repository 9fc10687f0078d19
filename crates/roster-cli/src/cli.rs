use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage a user roster backed by a remote directory")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory base URL (overrides ROSTER_API_* environment variables)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single user
    Show {
        /// User ID
        id: String,
    },
    /// Create a new user
    #[command(alias = "new")]
    Add {
        /// Full display name
        full_name: String,
        /// Contact email address
        #[arg(long)]
        email: String,
        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// Update an existing user
    #[command(alias = "edit")]
    Update {
        /// User ID
        id: String,
        /// New full display name
        #[arg(long)]
        full_name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
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
