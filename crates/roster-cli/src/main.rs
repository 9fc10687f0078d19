//! roster CLI - Manage a user roster from the command line
//!
//! A thin front-end over the roster-core synchronizer: list, create, update,
//! and delete users held by a remote REST directory.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::list::run_list;
use crate::commands::show::run_show;
use crate::commands::update::run_update;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roster=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url;

    match cli.command {
        Commands::List { json } => run_list(json, api_url).await,
        Commands::Show { id } => run_show(&id, api_url).await,
        Commands::Add {
            full_name,
            email,
            phone,
        } => run_add(&full_name, &email, &phone, api_url).await,
        Commands::Update {
            id,
            full_name,
            email,
            phone,
        } => {
            run_update(
                &id,
                full_name.as_deref(),
                email.as_deref(),
                phone.as_deref(),
                api_url,
            )
            .await
        }
        Commands::Delete { id, yes } => run_delete(&id, yes, api_url).await,
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref()),
    }
}
