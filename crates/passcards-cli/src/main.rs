//! passcards CLI - manage password cards from the terminal

mod cli;
mod commands;
mod error;

use clap::Parser;
use passcards_core::clipboard::SystemClipboard;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::open_sync;
use crate::commands::completions::run_completions;
use crate::commands::copy::run_copy;
use crate::commands::delete::run_delete;
use crate::commands::edit::{edit_changes, run_edit};
use crate::commands::list::run_list;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
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
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("passcards=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let sync = open_sync(cli.api_url.as_deref()).await?;

    match cli.command {
        Commands::List { json } => run_list(&sync, json)?,
        Commands::Search { term, json } => run_search(&sync, &term, json)?,
        Commands::Show { id, reveal, json } => run_show(&sync, &id, reveal, json)?,
        Commands::Copy { id } => {
            let mut clipboard = SystemClipboard::persistent()?;
            run_copy(&sync, &id, &mut clipboard)?;
        }
        Commands::Add {
            name,
            url,
            username,
            password,
        } => run_add(&sync, name, url, username, password).await?,
        Commands::Edit {
            id,
            name,
            url,
            username,
            password,
        } => {
            let changes = edit_changes(name, url, username, password);
            run_edit(&sync, &id, changes).await?;
        }
        Commands::Delete { id } => run_delete(&sync, &id).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
