//! Bugboard CLI: the `bugboard` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            description,
            status,
            priority,
            latency_ms,
            json,
        } => commands::bug::run_add(title, description, status, priority, latency_ms, json).await,

        Commands::List {
            status,
            priority,
            json,
        } => commands::bug::run_list(status, priority, json),

        Commands::Update {
            id,
            title,
            description,
            status,
            priority,
            latency_ms,
            json,
        } => {
            commands::bug::run_update(id, title, description, status, priority, latency_ms, json)
                .await
        }

        Commands::Delete {
            id,
            latency_ms,
            json,
        } => commands::bug::run_delete(id, latency_ms, json).await,

        Commands::Check {
            title,
            description,
            priority,
            status,
            json,
        } => commands::check::run(title, description, priority, status, json),

        Commands::Logs { json } => commands::logs::run(json),
    }
}
