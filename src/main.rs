//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use mlb_compare::{
    cli::{Commands, MlbCompare},
    commands::{
        compare::{handle_compare, CompareParams},
        interactive::handle_interactive,
        resolve_client_config,
        search::handle_search,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = MlbCompare::parse();

    let log_level = if app.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match app.command {
        Commands::Search {
            query,
            source,
            json,
        } => handle_search(&query.join(" "), resolve_client_config(&source), json).await?,

        Commands::Compare {
            left,
            right,
            source,
            json,
        } => {
            handle_compare(CompareParams {
                left,
                right,
                config: resolve_client_config(&source),
                as_json: json,
                verbose: app.verbose,
            })
            .await?
        }

        Commands::Interactive { source } => {
            handle_interactive(resolve_client_config(&source), app.verbose).await?
        }
    }

    Ok(())
}
