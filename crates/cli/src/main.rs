use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_cli::commands::Cli;
use todo_cli::config::DbConfig;
use todo_cli::error::AppResult;
use todo_cli::store;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing (stderr, so stdout carries only the result) ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cli=info,todo_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let kind = err.kind();
            tracing::error!(?kind, error = %err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Build and health-check the pool, run the command against it, then close
/// the pool whether or not the command succeeded.
async fn run(cli: Cli) -> AppResult<String> {
    // --- Configuration ---
    let config = DbConfig::from_env()?;

    // --- Database ---
    let pool = store::connect(&config).await?;

    let result = execute(&pool, &cli).await;

    pool.close().await;
    tracing::debug!("Database connection pool closed");

    result
}

async fn execute(pool: &todo_db::DbPool, cli: &Cli) -> AppResult<String> {
    if cli.migrate {
        todo_db::run_migrations(pool).await?;
        tracing::info!("Database migrations applied");
    }
    cli.command.run(pool, cli.format).await
}
