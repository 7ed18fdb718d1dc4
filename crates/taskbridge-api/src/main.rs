//! taskbridge CLI and interactions endpoint entry point.
//!
//! Binary name: `tbridge`
//!
//! Parses CLI arguments, loads configuration and environment secrets,
//! registers the slash commands, then serves the interactions endpoint
//! until shutdown -- at which point every registered command is
//! deregistered concurrently.

mod cli;
mod http;
mod state;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;
use tokio::task::JoinSet;

use taskbridge_core::command::command_specs;
use taskbridge_infra::chat::ChatClient;
use taskbridge_infra::config::load_config;
use taskbridge_types::chat::RegisteredCommand;
use taskbridge_types::config::BridgeConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions need no config, secrets, or tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tbridge", &mut std::io::stdout());
        return Ok(());
    }

    // Load .env before reading any secrets. A present-but-broken file is a
    // hard error; an absent one is fine.
    if std::path::Path::new(".env").exists() {
        dotenvy::dotenv().context("could not load .env file")?;
    }

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,taskbridge_api=debug,taskbridge_core=debug,taskbridge_infra=debug",
        _ => "trace",
    };
    let enable_otel = matches!(&cli.command, Commands::Serve { otel: true, .. });
    taskbridge_observe::tracing_setup::init_tracing(filter, enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let config = load_config(&cli.config).await;

    match cli.command {
        Commands::CheckConfig => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!();
                println!(
                    "  {} Resolved configuration ({})",
                    console::style("🔍").bold(),
                    console::style(cli.config.display()).cyan()
                );
                println!();
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }

        Commands::Serve { host, port, .. } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    taskbridge_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

/// Register commands, serve the interactions endpoint until shutdown, then
/// deregister everything that was registered.
async fn serve(config: BridgeConfig) -> anyhow::Result<()> {
    let state = AppState::init(&config)?;

    let registered = state
        .chat
        .register_commands(&command_specs())
        .await
        .context("failed to register slash commands")?;

    println!();
    println!(
        "  {} Registered {} slash commands for guild {}",
        console::style("✓").green(),
        registered.len(),
        console::style(&config.chat.guild_id).cyan()
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} taskbridge listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state.clone());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let failures = deregister_commands(Arc::clone(&state.chat), registered).await;
    if failures > 0 {
        tracing::warn!(failures, "some slash commands were not deregistered");
    }

    println!("\n  Server stopped.");
    Ok(())
}

/// Delete every registered command concurrently and join all deletions.
///
/// Individual failures are logged and counted, never silenced; the caller
/// reports the aggregate.
async fn deregister_commands(chat: Arc<ChatClient>, commands: Vec<RegisteredCommand>) -> usize {
    let mut set: JoinSet<Result<(), String>> = JoinSet::new();

    for command in commands {
        let chat = Arc::clone(&chat);
        set.spawn(async move {
            chat.delete_command(&command)
                .await
                .map_err(|e| format!("'{}': {e}", command.name))
        });
    }

    let mut failures = 0;
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                failures += 1;
                tracing::error!(error = %err, "failed to delete slash command");
            }
            Err(err) => {
                failures += 1;
                tracing::error!(error = %err, "command deletion task panicked");
            }
        }
    }
    failures
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
