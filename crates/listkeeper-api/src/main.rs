//! Listkeeper web server entry point.
//!
//! Binary name: `listkeeper`
//!
//! Parses CLI arguments, loads configuration, initializes tracing, then
//! serves the list application or runs a utility command.

mod cli;
mod http;
mod state;
mod sweeper;

use std::time::Duration;

use clap::Parser;
use clap_complete::generate;
use tokio_util::sync::CancellationToken;

use listkeeper_infra::config::{load_config, resolve_config_path};
use listkeeper_observe::tracing_setup::{
    TracingOptions, filter_for_verbosity, init_tracing, shutdown_tracing,
};
use listkeeper_types::config::AppConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "listkeeper", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = resolve_config_path(cli.config.as_deref());
    let loaded = load_config(&config_path).await;
    let mut config = loaded.config;

    init_tracing(&TracingOptions {
        json: config.logging.json,
        otel: config.logging.otel,
        default_filter: filter_for_verbosity(cli.verbose, cli.quiet).to_string(),
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let result = match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Commands::Config => print_config(config),
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.server.bind_addr();
    let purge_every = Duration::from_secs(config.session.purge_interval_secs.max(1));
    let max_idle = Duration::from_secs(config.session.idle_timeout_secs);

    let state = AppState::init(config)?;

    let cancel = CancellationToken::new();
    let sweeper = sweeper::spawn_sweeper(
        state.list_service.clone(),
        purge_every,
        max_idle,
        cancel.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    println!(
        "  {} Listkeeper listening on {}",
        console::style("✔").green().bold(),
        console::style(format!("http://{addr}/lists")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cancel.cancel();
    if let Err(e) = sweeper.await {
        tracing::warn!(error = %e, "session sweeper ended abnormally");
    }

    println!("\n  Server stopped.");
    Ok(())
}

/// Print the effective configuration as TOML.
fn print_config(config: AppConfig) -> anyhow::Result<()> {
    print!("{}", render_config(config)?);
    Ok(())
}

fn render_config(mut config: AppConfig) -> anyhow::Result<String> {
    if config.session.secret.is_some() {
        config.session.secret = Some("<redacted>".to_string());
    }
    Ok(toml::to_string_pretty(&config)?)
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_redacts_secret() {
        let mut config = AppConfig::default();
        config.session.secret = Some("hunter2".to_string());

        let rendered = render_config(config).unwrap();

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("secret = \"<redacted>\""));
        assert!(rendered.contains("port = 4567"));
    }

    #[test]
    fn test_render_config_without_secret_omits_it() {
        let rendered = render_config(AppConfig::default()).unwrap();
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[session]"));
    }
}
