use anyhow::{Context, Result, bail};
use md2notion_config::Config;
use std::{env, path::PathBuf};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let app = md2notion_server::app(&config);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    log::info!("Listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Shut down");
    Ok(())
}

/// Config from the CLI argument, else the default location, else defaults.
fn load_config() -> Result<Config> {
    let args: Vec<String> = env::args().collect();

    let config = match args.len() {
        2 => {
            let path = PathBuf::from(&args[1]);
            let path = Config::expand_path(&path).unwrap_or(path);
            log::info!("Config path: {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?
        }
        1 => {
            log::info!("Config path: {}", Config::config_path().display());
            match Config::load()? {
                Some(config) => config,
                None => {
                    log::info!("No config file found, using defaults");
                    Config::default()
                }
            }
        }
        _ => bail!("Usage: {} [config-path]", args[0]),
    };

    Ok(config)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {e}");
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
    log::info!("Shutdown signal received");
}
