//! Numguess binary: reads configuration from the environment and serves
//! the game until Ctrl+C or SIGTERM.
//!
//! | Variable                     | Default          |
//! |------------------------------|------------------|
//! | `NUMGUESS_BIND`              | `127.0.0.1:4567` |
//! | `NUMGUESS_IDLE_TIMEOUT_SECS` | `1800`           |
//! | `RUST_LOG`                   | `info,tower_http=debug` |

use std::env;

use numguess::{NumguessError, NumguessServer};
use numguess_session::SessionConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), NumguessError> {
    init_tracing();

    let mut builder = NumguessServer::builder().session_config(session_config());
    if let Ok(addr) = env::var("NUMGUESS_BIND") {
        builder = builder.bind(&addr);
    }

    let server = builder.build().await?;
    tracing::info!(addr = ?server.local_addr().ok(), "listening");
    server.run_until(shutdown_signal()).await
}

fn session_config() -> SessionConfig {
    let mut config = SessionConfig::default();
    if let Ok(raw) = env::var("NUMGUESS_IDLE_TIMEOUT_SECS") {
        match raw.parse() {
            Ok(secs) => config.idle_timeout_secs = secs,
            Err(err) => tracing::warn!(
                value = %raw,
                error = %err,
                "invalid NUMGUESS_IDLE_TIMEOUT_SECS; using default"
            ),
        }
    }
    config
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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
