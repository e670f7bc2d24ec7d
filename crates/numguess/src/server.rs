//! `NumguessServer` builder and server loop.
//!
//! Ties the layers together: HTTP listener → router → handlers → game
//! center → session store, plus a background task that expires idle
//! sessions.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use numguess_session::{GameCenter, MemorySessionStore, SessionConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::router::{router, SharedCenter};
use crate::NumguessError;

/// Builder for configuring and starting a Numguess server.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run() -> Result<(), numguess::NumguessError> {
/// use numguess::NumguessServer;
///
/// let server = NumguessServer::builder()
///     .bind("0.0.0.0:4567")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct NumguessServerBuilder {
    bind_addr: String,
    session_config: SessionConfig,
    sweep_interval: Duration,
}

impl NumguessServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:4567".to_string(),
            session_config: SessionConfig::default(),
            sweep_interval: Duration::from_secs(60),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the session configuration.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Sets how often idle sessions are swept. `Duration::ZERO` disables
    /// sweeping; stale ids are then only dropped when presented again.
    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Binds the listener and builds the server.
    ///
    /// # Errors
    /// Returns [`NumguessError::Io`] if the address can't be bound.
    pub async fn build(self) -> Result<NumguessServer, NumguessError> {
        let listener = TcpListener::bind(&self.bind_addr).await?;
        let center = Arc::new(GameCenter::new(MemorySessionStore::new(
            self.session_config,
        )));

        Ok(NumguessServer {
            listener,
            center,
            sweep_interval: self.sweep_interval,
        })
    }
}

impl Default for NumguessServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Numguess server.
///
/// Call [`run()`](Self::run) to start serving.
pub struct NumguessServer {
    listener: TcpListener,
    center: SharedCenter,
    sweep_interval: Duration,
}

impl NumguessServer {
    /// Creates a new builder.
    pub fn builder() -> NumguessServerBuilder {
        NumguessServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Returns the game center this server serves.
    pub fn center(&self) -> &SharedCenter {
        &self.center
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), NumguessError> {
        self.run_until(std::future::pending()).await
    }

    /// Serves requests until `shutdown` completes, then drains in-flight
    /// requests and returns.
    pub async fn run_until(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), NumguessError> {
        let sweeper = (!self.sweep_interval.is_zero()).then(|| {
            tokio::spawn(sweep_idle_sessions(
                Arc::clone(&self.center),
                self.sweep_interval,
            ))
        });

        let app = router(Arc::clone(&self.center))
            .layer(TraceLayer::new_for_http());

        tracing::info!(addr = ?self.listener.local_addr().ok(), "Numguess server running");
        let served = axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        if let Some(sweeper) = sweeper {
            sweeper.abort();
        }
        tracing::info!("Numguess server stopped");
        served.map_err(NumguessError::from)
    }
}

/// Periodically expires idle sessions. Runs until aborted.
async fn sweep_idle_sessions(center: SharedCenter, every: Duration) {
    let mut interval = tokio::time::interval(every);
    loop {
        interval.tick().await;
        let expired = center.store().expire_idle();
        if !expired.is_empty() {
            tracing::debug!(count = expired.len(), "swept idle sessions");
        }
    }
}
