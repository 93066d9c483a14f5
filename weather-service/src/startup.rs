//! Application startup and lifecycle management.

use crate::config::WeatherConfig;
use crate::handlers;
use crate::services::{OpenMeteo, WeatherProvider};
use axum::{middleware, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state. The provider client is the only shared
/// resource; it is internally synchronized, so requests need no further
/// coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: WeatherConfig,
    pub provider: Arc<dyn WeatherProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: WeatherConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn WeatherProvider> =
            Arc::new(OpenMeteo::new(config.provider.clone()).map_err(|e| {
                tracing::error!("Failed to initialize provider client: {}", e);
                AppError::ConfigError(anyhow::anyhow!(e))
            })?);

        let state = AppState {
            config: config.clone(),
            provider,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/geocode", get(handlers::geocode))
            .route("/forecast", get(handlers::forecast))
            .layer(middleware::from_fn(metrics_middleware))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = config.common.listen_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped or a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
