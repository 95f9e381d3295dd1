//! # HTTP Server
//!
//! Main HTTP server combining the API routes, the info page and the static
//! front-end bundle.

use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::{middleware, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::store::PersonStore;

use super::access_log::access_log;
use super::config::{ConfigError, ServerConfig};
use super::errors::ApiError;
use super::info_routes::info_routes;
use super::person_routes::{person_routes, PhonebookState};

/// Server start-up and serving errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fallback for anything no route or static file matches
pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}

/// HTTP server for the phonebook
pub struct PhonebookServer {
    config: ServerConfig,
    router: Router,
}

impl PhonebookServer {
    /// Create a server over an already opened store
    pub fn new(config: ServerConfig, store: Arc<dyn PersonStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, store: Arc<dyn PersonStore>) -> Router {
        let state = Arc::new(PhonebookState::new(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // Files from the bundle, then the unknown endpoint response
        let static_files = ServeDir::new(&config.static_dir)
            .call_fallback_on_method_not_allowed(true)
            .fallback(unknown_endpoint.into_service());

        Router::new()
            .nest("/api", person_routes(state.clone()))
            .merge(info_routes(state))
            .fallback_service(static_files)
            .layer(middleware::from_fn(access_log))
            .layer(TraceLayer::new_for_http().on_failure(()))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), ServerError> {
        let addrs = self.config.listen_addrs().await?;
        let listener = TcpListener::bind(addrs.as_slice()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), ServerError> {
        tracing::info!(
            addr = %listener.local_addr()?,
            static_dir = %self.config.static_dir.display(),
            store = %self.config.store,
            "phonebook server running"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("phonebook server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
