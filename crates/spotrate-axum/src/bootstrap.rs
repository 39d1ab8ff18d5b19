//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use spotrate_core::paths::{DirectoryCreationStrategy, ResolvedPaths, ensure_directory};
use spotrate_core::services::AppCore;
use spotrate_db::{CoreFactory, setup_database};
use tokio::net::TcpListener;
use tracing::info;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded images.
    pub uploads_dir: PathBuf,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config over already resolved paths.
    pub fn from_paths(paths: &ResolvedPaths) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: paths.database_path.clone(),
            uploads_dir: paths.uploads_dir.clone(),
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    /// Directory served under `/images`.
    pub uploads_dir: PathBuf,
}

/// Bootstrap the Axum server: open the database and wire the services.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    info!(
        target: "spotrate.paths",
        database_path = %config.database_path.display(),
        uploads_dir = %config.uploads_dir.display(),
        "Axum bootstrap resolved paths"
    );

    ensure_directory(&config.uploads_dir, DirectoryCreationStrategy::AutoCreate)?;
    let pool = setup_database(&config.database_path).await?;
    let core = Arc::new(CoreFactory::build_app_core(pool, &config.uploads_dir));

    Ok(AxumContext {
        core,
        uploads_dir: config.uploads_dir,
    })
}

/// Start the web server on the configured port and serve until Ctrl+C or
/// SIGTERM.
///
/// If `config.static_dir` is set, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints and images.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(config.clone()).await?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    if config.static_dir.is_some() {
        info!("spotrate web server (with UI) listening on http://{}", addr);
    } else {
        info!("spotrate web server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("spotrate web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
