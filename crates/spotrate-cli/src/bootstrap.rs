//! CLI bootstrap - the composition root.
//!
//! The database pool, repository and blob store are created here; command
//! handlers only see the composed `AppCore`.

use std::path::Path;

use anyhow::Result;
use spotrate_core::paths::{DirectoryCreationStrategy, ResolvedPaths, ensure_directory};
use spotrate_core::services::AppCore;
use spotrate_db::{CoreFactory, setup_database};
use tracing::debug;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Every path the CLI touches.
    pub paths: ResolvedPaths,
}

impl CliConfig {
    /// Resolve paths, preferring an explicit data directory.
    pub fn with_data_dir(data_dir: Option<&Path>) -> Result<Self> {
        Ok(Self {
            paths: ResolvedPaths::resolve(data_dir)?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Paths the context was built over.
    pub paths: ResolvedPaths,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Open the database and wire the services.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let CliConfig { paths } = config;
    debug!(
        target: "spotrate.paths",
        database_path = %paths.database_path.display(),
        uploads_dir = %paths.uploads_dir.display(),
        "CLI bootstrap resolved paths"
    );

    ensure_directory(&paths.uploads_dir, DirectoryCreationStrategy::AutoCreate)?;
    let pool = setup_database(&paths.database_path).await?;
    let app = CoreFactory::build_app_core(pool, &paths.uploads_dir);

    Ok(CliContext { app, paths })
}

/// Build a context over a throwaway data directory.
#[cfg(test)]
pub(crate) async fn test_context(root: &Path) -> CliContext {
    bootstrap(CliConfig {
        paths: ResolvedPaths::under(root),
    })
    .await
    .unwrap()
}
