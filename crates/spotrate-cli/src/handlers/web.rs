//! Web command handler.

use std::path::{Path, PathBuf};

use anyhow::Result;
use spotrate_axum::{ServerConfig, start_server};
use spotrate_core::paths::ResolvedPaths;

/// Directories probed for the web client when `--static-dir` is not given.
const STATIC_DIR_CANDIDATES: [&str; 2] = ["./web", "./dist"];

/// Options of the `web` command.
#[derive(Debug, Clone)]
pub struct WebOptions {
    pub port: u16,
    pub api_only: bool,
    pub static_dir: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
}

/// Build the server configuration for the given paths and options.
pub fn server_config(paths: &ResolvedPaths, opts: WebOptions) -> ServerConfig {
    let mut config = ServerConfig::from_paths(paths).with_port(opts.port);

    // api-only flag > explicit flag > default location > API-only
    if !opts.api_only {
        let static_dir = opts.static_dir.or_else(|| {
            STATIC_DIR_CANDIDATES
                .iter()
                .map(Path::new)
                .find(|p| p.join("index.html").exists())
                .map(Path::to_path_buf)
        });
        if let Some(dir) = static_dir {
            config = config.with_static_dir(dir);
        }
    }

    if !opts.allowed_origins.is_empty() {
        config = config.with_allowed_origins(opts.allowed_origins);
    }

    config
}

/// Serve until interrupted.
pub async fn execute(paths: &ResolvedPaths, opts: WebOptions) -> Result<()> {
    let port = opts.port;
    let config = server_config(paths, opts);

    println!();
    if let Some(ref dir) = config.static_dir {
        println!("  spotrate web server starting...");
        println!();
        println!("  Serving UI from: {}", dir.display());
        println!("  Local:   http://localhost:{port}");
        println!("  Network: http://0.0.0.0:{port}");
    } else {
        println!("  spotrate web server starting (API only)...");
        println!();
        println!("  API:     http://localhost:{port}/api/locations");
        println!();
        println!("  Tip: Use --static-dir to serve the web client");
    }
    println!("  Uploads: {}", config.uploads_dir.display());
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
