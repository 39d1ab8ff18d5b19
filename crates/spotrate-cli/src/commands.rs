//! Main commands enum.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (API, uploaded images and web client)
    Web {
        /// Port to serve on
        #[arg(short, long, env = "SPOTRATE_PORT", default_value = "5000")]
        port: u16,
        /// Serve API endpoints only (do not serve the web client)
        #[arg(long)]
        api_only: bool,
        /// Directory containing the web client (defaults to ./web if present)
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Restrict CORS to this origin (repeatable; default allows any)
        #[arg(long = "allowed-origin")]
        allowed_origin: Vec<String>,
    },

    /// List all rated locations, newest first
    List,

    /// Show a single location
    Show {
        /// Location id
        id: String,
    },

    /// Delete a location and its photo
    Remove {
        /// Location id
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show totals per category
    Stats,

    /// List the accepted category labels
    Categories,

    /// Show resolved paths for the data directory, database and uploads
    Paths,
}
